//! User domain types.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// School panel user role.
///
/// Stored as a small integer (1 = HOD, 2 = Staff, 3 = Student).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Hod = 1,
    Staff = 2,
    Student = 3,
}

/// Error returned when a stored role value is outside the known set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown user role: {0}")]
pub struct UnknownRole(pub i16);

impl UserRole {
    /// Convert from the stored value. Returns `None` for unknown values.
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            1 => Some(Self::Hod),
            2 => Some(Self::Staff),
            3 => Some(Self::Student),
            _ => None,
        }
    }

    /// Convert to the stored value.
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Where a freshly authenticated user of this role is sent.
    pub fn landing(self) -> Landing {
        match self {
            Self::Hod => Landing::HodHome,
            Self::Staff => Landing::StaffPanel,
            Self::Student => Landing::StudentPanel,
        }
    }
}

impl TryFrom<i16> for UserRole {
    type Error = UnknownRole;

    fn try_from(v: i16) -> Result<Self, Self::Error> {
        u8::try_from(v)
            .ok()
            .and_then(Self::from_u8)
            .ok_or(UnknownRole(v))
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Hod => "HOD",
            Self::Staff => "Staff",
            Self::Student => "Student",
        };
        f.write_str(s)
    }
}

/// Post-login destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landing {
    /// Redirect to the HOD dashboard.
    HodHome,
    /// Placeholder staff page.
    StaffPanel,
    /// Placeholder student page.
    StudentPanel,
}
