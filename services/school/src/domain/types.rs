use chrono::{DateTime, Utc};

use campus_domain::user::{UnknownRole, UserRole};

/// A panel account, authenticated by email.
#[derive(Debug, Clone)]
pub struct SchoolUser {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    /// Raw stored role code; see [`SchoolUser::role`].
    pub role_code: i16,
    /// Path relative to the media root.
    pub profile_pic: Option<String>,
    pub date_joined: DateTime<Utc>,
}

impl SchoolUser {
    pub fn role(&self) -> Result<UserRole, UnknownRole> {
        UserRole::try_from(self.role_code)
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_owned()
    }
}

/// Columns written by a profile update. `None` leaves the stored value as is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileChanges {
    pub first_name: String,
    pub last_name: String,
    pub password_hash: Option<String>,
    pub profile_pic: Option<String>,
}

/// Head-count shown on the HOD landing page.
#[derive(Debug, Clone)]
pub struct HodSummary {
    pub hod: SchoolUser,
    pub staff_count: u64,
    pub student_count: u64,
}
