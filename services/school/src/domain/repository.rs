#![allow(async_fn_in_trait)]

use campus_domain::user::UserRole;

use crate::domain::types::{ProfileChanges, SchoolUser};
use crate::error::SchoolError;

/// Repository for panel accounts.
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<SchoolUser>, SchoolError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<SchoolUser>, SchoolError>;
    /// Returns `false` when no user has `id`.
    async fn update_profile(
        &self,
        id: i32,
        changes: &ProfileChanges,
    ) -> Result<bool, SchoolError>;
    async fn count_by_role(&self, role: UserRole) -> Result<u64, SchoolError>;
}
