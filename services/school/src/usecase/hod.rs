use campus_domain::user::UserRole;

use crate::domain::repository::UserRepository;
use crate::domain::types::HodSummary;
use crate::error::SchoolError;

pub struct HodHomeUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> HodHomeUseCase<R> {
    pub async fn execute(&self, user_id: i32) -> Result<HodSummary, SchoolError> {
        let hod = self
            .repo
            .find_by_id(user_id)
            .await?
            .ok_or(SchoolError::UserNotFound)?;
        if hod.role() != Ok(UserRole::Hod) {
            return Err(SchoolError::Forbidden);
        }
        let staff_count = self.repo.count_by_role(UserRole::Staff).await?;
        let student_count = self.repo.count_by_role(UserRole::Student).await?;
        Ok(HodSummary {
            hod,
            staff_count,
            student_count,
        })
    }
}
