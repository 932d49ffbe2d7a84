#![allow(async_fn_in_trait)]

use campus_domain::pagination::{Page, PageRequest};
use campus_domain::search::SearchTerm;

use crate::domain::types::{
    Account, NewAccount, Recipe, RecipeFields, ReportCard, StudentRow, SubjectMark,
};
use crate::error::RecordsError;

/// Repository for site accounts.
pub trait AccountRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, RecordsError>;
    /// Fails with [`RecordsError::UsernameTaken`] if the username exists.
    async fn create(&self, account: &NewAccount) -> Result<Account, RecordsError>;
}

/// Repository for recipes.
pub trait RecipeRepository: Send + Sync {
    /// Recipes ordered by id, optionally filtered by name.
    async fn list(&self, search: Option<&SearchTerm>) -> Result<Vec<Recipe>, RecordsError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Recipe>, RecordsError>;
    async fn create(&self, fields: &RecipeFields) -> Result<Recipe, RecordsError>;
    /// Returns `false` when no recipe has `id`.
    async fn update(&self, id: i32, fields: &RecipeFields) -> Result<bool, RecordsError>;
    /// Returns `false` when no recipe has `id`.
    async fn delete(&self, id: i32) -> Result<bool, RecordsError>;
}

/// Repository for the student roster.
pub trait StudentRepository: Send + Sync {
    async fn search(
        &self,
        search: Option<&SearchTerm>,
        page: PageRequest,
    ) -> Result<Page<StudentRow>, RecordsError>;
}

/// Repository for subject marks, keyed by student-id code.
pub trait MarksRepository: Send + Sync {
    async fn student_name(&self, code: &str) -> Result<Option<String>, RecordsError>;
    async fn list_marks(&self, code: &str) -> Result<Vec<SubjectMark>, RecordsError>;
    /// Sum of the student's marks; 0 when there are none.
    async fn total_marks(&self, code: &str) -> Result<i64, RecordsError>;
}

/// Repository for report cards.
pub trait ReportCardRepository: Send + Sync {
    /// Cards ordered by stored rank, each with its student's summed marks.
    async fn list(&self) -> Result<Vec<ReportCard>, RecordsError>;
}
