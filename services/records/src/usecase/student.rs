use campus_domain::pagination::{Page, PageRequest, STUDENTS_PER_PAGE};
use campus_domain::search::SearchTerm;

use crate::domain::repository::StudentRepository;
use crate::domain::types::StudentRow;
use crate::error::RecordsError;

pub struct SearchStudentsInput {
    pub search: Option<String>,
    /// Raw `page` query value; anything unusable means page 1.
    pub page: Option<String>,
}

pub struct SearchStudentsUseCase<R: StudentRepository> {
    pub repo: R,
}

impl<R: StudentRepository> SearchStudentsUseCase<R> {
    pub async fn execute(
        &self,
        input: SearchStudentsInput,
    ) -> Result<Page<StudentRow>, RecordsError> {
        let term = SearchTerm::parse(input.search.as_deref());
        let page = PageRequest::from_query(STUDENTS_PER_PAGE, input.page.as_deref());
        self.repo.search(term.as_ref(), page).await
    }
}
