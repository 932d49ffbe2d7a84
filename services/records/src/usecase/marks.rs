use crate::domain::repository::MarksRepository;
use crate::domain::types::MarkSheet;
use crate::error::RecordsError;

pub struct SeeMarksUseCase<R: MarksRepository> {
    pub repo: R,
}

impl<R: MarksRepository> SeeMarksUseCase<R> {
    /// An unknown code yields an empty sheet with a zero total.
    pub async fn execute(&self, student_code: &str) -> Result<MarkSheet, RecordsError> {
        let student_name = self.repo.student_name(student_code).await?;
        let marks = self.repo.list_marks(student_code).await?;
        let total = self.repo.total_marks(student_code).await?;
        Ok(MarkSheet {
            student_code: student_code.to_owned(),
            student_name,
            marks,
            total,
        })
    }
}
