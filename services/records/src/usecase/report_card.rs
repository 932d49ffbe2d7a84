use crate::domain::repository::ReportCardRepository;
use crate::domain::types::{RankedReportCard, rank_by_total};
use crate::error::RecordsError;

pub struct ListReportCardsUseCase<R: ReportCardRepository> {
    pub repo: R,
}

impl<R: ReportCardRepository> ListReportCardsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<RankedReportCard>, RecordsError> {
        let ranked = rank_by_total(self.repo.list().await?);
        for r in ranked.iter().filter(|r| r.rank_mismatch()) {
            tracing::warn!(
                report_card_id = r.card.id,
                student_id = r.card.student_id,
                stored_rank = r.card.stored_rank,
                implied_rank = r.implied_rank,
                total_marks = r.card.total_marks,
                "report card rank disagrees with total marks"
            );
        }
        Ok(ranked)
    }
}
