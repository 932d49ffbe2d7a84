use campus_records::usecase::report_card::ListReportCardsUseCase;

use crate::helpers::{MockReportCardRepo, report_card};

#[tokio::test]
async fn should_order_by_stored_rank() {
    let uc = ListReportCardsUseCase {
        repo: MockReportCardRepo {
            cards: vec![
                report_card(1, 3, 150),
                report_card(2, 1, 280),
                report_card(3, 2, 210),
            ],
        },
    };

    let ranked = uc.execute().await.unwrap();

    let ids: Vec<i32> = ranked.iter().map(|r| r.card.id).collect();
    assert_eq!(ids, vec![2, 3, 1]);
    assert!(ranked.iter().all(|r| !r.rank_mismatch()));
}

#[tokio::test]
async fn should_flag_stale_stored_rank() {
    let uc = ListReportCardsUseCase {
        repo: MockReportCardRepo {
            cards: vec![report_card(1, 1, 150), report_card(2, 2, 280)],
        },
    };

    let ranked = uc.execute().await.unwrap();

    assert_eq!(ranked[0].card.id, 1);
    assert_eq!(ranked[0].implied_rank, 2);
    assert!(ranked[0].rank_mismatch());
    assert_eq!(ranked[1].implied_rank, 1);
    assert!(ranked[1].rank_mismatch());
}
