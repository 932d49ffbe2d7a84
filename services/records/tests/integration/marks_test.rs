use campus_records::usecase::marks::SeeMarksUseCase;

use crate::helpers::{MockMarksRepo, mark};

fn repo() -> MockMarksRepo {
    MockMarksRepo {
        sheets: vec![
            (
                "STU-0001".to_owned(),
                "Anita Desai".to_owned(),
                vec![mark("Maths", 78), mark("Physics", 64), mark("English", 91)],
            ),
            ("STU-0002".to_owned(), "Bala Murugan".to_owned(), vec![]),
        ],
    }
}

#[tokio::test]
async fn should_total_all_marks_of_student() {
    let uc = SeeMarksUseCase { repo: repo() };

    let sheet = uc.execute("STU-0001").await.unwrap();

    assert_eq!(sheet.student_name.as_deref(), Some("Anita Desai"));
    assert_eq!(sheet.marks.len(), 3);
    assert_eq!(sheet.total, 233);
}

#[tokio::test]
async fn should_return_zero_for_student_without_marks() {
    let uc = SeeMarksUseCase { repo: repo() };

    let sheet = uc.execute("STU-0002").await.unwrap();

    assert!(sheet.marks.is_empty());
    assert_eq!(sheet.total, 0);
}

#[tokio::test]
async fn should_return_empty_sheet_for_unknown_code() {
    let uc = SeeMarksUseCase { repo: repo() };

    let sheet = uc.execute("STU-9999").await.unwrap();

    assert!(sheet.student_name.is_none());
    assert!(sheet.marks.is_empty());
    assert_eq!(sheet.total, 0);
}
