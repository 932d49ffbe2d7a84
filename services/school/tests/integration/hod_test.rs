use campus_domain::user::UserRole;
use campus_school::error::SchoolError;
use campus_school::usecase::hod::HodHomeUseCase;

use crate::helpers::{MockUserRepo, test_user};

#[tokio::test]
async fn should_count_staff_and_students_for_hod() {
    let uc = HodHomeUseCase {
        repo: MockUserRepo::new(vec![
            test_user(1, UserRole::Hod),
            test_user(2, UserRole::Staff),
            test_user(3, UserRole::Student),
            test_user(4, UserRole::Student),
        ]),
    };

    let summary = uc.execute(1).await.unwrap();

    assert_eq!(summary.hod.id, 1);
    assert_eq!(summary.staff_count, 1);
    assert_eq!(summary.student_count, 2);
}

#[tokio::test]
async fn should_forbid_non_hod() {
    let uc = HodHomeUseCase {
        repo: MockUserRepo::new(vec![test_user(2, UserRole::Staff)]),
    };

    let result = uc.execute(2).await;

    assert!(
        matches!(result, Err(SchoolError::Forbidden)),
        "expected Forbidden, got {result:?}"
    );
}

#[tokio::test]
async fn should_return_not_found_for_deleted_user() {
    let uc = HodHomeUseCase {
        repo: MockUserRepo::empty(),
    };

    let result = uc.execute(1).await;

    assert!(
        matches!(result, Err(SchoolError::UserNotFound)),
        "expected UserNotFound, got {result:?}"
    );
}
