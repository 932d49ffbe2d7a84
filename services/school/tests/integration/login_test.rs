use campus_domain::user::{Landing, UnknownRole, UserRole};
use campus_school::usecase::login::{LoginInput, LoginOutcome, LoginUseCase};

use crate::helpers::{MockUserRepo, TEST_PASSWORD, test_user};

fn input(email: &str, password: &str) -> LoginInput {
    LoginInput {
        email: email.to_owned(),
        password: password.to_owned(),
    }
}

#[tokio::test]
async fn should_land_each_role_on_its_page() {
    let uc = LoginUseCase {
        repo: MockUserRepo::new(vec![
            test_user(1, UserRole::Hod),
            test_user(2, UserRole::Staff),
            test_user(3, UserRole::Student),
        ]),
    };

    for (email, expected) in [
        ("user1@school.test", Landing::HodHome),
        ("user2@school.test", Landing::StaffPanel),
        ("user3@school.test", Landing::StudentPanel),
    ] {
        let outcome = uc.execute(input(email, TEST_PASSWORD)).await.unwrap();
        match outcome {
            LoginOutcome::LoggedIn { landing, .. } => assert_eq!(landing, expected, "{email}"),
            other => panic!("expected LoggedIn for {email}, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn should_fail_generically_for_bad_credentials() {
    let uc = LoginUseCase {
        repo: MockUserRepo::new(vec![test_user(1, UserRole::Hod)]),
    };

    let wrong_password = uc.execute(input("user1@school.test", "nope")).await.unwrap();
    let unknown_email = uc.execute(input("ghost@school.test", TEST_PASSWORD)).await.unwrap();

    assert!(matches!(wrong_password, LoginOutcome::NoMatch));
    assert!(matches!(unknown_email, LoginOutcome::NoMatch));
}

#[tokio::test]
async fn should_surface_unknown_stored_role() {
    let mut user = test_user(1, UserRole::Hod);
    user.role_code = 0;
    let uc = LoginUseCase {
        repo: MockUserRepo::new(vec![user]),
    };

    let outcome = uc
        .execute(input("user1@school.test", TEST_PASSWORD))
        .await
        .unwrap();

    assert!(
        matches!(outcome, LoginOutcome::UnknownRole(UnknownRole(0))),
        "expected UnknownRole, got {outcome:?}"
    );
}
