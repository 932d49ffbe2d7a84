use campus_auth_types::password::verify_password;
use campus_core::media::ImageError;
use campus_domain::user::UserRole;
use campus_school::usecase::profile::{
    ProfileUpdateError, UpdateProfileInput, UpdateProfileUseCase,
};
use campus_testing::fixture::{fake_png_upload, png_upload};

use crate::helpers::{MockMediaStore, MockUserRepo, TEST_PASSWORD, test_user};

fn names_only() -> UpdateProfileInput {
    UpdateProfileInput {
        first_name: "Meera".to_owned(),
        last_name: "Iyer".to_owned(),
        password: String::new(),
        profile_pic: None,
    }
}

#[tokio::test]
async fn should_overwrite_names_and_keep_password_when_blank() {
    let repo = MockUserRepo::new(vec![test_user(1, UserRole::Staff)]);
    let users = repo.users_handle();
    let uc = UpdateProfileUseCase {
        repo,
        media: MockMediaStore::new(),
    };

    uc.execute(1, names_only()).await.unwrap();

    let users = users.lock().unwrap();
    assert_eq!(users[0].first_name, "Meera");
    assert_eq!(users[0].last_name, "Iyer");
    assert!(verify_password(TEST_PASSWORD, &users[0].password_hash));
    assert!(users[0].profile_pic.is_none());
}

#[tokio::test]
async fn should_rehash_non_empty_password() {
    let repo = MockUserRepo::new(vec![test_user(1, UserRole::Staff)]);
    let users = repo.users_handle();
    let uc = UpdateProfileUseCase {
        repo,
        media: MockMediaStore::new(),
    };

    uc.execute(
        1,
        UpdateProfileInput {
            password: "new password".to_owned(),
            ..names_only()
        },
    )
    .await
    .unwrap();

    let users = users.lock().unwrap();
    assert!(verify_password("new password", &users[0].password_hash));
    assert!(!verify_password(TEST_PASSWORD, &users[0].password_hash));
}

#[tokio::test]
async fn should_store_valid_picture() {
    let repo = MockUserRepo::new(vec![test_user(1, UserRole::Student)]);
    let users = repo.users_handle();
    let media = MockMediaStore::new();
    let saved = media.saved_handle();
    let uc = UpdateProfileUseCase { repo, media };

    uc.execute(
        1,
        UpdateProfileInput {
            profile_pic: Some(png_upload("me.png")),
            ..names_only()
        },
    )
    .await
    .unwrap();

    assert_eq!(saved.lock().unwrap().as_slice(), ["profile_pic/1.png"]);
    assert_eq!(
        users.lock().unwrap()[0].profile_pic.as_deref(),
        Some("profile_pic/1.png")
    );
}

#[tokio::test]
async fn should_reject_invalid_picture_without_writing() {
    let repo = MockUserRepo::new(vec![test_user(1, UserRole::Student)]);
    let users = repo.users_handle();
    let media = MockMediaStore::new();
    let saved = media.saved_handle();
    let uc = UpdateProfileUseCase { repo, media };

    let result = uc
        .execute(
            1,
            UpdateProfileInput {
                profile_pic: Some(fake_png_upload("me.png")),
                ..names_only()
            },
        )
        .await;

    assert!(
        matches!(
            result,
            Err(ProfileUpdateError::InvalidImage(ImageError::ContentMismatch))
        ),
        "expected InvalidImage, got {result:?}"
    );
    assert!(saved.lock().unwrap().is_empty());
    assert_eq!(users.lock().unwrap()[0].first_name, "Asha");
}

#[tokio::test]
async fn should_report_storage_failure() {
    let repo = MockUserRepo::new(vec![test_user(1, UserRole::Student)]);
    let users = repo.users_handle();
    let uc = UpdateProfileUseCase {
        repo,
        media: MockMediaStore::failing(),
    };

    let result = uc
        .execute(
            1,
            UpdateProfileInput {
                profile_pic: Some(png_upload("me.png")),
                ..names_only()
            },
        )
        .await;

    assert!(
        matches!(result, Err(ProfileUpdateError::Storage(_))),
        "expected Storage, got {result:?}"
    );
    assert_eq!(users.lock().unwrap()[0].first_name, "Asha");
}

#[tokio::test]
async fn should_report_missing_user() {
    let uc = UpdateProfileUseCase {
        repo: MockUserRepo::empty(),
        media: MockMediaStore::new(),
    };

    let result = uc.execute(42, names_only()).await;

    assert!(
        matches!(result, Err(ProfileUpdateError::UserNotFound)),
        "expected UserNotFound, got {result:?}"
    );
}

#[tokio::test]
async fn should_remove_stored_picture_when_update_fails() {
    let repo = MockUserRepo::failing_updates(vec![test_user(1, UserRole::Student)]);
    let users = repo.users_handle();
    let media = MockMediaStore::new();
    let saved = media.saved_handle();
    let removed = media.removed_handle();
    let uc = UpdateProfileUseCase { repo, media };

    let result = uc
        .execute(
            1,
            UpdateProfileInput {
                profile_pic: Some(png_upload("me.png")),
                ..names_only()
            },
        )
        .await;

    assert!(
        matches!(result, Err(ProfileUpdateError::Storage(_))),
        "expected Storage, got {result:?}"
    );
    assert_eq!(saved.lock().unwrap().as_slice(), ["profile_pic/1.png"]);
    assert_eq!(removed.lock().unwrap().as_slice(), ["profile_pic/1.png"]);
    assert!(users.lock().unwrap()[0].profile_pic.is_none());
}
