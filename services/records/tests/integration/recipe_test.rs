use campus_records::error::RecordsError;
use campus_records::usecase::recipe::{
    CreateRecipeUseCase, DeleteRecipeUseCase, GetRecipeUseCase, ListRecipesUseCase, RecipeInput,
    UpdateRecipeUseCase,
};
use campus_testing::fixture::{fake_png_upload, png_upload};

use crate::helpers::{MockMediaStore, MockRecipeRepo, recipe};

fn sample_repo() -> MockRecipeRepo {
    MockRecipeRepo::new(vec![
        recipe(2, "Masala Dosa"),
        recipe(1, "Dal Tadka"),
        recipe(3, "Paneer Tikka"),
    ])
}

#[tokio::test]
async fn should_list_all_for_blank_search() {
    let uc = ListRecipesUseCase {
        repo: sample_repo(),
    };

    let all = uc.execute(Some("   ")).await.unwrap();

    let ids: Vec<i32> = all.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn should_filter_case_insensitively() {
    let uc = ListRecipesUseCase {
        repo: sample_repo(),
    };

    let found = uc.execute(Some("dOsA")).await.unwrap();
    let none = uc.execute(Some("biryani")).await.unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Masala Dosa");
    assert!(none.is_empty());
}

#[tokio::test]
async fn should_create_recipe_with_image() {
    let repo = MockRecipeRepo::new(vec![]);
    let recipes = repo.recipes_handle();
    let uc = CreateRecipeUseCase {
        repo,
        media: MockMediaStore::new(),
    };

    let created = uc
        .execute(RecipeInput {
            name: " Poha ".to_owned(),
            description: "flattened rice".to_owned(),
            image: Some(png_upload("poha.png")),
        })
        .await
        .unwrap();

    assert_eq!(created.name, "Poha");
    assert_eq!(created.image.as_deref(), Some("receipe/1.png"));
    assert_eq!(recipes.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_not_create_recipe_with_invalid_image() {
    let repo = MockRecipeRepo::new(vec![]);
    let recipes = repo.recipes_handle();
    let media = MockMediaStore::new();
    let saved = media.saved_handle();
    let uc = CreateRecipeUseCase { repo, media };

    let result = uc
        .execute(RecipeInput {
            name: "Poha".to_owned(),
            description: String::new(),
            image: Some(fake_png_upload("poha.png")),
        })
        .await;

    assert!(
        matches!(result, Err(RecordsError::InvalidImage(_))),
        "expected InvalidImage, got {result:?}"
    );
    assert!(recipes.lock().unwrap().is_empty());
    assert!(saved.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_keep_image_when_update_has_none() {
    let mut existing = recipe(1, "Dal Tadka");
    existing.image = Some("receipe/old.png".to_owned());
    let repo = MockRecipeRepo::new(vec![existing]);
    let recipes = repo.recipes_handle();
    let uc = UpdateRecipeUseCase {
        repo,
        media: MockMediaStore::new(),
    };

    uc.execute(
        1,
        RecipeInput {
            name: "Dal Fry".to_owned(),
            description: "less ghee".to_owned(),
            image: None,
        },
    )
    .await
    .unwrap();

    let recipes = recipes.lock().unwrap();
    assert_eq!(recipes[0].name, "Dal Fry");
    assert_eq!(recipes[0].description, "less ghee");
    assert_eq!(recipes[0].image.as_deref(), Some("receipe/old.png"));
}

#[tokio::test]
async fn should_replace_image_when_update_has_one() {
    let mut existing = recipe(1, "Dal Tadka");
    existing.image = Some("receipe/old.png".to_owned());
    let repo = MockRecipeRepo::new(vec![existing]);
    let recipes = repo.recipes_handle();
    let uc = UpdateRecipeUseCase {
        repo,
        media: MockMediaStore::new(),
    };

    uc.execute(
        1,
        RecipeInput {
            name: "Dal Tadka".to_owned(),
            description: String::new(),
            image: Some(png_upload("new.png")),
        },
    )
    .await
    .unwrap();

    assert_eq!(
        recipes.lock().unwrap()[0].image.as_deref(),
        Some("receipe/1.png")
    );
}

#[tokio::test]
async fn should_return_not_found_for_unknown_recipe() {
    let get = GetRecipeUseCase {
        repo: sample_repo(),
    };
    let update = UpdateRecipeUseCase {
        repo: sample_repo(),
        media: MockMediaStore::new(),
    };
    let delete = DeleteRecipeUseCase {
        repo: sample_repo(),
    };

    assert!(matches!(get.execute(99).await, Err(RecordsError::RecipeNotFound)));
    assert!(matches!(
        update
            .execute(
                99,
                RecipeInput {
                    name: "x".to_owned(),
                    description: String::new(),
                    image: None,
                },
            )
            .await,
        Err(RecordsError::RecipeNotFound)
    ));
    assert!(matches!(delete.execute(99).await, Err(RecordsError::RecipeNotFound)));
}

#[tokio::test]
async fn should_delete_exactly_one_recipe() {
    let repo = sample_repo();
    let recipes = repo.recipes_handle();
    let uc = DeleteRecipeUseCase { repo };

    uc.execute(2).await.unwrap();

    let mut ids: Vec<i32> = recipes.lock().unwrap().iter().map(|r| r.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 3]);
}

#[tokio::test]
async fn should_remove_stored_image_when_create_fails() {
    let media = MockMediaStore::new();
    let saved = media.saved_handle();
    let removed = media.removed_handle();
    let uc = CreateRecipeUseCase {
        repo: MockRecipeRepo::failing_writes(vec![]),
        media,
    };

    let result = uc
        .execute(RecipeInput {
            name: "Poha".to_owned(),
            description: String::new(),
            image: Some(png_upload("poha.png")),
        })
        .await;

    assert!(
        matches!(result, Err(RecordsError::Internal(_))),
        "expected Internal, got {result:?}"
    );
    assert_eq!(saved.lock().unwrap().as_slice(), ["receipe/1.png"]);
    assert_eq!(removed.lock().unwrap().as_slice(), ["receipe/1.png"]);
}

#[tokio::test]
async fn should_remove_stored_image_when_update_fails() {
    let media = MockMediaStore::new();
    let removed = media.removed_handle();
    let repo = MockRecipeRepo::failing_writes(vec![recipe(1, "Dal Tadka")]);
    let recipes = repo.recipes_handle();
    let uc = UpdateRecipeUseCase { repo, media };

    let result = uc
        .execute(
            1,
            RecipeInput {
                name: "Dal Fry".to_owned(),
                description: String::new(),
                image: Some(png_upload("new.png")),
            },
        )
        .await;

    assert!(matches!(result, Err(RecordsError::Internal(_))));
    assert_eq!(removed.lock().unwrap().as_slice(), ["receipe/1.png"]);
    assert!(recipes.lock().unwrap()[0].image.is_none());
}

#[tokio::test]
async fn should_keep_image_after_successful_create() {
    let media = MockMediaStore::new();
    let removed = media.removed_handle();
    let uc = CreateRecipeUseCase {
        repo: MockRecipeRepo::new(vec![]),
        media,
    };

    uc.execute(RecipeInput {
        name: "Poha".to_owned(),
        description: String::new(),
        image: Some(png_upload("poha.png")),
    })
    .await
    .unwrap();

    assert!(removed.lock().unwrap().is_empty());
}
