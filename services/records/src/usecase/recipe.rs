use anyhow::Context as _;

use campus_core::media::{self, MediaStore, Upload};
use campus_domain::search::SearchTerm;

use crate::domain::repository::RecipeRepository;
use crate::domain::types::{Recipe, RecipeFields};
use crate::error::RecordsError;

/// Media folder for recipe images.
pub const RECIPE_IMAGE_FOLDER: &str = "receipe";

pub struct RecipeInput {
    pub name: String,
    pub description: String,
    pub image: Option<Upload>,
}

/// Validate `input`, store its image if any and build the fields to write.
async fn prepare<M: MediaStore>(
    media: &M,
    input: RecipeInput,
) -> Result<RecipeFields, RecordsError> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(RecordsError::InvalidForm("Receipe name is required.".to_owned()));
    }
    let image = match input.image {
        Some(upload) => {
            let format = upload.image_format()?;
            let path = media
                .save(RECIPE_IMAGE_FOLDER, format, &upload)
                .await
                .context("store recipe image")?;
            Some(path)
        }
        None => None,
    };
    Ok(RecipeFields {
        name: name.to_owned(),
        description: input.description,
        image,
    })
}

// ── ListRecipes ──────────────────────────────────────────────────────────────

pub struct ListRecipesUseCase<R: RecipeRepository> {
    pub repo: R,
}

impl<R: RecipeRepository> ListRecipesUseCase<R> {
    pub async fn execute(&self, search: Option<&str>) -> Result<Vec<Recipe>, RecordsError> {
        let term = SearchTerm::parse(search);
        self.repo.list(term.as_ref()).await
    }
}

// ── GetRecipe ────────────────────────────────────────────────────────────────

pub struct GetRecipeUseCase<R: RecipeRepository> {
    pub repo: R,
}

impl<R: RecipeRepository> GetRecipeUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<Recipe, RecordsError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(RecordsError::RecipeNotFound)
    }
}

// ── CreateRecipe ─────────────────────────────────────────────────────────────

pub struct CreateRecipeUseCase<R: RecipeRepository, M: MediaStore> {
    pub repo: R,
    pub media: M,
}

impl<R: RecipeRepository, M: MediaStore> CreateRecipeUseCase<R, M> {
    pub async fn execute(&self, input: RecipeInput) -> Result<Recipe, RecordsError> {
        let fields = prepare(&self.media, input).await?;
        let recipe = match self.repo.create(&fields).await {
            Ok(recipe) => recipe,
            Err(e) => {
                media::discard(&self.media, fields.image.as_deref()).await;
                return Err(e);
            }
        };
        tracing::info!(recipe_id = recipe.id, "recipe created");
        Ok(recipe)
    }
}

// ── UpdateRecipe ─────────────────────────────────────────────────────────────

pub struct UpdateRecipeUseCase<R: RecipeRepository, M: MediaStore> {
    pub repo: R,
    pub media: M,
}

impl<R: RecipeRepository, M: MediaStore> UpdateRecipeUseCase<R, M> {
    /// Name and description are overwritten; the image only when a new one is supplied.
    pub async fn execute(&self, id: i32, input: RecipeInput) -> Result<(), RecordsError> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(RecordsError::RecipeNotFound);
        }
        let fields = prepare(&self.media, input).await?;
        let written = self.repo.update(id, &fields).await;
        if !matches!(written, Ok(true)) {
            media::discard(&self.media, fields.image.as_deref()).await;
            written?;
            return Err(RecordsError::RecipeNotFound);
        }
        tracing::info!(
            recipe_id = id,
            image_replaced = fields.image.is_some(),
            "recipe updated"
        );
        Ok(())
    }
}

// ── DeleteRecipe ─────────────────────────────────────────────────────────────

pub struct DeleteRecipeUseCase<R: RecipeRepository> {
    pub repo: R,
}

impl<R: RecipeRepository> DeleteRecipeUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<(), RecordsError> {
        if !self.repo.delete(id).await? {
            return Err(RecordsError::RecipeNotFound);
        }
        tracing::info!(recipe_id = id, "recipe deleted");
        Ok(())
    }
}
