use axum::extract::multipart::MultipartRejection;
use axum::extract::rejection::PathRejection;
use axum::extract::{Multipart, Path, RawQuery, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use campus_auth_types::identity::SessionUser;
use campus_core::flash::{self, FlashMessage};
use campus_core::media::MultipartForm;

use crate::error::RecordsError;
use crate::handlers::parse_query;
use crate::state::AppState;
use crate::usecase::recipe::{
    CreateRecipeUseCase, DeleteRecipeUseCase, GetRecipeUseCase, ListRecipesUseCase, RecipeInput,
    UpdateRecipeUseCase,
};
use crate::views;

/// Ids that do not parse can never name a stored recipe.
fn recipe_id(path: Result<Path<i32>, PathRejection>) -> Result<i32, RecordsError> {
    match path {
        Ok(Path(id)) => Ok(id),
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "unparseable receipe id");
            Err(RecordsError::RecipeNotFound)
        }
    }
}

async fn read_recipe_form(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<RecipeInput, RecordsError> {
    let multipart = multipart.map_err(|e| RecordsError::InvalidForm(e.body_text()))?;
    let mut form = MultipartForm::read(multipart)
        .await
        .map_err(|e| RecordsError::InvalidForm(e.body_text()))?;
    Ok(RecipeInput {
        name: form.text("receipe_name"),
        description: form.text("receipe_description"),
        image: form.take_file("receipe_image"),
    })
}

/// Turn a rejected submission into a flash message; pass other errors through.
fn flash_rejection(jar: CookieJar, error: RecordsError) -> Result<CookieJar, RecordsError> {
    match error {
        RecordsError::InvalidImage(e) => Ok(flash::push(
            jar,
            FlashMessage::error(format!("Invalid receipe image: {e}")),
        )),
        RecordsError::InvalidForm(message) => Ok(flash::push(jar, FlashMessage::error(message))),
        other => Err(other),
    }
}

// ── GET /receipes/ ───────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct RecipeListQuery {
    pub search: Option<String>,
}

pub async fn list_recipes(
    _session: SessionUser,
    State(state): State<AppState>,
    jar: CookieJar,
    RawQuery(raw_query): RawQuery,
) -> Result<Response, RecordsError> {
    let query: RecipeListQuery = parse_query(raw_query.as_deref());
    let usecase = ListRecipesUseCase {
        repo: state.recipe_repo(),
    };
    let recipes = usecase.execute(query.search.as_deref()).await?;
    let (jar, flashes) = flash::take(jar);
    let search = query.search.as_deref().map(str::trim);
    Ok((jar, views::recipes_page(&recipes, search, &flashes)).into_response())
}

// ── POST /receipes/ ──────────────────────────────────────────────────────────

pub async fn create_recipe(
    _session: SessionUser,
    State(state): State<AppState>,
    jar: CookieJar,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, RecordsError> {
    let input = read_recipe_form(multipart).await?;
    let usecase = CreateRecipeUseCase {
        repo: state.recipe_repo(),
        media: state.media.clone(),
    };
    let jar = match usecase.execute(input).await {
        Ok(_) => jar,
        Err(e) => flash_rejection(jar, e)?,
    };
    Ok((jar, Redirect::to("/receipes/")).into_response())
}

// ── GET /delete-receipe/{id} ─────────────────────────────────────────────────

pub async fn delete_recipe(
    _session: SessionUser,
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Redirect, RecordsError> {
    let id = recipe_id(path)?;
    let usecase = DeleteRecipeUseCase {
        repo: state.recipe_repo(),
    };
    usecase.execute(id).await?;
    Ok(Redirect::to("/receipes/"))
}

// ── GET /update-receipe/{id} ─────────────────────────────────────────────────

pub async fn edit_recipe(
    _session: SessionUser,
    State(state): State<AppState>,
    jar: CookieJar,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Response, RecordsError> {
    let id = recipe_id(path)?;
    let usecase = GetRecipeUseCase {
        repo: state.recipe_repo(),
    };
    let recipe = usecase.execute(id).await?;
    let (jar, flashes) = flash::take(jar);
    Ok((jar, views::edit_recipe_page(&recipe, &flashes)).into_response())
}

// ── POST /update-receipe/{id} ────────────────────────────────────────────────

pub async fn update_recipe(
    _session: SessionUser,
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<i32>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, RecordsError> {
    let input = read_recipe_form(multipart).await?;
    let usecase = UpdateRecipeUseCase {
        repo: state.recipe_repo(),
        media: state.media.clone(),
    };
    match usecase.execute(id, input).await {
        Ok(()) => Ok((jar, Redirect::to("/receipes/")).into_response()),
        Err(e) => {
            let jar = flash_rejection(jar, e)?;
            Ok((jar, Redirect::to(&format!("/update-receipe/{id}"))).into_response())
        }
    }
}
