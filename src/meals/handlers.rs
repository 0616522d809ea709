use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use axum_extra::extract::WithRejection;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    error::AppError,
    meals::{
        dto::{MealListResponse, MealRequest, MealResponse, SummaryResponse},
        repo_types::NewMeal,
    },
    session::Session,
    state::AppState,
};

type MealId = WithRejection<Path<Uuid>, AppError>;
type MealBody = WithRejection<Json<MealRequest>, AppError>;

pub fn meal_routes() -> Router<AppState> {
    Router::new()
        .route("/meals", get(list_meals).post(create_meal))
        .route("/meals/summary", get(summarize_meals))
        .route(
            "/meals/:id",
            get(get_meal).put(update_meal).delete(delete_meal),
        )
}

#[instrument(skip(state, payload))]
pub async fn create_meal(
    State(state): State<AppState>,
    session: Session,
    WithRejection(Json(payload), _): MealBody,
) -> Result<StatusCode, AppError> {
    let fields = payload.into_fields()?;
    let meal = state
        .store
        .create_meal(NewMeal {
            id: Uuid::new_v4(),
            user_id: session.user_id,
            fields,
        })
        .await?;

    info!(user_id = %session.user_id, meal_id = %meal.id, "meal created");
    Ok(StatusCode::CREATED)
}

#[instrument(skip(state))]
pub async fn list_meals(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<MealListResponse>, AppError> {
    let meals = state.store.list_meals(session.user_id).await?;
    Ok(Json(MealListResponse { meals }))
}

#[instrument(skip(state))]
pub async fn get_meal(
    State(state): State<AppState>,
    session: Session,
    WithRejection(Path(id), _): MealId,
) -> Result<Json<MealResponse>, AppError> {
    match state.store.find_meal(session.user_id, id).await? {
        Some(meal) => Ok(Json(MealResponse { meal })),
        None => {
            warn!(user_id = %session.user_id, meal_id = %id, "meal not found");
            Err(AppError::NotFound)
        }
    }
}

/// PUT /meals/:id replaces every field; partial bodies are rejected.
#[instrument(skip(state, payload))]
pub async fn update_meal(
    State(state): State<AppState>,
    session: Session,
    WithRejection(Path(id), _): MealId,
    WithRejection(Json(payload), _): MealBody,
) -> Result<StatusCode, AppError> {
    let fields = payload.into_fields()?;
    if !state.store.update_meal(session.user_id, id, fields).await? {
        warn!(user_id = %session.user_id, meal_id = %id, "update matched no meal");
        return Err(AppError::NotFound);
    }

    info!(user_id = %session.user_id, meal_id = %id, "meal updated");
    Ok(StatusCode::OK)
}

#[instrument(skip(state))]
pub async fn delete_meal(
    State(state): State<AppState>,
    session: Session,
    WithRejection(Path(id), _): MealId,
) -> Result<StatusCode, AppError> {
    if !state.store.delete_meal(session.user_id, id).await? {
        warn!(user_id = %session.user_id, meal_id = %id, "delete matched no meal");
        return Err(AppError::NotFound);
    }

    info!(user_id = %session.user_id, meal_id = %id, "meal deleted");
    Ok(StatusCode::OK)
}

#[instrument(skip(state))]
pub async fn summarize_meals(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<SummaryResponse>, AppError> {
    let summary = state.store.summarize_meals(session.user_id).await?;
    Ok(Json(SummaryResponse { summary }))
}
