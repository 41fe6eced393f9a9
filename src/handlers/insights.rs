use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};

use crate::{
    AppState,
    error::{AppError, AppResult},
    models::{BusinessDataInput, BusinessReport, HeadlineQuery, HeadlineResponse},
};

pub async fn business_data(
    State(state): State<AppState>,
    payload: Result<Json<BusinessDataInput>, JsonRejection>,
) -> AppResult<Json<BusinessReport>> {
    let Json(input) = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    let report = state.insight_service.analyze(input).await?;

    Ok(Json(report))
}

pub async fn regenerate_headline(
    State(state): State<AppState>,
    query: Result<Query<HeadlineQuery>, QueryRejection>,
) -> AppResult<Json<HeadlineResponse>> {
    let Query(query) = query.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    let headline = state.insight_service.regenerate_headline(query).await?;

    Ok(Json(HeadlineResponse { headline }))
}
