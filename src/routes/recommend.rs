use axum::Json;

use crate::{
    extract::LenientJson,
    message::{DoshaListResponse, RecommendRequest, RecommendResponse},
    services::recommender::{known_doshas, recommend},
};

pub async fn recommend_handler(
    LenientJson(payload): LenientJson<RecommendRequest>,
) -> Json<RecommendResponse> {
    let dosha = payload.dosha.to_lowercase();
    let goal = payload.goal.to_lowercase();

    let recommendations = recommend(&dosha)
        .into_iter()
        .map(str::to_string)
        .collect();

    Json(RecommendResponse {
        dosha,
        goal,
        recommendations,
    })
}

pub async fn list_doshas_handler() -> Json<DoshaListResponse> {
    Json(DoshaListResponse {
        doshas: known_doshas().into_iter().map(str::to_string).collect(),
    })
}
