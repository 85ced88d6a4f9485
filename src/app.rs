use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/mood", post(handlers::log_mood_form))
        .route("/api/moods", get(handlers::list_moods).post(handlers::log_mood))
        .route("/api/today", get(handlers::get_today))
        .route("/api/trends", get(handlers::get_trends))
        .route("/api/trends/weekly", get(handlers::get_weekly))
        .route("/api/trends/distribution", get(handlers::get_distribution))
        .route("/api/insights", get(handlers::get_insights))
        .route(
            "/api/journal",
            get(handlers::search_journal).post(handlers::create_journal),
        )
        .route("/api/journal/:id", put(handlers::update_journal))
        .route("/api/coping", get(handlers::list_strategies))
        .route("/api/coping/recommended", get(handlers::recommended_strategies))
        .route("/api/coping/:id", get(handlers::get_strategy))
        .route("/api/music", get(handlers::music))
        .route("/api/music/play", post(handlers::play_song))
        .with_state(state)
}
