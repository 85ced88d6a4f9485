use crate::analytics::{mood_distribution, mood_insights, mood_trends, todays_entry, weekly_moods};
use crate::catalog;
use crate::errors::AppError;
use crate::journal;
use crate::models::{
    CategoryQuery, CopingStrategy, JournalDraft, JournalEntry, JournalQuery, LogMoodForm,
    LogMoodRequest, Mood, MoodEntry, MoodInsights, MoodQuery, MoodShare, MusicRecommendation,
    PlayRequest, PlaybackNotice, TrendPoint, WeeklyMood, WindowQuery,
};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    Form, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, Redirect},
};
use chrono::{Local, Utc};
use tracing::info;
use uuid::Uuid;

const DEFAULT_TREND_DAYS: u32 = 7;
const DEFAULT_WEEKLY_DAYS: u32 = 30;

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let entries = state.store.lock().await.mood_entries().await?;
    let insights = mood_insights(&entries);
    Ok(Html(render_index(&insights, todays_entry(&entries), entries.len())))
}

pub async fn log_mood_form(
    State(state): State<AppState>,
    Form(form): Form<LogMoodForm>,
) -> Result<Redirect, AppError> {
    apply_log(&state, form.into()).await?;
    Ok(Redirect::to("/"))
}

pub async fn log_mood(
    State(state): State<AppState>,
    Json(payload): Json<LogMoodRequest>,
) -> Result<(StatusCode, Json<MoodEntry>), AppError> {
    let entry = apply_log(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

pub async fn list_moods(State(state): State<AppState>) -> Result<Json<Vec<MoodEntry>>, AppError> {
    let entries = state.store.lock().await.mood_entries().await?;
    Ok(Json(entries))
}

pub async fn get_today(State(state): State<AppState>) -> Result<Json<Option<MoodEntry>>, AppError> {
    let entries = state.store.lock().await.mood_entries().await?;
    Ok(Json(todays_entry(&entries).cloned()))
}

pub async fn get_trends(
    State(state): State<AppState>,
    Query(query): Query<WindowQuery>,
) -> Result<Json<Vec<TrendPoint>>, AppError> {
    let entries = state.store.lock().await.mood_entries().await?;
    let days = query.days.unwrap_or(DEFAULT_TREND_DAYS);
    Ok(Json(mood_trends(&entries, days)))
}

pub async fn get_weekly(
    State(state): State<AppState>,
    Query(query): Query<WindowQuery>,
) -> Result<Json<Vec<WeeklyMood>>, AppError> {
    let entries = state.store.lock().await.mood_entries().await?;
    let trends = mood_trends(&entries, query.days.unwrap_or(DEFAULT_WEEKLY_DAYS));
    Ok(Json(weekly_moods(&trends, &Local)))
}

pub async fn get_distribution(State(state): State<AppState>) -> Result<Json<Vec<MoodShare>>, AppError> {
    let entries = state.store.lock().await.mood_entries().await?;
    Ok(Json(mood_distribution(&entries)))
}

pub async fn get_insights(State(state): State<AppState>) -> Result<Json<MoodInsights>, AppError> {
    let entries = state.store.lock().await.mood_entries().await?;
    Ok(Json(mood_insights(&entries)))
}

pub async fn search_journal(
    State(state): State<AppState>,
    Query(query): Query<JournalQuery>,
) -> Result<Json<Vec<JournalEntry>>, AppError> {
    let mood = match query.mood.as_deref().map(str::trim) {
        Some(key) if !key.is_empty() => match key.parse::<Mood>() {
            Ok(mood) => Some(mood),
            Err(_) => return Ok(Json(Vec::new())),
        },
        _ => None,
    };

    let entries = state.store.lock().await.journal_entries().await?;
    let term = query.search.unwrap_or_default();
    Ok(Json(journal::search(entries, &term, mood)))
}

pub async fn create_journal(
    State(state): State<AppState>,
    Json(draft): Json<JournalDraft>,
) -> Result<(StatusCode, Json<JournalEntry>), AppError> {
    let store = state.store.lock().await;
    let moods = store.mood_entries().await?;
    let todays_mood = todays_entry(&moods).map(|entry| entry.mood);
    let entry = journal::entry_from_draft(draft, new_id(), Utc::now(), todays_mood)?;

    store.append_journal(entry.clone()).await?;
    info!(entry_id = %entry.id, mood = %entry.mood, "journal entry saved");
    Ok((StatusCode::CREATED, Json(entry)))
}

pub async fn update_journal(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(draft): Json<JournalDraft>,
) -> Result<Json<JournalEntry>, AppError> {
    let store = state.store.lock().await;
    let moods = store.mood_entries().await?;
    let todays_mood = todays_entry(&moods).map(|entry| entry.mood);
    let entry = journal::entry_from_draft(draft, id.clone(), Utc::now(), todays_mood)?;

    if !store.update_journal(&id, entry.clone()).await? {
        return Err(AppError::not_found(format!("no journal entry with id '{id}'")));
    }
    info!(entry_id = %id, "journal entry updated");
    Ok(Json(entry))
}

pub async fn list_strategies(Query(query): Query<CategoryQuery>) -> Json<Vec<&'static CopingStrategy>> {
    Json(catalog::strategies_in(query.category))
}

pub async fn get_strategy(Path(id): Path<String>) -> Result<Json<&'static CopingStrategy>, AppError> {
    catalog::strategy_by_id(&id)
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("no coping strategy with id '{id}'")))
}

pub async fn recommended_strategies(
    State(state): State<AppState>,
    Query(query): Query<MoodQuery>,
) -> Result<Json<Vec<&'static CopingStrategy>>, AppError> {
    let strategies = match current_mood_key(&state, query.mood).await? {
        Some(key) => catalog::recommended_strategies(&key),
        None => Vec::new(),
    };
    Ok(Json(strategies))
}

pub async fn music(
    State(state): State<AppState>,
    Query(query): Query<MoodQuery>,
) -> Result<Json<&'static [MusicRecommendation]>, AppError> {
    let songs: &'static [MusicRecommendation] = match current_mood_key(&state, query.mood).await? {
        Some(key) => catalog::music_for(&key),
        None => &[],
    };
    Ok(Json(songs))
}

pub async fn play_song(Json(payload): Json<PlayRequest>) -> Json<PlaybackNotice> {
    info!(title = %payload.title, artist = %payload.artist, "playback requested");
    Json(PlaybackNotice {
        message: catalog::play(&payload.title, &payload.artist),
    })
}

async fn apply_log(state: &AppState, request: LogMoodRequest) -> Result<MoodEntry, AppError> {
    let entry = request.into_entry(new_id(), Utc::now())?;
    state.store.lock().await.append_mood(entry.clone()).await?;
    info!(entry_id = %entry.id, mood = %entry.mood, intensity = entry.intensity, "mood logged");
    Ok(entry)
}

/// The explicitly selected mood, else the mood of the latest entry.
async fn current_mood_key(state: &AppState, selected: Option<String>) -> Result<Option<String>, AppError> {
    if let Some(key) = selected.filter(|key| !key.trim().is_empty()) {
        return Ok(Some(key));
    }
    let entries = state.store.lock().await.mood_entries().await?;
    Ok(entries.last().map(|entry| entry.mood.to_string()))
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}
