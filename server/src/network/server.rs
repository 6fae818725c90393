//! HTTP JSON server.
//!
//! Every handler decodes its body, locks the caller's session for the whole
//! computation and returns the engine result as JSON. Failures become a status
//! code plus `{error}` body, except character selection which keeps its own
//! `{status, message}` shape.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use log::{debug, warn};

use geoquest_shared::{
    CharacterClass, CombatTurnRequest, EnemyClass, ErrorResponse, EscapeResponse, GameConstants, HealResponse,
    HealthResponse, LeaderboardResponse, LocationUpdateRequest, PlayerQuery, PlayerRequest, PlayerSessionView,
    SelectCharacterRequest, SelectCharacterResponse, Skill, SpawnConfig, SpawnEnemyRequest, SpawnResponse,
    UpgradeSkillRequest, UpgradeSkillResponse, CombatTurnResponse,
};

use crate::config::GameData;
use crate::error::{ErrorKind, GameError};
use crate::persistence::SessionStore;
use crate::world::{self, GeoPoint, SpawnTrigger, TurnAction};

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<SessionStore>,
    pub data: Arc<GameData>,
}

impl AppState {
    pub fn new(store: Arc<SessionStore>, data: Arc<GameData>) -> Self {
        Self { store, data }
    }
}

/// Build the router with every game route
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/select-character", post(select_character))
        .route("/update-location", post(update_location))
        .route("/spawn-tick", post(spawn_tick))
        .route("/spawn-enemy", post(spawn_enemy))
        .route("/combat-turn", post(combat_turn))
        .route("/heal", post(heal))
        .route("/escape", post(escape))
        .route("/upgrade-skill", post(upgrade_skill))
        .route("/config/characters", get(config_characters))
        .route("/config/enemy-stats", get(config_enemy_stats))
        .route("/config/skills", get(config_skills))
        .route("/config/spawn-config", get(config_spawn))
        .route("/config/game-constants", get(config_constants))
        .route("/leaderboard", get(leaderboard))
        .route("/player/:player_id", get(player_view))
        .route("/health", get(health))
        .with_state(state)
}

// =============================================================================
// Errors
// =============================================================================

/// A `GameError` on its way out as an HTTP response
#[derive(Debug)]
pub struct ApiError(GameError);

impl From<GameError> for ApiError {
    fn from(err: GameError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(GameError::InvalidRequest(rejection.body_text()))
    }
}

fn status_for(err: &GameError) -> StatusCode {
    match err.kind() {
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::State => StatusCode::CONFLICT,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);
        warn!("Rejected request ({}): {}", status.as_u16(), self.0);
        (status, Json(ErrorResponse { error: self.0.to_string() })).into_response()
    }
}

type ApiResult<T> = Result<Json<T>, ApiError>;

fn required(value: Option<String>, field: &'static str) -> Result<String, GameError> {
    value.ok_or(GameError::MissingField(field))
}

// =============================================================================
// Session handlers
// =============================================================================

async fn select_character(
    State(state): State<AppState>,
    payload: Result<Json<SelectCharacterRequest>, JsonRejection>,
) -> (StatusCode, Json<SelectCharacterResponse>) {
    let selected = payload
        .map_err(ApiError::from)
        .and_then(|Json(req)| required(req.character, "character").map_err(ApiError::from))
        .and_then(|id| {
            state
                .data
                .character(&id)
                .ok_or(ApiError(GameError::InvalidCharacter(id)))
        });

    match selected {
        Ok(class) => {
            let (player_id, player) = state.store.create(class, &state.data.enemies, Instant::now());
            let response = SelectCharacterResponse {
                status: "ok".into(),
                player_id: Some(player_id),
                player: Some(player),
                message: None,
            };
            (StatusCode::OK, Json(response))
        }
        Err(ApiError(err)) => {
            warn!("Character selection rejected: {}", err);
            let response = SelectCharacterResponse {
                status: "error".into(),
                player_id: None,
                player: None,
                message: Some(err.to_string()),
            };
            (status_for(&err), Json(response))
        }
    }
}

async fn update_location(
    State(state): State<AppState>,
    payload: Result<Json<LocationUpdateRequest>, JsonRejection>,
) -> ApiResult<SpawnResponse> {
    let Json(req) = payload?;
    let player_id = required(req.player_id, "player_id")?;
    let point = GeoPoint::from_parts(req.lat, req.lon)?;

    let now = Instant::now();
    let result = state.store.with_session(&player_id, now, |session| {
        world::evaluate_spawn(session, SpawnTrigger::Location(point), &state.data, now, &mut rand::thread_rng())
    })?;
    Ok(Json(result.into_response()))
}

async fn spawn_tick(
    State(state): State<AppState>,
    payload: Result<Json<PlayerRequest>, JsonRejection>,
) -> ApiResult<SpawnResponse> {
    let Json(req) = payload?;
    let player_id = required(req.player_id, "player_id")?;

    let now = Instant::now();
    let result = state.store.with_session(&player_id, now, |session| {
        world::evaluate_spawn(session, SpawnTrigger::Tick, &state.data, now, &mut rand::thread_rng())
    })?;
    Ok(Json(result.into_response()))
}

async fn spawn_enemy(
    State(state): State<AppState>,
    payload: Result<Json<SpawnEnemyRequest>, JsonRejection>,
) -> ApiResult<SpawnResponse> {
    let Json(req) = payload?;
    let player_id = required(req.player_id, "player_id")?;
    let enemy_type = required(req.enemy_type, "enemy_type")?;

    let now = Instant::now();
    let result = state.store.with_session(&player_id, now, |session| {
        world::spawn_enemy_by_id(session, &enemy_type, &state.data, now)
    })?;
    Ok(Json(result.into_response()))
}

async fn combat_turn(
    State(state): State<AppState>,
    payload: Result<Json<CombatTurnRequest>, JsonRejection>,
) -> ApiResult<CombatTurnResponse> {
    let Json(req) = payload?;
    let player_id = required(req.player_id, "player_id")?;
    let action = TurnAction::parse(req.action.as_deref(), req.skill_name.as_deref())?;

    let now = Instant::now();
    let result = state.store.with_session(&player_id, now, |session| {
        world::resolve_turn(session, &action, &state.data, now, &mut rand::thread_rng())
    })?;
    debug!("Player {} turn messages: {:?}", player_id, result.messages);
    Ok(Json(result.into_response()))
}

async fn heal(
    State(state): State<AppState>,
    payload: Result<Json<PlayerRequest>, JsonRejection>,
) -> ApiResult<HealResponse> {
    let Json(req) = payload?;
    let player_id = required(req.player_id, "player_id")?;

    let now = Instant::now();
    let result = state
        .store
        .with_session(&player_id, now, |session| world::heal(session, &state.data, now))?;
    Ok(Json(result))
}

async fn escape(
    State(state): State<AppState>,
    payload: Result<Json<PlayerRequest>, JsonRejection>,
) -> ApiResult<EscapeResponse> {
    let Json(req) = payload?;
    let player_id = required(req.player_id, "player_id")?;

    let message = state
        .store
        .with_session(&player_id, Instant::now(), world::escape)?;
    Ok(Json(EscapeResponse {
        escaped: true,
        combat_messages: vec![message],
    }))
}

async fn upgrade_skill(
    State(state): State<AppState>,
    payload: Result<Json<UpgradeSkillRequest>, JsonRejection>,
) -> ApiResult<UpgradeSkillResponse> {
    let Json(req) = payload?;
    let player_id = required(req.player_id, "player_id")?;
    let skill_name = required(req.skill_name, "skill_name")?;

    let result = state.store.with_session(&player_id, Instant::now(), |session| {
        world::upgrade_skill(session, &skill_name, &state.data)
    })?;
    Ok(Json(result))
}

async fn leaderboard(
    State(state): State<AppState>,
    Query(query): Query<PlayerQuery>,
) -> ApiResult<LeaderboardResponse> {
    let player_id = required(query.player_id, "player_id")?;
    let board = state
        .store
        .with_session(&player_id, Instant::now(), |session| Ok(session.leaderboard()))?;
    Ok(Json(board))
}

async fn player_view(
    State(state): State<AppState>,
    Path(player_id): Path<String>,
) -> ApiResult<PlayerSessionView> {
    let view = state
        .store
        .with_session(&player_id, Instant::now(), |session| Ok(session.view()))?;
    Ok(Json(view))
}

// =============================================================================
// Static reads
// =============================================================================

async fn config_characters(State(state): State<AppState>) -> Json<Vec<CharacterClass>> {
    Json(state.data.characters.clone())
}

async fn config_enemy_stats(State(state): State<AppState>) -> Json<Vec<EnemyClass>> {
    Json(state.data.enemies.clone())
}

async fn config_skills(
    State(state): State<AppState>,
) -> Json<std::collections::BTreeMap<String, Vec<Skill>>> {
    Json(state.data.skills_by_character())
}

async fn config_spawn(State(state): State<AppState>) -> Json<SpawnConfig> {
    Json(state.data.spawn.clone())
}

async fn config_constants(State(state): State<AppState>) -> Json<GameConstants> {
    Json(state.data.constants.clone())
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        sessions: state.store.len(),
    })
}
