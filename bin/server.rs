// League History - Web Server
// Read-only REST API over the derived league data

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use league_history::{DirectorySource, LeagueConfig, LeagueData, LeagueError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Shared application state; derived once at startup, never mutated
#[derive(Clone)]
struct AppState {
    league: Arc<LeagueData>,
}

/// API Response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    fn ok(data: T) -> Response {
        Json(Self {
            success: true,
            data,
            error: None,
        })
        .into_response()
    }
}

fn not_found(message: String) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse {
            success: false,
            data: (),
            error: Some(message),
        }),
    )
        .into_response()
}

fn league_error(e: LeagueError) -> Response {
    match e {
        LeagueError::EmptySeasonSet { .. } => not_found(e.to_string()),
        other => {
            error!("derivation failed: {}", other);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse {
                    success: false,
                    data: (),
                    error: Some(other.to_string()),
                }),
            )
                .into_response()
        }
    }
}

#[derive(Deserialize)]
struct YearFilter {
    year: Option<u16>,
}

#[derive(Deserialize)]
struct SeasonFilter {
    season: Option<u16>,
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> Response {
    ApiResponse::ok("OK")
}

/// GET /api/years - Available seasons, most recent first
async fn get_years(State(state): State<AppState>) -> Response {
    ApiResponse::ok(state.league.available_years())
}

/// GET /api/standings?year=2020
async fn get_standings(State(state): State<AppState>, Query(filter): Query<YearFilter>) -> Response {
    match filter.year {
        Some(year) => ApiResponse::ok(state.league.standings_for(year)),
        None => ApiResponse::ok(&state.league.standings),
    }
}

/// GET /api/records - All-time records per owner
async fn get_records(State(state): State<AppState>) -> Response {
    ApiResponse::ok(&state.league.records)
}

/// GET /api/draft-positions?year=2020
async fn get_draft_positions(State(state): State<AppState>, Query(filter): Query<YearFilter>) -> Response {
    match filter.year {
        Some(year) => ApiResponse::ok(state.league.draft_positions_for(year)),
        None => ApiResponse::ok(&state.league.draft_positions),
    }
}

/// GET /api/matchups?season=2020
async fn get_matchups(State(state): State<AppState>, Query(filter): Query<SeasonFilter>) -> Response {
    match filter.season {
        Some(season) => ApiResponse::ok(state.league.matchups_for(season)),
        None => ApiResponse::ok(&state.league.matchups),
    }
}

/// GET /api/champions
async fn get_champions(State(state): State<AppState>) -> Response {
    ApiResponse::ok(state.league.champions())
}

/// GET /api/superlatives/:year
async fn get_superlatives(State(state): State<AppState>, Path(year): Path<u16>) -> Response {
    match state.league.superlatives(year) {
        Ok(superlatives) => ApiResponse::ok(superlatives),
        Err(e) => league_error(e),
    }
}

/// GET /api/hall-of-fame
async fn get_hall_of_fame(State(state): State<AppState>) -> Response {
    match state.league.hall_of_fame() {
        Ok(hof) => ApiResponse::ok(hof),
        Err(e) => league_error(e),
    }
}

/// GET /api/performance/:season
async fn get_performance(State(state): State<AppState>, Path(season): Path<u16>) -> Response {
    let rows = state.league.season_performance(season);
    if rows.is_empty() {
        return not_found(format!("no matchups for season {}", season));
    }
    ApiResponse::ok(rows)
}

// ============================================================================
// Main Server
// ============================================================================

fn load_league() -> anyhow::Result<LeagueData> {
    let data_dir = std::env::var("LEAGUE_DATA_DIR").unwrap_or_else(|_| "data".to_string());
    let config_path = std::env::var("LEAGUE_CONFIG").ok().map(PathBuf::from);

    let config = LeagueConfig::load(config_path.as_deref())?;
    let league = LeagueData::load(&DirectorySource::new(&data_dir), &config)?;
    Ok(league)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("🌐 League History - Web Server");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let league = match load_league() {
        Ok(league) => league,
        Err(e) => {
            eprintln!("❌ Failed to load league data: {:#}", e);
            eprintln!("   Set LEAGUE_DATA_DIR to a directory of <year>.json season exports.");
            std::process::exit(1);
        }
    };
    println!("✓ {} seasons loaded", league.years.len());

    let state = AppState {
        league: Arc::new(league),
    };

    // Build API routes
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/years", get(get_years))
        .route("/standings", get(get_standings))
        .route("/records", get(get_records))
        .route("/draft-positions", get(get_draft_positions))
        .route("/matchups", get(get_matchups))
        .route("/champions", get(get_champions))
        .route("/superlatives/:year", get(get_superlatives))
        .route("/hall-of-fame", get(get_hall_of_fame))
        .route("/performance/:season", get(get_performance))
        .with_state(state);

    let app = Router::new()
        .nest("/api", api_routes)
        .layer(ServiceBuilder::new().layer(CorsLayer::permissive()));

    // Start server
    let addr = std::env::var("LEAGUE_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(addr = %addr, "server listening");
    println!("\n🚀 Server running on http://{}", addr);
    println!("   API: http://{}/api/standings", addr);
    println!("\n   Press Ctrl+C to stop\n");

    axum::serve(listener, app).await?;
    Ok(())
}
