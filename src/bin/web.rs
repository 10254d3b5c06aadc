//! Single binary web server: REST API for the tournament state, static files
//! from /static for the display layer.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default so the app is reachable via DNS on a VPS.
//! Override with env: HOST, PORT, STATE_FILE (snapshot path), MIRROR_FILE
//! (optional secondary snapshot for shared viewing), ADMIN_CODE (optional
//! shared code gating mutations; unset disables gating).

use actix_files::Files;
use actix_session::{storage::CookieSessionStore, Session, SessionMiddleware};
use actix_web::cookie::Key;
use actix_web::{
    delete, get, post, put,
    web::{self, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use football_tournament_web::{
    group_standings, league_standings, reduce, storage, zone_for_rank, Action, TournamentState,
    ZoneScope, ZoneSetting,
};
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::RwLock;
use uuid::Uuid;

/// Shared app context: the single state snapshot plus persistence wiring.
struct AppContext {
    state: RwLock<TournamentState>,
    state_file: PathBuf,
    mirror_file: Option<PathBuf>,
    admin_code: Option<String>,
}

type AppData = Data<AppContext>;

const ADMIN_SESSION_KEY: &str = "is_admin";

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct AdminLoginBody {
    code: String,
}

#[derive(Deserialize)]
struct NameBody {
    name: String,
}

#[derive(Deserialize)]
struct RandomGroupsBody {
    group_count: usize,
    #[serde(default = "default_group_prefix")]
    name_prefix: String,
}

fn default_group_prefix() -> String {
    "Group".to_string()
}

#[derive(Deserialize)]
struct GroupTeamBody {
    team_id: Uuid,
}

#[derive(Deserialize)]
struct ScoreBody {
    team1_score: u32,
    team2_score: u32,
}

#[derive(Deserialize)]
struct CreateKnockoutBody {
    team_count: usize,
    /// Empty means "seed with the first `team_count` registered teams".
    #[serde(default)]
    team_ids: Vec<Uuid>,
}

#[derive(Deserialize)]
struct SetupLeagueBody {
    name: String,
    team_ids: Vec<Uuid>,
    #[serde(default)]
    play_each_team_twice: bool,
}

#[derive(Deserialize)]
struct ZoneBody {
    name: String,
    start_position: usize,
    end_position: usize,
    color: String,
}

/// Path segment: team id (e.g. /api/teams/{team_id})
#[derive(Deserialize)]
struct TeamPath {
    team_id: Uuid,
}

/// Path segment: group id (e.g. /api/groups/{group_id})
#[derive(Deserialize)]
struct GroupPath {
    group_id: Uuid,
}

#[derive(Deserialize)]
struct GroupTeamPath {
    group_id: Uuid,
    team_id: Uuid,
}

#[derive(Deserialize)]
struct GroupMatchPath {
    group_id: Uuid,
    match_id: Uuid,
}

#[derive(Deserialize)]
struct GroupZonePath {
    group_id: Uuid,
    zone_id: Uuid,
}

#[derive(Deserialize)]
struct GroupRankPath {
    group_id: Uuid,
    rank: usize,
}

#[derive(Deserialize)]
struct KnockoutMatchPath {
    round_index: usize,
    match_index: usize,
}

#[derive(Deserialize)]
struct LeagueMatchPath {
    match_id: Uuid,
}

#[derive(Deserialize)]
struct ZonePath {
    zone_id: Uuid,
}

#[derive(Deserialize)]
struct RankPath {
    rank: usize,
}

/// When an admin code is configured, mutating endpoints require the session
/// to have passed the code check. Without a configured code everything is
/// open (development mode).
fn check_admin(ctx: &AppContext, session: &Session) -> Result<(), HttpResponse> {
    if ctx.admin_code.is_none() {
        return Ok(());
    }
    match session.get::<bool>(ADMIN_SESSION_KEY) {
        Ok(Some(true)) => Ok(()),
        _ => Err(HttpResponse::Unauthorized()
            .json(serde_json::json!({ "error": "Admin code required" }))),
    }
}

/// Persist the snapshot locally, then mirror it. Neither failure rolls back
/// the in-memory state; they are logged and the request still succeeds.
fn persist(ctx: &AppContext, snapshot: &TournamentState) {
    if let Err(e) = storage::save_state(&ctx.state_file, snapshot) {
        log::error!(
            "failed to persist state to {}: {}",
            ctx.state_file.display(),
            e
        );
    }
    if let Some(mirror) = &ctx.mirror_file {
        storage::mirror_state(mirror, snapshot);
    }
}

/// Run one action through the reducer. On success the new snapshot replaces
/// the shared state, is persisted, and is returned to the client; on
/// rejection the state is untouched and the error message is surfaced.
fn dispatch(ctx: &AppContext, action: Action) -> HttpResponse {
    let mut guard = match ctx.state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match reduce(&guard, action) {
        Ok(next) => {
            *guard = next.clone();
            drop(guard);
            persist(ctx, &next);
            HttpResponse::Ok().json(next)
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "football-tournament-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Full state snapshot (what the display layer renders from).
#[get("/api/state")]
async fn api_get_state(ctx: AppData) -> HttpResponse {
    let guard = match ctx.state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(&*guard)
}

/// Check the shared admin code and mark this session as admin.
#[post("/api/admin/login")]
async fn api_admin_login(ctx: AppData, session: Session, body: Json<AdminLoginBody>) -> HttpResponse {
    if let Some(expected) = &ctx.admin_code {
        if body.code != *expected {
            return HttpResponse::Unauthorized()
                .json(serde_json::json!({ "error": "Wrong admin code" }));
        }
        if session.insert(ADMIN_SESSION_KEY, true).is_err() {
            return HttpResponse::InternalServerError().body("session error");
        }
    }
    dispatch(&ctx, Action::SetAdminMode { enabled: true })
}

#[post("/api/admin/logout")]
async fn api_admin_logout(ctx: AppData, session: Session) -> HttpResponse {
    let _ = session.remove(ADMIN_SESSION_KEY);
    dispatch(&ctx, Action::SetAdminMode { enabled: false })
}

#[post("/api/teams")]
async fn api_add_team(ctx: AppData, session: Session, body: Json<NameBody>) -> HttpResponse {
    if let Err(resp) = check_admin(&ctx, &session) {
        return resp;
    }
    dispatch(
        &ctx,
        Action::AddTeam {
            name: body.into_inner().name,
        },
    )
}

#[put("/api/teams/{team_id}")]
async fn api_rename_team(
    ctx: AppData,
    session: Session,
    path: Path<TeamPath>,
    body: Json<NameBody>,
) -> HttpResponse {
    if let Err(resp) = check_admin(&ctx, &session) {
        return resp;
    }
    dispatch(
        &ctx,
        Action::RenameTeam {
            team_id: path.team_id,
            new_name: body.into_inner().name,
        },
    )
}

#[delete("/api/teams/{team_id}")]
async fn api_delete_team(ctx: AppData, session: Session, path: Path<TeamPath>) -> HttpResponse {
    if let Err(resp) = check_admin(&ctx, &session) {
        return resp;
    }
    dispatch(
        &ctx,
        Action::DeleteTeam {
            team_id: path.team_id,
        },
    )
}

/// Bulk team import from a CSV body with a `name` column. Rows that fail
/// (empty or duplicate names) are skipped and reported, not fatal.
#[post("/api/teams/import")]
async fn api_import_teams(ctx: AppData, session: Session, body: String) -> HttpResponse {
    if let Err(resp) = check_admin(&ctx, &session) {
        return resp;
    }
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(body.as_bytes());
    let name_idx = match reader.headers() {
        Ok(headers) => headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case("name")),
        Err(e) => {
            return HttpResponse::BadRequest()
                .json(serde_json::json!({ "error": format!("Invalid CSV: {}", e) }))
        }
    };
    let Some(name_idx) = name_idx else {
        return HttpResponse::BadRequest()
            .json(serde_json::json!({ "error": "CSV must have a 'name' column" }));
    };
    let mut names = Vec::new();
    for record in reader.records() {
        match record {
            Ok(record) => {
                if let Some(name) = record.get(name_idx) {
                    if !name.trim().is_empty() {
                        names.push(name.trim().to_string());
                    }
                }
            }
            Err(e) => {
                return HttpResponse::BadRequest()
                    .json(serde_json::json!({ "error": format!("Invalid CSV: {}", e) }))
            }
        }
    }

    let mut guard = match ctx.state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let mut added = 0usize;
    let mut skipped = Vec::new();
    for name in names {
        match reduce(&guard, Action::AddTeam { name: name.clone() }) {
            Ok(next) => {
                *guard = next;
                added += 1;
            }
            Err(e) => skipped.push(serde_json::json!({ "name": name, "reason": e.to_string() })),
        }
    }
    let snapshot = guard.clone();
    drop(guard);
    persist(&ctx, &snapshot);
    HttpResponse::Ok().json(serde_json::json!({
        "added": added,
        "skipped": skipped,
        "state": snapshot,
    }))
}

#[post("/api/groups")]
async fn api_create_group(ctx: AppData, session: Session, body: Json<NameBody>) -> HttpResponse {
    if let Err(resp) = check_admin(&ctx, &session) {
        return resp;
    }
    dispatch(
        &ctx,
        Action::CreateGroup {
            name: body.into_inner().name,
        },
    )
}

#[delete("/api/groups/{group_id}")]
async fn api_delete_group(ctx: AppData, session: Session, path: Path<GroupPath>) -> HttpResponse {
    if let Err(resp) = check_admin(&ctx, &session) {
        return resp;
    }
    dispatch(
        &ctx,
        Action::DeleteGroup {
            group_id: path.group_id,
        },
    )
}

#[post("/api/groups/random")]
async fn api_random_groups(
    ctx: AppData,
    session: Session,
    body: Json<RandomGroupsBody>,
) -> HttpResponse {
    if let Err(resp) = check_admin(&ctx, &session) {
        return resp;
    }
    let body = body.into_inner();
    dispatch(
        &ctx,
        Action::RandomGroups {
            group_count: body.group_count,
            name_prefix: body.name_prefix,
        },
    )
}

#[post("/api/groups/{group_id}/teams")]
async fn api_add_team_to_group(
    ctx: AppData,
    session: Session,
    path: Path<GroupPath>,
    body: Json<GroupTeamBody>,
) -> HttpResponse {
    if let Err(resp) = check_admin(&ctx, &session) {
        return resp;
    }
    dispatch(
        &ctx,
        Action::AddTeamToGroup {
            group_id: path.group_id,
            team_id: body.team_id,
        },
    )
}

#[delete("/api/groups/{group_id}/teams/{team_id}")]
async fn api_remove_team_from_group(
    ctx: AppData,
    session: Session,
    path: Path<GroupTeamPath>,
) -> HttpResponse {
    if let Err(resp) = check_admin(&ctx, &session) {
        return resp;
    }
    dispatch(
        &ctx,
        Action::RemoveTeamFromGroup {
            group_id: path.group_id,
            team_id: path.team_id,
        },
    )
}

/// Generate (or destructively re-generate) a group's round-robin matches.
#[post("/api/groups/{group_id}/matches")]
async fn api_generate_group_matches(
    ctx: AppData,
    session: Session,
    path: Path<GroupPath>,
) -> HttpResponse {
    if let Err(resp) = check_admin(&ctx, &session) {
        return resp;
    }
    dispatch(
        &ctx,
        Action::GenerateGroupMatches {
            group_id: path.group_id,
        },
    )
}

#[put("/api/groups/{group_id}/matches/{match_id}")]
async fn api_record_group_result(
    ctx: AppData,
    session: Session,
    path: Path<GroupMatchPath>,
    body: Json<ScoreBody>,
) -> HttpResponse {
    if let Err(resp) = check_admin(&ctx, &session) {
        return resp;
    }
    dispatch(
        &ctx,
        Action::RecordGroupResult {
            group_id: path.group_id,
            match_id: path.match_id,
            team1_score: body.team1_score,
            team2_score: body.team2_score,
        },
    )
}

#[get("/api/groups/{group_id}/standings")]
async fn api_group_standings(ctx: AppData, path: Path<GroupPath>) -> HttpResponse {
    let guard = match ctx.state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(group_standings(&guard, path.group_id))
}

/// Zone highlighting a standings rank in this group (null when none).
#[get("/api/groups/{group_id}/zones/rank/{rank}")]
async fn api_group_zone_for_rank(ctx: AppData, path: Path<GroupRankPath>) -> HttpResponse {
    let guard = match ctx.state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let zone = guard
        .group(path.group_id)
        .and_then(|g| zone_for_rank(&g.zone_settings, path.rank));
    HttpResponse::Ok().json(zone)
}

#[post("/api/groups/{group_id}/zones")]
async fn api_add_group_zone(
    ctx: AppData,
    session: Session,
    path: Path<GroupPath>,
    body: Json<ZoneBody>,
) -> HttpResponse {
    if let Err(resp) = check_admin(&ctx, &session) {
        return resp;
    }
    let body = body.into_inner();
    dispatch(
        &ctx,
        Action::AddZone {
            scope: ZoneScope::Group(path.group_id),
            name: body.name,
            start_position: body.start_position,
            end_position: body.end_position,
            color: body.color,
        },
    )
}

#[put("/api/groups/{group_id}/zones/{zone_id}")]
async fn api_edit_group_zone(
    ctx: AppData,
    session: Session,
    path: Path<GroupZonePath>,
    body: Json<ZoneBody>,
) -> HttpResponse {
    if let Err(resp) = check_admin(&ctx, &session) {
        return resp;
    }
    let body = body.into_inner();
    dispatch(
        &ctx,
        Action::EditZone {
            scope: ZoneScope::Group(path.group_id),
            zone: ZoneSetting {
                id: path.zone_id,
                name: body.name,
                start_position: body.start_position,
                end_position: body.end_position,
                color: body.color,
            },
        },
    )
}

#[delete("/api/groups/{group_id}/zones/{zone_id}")]
async fn api_delete_group_zone(
    ctx: AppData,
    session: Session,
    path: Path<GroupZonePath>,
) -> HttpResponse {
    if let Err(resp) = check_admin(&ctx, &session) {
        return resp;
    }
    dispatch(
        &ctx,
        Action::DeleteZone {
            scope: ZoneScope::Group(path.group_id),
            zone_id: path.zone_id,
        },
    )
}

/// Create (or replace) the knockout bracket.
#[post("/api/knockout")]
async fn api_create_knockout(
    ctx: AppData,
    session: Session,
    body: Json<CreateKnockoutBody>,
) -> HttpResponse {
    if let Err(resp) = check_admin(&ctx, &session) {
        return resp;
    }
    let body = body.into_inner();
    let team_ids = if body.team_ids.is_empty() {
        let guard = match ctx.state.read() {
            Ok(guard) => guard,
            Err(_) => return HttpResponse::InternalServerError().body("lock error"),
        };
        guard
            .teams
            .iter()
            .take(body.team_count)
            .map(|t| t.id)
            .collect()
    } else {
        body.team_ids
    };
    dispatch(
        &ctx,
        Action::CreateKnockoutStage {
            team_count: body.team_count,
            team_ids,
        },
    )
}

#[put("/api/knockout/{round_index}/{match_index}")]
async fn api_record_knockout_result(
    ctx: AppData,
    session: Session,
    path: Path<KnockoutMatchPath>,
    body: Json<ScoreBody>,
) -> HttpResponse {
    if let Err(resp) = check_admin(&ctx, &session) {
        return resp;
    }
    dispatch(
        &ctx,
        Action::RecordKnockoutResult {
            round_index: path.round_index,
            match_index: path.match_index,
            team1_score: body.team1_score,
            team2_score: body.team2_score,
        },
    )
}

/// Set up the league (replaces any existing one, matches generated up front).
#[post("/api/league")]
async fn api_setup_league(
    ctx: AppData,
    session: Session,
    body: Json<SetupLeagueBody>,
) -> HttpResponse {
    if let Err(resp) = check_admin(&ctx, &session) {
        return resp;
    }
    let body = body.into_inner();
    dispatch(
        &ctx,
        Action::SetupLeague {
            name: body.name,
            team_ids: body.team_ids,
            play_each_team_twice: body.play_each_team_twice,
        },
    )
}

#[delete("/api/league")]
async fn api_clear_league(ctx: AppData, session: Session) -> HttpResponse {
    if let Err(resp) = check_admin(&ctx, &session) {
        return resp;
    }
    dispatch(&ctx, Action::ClearLeague)
}

/// Regenerate the league's matches from its roster (destructive).
#[post("/api/league/matches")]
async fn api_regenerate_league_matches(ctx: AppData, session: Session) -> HttpResponse {
    if let Err(resp) = check_admin(&ctx, &session) {
        return resp;
    }
    dispatch(&ctx, Action::RegenerateLeagueMatches)
}

#[put("/api/league/matches/{match_id}")]
async fn api_record_league_result(
    ctx: AppData,
    session: Session,
    path: Path<LeagueMatchPath>,
    body: Json<ScoreBody>,
) -> HttpResponse {
    if let Err(resp) = check_admin(&ctx, &session) {
        return resp;
    }
    dispatch(
        &ctx,
        Action::RecordLeagueResult {
            match_id: path.match_id,
            team1_score: body.team1_score,
            team2_score: body.team2_score,
        },
    )
}

#[get("/api/league/standings")]
async fn api_league_standings(ctx: AppData) -> HttpResponse {
    let guard = match ctx.state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(league_standings(&guard))
}

/// Zone highlighting a league standings rank (null when none).
#[get("/api/league/zones/rank/{rank}")]
async fn api_league_zone_for_rank(ctx: AppData, path: Path<RankPath>) -> HttpResponse {
    let guard = match ctx.state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let zone = guard
        .league
        .as_ref()
        .and_then(|l| zone_for_rank(&l.zone_settings, path.rank));
    HttpResponse::Ok().json(zone)
}

#[post("/api/league/zones")]
async fn api_add_league_zone(ctx: AppData, session: Session, body: Json<ZoneBody>) -> HttpResponse {
    if let Err(resp) = check_admin(&ctx, &session) {
        return resp;
    }
    let body = body.into_inner();
    dispatch(
        &ctx,
        Action::AddZone {
            scope: ZoneScope::League,
            name: body.name,
            start_position: body.start_position,
            end_position: body.end_position,
            color: body.color,
        },
    )
}

#[put("/api/league/zones/{zone_id}")]
async fn api_edit_league_zone(
    ctx: AppData,
    session: Session,
    path: Path<ZonePath>,
    body: Json<ZoneBody>,
) -> HttpResponse {
    if let Err(resp) = check_admin(&ctx, &session) {
        return resp;
    }
    let body = body.into_inner();
    dispatch(
        &ctx,
        Action::EditZone {
            scope: ZoneScope::League,
            zone: ZoneSetting {
                id: path.zone_id,
                name: body.name,
                start_position: body.start_position,
                end_position: body.end_position,
                color: body.color,
            },
        },
    )
}

#[delete("/api/league/zones/{zone_id}")]
async fn api_delete_league_zone(
    ctx: AppData,
    session: Session,
    path: Path<ZonePath>,
) -> HttpResponse {
    if let Err(resp) = check_admin(&ctx, &session) {
        return resp;
    }
    dispatch(
        &ctx,
        Action::DeleteZone {
            scope: ZoneScope::League,
            zone_id: path.zone_id,
        },
    )
}

/// Wipe everything back to the empty initial state.
#[post("/api/reset")]
async fn api_reset(ctx: AppData, session: Session) -> HttpResponse {
    if let Err(resp) = check_admin(&ctx, &session) {
        return resp;
    }
    dispatch(&ctx, Action::Reset)
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_state_file() -> String {
    "tournament_state.json".to_string()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let state_file = PathBuf::from(std::env::var("STATE_FILE").unwrap_or_else(|_| default_state_file()));
    let mirror_file = std::env::var("MIRROR_FILE").ok().map(PathBuf::from);
    let admin_code = std::env::var("ADMIN_CODE").ok().filter(|c| !c.is_empty());

    let mut initial = storage::load_state(&state_file);
    initial.is_initialized = true;
    log::info!(
        "Loaded state from {}: {} team(s), {} group(s), league: {}, knockout rounds: {}",
        state_file.display(),
        initial.teams.len(),
        initial.groups.len(),
        if initial.league.is_some() { "yes" } else { "no" },
        initial.knockout_rounds.len()
    );
    if admin_code.is_none() {
        log::warn!("ADMIN_CODE not set; mutations are open to everyone");
    }

    let ctx = Data::new(AppContext {
        state: RwLock::new(initial),
        state_file,
        mirror_file,
        admin_code,
    });
    // Cookie signing key is regenerated per boot; admin sessions do not
    // survive a restart, which is acceptable for a shared static code.
    let session_key = Key::generate();

    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .app_data(ctx.clone())
            .wrap(SessionMiddleware::new(
                CookieSessionStore::default(),
                session_key.clone(),
            ))
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_get_state)
            .service(api_admin_login)
            .service(api_admin_logout)
            .service(api_add_team)
            .service(api_rename_team)
            .service(api_delete_team)
            .service(api_import_teams)
            .service(api_create_group)
            .service(api_delete_group)
            .service(api_random_groups)
            .service(api_add_team_to_group)
            .service(api_remove_team_from_group)
            .service(api_generate_group_matches)
            .service(api_record_group_result)
            .service(api_group_standings)
            .service(api_group_zone_for_rank)
            .service(api_add_group_zone)
            .service(api_edit_group_zone)
            .service(api_delete_group_zone)
            .service(api_create_knockout)
            .service(api_record_knockout_result)
            .service(api_setup_league)
            .service(api_clear_league)
            .service(api_regenerate_league_matches)
            .service(api_record_league_result)
            .service(api_league_standings)
            .service(api_league_zone_for_rank)
            .service(api_add_league_zone)
            .service(api_edit_league_zone)
            .service(api_delete_league_zone)
            .service(api_reset)
            .service(Files::new("/static", "static").show_files_listing())
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(
            "<!doctype html><html><head><title>Football tournament organizer</title></head>\
             <body><h1>Football tournament organizer</h1>\
             <p>REST API under <code>/api</code>; current snapshot at \
             <a href=\"/api/state\">/api/state</a>.</p></body></html>",
        )
}
