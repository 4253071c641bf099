// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod bookings;
mod session;

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use bookings::{BookingRegistry, DEFAULT_FEEDBACK_TTL, DEFAULT_IDLE_TTL};
use clap::{Parser, Subcommand};
use red_curtain::BookingSession;
use red_curtain_api::{
    AddMovieRequest, AddMovieResponse, ApiError, BookingCommandOutcome, BookingView,
    ChooseDateRequest, ChooseShowtimeRequest, ContactRequest, ContactResponse, ListMoviesRequest,
    ListMoviesResponse, ListShowtimesResponse, OpenBookingRequest, SeedCatalogResponse,
    SelectSeatRequest, SignInRequest, SignInResponse, WhoAmIResponse, add_movie, booking_view,
    choose_date, choose_showtime, confirm_booking, list_movies, list_showtimes, open_booking,
    reset_feedback, seed_catalog, select_seat, sign_in, sign_out, submit_contact, whoami,
};
use red_curtain_notify::{
    ContactRelay, DEFAULT_SMTP_PORT, DisabledRelay, RelayError, SmtpConfig, SmtpRelay,
};
use red_curtain_persistence::{Persistence, PersistenceError};
use serde::{Deserialize, Serialize};
use session::{OptionalViewer, SessionViewer};
use std::sync::Arc;
use std::time::Duration;
use time::{Date, OffsetDateTime};
use tokio::sync::Mutex;
use tracing::{error, info, warn};

/// Red Curtain Server - HTTP server for the Red Curtain booking system
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Seconds a feedback message stays on a booking session
    #[arg(long, default_value_t = DEFAULT_FEEDBACK_TTL.as_secs())]
    feedback_ttl_secs: u64,

    /// Seconds an untouched booking session stays live
    #[arg(long, default_value_t = DEFAULT_IDLE_TTL.as_secs())]
    booking_idle_secs: u64,

    /// SMTP server for the contact relay. Without it, contact messages are refused.
    #[arg(long, env = "SMTP_HOST")]
    smtp_host: Option<String>,

    /// SMTP server port
    #[arg(long, env = "SMTP_PORT", default_value_t = DEFAULT_SMTP_PORT)]
    smtp_port: u16,

    /// SMTP username, also used as the sender address
    #[arg(long, env = "EMAIL_FROM")]
    smtp_user: Option<String>,

    /// SMTP password
    #[arg(long, env = "EMAIL_PASSWORD", hide_env_values = true)]
    smtp_password: Option<String>,

    /// Address that receives contact messages. Defaults to the sender.
    #[arg(long, env = "CONTACT_RECIPIENT")]
    contact_recipient: Option<String>,

    #[command(subcommand)]
    command: Option<ServerCommand>,
}

#[derive(Subcommand, Debug)]
enum ServerCommand {
    /// Replace the movie store with the sample catalog and exit
    Seed,
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// The movie store and viewer sessions.
    persistence: Arc<Mutex<Persistence>>,
    /// Live booking sessions.
    bookings: Arc<BookingRegistry>,
    /// Outbound contact message delivery.
    relay: Arc<dyn ContactRelay>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// Error body for the contact endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ContactErrorResponse {
    success: bool,
    error: String,
}

/// Generic write acknowledgement.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct WriteResponse {
    success: bool,
    message: Option<String>,
}

/// Response for a newly opened booking session.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct OpenBookingResponse {
    booking_id: u64,
    view: BookingView,
}

/// Response for any booking command.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct BookingCommandResponse {
    booking_id: u64,
    /// Whether the command was accepted; a refusal is reported in `view.message`.
    accepted: bool,
    view: BookingView,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl HttpError {
    fn booking_not_found(booking_id: u64) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: format!("Booking {booking_id} does not exist"),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::DomainRuleViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::RelayFailed { .. } => StatusCode::BAD_GATEWAY,
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

// ============================================================================
// Catalog
// ============================================================================

/// Handler for GET `/movies` endpoint.
async fn handle_list_movies(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<ListMoviesRequest>,
) -> Result<Json<ListMoviesResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: ListMoviesResponse = list_movies(&mut persistence, &query)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/movies` endpoint.
async fn handle_add_movie(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<AddMovieRequest>,
) -> Result<Json<AddMovieResponse>, HttpError> {
    info!(id = %req.id, title = %req.title, "Handling add_movie request");

    let mut persistence = app_state.persistence.lock().await;
    let response: AddMovieResponse = add_movie(&mut persistence, &req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/showtimes` endpoint.
async fn handle_list_showtimes() -> Json<ListShowtimesResponse> {
    Json(list_showtimes())
}

// ============================================================================
// Identity
// ============================================================================

/// Handler for POST `/auth/sign_in` endpoint.
async fn handle_sign_in(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<SignInRequest>,
) -> Result<Json<SignInResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: SignInResponse = sign_in(&mut persistence, &req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/auth/sign_out` endpoint.
async fn handle_sign_out(
    AxumState(app_state): AxumState<AppState>,
    SessionViewer(viewer): SessionViewer,
) -> Result<Json<WriteResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    sign_out(&mut persistence, &viewer.session_token)?;
    drop(persistence);

    Ok(Json(WriteResponse {
        success: true,
        message: Some(format!("Goodbye, {}", viewer.display_name)),
    }))
}

/// Handler for GET `/auth/whoami` endpoint.
async fn handle_whoami(SessionViewer(viewer): SessionViewer) -> Json<WhoAmIResponse> {
    Json(whoami(&viewer))
}

// ============================================================================
// Booking Sessions
// ============================================================================

/// Handler for POST `/bookings` endpoint.
///
/// Opens a booking session with a freshly generated seat inventory.
async fn handle_open_booking(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<OpenBookingRequest>,
) -> Result<Json<OpenBookingResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let session: BookingSession = open_booking(&mut persistence, &req)?;
    drop(persistence);

    let view: BookingView = booking_view(&session);
    let booking_id: u64 = app_state.bookings.open(session).await;
    let live: usize = app_state.bookings.live_count().await;

    info!(booking_id, movie_id = %req.movie_id, live, "Booking session opened");

    Ok(Json(OpenBookingResponse { booking_id, view }))
}

/// Handler for GET `/bookings/{booking_id}` endpoint.
async fn handle_get_booking(
    AxumState(app_state): AxumState<AppState>,
    Path(booking_id): Path<u64>,
) -> Result<Json<BookingView>, HttpError> {
    let session: BookingSession = app_state
        .bookings
        .get(booking_id)
        .await
        .ok_or_else(|| HttpError::booking_not_found(booking_id))?;

    Ok(Json(booking_view(&session)))
}

/// Handler for DELETE `/bookings/{booking_id}` endpoint.
///
/// Returns to the catalog, discarding the session.
async fn handle_discard_booking(
    AxumState(app_state): AxumState<AppState>,
    Path(booking_id): Path<u64>,
) -> Result<Json<WriteResponse>, HttpError> {
    if !app_state.bookings.discard(booking_id).await {
        return Err(HttpError::booking_not_found(booking_id));
    }

    info!(booking_id, "Booking session discarded");

    Ok(Json(WriteResponse {
        success: true,
        message: None,
    }))
}

async fn run_booking_command<F>(
    app_state: &AppState,
    booking_id: u64,
    command: F,
) -> Result<Json<BookingCommandResponse>, HttpError>
where
    F: FnOnce(&BookingSession) -> Result<BookingCommandOutcome, ApiError>,
{
    let outcome: BookingCommandOutcome = app_state
        .bookings
        .update(booking_id, command)
        .await?
        .ok_or_else(|| HttpError::booking_not_found(booking_id))?;

    Ok(Json(BookingCommandResponse {
        booking_id,
        accepted: outcome.accepted(),
        view: booking_view(&outcome.session),
    }))
}

/// Handler for POST `/bookings/{booking_id}/seats` endpoint.
async fn handle_select_seat(
    AxumState(app_state): AxumState<AppState>,
    Path(booking_id): Path<u64>,
    OptionalViewer(auth): OptionalViewer,
    Json(req): Json<SelectSeatRequest>,
) -> Result<Json<BookingCommandResponse>, HttpError> {
    run_booking_command(&app_state, booking_id, |session| {
        select_seat(session, &req, &auth)
    })
    .await
}

/// Handler for POST `/bookings/{booking_id}/showtime` endpoint.
async fn handle_choose_showtime(
    AxumState(app_state): AxumState<AppState>,
    Path(booking_id): Path<u64>,
    OptionalViewer(auth): OptionalViewer,
    Json(req): Json<ChooseShowtimeRequest>,
) -> Result<Json<BookingCommandResponse>, HttpError> {
    run_booking_command(&app_state, booking_id, |session| {
        choose_showtime(session, &req, &auth)
    })
    .await
}

/// Handler for POST `/bookings/{booking_id}/date` endpoint.
async fn handle_choose_date(
    AxumState(app_state): AxumState<AppState>,
    Path(booking_id): Path<u64>,
    OptionalViewer(auth): OptionalViewer,
    Json(req): Json<ChooseDateRequest>,
) -> Result<Json<BookingCommandResponse>, HttpError> {
    let today: Date = today();
    run_booking_command(&app_state, booking_id, |session| {
        choose_date(session, &req, &auth, today)
    })
    .await
}

/// Handler for POST `/bookings/{booking_id}/confirm` endpoint.
///
/// The optional bearer token supplies the sign-in signal.
async fn handle_confirm_booking(
    AxumState(app_state): AxumState<AppState>,
    Path(booking_id): Path<u64>,
    OptionalViewer(auth): OptionalViewer,
) -> Result<Json<BookingCommandResponse>, HttpError> {
    info!(
        booking_id,
        signed_in = auth.viewer().is_some(),
        "Handling confirm_booking request"
    );
    run_booking_command(&app_state, booking_id, |session| {
        confirm_booking(session, &auth)
    })
    .await
}

/// Handler for DELETE `/bookings/{booking_id}/message` endpoint.
async fn handle_reset_feedback(
    AxumState(app_state): AxumState<AppState>,
    Path(booking_id): Path<u64>,
) -> Result<Json<BookingCommandResponse>, HttpError> {
    run_booking_command(&app_state, booking_id, reset_feedback).await
}

// ============================================================================
// Contact
// ============================================================================

/// Handler for POST `/contact` endpoint.
///
/// Failures use the contact form's own body shape rather than
/// `ErrorResponse`.
async fn handle_contact(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<ContactRequest>,
) -> Response {
    match submit_contact(app_state.relay.as_ref(), &req).await {
        Ok(response) => Json::<ContactResponse>(response).into_response(),
        Err(err) => {
            let status: StatusCode = match err {
                ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            let body: Json<ContactErrorResponse> = Json(ContactErrorResponse {
                success: false,
                error: err.to_string(),
            });
            (status, body).into_response()
        }
    }
}

fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/movies", get(handle_list_movies).post(handle_add_movie))
        .route("/showtimes", get(handle_list_showtimes))
        .route("/auth/sign_in", post(handle_sign_in))
        .route("/auth/sign_out", post(handle_sign_out))
        .route("/auth/whoami", get(handle_whoami))
        .route("/bookings", post(handle_open_booking))
        .route(
            "/bookings/{booking_id}",
            get(handle_get_booking).delete(handle_discard_booking),
        )
        .route("/bookings/{booking_id}/seats", post(handle_select_seat))
        .route("/bookings/{booking_id}/showtime", post(handle_choose_showtime))
        .route("/bookings/{booking_id}/date", post(handle_choose_date))
        .route("/bookings/{booking_id}/confirm", post(handle_confirm_booking))
        .route("/bookings/{booking_id}/message", delete(handle_reset_feedback))
        .route("/contact", post(handle_contact))
        .with_state(app_state)
}

/// Builds the contact relay from the SMTP settings.
///
/// Without an SMTP host or sender address, every contact message is
/// refused.
fn build_relay(args: &Args) -> Result<Arc<dyn ContactRelay>, RelayError> {
    let Some(host) = &args.smtp_host else {
        warn!("SMTP_HOST not set; contact messages will be refused");
        return Ok(Arc::new(DisabledRelay));
    };
    let Some(sender) = &args.smtp_user else {
        warn!("EMAIL_FROM not set; contact messages will be refused");
        return Ok(Arc::new(DisabledRelay));
    };

    let config: SmtpConfig = SmtpConfig {
        host: host.clone(),
        port: args.smtp_port,
        username: Some(sender.clone()),
        password: args.smtp_password.clone(),
        sender: sender.clone(),
        recipient: args
            .contact_recipient
            .clone()
            .unwrap_or_else(|| sender.clone()),
    };

    info!(host = %config.host, port = config.port, "Using SMTP contact relay");
    Ok(Arc::new(SmtpRelay::new(&config)?))
}

fn open_persistence(args: &Args) -> Result<Persistence, PersistenceError> {
    if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut persistence: Persistence = open_persistence(&args)?;

    if let Some(ServerCommand::Seed) = args.command {
        let response: SeedCatalogResponse = seed_catalog(&mut persistence)?;
        info!(inserted = response.inserted, "{}", response.message);
        return Ok(());
    }

    if persistence.count_movies()? == 0 {
        let response: SeedCatalogResponse = seed_catalog(&mut persistence)?;
        info!(inserted = response.inserted, "Movie store was empty, seeded sample catalog");
    }

    info!("Initializing Red Curtain Server");

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
        bookings: Arc::new(BookingRegistry::new(
            Duration::from_secs(args.feedback_ttl_secs),
            Duration::from_secs(args.booking_idle_secs),
        )),
        relay: build_relay(&args)?,
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
