use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    serve::Serve,
    Json, Router,
};

use redis::{Client, RedisResult};
use serde::{Deserialize, Serialize};
use std::error::Error;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::Level;

use domain::{AuthAPIError, LedgerAPIError};
pub mod routes;
use crate::utils::tracing::*;
use routes::{
    auth::{auth_status, login, logout, setup},
    index,
    ledger::{
        add_member, get_members, get_years, print_bill, update_member_field,
        update_member_payment, update_member_shift,
    },
};
pub mod app_state;
pub mod domain;
pub mod services;
pub mod views;
use app_state::AppState;
pub mod utils;

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AuthAPIError {
    fn into_response(self) -> Response {
        let (status, error_message) = auth_error_status(&self);
        let body = Json(ErrorResponse {
            error: error_message,
        });
        (status, body).into_response()
    }
}

fn auth_error_status(error: &AuthAPIError) -> (StatusCode, String) {
    match error {
        AuthAPIError::AdminAlreadyExists => {
            log_error_chain(error, Level::DEBUG);
            (
                StatusCode::CONFLICT,
                "Admin account already exists".to_string(),
            )
        }
        AuthAPIError::ValidationError(message) => {
            log_error_chain(error, Level::DEBUG);
            (StatusCode::BAD_REQUEST, message.as_ref().to_owned())
        }
        AuthAPIError::IncorrectCredentials => {
            log_error_chain(error, Level::DEBUG);
            (
                StatusCode::UNAUTHORIZED,
                "Invalid username or password!".to_string(),
            )
        }
        AuthAPIError::UnexpectedError(_) => {
            log_error_chain(error, Level::ERROR);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Unexpected error".to_string(),
            )
        }
        AuthAPIError::MissingToken => {
            log_error_chain(error, Level::DEBUG);
            (StatusCode::BAD_REQUEST, "Missing token".to_string())
        }
        AuthAPIError::InvalidToken => {
            log_error_chain(error, Level::DEBUG);
            (StatusCode::UNAUTHORIZED, "Invalid token".to_string())
        }
    }
}

impl IntoResponse for LedgerAPIError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            LedgerAPIError::MemberNotFound(id) => {
                log_error_chain(&self, Level::DEBUG);
                (StatusCode::NOT_FOUND, format!("Member not found: {id}"))
            }
            LedgerAPIError::BillRefused(reason) => {
                log_error_chain(&self, Level::DEBUG);
                (StatusCode::UNPROCESSABLE_ENTITY, reason.to_owned())
            }
            LedgerAPIError::AuthenticationError(auth_error) => {
                auth_error_status(auth_error)
            }
            LedgerAPIError::UnexpectedError(_) => {
                log_error_chain(&self, Level::ERROR);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Unexpected error".to_string(),
                )
            }
            LedgerAPIError::ValidationError(message) => {
                log_error_chain(&self, Level::DEBUG);
                (StatusCode::BAD_REQUEST, message.as_ref().to_owned())
            }
        };
        let body = Json(ErrorResponse {
            error: error_message,
        });
        (status, body).into_response()
    }
}

fn log_error_chain(e: &(dyn Error + 'static), debug_level: Level) {
    let separator =
        "\n-----------------------------------------------------------------------------------\n";
    let mut report = format!("{}{:?}\n", separator, e);
    let mut current = e.source();
    while let Some(cause) = current {
        let str = format!("Caused by:\n\n{:?}", cause);
        report = format!("{}\n{}", report, str);
        current = cause.source();
    }
    report = format!("{}\n{}", report, separator);
    match debug_level {
        Level::ERROR => tracing::error!("{}", report),
        Level::WARN => tracing::warn!("{}", report),
        Level::INFO => tracing::info!("{}", report),
        Level::DEBUG => tracing::debug!("{}", report),
        Level::TRACE => tracing::trace!("{}", report),
    }
}

pub struct Application {
    server: Serve<Router, Router>,
    pub address: String,
}

impl Application {
    pub async fn build(
        app_state: AppState,
        address: &str,
    ) -> Result<Self, Box<dyn Error>> {
        let router = Router::new()
            .route("/", get(index))
            .route("/auth/status", get(auth_status))
            .route("/auth/setup", post(setup))
            .route("/auth/login", post(login))
            .route("/auth/logout", post(logout))
            .route("/ledger/years", get(get_years))
            .route("/ledger/members", get(get_members).post(add_member))
            .route("/ledger/members/field", put(update_member_field))
            .route("/ledger/members/shift", put(update_member_shift))
            .route("/ledger/members/payment", put(update_member_payment))
            .route("/ledger/members/bill", get(print_bill))
            .with_state(app_state)
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(make_span_with_request_id)
                    .on_request(on_request)
                    .on_response(on_response),
            );

        let listener = tokio::net::TcpListener::bind(address).await?;
        let address = listener.local_addr()?.to_string();
        let server = axum::serve(listener, router);

        Ok(Application { server, address })
    }

    pub async fn run(self) -> Result<(), std::io::Error> {
        tracing::info!("listening on {}", &self.address);
        self.server.with_graceful_shutdown(shutdown_signal()).await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

pub fn get_redis_client(redis_hostname: String) -> RedisResult<Client> {
    let redis_url = format!("redis://{}/", redis_hostname);
    redis::Client::open(redis_url)
}
