use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    routing::{get, post},
    serve, Json, Router,
};
use serde::{Deserialize, Deserializer, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::application::reservation_service::{ProviderSummary, ReservationService};
use crate::errors::AppError;
use reservations_providers::BookingDecision;
use reservations_types::domain::reservation::{
    AvailabilityRequest, AvailabilityResponse, CancelReservationRequest, CancellationOutcome,
    CreateReservationRequest, Reservation, ReservationProviderConfig,
};
use reservations_types::domain::result::ProviderResult;
use reservations_types::domain::system::ReservationSystemType;

#[derive(Clone)]
pub struct HttpServerConfig {
    pub port: String,
}

#[derive(Clone)]
pub struct HttpServer {
    pub service: Arc<ReservationService>,
    pub config: HttpServerConfig,
}

/// Body of every provider operation: the vendor's system, the request, and
/// optional per-call credentials.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProviderCall<T> {
    #[serde(default, deserialize_with = "optional_system")]
    pub system: Option<ReservationSystemType>,
    pub request: T,
    #[serde(default)]
    pub config: Option<ReservationProviderConfig>,
}

fn optional_system<'de, D>(deserializer: D) -> Result<Option<ReservationSystemType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    ReservationSystemType::parse_optional(raw.as_deref()).map_err(serde::de::Error::custom)
}

#[derive(Deserialize)]
struct InfoQuery {
    system: Option<String>,
    link: Option<String>,
}

impl HttpServer {
    pub async fn new(service: ReservationService, config: HttpServerConfig) -> anyhow::Result<Self> {
        Ok(Self {
            service: Arc::new(service),
            config,
        })
    }

    pub fn router(&self) -> Router {
        let trace_layer = TraceLayer::new_for_http()
            .make_span_with(|request: &axum::extract::Request<_>| {
                let uri = request.uri().to_string();
                let request_id = Uuid::new_v4();
                tracing::info_span!(
                    "http_request",
                    %request_id,
                    method = %request.method(),
                    uri
                )
            })
            .on_request(
                |request: &axum::extract::Request<_>, span: &tracing::Span| {
                    tracing::info!(
                        parent: span,
                        method = %request.method(),
                        uri = %request.uri(),
                        "request"
                    );
                },
            )
            .on_response(
                |response: &axum::response::Response, latency: Duration, span: &tracing::Span| {
                    tracing::info!(
                        parent: span,
                        status = %response.status(),
                        latency_ms = %latency.as_millis(),
                        "response"
                    );
                },
            );

        Router::new()
            .route("/health", get(health))
            .route("/reservations/info", get(reservation_info))
            .route("/reservations/providers/{system}", get(provider_summary))
            .route("/reservations/availability", post(get_availability))
            .route("/reservations", post(create_reservation))
            .route("/reservations/cancel", post(cancel_reservation))
            .layer(trace_layer)
            .with_state(self.service.clone())
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let app = self.router();
        let addr: SocketAddr = format!("0.0.0.0:{}", self.config.port).parse()?;
        tracing::info!("starting server on {}", addr);
        let listener = tokio::net::TcpListener::bind(addr).await?;
        serve(listener, app.into_make_service()).await?;
        Ok(())
    }
}

async fn health() -> (axum::http::StatusCode, Json<serde_json::Value>) {
    (
        axum::http::StatusCode::OK,
        Json(serde_json::json!({ "status": "ok" })),
    )
}

async fn reservation_info(
    State(service): State<Arc<ReservationService>>,
    Query(query): Query<InfoQuery>,
) -> Result<Json<BookingDecision>, AppError> {
    let system = ReservationSystemType::parse_optional(query.system.as_deref())?;
    Ok(Json(
        service.booking_decision(system, query.link.as_deref()),
    ))
}

async fn provider_summary(
    State(service): State<Arc<ReservationService>>,
    Path(system): Path<String>,
) -> Result<Json<ProviderSummary>, AppError> {
    let system: ReservationSystemType = system.parse()?;
    Ok(Json(service.provider_summary(Some(system))))
}

async fn get_availability(
    State(service): State<Arc<ReservationService>>,
    payload: Result<Json<ProviderCall<AvailabilityRequest>>, JsonRejection>,
) -> Result<Json<ProviderResult<AvailabilityResponse>>, AppError> {
    let Json(call) = payload?;
    let result = service
        .get_availability(call.system, call.request, call.config)
        .await?;
    Ok(Json(result))
}

async fn create_reservation(
    State(service): State<Arc<ReservationService>>,
    payload: Result<Json<ProviderCall<CreateReservationRequest>>, JsonRejection>,
) -> Result<(axum::http::StatusCode, Json<ProviderResult<Reservation>>), AppError> {
    let Json(call) = payload?;
    let result = service
        .create_reservation(call.system, call.request, call.config)
        .await?;
    let status = if result.is_success() {
        axum::http::StatusCode::CREATED
    } else {
        axum::http::StatusCode::OK
    };
    Ok((status, Json(result)))
}

async fn cancel_reservation(
    State(service): State<Arc<ReservationService>>,
    payload: Result<Json<ProviderCall<CancelReservationRequest>>, JsonRejection>,
) -> Result<Json<ProviderResult<CancellationOutcome>>, AppError> {
    let Json(call) = payload?;
    let result = service
        .cancel_reservation(call.system, call.request, call.config)
        .await?;
    Ok(Json(result))
}
