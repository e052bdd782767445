//! Operational HTTP endpoints.
//!
//! - `/`        : HTML landing page linking to the telemetry path
//! - `/healthz` : liveness
//! - metrics    : Prometheus text format (one upstream scrape per request)

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use prometheus::{Encoder, TextEncoder};

use crate::app_state::AppState;

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn landing(State(state): State<AppState>) -> Html<String> {
    let path = &state.cfg().web.telemetry_path;
    Html(format!(
        "<html>\n\
         <head><title>Nomad Exporter</title></head>\n\
         <body>\n\
         <h1>Nomad Exporter</h1>\n\
         <p><a href='{path}'>Metrics</a></p>\n\
         </body>\n\
         </html>\n"
    ))
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    // Collection blocks on the upstream GET.
    let gathered = tokio::task::spawn_blocking(move || {
        let families = state.registry().gather();
        let encoder = TextEncoder::new();
        let mut buf = Vec::new();
        encoder
            .encode(&families, &mut buf)
            .map(|()| (encoder.format_type().to_string(), buf))
            .map_err(|e| e.to_string())
    })
    .await;

    match gathered {
        Ok(Ok((content_type, body))) => {
            (StatusCode::OK, [(header::CONTENT_TYPE, content_type)], body).into_response()
        }
        Ok(Err(e)) => {
            tracing::error!(error = %e, "metrics encoding failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to encode metrics").into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "metrics collection task failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to collect metrics").into_response()
        }
    }
}
