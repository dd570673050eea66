use axum::{
    Router,
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
    routing::get,
};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;
use std::time::{Duration, Instant};
use tracing::error;

static OBSERVABILITY_ENABLED: OnceLock<bool> = OnceLock::new();

/// Check if observability is enabled via OBSERVABILITY_ENABLED env var
pub fn is_observability_enabled() -> bool {
    *OBSERVABILITY_ENABLED.get_or_init(|| {
        std::env::var("OBSERVABILITY_ENABLED")
            .map(|v| v.to_lowercase() != "false" && v != "0")
            .unwrap_or(true) // Enabled by default
    })
}

/// Initialize Prometheus metrics exporter with upkeep task
/// Returns None if observability is disabled or the recorder cannot be installed
pub fn init_metrics() -> Option<PrometheusHandle> {
    if !is_observability_enabled() {
        return None;
    }

    let builder = match PrometheusBuilder::new().set_buckets_for_metric(
        Matcher::Full("http_request_duration_seconds".to_string()),
        &[
            0.001, 0.005, 0.01, 0.025, 0.05, 0.075, 0.1, 0.25, 0.5, 0.75, 1.0, 2.5, 5.0,
        ],
    ) {
        Ok(builder) => builder,
        Err(e) => {
            error!(error = %e, "Failed to set histogram buckets");
            return None;
        }
    };

    let handle = match builder.install_recorder() {
        Ok(handle) => handle,
        Err(e) => {
            error!(error = %e, "Failed to install Prometheus recorder");
            return None;
        }
    };

    // Spawn upkeep task to clean stale metrics
    let upkeep_handle = handle.clone();
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(Duration::from_secs(5)).await;
            upkeep_handle.run_upkeep();
        }
    });

    Some(handle)
}

/// Metrics middleware to track HTTP requests
pub async fn metrics_middleware(req: Request, next: Next) -> Response {
    if !is_observability_enabled() {
        return next.run(req).await;
    }

    let start = Instant::now();
    let method = req.method().as_str().to_owned();
    let uri_path = req.uri().path().to_owned();

    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or(uri_path);

    gauge!("http_requests_active").increment(1.0);

    let response = next.run(req).await;

    let latency = start.elapsed().as_secs_f64();
    let status = response.status().as_u16();

    counter!("http_requests_total", "method" => method.clone(), "path" => path.clone(), "status" => status.to_string()).increment(1);

    histogram!("http_request_duration_seconds", "method" => method, "path" => path).record(latency);

    let status_category = match status {
        200..=299 => "2xx",
        300..=399 => "3xx",
        400..=499 => "4xx",
        500..=599 => "5xx",
        _ => "other",
    };
    counter!("http_requests_by_status", "status_category" => status_category).increment(1);

    gauge!("http_requests_active").decrement(1.0);

    response
}

/// Router for metrics server
pub fn metrics_app(handle: PrometheusHandle) -> Router {
    Router::new().route("/metrics", get(move || async move { handle.render() }))
}

// Business metrics helpers

/// Track login attempts
pub fn track_login(success: bool) {
    if !is_observability_enabled() {
        return;
    }
    let status = if success { "success" } else { "failure" };
    counter!("user_logins_total", "status" => status).increment(1);
}

pub fn track_session_token_issued() {
    if !is_observability_enabled() {
        return;
    }
    counter!("session_tokens_issued_total").increment(1);
}

pub fn track_logout() {
    if !is_observability_enabled() {
        return;
    }
    counter!("user_logouts_total").increment(1);
}

/// Track guard decisions by guard kind and resolved state
pub fn track_access_decision(guard: &'static str, outcome: &'static str) {
    if !is_observability_enabled() {
        return;
    }
    counter!("access_decisions_total", "guard" => guard, "outcome" => outcome).increment(1);
}

pub fn track_incident_recorded(severity: &'static str) {
    if !is_observability_enabled() {
        return;
    }
    counter!("incidents_recorded_total", "severity" => severity).increment(1);
}

pub fn track_modules_updated() {
    if !is_observability_enabled() {
        return;
    }
    counter!("user_modules_updated_total").increment(1);
}

pub fn track_sessions_purged(count: usize) {
    if !is_observability_enabled() || count == 0 {
        return;
    }
    counter!("sessions_purged_total").increment(count as u64);
}
