use std::time::{Duration, Instant};

use axum::Json;
use once_cell::sync::Lazy;
use serde_json::{json, Value};

static START_TIME: Lazy<Instant> = Lazy::new(Instant::now);

pub const API_NAME: &str = "Swadeshi Hind API";
pub const API_VERSION: &str = "1.0";

/// Starts the uptime clock. Called once at startup.
pub fn mark_started() {
    Lazy::force(&START_TIME);
}

pub async fn root() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": format!("Backend is running! Uptime: {}", format_uptime(START_TIME.elapsed()))
    }))
}

pub async fn api_root() -> Json<Value> {
    Json(json!({ "message": API_NAME, "version": API_VERSION }))
}

pub fn format_uptime(elapsed: Duration) -> String {
    let seconds = elapsed.as_secs();
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if days > 0 {
        format!("{}d {}h {}m {}s", days, hours % 24, minutes % 60, seconds % 60)
    } else if hours > 0 {
        format!("{}h {}m {}s", hours, minutes % 60, seconds % 60)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds % 60)
    } else {
        format!("{}s", seconds)
    }
}
