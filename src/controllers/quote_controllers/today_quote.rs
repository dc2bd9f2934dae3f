use axum::{extract::State, Json};
use chrono::Utc;
use tracing::debug;

use crate::controllers::quote_controllers::models::QuoteResponse;
use crate::models::quote_models::{DEFAULT_AUTHOR_EN, DEFAULT_AUTHOR_HI};
use crate::state::AppState;
use crate::utils::error::AppResult;

pub async fn get_today_quote(State(state): State<AppState>) -> AppResult<Json<QuoteResponse>> {
    let quote = match state.quotes.first_quote().await? {
        Some(quote) => quote.into(),
        None => {
            debug!("quotes collection empty, serving fallback quote");
            fallback_quote()
        }
    };

    Ok(Json(quote))
}

pub fn fallback_quote() -> QuoteResponse {
    QuoteResponse {
        id: None,
        quote_en: "Swadeshi Soch. Swadeshi Rashtra.".to_string(),
        quote_hi: "स्वदेशी सोच। स्वदेशी राष्ट्र।".to_string(),
        author_en: DEFAULT_AUTHOR_EN.to_string(),
        author_hi: DEFAULT_AUTHOR_HI.to_string(),
        date: Utc::now().format("%Y-%m-%d").to_string(),
    }
}
