use serde::{Deserialize, Serialize};

use crate::models::quote_models::Quote;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct QuoteResponse {
    /// Absent on the built-in fallback quote.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub quote_en: String,
    pub quote_hi: String,
    pub author_en: String,
    pub author_hi: String,
    pub date: String,
}

impl From<Quote> for QuoteResponse {
    fn from(quote: Quote) -> Self {
        Self {
            id: Some(quote.id.to_hex()),
            quote_en: quote.quote_en,
            quote_hi: quote.quote_hi,
            author_en: quote.author_en,
            author_hi: quote.author_hi,
            date: quote.date,
        }
    }
}
