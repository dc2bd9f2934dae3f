use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

pub const DEFAULT_AUTHOR_EN: &str = "Swadeshi Hind";
pub const DEFAULT_AUTHOR_HI: &str = "स्वदेशी हिन्द";

fn default_author_en() -> String {
    DEFAULT_AUTHOR_EN.to_string()
}

fn default_author_hi() -> String {
    DEFAULT_AUTHOR_HI.to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Quote {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub quote_en: String,
    pub quote_hi: String,
    #[serde(default = "default_author_en")]
    pub author_en: String,
    #[serde(default = "default_author_hi")]
    pub author_hi: String,
    /// Calendar day the quote is meant for, `YYYY-MM-DD`.
    pub date: String,
}
