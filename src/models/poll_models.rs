use std::{fmt, str::FromStr};

use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::error::AppError;

/// A yes/no question with two vote counters.
///
/// Counters only ever move up by one, and only through a vote.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Poll {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub question_en: String,
    pub question_hi: String,
    pub yes: i64,
    pub no: i64,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl Poll {
    pub fn new(question_en: impl Into<String>, question_hi: impl Into<String>) -> Self {
        Self {
            id: ObjectId::new(),
            question_en: question_en.into(),
            question_hi: question_hi.into(),
            yes: 0,
            no: 0,
            created_at: Utc::now(),
        }
    }

    pub fn total_votes(&self) -> i64 {
        self.yes + self.no
    }
}

/// The closed set of answers a vote may carry. Each variant names the counter
/// field it increments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteChoice {
    Yes,
    No,
}

impl VoteChoice {
    pub fn field(self) -> &'static str {
        match self {
            VoteChoice::Yes => "yes",
            VoteChoice::No => "no",
        }
    }
}

impl fmt::Display for VoteChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field())
    }
}

impl FromStr for VoteChoice {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yes" => Ok(VoteChoice::Yes),
            "no" => Ok(VoteChoice::No),
            other => Err(AppError::BadRequest(format!(
                "Invalid vote '{}', expected 'yes' or 'no'",
                other
            ))),
        }
    }
}
