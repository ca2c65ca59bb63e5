use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub type CardId = String;

/// Which sticker attribute identifies the target, and the value it must equal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "by", content = "value", rename_all = "snake_case")]
pub enum MarkerKey {
    Id(String),
    Image(String),
}

impl MarkerKey {
    pub fn value(&self) -> &str {
        match self {
            MarkerKey::Id(v) | MarkerKey::Image(v) => v,
        }
    }
}

impl fmt::Display for MarkerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkerKey::Id(v) => write!(f, "id:{}", v),
            MarkerKey::Image(v) => write!(f, "image:{}", v),
        }
    }
}

/// A card that carries the target sticker, joined with its latest comment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputRecord {
    pub name: String,
    pub short_url: String,
    pub latest_comment: String,
}

pub type Records = BTreeMap<CardId, OutputRecord>;

/// Result of one pass over the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The board listing failed or was empty; nothing else was fetched.
    NoCards,
    Collected(Records),
}
