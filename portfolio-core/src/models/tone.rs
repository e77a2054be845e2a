use serde::{Deserialize, Serialize};

/// Visual emphasis a front end attaches to a status-like value.
///
/// Replaces string-keyed color lookups: each closed enum maps onto a tone
/// exhaustively and the presentation layer decides what a tone looks like.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Positive,
    Informational,
    Progress,
    Caution,
    Negative,
    Neutral,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Informational => "informational",
            Self::Progress => "progress",
            Self::Caution => "caution",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}
