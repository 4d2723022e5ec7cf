//! Quote types

use serde::{Deserialize, Serialize};

/// Store-assigned quote identifier. Starts at 1 and is never reused.
pub type QuoteId = i64;

/// A stored quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub id: QuoteId,
    pub author: String,
    /// Quote body, named `quote` on the wire
    #[serde(rename = "quote")]
    pub text: String,
}

impl Quote {
    pub fn new(id: QuoteId, quote: NewQuote) -> Self {
        Self {
            id,
            author: quote.author,
            text: quote.text,
        }
    }
}

/// Input for creating a quote; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuote {
    pub author: String,
    pub text: String,
}

impl NewQuote {
    pub fn new(author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            text: text.into(),
        }
    }

    /// Both fields must be non-empty. Stores do not check this themselves.
    pub fn is_valid(&self) -> bool {
        !self.author.is_empty() && !self.text.is_empty()
    }
}
