//! List-query builders for the document service.
//!
//! The service accepts each query as a JSON object passed in a repeated
//! `queries[]` URL parameter.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use serde_json::{Value, json};

/// A single filter, ordering, or paging clause.
#[derive(Clone, Debug, PartialEq)]
pub enum Query {
    Equal { attribute: String, value: Value },
    Search { attribute: String, term: String },
    OrderDesc { attribute: String },
    Limit(u32),
}

impl Query {
    pub fn equal(attribute: &str, value: impl Into<Value>) -> Self {
        Self::Equal { attribute: attribute.to_owned(), value: value.into() }
    }

    pub fn search(attribute: &str, term: &str) -> Self {
        Self::Search { attribute: attribute.to_owned(), term: term.to_owned() }
    }

    pub fn order_desc(attribute: &str) -> Self {
        Self::OrderDesc { attribute: attribute.to_owned() }
    }

    #[must_use]
    pub fn limit(n: u32) -> Self {
        Self::Limit(n)
    }

    /// JSON form understood by the service.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Equal { attribute, value } => {
                json!({ "method": "equal", "attribute": attribute, "values": [value] })
            }
            Self::Search { attribute, term } => {
                json!({ "method": "search", "attribute": attribute, "values": [term] })
            }
            Self::OrderDesc { attribute } => json!({ "method": "orderDesc", "attribute": attribute }),
            Self::Limit(n) => json!({ "method": "limit", "values": [n] }),
        }
    }
}

/// Render queries as a URL query string (without the leading `?`).
#[must_use]
pub fn encode_queries(queries: &[Query]) -> String {
    queries
        .iter()
        .enumerate()
        .map(|(i, q)| format!("queries%5B{i}%5D={}", urlencoding::encode(&q.to_json().to_string())))
        .collect::<Vec<_>>()
        .join("&")
}
