// src/models/search.rs

//! Search result and selection types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which catalog collection a search hit came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    Department,
    Service,
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultKind::Department => f.write_str("department"),
            ResultKind::Service => f.write_str("service"),
        }
    }
}

/// A single search hit. Derived on every query, never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchResult {
    pub id: String,
    pub kind: ResultKind,
    pub name: String,
}

impl SearchResult {
    /// The (kind, id) pair this hit resolves to.
    pub fn selection(&self) -> Selection {
        Selection {
            kind: self.kind,
            id: self.id.clone(),
        }
    }
}

/// An unambiguous reference to a department or service.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selection {
    pub kind: ResultKind,
    pub id: String,
}

impl Selection {
    pub fn department(id: impl Into<String>) -> Self {
        Self {
            kind: ResultKind::Department,
            id: id.into(),
        }
    }

    pub fn service(id: impl Into<String>) -> Self {
        Self {
            kind: ResultKind::Service,
            id: id.into(),
        }
    }
}
