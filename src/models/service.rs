// src/models/service.rs

//! Student service data structures.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Audience a student service is intended for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ServiceCategory {
    #[serde(rename = "Senior Students")]
    SeniorStudents,

    #[serde(rename = "Newcomer Students")]
    NewcomerStudents,

    #[serde(rename = "All Students")]
    AllStudents,
}

impl ServiceCategory {
    /// Display label, identical to the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            ServiceCategory::SeniorStudents => "Senior Students",
            ServiceCategory::NewcomerStudents => "Newcomer Students",
            ServiceCategory::AllStudents => "All Students",
        }
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A student service offered by the faculty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Service {
    /// Identifier, unique among services (may be a human title)
    pub id: String,

    /// Display title
    pub title: String,

    /// Target audience
    pub category: ServiceCategory,

    /// One-line description for the service card
    pub description: String,

    /// Full details text
    pub details: String,

    /// Link to an external status page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_link: Option<String>,

    /// Procedure steps shown on the detail view
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<String>,
}
