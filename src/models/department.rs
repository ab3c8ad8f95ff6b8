// src/models/department.rs

//! Academic department and program data structures.

use serde::{Deserialize, Serialize};

/// An academic department of the faculty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Department {
    /// Unique identifier (e.g., "cs", "informatics")
    pub id: String,

    /// Display name
    pub name: String,

    /// Program codes offered by the department, in display order
    #[serde(default)]
    pub codes: Vec<String>,

    /// Short description of the department
    pub description: String,

    /// Building where the department office is located
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building_number: Option<String>,

    /// Department contact email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Department contact phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<String>,
}

impl Department {
    /// Contact fields that are present, as (label, value) pairs.
    pub fn contacts(&self) -> Vec<(&'static str, &str)> {
        [
            ("Building Number", self.building_number.as_deref()),
            ("Email", self.email.as_deref()),
            ("Contact Number", self.contact_number.as_deref()),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.map(|v| (label, v)))
        .collect()
    }
}

/// A study program identified by its code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Program {
    /// Program code (e.g., "DPMC20")
    pub code: String,

    /// Full program name
    pub description: String,

    /// Study duration (e.g., "3 Years")
    pub duration: String,
}

/// Resolved program details for display; falls back for unknown codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramInfo<'a> {
    pub code: &'a str,
    pub description: &'a str,
    pub duration: &'a str,
}

impl<'a> ProgramInfo<'a> {
    pub const UNKNOWN_DESCRIPTION: &'static str = "Program description not available";
    pub const UNKNOWN_DURATION: &'static str = "Varies";

    /// Info for a code that has no program entry.
    pub fn unknown(code: &'a str) -> Self {
        Self {
            code,
            description: Self::UNKNOWN_DESCRIPTION,
            duration: Self::UNKNOWN_DURATION,
        }
    }
}

impl<'a> From<&'a Program> for ProgramInfo<'a> {
    fn from(program: &'a Program) -> Self {
        Self {
            code: &program.code,
            description: &program.description,
            duration: &program.duration,
        }
    }
}
