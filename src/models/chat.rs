// src/models/chat.rs

//! Chat transcript types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Who produced a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    You,
    Bot,
}

impl Speaker {
    fn tag(&self) -> &'static str {
        match self {
            Speaker::You => "You:",
            Speaker::Bot => "Bot:",
        }
    }
}

/// One line of the chat transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    pub speaker: Speaker,
    pub text: String,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::You,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Bot,
            text: text.into(),
        }
    }
}

impl fmt::Display for ChatTurn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.speaker.tag(), self.text)
    }
}

/// FAQ topic the keyword responder can answer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Departments,
    AcademicExclusion,
    FinancialExclusion,
    Nsfas,
    CourseChange,
    SpecialExam,
    Probation,
    Timetable,
    Readmission,
    IntercampusTransfer,
    Admission,
    Newcomer,
    Bursary,
    Residence,
    Cat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes_speaker() {
        assert_eq!(ChatTurn::user("hello").to_string(), "You: hello");
        assert_eq!(ChatTurn::bot("hi").to_string(), "Bot: hi");
    }

    #[test]
    fn test_topic_snake_case() {
        let json = serde_json::to_string(&Topic::IntercampusTransfer).unwrap();
        assert_eq!(json, "\"intercampus_transfer\"");
    }
}
