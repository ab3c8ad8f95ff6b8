// src/models/mod.rs

//! Domain models for the hub.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod chat;
mod config;
mod department;
mod guide;
mod news;
mod search;
mod service;

// Re-export all public types
pub use chat::{ChatTurn, Speaker, Topic};
pub use config::{CatalogConfig, ChatConfig, Config, KeywordRule, LoggingConfig};
pub use department::{Department, Program, ProgramInfo};
pub use guide::{GuideProgress, GuideStep};
pub use news::{DownloadFile, FileType, NewsCategory, NewsItem, Priority};
pub use search::{ResultKind, SearchResult, Selection};
pub use service::{Service, ServiceCategory};
