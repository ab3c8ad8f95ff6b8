// src/lib.rs

//! ICT Hub Library
//!
//! Department, service and news directory for the ICT faculty, with a
//! keyword-driven FAQ assistant.

pub mod catalog;
pub mod chat;
pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod state;
pub mod storage;
pub mod utils;
