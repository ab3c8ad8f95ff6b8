//! Chat assistant.
//!
//! - `faq`: canned answer tables per topic
//! - `responder`: first-match-wins keyword rules
//! - `session`: transcript, typing indicator and reply delay

pub mod faq;
pub mod responder;
pub mod session;

pub use faq::FaqBook;
pub use responder::{FALLBACK, Responder};
pub use session::{ChatSession, PendingReply, Reply, reply_delay};

use crate::models::ChatConfig;

/// Build a responder from the configured rules and the default FAQ tables.
pub fn responder_from(config: &ChatConfig) -> Responder {
    Responder::new(config.rules.clone(), FaqBook::default())
}
