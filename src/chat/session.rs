// src/chat/session.rs

//! Chat session: transcript, typing indicator and simulated reply delay.
//!
//! Sending a message is split in two so several replies can be in flight at
//! once: [`ChatSession::submit`] records the user turn and hands back a
//! [`PendingReply`]; awaiting [`PendingReply::ready`] sleeps for the reply
//! delay; [`ChatSession::deliver`] appends the bot turn.

use std::time::Duration;

use crate::chat::Responder;
use crate::models::{ChatConfig, ChatTurn};
use crate::utils::is_blank;

/// Delay before a reply of `len` characters is shown.
///
/// Proportional to the length and clamped to `[min_delay_ms, max_delay_ms]`.
/// Inverted bounds collapse to `min_delay_ms`.
pub fn reply_delay(len: usize, config: &ChatConfig) -> Duration {
    if !config.simulate_delay {
        return Duration::ZERO;
    }
    let proportional = (len as u64).saturating_mul(config.ms_per_char);
    let ceiling = config.max_delay_ms.max(config.min_delay_ms);
    let millis = proportional.max(config.min_delay_ms).min(ceiling);
    Duration::from_millis(millis)
}

/// A computed reply waiting out its delay.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a pending reply does nothing until awaited and delivered"]
pub struct PendingReply {
    text: String,
    delay: Duration,
}

impl PendingReply {
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Wait for the reply delay without blocking other tasks.
    pub async fn ready(self) -> Reply {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Reply { text: self.text }
    }
}

/// A reply ready to be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
}

/// Transcript and typing state of one chat widget.
#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    config: ChatConfig,
    history: Vec<ChatTurn>,
    in_flight: usize,
}

impl ChatSession {
    pub fn new(config: ChatConfig) -> Self {
        Self {
            config,
            history: Vec::new(),
            in_flight: 0,
        }
    }

    /// Record a user message and compute its reply.
    ///
    /// Blank messages are ignored and yield `None`.
    pub fn submit(&mut self, responder: &Responder, message: &str) -> Option<PendingReply> {
        if is_blank(message) {
            return None;
        }
        self.history.push(ChatTurn::user(message));
        self.in_flight += 1;

        let text = responder.respond(message);
        let delay = reply_delay(text.chars().count(), &self.config);
        log::debug!("Reply of {} chars scheduled in {:?}", text.len(), delay);
        Some(PendingReply { text, delay })
    }

    /// Append a reply to the transcript.
    pub fn deliver(&mut self, reply: Reply) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.history.push(ChatTurn::bot(reply.text));
    }

    /// Submit, wait and deliver in one step. Returns the reply text.
    pub async fn ask(&mut self, responder: &Responder, message: &str) -> Option<String> {
        let pending = self.submit(responder, message)?;
        let reply = pending.ready().await;
        let text = reply.text.clone();
        self.deliver(reply);
        Some(text)
    }

    /// Whether any reply is still being "typed".
    pub fn is_typing(&self) -> bool {
        self.in_flight > 0
    }

    pub fn history(&self) -> &[ChatTurn] {
        &self.history
    }

    /// Drop the transcript, as when the widget is closed for good.
    pub fn clear(&mut self) {
        self.history.clear();
        self.in_flight = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::FALLBACK;
    use crate::models::Speaker;

    fn instant() -> ChatConfig {
        ChatConfig {
            simulate_delay: false,
            ..ChatConfig::default()
        }
    }

    #[test]
    fn test_reply_delay_is_clamped() {
        let config = ChatConfig::default();
        assert_eq!(reply_delay(0, &config), Duration::from_millis(1000));
        assert_eq!(reply_delay(50, &config), Duration::from_millis(1000));
        assert_eq!(reply_delay(150, &config), Duration::from_millis(1500));
        assert_eq!(reply_delay(10_000, &config), Duration::from_millis(3000));
        assert_eq!(reply_delay(usize::MAX, &config), Duration::from_millis(3000));
    }

    #[test]
    fn test_reply_delay_with_inverted_bounds() {
        let config = ChatConfig {
            min_delay_ms: 5000,
            max_delay_ms: 1000,
            ..ChatConfig::default()
        };
        assert_eq!(reply_delay(0, &config), Duration::from_millis(5000));
        assert_eq!(reply_delay(10_000, &config), Duration::from_millis(5000));
    }

    #[test]
    fn test_submit_with_inverted_bounds() {
        let responder = Responder::default();
        let mut session = ChatSession::new(ChatConfig {
            min_delay_ms: 5000,
            max_delay_ms: 1000,
            ..ChatConfig::default()
        });
        let pending = session.submit(&responder, "nsfas").unwrap();
        assert_eq!(pending.delay(), Duration::from_millis(5000));
    }

    #[test]
    fn test_reply_delay_disabled() {
        assert_eq!(reply_delay(500, &instant()), Duration::ZERO);
    }

    #[test]
    fn test_blank_message_ignored() {
        let responder = Responder::default();
        let mut session = ChatSession::new(instant());
        assert!(session.submit(&responder, "   ").is_none());
        assert!(session.history().is_empty());
        assert!(!session.is_typing());
    }

    #[tokio::test]
    async fn test_ask_appends_both_turns() {
        let responder = Responder::default();
        let mut session = ChatSession::new(instant());

        let reply = session.ask(&responder, "weather forecast").await;
        assert_eq!(reply.as_deref(), Some(FALLBACK));

        let history = session.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].to_string(), "You: weather forecast");
        assert_eq!(history[1].speaker, Speaker::Bot);
        assert_eq!(history[1].text, FALLBACK);
        assert!(!session.is_typing());
    }

    #[tokio::test(start_paused = true)]
    async fn test_typing_until_delay_elapses() {
        let responder = Responder::default();
        let mut session = ChatSession::new(ChatConfig::default());

        let pending = session.submit(&responder, "bursary").unwrap();
        assert!(session.is_typing());
        assert_eq!(pending.delay(), Duration::from_millis(1000));

        let start = tokio::time::Instant::now();
        let reply = pending.ready().await;
        assert!(start.elapsed() >= Duration::from_millis(1000));

        session.deliver(reply);
        assert!(!session.is_typing());
        assert_eq!(session.history().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_replies_can_overlap() {
        let responder = Responder::default();
        let mut session = ChatSession::new(ChatConfig::default());

        let first = session.submit(&responder, "academic exclusion").unwrap();
        let second = session.submit(&responder, "bursary").unwrap();
        assert!(first.delay() > second.delay());

        let (first, second) = futures::join!(first.ready(), second.ready());
        session.deliver(second);
        assert!(session.is_typing());
        session.deliver(first);
        assert!(!session.is_typing());

        let speakers: Vec<_> = session.history().iter().map(|t| t.speaker).collect();
        assert_eq!(
            speakers,
            vec![Speaker::You, Speaker::You, Speaker::Bot, Speaker::Bot]
        );
    }

    #[test]
    fn test_clear() {
        let responder = Responder::default();
        let mut session = ChatSession::new(instant());
        let _pending = session.submit(&responder, "nsfas").unwrap();
        session.clear();
        assert!(session.history().is_empty());
        assert!(!session.is_typing());
    }
}
