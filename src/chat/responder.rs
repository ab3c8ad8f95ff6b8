// src/chat/responder.rs

//! Keyword responder: maps free text to one canned answer.
//!
//! Rules are tried in order and the first rule with a keyword contained in
//! the lower-cased message wins. Order is priority; there is no best-match
//! scoring. A message that matches nothing gets [`FALLBACK`].

use crate::chat::FaqBook;
use crate::models::{KeywordRule, Topic};
use crate::utils::{fold_case, is_blank};

/// Reply when no rule matches.
pub const FALLBACK: &str =
    "Sorry, I couldn't find info for that. Try asking about exclusions, departments, NSFAS, etc.";

/// Ordered keyword rules plus the FAQ tables they answer from.
#[derive(Debug, Clone)]
pub struct Responder {
    rules: Vec<KeywordRule>,
    faq: FaqBook,
}

impl Responder {
    /// Build a responder; keywords are folded to lower case here.
    ///
    /// Blank keywords are dropped, as are rules left without any keyword.
    pub fn new(rules: Vec<KeywordRule>, faq: FaqBook) -> Self {
        let rules = rules
            .into_iter()
            .filter_map(|rule| {
                let keywords: Vec<String> = rule
                    .keywords
                    .iter()
                    .filter(|k| !is_blank(k))
                    .map(|k| fold_case(k))
                    .collect();
                if keywords.len() < rule.keywords.len() {
                    log::warn!("Ignoring blank keyword in {:?} rule", rule.topic);
                }
                if keywords.is_empty() {
                    log::warn!("Dropping {:?} rule with no keywords", rule.topic);
                    return None;
                }
                Some(KeywordRule {
                    keywords,
                    topic: rule.topic,
                })
            })
            .collect();
        Self { rules, faq }
    }

    /// The rules in priority order.
    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    /// Topic of the first rule matching the message.
    pub fn topic_for(&self, message: &str) -> Option<Topic> {
        let lower = fold_case(message);
        self.rules
            .iter()
            .find(|rule| rule.keywords.iter().any(|k| lower.contains(k.as_str())))
            .map(|rule| rule.topic)
    }

    /// Answer a message. Callers filter out blank input beforehand.
    pub fn respond(&self, message: &str) -> String {
        match self.topic_for(message) {
            Some(topic) => {
                log::debug!("Message matched topic {:?}", topic);
                self.faq.answer(topic)
            }
            None => {
                log::debug!("No rule matched, using fallback");
                FALLBACK.to_string()
            }
        }
    }
}

impl Default for Responder {
    fn default() -> Self {
        Self::new(crate::models::ChatConfig::default().rules, FaqBook::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(topic: Topic) -> String {
        FaqBook::default().answer(topic)
    }

    #[test]
    fn test_academic_exclusion() {
        let responder = Responder::default();
        assert_eq!(
            responder.respond("What about academic exclusion?"),
            answer(Topic::AcademicExclusion)
        );
    }

    #[test]
    fn test_bare_exclusion_gets_financial_answer() {
        let responder = Responder::default();
        assert_eq!(
            responder.respond("I got an exclusion letter"),
            answer(Topic::FinancialExclusion)
        );
    }

    #[test]
    fn test_financial_exclusion() {
        let responder = Responder::default();
        assert_eq!(
            responder.topic_for("Financial Exclusion help"),
            Some(Topic::FinancialExclusion)
        );
    }

    #[test]
    fn test_nsfas() {
        let responder = Responder::default();
        assert_eq!(responder.respond("NSFAS problems"), answer(Topic::Nsfas));
    }

    #[test]
    fn test_fallback() {
        let responder = Responder::default();
        assert_eq!(responder.respond("weather forecast"), FALLBACK);
    }

    #[test]
    fn test_case_insensitive() {
        let responder = Responder::default();
        assert_eq!(responder.topic_for("BURSARY"), Some(Topic::Bursary));
        assert_eq!(responder.topic_for("Residence"), Some(Topic::Residence));
    }

    #[test]
    fn test_first_match_wins() {
        let responder = Responder::default();
        // "department" is checked before "academic exclusion"
        assert_eq!(
            responder.topic_for("academic exclusion at my department"),
            Some(Topic::Departments)
        );
        // "change of course" is checked before "admission"
        assert_eq!(
            responder.topic_for("change of course after admission"),
            Some(Topic::CourseChange)
        );
        // "readmission" is checked before "admission"
        assert_eq!(
            responder.topic_for("readmission form"),
            Some(Topic::Readmission)
        );
    }

    #[test]
    fn test_alternative_keywords() {
        let responder = Responder::default();
        assert_eq!(responder.topic_for("exit exam dates"), Some(Topic::SpecialExam));
        assert_eq!(responder.topic_for("special exam"), Some(Topic::SpecialExam));
        assert_eq!(responder.topic_for("walk-in screening"), Some(Topic::Newcomer));
        assert_eq!(responder.topic_for("credit for modules"), Some(Topic::Cat));
    }

    #[test]
    fn test_cat_matches_as_substring() {
        let responder = Responder::default();
        // "location" contains "cat"
        assert_eq!(responder.topic_for("campus location"), Some(Topic::Cat));
    }

    #[test]
    fn test_departments_listing() {
        let responder = Responder::default();
        let reply = responder.respond("Which departments are there?");
        assert!(reply.starts_with("Computer Science: DPMCF0, DPMC20"));
        assert_eq!(reply.lines().count(), 4);
    }

    #[test]
    fn test_blank_keywords_are_ignored() {
        let responder = Responder::new(
            vec![
                KeywordRule::new(&[""], Topic::Bursary),
                KeywordRule::new(&["   ", "nsfas"], Topic::Nsfas),
            ],
            FaqBook::default(),
        );
        assert_eq!(responder.rules().len(), 1);
        assert_eq!(responder.rules()[0].keywords, vec!["nsfas".to_string()]);
        assert_eq!(responder.respond("weather forecast"), FALLBACK);
        assert_eq!(responder.topic_for("NSFAS status"), Some(Topic::Nsfas));
    }

    #[test]
    fn test_custom_rules_are_folded() {
        let responder = Responder::new(
            vec![KeywordRule::new(&["FUNDI"], Topic::Bursary)],
            FaqBook::default(),
        );
        assert_eq!(responder.topic_for("where is fundi?"), Some(Topic::Bursary));
        assert_eq!(responder.respond("nsfas"), FALLBACK);
    }
}
