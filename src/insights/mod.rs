//! Sidebar insight responder
//!
//! Placeholder for the future analyst assistant. Returns fixed canned text
//! regardless of topic and carries no data dependency on the query engine;
//! a real summarizer would need a defined contract over the filtered
//! result sequence, which does not exist yet.

/// Topics offered in the sidebar dropdown
const TOPICS: [&str; 5] = [
    "What changed this week?",
    "High impact alerts",
    "Compare FDA vs EMA guidance",
    "Summarize all oncology related updates",
    "Show clinical trial policy shifts",
];

const PLACEHOLDER_SUMMARY: &str = "Here is a generated summary (placeholder):\n\n\
- 2 major guidance changes\n\
- 1 high-risk alert affecting oncology\n\
- EMA introduced updated GMP norms\n\
- FDA aligns post-market safety reporting";

/// Static responder for sidebar insight requests
#[derive(Debug, Clone, Default)]
pub struct InsightResponder;

impl InsightResponder {
    pub fn new() -> Self {
        Self
    }

    /// The topics offered to the analyst
    pub fn topics(&self) -> &'static [&'static str] {
        &TOPICS
    }

    /// Produce the insight text for a topic
    pub fn respond(&self, _topic: &str) -> &'static str {
        PLACEHOLDER_SUMMARY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topics_listed() {
        let responder = InsightResponder::new();
        assert_eq!(responder.topics().len(), 5);
        assert!(responder.topics().contains(&"High impact alerts"));
    }

    #[test]
    fn test_response_is_topic_independent() {
        let responder = InsightResponder::new();
        assert_eq!(
            responder.respond("What changed this week?"),
            responder.respond("High impact alerts")
        );
        assert!(responder.respond("anything").contains("placeholder"));
    }
}
