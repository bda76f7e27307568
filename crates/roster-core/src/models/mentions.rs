//! Mention extraction from raw assignee text.

use std::sync::OnceLock;

use regex::Regex;

use super::UserId;

/// Chat mention tokens: `<@123>` and the nickname form `<@!123>`.
const MENTION_PATTERN: &str = r"<@!?(\d+)>";

fn mention_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(MENTION_PATTERN).expect("Invalid regex"))
}

/// Extract user ids from raw mention text, in order of first appearance.
///
/// Duplicates are kept as written. Text that is not a well-formed mention
/// token is ignored. An empty result means the caller falls back to its own
/// default (the command invoker).
pub fn extract_mentions(text: &str) -> Vec<UserId> {
    mention_regex()
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .filter_map(|id| id.as_str().parse::<u64>().ok())
        .map(UserId)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_mentions_yields_empty() {
        assert!(extract_mentions("").is_empty());
        assert!(extract_mentions("nobody here").is_empty());
    }

    #[test]
    fn test_single_mention() {
        assert_eq!(extract_mentions("<@123>"), vec![UserId(123)]);
    }

    #[test]
    fn test_nickname_variant() {
        assert_eq!(extract_mentions("<@!456>"), vec![UserId(456)]);
    }

    #[test]
    fn test_order_of_first_appearance() {
        let ids = extract_mentions("ping <@20> and <@!10> then <@30>");
        assert_eq!(ids, vec![UserId(20), UserId(10), UserId(30)]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let ids = extract_mentions("<@7> <@7> <@!7>");
        assert_eq!(ids, vec![UserId(7), UserId(7), UserId(7)]);
    }

    #[test]
    fn test_malformed_tokens_are_ignored() {
        assert!(extract_mentions("<@abc>").is_empty());
        assert!(extract_mentions("user@example.com").is_empty());
        assert!(extract_mentions("<@ 12 >").is_empty());
    }

    #[test]
    fn test_mentions_embedded_in_prose() {
        let ids = extract_mentions("assign to <@!1>, cc <@2>.");
        assert_eq!(ids, vec![UserId(1), UserId(2)]);
    }
}
