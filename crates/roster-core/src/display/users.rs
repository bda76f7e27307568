//! Mention formatting for user ids.
//!
//! The core never knows display names, so people are always rendered as
//! mention tokens and the hosting surface resolves them.

use std::fmt;

use crate::models::UserId;

/// A wrapper around a user id that formats it as a mention token.
///
/// The token form is `<@123>`, the same shape accepted by
/// [`extract_mentions`](crate::models::extract_mentions).
pub struct Mention(pub UserId);

impl fmt::Display for Mention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<@{}>", self.0)
    }
}

/// A wrapper around a user id list that formats it as comma-separated
/// mention tokens.
///
/// Order and duplicates follow the underlying list; an empty list renders
/// as an empty string.
pub struct MentionList<'a>(pub &'a [UserId]);

impl<'a> fmt::Display for MentionList<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for user in self.0 {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}", Mention(*user))?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mention_display() {
        assert_eq!(format!("{}", Mention(UserId(123))), "<@123>");
    }

    #[test]
    fn test_mention_list_display() {
        let users = vec![UserId(100), UserId(200), UserId(300)];
        assert_eq!(
            format!("{}", MentionList(&users)),
            "<@100>, <@200>, <@300>"
        );
    }

    #[test]
    fn test_mention_list_single() {
        let users = vec![UserId(42)];
        assert_eq!(format!("{}", MentionList(&users)), "<@42>");
    }

    #[test]
    fn test_mention_list_empty() {
        assert_eq!(format!("{}", MentionList(&[])), "");
    }

    #[test]
    fn test_mention_list_keeps_duplicates() {
        let users = vec![UserId(7), UserId(7)];
        assert_eq!(format!("{}", MentionList(&users)), "<@7>, <@7>");
    }
}
