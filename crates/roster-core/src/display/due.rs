//! Due date display utilities.

use std::fmt;

use jiff::civil::Date;

/// A wrapper around an optional due date that renders `none` when absent.
///
/// Present dates format as `YYYY-MM-DD`, the same form they are entered and
/// stored in, so a listing never shows a date the user could not have typed.
pub struct DueDate<'a>(pub Option<&'a Date>);

impl<'a> fmt::Display for DueDate<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(date) => write!(f, "{date}"),
            None => write!(f, "none"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    #[test]
    fn test_due_date_present() {
        let due = date(2024, 2, 1);
        assert_eq!(format!("{}", DueDate(Some(&due))), "2024-02-01");
    }

    #[test]
    fn test_due_date_absent() {
        assert_eq!(format!("{}", DueDate(None)), "none");
    }
}
