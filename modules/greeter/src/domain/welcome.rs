//! Welcome message formatting.

/// Greeting returned when no usable name is given.
pub const GUEST_GREETING: &str = "Welcome, Guest!";

/// Build a welcome message for `name`.
///
/// Absent names and names that are empty after trimming get
/// [`GUEST_GREETING`]. Any other name is used as given, surrounding
/// whitespace included.
#[must_use]
pub fn format_welcome(name: Option<&str>) -> String {
    match name {
        Some(name) if !name.trim().is_empty() => format!("Welcome to {name}!"),
        _ => GUEST_GREETING.to_owned(),
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_valid_name() {
        assert_eq!(
            format_welcome(Some("Jenkins Pipeline")),
            "Welcome to Jenkins Pipeline!"
        );
    }

    #[test]
    fn test_absent_name() {
        assert_eq!(format_welcome(None), "Welcome, Guest!");
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(format_welcome(Some("")), "Welcome, Guest!");
    }

    #[test]
    fn test_whitespace_name() {
        assert_eq!(format_welcome(Some("   ")), "Welcome, Guest!");
        assert_eq!(format_welcome(Some("\t\n ")), "Welcome, Guest!");
    }

    #[test]
    fn test_untrimmed_name_is_kept() {
        assert_eq!(format_welcome(Some("  Ada ")), "Welcome to   Ada !");
    }
}
