//! Utility functions and helpers.

pub mod http;

/// Percent-encode a search keyword for use in a query string, with spaces
/// encoded as `+` the way job-board search pages expect.
pub fn encode_query(keyword: &str) -> String {
    url::form_urlencoded::byte_serialize(keyword.as_bytes()).collect()
}

/// Truncate a string to at most `max_chars` characters, respecting UTF-8
/// boundaries. No ellipsis is appended.
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_query() {
        assert_eq!(encode_query("BIM Manager"), "BIM+Manager");
        assert_eq!(encode_query("C# Developer"), "C%23+Developer");
        assert_eq!(encode_query("plain"), "plain");
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("hello", 3), "hel");
        // Multi-byte characters count as one each.
        assert_eq!(truncate_chars("Bogotá, Colombia", 6), "Bogotá");
    }
}
