//! Browser detection from the `User-Agent` header.

/// Lowercase tokens whose presence marks a browser user agent.
const BROWSER_TOKENS: &[&str] = &["webkit", "mozilla", "chrome", "safari"];

/// True if `user_agent` contains any browser token, ignoring ASCII case.
pub fn is_browser(user_agent: &str) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    BROWSER_TOKENS.iter().any(|token| ua.contains(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browsers() {
        assert!(is_browser(
            "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36"
        ));
        assert!(is_browser("mozilla"));
        assert!(is_browser("CHROME"));
        assert!(is_browser("some Safari build"));
        assert!(is_browser("AppleWebKit"));
    }

    #[test]
    fn non_browsers() {
        assert!(!is_browser(""));
        assert!(!is_browser("Deno/1.0.0"));
        assert!(!is_browser("curl/8.5.0"));
    }
}
