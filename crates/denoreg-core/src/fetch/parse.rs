//! Parse upstream response header lines into relayable headers.

/// Headers that describe the upstream connection rather than the content.
/// `content-length` is dropped too: the body is re-framed when relayed.
const SKIPPED_HEADERS: &[&str] = &[
    "connection",
    "keep-alive",
    "proxy-connection",
    "transfer-encoding",
    "te",
    "trailer",
    "upgrade",
    "content-length",
];

/// Collects `(name, value)` pairs of the last response in `lines`.
///
/// Curl reports the header block of every response it sees (redirect hops,
/// `100 Continue`), each starting with an `HTTP/` status line; only the final
/// block is kept.
pub(crate) fn relay_headers(lines: &[String]) -> Vec<(String, String)> {
    let mut headers = Vec::new();

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("HTTP/") {
            headers.clear();
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            let name = name.trim();
            if name.is_empty() || is_skipped(name) {
                continue;
            }
            headers.push((name.to_string(), value.trim().to_string()));
        }
    }

    headers
}

fn is_skipped(name: &str) -> bool {
    SKIPPED_HEADERS.iter().any(|h| name.eq_ignore_ascii_case(h))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn keeps_content_headers() {
        let h = relay_headers(&lines(&[
            "HTTP/1.1 200 OK",
            "Content-Type: application/typescript",
            "ETag: \"abc\"",
            "",
        ]));
        assert_eq!(
            h,
            vec![
                ("Content-Type".to_string(), "application/typescript".to_string()),
                ("ETag".to_string(), "\"abc\"".to_string()),
            ]
        );
    }

    #[test]
    fn drops_hop_by_hop_and_length() {
        let h = relay_headers(&lines(&[
            "HTTP/1.1 200 OK",
            "Connection: keep-alive",
            "Transfer-Encoding: chunked",
            "Content-Length: 12",
            "X-Cache: HIT",
        ]));
        assert_eq!(h, vec![("X-Cache".to_string(), "HIT".to_string())]);
    }

    #[test]
    fn only_final_response_block_is_kept() {
        let h = relay_headers(&lines(&[
            "HTTP/1.1 301 Moved Permanently",
            "Location: https://example.com/new",
            "",
            "HTTP/2 404",
            "content-type: text/plain",
            "",
        ]));
        assert_eq!(h, vec![("content-type".to_string(), "text/plain".to_string())]);
    }

    #[test]
    fn value_may_contain_colons() {
        let h = relay_headers(&lines(&["HTTP/1.1 200 OK", "Link: <https://x/y>; rel=next"]));
        assert_eq!(h[0].1, "<https://x/y>; rel=next");
    }
}
