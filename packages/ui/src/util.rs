//! Browser navigation and query-string helpers.
//!
//! Wizard pages forward all query parameters verbatim between steps, and
//! the OAuth callback reads its `token` parameter from the URL; both go
//! through the parser here. On native builds the redirect helpers log and
//! do nothing.

/// Redirect the browser to `path`.
pub fn redirect(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!(path, "redirect");
    }
}

/// Redirect to `path`, carrying the current query string along verbatim.
pub fn redirect_with_query(path: &str) {
    let search = current_search();
    if search.is_empty() {
        redirect(path);
    } else {
        redirect(&format!("{path}{search}"));
    }
}

/// The current `location.search`, including the leading `?`, or empty.
pub fn current_search() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        String::new()
    }
}

/// Value of one query parameter from the current URL.
pub fn query_param(name: &str) -> Option<String> {
    parse_query(&current_search())
        .into_iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value)
}

/// Parse a query string (with or without the leading `?`) into pairs.
pub fn parse_query(search: &str) -> Vec<(String, String)> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key), decode_component(value))
        })
        .collect()
}

/// Minimal percent-decoding: `+` as space, `%XX` as the byte.
fn decode_component(raw: &str) -> String {
    let mut out = Vec::with_capacity(raw.len());
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' => {
                let hex = bytes.get(i + 1..i + 3).and_then(|h| {
                    u8::from_str_radix(std::str::from_utf8(h).ok()?, 16).ok()
                });
                match hex {
                    Some(byte) => {
                        out.push(byte);
                        i += 3;
                    }
                    None => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            byte => {
                out.push(byte);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query() {
        let pairs = parse_query("?token=abc&source=register");
        assert_eq!(
            pairs,
            vec![
                ("token".to_string(), "abc".to_string()),
                ("source".to_string(), "register".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_query_empty_and_bare_keys() {
        assert!(parse_query("").is_empty());
        assert!(parse_query("?").is_empty());
        assert_eq!(
            parse_query("flag"),
            vec![("flag".to_string(), String::new())]
        );
    }

    #[test]
    fn test_decoding() {
        let pairs = parse_query("?email=user%40example.com&name=Ana+Silva");
        assert_eq!(pairs[0].1, "user@example.com");
        assert_eq!(pairs[1].1, "Ana Silva");
    }

    #[test]
    fn test_truncated_percent_escape_kept_literal() {
        let pairs = parse_query("?v=100%2");
        assert_eq!(pairs[0].1, "100%2");
    }
}
