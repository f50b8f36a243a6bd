//! Minimal HTML entity unescaping for extracted URLs.
//!
//! URLs lifted out of HTML attributes carry `&amp;` between query
//! parameters, and occasionally numeric character references. Handles the
//! named entities seen in markup plus decimal/hex numeric forms; unknown or
//! unterminated sequences pass through unchanged.

/// Replaces HTML entity references in `input` with their characters.
pub fn unescape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        match decode_entity(tail) {
            Some((ch, consumed)) => {
                out.push(ch);
                rest = &tail[consumed..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Decodes one entity at the start of `s` (which begins with `&`).
/// Returns the decoded char and the number of bytes consumed.
fn decode_entity(s: &str) -> Option<(char, usize)> {
    let semi = s.find(';')?;
    let body = &s[1..semi];
    if body.is_empty() || !body.chars().all(|c| c.is_ascii_alphanumeric() || c == '#') {
        return None;
    }
    let decoded = match body {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        _ => {
            let num = body.strip_prefix('#')?;
            let code = match num.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => num.parse::<u32>().ok()?,
            };
            char::from_u32(code)?
        }
    };
    Some((decoded, semi + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amp_in_query_string() {
        assert_eq!(
            unescape("https://x.example/a.mp3?a=1&amp;b=2&amp;c=3"),
            "https://x.example/a.mp3?a=1&b=2&c=3"
        );
    }

    #[test]
    fn named_entities() {
        assert_eq!(unescape("&lt;&gt;&quot;&apos;"), "<>\"'");
    }

    #[test]
    fn numeric_decimal_and_hex() {
        assert_eq!(unescape("a&#38;b"), "a&b");
        assert_eq!(unescape("a&#x26;b"), "a&b");
        assert_eq!(unescape("a&#X26;b"), "a&b");
    }

    #[test]
    fn unknown_entity_passes_through() {
        assert_eq!(unescape("&bogus;rest"), "&bogus;rest");
    }

    #[test]
    fn bare_ampersand_passes_through() {
        assert_eq!(unescape("https://x.example/a.mp3?a=1&b=2"), "https://x.example/a.mp3?a=1&b=2");
        assert_eq!(unescape("trailing&"), "trailing&");
    }

    #[test]
    fn unterminated_entity_passes_through() {
        assert_eq!(unescape("a&amp"), "a&amp");
    }

    #[test]
    fn semicolon_far_away_is_not_an_entity() {
        // The `/` between `&` and `;` disqualifies the span.
        assert_eq!(unescape("a&x/y;z"), "a&x/y;z");
    }

    #[test]
    fn invalid_numeric_passes_through() {
        assert_eq!(unescape("&#xZZ;"), "&#xZZ;");
        assert_eq!(unescape("&#;"), "&#;");
    }
}
