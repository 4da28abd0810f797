//! Quote-aware tokenizing and date parsing for the command layer.

/// Split an argument string into tokens.
///
/// Tokens are separated by whitespace. A token that begins with `"` extends
/// to the matching closing `"` and may contain whitespace; the quotes are
/// stripped before the value goes any further. Returns `None` when a quote
/// is never closed — the whole line is then discarded by the interpreter,
/// matching the silent-failure contract for malformed input.
pub fn tokenize(mut input: &str) -> Option<Vec<String>> {
    let mut tokens = Vec::new();

    loop {
        input = input.trim_start();
        if input.is_empty() {
            break;
        }
        if let Some(body) = input.strip_prefix('"') {
            let end = body.find('"')?;
            tokens.push(body[..end].to_owned());
            input = &body[end + 1..];
        } else {
            let end = input.find(char::is_whitespace).unwrap_or(input.len());
            tokens.push(input[..end].to_owned());
            input = &input[end..];
        }
    }

    Some(tokens)
}

/// Parse `d-m-yyyy` into raw components, without calendar validation.
/// Returns `None` when the token is not three dash-separated integers.
pub fn date_components(token: &str) -> Option<(u32, u32, i32)> {
    let mut parts = token.splitn(3, '-');
    let day = parts.next()?.trim().parse().ok()?;
    let month = parts.next()?.trim().parse().ok()?;
    let year = parts.next()?.trim().parse().ok()?;
    Some((day, month, year))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_whitespace() {
        assert_eq!(
            tokenize("A1 31-12-2025 5 Gripe").unwrap(),
            vec!["A1", "31-12-2025", "5", "Gripe"]
        );
        assert_eq!(tokenize("  padded \t args  ").unwrap(), vec!["padded", "args"]);
        assert!(tokenize("").unwrap().is_empty());
    }

    #[test]
    fn quoted_token_keeps_spaces_and_drops_quotes() {
        assert_eq!(
            tokenize("\"Ana Silva\" Gripe").unwrap(),
            vec!["Ana Silva", "Gripe"]
        );
    }

    #[test]
    fn empty_quoted_token_is_preserved() {
        assert_eq!(tokenize("\"\" Gripe").unwrap(), vec!["", "Gripe"]);
    }

    #[test]
    fn unterminated_quote_discards_the_line() {
        assert!(tokenize("\"Ana Gripe").is_none());
    }

    #[test]
    fn date_components_parse_dashed_integers() {
        assert_eq!(date_components("31-12-2025"), Some((31, 12, 2025)));
        assert_eq!(date_components("1-1-2025"), Some((1, 1, 2025)));
        assert_eq!(date_components("31/12/2025"), None);
        assert_eq!(date_components("31-12"), None);
        assert_eq!(date_components("x-12-2025"), None);
    }
}
