//! Whitespace and character normalization.

/// Normalize raw document text.
///
/// Collapses any whitespace run to a single space, drops characters outside
/// the alphanumeric/space/basic-punctuation set (`. , ! ? - : ;` plus `_`),
/// and trims the ends. Never fails; empty input yields empty output.
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;

    for c in raw.chars() {
        if c.is_whitespace() {
            pending_space = !out.is_empty();
            continue;
        }
        if !is_kept(c) {
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        out.push(c);
    }

    out
}

fn is_kept(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || matches!(c, '.' | ',' | '!' | '?' | '-' | ':' | ';')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_whitespace_runs() {
        assert_eq!(normalize("a  b\t\nc"), "a b c");
    }

    #[test]
    fn test_strips_disallowed_characters() {
        assert_eq!(normalize("fee: $50 (due)"), "fee: 50 due");
        assert_eq!(normalize("a@b#c"), "abc");
    }

    #[test]
    fn test_keeps_terminal_punctuation() {
        assert_eq!(normalize("Done. Really?! Yes, done; -end:"), "Done. Really?! Yes, done; -end:");
    }

    #[test]
    fn test_trims_ends() {
        assert_eq!(normalize("  padded  "), "padded");
    }

    #[test]
    fn test_empty_and_symbol_only_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("@#$%^&*"), "");
        assert_eq!(normalize("   \n\t "), "");
    }

    #[test]
    fn test_keeps_unicode_letters() {
        assert_eq!(normalize("café  №5"), "café 5");
    }
}
