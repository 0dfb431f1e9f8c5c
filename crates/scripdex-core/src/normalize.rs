//! Canonical comparable form for queries and candidate fields.

/// Normalize raw text for matching.
///
/// Lowercases, strips every character outside the ASCII
/// alphanumeric-and-space set used by security names, trims, and collapses
/// internal whitespace runs to a single space. Total: any input maps to a
/// (possibly empty) canonical string, so `"TATA CONSULTANCY SERVICES."` and
/// `"Tata Consultancy Services"` compare equal after normalization.
pub fn normalize(text: &str) -> String {
    let mut cleaned = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() {
            cleaned.push(ch.to_ascii_lowercase());
        } else if ch.is_whitespace() {
            cleaned.push(' ');
        }
    }

    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_strips_punctuation() {
        assert_eq!(
            normalize("TATA CONSULTANCY SERVICES."),
            "tata consultancy services"
        );
        assert_eq!(
            normalize("Tata Consultancy Services"),
            "tata consultancy services"
        );
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(normalize("  Reliance \t Industries  "), "reliance industries");
    }

    #[test]
    fn drops_embedded_punctuation() {
        assert_eq!(normalize("Procter & Gamble Company"), "procter gamble company");
        assert_eq!(normalize("AT&T"), "att");
    }

    #[test]
    fn empty_and_symbol_only_input_normalizes_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("!!! ???"), "");
    }

    #[test]
    fn drops_non_ascii() {
        assert_eq!(normalize("Café"), "caf");
    }
}
