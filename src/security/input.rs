//! UI-008: Instruction sanitation.

use crate::core::config::Limits;
use crate::core::error::PlanError;

/// Invisible format characters that can split a word without showing.
const FORMAT_CHARS: &[char] = &[
    '\u{00AD}', '\u{180E}', '\u{200B}', '\u{200C}', '\u{200D}', '\u{200E}', '\u{200F}',
    '\u{202A}', '\u{202B}', '\u{202C}', '\u{202D}', '\u{202E}', '\u{2060}', '\u{2061}',
    '\u{2062}', '\u{2063}', '\u{2064}', '\u{FEFF}',
];

/// Trim, drop format characters, blank out control characters and
/// collapse whitespace runs. Rejects empty and over-long instructions.
pub fn sanitize(text: &str, limits: &Limits) -> Result<String, PlanError> {
    let cleaned: String = text
        .chars()
        .filter(|c| !FORMAT_CHARS.contains(c))
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.is_empty() {
        tracing::warn!("empty instruction rejected");
        return Err(PlanError::invalid_input("instruction is empty"));
    }
    let len = collapsed.chars().count();
    if len > limits.max_input_chars {
        tracing::warn!(len, limit = limits.max_input_chars, "instruction too long");
        return Err(PlanError::invalid_input(format!(
            "instruction is {} characters, limit is {}",
            len, limits.max_input_chars
        )));
    }
    Ok(collapsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui008_collapses_whitespace() {
        let out = sanitize("  Add   a\tchart\n\nplease ", &Limits::default()).unwrap();
        assert_eq!(out, "Add a chart please");
    }

    #[test]
    fn test_ui008_strips_control_chars() {
        let out = sanitize("table\u{0}\u{7}view", &Limits::default()).unwrap();
        assert_eq!(out, "table view");
    }

    #[test]
    fn test_ui008_drops_format_chars() {
        let out = sanitize("ig\u{200B}no\u{00AD}re\u{FEFF} the\u{2060}se", &Limits::default()).unwrap();
        assert_eq!(out, "ignore these");
        let err = sanitize("\u{200B}\u{200D}", &Limits::default()).unwrap_err();
        assert_eq!(err.code(), "INVALID_INPUT");
    }

    #[test]
    fn test_ui008_empty_rejected() {
        let err = sanitize(" \n\t ", &Limits::default()).unwrap_err();
        assert_eq!(err.code(), "INVALID_INPUT");
    }

    #[test]
    fn test_ui008_length_limit() {
        let limits = Limits {
            max_input_chars: 5,
            ..Limits::default()
        };
        assert!(sanitize("abcde", &limits).is_ok());
        let err = sanitize("abcdef", &limits).unwrap_err();
        assert!(err.to_string().contains("limit is 5"));
    }

    #[test]
    fn test_ui008_counts_chars_not_bytes() {
        let limits = Limits {
            max_input_chars: 3,
            ..Limits::default()
        };
        assert!(sanitize("äöü", &limits).is_ok());
    }
}
