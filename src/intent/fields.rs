//! UI-012: Form field detection.
//!
//! Matches are consumed from a working copy as they are found, so
//! "confirm password" does not also count as "password" and "user name"
//! does not also count as "name". Output order is fixed by display rank.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// A detected form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    pub label: String,
    pub input_type: String,
    pub placeholder: String,
}

impl FormField {
    pub fn new(label: &str, input_type: &str, placeholder: &str) -> Self {
        Self {
            label: label.to_string(),
            input_type: input_type.to_string(),
            placeholder: placeholder.to_string(),
        }
    }
}

struct FieldRule {
    regex: Regex,
    rank: u8,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
}

// (pattern, display rank, label, input type, placeholder) in detection order
const FIELD_TABLE: &[(&str, u8, &str, &str, &str)] = &[
    (r"(?i)\bconfirm(ation)?\s+password\b", 5, "Confirm Password", "password", "Repeat your password"),
    (r"(?i)\bpasswords?\b", 4, "Password", "password", "Enter your password"),
    (r"(?i)\be-?mail(\s+address)?(es|s)?\b", 2, "Email", "email", "you@example.com"),
    (r"(?i)\buser\s*names?\b", 1, "Username", "text", "Choose a username"),
    (r"(?i)\b(full\s+)?names?\b", 0, "Name", "text", "Jane Doe"),
    (r"(?i)\b(phone|telephone|mobile)(\s+numbers?)?\b", 3, "Phone", "tel", "+1 555 0100"),
    (r"(?i)\bsubject\b", 6, "Subject", "text", "What is this about?"),
    (r"(?i)\b(message|comments?)\b", 7, "Message", "textarea", "Write your message"),
    (r"(?i)\baddress\b", 8, "Address", "text", "123 Main St"),
    (r"(?i)\b(date\s+of\s+birth|birthday|date)\b", 9, "Date", "date", "YYYY-MM-DD"),
];

static FIELD_RULES: LazyLock<Vec<FieldRule>> = LazyLock::new(|| {
    FIELD_TABLE
        .iter()
        .map(|(pattern, rank, label, input_type, placeholder)| FieldRule {
            regex: Regex::new(pattern).expect("static field pattern"),
            rank: *rank,
            label: *label,
            input_type: *input_type,
            placeholder: *placeholder,
        })
        .collect()
});

/// Detect form fields mentioned in the text.
pub fn detect_fields(text: &str) -> Vec<FormField> {
    let mut working = text.to_string();
    let mut found: Vec<(u8, FormField)> = Vec::new();

    for rule in FIELD_RULES.iter() {
        if rule.regex.is_match(&working) {
            found.push((
                rule.rank,
                FormField::new(rule.label, rule.input_type, rule.placeholder),
            ));
            working = rule.regex.replace_all(&working, " ").into_owned();
        }
    }

    found.sort_by_key(|(rank, _)| *rank);
    found.into_iter().map(|(_, f)| f).collect()
}

/// `(label, input type, placeholder)` for a known label.
pub fn default_field(label: &str) -> Option<(&'static str, &'static str, &'static str)> {
    FIELD_TABLE
        .iter()
        .find(|(_, _, l, _, _)| *l == label)
        .map(|(_, _, l, t, p)| (*l, *t, *p))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(text: &str) -> Vec<String> {
        detect_fields(text).into_iter().map(|f| f.label).collect()
    }

    #[test]
    fn test_ui012_basic_fields() {
        assert_eq!(labels("a login form with email and password"), vec!["Email", "Password"]);
    }

    #[test]
    fn test_ui012_confirm_password_consumed() {
        assert_eq!(
            labels("signup with password and confirm password"),
            vec!["Password", "Confirm Password"]
        );
        assert_eq!(labels("just confirm password"), vec!["Confirm Password"]);
    }

    #[test]
    fn test_ui012_username_not_name() {
        assert_eq!(labels("a user name field"), vec!["Username"]);
        assert_eq!(labels("full name and username"), vec!["Name", "Username"]);
    }

    #[test]
    fn test_ui012_email_address_not_address() {
        assert_eq!(labels("email address"), vec!["Email"]);
        assert_eq!(labels("email and home address"), vec!["Email", "Address"]);
    }

    #[test]
    fn test_ui012_display_rank_order() {
        assert_eq!(
            labels("message, phone number, name"),
            vec!["Name", "Phone", "Message"]
        );
    }

    #[test]
    fn test_ui012_input_types() {
        let fields = detect_fields("phone and date of birth");
        assert_eq!(fields[0].input_type, "tel");
        assert_eq!(fields[1].input_type, "date");
    }

    #[test]
    fn test_ui012_default_field_lookup() {
        assert_eq!(default_field("Email"), Some(("Email", "email", "you@example.com")));
        assert_eq!(default_field("Password").unwrap().1, "password");
        assert!(default_field("Nope").is_none());
        assert!(detect_fields("a generic form").is_empty());
    }
}
