//! Subject extraction from compiled requirement strings.
//!
//! Works on any text in the requirement grammar, including raw strings, so a
//! location's references can be checked without keeping its structured form.

use super::Subject;

/// A subject found in requirement text, with its amount if one was given.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubjectRef {
    pub subject: Subject,
    pub amount: Option<String>,
}

/// Returns every `|name|` / `|@name:amount|` token in order of appearance.
///
/// Text outside pipe pairs (operators, parentheses, option gates) is skipped.
/// An unmatched trailing `|` is ignored.
pub fn scan_references(text: &str) -> Vec<SubjectRef> {
    let mut found = Vec::new();
    let mut rest = text;

    while let Some(open) = rest.find('|') {
        let after = &rest[open + 1..];
        let Some(close) = after.find('|') else {
            break;
        };
        if let Some(reference) = parse_token(&after[..close]) {
            found.push(reference);
        }
        rest = &after[close + 1..];
    }

    found
}

fn parse_token(token: &str) -> Option<SubjectRef> {
    let (body, is_category) = match token.strip_prefix('@') {
        Some(body) => (body, true),
        None => (token, false),
    };

    let (name, amount) = match body.rsplit_once(':') {
        Some((name, amount)) if is_amount(amount) => (name, Some(amount.to_owned())),
        _ => (body, None),
    };

    if name.is_empty() {
        return None;
    }

    let subject = if is_category {
        Subject::Category(name.to_owned())
    } else {
        Subject::Item(name.to_owned())
    };
    Some(SubjectRef { subject, amount })
}

pub(super) fn is_amount(text: &str) -> bool {
    let digits = text.strip_suffix('%').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
