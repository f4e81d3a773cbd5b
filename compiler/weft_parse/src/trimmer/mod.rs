//! Whitespace policies for literal text.
//!
//! A trimmer runs once per literal segment (the text between two blocks)
//! at parse time, so rendering never pays for it.

use std::borrow::Cow;

/// How literal text between blocks is trimmed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Trimmer {
    /// Keep literal text exactly as written.
    #[default]
    Nothing,
    /// Remove leading and trailing whitespace.
    EnclosingWhitespace,
    /// Remove a first line and a last line holding only blanks, together
    /// with their line break.
    FirstAndLastBlankLines,
    /// Collapse every whitespace run to one space.
    RepeatedWhitespace,
}

impl Trimmer {
    /// Parse a trimmer name as accepted on the command line.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "nothing" | "none" => Some(Trimmer::Nothing),
            "enclosing" => Some(Trimmer::EnclosingWhitespace),
            "lines" => Some(Trimmer::FirstAndLastBlankLines),
            "collapse" => Some(Trimmer::RepeatedWhitespace),
            _ => None,
        }
    }

    pub fn apply<'a>(self, text: &'a str) -> Cow<'a, str> {
        match self {
            Trimmer::Nothing => Cow::Borrowed(text),
            Trimmer::EnclosingWhitespace => Cow::Borrowed(text.trim()),
            Trimmer::FirstAndLastBlankLines => Cow::Borrowed(trim_blank_lines(text)),
            Trimmer::RepeatedWhitespace => collapse_whitespace(text),
        }
    }
}

fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\r'
}

fn trim_blank_lines(mut text: &str) -> &str {
    if let Some(end) = text.find('\n') {
        if text[..end].chars().all(is_blank) {
            text = &text[end + 1..];
        }
    }
    if let Some(start) = text.rfind('\n') {
        if text[start + 1..].chars().all(is_blank) {
            text = &text[..start];
        }
    }
    text
}

fn collapse_whitespace(text: &str) -> Cow<'_, str> {
    let mut collapsed = String::with_capacity(text.len());
    let mut in_run = false;

    for c in text.chars() {
        if c.is_whitespace() {
            if !in_run {
                collapsed.push(' ');
            }
            in_run = true;
        } else {
            collapsed.push(c);
            in_run = false;
        }
    }

    if collapsed == text {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(collapsed)
    }
}
