use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use unicode_categories::UnicodeCategories;
use unicode_segmentation::UnicodeSegmentation;

/// A token with its UTF-8 byte offsets in the normalized item text.
///
/// The text keeps its original case. The `*_ignore_case` predicates are what
/// the matchers rely on; they fold both sides with [`fold_case`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Token {
    /// The token text content.
    pub text: String,
    /// Byte offset (inclusive) in the normalized text.
    pub start: usize,
    /// Byte offset (exclusive) in the normalized text.
    pub end: usize,
}

impl Token {
    /// Build a token that is not anchored in a larger text (offsets `0..len`).
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let end = text.len();
        Self {
            text,
            start: 0,
            end,
        }
    }

    /// Case-insensitive equality against `term`.
    pub fn eq_ignore_case(&self, term: &str) -> bool {
        fold(&self.text) == fold(term)
    }

    /// Case-insensitive prefix test. An empty `term` is a prefix of every token.
    pub fn starts_with_ignore_case(&self, term: &str) -> bool {
        fold(&self.text).starts_with(&*fold(term))
    }

    /// Case-insensitive substring test. An empty `term` is contained in every token.
    pub fn contains_ignore_case(&self, term: &str) -> bool {
        fold(&self.text).contains(&*fold(term))
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        self.text.as_str()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}..{}", self.text, self.start, self.end)
    }
}

/// Lower-cases `text` one character at a time.
///
/// Unlike [`str::to_lowercase`], no context-sensitive rule applies (Greek
/// final sigma in particular), so a prefix or substring of `text` folds to a
/// prefix or substring of the folded `text`.
pub fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

// Borrow when folding would be a no-op.
fn fold(text: &str) -> Cow<'_, str> {
    let unchanged = text.chars().all(|c| {
        let mut lower = c.to_lowercase();
        lower.next() == Some(c) && lower.next().is_none()
    });
    if unchanged {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(fold_case(text))
    }
}

/// Splits text into whitespace-delimited tokens with byte offsets.
///
/// Runs of whitespace collapse to a single space, and offsets refer to that
/// collapsed text. Use [`tokenize_item`](crate::tokenize_item) when the text
/// still needs Unicode normalization or punctuation handling.
pub fn tokenize(text: &str) -> Vec<Token> {
    scan_tokens(text, false)
}

/// Grapheme-aware scan shared by [`tokenize`] and
/// [`tokenize_item`](crate::tokenize_item).
pub(crate) fn scan_tokens(text: &str, strip_punctuation: bool) -> Vec<Token> {
    let mut scan = Scan {
        text: String::with_capacity(text.len()),
        tokens: Vec::with_capacity((text.len() / 4).saturating_add(1)),
        pending_space: false,
        token_start: None,
    };

    // Graphemes keep combining sequences and emoji clusters inside one token.
    for grapheme in text.graphemes(true) {
        for ch in grapheme.chars() {
            let is_delim = ch.is_whitespace() || (strip_punctuation && ch.is_punctuation());
            if is_delim {
                scan.finish_token();
                if !scan.text.is_empty() {
                    scan.pending_space = true;
                }
            } else {
                scan.push(ch);
            }
        }
    }
    scan.finish_token();
    scan.tokens
}

struct Scan {
    text: String,
    tokens: Vec<Token>,
    pending_space: bool,
    token_start: Option<usize>,
}

impl Scan {
    fn push(&mut self, ch: char) {
        if self.pending_space {
            self.text.push(' ');
            self.pending_space = false;
            self.token_start = Some(self.text.len());
        } else if self.token_start.is_none() {
            self.token_start = Some(self.text.len());
        }
        self.text.push(ch);
    }

    fn finish_token(&mut self) {
        if let Some(start) = self.token_start.take() {
            if start < self.text.len() {
                let end = self.text.len();
                self.tokens.push(Token {
                    text: self.text[start..end].to_string(),
                    start,
                    end,
                });
            }
        }
    }
}
