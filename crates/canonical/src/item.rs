use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::config::TokenizeConfig;
use crate::error::TokenizeError;
use crate::token::{scan_tokens, Token};

/// An item paired with the tokens extracted from its searchable text.
///
/// The item itself is opaque to the tokenizer and to the matchers; it is
/// carried along so results can be traced back to whatever produced them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenizedItem<T> {
    pub item: T,
    pub tokens: Vec<Token>,
}

impl<T> TokenizedItem<T> {
    /// Pair an item with tokens produced elsewhere.
    pub fn new(item: T, tokens: Vec<Token>) -> Self {
        Self { item, tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}

/// Main entry point. Normalizes `text` per `cfg` and splits it into tokens
/// attached to `item`.
///
/// Offsets refer to the normalized text, where every run of delimiters has
/// been collapsed to a single space.
pub fn tokenize_item<T>(
    item: T,
    text: &str,
    cfg: &TokenizeConfig,
) -> Result<TokenizedItem<T>, TokenizeError> {
    cfg.validate()?;

    // Normalization first, since it can move character boundaries.
    let normalized: Cow<str> = if cfg.normalize_unicode {
        Cow::Owned(text.nfkc().collect::<String>())
    } else {
        Cow::Borrowed(text)
    };

    let tokens = scan_tokens(&normalized, cfg.strip_punctuation);
    if tokens.is_empty() {
        return Err(TokenizeError::EmptyInput);
    }

    Ok(TokenizedItem { item, tokens })
}
