//! fulltext tokenizer layer.
//!
//! Turns the searchable text of an item into [`Token`]s that the term matchers
//! consume. Nothing here decides whether a token matches a term; this crate
//! only provides the token capability set the matchers rely on.
//!
//! ## What we do
//!
//! - Unicode normalization (NFKC by default, configurable)
//! - Optional punctuation stripping
//! - Whitespace-delimited tokenization with byte offsets
//! - Case-insensitive token predicates (equality, prefix, substring)
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no locale dependence. The same text and config
//! produce the same tokens on any machine.
//!
//! ## Example
//!
//! ```
//! use canonical::{tokenize_item, TokenizeConfig};
//!
//! let item = tokenize_item("doc-1", "Rust Catalog", &TokenizeConfig::default()).unwrap();
//! assert_eq!(item.tokens.len(), 2);
//! assert!(item.tokens[1].starts_with_ignore_case("cat"));
//! ```

mod config;
mod error;
mod item;
mod token;

pub use crate::config::TokenizeConfig;
pub use crate::error::TokenizeError;
pub use crate::item::{tokenize_item, TokenizedItem};
pub use crate::token::{fold_case, tokenize, Token};
