//! Tokenizer
//!
//! This module scans raw source text into a stream of classified tokens.
//!
//! Structure:
//!     The tokenization is done through the logos lexer library. The token
//! set is the union of both supported source languages; tokens a language
//! never produces simply never appear in its streams.
//!
//! Matching policy:
//!     At each position the longest matching pattern wins, so multi-character
//!     operators take precedence over their single-character prefixes (`==`
//!     before `=`, `++` before `+`, `=>` before `=`). String and character
//!     literals are escape-aware and must not span a raw newline unless the
//!     newline is escaped. Runs of consecutive newline characters collapse
//!     into a single [Token::Newline]; the line counter still advances by the
//!     run length. Spaces, tabs and carriage returns are consumed without
//!     producing a token.
//!
//! Fusion:
//!     Identifier fusion is part of the scanner's contract, not a separate
//!     pass. When an identifier matches a fusion anchor of the active
//!     language, the scanner peeks the unconsumed remainder for the fixed
//!     literal continuation and, on a full match, consumes both as a single
//!     token carrying the fused replacement text. See [fusion].
//!
//! Error recovery:
//!     Characters matching no rule are skipped and reported as [Diagnostic]s
//!     in the default lenient scan; [tokenize_strict] instead aborts on the
//!     first one. A run therefore always completes in lenient mode, which is
//!     the right trade-off for interactive best-effort conversion.
//!
//! The raw logos lexer is also usable directly via
//! `Token::lexer_with_extras(source, ScanState::new(language))` when a lazy,
//! restartable token sequence is preferred over the collected vector.

pub mod base_tokenization;
pub mod common;
pub mod fusion;
pub mod tokens_core;

pub use base_tokenization::{tokenize, tokenize_strict};
pub use common::{Diagnostic, LexError};
pub use tokens_core::{ScanState, Token};
