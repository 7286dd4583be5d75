//! Source-to-source transcoding pipeline
//!
//! This module orchestrates the complete conversion pipeline for the supported
//! language pairs.
//!
//! Structure:
//!     The tokenization is done through the logos lexer library, driven by the
//! active language pair's fusion rules. The rewrite itself is table-driven and
//! never reorders tokens.
//!
//! The pipeline consists of:
//! 1. Core tokenization using the logos lexer ([lexing]), including bounded
//!    lookahead fusion of fixed multi-token idioms
//! 2. Substitution: each token maps to zero or one output tokens through the
//!    language pair's keyword/operator table ([rewriting::substitution])
//! 3. Layout rendering: output text is rebuilt with indentation derived from
//!    brace nesting ([rewriting::detokenizer])
//!
//! Layout Handling
//!
//!     Whitespace other than newlines is consumed during scanning and never
//!     reconstructed, so tokens on the same line come back concatenated. The
//!     only layout the renderer rebuilds is vertical: one line break per
//!     newline run in the source, indented by the current brace nesting depth.
//!     This is a deliberate fidelity limitation of the token-level approach,
//!     kept as-is rather than papered over with token-kind-aware spacing.

pub mod languages;
pub mod lexing;
pub mod processor;
pub mod rewriting;

pub use languages::{FusionRule, Language, LanguageRegistry};
pub use lexing::{tokenize, tokenize_strict, Diagnostic, LexError, Token};
pub use processor::{transcode, transcode_strict, TranscodeError, Transcription};
pub use rewriting::{render, substitute, LayoutReport, OutputToken};
