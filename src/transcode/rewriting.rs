//! Rewriter
//!
//! This module turns a scanned token stream into output text in two steps:
//!
//! 1. Substitution ([substitution]): each token maps to zero or one output
//!    tokens through the language pair's table. Deletion is explicit token
//!    filtering, not a sentinel value.
//! 2. Layout rendering ([detokenizer]): the surviving tokens are emitted as
//!    text, with indentation derived from brace nesting depth.
//!
//! The rewriter never reorders tokens and never looks ahead; multi-token
//! idioms were already fused during scanning.

pub mod detokenizer;
pub mod substitution;

pub use detokenizer::{render, LayoutReport};
pub use substitution::{substitute, OutputToken};
