//! Base tokenization implementation
//!
//! This module provides the raw tokenization using the logos lexer library.
//! This is the entry point where source strings become token streams.
//!
//! Two scan modes exist. The lenient [tokenize] skips input that matches no
//! rule and reports each occurrence as a [Diagnostic], so a conversion
//! always produces best-effort output. The strict [tokenize_strict] aborts
//! on the first such occurrence and is meant for batch use where partial
//! output is worse than no output.

use logos::Logos;

use crate::transcode::languages::Language;
use crate::transcode::lexing::common::{Diagnostic, LexError};
use crate::transcode::lexing::tokens_core::{ScanState, Token};

/// Tokenize source code with location information, recovering from lexical
/// errors.
///
/// Returns tokens paired with their byte spans, plus one diagnostic per
/// skipped stretch of unrecognized input. Rewriting and rendering operate on
/// the token stream produced here.
pub fn tokenize(
    source: &str,
    language: &'static Language,
) -> (Vec<(Token, logos::Span)>, Vec<Diagnostic>) {
    let mut lexer = Token::lexer_with_extras(source, ScanState::new(language));
    let mut tokens = Vec::new();
    let mut diagnostics = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span())),
            Err(()) => {
                diagnostics.push(Diagnostic::new(lexer.slice(), lexer.span(), lexer.extras.line))
            }
        }
    }

    (tokens, diagnostics)
}

/// Tokenize source code, failing on the first lexical error.
pub fn tokenize_strict(
    source: &str,
    language: &'static Language,
) -> Result<Vec<(Token, logos::Span)>, LexError> {
    let mut lexer = Token::lexer_with_extras(source, ScanState::new(language));
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span())),
            Err(()) => {
                return Err(LexError::new(lexer.slice(), lexer.span(), lexer.extras.line))
            }
        }
    }

    Ok(tokens)
}
