//! Table-driven token substitution
//!
//! For each scanned token: look up its text in the language pair's table.
//! Absent means pass through unchanged, a non-empty replacement swaps the
//! text, and an empty replacement drops the token entirely. Surrounding
//! tokens are never touched by a deletion; in particular no separator
//! cleanup happens.
//!
//! Braces and newlines are carried as structural tokens for the layout
//! renderer; everything else is reduced to its (possibly replaced) text.
//! Substitution is a per-token map with no lookahead and no reordering.

use crate::transcode::languages::Language;
use crate::transcode::lexing::tokens_core::Token;

/// A token after substitution, ready for layout rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum OutputToken {
    OpenBrace,
    CloseBrace,
    Newline,
    Text(String),
}

/// Apply the language pair's substitution table, mapping each scanned token
/// to zero or one output tokens.
pub fn substitute(tokens: &[(Token, logos::Span)], language: &Language) -> Vec<OutputToken> {
    let mut output = Vec::new();

    for (token, _span) in tokens {
        match token {
            Token::OpenBrace => output.push(OutputToken::OpenBrace),
            Token::CloseBrace => output.push(OutputToken::CloseBrace),
            Token::Newline => output.push(OutputToken::Newline),
            _ => {
                let text = token.text();
                if token.is_substitutable() {
                    match language.substitution_for(&text) {
                        // empty replacement deletes the token
                        Some("") => {}
                        Some(replacement) => {
                            output.push(OutputToken::Text(replacement.to_string()))
                        }
                        None => output.push(OutputToken::Text(text)),
                    }
                } else {
                    output.push(OutputToken::Text(text));
                }
            }
        }
    }

    output
}
