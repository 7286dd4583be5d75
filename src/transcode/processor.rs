//! End-to-end conversion API
//!
//! This module wires the pipeline together: tokenize, substitute, render.
//! The lenient [transcode] always completes and returns best-effort output
//! alongside whatever diagnostics the scan produced; [transcode_strict]
//! fails on the first lexical error instead. Both are pure functions over
//! in-memory strings; file handling belongs to the caller.
//!
//! For inspection, [dump_tokens] serializes the scanned token stream either
//! as a plain listing or as JSON.

use std::fmt;

use crate::transcode::languages::Language;
use crate::transcode::lexing::{tokenize, tokenize_strict, Diagnostic, LexError};
use crate::transcode::rewriting::{render, substitute, LayoutReport};

/// Result of one conversion run.
#[derive(Debug, Clone, PartialEq)]
pub struct Transcription {
    /// The rewritten source text
    pub output: String,
    /// Lexical errors recovered during scanning (always empty in strict runs)
    pub diagnostics: Vec<Diagnostic>,
    /// Layout reconstruction summary
    pub layout: LayoutReport,
}

/// Errors that can occur during conversion
#[derive(Debug, Clone, PartialEq)]
pub enum TranscodeError {
    Lex(LexError),
    LanguageNotFound(String),
    InvalidFormat(String),
    Serialization(String),
}

impl fmt::Display for TranscodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranscodeError::Lex(error) => write!(f, "Tokenization failed: {}", error),
            TranscodeError::LanguageNotFound(name) => {
                write!(f, "Language pair '{}' not found", name)
            }
            TranscodeError::InvalidFormat(format) => write!(f, "Invalid format: {}", format),
            TranscodeError::Serialization(msg) => write!(f, "Serialization failed: {}", msg),
        }
    }
}

impl std::error::Error for TranscodeError {}

/// Convert source text, recovering from lexical errors.
pub fn transcode(source: &str, language: &'static Language) -> Transcription {
    let (tokens, diagnostics) = tokenize(source, language);
    let output_tokens = substitute(&tokens, language);
    let (output, layout) = render(&output_tokens);

    Transcription {
        output,
        diagnostics,
        layout,
    }
}

/// Convert source text, failing on the first lexical error.
pub fn transcode_strict(
    source: &str,
    language: &'static Language,
) -> Result<Transcription, TranscodeError> {
    let tokens = tokenize_strict(source, language).map_err(TranscodeError::Lex)?;
    let output_tokens = substitute(&tokens, language);
    let (output, layout) = render(&output_tokens);

    Ok(Transcription {
        output,
        diagnostics: Vec::new(),
        layout,
    })
}

/// Output format for token dumps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DumpFormat {
    Simple,
    Json,
}

impl DumpFormat {
    /// Parse a format name like "simple" or "json"
    pub fn from_string(format: &str) -> Result<Self, TranscodeError> {
        match format {
            "simple" => Ok(DumpFormat::Simple),
            "json" => Ok(DumpFormat::Json),
            _ => Err(TranscodeError::InvalidFormat(format.to_string())),
        }
    }
}

/// Serialize the scanned token stream for inspection.
pub fn dump_tokens(
    source: &str,
    language: &'static Language,
    format: DumpFormat,
) -> Result<String, TranscodeError> {
    let (tokens, _) = tokenize(source, language);

    match format {
        DumpFormat::Simple => {
            let mut output = String::new();
            for (token, span) in &tokens {
                output.push_str(&format!("{:?} @ {}..{}\n", token, span.start, span.end));
            }
            Ok(output)
        }
        DumpFormat::Json => serde_json::to_string_pretty(&tokens)
            .map_err(|e| TranscodeError::Serialization(e.to_string())),
    }
}
