//! Scanner error and diagnostic types

use std::fmt;
use std::ops::Range;

use serde::Serialize;

/// A recovered lexical error: input that matched no token rule.
///
/// In the default lenient scan the offending characters are skipped and one
/// of these is recorded; the run itself always completes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    /// The offending source text
    pub text: String,
    /// Byte range of the offending text
    pub span: Range<usize>,
    /// 1-based line the text starts on
    pub line: u32,
}

impl Diagnostic {
    pub fn new(text: &str, span: Range<usize>, line: u32) -> Self {
        Diagnostic {
            text: text.to_string(),
            span,
            line,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unrecognized character `{}` at line {} (bytes {}..{})",
            self.text, self.line, self.span.start, self.span.end
        )
    }
}

/// Fatal form of the same condition, returned by strict scans.
#[derive(Debug, Clone, PartialEq)]
pub struct LexError {
    pub text: String,
    pub span: Range<usize>,
    pub line: u32,
}

impl LexError {
    pub fn new(text: &str, span: Range<usize>, line: u32) -> Self {
        LexError {
            text: text.to_string(),
            span,
            line,
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unrecognized character `{}` at line {} (bytes {}..{})",
            self.text, self.line, self.span.start, self.span.end
        )
    }
}

impl std::error::Error for LexError {}
