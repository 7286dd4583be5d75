//! Layout rendering for the rewritten token stream
//!
//! This module converts substituted tokens back into a string. The only
//! layout reconstructed is vertical: indentation is derived purely from
//! brace nesting depth, independent of the original source spacing. A
//! newline emits a line break plus the current depth in indentation units;
//! an opening brace increments the depth after being emitted; a closing
//! brace decrements it first and lands on a fresh line at the shallower
//! depth. All other tokens are concatenated directly.

use crate::transcode::rewriting::substitution::OutputToken;

/// Indentation emitted per nesting level.
const INDENT_UNIT: &str = "    ";

/// Summary of layout reconstruction for one run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutReport {
    /// Nesting depth left over at end of input; zero iff braces balanced.
    pub final_depth: usize,
    /// Closing braces seen at depth zero. The depth is clamped rather than
    /// going negative; each occurrence is a non-fatal layout anomaly.
    pub underflows: usize,
}

/// Render substituted tokens into output text.
pub fn render(tokens: &[OutputToken]) -> (String, LayoutReport) {
    let mut output = String::new();
    let mut depth: usize = 0;
    let mut underflows: usize = 0;

    for token in tokens {
        match token {
            OutputToken::Newline => {
                output.push('\n');
                push_indent(&mut output, depth);
            }
            OutputToken::OpenBrace => {
                output.push('{');
                depth += 1;
            }
            OutputToken::CloseBrace => {
                if depth == 0 {
                    underflows += 1;
                } else {
                    depth -= 1;
                }
                output.push('\n');
                push_indent(&mut output, depth);
                output.push('}');
            }
            OutputToken::Text(text) => output.push_str(text),
        }
    }

    (
        output,
        LayoutReport {
            final_depth: depth,
            underflows,
        },
    )
}

fn push_indent(output: &mut String, depth: usize) {
    for _ in 0..depth {
        output.push_str(INDENT_UNIT);
    }
}
