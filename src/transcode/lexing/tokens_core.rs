//! Token definitions for the transcoder
//!
//! This module defines all the tokens the scanner can produce, using the
//! logos derive macro. The set is closed: identifiers, numeric/string/char
//! literals, comments, a collapsed newline token, and one variant per fixed
//! operator or punctuation symbol. Anything else in the input is either
//! skipped whitespace or a lexical error.
//!
//! Comments are preserved verbatim as tokens so they survive conversion
//! unchanged.

use logos::{Lexer, Logos};
use serde::Serialize;

use crate::transcode::languages::Language;

/// Mutable scanner state threaded through logos callbacks.
///
/// Carries the active language pair (consulted for fusion rules) and a
/// 1-based line counter used for diagnostics. Strictly local to one scan.
pub struct ScanState {
    pub language: &'static Language,
    pub line: u32,
}

impl ScanState {
    pub fn new(language: &'static Language) -> Self {
        ScanState { language, line: 1 }
    }
}

/// All possible tokens in the supported source languages
#[derive(Logos, Debug, PartialEq, Clone, Serialize)]
#[logos(extras = ScanState)]
#[logos(skip r"[ \t\r]+")]
pub enum Token {
    // Identifiers, with fusion of registered multi-token idioms
    #[regex(
        r"[A-Za-z_][A-Za-z0-9_]*",
        crate::transcode::lexing::fusion::scan_identifier
    )]
    Identifier(String),

    // Integer, decimal, optional exponent
    #[regex(r"(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?", |lex| lex.slice().to_string())]
    Number(String),

    // Double quotes, escaped quotes allowed, no raw newlines
    #[regex(r#""([^"\\\n]|\\[\s\S])*""#, |lex| lex.slice().to_string())]
    StringLiteral(String),

    // Single quotes, escaped chars allowed, no raw newlines
    #[regex(r"'([^'\\\n]|\\[\s\S])*'", |lex| lex.slice().to_string())]
    CharLiteral(String),

    #[regex(r"//[^\n]*", |lex| lex.slice().to_string())]
    LineComment(String),

    #[regex(r"/\*[^*]*\*+([^/*][^*]*\*+)*/", scan_block_comment)]
    BlockComment(String),

    // One or more consecutive newlines collapse into a single token
    #[regex(r"\n+", scan_newline_run)]
    Newline,

    // Multi-character operators
    #[token("===")]
    StrictEq,
    #[token("!==")]
    StrictNotEq,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("<=")]
    Le,
    #[token(">=")]
    Ge,
    #[token("&&")]
    AndAnd,
    #[token("||")]
    OrOr,
    #[token("++")]
    Increment,
    #[token("--")]
    Decrement,
    #[token("=>")]
    FatArrow,
    #[token("??")]
    Coalesce,
    #[token("?.")]
    OptionalDot,

    // Single-character operators and punctuation
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("=")]
    Equals,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("!")]
    Not,
    #[token("?")]
    Question,
    #[token(":")]
    Colon,
    #[token(".")]
    Period,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,
    #[token("[")]
    OpenBracket,
    #[token("]")]
    CloseBracket,
}

fn scan_newline_run(lex: &mut Lexer<Token>) {
    lex.extras.line += lex.slice().len() as u32;
}

fn scan_block_comment(lex: &mut Lexer<Token>) -> String {
    let text = lex.slice();
    lex.extras.line += text.matches('\n').count() as u32;
    text.to_string()
}

impl Token {
    /// The token's source text, after any fusion or substitution already
    /// applied to it. For [Token::Newline] this is a single line feed
    /// regardless of how many newlines the run collapsed.
    pub fn text(&self) -> String {
        match self {
            Token::Identifier(s)
            | Token::Number(s)
            | Token::StringLiteral(s)
            | Token::CharLiteral(s)
            | Token::LineComment(s)
            | Token::BlockComment(s) => s.clone(),
            Token::Newline => "\n".to_string(),
            Token::StrictEq => "===".to_string(),
            Token::StrictNotEq => "!==".to_string(),
            Token::EqEq => "==".to_string(),
            Token::NotEq => "!=".to_string(),
            Token::Le => "<=".to_string(),
            Token::Ge => ">=".to_string(),
            Token::AndAnd => "&&".to_string(),
            Token::OrOr => "||".to_string(),
            Token::Increment => "++".to_string(),
            Token::Decrement => "--".to_string(),
            Token::FatArrow => "=>".to_string(),
            Token::Coalesce => "??".to_string(),
            Token::OptionalDot => "?.".to_string(),
            Token::Plus => "+".to_string(),
            Token::Minus => "-".to_string(),
            Token::Star => "*".to_string(),
            Token::Slash => "/".to_string(),
            Token::Percent => "%".to_string(),
            Token::Equals => "=".to_string(),
            Token::Lt => "<".to_string(),
            Token::Gt => ">".to_string(),
            Token::Not => "!".to_string(),
            Token::Question => "?".to_string(),
            Token::Colon => ":".to_string(),
            Token::Period => ".".to_string(),
            Token::Comma => ",".to_string(),
            Token::Semicolon => ";".to_string(),
            Token::OpenParen => "(".to_string(),
            Token::CloseParen => ")".to_string(),
            Token::OpenBrace => "{".to_string(),
            Token::CloseBrace => "}".to_string(),
            Token::OpenBracket => "[".to_string(),
            Token::CloseBracket => "]".to_string(),
        }
    }

    /// Check if this token is an identifier
    pub fn is_identifier(&self) -> bool {
        matches!(self, Token::Identifier(_))
    }

    /// Check if this token is a literal or comment, passed through verbatim
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            Token::Number(_)
                | Token::StringLiteral(_)
                | Token::CharLiteral(_)
                | Token::LineComment(_)
                | Token::BlockComment(_)
        )
    }

    /// Check if this token's text is eligible for table substitution.
    /// Literals, comments, newlines and braces are not; braces are handled
    /// structurally by the layout renderer.
    pub fn is_substitutable(&self) -> bool {
        !self.is_literal()
            && !matches!(self, Token::Newline | Token::OpenBrace | Token::CloseBrace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcode::languages::JAVA_TO_CSHARP;

    fn scan(source: &str) -> Vec<Token> {
        let mut lexer = Token::lexer_with_extras(source, ScanState::new(&JAVA_TO_CSHARP));
        let mut tokens = Vec::new();
        while let Some(result) = lexer.next() {
            tokens.push(result.expect("unexpected lexical error"));
        }
        tokens
    }

    #[test]
    fn test_identifiers_and_punctuation() {
        assert_eq!(
            scan("if (x == 1)"),
            vec![
                Token::Identifier("if".to_string()),
                Token::OpenParen,
                Token::Identifier("x".to_string()),
                Token::EqEq,
                Token::Number("1".to_string()),
                Token::CloseParen,
            ]
        );
    }

    #[test]
    fn test_longest_match_wins() {
        assert_eq!(scan("=="), vec![Token::EqEq]);
        assert_eq!(scan("==="), vec![Token::StrictEq]);
        assert_eq!(scan("= ="), vec![Token::Equals, Token::Equals]);
        assert_eq!(scan("++"), vec![Token::Increment]);
        assert_eq!(scan("+ +"), vec![Token::Plus, Token::Plus]);
        assert_eq!(scan("=>"), vec![Token::FatArrow]);
        assert_eq!(scan("?."), vec![Token::OptionalDot]);
    }

    #[test]
    fn test_number_forms() {
        assert_eq!(
            scan("42 3.14 .5 1e10 2.5E-3"),
            vec![
                Token::Number("42".to_string()),
                Token::Number("3.14".to_string()),
                Token::Number(".5".to_string()),
                Token::Number("1e10".to_string()),
                Token::Number("2.5E-3".to_string()),
            ]
        );
    }

    #[test]
    fn test_string_literal_with_escaped_quote() {
        assert_eq!(
            scan(r#""say \"hi\"""#),
            vec![Token::StringLiteral(r#""say \"hi\"""#.to_string())]
        );
    }

    #[test]
    fn test_char_literal() {
        assert_eq!(
            scan(r"'a' '\n'"),
            vec![
                Token::CharLiteral("'a'".to_string()),
                Token::CharLiteral(r"'\n'".to_string()),
            ]
        );
    }

    #[test]
    fn test_member_access_is_period_not_number() {
        assert_eq!(
            scan("obj.method"),
            vec![
                Token::Identifier("obj".to_string()),
                Token::Period,
                Token::Identifier("method".to_string()),
            ]
        );
    }

    #[test]
    fn test_newline_run_collapses() {
        assert_eq!(
            scan("a\n\n\nb"),
            vec![
                Token::Identifier("a".to_string()),
                Token::Newline,
                Token::Identifier("b".to_string()),
            ]
        );
    }

    #[test]
    fn test_newline_run_advances_line_counter() {
        let mut lexer = Token::lexer_with_extras("a\n\n\nb", ScanState::new(&JAVA_TO_CSHARP));
        while lexer.next().is_some() {}
        assert_eq!(lexer.extras.line, 4);
    }

    #[test]
    fn test_comments_preserved() {
        assert_eq!(
            scan("// note"),
            vec![Token::LineComment("// note".to_string())]
        );
        assert_eq!(
            scan("/* a\nb */"),
            vec![Token::BlockComment("/* a\nb */".to_string())]
        );
    }

    #[test]
    fn test_block_comment_advances_line_counter() {
        let mut lexer = Token::lexer_with_extras("/* a\nb */", ScanState::new(&JAVA_TO_CSHARP));
        while lexer.next().is_some() {}
        assert_eq!(lexer.extras.line, 2);
    }

    #[test]
    fn test_token_text_roundtrip() {
        assert_eq!(Token::EqEq.text(), "==");
        assert_eq!(Token::FatArrow.text(), "=>");
        assert_eq!(Token::Identifier("abc".to_string()).text(), "abc");
        assert_eq!(Token::StringLiteral("\"x\"".to_string()).text(), "\"x\"");
    }

    #[test]
    fn test_token_predicates() {
        assert!(Token::Identifier("x".to_string()).is_identifier());
        assert!(!Token::EqEq.is_identifier());

        assert!(Token::Number("1".to_string()).is_literal());
        assert!(Token::LineComment("//".to_string()).is_literal());
        assert!(!Token::Identifier("x".to_string()).is_literal());

        assert!(Token::Identifier("x".to_string()).is_substitutable());
        assert!(Token::EqEq.is_substitutable());
        assert!(!Token::OpenBrace.is_substitutable());
        assert!(!Token::Newline.is_substitutable());
        assert!(!Token::StringLiteral("\"x\"".to_string()).is_substitutable());
    }
}
