//! Identifier lookahead fusion
//!
//! Fusion is the one place the scanner looks beyond the current lexeme:
//! when an identifier matches a fusion anchor of the active language (for
//! example `System` in Java), the fixed literal continuation registered for
//! that anchor (`.out.println`) is peeked in the unconsumed remainder. On a
//! full match both are consumed as one token carrying the replacement text
//! (`Console.WriteLine`); anything less than a full match emits the plain
//! identifier and consumes nothing extra.
//!
//! The peek is a bounded commit-or-fall-back check against a single fixed
//! string, not a scan. A fused token's text never collides with a
//! substitution table key, so the rewriter passes it through untouched.

use logos::Lexer;

use crate::transcode::lexing::tokens_core::Token;

/// Scan callback for identifier tokens.
pub(crate) fn scan_identifier(lex: &mut Lexer<Token>) -> String {
    let language = lex.extras.language;
    let word = lex.slice();
    if let Some(rule) = language.fusion_for(word) {
        if peeks_literal(lex, rule.continuation) {
            lex.bump(rule.continuation.len());
            return rule.replacement.to_string();
        }
    }
    word.to_string()
}

/// Bounded peek: does the unconsumed remainder start with `literal`?
fn peeks_literal(lex: &Lexer<Token>, literal: &str) -> bool {
    lex.remainder().starts_with(literal)
}

#[cfg(test)]
mod tests {
    use crate::transcode::languages::{JAVA_TO_CSHARP, JS_TO_TS};
    use crate::transcode::lexing::tokens_core::{ScanState, Token};
    use logos::Logos;

    fn scan_java(source: &str) -> Vec<(Token, std::ops::Range<usize>)> {
        let mut lexer = Token::lexer_with_extras(source, ScanState::new(&JAVA_TO_CSHARP));
        let mut tokens = Vec::new();
        while let Some(result) = lexer.next() {
            tokens.push((result.expect("unexpected lexical error"), lexer.span()));
        }
        tokens
    }

    #[test]
    fn test_println_fuses_to_single_token() {
        let tokens = scan_java("System.out.println(\"hi\")");

        assert_eq!(
            tokens[0],
            (
                Token::Identifier("Console.WriteLine".to_string()),
                // spans the full "System.out.println"
                0..18
            )
        );
        assert_eq!(tokens[1], (Token::OpenParen, 18..19));
        assert_eq!(
            tokens[2],
            (Token::StringLiteral("\"hi\"".to_string()), 19..23)
        );
    }

    #[test]
    fn test_anchor_without_continuation_stays_plain() {
        let tokens = scan_java("System.exit(0)");

        assert_eq!(tokens[0].0, Token::Identifier("System".to_string()));
        assert_eq!(tokens[0].1, 0..6);
        assert_eq!(tokens[1].0, Token::Period);
        assert_eq!(tokens[2].0, Token::Identifier("exit".to_string()));
    }

    #[test]
    fn test_partial_continuation_falls_back() {
        // ".out.print" is a prefix of the registered ".out.println" but not
        // the whole of it; nothing may be consumed beyond the anchor
        let tokens = scan_java("System.out.print(\"hi\")");

        assert_eq!(tokens[0], (Token::Identifier("System".to_string()), 0..6));
        assert_eq!(tokens[1].0, Token::Period);
        assert_eq!(tokens[2].0, Token::Identifier("out".to_string()));
        assert_eq!(tokens[3].0, Token::Period);
        assert_eq!(tokens[4].0, Token::Identifier("print".to_string()));
    }

    #[test]
    fn test_anchor_at_end_of_input() {
        let tokens = scan_java("System");
        assert_eq!(tokens, vec![(Token::Identifier("System".to_string()), 0..6)]);
    }

    #[test]
    fn test_console_log_fuses_under_js() {
        let mut lexer =
            Token::lexer_with_extras("console.log(x)", ScanState::new(&JS_TO_TS));
        let first = lexer.next().unwrap().unwrap();

        assert_eq!(first, Token::Identifier("console.info".to_string()));
        assert_eq!(lexer.span(), 0..11);
    }

    #[test]
    fn test_java_anchor_inert_under_js() {
        // "System" is not an anchor for the JavaScript pair
        let mut lexer = Token::lexer_with_extras(
            "System.out.println(x)",
            ScanState::new(&JS_TO_TS),
        );
        let first = lexer.next().unwrap().unwrap();

        assert_eq!(first, Token::Identifier("System".to_string()));
        assert_eq!(lexer.span(), 0..6);
    }
}
