//! Java to C# conversion tables
//!
//! Keyword substitutions plus the `System.out.println` idiom, which C#
//! spells as a single `Console.WriteLine` call. Keywords with no C#
//! equivalent (`final`, `package`) map to the empty string and are deleted
//! from the output stream. Identifiers not listed here, along with all
//! operators, pass through unchanged.

use once_cell::sync::Lazy;

use crate::transcode::languages::{FusionRule, Language};

pub static JAVA_TO_CSHARP: Lazy<Language> = Lazy::new(|| {
    Language::new(
        "java2csharp",
        "Java to C#",
        &[
            ("boolean", "bool"),
            ("byte", "byte"),
            ("char", "char"),
            ("short", "short"),
            ("int", "int"),
            ("long", "long"),
            ("float", "float"),
            ("double", "double"),
            ("void", "void"),
            // no direct equivalent; removed
            ("final", ""),
            ("null", "null"),
            ("true", "true"),
            ("false", "false"),
            ("new", "new"),
            ("this", "this"),
            ("super", "base"),
            ("class", "class"),
            ("interface", "interface"),
            // inheritance symbol in C#
            ("extends", ":"),
            // interface implementation separator in C#
            ("implements", ","),
            // namespaces take this role in C#; the keyword itself is removed
            ("package", ""),
            ("import", "using"),
            ("if", "if"),
            ("else", "else"),
            ("for", "for"),
            ("while", "while"),
            ("do", "do"),
            ("switch", "switch"),
            ("case", "case"),
            ("default", "default"),
            ("break", "break"),
            ("continue", "continue"),
            ("return", "return"),
        ],
        &[FusionRule {
            anchor: "System",
            continuation: ".out.println",
            replacement: "Console.WriteLine",
        }],
    )
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_mappings() {
        assert_eq!(JAVA_TO_CSHARP.substitution_for("boolean"), Some("bool"));
        assert_eq!(JAVA_TO_CSHARP.substitution_for("super"), Some("base"));
        assert_eq!(JAVA_TO_CSHARP.substitution_for("extends"), Some(":"));
        assert_eq!(JAVA_TO_CSHARP.substitution_for("implements"), Some(","));
        assert_eq!(JAVA_TO_CSHARP.substitution_for("import"), Some("using"));
    }

    #[test]
    fn test_removed_keywords_map_to_empty() {
        assert_eq!(JAVA_TO_CSHARP.substitution_for("final"), Some(""));
        assert_eq!(JAVA_TO_CSHARP.substitution_for("package"), Some(""));
    }

    #[test]
    fn test_unlisted_identifiers_pass_through() {
        assert_eq!(JAVA_TO_CSHARP.substitution_for("String"), None);
        assert_eq!(JAVA_TO_CSHARP.substitution_for("public"), None);
        assert_eq!(JAVA_TO_CSHARP.substitution_for("System"), None);
    }

    #[test]
    fn test_println_fusion_rule() {
        let rule = JAVA_TO_CSHARP.fusion_for("System").unwrap();
        assert_eq!(rule.continuation, ".out.println");
        assert_eq!(rule.replacement, "Console.WriteLine");
    }
}
