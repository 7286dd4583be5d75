//! JavaScript to TypeScript conversion tables
//!
//! Mostly identity mappings: TypeScript is a superset of JavaScript, so the
//! interesting rewrites are `var` to `let` and loose equality to strict
//! equality. The strict operators map to themselves so that input which is
//! already TypeScript survives a second pass unchanged. `console.log` is a
//! fusion to `console.info`.

use once_cell::sync::Lazy;

use crate::transcode::languages::{FusionRule, Language};

pub static JS_TO_TS: Lazy<Language> = Lazy::new(|| {
    Language::new(
        "js2ts",
        "JavaScript to TypeScript",
        &[
            ("var", "let"),
            ("let", "let"),
            ("const", "const"),
            ("function", "function"),
            ("class", "class"),
            ("constructor", "constructor"),
            ("this", "this"),
            ("super", "super"),
            ("==", "==="),
            ("!=", "!=="),
            ("===", "==="),
            ("!==", "!=="),
            ("=", "="),
            (";", ";"),
            ("=>", "=>"),
            ("import", "import"),
            ("export", "export"),
            ("from", "from"),
            ("default", "default"),
            ("interface", "interface"),
            ("type", "type"),
            ("enum", "enum"),
            ("readonly", "readonly"),
            ("number", "number"),
            ("string", "string"),
            ("boolean", "boolean"),
            ("any", "any"),
            ("??", "??"),
            ("?.", "?."),
            ("(", "("),
            (")", ")"),
        ],
        &[FusionRule {
            anchor: "console",
            continuation: ".log",
            replacement: "console.info",
        }],
    )
});
