//! Language pair definitions and registry
//!
//! A [Language] bundles everything that distinguishes one conversion from
//! another: the keyword/operator substitution table and the fusion rules for
//! multi-token idioms. The scanning and rewriting machinery is shared; the
//! language pair is pure configuration, built once into a static and
//! read-only afterwards.
//!
//! The [LanguageRegistry] maps conversion names to their definitions and is
//! the single lookup point for the CLI and the processor.

use std::collections::HashMap;
use std::sync::OnceLock;

pub mod java_csharp;
pub mod js_ts;

pub use java_csharp::JAVA_TO_CSHARP;
pub use js_ts::JS_TO_TS;

/// A multi-token idiom collapsed into a single replacement token.
///
/// When the scanner produces an identifier equal to `anchor` and the
/// unconsumed input starts with `continuation`, both are consumed as one
/// token whose text is `replacement`. Exactly one continuation is registered
/// per anchor; a partial match falls back to plain identifier handling with
/// no partial consumption.
#[derive(Debug, Clone, PartialEq)]
pub struct FusionRule {
    pub anchor: &'static str,
    pub continuation: &'static str,
    pub replacement: &'static str,
}

/// One source-to-source conversion: name plus substitution/fusion tables.
///
/// An empty replacement string in the substitution table deletes the token
/// from the output stream.
#[derive(Debug, Clone)]
pub struct Language {
    name: &'static str,
    description: &'static str,
    substitutions: HashMap<&'static str, &'static str>,
    fusions: Vec<FusionRule>,
}

impl Language {
    pub fn new(
        name: &'static str,
        description: &'static str,
        substitutions: &[(&'static str, &'static str)],
        fusions: &[FusionRule],
    ) -> Self {
        Language {
            name,
            description,
            substitutions: substitutions.iter().copied().collect(),
            fusions: fusions.to_vec(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Look up the replacement for a token's text. `Some("")` means the
    /// token is deleted; `None` means it passes through unchanged.
    pub fn substitution_for(&self, text: &str) -> Option<&'static str> {
        self.substitutions.get(text).copied()
    }

    /// Fusion rule anchored at the given identifier, if any.
    pub fn fusion_for(&self, anchor: &str) -> Option<&FusionRule> {
        self.fusions.iter().find(|rule| rule.anchor == anchor)
    }
}

/// Registry of available conversions.
pub struct LanguageRegistry {
    languages: HashMap<&'static str, &'static Language>,
}

impl LanguageRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        LanguageRegistry {
            languages: HashMap::new(),
        }
    }

    /// Register a language pair
    pub fn register(&mut self, language: &'static Language) {
        self.languages.insert(language.name(), language);
    }

    /// Get a registered language pair by name
    pub fn get(&self, name: &str) -> Option<&'static Language> {
        self.languages.get(name).copied()
    }

    /// Check if a language pair is registered
    pub fn has(&self, name: &str) -> bool {
        self.languages.contains_key(name)
    }

    /// Get the list of available conversion names
    pub fn available(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.languages.keys().copied().collect();
        names.sort();
        names
    }

    /// Get the global registry, populated with the built-in conversions
    pub fn global() -> &'static LanguageRegistry {
        static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();
        REGISTRY.get_or_init(|| {
            let mut registry = LanguageRegistry::new();
            registry.register(&JAVA_TO_CSHARP);
            registry.register(&JS_TO_TS);
            registry
        })
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_register_and_get() {
        let mut registry = LanguageRegistry::new();
        registry.register(&JAVA_TO_CSHARP);

        assert!(registry.get("java2csharp").is_some());
        assert_eq!(registry.get("java2csharp").unwrap().name(), "java2csharp");
    }

    #[test]
    fn test_registry_has() {
        let mut registry = LanguageRegistry::new();
        registry.register(&JS_TO_TS);

        assert!(registry.has("js2ts"));
        assert!(!registry.has("nonexistent"));
    }

    #[test]
    fn test_registry_available_is_sorted() {
        let mut registry = LanguageRegistry::new();
        registry.register(&JS_TO_TS);
        registry.register(&JAVA_TO_CSHARP);

        assert_eq!(registry.available(), vec!["java2csharp", "js2ts"]);
    }

    #[test]
    fn test_global_registry_has_builtins() {
        let registry = LanguageRegistry::global();

        assert!(registry.has("java2csharp"));
        assert!(registry.has("js2ts"));
        assert!(registry.get("unknown").is_none());
    }

    #[test]
    fn test_substitution_lookup() {
        let language = Language::new(
            "test",
            "test pair",
            &[("alpha", "beta"), ("gone", "")],
            &[],
        );

        assert_eq!(language.substitution_for("alpha"), Some("beta"));
        assert_eq!(language.substitution_for("gone"), Some(""));
        assert_eq!(language.substitution_for("other"), None);
    }

    #[test]
    fn test_fusion_lookup() {
        let rule = FusionRule {
            anchor: "root",
            continuation: ".leaf",
            replacement: "fused",
        };
        let language = Language::new("test", "test pair", &[], &[rule.clone()]);

        assert_eq!(language.fusion_for("root"), Some(&rule));
        assert_eq!(language.fusion_for("leaf"), None);
    }
}
