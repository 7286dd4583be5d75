//! # transcode
//!
//! Token-level source-to-source transcoders.
//!
//! Each supported conversion (Java to C#, JavaScript to TypeScript) is a
//! deterministic, rule-based rewrite of recognized tokens: source text is
//! scanned into a stream of classified lexemes, a fixed keyword/operator
//! substitution table is applied, a handful of multi-token idioms are fused
//! into single replacement tokens, and output text is re-emitted with
//! indentation reconstructed from brace nesting. There is no parsing and no
//! semantic analysis; unrecognized tokens pass through verbatim and the
//! output is not guaranteed to compile.

pub mod transcode;
