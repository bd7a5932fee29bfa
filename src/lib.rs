//! Generates Java AST class hierarchies with visitor-pattern dispatch from a
//! declarative grammar table.
//!
//! Pipeline: [`grammar`] table → [`lower`] into the [`ir`] class hierarchy →
//! [`codegen`] lines → [`sink`].
pub mod cli;
pub mod codegen;
pub mod error;
pub mod grammar;
pub mod grammar_de;
pub mod ir;
pub mod lower;
pub mod sink;
pub mod synth;

pub use error::{Error, Result};
pub use grammar::{Family, Field, GrammarTable, Production};
pub use synth::{synthesize, synthesize_key, Provenance, Synthesizer};
