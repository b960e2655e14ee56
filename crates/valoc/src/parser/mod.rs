//! Message template parser.
//!
//! This module parses dictionary message templates into an AST of literal
//! text and placeholder tokens. The AST is consumed by the resolver for
//! substitution and by the coverage checker for template comparison.

pub mod ast;
mod template;

pub use ast::*;
pub use template::parse_template;
