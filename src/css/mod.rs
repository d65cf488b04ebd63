//! Stylesheet engines.
//!
//! This module provides:
//! - `StylesheetEngine` and `TextDocument`, the seam the adapter queries through
//! - `CssLanguageService`, a built-in CSS/SCSS engine
//! - `Stylesheet`, the scanned form of a document shared between flavors

mod data;
mod engine;
mod parser;
mod service;

pub use data::{get_property, PropertyDef};
pub use engine::{Flavor, StylesheetEngine, TextDocument};
pub use parser::{Declaration, IssueKind, ParseIssue, Rule, Stylesheet, Variable};
pub use service::{CssLanguageService, DUPLICATE_PROPERTIES, EMPTY_RULES, UNKNOWN_PROPERTIES};
