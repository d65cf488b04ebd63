//! Template and virtual document handling.
//!
//! This module provides:
//! - `LineIndex` for byte offset <-> position conversion
//! - `TemplateContext` and `TemplateSource` for embedded template literals
//! - `VirtualDocument` and the wrapper coordinate mapping

mod template;
mod text;
mod virtual_doc;

pub use template::{TemplateContext, TemplateSource};
pub use text::LineIndex;
pub use virtual_doc::{
    from_virtual_offset, from_virtual_position, to_virtual_offset, to_virtual_position,
    VirtualDocument, LANGUAGE_ID, VIRTUAL_URI, WRAPPER_PREFIX, WRAPPER_SUFFIX,
};
