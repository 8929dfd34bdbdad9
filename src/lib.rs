//! Tag-driven SQL statement renderer with a structural validator.
//!
//! Build statements from a typed request, not by splicing strings.
//!
//! ```ignore
//! use tagsql::prelude::*;
//! let catalog = Catalog::new();
//! let renderer = Renderer::new(&catalog);
//! let sql = renderer.render(&RenderRequest::select("users").columns(["id", "name"]))?;
//! ```

pub mod ast;
pub mod catalog;
pub mod error;
pub mod render;
pub mod validate;

pub use render::Renderer;
pub use validate::SyntaxValidator;

pub mod prelude {
    pub use crate::ast::*;
    pub use crate::catalog::{Catalog, GroupKind, Tag, TagGroup, TagKind};
    pub use crate::error::*;
    pub use crate::render::Renderer;
    pub use crate::validate::{SyntaxValidator, ValidationReport};
}
