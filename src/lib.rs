//! # catalog-export
//!
//! Renders a hierarchical product catalog (classification sections containing
//! products with typed custom attributes) into two artifacts with identical
//! structural content: a styled PDF and a plain-text document.
//!
//! The pipeline is: parse the catalog tree ([`catalog`]), walk it into an
//! ordered sequence of abstract blocks ([`render`]), then feed that sequence
//! to an output sink ([`sink`]) which realizes it as a concrete document.

pub mod catalog;
pub mod fetch;
pub mod format;
pub mod render;
pub mod sink;
pub mod style;

pub use catalog::{Catalog, ColumnData, CustomColumn, Product, Project, Section};
pub use render::block::Block;
pub use render::renderer::render_catalog;
pub use sink::{emit, DocumentSink};
pub use style::StyleRole;
