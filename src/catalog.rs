//! Catalog data model.
//!
//! The tree is deserialized once from JSON and is read-only for the duration
//! of rendering. Optional lists tolerate absence via `#[serde(default)]`;
//! the `kind` discriminator on column data falls back to [`ColumnData::Unknown`]
//! for any unrecognized value.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Top-level input document: the section tree plus optional project metadata.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub project: Option<Project>,
}

/// One node of the classification hierarchy.
///
/// Traversal order is the stored list order; the tree is never re-sorted.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub section_id: String,
    /// Hierarchical classification code, e.g. `"03"` or `"03 30"`.
    pub number: String,
    pub name: String,
    #[serde(default)]
    pub child_sections: Vec<Section>,
    #[serde(default)]
    pub products: Vec<Product>,
    /// Non-owning successor link. Informational only; ignored by rendering.
    #[serde(default)]
    pub next_section_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: String,
    pub name: String,
    #[serde(default)]
    pub sub_name: Option<String>,
    #[serde(default)]
    pub manufacturer_name: Option<String>,
    pub created_date: DateTime<Utc>,
    pub created_by: String,
    #[serde(default)]
    pub custom_columns: Vec<CustomColumn>,
}

/// A typed custom attribute attached to a product.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomColumn {
    pub title: String,
    /// Presentation order; ties are broken by original list order.
    pub display_order: i32,
    #[serde(default)]
    pub data: Option<ColumnData>,
}

/// Tagged payload of a custom column, discriminated by `kind`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind")]
pub enum ColumnData {
    Bounded {
        #[serde(default, rename = "boundedData")]
        options: Vec<BoundedItem>,
    },
    Metric {
        #[serde(default, rename = "metricData")]
        values: Vec<MetricItem>,
        #[serde(default, rename = "decimalCount")]
        decimal_count: usize,
    },
    Text {
        #[serde(default)]
        value: Option<String>,
    },
    /// Any kind this build does not recognize. Formats as an empty string.
    #[serde(other)]
    Unknown,
}

/// One option reference of a bounded column.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundedItem {
    pub option_id: String,
    pub name: String,
    /// Decorative metadata; not used by rendering.
    #[serde(default)]
    pub color: Option<String>,
}

/// One measurement of a metric column.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricItem {
    pub value_id: String,
    pub value: f64,
}

/// Project metadata rendered as optional front matter.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub project_name: String,
    pub location: String,
    #[serde(rename = "type")]
    pub project_type: String,
    pub budget: String,
    pub phase: String,
    pub description: String,
    #[serde(default)]
    pub banner_url: Option<String>,
}
