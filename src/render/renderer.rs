//! The recursive section-tree walker.
//!
//! Two depth-first pre-order passes over the same immutable tree: the outline
//! pass produces the table of contents (sections only), the detail pass
//! produces the full body (sections, products, attributes). Both passes visit
//! children in stored list order and emit into one `Vec<Block>`.

use crate::catalog::{CustomColumn, Product, Project, Section};
use crate::format::format_column;
use crate::render::block::Block;
use crate::style::{detail_role, outline_role, StyleRole};

/// Renders the whole catalog into its block sequence.
///
/// Pure function of its inputs: the tree is borrowed immutably and the banner
/// bytes, if any, were resolved by the caller beforehand. Rendering the same
/// inputs twice yields an identical sequence.
pub fn render_catalog(
    sections: &[Section],
    project: Option<&Project>,
    banner: Option<&[u8]>,
) -> Vec<Block> {
    let mut blocks = Vec::new();

    if let Some(project) = project {
        front_matter(project, banner, &mut blocks);
    }

    blocks.push(Block::Heading {
        text: "TABLE OF CONTENTS".into(),
        role: StyleRole::TopHeading,
        depth: 0,
    });
    blocks.push(Block::Spacer);
    for section in sections {
        outline_section(section, 0, &mut blocks);
    }

    blocks.push(Block::PageBreak);
    blocks.push(Block::Heading {
        text: "DETAILED SECTIONS".into(),
        role: StyleRole::TopHeading,
        depth: 0,
    });
    blocks.push(Block::Spacer);
    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            blocks.push(Block::PageBreak);
        }
        detail_section(section, 0, &mut blocks);
    }

    blocks
}

fn front_matter(project: &Project, banner: Option<&[u8]>, out: &mut Vec<Block>) {
    if let Some(data) = banner {
        out.push(Block::Image {
            data: data.to_vec(),
        });
        out.push(Block::Spacer);
    }
    out.push(Block::Heading {
        text: project.project_name.clone(),
        role: StyleRole::Title,
        depth: 0,
    });
    out.push(Block::FactTable {
        rows: vec![
            ("Location".into(), project.location.clone()),
            ("Type".into(), project.project_type.clone()),
            ("Budget".into(), project.budget.clone()),
            ("Phase".into(), project.phase.clone()),
        ],
    });
    out.push(Block::Paragraph {
        text: "About Project:".into(),
        role: StyleRole::SectionLabel,
        depth: 0,
    });
    out.push(Block::Paragraph {
        text: project.description.clone(),
        role: StyleRole::Body,
        depth: 0,
    });
    out.push(Block::Spacer);
    out.push(Block::Spacer);
}

/// Heading text shared by both passes. Top-level sections are divisions.
fn section_title(section: &Section, depth: usize) -> String {
    if depth == 0 {
        format!("DIVISION {} - {}", section.number, section.name)
    } else {
        format!("{} - {}", section.number, section.name)
    }
}

fn outline_section(section: &Section, depth: usize, out: &mut Vec<Block>) {
    out.push(Block::Heading {
        text: section_title(section, depth),
        role: outline_role(depth),
        depth,
    });
    for child in &section.child_sections {
        outline_section(child, depth + 1, out);
    }
}

fn detail_section(section: &Section, depth: usize, out: &mut Vec<Block>) {
    out.push(Block::Heading {
        text: section_title(section, depth),
        role: detail_role(depth),
        depth,
    });

    if !section.products.is_empty() {
        out.push(Block::Paragraph {
            text: "Products:".into(),
            role: StyleRole::SectionLabel,
            depth,
        });
        for (i, product) in section.products.iter().enumerate() {
            product_blocks(product, i, depth, out);
        }
    }

    for child in &section.child_sections {
        detail_section(child, depth + 1, out);
    }
}

/// Bullet label for the product at `index` within its section.
///
/// Alphabetic `A`..`Z`, restarting with every section's product list; from
/// the 27th product onward the label is the plain numeric ordinal.
fn product_label(index: usize) -> String {
    if index < 26 {
        char::from(b'A' + index as u8).to_string()
    } else {
        (index + 1).to_string()
    }
}

fn product_blocks(product: &Product, index: usize, depth: usize, out: &mut Vec<Block>) {
    let mut label = format!("{}. {}", product_label(index), product.name);
    if let Some(sub) = product.sub_name.as_deref().filter(|s| !s.is_empty()) {
        label.push_str(&format!(" - {sub}"));
    }
    if let Some(manufacturer) = product
        .manufacturer_name
        .as_deref()
        .filter(|s| !s.is_empty())
    {
        label.push_str(&format!(" ({manufacturer})"));
    }
    out.push(Block::Paragraph {
        text: label,
        role: StyleRole::ProductLabel,
        depth,
    });

    // Stable sort: columns sharing a display order keep their list order.
    let mut columns: Vec<&CustomColumn> = product.custom_columns.iter().collect();
    columns.sort_by_key(|c| c.display_order);

    let mut ordinal = 1usize;
    for column in columns {
        out.push(Block::Paragraph {
            text: format!(
                "{ordinal}. {} - {}",
                column.title,
                format_column(column.data.as_ref())
            ),
            role: StyleRole::Attribute,
            depth,
        });
        ordinal += 1;
    }

    // Date-added is a per-product fact, numbered after the last attribute.
    out.push(Block::Paragraph {
        text: format!(
            "{ordinal}. Date Added - {} {}",
            product.created_date.format("%Y-%m-%d"),
            product.created_by
        ),
        role: StyleRole::Attribute,
        depth,
    });
    out.push(Block::Spacer);
}
