//! Style policy.
//!
//! Every block carries an enumerated [`StyleRole`]; the mapping from role to
//! concrete text attributes lives in one lookup ([`style_for`]) instead of
//! level-keyed branching. Sinks interpret the attributes however their medium
//! allows: the PDF sink uses all of them, the text sink only the role itself.

/// What a block of text *is*, independent of how a sink draws it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleRole {
    /// Project name in the front matter.
    Title,
    /// Top-level division headings and document markers.
    TopHeading,
    /// Emphasized mid-depth section headings.
    SubHeading,
    /// Plain headings for deeply nested sections.
    SectionHeading,
    /// Group labels such as `"Products:"` and `"About Project:"`.
    SectionLabel,
    /// Bulleted product label line.
    ProductLabel,
    /// Numbered attribute line under a product.
    Attribute,
    /// Plain running text.
    Body,
}

/// Concrete text attributes for one role, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub bold: bool,
    pub space_before: f32,
    pub space_after: f32,
    pub indent: f32,
}

/// Role → attributes lookup.
pub fn style_for(role: StyleRole) -> TextStyle {
    use StyleRole::*;
    match role {
        Title => TextStyle { size: 16.0, bold: true, space_before: 12.0, space_after: 8.0, indent: 0.0 },
        TopHeading => TextStyle { size: 14.0, bold: true, space_before: 12.0, space_after: 6.0, indent: 0.0 },
        SubHeading => TextStyle { size: 12.0, bold: false, space_before: 6.0, space_after: 3.0, indent: 0.0 },
        SectionHeading => TextStyle { size: 11.0, bold: false, space_before: 4.0, space_after: 2.0, indent: 0.0 },
        SectionLabel => TextStyle { size: 11.0, bold: true, space_before: 4.0, space_after: 2.0, indent: 0.0 },
        ProductLabel => TextStyle { size: 11.0, bold: false, space_before: 2.0, space_after: 2.0, indent: 18.0 },
        Attribute => TextStyle { size: 10.0, bold: false, space_before: 1.0, space_after: 1.0, indent: 36.0 },
        Body => TextStyle { size: 11.0, bold: false, space_before: 2.0, space_after: 2.0, indent: 0.0 },
    }
}

/// Heading role for the table-of-contents pass at a given nesting depth.
pub fn outline_role(depth: usize) -> StyleRole {
    if depth == 0 {
        StyleRole::TopHeading
    } else {
        StyleRole::SubHeading
    }
}

/// Heading role for the detail pass at a given nesting depth.
pub fn detail_role(depth: usize) -> StyleRole {
    match depth {
        0 => StyleRole::TopHeading,
        1 | 2 => StyleRole::SubHeading,
        _ => StyleRole::SectionHeading,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outline_emphasizes_only_top_level() {
        assert_eq!(outline_role(0), StyleRole::TopHeading);
        assert_eq!(outline_role(1), StyleRole::SubHeading);
        assert_eq!(outline_role(5), StyleRole::SubHeading);
    }

    #[test]
    fn detail_flattens_past_depth_two() {
        assert_eq!(detail_role(0), StyleRole::TopHeading);
        assert_eq!(detail_role(1), StyleRole::SubHeading);
        assert_eq!(detail_role(2), StyleRole::SubHeading);
        assert_eq!(detail_role(3), StyleRole::SectionHeading);
    }

    #[test]
    fn only_title_outranks_top_heading() {
        let title = style_for(StyleRole::Title);
        let top = style_for(StyleRole::TopHeading);
        assert!(title.size > top.size);
        assert!(top.bold);
    }
}
