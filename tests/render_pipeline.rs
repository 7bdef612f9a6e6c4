//! End-to-end pipeline tests: JSON catalog in, finished artifacts out.

use std::fs;

use catalog_export::render::renderer::render_catalog;
use catalog_export::sink::emit;
use catalog_export::sink::pdf::PdfSink;
use catalog_export::sink::text::TextSink;
use catalog_export::Catalog;

const SAMPLE_CATALOG: &str = r#"{
    "project": {
        "projectName": "Riverside Medical Center",
        "location": "Portland, OR",
        "type": "Healthcare",
        "budget": "$42M",
        "phase": "Design Development",
        "description": "A six-story outpatient facility."
    },
    "sections": [
        {
            "sectionId": "s-03",
            "number": "03",
            "name": "Concrete",
            "childSections": [
                {
                    "sectionId": "s-0330",
                    "number": "03 30",
                    "name": "Cast-in-Place Concrete",
                    "products": [
                        {
                            "productId": "p-1",
                            "name": "SpeedCrete",
                            "subName": "Rapid Set",
                            "manufacturerName": "Tarmac",
                            "createdDate": "2023-01-15T09:30:00Z",
                            "createdBy": "Dana Reyes",
                            "customColumns": [
                                {
                                    "title": "Strength",
                                    "displayOrder": 2,
                                    "data": {
                                        "kind": "Metric",
                                        "metricData": [{"valueId": "v1", "value": 4000.0}],
                                        "decimalCount": 0
                                    }
                                },
                                {
                                    "title": "Finish",
                                    "displayOrder": 1,
                                    "data": {
                                        "kind": "Bounded",
                                        "boundedData": [
                                            {"optionId": "o1", "name": "Smooth"},
                                            {"optionId": "o2", "name": "Exposed"}
                                        ]
                                    }
                                }
                            ]
                        }
                    ]
                }
            ]
        },
        {
            "sectionId": "s-09",
            "number": "09",
            "name": "Finishes"
        }
    ]
}"#;

fn render_text(catalog: &Catalog) -> String {
    let blocks = render_catalog(&catalog.sections, catalog.project.as_ref(), None);
    let mut sink = TextSink::new();
    emit(&blocks, &mut sink).unwrap();
    sink.finish()
}

#[test]
fn text_pipeline_matches_expected_document() {
    let catalog: Catalog = serde_json::from_str(SAMPLE_CATALOG).unwrap();
    let expected = "\
Riverside Medical Center
Location: Portland, OR
Type:     Healthcare
Budget:   $42M
Phase:    Design Development
About Project:
A six-story outpatient facility.

\nTABLE OF CONTENTS

DIVISION 03 - Concrete
  03 30 - Cast-in-Place Concrete
DIVISION 09 - Finishes

DETAILED SECTIONS

DIVISION 03 - Concrete
  03 30 - Cast-in-Place Concrete
  Products:
    A. SpeedCrete - Rapid Set (Tarmac)
        1. Finish - Smooth, Exposed
        2. Strength - 4000
        3. Date Added - 2023-01-15 Dana Reyes

\nDIVISION 09 - Finishes
";
    assert_eq!(render_text(&catalog), expected);
}

#[test]
fn rendering_twice_is_byte_identical() {
    let catalog: Catalog = serde_json::from_str(SAMPLE_CATALOG).unwrap();
    assert_eq!(render_text(&catalog), render_text(&catalog));

    let first = render_catalog(&catalog.sections, catalog.project.as_ref(), None);
    let second = render_catalog(&catalog.sections, catalog.project.as_ref(), None);
    assert_eq!(first, second);
}

#[test]
fn both_artifacts_reach_disk_independently() {
    let catalog: Catalog = serde_json::from_str(SAMPLE_CATALOG).unwrap();
    let blocks = render_catalog(&catalog.sections, catalog.project.as_ref(), None);
    let dir = tempfile::tempdir().unwrap();

    let text_path = dir.path().join("catalog.txt");
    let mut text_sink = TextSink::new();
    emit(&blocks, &mut text_sink).unwrap();
    fs::write(&text_path, text_sink.finish()).unwrap();

    let pdf_path = dir.path().join("catalog.pdf");
    let mut pdf_sink = PdfSink::new("Riverside Medical Center");
    emit(&blocks, &mut pdf_sink).unwrap();
    let mut file = fs::File::create(&pdf_path).unwrap();
    pdf_sink.save(&mut file).unwrap();

    let text = fs::read_to_string(&text_path).unwrap();
    assert!(text.contains("DETAILED SECTIONS"));
    let pdf = fs::read(&pdf_path).unwrap();
    assert!(pdf.starts_with(b"%PDF"));
}

#[test]
fn catalog_without_sections_parses_to_the_no_data_case() {
    let catalog: Catalog = serde_json::from_str("{}").unwrap();
    assert!(catalog.sections.is_empty());
}
