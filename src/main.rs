use anyhow::{bail, Context, Result};
use clap::{Arg, ArgAction, Command};
use std::fs;
use std::fs::File;
use std::io::BufWriter;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use catalog_export::catalog::Catalog;
use catalog_export::fetch::{resolve_banner, HttpImageFetcher};
use catalog_export::render::block::Block;
use catalog_export::render::renderer::render_catalog;
use catalog_export::sink::pdf::PdfSink;
use catalog_export::sink::text::TextSink;
use catalog_export::sink::emit;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let matches = Command::new("catalog-export")
        .about("Render a product catalog to a PDF and a plain-text document")
        .arg(
            Arg::new("input")
                .help("Catalog JSON file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("pdf")
                .long("pdf")
                .help("PDF output path")
                .default_value("catalog.pdf"),
        )
        .arg(
            Arg::new("text")
                .long("text")
                .help("Plain-text output path")
                .default_value("catalog.txt"),
        )
        .arg(
            Arg::new("no-banner")
                .long("no-banner")
                .help("Skip fetching the project banner image")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let input = matches.get_one::<String>("input").unwrap();
    let pdf_path = matches.get_one::<String>("pdf").unwrap();
    let text_path = matches.get_one::<String>("text").unwrap();
    let skip_banner = matches.get_flag("no-banner");

    let json = fs::read_to_string(input).with_context(|| format!("failed to read {input}"))?;
    let catalog: Catalog =
        serde_json::from_str(&json).with_context(|| format!("failed to parse {input}"))?;
    if catalog.sections.is_empty() {
        bail!("no catalog data found in {input}");
    }

    let banner = match &catalog.project {
        Some(project) if !skip_banner => {
            let fetcher = HttpImageFetcher::new()?;
            resolve_banner(&fetcher, project.banner_url.as_deref())
        }
        _ => None,
    };

    let blocks = render_catalog(&catalog.sections, catalog.project.as_ref(), banner.as_deref());
    info!(blocks = blocks.len(), "rendered catalog block sequence");

    let title = catalog
        .project
        .as_ref()
        .map(|p| p.project_name.as_str())
        .unwrap_or("Catalog Export");

    // The two artifacts are independent; one failing must not stop the other.
    let mut failures = 0;
    match write_text(&blocks, text_path) {
        Ok(()) => info!(path = %text_path, "text document written"),
        Err(e) => {
            let cause = format!("{e:#}");
            error!(path = %text_path, error = %cause, "text export failed");
            failures += 1;
        }
    }
    match write_pdf(&blocks, title, pdf_path) {
        Ok(()) => info!(path = %pdf_path, "PDF document written"),
        Err(e) => {
            let cause = format!("{e:#}");
            error!(path = %pdf_path, error = %cause, "PDF export failed");
            failures += 1;
        }
    }

    if failures > 0 {
        bail!("{failures} artifact(s) failed");
    }
    Ok(())
}

fn write_text(blocks: &[Block], path: &str) -> Result<()> {
    let mut sink = TextSink::new();
    emit(blocks, &mut sink)?;
    fs::write(path, sink.finish()).with_context(|| format!("failed to write {path}"))
}

fn write_pdf(blocks: &[Block], title: &str, path: &str) -> Result<()> {
    let mut sink = PdfSink::new(title);
    emit(blocks, &mut sink)?;
    let file = File::create(path).with_context(|| format!("failed to create {path}"))?;
    let mut writer = BufWriter::new(file);
    sink.save(&mut writer)
        .with_context(|| format!("failed to finalize {path}"))
}
