//! PDF report collaborator.
//!
//! The core's only job here is handing the current entries to the renderer
//! together with a fixed configuration; page layout and encoding are
//! `printpdf`'s business.

use std::{fs::File, io::BufWriter, path::PathBuf};

use getset::{CopyGetters, Getters};
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};
use thiserror::Error;

use crate::entry::Entry;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Could not write report file: {0}")]
    Io(#[from] std::io::Error),
    #[error("PDF rendering failed: {0}")]
    Pdf(String),
}

/// Page formats the report can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum PageFormat {
    Letter,
    A4,
}

impl PageFormat {
    /// Page size in millimeters, portrait.
    fn size_mm(self) -> (f32, f32) {
        match self {
            PageFormat::Letter => (215.9, 279.4),
            PageFormat::A4 => (210.0, 297.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// The fixed configuration a report is generated with.
///
/// These are the knobs of the original exporter that survive a vector
/// renderer: margin, output filename, type-size scale, page format and
/// orientation.
#[derive(Debug, Clone, Getters, CopyGetters)]
pub struct ExportConfig {
    /// Page margin, in inches.
    #[getset(get_copy = "pub")]
    margin_in: f32,
    /// File the report is written to.
    #[getset(get = "pub")]
    filename: PathBuf,
    /// Factor applied to every type size.
    #[getset(get_copy = "pub")]
    scale: f32,
    #[getset(get_copy = "pub")]
    format: PageFormat,
    #[getset(get_copy = "pub")]
    orientation: Orientation,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            margin_in: 0.5,
            filename: PathBuf::from("medstock_report.pdf"),
            scale: 1.0,
            format: PageFormat::Letter,
            orientation: Orientation::Landscape,
        }
    }
}

impl ExportConfig {
    /// Same configuration, different output file.
    pub fn with_filename(mut self, filename: impl Into<PathBuf>) -> Self {
        self.filename = filename.into();
        self
    }

    fn page_size_mm(&self) -> (f32, f32) {
        let (w, h) = self.format.size_mm();
        match self.orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }
}

const MM_PER_INCH: f32 = 25.4;
const TITLE: &str = "Medstock Stock Report";

// Column offsets from the left margin, in millimeters.
const COLUMNS: [(&str, f32); 4] = [
    ("Date", 0.0),
    ("Branch", 55.0),
    ("Product", 115.0),
    ("Quantity", 185.0),
];

/// Write the given entries as a tabular PDF report, returning the path
/// written to.
///
/// Lays out a title, a header row and one line per entry, starting a fresh
/// page whenever the current one fills.
pub fn write_report(entries: &[Entry], cfg: &ExportConfig) -> Result<PathBuf> {
    let (page_w, page_h) = cfg.page_size_mm();
    let margin = cfg.margin_in() * MM_PER_INCH;
    let title_size = 16.0 * cfg.scale();
    let header_size = 11.0 * cfg.scale();
    let body_size = 10.0 * cfg.scale();
    let line_height = 6.5 * cfg.scale();

    let (doc, first_page, first_layer) = PdfDocument::new(TITLE, Mm(page_w), Mm(page_h), "report");
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(pdf_error)?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(pdf_error)?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    let mut y = page_h - margin;

    layer.use_text(TITLE, title_size, Mm(margin), Mm(y), &bold);
    y -= 2.0 * line_height;
    write_header(&layer, &bold, header_size, margin, y);
    y -= line_height;

    for entry in entries {
        if y < margin {
            let (page, page_layer) = doc.add_page(Mm(page_w), Mm(page_h), "report");
            layer = doc.get_page(page).get_layer(page_layer);

            y = page_h - margin;
            write_header(&layer, &bold, header_size, margin, y);
            y -= line_height;
        }

        write_row(&layer, &font, body_size, margin, y, entry);
        y -= line_height;
    }

    let path = cfg.filename().clone();
    doc.save(&mut BufWriter::new(File::create(&path)?))
        .map_err(pdf_error)?;

    Ok(path)
}

fn write_header(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    size: f32,
    margin: f32,
    y: f32,
) {
    for (label, offset) in COLUMNS {
        layer.use_text(label, size, Mm(margin + offset), Mm(y), font);
    }
}

fn write_row(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    size: f32,
    margin: f32,
    y: f32,
    entry: &Entry,
) {
    let cells = [
        (entry.date.clone(), 0.0),
        (entry.branch.clone(), 55.0),
        (entry.product.clone(), 115.0),
        (entry.quantity_label(), 185.0),
    ];

    for (value, offset) in cells {
        layer.use_text(value, size, Mm(margin + offset), Mm(y), font);
    }
}

fn pdf_error(err: impl std::fmt::Display) -> Error {
    Error::Pdf(err.to_string())
}

#[cfg(test)]
mod test {
    use super::*;
    use tempfile::tempdir;

    fn entries(count: usize) -> Vec<Entry> {
        (0..count)
            .map(|i| Entry {
                id: format!("{i}").into(),
                date: "2024-01-01".into(),
                branch: "Main".into(),
                product: "Gloves".into(),
                quantity: 10.0,
            })
            .collect()
    }

    #[test]
    fn test_writes_a_pdf_file() {
        let dir = tempdir().unwrap();
        let cfg = ExportConfig::default().with_filename(dir.path().join("report.pdf"));

        let path = write_report(&entries(3), &cfg).unwrap();

        let bytes = std::fs::read(path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_empty_ledger_still_produces_a_report() {
        let dir = tempdir().unwrap();
        let cfg = ExportConfig::default().with_filename(dir.path().join("empty.pdf"));

        let path = write_report(&[], &cfg).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_many_rows_paginate() {
        let dir = tempdir().unwrap();
        let cfg = ExportConfig::default().with_filename(dir.path().join("long.pdf"));

        write_report(&entries(200), &cfg).unwrap();
    }

    #[test]
    fn test_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let cfg =
            ExportConfig::default().with_filename(dir.path().join("missing").join("report.pdf"));

        assert!(matches!(
            write_report(&entries(1), &cfg),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn test_default_config() {
        let cfg = ExportConfig::default();

        assert_eq!(cfg.margin_in(), 0.5);
        assert_eq!(cfg.format(), PageFormat::Letter);
        assert_eq!(cfg.orientation(), Orientation::Landscape);
        assert_eq!(cfg.filename(), &PathBuf::from("medstock_report.pdf"));
    }
}
