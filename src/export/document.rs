//! PDF assembly for the history export
//!
//! Builds the multi-page document: the history table flowing across as many
//! pages as it needs, then a titled page embedding the rendered chart.

use printpdf::image_crate::{DynamicImage, ImageBuffer, RgbImage};
use printpdf::{
    BuiltinFont, Image, ImageTransform, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference,
};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::error::{EerisError, EerisResult};

use super::chart::ChartImage;
use super::pipeline::HistoryTable;

// A4 geometry, all in millimeters
const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN_LEFT: f32 = 14.0;
const TOP_Y: f32 = 283.0;
const BOTTOM_Y: f32 = 18.0;
const ROW_STEP: f32 = 5.0;

const TITLE_SIZE: f32 = 14.0;
const HEADER_SIZE: f32 = 9.0;
const ROW_SIZE: f32 = 9.0;

/// The dpi the chart bitmap is embedded at (600 px ≈ 159 mm)
const CHART_DPI: f32 = 96.0;

/// Write the history table and chart as a PDF
pub fn write_history_pdf(
    table: &HistoryTable,
    chart: &ChartImage,
    output: &Path,
) -> EerisResult<()> {
    let (doc, page, layer) = PdfDocument::new("Expense History", Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "history");
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| EerisError::Export(format!("Failed to load document font: {}", e)))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| EerisError::Export(format!("Failed to load document font: {}", e)))?;

    let mut layer_ref = doc.get_page(page).get_layer(layer);

    // Page 1+: the table
    layer_ref.use_text("Expense History", TITLE_SIZE, Mm(MARGIN_LEFT), Mm(TOP_Y), &bold);

    let widths = column_widths(table.columns.len());
    let mut y = TOP_Y - 10.0;
    write_row(&layer_ref, &bold, HEADER_SIZE, y, &widths, &header_cells(table));
    y -= ROW_STEP + 1.0;

    for row in &table.rows {
        if y < BOTTOM_Y {
            let (next_page, next_layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "history");
            layer_ref = doc.get_page(next_page).get_layer(next_layer);
            y = TOP_Y;
            write_row(&layer_ref, &bold, HEADER_SIZE, y, &widths, &header_cells(table));
            y -= ROW_STEP + 1.0;
        }
        write_row(&layer_ref, &font, ROW_SIZE, y, &widths, row);
        y -= ROW_STEP;
    }

    // Final page: the chart
    let (chart_page, chart_layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "chart");
    let chart_layer_ref = doc.get_page(chart_page).get_layer(chart_layer);
    chart_layer_ref.use_text(
        "Spending by Category",
        TITLE_SIZE,
        Mm(MARGIN_LEFT),
        Mm(TOP_Y),
        &bold,
    );
    embed_chart(&chart_layer_ref, chart)?;

    save(doc, output)
}

/// Embed the rendered chart bitmap on a layer
fn embed_chart(layer: &PdfLayerReference, chart: &ChartImage) -> EerisResult<()> {
    let buffer: RgbImage =
        ImageBuffer::from_raw(chart.width, chart.height, chart.pixels.clone()).ok_or_else(
            || EerisError::ChartEmbed("chart bitmap does not match its dimensions".to_string()),
        )?;

    let image = Image::from_dynamic_image(&DynamicImage::ImageRgb8(buffer));
    image.add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(Mm(MARGIN_LEFT)),
            translate_y: Some(Mm(150.0)),
            dpi: Some(CHART_DPI),
            ..Default::default()
        },
    );

    Ok(())
}

fn save(doc: PdfDocumentReference, output: &Path) -> EerisResult<()> {
    let file = File::create(output)
        .map_err(|e| EerisError::Export(format!("Failed to create {}: {}", output.display(), e)))?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| EerisError::Export(format!("Failed to write {}: {}", output.display(), e)))?;
    Ok(())
}

/// Per-column widths in millimeters for the 6- and 7-column layouts
fn column_widths(columns: usize) -> Vec<f32> {
    if columns == 7 {
        vec![8.0, 28.0, 34.0, 26.0, 22.0, 20.0, 42.0]
    } else {
        vec![8.0, 40.0, 30.0, 24.0, 24.0, 44.0]
    }
}

fn header_cells(table: &HistoryTable) -> Vec<String> {
    table.columns.iter().map(|c| c.to_string()).collect()
}

fn write_row(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    size: f32,
    y: f32,
    widths: &[f32],
    cells: &[String],
) {
    let mut x = MARGIN_LEFT;
    for (cell, width) in cells.iter().zip(widths) {
        // Roughly 1.7 mm per character at 9 pt Helvetica
        let max_chars = ((width - 2.0) / 1.7).max(3.0) as usize;
        layer.use_text(truncate(cell, max_chars), size, Mm(x), Mm(y), font);
        x += width;
    }
}

/// Truncate a string to a maximum length
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
