//! Off-screen category chart rendering
//!
//! Renders the category-totals bar chart into an in-memory RGB bitmap with
//! plotters. The drawing surface is plain memory, never a window, and
//! `render_category_chart` returns only after the surface has been
//! presented, so a returned image is always a finished one.

use plotters::prelude::*;
use std::collections::BTreeMap;

use crate::error::{EerisError, EerisResult};

/// Teal bar fill
const BAR_COLOR: RGBColor = RGBColor(75, 192, 192);

/// A finished chart bitmap (tightly packed RGB8)
#[derive(Debug, Clone)]
pub struct ChartImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Render a bar chart of category totals into an off-screen bitmap
pub fn render_category_chart(
    totals: &BTreeMap<String, f64>,
    width: u32,
    height: u32,
) -> EerisResult<ChartImage> {
    if totals.is_empty() {
        return Err(EerisError::ChartRender(
            "no category totals to plot".to_string(),
        ));
    }
    if width == 0 || height == 0 {
        return Err(EerisError::ChartRender(format!(
            "invalid chart surface size {}x{}",
            width, height
        )));
    }

    let labels: Vec<&str> = totals.keys().map(String::as_str).collect();
    let values: Vec<f64> = totals.values().copied().collect();
    let max = values.iter().copied().fold(0.0_f64, f64::max).max(1.0);

    let mut pixels = vec![0u8; (width * height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut pixels, (width, height)).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| EerisError::ChartRender(e.to_string()))?;

        let mut chart = ChartBuilder::on(&root)
            .caption("Amount Spent ($)", ("sans-serif", 20))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d((0..labels.len()).into_segmented(), 0f64..max * 1.1)
            .map_err(|e| EerisError::ChartRender(e.to_string()))?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_label_formatter(&|value| match value {
                SegmentValue::CenterOf(i) if *i < labels.len() => labels[*i].to_string(),
                _ => String::new(),
            })
            .y_desc("Amount ($)")
            .draw()
            .map_err(|e| EerisError::ChartRender(e.to_string()))?;

        chart
            .draw_series(values.iter().enumerate().map(|(i, v)| {
                Rectangle::new(
                    [
                        (SegmentValue::Exact(i), 0.0),
                        (SegmentValue::Exact(i + 1), *v),
                    ],
                    BAR_COLOR.filled(),
                )
            }))
            .map_err(|e| EerisError::ChartRender(e.to_string()))?;

        // Rendering is complete once the surface is presented; this is the
        // synchronization point before the bitmap is handed on.
        root.present()
            .map_err(|e| EerisError::ChartRender(e.to_string()))?;
    }

    Ok(ChartImage {
        width,
        height,
        pixels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_totals_is_a_render_error() {
        let err = render_category_chart(&BTreeMap::new(), 600, 400).unwrap_err();
        assert!(matches!(err, EerisError::ChartRender(_)));
    }

    #[test]
    fn test_zero_sized_surface_is_a_render_error() {
        let mut totals = BTreeMap::new();
        totals.insert("Groceries".to_string(), 10.0);

        let err = render_category_chart(&totals, 0, 400).unwrap_err();
        assert!(matches!(err, EerisError::ChartRender(_)));
    }
}
