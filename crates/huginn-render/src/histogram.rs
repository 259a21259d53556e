//! Measurement histogram rendering.

use plotters::coord::ranged1d::SegmentValue;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use huginn_hal::Counts;

use crate::error::RenderResult;
use crate::png::rgb_to_png_base64;

const WIDTH: u32 = 640;
const HEIGHT: u32 = 480;

/// Render a histogram of measurement counts and return it as a base64 PNG
/// string.
///
/// Bars are ordered lexicographically by bitstring; each bar is annotated
/// with its probability (count / shots).
pub fn histogram_png_base64(counts: &Counts, shots: u32) -> RenderResult<String> {
    let entries = counts.sorted_by_bitstring();
    let num_bars = entries.len().max(1) as u32;
    let y_max = entries.iter().map(|(_, count)| *count).max().unwrap_or(0).max(1);
    // Headroom so probability labels sit inside the plot area.
    let y_top = y_max + y_max / 5 + 1;
    let shots_f = f64::from(shots.max(1));

    let mut buffer = vec![0u8; (WIDTH * HEIGHT * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (WIDTH, HEIGHT)).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption("Measurement outcomes", ("sans-serif", 22))
            .margin(14)
            .x_label_area_size(36)
            .y_label_area_size(56)
            .build_cartesian_2d((0u32..num_bars).into_segmented(), 0u64..y_top)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .y_desc("Counts")
            .x_label_formatter(&|segment| match segment {
                SegmentValue::CenterOf(i) => entries
                    .get(*i as usize)
                    .map(|(bitstring, _)| (*bitstring).to_string())
                    .unwrap_or_default(),
                _ => String::new(),
            })
            .draw()?;

        chart.draw_series(
            Histogram::vertical(&chart)
                .style(BLUE.mix(0.65).filled())
                .margin(16)
                .data(
                    entries
                        .iter()
                        .enumerate()
                        .map(|(i, (_, count))| (i as u32, *count)),
                ),
        )?;

        // Probability annotation above each bar.
        let annotation = TextStyle::from(("sans-serif", 14).into_font())
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Bottom));
        chart.draw_series(entries.iter().enumerate().map(|(i, (_, count))| {
            Text::new(
                format!("{:.3}", *count as f64 / shots_f),
                (SegmentValue::CenterOf(i as u32), *count),
                annotation.clone(),
            )
        }))?;

        root.present()?;
    }

    rgb_to_png_base64(&buffer, WIDTH, HEIGHT)
}
