use crate::common::*;

use base64::{engine::general_purpose::STANDARD, Engine};
use image::{ImageFormat, RgbImage};
use plotters::prelude::*;
use std::io::Cursor;

use crate::dto::{year_pair_row::*, year_value_row::*};
use crate::traits::service_traits::chart_service::*;
use crate::utils_modules::format_utils::*;

const CHART_WIDTH: u32 = 900;
const CHART_HEIGHT: u32 = 500;

/* matplotlib default palette, kept for the reading/math pair */
const READING_COLOR: RGBColor = RGBColor(0x1f, 0x77, 0xb4);
const MATH_COLOR: RGBColor = RGBColor(0xff, 0x7f, 0x0e);

/* muted grid, 0.6 alpha; plotters meshes have no dash pattern */
const GRID_LIGHT: RGBColor = RGBColor(0xd5, 0xd8, 0xdc);
const GRID_BOLD: RGBColor = RGBColor(0xae, 0xb6, 0xbf);

fn format_chart_value(value: f64, format: ValueFormat) -> String {
    match format {
        ValueFormat::Percent => format_percent(value),
        ValueFormat::Count => format_count(value),
    }
}

#[derive(Debug, Clone, new)]
pub struct ChartServiceImpl;

impl ChartServiceImpl {
    #[doc = "Y-axis range with padding; degenerate spans still get a visible band"]
    fn value_range(&self, values: &[f64]) -> (f64, f64) {
        if values.is_empty() {
            return (0.0, 100.0);
        }

        let min_val: f64 = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max_val: f64 = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        let padding: f64 = ((max_val - min_val) * 0.15).max(1.0);

        ((min_val - padding).max(0.0), max_val + padding)
    }

    #[doc = "X-axis year range, one year of margin on each side"]
    fn year_range(&self, years: &[i32]) -> (i32, i32) {
        let min_year: i32 = years.iter().min().copied().unwrap_or(0);
        let max_year: i32 = years.iter().max().copied().unwrap_or(1);
        (min_year - 1, max_year + 1)
    }

    #[doc = "Encodes the raw RGB pixel buffer as a base64 PNG string"]
    fn encode_png_base64(&self, buffer: &[u8]) -> anyhow::Result<String> {
        let pixels: RgbImage = RgbImage::from_raw(CHART_WIDTH, CHART_HEIGHT, buffer.to_vec())
            .ok_or_else(|| {
                anyhow!("[ChartServiceImpl->encode_png_base64] Pixel buffer size mismatch")
            })?;

        let mut png_bytes: Vec<u8> = Vec::new();
        pixels.write_to(&mut Cursor::new(&mut png_bytes), ImageFormat::Png)?;

        Ok(STANDARD.encode(&png_bytes))
    }
}

impl ChartService for ChartServiceImpl {
    fn render_single_series(
        &self,
        title: &str,
        rows: &[YearValueRow],
        color: (u8, u8, u8),
        format: ValueFormat,
    ) -> anyhow::Result<String> {
        if rows.is_empty() {
            return Err(anyhow!(
                "[ChartServiceImpl->render_single_series] Cannot generate chart with empty data"
            ));
        }

        let points: Vec<(i32, f64)> = rows.iter().map(|row| (row.year, row.value)).collect();
        let years: Vec<i32> = rows.iter().map(|row| row.year).collect();
        let values: Vec<f64> = rows.iter().map(|row| row.value).collect();

        let (x_min, x_max) = self.year_range(&years);
        let (y_min, y_max) = self.value_range(&values);
        let line_color: RGBColor = RGBColor(color.0, color.1, color.2);

        let mut buffer: Vec<u8> =
            vec![0u8; CHART_WIDTH as usize * CHART_HEIGHT as usize * 3];

        /* The drawing surface lives only inside this scope; it is released
        before encoding, on every exit path. */
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (CHART_WIDTH, CHART_HEIGHT))
                .into_drawing_area();
            root.fill(&WHITE)?;

            let mut chart = ChartBuilder::on(&root)
                .caption(title, ("sans-serif", 28).into_font())
                .margin(25)
                .x_label_area_size(50)
                .y_label_area_size(70)
                .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

            chart
                .configure_mesh()
                .x_desc("Year")
                .x_labels(years.len() + 2)
                .light_line_style(&GRID_LIGHT.mix(0.6))
                .bold_line_style(&GRID_BOLD.mix(0.6))
                .x_label_formatter(&|x| x.to_string())
                .y_label_formatter(&|y| format_chart_value(*y, format))
                .draw()?;

            chart.draw_series(LineSeries::new(
                points.iter().copied(),
                ShapeStyle::from(&line_color).stroke_width(2),
            ))?;

            /* Circular marker plus a formatted label above every point. */
            chart.draw_series(PointSeries::of_element(
                points.iter().copied(),
                4,
                ShapeStyle::from(&line_color).filled(),
                &|coord, size, style| {
                    EmptyElement::at(coord)
                        + Circle::new((0, 0), size, style)
                        + Text::new(
                            format_chart_value(coord.1, format),
                            (-14, -22),
                            ("sans-serif", 14).into_font(),
                        )
                },
            ))?;

            root.present()?;
        }

        self.encode_png_base64(&buffer)
    }

    fn render_dual_series(&self, title: &str, rows: &[YearPairRow]) -> anyhow::Result<String> {
        if rows.is_empty() {
            return Err(anyhow!(
                "[ChartServiceImpl->render_dual_series] Cannot generate chart with empty data"
            ));
        }

        let years: Vec<i32> = rows.iter().map(|row| row.year).collect();
        let reading_points: Vec<(i32, f64)> =
            rows.iter().map(|row| (row.year, row.reading)).collect();
        let math_points: Vec<(i32, f64)> = rows.iter().map(|row| (row.year, row.math)).collect();

        let all_values: Vec<f64> = rows
            .iter()
            .flat_map(|row| [row.reading, row.math])
            .collect();

        let (x_min, x_max) = self.year_range(&years);
        let (y_min, y_max) = self.value_range(&all_values);

        let mut buffer: Vec<u8> =
            vec![0u8; CHART_WIDTH as usize * CHART_HEIGHT as usize * 3];

        {
            let root = BitMapBackend::with_buffer(&mut buffer, (CHART_WIDTH, CHART_HEIGHT))
                .into_drawing_area();
            root.fill(&WHITE)?;

            let mut chart = ChartBuilder::on(&root)
                .caption(title, ("sans-serif", 28).into_font())
                .margin(25)
                .x_label_area_size(50)
                .y_label_area_size(70)
                .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

            chart
                .configure_mesh()
                .x_desc("Year")
                .y_desc("Points")
                .x_labels(years.len() + 2)
                .light_line_style(&GRID_LIGHT.mix(0.6))
                .bold_line_style(&GRID_BOLD.mix(0.6))
                .x_label_formatter(&|x| x.to_string())
                .y_label_formatter(&|y| format_count(*y))
                .draw()?;

            chart
                .draw_series(
                    LineSeries::new(
                        reading_points.iter().copied(),
                        ShapeStyle::from(&READING_COLOR).stroke_width(2),
                    )
                    .point_size(4),
                )?
                .label("Reading")
                .legend(|(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], READING_COLOR)
                });

            chart
                .draw_series(
                    LineSeries::new(
                        math_points.iter().copied(),
                        ShapeStyle::from(&MATH_COLOR).stroke_width(2),
                    )
                    .point_size(4),
                )?
                .label("Math")
                .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], MATH_COLOR));

            chart
                .configure_series_labels()
                .background_style(&WHITE.mix(0.8))
                .border_style(&BLACK)
                .draw()?;

            root.present()?;
        }

        self.encode_png_base64(&buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_series_chart_decodes_as_valid_png() {
        let rows: Vec<YearValueRow> = vec![
            YearValueRow::new(2022, 90.0),
            YearValueRow::new(2023, 80.0),
            YearValueRow::new(2024, 80.0),
        ];

        let encoded: String = ChartServiceImpl::new()
            .render_single_series("Attendance Trend (%)", &rows, (0xe6, 0x7e, 0x22), ValueFormat::Percent)
            .expect("chart rendering failed");

        assert!(!encoded.is_empty());
        let png_bytes: Vec<u8> = STANDARD.decode(&encoded).expect("invalid base64");
        let decoded = image::load_from_memory(&png_bytes).expect("invalid png");
        assert_eq!(decoded.width(), CHART_WIDTH);
        assert_eq!(decoded.height(), CHART_HEIGHT);
    }

    #[test]
    fn dual_series_chart_decodes_as_valid_png() {
        let rows: Vec<YearPairRow> = vec![
            YearPairRow::new(2023, 250.0, 240.0),
            YearPairRow::new(2024, 256.0, 244.0),
        ];

        let encoded: String = ChartServiceImpl::new()
            .render_dual_series("Scores Trend - 4B", &rows)
            .expect("chart rendering failed");

        let png_bytes: Vec<u8> = STANDARD.decode(&encoded).expect("invalid base64");
        assert!(image::load_from_memory(&png_bytes).is_ok());
    }

    #[test]
    fn single_point_series_still_renders() {
        let rows: Vec<YearValueRow> = vec![YearValueRow::new(2024, 150.0)];

        let encoded = ChartServiceImpl::new().render_single_series(
            "Enrollment Trend",
            &rows,
            (0x34, 0x98, 0xdb),
            ValueFormat::Count,
        );
        assert!(encoded.is_ok());
    }

    #[test]
    fn empty_series_is_rejected() {
        let result = ChartServiceImpl::new().render_single_series(
            "Enrollment Trend",
            &[],
            (0x34, 0x98, 0xdb),
            ValueFormat::Count,
        );
        assert!(result.is_err());
    }
}
