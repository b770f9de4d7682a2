use plotters::prelude::*;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::path::Path;

const WIDTH: u32 = 960;
const HEIGHT: u32 = 320;

/// Render the balance series as an SVG line chart: x = month 1..N, y = balance.
pub fn render_svg(caption: &str, series: &[Decimal]) -> Result<String, Box<dyn std::error::Error>> {
    let points: Vec<(u32, f64)> = series
        .iter()
        .enumerate()
        .map(|(i, b)| (i as u32 + 1, b.to_f64().unwrap_or(0.0)))
        .collect();

    let x_max = (points.len() as u32).max(2);
    let y_low = points.iter().map(|p| p.1).fold(0.0, f64::min);
    let y_high = points.iter().map(|p| p.1).fold(0.0, f64::max);
    let y_high = if y_high > y_low { y_high * 1.05 } else { y_low + 1.0 };

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (WIDTH, HEIGHT)).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(caption, ("sans-serif", 20).into_font())
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(80)
            .build_cartesian_2d(1u32..x_max, y_low..y_high)?;

        chart
            .configure_mesh()
            .x_desc("Month")
            .y_desc("Balance")
            .draw()?;

        chart.draw_series(LineSeries::new(points, &BLUE))?;
        root.present()?;
    }
    Ok(svg)
}

/// Render the chart and write it to `path`.
pub fn write_svg_file(path: &Path, caption: &str, series: &[Decimal]) -> Result<(), Box<dyn std::error::Error>> {
    let svg = render_svg(caption, series)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create '{}': {}", parent.display(), e))?;
    }
    std::fs::write(path, svg).map_err(|e| format!("Failed to write '{}': {}", path.display(), e))?;
    tracing::info!(path = %path.display(), points = series.len(), "wrote chart");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_renders_svg_document() {
        let svg = render_svg("Padrão", &[dec!(1000), dec!(1100), dec!(1250)]).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
    }

    #[test]
    fn test_empty_series_still_renders() {
        let svg = render_svg("empty", &[]).unwrap();
        assert!(svg.contains("</svg>"));
    }
}
