use std::path::{Path, PathBuf};

use plotters::prelude::*;

use storelens_model::SaleRecord;

use crate::theme::ChartTheme;
use crate::{PlotError, Result};

/// Scatter of rating against sale total, one color per store.
pub fn rating_vs_revenue(
    records: &[SaleRecord],
    output_dir: &Path,
    theme: &ChartTheme,
) -> Result<PathBuf> {
    draw_scatter(
        records,
        output_dir.join("relacion_calificaciones_ingresos.png"),
        *theme,
        ScatterScale::Raw,
    )
}

/// The corrected, print-quality variant: double-density canvas, sale
/// totals in millions and larger translucent markers.
pub fn rating_vs_revenue_scaled(
    records: &[SaleRecord],
    output_dir: &Path,
    theme: &ChartTheme,
) -> Result<PathBuf> {
    draw_scatter(
        records,
        output_dir.join("relacion_calificaciones_ingresos_corregido.png"),
        theme.large(),
        ScatterScale::Millions,
    )
}

#[derive(Clone, Copy, PartialEq)]
enum ScatterScale {
    Raw,
    Millions,
}

fn draw_scatter(
    records: &[SaleRecord],
    path: PathBuf,
    theme: ChartTheme,
    scale: ScatterScale,
) -> Result<PathBuf> {
    if records.is_empty() {
        return Err(PlotError::InvalidData("no records to plot".to_string()));
    }
    let divisor = match scale {
        ScatterScale::Raw => 1.0,
        ScatterScale::Millions => 1e6,
    };
    // Stores in first-appearance order so colors are stable across charts.
    let mut stores: Vec<(&str, Vec<(f64, f64)>)> = Vec::new();
    for record in records {
        let point = (f64::from(record.rating), record.total_sale / divisor);
        match stores.iter_mut().find(|(store, _)| *store == record.store) {
            Some((_, points)) => points.push(point),
            None => stores.push((record.store.as_str(), vec![point])),
        }
    }
    let y_max = records
        .iter()
        .map(|record| record.total_sale / divisor)
        .fold(0.0, f64::max)
        * 1.05;

    let root = BitMapBackend::new(&path, theme.size).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let y_desc = match scale {
        ScatterScale::Raw => "Total Venta",
        ScatterScale::Millions => "Venta Total (Millones)",
    };
    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Relación entre Calificaciones e Ingresos",
            ("sans-serif", theme.caption_size),
        )
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(110)
        .build_cartesian_2d(0.5f64..5.5f64, 0f64..y_max)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc("Calificación")
        .y_desc(y_desc)
        .x_labels(5)
        .x_label_formatter(&|x| format!("{x:.0}"))
        .label_style(("sans-serif", theme.label_size))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    let (marker, alpha) = match scale {
        ScatterScale::Raw => (4, 0.8),
        ScatterScale::Millions => (10, 0.6),
    };
    for (index, (store, points)) in stores.iter().enumerate() {
        let color = theme.color(index).mix(alpha);
        chart
            .draw_series(
                points
                    .iter()
                    .map(|(x, y)| Circle::new((*x, *y), marker, color.filled())),
            )
            .map_err(|e| PlotError::Drawing(e.to_string()))?
            .label((*store).to_string())
            .legend(move |(x, y)| Circle::new((x + 10, y), 5, color.filled()));
    }
    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font(("sans-serif", theme.label_size))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    Ok(path.clone())
}
