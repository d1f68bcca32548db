use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use plotters::prelude::*;

use storelens_model::SaleRecord;

use crate::theme::ChartTheme;
use crate::{PlotError, Result};

/// Bar chart of total revenue per store, highest first.
pub fn revenue_by_store(
    records: &[SaleRecord],
    output_dir: &Path,
    theme: &ChartTheme,
) -> Result<PathBuf> {
    if records.is_empty() {
        return Err(PlotError::InvalidData("no records to plot".to_string()));
    }
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for record in records {
        *totals.entry(record.store.as_str()).or_insert(0.0) += record.total_sale;
    }
    let mut bars: Vec<(String, f64)> = totals
        .into_iter()
        .map(|(store, total)| (store.to_string(), total))
        .collect();
    bars.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    let path = output_dir.join("ingresos_por_tienda.png");
    let root = BitMapBackend::new(&path, theme.size).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let y_max = bars.iter().map(|bar| bar.1).fold(0.0, f64::max) * 1.1;
    let labels: Vec<String> = bars.iter().map(|bar| bar.0.clone()).collect();
    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Ingresos Totales por Tienda",
            ("sans-serif", theme.caption_size),
        )
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(110)
        .build_cartesian_2d(0f64..bars.len() as f64, 0f64..y_max)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Tienda")
        .y_desc("Ingresos Totales")
        .x_labels(bars.len())
        .x_label_formatter(&|x| bar_label(&labels, *x))
        .label_style(("sans-serif", theme.label_size))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart
        .draw_series(bars.iter().enumerate().map(|(index, (_, total))| {
            let x = index as f64;
            Rectangle::new([(x + 0.1, 0.0), (x + 0.9, *total)], theme.color(index).filled())
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    Ok(path.clone())
}

/// Label for the bar whose left edge sits at tick position `x`.
fn bar_label(labels: &[String], x: f64) -> String {
    let index = x.floor();
    if index < 0.0 {
        return String::new();
    }
    labels
        .get(index as usize)
        .cloned()
        .unwrap_or_default()
}
