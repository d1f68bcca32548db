use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{Duration, NaiveDate};
use plotters::prelude::*;

use storelens_model::SaleRecord;

use crate::theme::ChartTheme;
use crate::{PlotError, Result};

/// Line chart of daily total sales over time, one line per store.
pub fn sales_over_time(
    records: &[SaleRecord],
    output_dir: &Path,
    theme: &ChartTheme,
) -> Result<PathBuf> {
    if records.is_empty() {
        return Err(PlotError::InvalidData("no records to plot".to_string()));
    }
    // Daily totals per store; BTreeMap keeps each series chronological.
    let mut stores: Vec<(&str, BTreeMap<NaiveDate, f64>)> = Vec::new();
    for record in records {
        let index = match stores.iter().position(|(store, _)| *store == record.store) {
            Some(index) => index,
            None => {
                stores.push((record.store.as_str(), BTreeMap::new()));
                stores.len() - 1
            }
        };
        *stores[index].1.entry(record.purchase_date).or_insert(0.0) += record.total_sale;
    }

    let mut first = records[0].purchase_date;
    let mut last = records[0].purchase_date;
    for record in records {
        first = first.min(record.purchase_date);
        last = last.max(record.purchase_date);
    }
    if last == first {
        // Degenerate single-day axis; widen so the range stays valid.
        last += Duration::days(1);
    }
    let y_max = stores
        .iter()
        .flat_map(|(_, series)| series.values().copied())
        .fold(0.0, f64::max)
        * 1.05;

    let path = output_dir.join("tendencia_ventas_tiempo.png");
    let root = BitMapBackend::new(&path, theme.size).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Tendencia de Ventas en el Tiempo",
            ("sans-serif", theme.caption_size),
        )
        .margin(20)
        .x_label_area_size(70)
        .y_label_area_size(110)
        .build_cartesian_2d(first..last, 0f64..y_max)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc("Fecha")
        .y_desc("Total Ventas")
        .x_label_formatter(&|date| date.format("%d/%m/%Y").to_string())
        .label_style(("sans-serif", theme.label_size))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    for (index, (store, series)) in stores.iter().enumerate() {
        let color = theme.color(index);
        chart
            .draw_series(LineSeries::new(
                series.iter().map(|(date, total)| (*date, *total)),
                &color,
            ))
            .map_err(|e| PlotError::Drawing(e.to_string()))?
            .label((*store).to_string())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
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
