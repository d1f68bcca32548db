use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use plotters::element::Pie;
use plotters::prelude::*;

use storelens_model::SaleRecord;

use crate::theme::ChartTheme;
use crate::{PlotError, Result};

/// Pie chart of the revenue share per product category.
pub fn sales_by_category(
    records: &[SaleRecord],
    output_dir: &Path,
    theme: &ChartTheme,
) -> Result<PathBuf> {
    if records.is_empty() {
        return Err(PlotError::InvalidData("no records to plot".to_string()));
    }
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for record in records {
        *totals.entry(record.category.as_str()).or_insert(0.0) += record.total_sale;
    }
    let labels: Vec<String> = totals.keys().map(|category| (*category).to_string()).collect();
    let sizes: Vec<f64> = totals.values().copied().collect();
    let colors: Vec<RGBColor> = (0..labels.len()).map(|index| theme.color(index)).collect();

    let path = output_dir.join("distribucion_ventas_categoria.png");
    let root = BitMapBackend::new(&path, theme.size).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;
    let root = root
        .titled(
            "Distribución de Ventas por Categoría",
            ("sans-serif", theme.caption_size),
        )
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let (width, height) = theme.size;
    let center = (width as i32 / 2, height as i32 / 2);
    let radius = f64::from(width.min(height)) * 0.32;

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.label_style(("sans-serif", theme.label_size).into_font().color(&BLACK));
    // Slice percentages, the pie's equivalent of the bar value labels.
    pie.percentages(
        ("sans-serif", theme.label_size)
            .into_font()
            .color(&BLACK),
    );
    root.draw(&pie)
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    Ok(path.clone())
}
