use std::path::{Path, PathBuf};

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use storelens_model::SaleRecord;

use crate::stats::pearson;
use crate::theme::ChartTheme;
use crate::{PlotError, Result};

const METRIC_NAMES: [&str; 5] = [
    "Total Venta",
    "Precio",
    "Costo de envío",
    "Calificación",
    "Cantidad de cuotas",
];

/// Heatmap of the Pearson correlation matrix over the five numeric
/// columns: sale total, price, shipping cost, rating and installments.
pub fn metric_correlation(
    records: &[SaleRecord],
    output_dir: &Path,
    theme: &ChartTheme,
) -> Result<PathBuf> {
    if records.is_empty() {
        return Err(PlotError::InvalidData("no records to plot".to_string()));
    }
    let columns: [Vec<f64>; 5] = [
        records.iter().map(|r| r.total_sale).collect(),
        records.iter().map(|r| r.price).collect(),
        records.iter().map(|r| r.shipping_cost).collect(),
        records.iter().map(|r| f64::from(r.rating)).collect(),
        records.iter().map(|r| f64::from(r.installments)).collect(),
    ];
    let matrix = correlation_matrix(&columns);

    let path = output_dir.join("correlacion_metricas.png");
    let root = BitMapBackend::new(&path, theme.size).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let side = METRIC_NAMES.len() as f64;
    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Correlación entre Métricas Clave",
            ("sans-serif", theme.caption_size),
        )
        .margin(20)
        .x_label_area_size(70)
        .y_label_area_size(150)
        .build_cartesian_2d(0f64..side, 0f64..side)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(METRIC_NAMES.len())
        .y_labels(METRIC_NAMES.len())
        .x_label_formatter(&|x| cell_label(*x))
        .y_label_formatter(&|y| cell_label(*y))
        .label_style(("sans-serif", theme.label_size))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    let mut cells = Vec::new();
    let mut annotations = Vec::new();
    for (row, row_values) in matrix.iter().enumerate() {
        for (col, &value) in row_values.iter().enumerate() {
            let (x, y) = (col as f64, row as f64);
            cells.push(Rectangle::new(
                [(x, y), (x + 1.0, y + 1.0)],
                diverging_color(value).filled(),
            ));
            let text_color = if value.is_finite() && value.abs() > 0.6 {
                WHITE
            } else {
                BLACK
            };
            let style = ("sans-serif", theme.label_size)
                .into_font()
                .color(&text_color)
                .pos(Pos::new(HPos::Center, VPos::Center));
            annotations.push(Text::new(format!("{value:.2}"), (x + 0.5, y + 0.5), style));
        }
    }
    chart
        .draw_series(cells)
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    chart
        .draw_series(annotations)
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    Ok(path.clone())
}

fn correlation_matrix(columns: &[Vec<f64>; 5]) -> [[f64; 5]; 5] {
    let mut matrix = [[0.0; 5]; 5];
    for (i, a) in columns.iter().enumerate() {
        for (j, b) in columns.iter().enumerate() {
            matrix[i][j] = pearson(a, b);
        }
    }
    matrix
}

/// Metric name for the cell spanning tick position `v` to `v + 1`.
fn cell_label(v: f64) -> String {
    let index = v.floor();
    if index < 0.0 {
        return String::new();
    }
    METRIC_NAMES
        .get(index as usize)
        .map(|name| (*name).to_string())
        .unwrap_or_default()
}

/// Blue-white-red diverging map over [-1, 1]; grey for undefined cells.
fn diverging_color(value: f64) -> RGBColor {
    if !value.is_finite() {
        return RGBColor(220, 220, 220);
    }
    let value = value.clamp(-1.0, 1.0);
    if value < 0.0 {
        blend(RGBColor(59, 76, 192), -value)
    } else {
        blend(RGBColor(180, 4, 38), value)
    }
}

/// Linear blend from white toward `target` by `amount` in [0, 1].
fn blend(target: RGBColor, amount: f64) -> RGBColor {
    let channel = |to: u8| -> u8 {
        let from = 255.0;
        (from + (f64::from(to) - from) * amount).round() as u8
    };
    RGBColor(channel(target.0), channel(target.1), channel(target.2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonal_of_the_matrix_is_one() {
        let columns: [Vec<f64>; 5] = [
            vec![1.0, 2.0, 3.0],
            vec![3.0, 1.0, 2.0],
            vec![2.0, 3.0, 1.0],
            vec![1.0, 3.0, 2.0],
            vec![5.0, 1.0, 3.0],
        ];
        let matrix = correlation_matrix(&columns);
        for (i, row) in matrix.iter().enumerate() {
            assert!((row[i] - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn matrix_is_symmetric() {
        let columns: [Vec<f64>; 5] = [
            vec![1.0, 2.0, 3.0, 4.0],
            vec![2.0, 1.0, 4.0, 3.0],
            vec![4.0, 3.0, 2.0, 1.0],
            vec![1.0, 1.0, 2.0, 2.0],
            vec![3.0, 4.0, 1.0, 2.0],
        ];
        let matrix = correlation_matrix(&columns);
        for i in 0..5 {
            for j in 0..5 {
                assert!((matrix[i][j] - matrix[j][i]).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn diverging_colors_hit_the_endpoints() {
        assert_eq!(diverging_color(0.0), RGBColor(255, 255, 255));
        assert_eq!(diverging_color(1.0), RGBColor(180, 4, 38));
        assert_eq!(diverging_color(-1.0), RGBColor(59, 76, 192));
        assert_eq!(diverging_color(f64::NAN), RGBColor(220, 220, 220));
    }
}
