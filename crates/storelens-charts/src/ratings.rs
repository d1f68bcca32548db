use std::path::{Path, PathBuf};

use plotters::prelude::*;

use storelens_model::SaleRecord;

use crate::stats::quartiles;
use crate::theme::ChartTheme;
use crate::{PlotError, Result};

const BOX_HALF_WIDTH: f64 = 0.3;
const CAP_HALF_WIDTH: f64 = 0.15;

/// Box plot of the rating distribution per store.
///
/// Boxes span the interquartile range with a median line; whiskers run to
/// the sample min and max. Drawn from primitive rectangles and paths on a
/// numeric axis.
pub fn rating_distribution(
    records: &[SaleRecord],
    output_dir: &Path,
    theme: &ChartTheme,
) -> Result<PathBuf> {
    if records.is_empty() {
        return Err(PlotError::InvalidData("no records to plot".to_string()));
    }
    // Ratings per store in first-appearance order.
    let mut stores: Vec<(&str, Vec<f64>)> = Vec::new();
    for record in records {
        let rating = f64::from(record.rating);
        match stores.iter_mut().find(|(store, _)| *store == record.store) {
            Some((_, ratings)) => ratings.push(rating),
            None => stores.push((record.store.as_str(), vec![rating])),
        }
    }

    let path = output_dir.join("distribucion_calificaciones.png");
    let root = BitMapBackend::new(&path, theme.size).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let labels: Vec<String> = stores.iter().map(|(store, _)| (*store).to_string()).collect();
    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Distribución de Calificaciones por Tienda",
            ("sans-serif", theme.caption_size),
        )
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d(-0.5f64..stores.len() as f64 - 0.5, 0.5f64..5.5f64)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Tienda")
        .y_desc("Calificación")
        .x_labels(stores.len())
        .x_label_formatter(&|x| center_label(&labels, *x))
        .y_labels(5)
        .y_label_formatter(&|y| format!("{y:.0}"))
        .label_style(("sans-serif", theme.label_size))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    for (index, (_, ratings)) in stores.iter().enumerate() {
        let Some([low, q1, median, q3, high]) = quartiles(ratings) else {
            continue;
        };
        let x = index as f64;
        let color = theme.color(index);

        chart
            .draw_series([Rectangle::new(
                [(x - BOX_HALF_WIDTH, q1), (x + BOX_HALF_WIDTH, q3)],
                color.mix(0.35).filled(),
            )])
            .map_err(|e| PlotError::Drawing(e.to_string()))?;
        chart
            .draw_series([Rectangle::new(
                [(x - BOX_HALF_WIDTH, q1), (x + BOX_HALF_WIDTH, q3)],
                &color,
            )])
            .map_err(|e| PlotError::Drawing(e.to_string()))?;

        let segments = [
            // Median line.
            vec![(x - BOX_HALF_WIDTH, median), (x + BOX_HALF_WIDTH, median)],
            // Whiskers and their caps.
            vec![(x, low), (x, q1)],
            vec![(x, q3), (x, high)],
            vec![(x - CAP_HALF_WIDTH, low), (x + CAP_HALF_WIDTH, low)],
            vec![(x - CAP_HALF_WIDTH, high), (x + CAP_HALF_WIDTH, high)],
        ];
        chart
            .draw_series(
                segments
                    .into_iter()
                    .map(|points| PathElement::new(points, color.stroke_width(2))),
            )
            .map_err(|e| PlotError::Drawing(e.to_string()))?;
    }

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    Ok(path.clone())
}

/// Label for the box centered at tick position `x`.
fn center_label(labels: &[String], x: f64) -> String {
    let index = x.round();
    if index < 0.0 || (x - index).abs() > 0.25 {
        return String::new();
    }
    labels
        .get(index as usize)
        .cloned()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_labels_only_appear_near_box_centers() {
        let labels = vec!["Store 1".to_string(), "Store 2".to_string()];
        assert_eq!(center_label(&labels, 0.0), "Store 1");
        assert_eq!(center_label(&labels, 1.1), "Store 2");
        assert_eq!(center_label(&labels, 0.5), "");
        assert_eq!(center_label(&labels, 5.0), "");
    }
}
