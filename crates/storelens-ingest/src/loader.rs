use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use tracing::debug;

use storelens_model::RawSale;

/// Label for the store whose file sits at 1-based `position` in the input
/// list.
pub fn store_label(position: usize) -> String {
    format!("Store {position}")
}

/// Read every input CSV and concatenate the rows into one record list.
///
/// Row order is input-file order, then within-file order. Each row is
/// tagged with its store label before being appended. Fails on the first
/// missing file or malformed record; there is no partial-failure handling.
pub fn load_sales<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<RawSale>> {
    let mut sales = Vec::new();
    for (index, path) in paths.iter().enumerate() {
        let path = path.as_ref();
        let label = store_label(index + 1);
        let before = sales.len();
        read_store_file(path, &label, &mut sales)
            .with_context(|| format!("read sales csv: {}", path.display()))?;
        debug!(
            store = %label,
            file = %path.display(),
            records = sales.len() - before,
            "loaded store file"
        );
    }
    Ok(sales)
}

fn read_store_file(path: &Path, label: &str, out: &mut Vec<RawSale>) -> Result<()> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;
    for record in reader.deserialize::<RawSale>() {
        let mut sale = record?;
        sale.store = label.to_string();
        out.push(sale);
    }
    Ok(())
}
