use chrono::NaiveDate;

use storelens_model::{AnalysisError, DivisionPolicy, RawSale, Result, SaleRecord};

/// The only accepted purchase-date shape in the source exports.
const DATE_FORMAT: &str = "%d/%m/%Y";

/// Parse dates, validate ratings and derive the computed columns.
///
/// No rows are dropped and output order equals input order. The zero-price
/// shipping percentage is resolved by `policy`; everything else that fails
/// to parse aborts the run.
pub fn clean_sales(raw: Vec<RawSale>, policy: DivisionPolicy) -> Result<Vec<SaleRecord>> {
    raw.into_iter().map(|sale| clean_one(sale, policy)).collect()
}

fn clean_one(sale: RawSale, policy: DivisionPolicy) -> Result<SaleRecord> {
    let purchase_date = parse_purchase_date(&sale.purchase_date)?;
    if !(1..=5).contains(&sale.rating) {
        return Err(AnalysisError::InvalidRating { value: sale.rating });
    }
    let total_sale = sale.price + sale.shipping_cost;
    let shipping_percent = if sale.price == 0.0 {
        policy.undefined(|| AnalysisError::ZeroPrice)?
    } else {
        sale.shipping_cost / sale.price * 100.0
    };
    Ok(SaleRecord {
        store: sale.store,
        purchase_date,
        price: sale.price,
        shipping_cost: sale.shipping_cost,
        rating: sale.rating,
        category: sale.category,
        installments: sale.installments,
        product: sale.product,
        total_sale,
        shipping_percent,
    })
}

/// Strict `DD/MM/YYYY` parse; any other shape is rejected.
fn parse_purchase_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| AnalysisError::InvalidDate {
        value: value.to_string(),
    })
}
