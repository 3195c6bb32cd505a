//! Line-item calculation
//!
//! Recomputes one row's subtotal, VAT amount, and total whenever a field
//! changes. Field values arrive as text; anything that fails numeric parsing
//! is silently coerced to zero. The computation itself is total over the
//! coerced domain and has no error path.

use std::collections::HashMap;

use shared::{LineItem, LineTotals, format_amount};

/// Field name suffixes of the formset row inputs
pub const QUANTITY_SUFFIX: &str = "-quantity";
pub const UNIT_PRICE_SUFFIX: &str = "-unit_price";
pub const VAT_RATE_SUFFIX: &str = "-vat_rate";
pub const DISCOUNT_SUFFIX: &str = "-discount";

/// Coerce raw field text to a number
///
/// Missing fields, empty strings, and non-numeric text all coerce to `0.0`;
/// coercion is never an error.
///
/// # Examples
///
/// ```
/// use fatoora_ui::form::coerce_numeric;
///
/// assert_eq!(coerce_numeric(Some("12.5")), 12.5);
/// assert_eq!(coerce_numeric(Some("  3 ")), 3.0);
/// assert_eq!(coerce_numeric(Some("abc")), 0.0);
/// assert_eq!(coerce_numeric(None), 0.0);
/// ```
pub fn coerce_numeric(raw: Option<&str>) -> f64 {
    raw.and_then(|v| v.trim().parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Snapshot of one invoice form row: field name to raw text value
///
/// Rows are identified structurally by their field-name suffixes, so rows
/// added or removed dynamically need no re-binding.
#[derive(Debug, Clone, Default)]
pub struct FormRow {
    fields: HashMap<String, String>,
}

impl FormRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field setter
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Raw value of the first field whose name ends with `suffix`
    pub fn field_by_suffix(&self, suffix: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name.ends_with(suffix))
            .map(|(_, value)| value.as_str())
    }
}

/// Read a line item out of a form row
///
/// Returns `None` when the quantity, unit-price, or VAT-rate field is
/// structurally absent. A missing discount field is equivalent to a discount
/// of zero.
pub fn read_line_item(row: &FormRow) -> Option<LineItem> {
    let quantity = row.field_by_suffix(QUANTITY_SUFFIX)?;
    let unit_price = row.field_by_suffix(UNIT_PRICE_SUFFIX)?;
    let vat_rate = row.field_by_suffix(VAT_RATE_SUFFIX)?;

    Some(LineItem {
        quantity: coerce_numeric(Some(quantity)),
        unit_price: coerce_numeric(Some(unit_price)),
        vat_rate: coerce_numeric(Some(vat_rate)),
        discount: coerce_numeric(row.field_by_suffix(DISCOUNT_SUFFIX)),
    })
}

/// Compute a row's derived amounts
///
/// Pure IEEE f64 arithmetic, no rounding here. A discount larger than
/// quantity × unit price produces a negative subtotal, which propagates
/// into the VAT amount and total unchanged.
pub fn compute_totals(item: &LineItem) -> LineTotals {
    let subtotal = item.quantity * item.unit_price - item.discount;
    let vat_amount = subtotal * (item.vat_rate / 100.0);
    let total = subtotal + vat_amount;

    LineTotals {
        subtotal,
        vat_amount,
        total,
    }
}

/// Where computed totals are rendered
pub trait TotalsDisplay: Send + Sync + 'static {
    fn render(&self, row: &FormRow, totals: &LineTotals);
}

/// Display that logs the 2-dp formatted amounts
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDisplay;

impl TotalsDisplay for LogDisplay {
    fn render(&self, _row: &FormRow, totals: &LineTotals) {
        tracing::info!(
            "Row calculations: subtotal={} vat_amount={} total={}",
            format_amount(totals.subtotal),
            format_amount(totals.vat_amount),
            format_amount(totals.total),
        );
    }
}
