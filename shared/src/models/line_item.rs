//! Invoice line-item model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Invoice identifier (server-side integer primary key)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InvoiceId(pub i64);

impl fmt::Display for InvoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for InvoiceId {
    fn from(id: i64) -> Self {
        InvoiceId(id)
    }
}

/// One invoice form row, after numeric coercion
///
/// Values come from text fields; anything that fails numeric parsing has
/// already been coerced to `0.0` upstream. A missing discount field is
/// equivalent to a discount of zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub quantity: f64,
    /// Price per unit in currency unit
    pub unit_price: f64,
    /// VAT rate in percent
    pub vat_rate: f64,
    /// Discount amount in currency unit
    #[serde(default)]
    pub discount: f64,
}

/// Derived amounts for one line item
///
/// Never stored; recomputed on every change. No rounding is applied here,
/// only at display time via [`format_amount`]. `subtotal` may go negative
/// when the discount exceeds quantity × unit price; the value propagates
/// arithmetically.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineTotals {
    pub subtotal: f64,
    pub vat_amount: f64,
    pub total: f64,
}

/// Format an amount for display, rounded to 2 decimal places
///
/// # Examples
///
/// ```
/// use shared::format_amount;
///
/// assert_eq!(format_amount(333.5), "333.50");
/// assert_eq!(format_amount(43.499), "43.50");
/// ```
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoice_id_display() {
        assert_eq!(InvoiceId(42).to_string(), "42");
        assert_eq!(InvoiceId::from(7).to_string(), "7");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(290.0), "290.00");
        assert_eq!(format_amount(43.5), "43.50");
        assert_eq!(format_amount(-10.005), "-10.01");
    }

    #[test]
    fn test_line_item_discount_defaults_on_deserialize() {
        let item: LineItem =
            serde_json::from_str(r#"{"quantity":3.0,"unit_price":100.0,"vat_rate":15.0}"#)
                .unwrap();
        assert_eq!(item.discount, 0.0);
    }
}
