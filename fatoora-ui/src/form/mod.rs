//! Invoice form handling

pub mod row_calc;

pub use row_calc::{
    FormRow, LogDisplay, TotalsDisplay, coerce_numeric, compute_totals, read_line_item,
};
