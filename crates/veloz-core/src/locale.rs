//! # Locale Formatting
//!
//! pt-BR date formatting for rental receipts.
//!
//! Currency formatting lives on [`crate::money::Money`]'s `Display`
//! impl; this module owns the long-form date used for due dates.
//! Both are pure functions of their input, so the receipt strings are
//! reproducible in tests without any locale machinery from the OS.

use chrono::{Datelike, NaiveDate};

/// Month names as they appear on Brazilian receipts.
const MONTHS_PT_BR: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Formats a date as a pt-BR long date: "14 de março de 2021".
///
/// Day numbers are not zero-padded ("9 de março de 2021"), matching
/// the pt-BR long date convention.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use veloz_core::locale::long_date_pt_br;
///
/// let date = NaiveDate::from_ymd_opt(2021, 3, 14).unwrap();
/// assert_eq!(long_date_pt_br(date), "14 de março de 2021");
/// ```
pub fn long_date_pt_br(date: NaiveDate) -> String {
    // month0 is 0-based and always < 12 for a valid NaiveDate
    let month = MONTHS_PT_BR[date.month0() as usize];
    format!("{} de {} de {}", date.day(), month, date.year())
}

// =============================================================================
// Unit Tests
// =============================================================================
