//! Conversions between stored bills and their display form.

use crate::error::FormatError;
use crate::models::{Bill, BillStatus, DisplayBill};
use chrono::{Datelike, NaiveDate};

const ISO_DATE: &str = "%Y-%m-%d";

// First three letters of the French short month names, capitalized.
const MONTHS: [&str; 12] = [
    "Jan", "Fév", "Mar", "Avr", "Mai", "Jui", "Jui", "Aoû", "Sep", "Oct", "Nov", "Déc",
];

/// `2004-04-04` -> `4 Avr. 04`
pub fn format_date(iso: &str) -> Result<String, FormatError> {
    let date = NaiveDate::parse_from_str(iso.trim(), ISO_DATE)
        .map_err(|_| FormatError::InvalidDate(iso.to_string()))?;

    Ok(format!(
        "{} {}. {:02}",
        date.day(),
        MONTHS[date.month0() as usize],
        date.year().rem_euclid(100)
    ))
}

pub fn format_status(status: &str) -> Result<&'static str, FormatError> {
    status.parse::<BillStatus>().map(|s| s.label())
}

/// Inverse of [`format_status`]. Dates are never converted back.
pub fn parse_status_label(label: &str) -> Result<BillStatus, FormatError> {
    BillStatus::from_label(label)
}

pub fn to_display(bill: &Bill) -> Result<DisplayBill, FormatError> {
    let status = format_status(&bill.status)?;
    let date = format_date(&bill.date)?;
    Ok(project(bill, date, status.to_string()))
}

/// Display form used when [`to_display`] fails: the stored date is kept and
/// an unknown status is shown as stored.
pub fn to_display_raw(bill: &Bill) -> DisplayBill {
    let status = format_status(&bill.status)
        .map(str::to_string)
        .unwrap_or_else(|_| bill.status.clone());
    project(bill, bill.date.clone(), status)
}

fn project(bill: &Bill, date: String, status: String) -> DisplayBill {
    DisplayBill {
        id: bill.id.clone(),
        email: bill.email.clone(),
        expense_type: bill.expense_type.clone(),
        name: bill.name.clone(),
        amount: bill.amount,
        date,
        iso_date: bill.date.clone(),
        vat: bill.vat.clone(),
        pct: bill.pct,
        commentary: bill.commentary.clone(),
        file_url: bill.file_url.clone(),
        file_name: bill.file_name.clone(),
        status,
        comment_admin: bill.comment_admin.clone(),
    }
}
