//! Spreadsheet export of every order, open and closed.
//!
//! Fields are joined with commas and never quoted, so a comma inside a customer name
//! shifts the columns of that row. Dates are rendered as `YYYY-MM-DD` in UTC.

use crate::model::Order;
use chrono::NaiveDate;
use std::io;
use thiserror::Error;

pub const HEADER: [&str; 8] = [
    "Ticket Number",
    "Customer Name",
    "Status",
    "Priority",
    "Type",
    "Assigned To",
    "Created Date",
    "Completed Date",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("CSV flush failed: {0}")]
    Io(#[from] io::Error),
    #[error("CSV output is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

fn row(order: &Order) -> [String; 8] {
    [
        order.details.ticket_number.clone(),
        order.details.customer_name.clone(),
        order.status.to_string(),
        order.priority.to_string(),
        order.category.clone(),
        order.assigned_to.clone().unwrap_or_default(),
        order.created_at.format(DATE_FORMAT).to_string(),
        order
            .completed_at
            .map(|at| at.format(DATE_FORMAT).to_string())
            .unwrap_or_default(),
    ]
}

/// Writes the header and one row per order. The header is written even for an
/// empty list.
pub fn write_orders<W: io::Write>(orders: &[Order], writer: W) -> Result<(), ExportError> {
    let mut csv = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv.write_record(HEADER)?;
    for order in orders {
        csv.write_record(row(order))?;
    }
    csv.flush()?;
    Ok(())
}

pub fn to_csv_string(orders: &[Order]) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    write_orders(orders, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}

/// Suggested download name, e.g. `orders_2024-06-01.csv`.
pub fn file_name(date: NaiveDate) -> String {
    format!("orders_{}.csv", date.format(DATE_FORMAT))
}
