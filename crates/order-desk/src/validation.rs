//! Input checks applied before any lifecycle logic runs.

use crate::model::{Agent, OrderDetails, OrderUpdate};
use std::collections::BTreeSet;
use thiserror::Error;

pub const MAX_CUSTOMER_NAME: usize = 32;
pub const MAX_NOTE: usize = 128;
pub const TICKET_DIGITS: usize = 5;
pub const INVOICE_DIGITS: std::ops::RangeInclusive<usize> = 5..=12;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Customer name is required")]
    MissingCustomerName,

    #[error("Customer name must be at most {max} characters, got {len}")]
    CustomerNameTooLong { len: usize, max: usize },

    #[error("Ticket number must be exactly 5 digits: {0:?}")]
    InvalidTicketNumber(String),

    #[error("Invoice number must be 5-12 digits: {0:?}")]
    InvalidInvoiceNumber(String),

    #[error("Note must be at most {max} characters, got {len}")]
    NoteTooLong { len: usize, max: usize },

    #[error("{what} name is required")]
    BlankName { what: &'static str },

    #[error("{what} already exists: {name}")]
    Duplicate { what: &'static str, name: String },
}

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

pub fn customer_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::MissingCustomerName);
    }
    let len = name.chars().count();
    if len > MAX_CUSTOMER_NAME {
        return Err(ValidationError::CustomerNameTooLong {
            len,
            max: MAX_CUSTOMER_NAME,
        });
    }
    Ok(())
}

pub fn ticket_number(ticket: &str) -> Result<(), ValidationError> {
    if ticket.len() == TICKET_DIGITS && all_digits(ticket) {
        Ok(())
    } else {
        Err(ValidationError::InvalidTicketNumber(ticket.to_string()))
    }
}

pub fn invoice_number(invoice: &str) -> Result<(), ValidationError> {
    if INVOICE_DIGITS.contains(&invoice.len()) && all_digits(invoice) {
        Ok(())
    } else {
        Err(ValidationError::InvalidInvoiceNumber(invoice.to_string()))
    }
}

pub fn note(note: &str) -> Result<(), ValidationError> {
    let len = note.chars().count();
    if len > MAX_NOTE {
        return Err(ValidationError::NoteTooLong { len, max: MAX_NOTE });
    }
    Ok(())
}

pub fn name(what: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::BlankName { what });
    }
    Ok(())
}

/// Trims agent names, then checks each is non-blank and unique within the roster.
pub fn roster(agents: Vec<Agent>) -> Result<Vec<Agent>, ValidationError> {
    let mut seen = BTreeSet::new();
    let mut checked = Vec::with_capacity(agents.len());
    for mut agent in agents {
        agent.name = agent.name.trim().to_string();
        name("Agent", &agent.name)?;
        if !seen.insert(agent.name.clone()) {
            return Err(ValidationError::Duplicate {
                what: "Agent",
                name: agent.name,
            });
        }
        checked.push(agent);
    }
    Ok(checked)
}

/// Trims checklist entries and drops the blank ones.
pub fn checklist(tasks: Vec<String>) -> Vec<String> {
    tasks
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Checks the full details block of a new order.
pub fn order_details(details: &OrderDetails) -> Result<(), ValidationError> {
    customer_name(&details.customer_name)?;
    ticket_number(&details.ticket_number)?;
    if let Some(invoice) = details.invoice_number.as_deref().filter(|s| !s.is_empty()) {
        invoice_number(invoice)?;
    }
    if let Some(text) = details.note.as_deref() {
        note(text)?;
    }
    Ok(())
}

/// Checks an edit; an empty invoice number means "clear" and is accepted.
pub fn order_update(update: &OrderUpdate) -> Result<(), ValidationError> {
    if let Some(invoice) = update.invoice_number.as_deref().filter(|s| !s.is_empty()) {
        invoice_number(invoice)?;
    }
    if let Some(text) = update.note.as_deref() {
        note(text)?;
    }
    Ok(())
}
