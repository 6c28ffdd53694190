use thiserror::Error;

use crate::model::StockStatus;

/// Class token rendered when a raw status value is not recognised.
pub const UNKNOWN_STATUS_CLASS: &str = "";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatusError {
    #[error("unrecognized stock status {0:?}")]
    UnrecognizedStatus(String),
}

pub fn label_for(status: StockStatus) -> &'static str {
    match status {
        StockStatus::InStock => "In Stock",
        StockStatus::OutOfStock => "Out of Stock",
        StockStatus::Discontinued => "Discontinued",
    }
}

pub fn style_class_for(status: StockStatus) -> &'static str {
    match status {
        StockStatus::InStock => "bg-green-100 text-green-800",
        StockStatus::OutOfStock => "bg-yellow-100 text-yellow-800",
        StockStatus::Discontinued => "bg-red-100 text-red-800",
    }
}

/// Label for a status that has not been validated yet, e.g. one read from a
/// foreign record. Values outside the enumeration are an error.
pub fn label_for_raw(value: &str) -> Result<&'static str, StatusError> {
    value.parse::<StockStatus>().map(label_for)
}

/// Class token for an unvalidated status. Unknown values render as
/// [`UNKNOWN_STATUS_CLASS`] instead of failing.
pub fn style_class_for_raw(value: &str) -> &'static str {
    value
        .parse::<StockStatus>()
        .map(style_class_for)
        .unwrap_or(UNKNOWN_STATUS_CLASS)
}
