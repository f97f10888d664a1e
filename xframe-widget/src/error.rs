//! Widget error types.

use thiserror::Error;
use xframe_layout::Slot;

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("invalid drawable gravity: {0} (expected 0..=3)")]
    InvalidSlot(usize),
}

#[derive(Debug, Error)]
pub enum AttrError {
    #[error("unknown drawable for {slot:?}: {name}")]
    UnknownDrawable { slot: Slot, name: String },

    #[error("negative dimension for {field}: {value}")]
    NegativeDimension { field: String, value: i32 },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
