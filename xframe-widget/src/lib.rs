//! XFrame Widget - a text view with centered directional drawables.
//!
//! `DrawableTextView` is the thin adapter between a platform text view and
//! the pure layout in `xframe_layout`. It owns the pending decorations,
//! turns setter calls into invalidations, and on each draw pass runs the
//! layout against an immutable snapshot before painting through a
//! `DecorationCanvas`.
//!
//! # Threading
//!
//! A view is owned by the UI thread. Setters and `draw` are expected to be
//! called from that thread only; no locking is done.

pub mod attrs;
pub mod canvas;
pub mod error;
pub mod measure;
pub mod view;

pub use attrs::{DrawableAttr, DrawableTextAttrs};
pub use canvas::{DecorationCanvas, DrawOp, RecordingCanvas};
pub use error::{AttrError, ViewError};
pub use measure::{MonospaceMeasure, TextMeasure};
pub use view::DrawableTextView;

pub use xframe_layout::{
    Bounds, Decoration, DecorationSet, FontMetrics, Insets, LayoutContext, LayoutResult, Offset,
    Slot,
};
