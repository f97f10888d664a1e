//! XFrame Layout - drawable-centering layout for decorated text labels.
//!
//! A label may carry up to four directional decorations (images placed
//! before, above, after or below the text). This crate computes where the
//! text must be shifted and where each decoration must be placed so that
//! text and decorations read as one block centered in the view.
//!
//! # Architecture
//!
//! ```text
//! LayoutContext + DecorationSet -> compute() -> LayoutResult { translation, bounds }
//! ```
//!
//! Everything here is a pure function of its inputs. The result is
//! recomputed on every draw pass and never cached.

pub mod engine;
pub mod primitives;
pub mod slot;

pub use engine::{compute, place, translation, LayoutContext, LayoutResult};
pub use primitives::{Bounds, FontMetrics, Insets, Offset};
pub use slot::{Decoration, DecorationSet, Slot, SlotMap};
