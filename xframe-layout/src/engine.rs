//! Drawable-centering layout.
//!
//! Given a measured text run and up to four decorations, computes:
//!
//! 1. a translation for the text, so that text plus decorations form a
//!    block centered in the content area, and
//! 2. a bounding rectangle for each present decoration.
//!
//! Rectangles are placed around the *untranslated* text center. A renderer
//! applies the translation to the canvas, then draws text and decorations
//! in that translated space.
//!
//! # Arithmetic
//!
//! Pixel parity with the platform widget depends on the exact rounding
//! below, so it is kept literal:
//!
//! - translation is integer math, `/` truncating toward zero;
//! - the view center is an integer division promoted to `f32`;
//! - halved decoration sizes are integer divisions;
//! - each anchor edge is summed in `f32` left to right, then truncated
//!   with `as i32` (toward zero, saturating, NaN to 0). The opposite edges
//!   are derived from the anchor in integer space;
//! - every `i32` addition, subtraction and negation wraps on overflow,
//!   as platform `int` math does. Oversized inputs give wrapped (garbage)
//!   rectangles, never a panic.

use serde::{Deserialize, Serialize};

use crate::primitives::{Bounds, FontMetrics, Insets, Offset};
use crate::slot::{DecorationSet, Slot, SlotMap};

/// Everything the engine needs to know about the view and its text.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutContext {
    /// Full view width, padding included.
    pub width: i32,
    /// Full view height, padding included.
    pub height: i32,
    pub padding: Insets,
    /// Measured advance of the text run.
    pub text_width: f32,
    pub metrics: FontMetrics,
    /// Gap between the text and each decoration.
    pub drawable_padding: i32,
}

impl LayoutContext {
    #[inline]
    pub fn center_x(&self) -> f32 {
        (self.width.wrapping_add(self.padding.start).wrapping_sub(self.padding.end) / 2) as f32
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        (self.height.wrapping_add(self.padding.top).wrapping_sub(self.padding.bottom) / 2) as f32
    }

    #[inline]
    pub fn half_text_width(&self) -> f32 {
        self.text_width / 2.0
    }

    #[inline]
    pub fn half_text_height(&self) -> f32 {
        self.metrics.half_text_height()
    }

    /// The untranslated text box, centered on the content center.
    pub fn text_bounds(&self) -> Bounds {
        let (cx, cy) = (self.center_x(), self.center_y());
        let (hw, hh) = (self.half_text_width(), self.half_text_height());
        Bounds::new(
            (cx - hw) as i32,
            (cy - hh) as i32,
            (cx + hw) as i32,
            (cy + hh) as i32,
        )
    }
}

/// Output of one layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LayoutResult {
    /// Applied to the canvas before drawing the text.
    pub translation: Offset,
    /// Untranslated rectangle of each present decoration.
    pub bounds: SlotMap<Option<Bounds>>,
}

impl LayoutResult {
    #[inline]
    pub fn bounds(&self, slot: Slot) -> Option<Bounds> {
        *self.bounds.get(slot)
    }

    /// Present decorations in paint order.
    pub fn placements(&self) -> impl Iterator<Item = (Slot, Bounds)> + '_ {
        Slot::DRAW_ORDER
            .into_iter()
            .filter_map(|slot| self.bounds(slot).map(|b| (slot, b)))
    }

    /// Where a decoration lands once the canvas translation is applied.
    pub fn screen_bounds(&self, slot: Slot) -> Option<Bounds> {
        self.bounds(slot).map(|b| b.translate(self.translation))
    }

    /// Translated text box united with every translated decoration.
    pub fn composite_bounds(&self, ctx: &LayoutContext) -> Bounds {
        let text = ctx.text_bounds().translate(self.translation);
        self.placements()
            .map(|(_, b)| b.translate(self.translation))
            .fold(text, |acc, b| acc.union(&b))
    }

    pub fn is_empty(&self) -> bool {
        self.placements().next().is_none()
    }
}

/// Text translation for the given decoration sizes.
///
/// Note the vertical bottom-only branch: it subtracts the drawable padding
/// where every other single-sided branch adds it. Widgets rendered by the
/// platform depend on this exact offset, so it is preserved.
pub fn translation(ctx: &LayoutContext, sizes: &SlotMap<Option<(i32, i32)>>) -> Offset {
    let pad = ctx.drawable_padding;

    let dx = match (sizes[Slot::Start], sizes[Slot::End]) {
        (Some((start, _)), Some((end, _))) => start.wrapping_sub(end) / 2,
        (Some((start, _)), None) => start.wrapping_add(pad) / 2,
        (None, Some((end, _))) => end.wrapping_add(pad).wrapping_neg() / 2,
        (None, None) => 0,
    };

    let dy = match (sizes[Slot::Top], sizes[Slot::Bottom]) {
        (Some((_, top)), Some((_, bottom))) => top.wrapping_sub(bottom) / 2,
        (Some((_, top)), None) => top.wrapping_add(pad) / 2,
        (None, Some((_, bottom))) => bottom.wrapping_sub(pad).wrapping_neg() / 2,
        (None, None) => 0,
    };

    Offset::new(dx, dy)
}

/// Rectangle of one decoration of size `(width, height)`.
///
/// Depends only on the context and the decoration itself, never on the
/// translation or on the other slots.
pub fn place(ctx: &LayoutContext, slot: Slot, (width, height): (i32, i32)) -> Bounds {
    let cx = ctx.center_x();
    let cy = ctx.center_y();
    let pad = ctx.drawable_padding as f32;
    let half_w = ctx.half_text_width();
    let half_h = ctx.half_text_height();

    match slot {
        Slot::Start => {
            let left = (cx - pad - half_w - width as f32) as i32;
            let top = (cy - (height / 2) as f32) as i32;
            Bounds::from_origin_size(left, top, width, height)
        }
        Slot::End => {
            let left = (cx + half_w + pad) as i32;
            let top = (cy - (height / 2) as f32) as i32;
            Bounds::from_origin_size(left, top, width, height)
        }
        Slot::Top => {
            let left = (cx - (width / 2) as f32) as i32;
            let bottom = (cy - half_h - pad) as i32;
            Bounds::new(
                left,
                bottom.wrapping_sub(height),
                left.wrapping_add(width),
                bottom,
            )
        }
        Slot::Bottom => {
            let left = (cx - (width / 2) as f32) as i32;
            let top = (cy + half_h + pad) as i32;
            Bounds::from_origin_size(left, top, width, height)
        }
    }
}

/// Run a full layout pass.
///
/// Pure: identical inputs give identical results, and absent slots produce
/// neither a rectangle nor a contribution to the translation.
pub fn compute<D>(ctx: &LayoutContext, decorations: &DecorationSet<D>) -> LayoutResult {
    let sizes = decorations.sizes();
    let translation = translation(ctx, &sizes);
    let bounds = sizes.map(|slot, size| (*size).map(|size| place(ctx, slot, size)));
    LayoutResult {
        translation,
        bounds,
    }
}
