//! Decorated text view.
//!
//! Holds the inputs of the layout (text, geometry, decorations) and paints
//! them. Decorations live in an `Arc<DecorationSet>` that every setter
//! replaces wholesale; a draw pass clones the `Arc` up front and works on
//! that snapshot only.

use std::sync::Arc;

use xframe_layout::{
    compute, Decoration, DecorationSet, Insets, LayoutContext, LayoutResult, Slot,
};

use crate::canvas::DecorationCanvas;
use crate::error::ViewError;
use crate::measure::TextMeasure;

/// A single-line text view with up to four centered drawables.
///
/// Text is always centered in the content box. Setters do not lay out
/// anything; they only invalidate, and the next `draw` picks the change up.
#[derive(Debug, Clone)]
pub struct DrawableTextView<D> {
    text: String,
    width: i32,
    height: i32,
    padding: Insets,
    drawable_padding: i32,
    decorations: Arc<DecorationSet<D>>,
    generation: u64,
    dirty: bool,
}

impl<D: Clone> DrawableTextView<D> {
    /// Create an empty view of the given size.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            text: String::new(),
            width,
            height,
            padding: Insets::ZERO,
            drawable_padding: 0,
            decorations: Arc::new(DecorationSet::empty()),
            generation: 0,
            dirty: true,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.invalidate();
    }

    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    pub fn set_size(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
        self.invalidate();
    }

    pub fn padding(&self) -> Insets {
        self.padding
    }

    pub fn set_padding(&mut self, padding: Insets) {
        self.padding = padding;
        self.invalidate();
    }

    pub fn drawable_padding(&self) -> i32 {
        self.drawable_padding
    }

    /// Gap between the text and each drawable.
    pub fn set_drawable_padding(&mut self, padding: i32) {
        self.drawable_padding = padding;
        self.invalidate();
    }

    pub fn decoration(&self, slot: Slot) -> Option<&Decoration<D>> {
        self.decorations.get(slot).as_ref()
    }

    /// Attach (or with `None`, detach) the drawable of one slot.
    pub fn set_decoration(&mut self, slot: Slot, drawable: Option<D>, width: i32, height: i32) {
        let mut next = (*self.decorations).clone();
        next.set(slot, drawable.map(|d| Decoration::new(d, width, height)));
        self.decorations = Arc::new(next);
        self.invalidate();
    }

    /// Same as [`set_decoration`](Self::set_decoration), keyed by the legacy
    /// integer gravity (0 start, 1 top, 2 end, 3 bottom).
    pub fn set_decoration_at(
        &mut self,
        gravity: usize,
        drawable: Option<D>,
        width: i32,
        height: i32,
    ) -> Result<(), ViewError> {
        let slot = Slot::from_index(gravity).ok_or(ViewError::InvalidSlot(gravity))?;
        self.set_decoration(slot, drawable, width, height);
        Ok(())
    }

    /// Replace all four slots at once, indexed in `Slot::ALL` order.
    ///
    /// Ignored unless every slice has at least four entries; entries past
    /// the fourth are unused.
    pub fn set_decorations(&mut self, drawables: &[Option<D>], widths: &[i32], heights: &[i32]) {
        if drawables.len() < 4 || widths.len() < 4 || heights.len() < 4 {
            tracing::debug!(
                "ignoring set_decorations: lengths {}/{}/{}",
                drawables.len(),
                widths.len(),
                heights.len()
            );
            return;
        }

        let next = DecorationSet::from_fn(|slot| {
            let i = slot.index();
            drawables[i]
                .clone()
                .map(|d| Decoration::new(d, widths[i], heights[i]))
        });
        self.decorations = Arc::new(next);
        self.invalidate();
    }

    /// Remove every decoration.
    pub fn clear_decorations(&mut self) {
        self.decorations = Arc::new(DecorationSet::empty());
        self.invalidate();
    }

    /// The decorations as of now. Later setters do not affect the returned
    /// value.
    pub fn snapshot(&self) -> Arc<DecorationSet<D>> {
        Arc::clone(&self.decorations)
    }

    /// Whether a redraw has been requested since the last `draw`.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Number of invalidations so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Request a redraw.
    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.dirty = true;
    }

    pub fn layout_context(&self, measure: &impl TextMeasure) -> LayoutContext {
        LayoutContext {
            width: self.width,
            height: self.height,
            padding: self.padding,
            text_width: measure.measure_text(&self.text),
            metrics: measure.font_metrics(),
            drawable_padding: self.drawable_padding,
        }
    }

    /// Run the layout on the current state without painting.
    pub fn layout(&self, measure: &impl TextMeasure) -> LayoutResult {
        compute(&self.layout_context(measure), &*self.decorations)
    }

    /// Paint the view.
    ///
    /// The canvas is translated by the layout's translation; text and every
    /// decoration are drawn inside that translated space, so the block as a
    /// whole ends up centered. The canvas transform is restored afterwards.
    pub fn draw(
        &mut self,
        canvas: &mut impl DecorationCanvas<D>,
        measure: &impl TextMeasure,
    ) -> LayoutResult {
        let snapshot = self.snapshot();
        let ctx = self.layout_context(measure);
        let result = compute(&ctx, &*snapshot);

        tracing::trace!(
            generation = self.generation,
            dx = result.translation.dx,
            dy = result.translation.dy,
            "draw pass"
        );

        canvas.save();
        canvas.translate(result.translation.dx as f32, result.translation.dy as f32);

        let x = ctx.center_x() - ctx.half_text_width();
        let baseline = ctx.center_y() - ctx.half_text_height() - ctx.metrics.ascent;
        canvas.draw_text(&self.text, x, baseline);

        for (slot, bounds) in result.placements() {
            if let Some(decoration) = snapshot.get(slot) {
                canvas.save();
                canvas.draw_decoration(&decoration.drawable, bounds);
                canvas.restore();
            }
        }

        canvas.restore();
        self.dirty = false;
        result
    }
}
