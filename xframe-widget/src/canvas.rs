//! Canvas abstraction for the draw pass.
//!
//! `DecorationCanvas` is the minimal surface the view paints through:
//! a save/restore transform stack, text, and "draw this drawable into
//! these bounds". Platform backends implement it; `RecordingCanvas`
//! keeps a log of operations for tests and offline inspection.

use serde::{Deserialize, Serialize};
use xframe_layout::Bounds;

/// Drawing surface for a decorated text view.
pub trait DecorationCanvas<D> {
    /// Push the current transform.
    fn save(&mut self);

    /// Pop the transform pushed by the matching `save`.
    fn restore(&mut self);

    fn translate(&mut self, dx: f32, dy: f32);

    /// Draw `text` with its baseline origin at `(x, y)`.
    fn draw_text(&mut self, text: &str, x: f32, y: f32);

    /// Draw `drawable` scaled into `bounds` (in current canvas space).
    fn draw_decoration(&mut self, drawable: &D, bounds: Bounds);
}

/// A recorded canvas operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp<D> {
    Save,
    Restore,
    Translate {
        dx: f32,
        dy: f32,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        /// Canvas translation in effect when the text was drawn.
        translation: (f32, f32),
    },
    Decoration {
        drawable: D,
        bounds: Bounds,
        translation: (f32, f32),
    },
}

/// Canvas that records every call instead of rasterizing.
#[derive(Debug, Clone)]
pub struct RecordingCanvas<D> {
    ops: Vec<DrawOp<D>>,
    translation: (f32, f32),
    stack: Vec<(f32, f32)>,
}

impl<D> Default for RecordingCanvas<D> {
    fn default() -> Self {
        Self {
            ops: Vec::new(),
            translation: (0.0, 0.0),
            stack: Vec::new(),
        }
    }
}

impl<D> RecordingCanvas<D> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp<D>] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<DrawOp<D>> {
        self.ops
    }

    /// Current accumulated translation.
    pub fn translation(&self) -> (f32, f32) {
        self.translation
    }

    /// Depth of the save stack (0 when balanced).
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Decoration draws only, in paint order.
    pub fn decorations(&self) -> impl Iterator<Item = (&D, Bounds, (f32, f32))> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Decoration {
                drawable,
                bounds,
                translation,
            } => Some((drawable, *bounds, *translation)),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.ops.clear();
        self.stack.clear();
        self.translation = (0.0, 0.0);
    }
}

impl<D: Clone> DecorationCanvas<D> for RecordingCanvas<D> {
    fn save(&mut self) {
        self.stack.push(self.translation);
        self.ops.push(DrawOp::Save);
    }

    fn restore(&mut self) {
        match self.stack.pop() {
            Some(previous) => {
                self.translation = previous;
                self.ops.push(DrawOp::Restore);
            }
            None => tracing::warn!("canvas restore without matching save"),
        }
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.translation.0 += dx;
        self.translation.1 += dy;
        self.ops.push(DrawOp::Translate { dx, dy });
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            x,
            y,
            translation: self.translation,
        });
    }

    fn draw_decoration(&mut self, drawable: &D, bounds: Bounds) {
        self.ops.push(DrawOp::Decoration {
            drawable: drawable.clone(),
            bounds,
            translation: self.translation,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_restore_tracks_translation() {
        let mut canvas: RecordingCanvas<()> = RecordingCanvas::new();
        canvas.save();
        canvas.translate(5.0, -3.0);
        assert_eq!(canvas.translation(), (5.0, -3.0));
        canvas.save();
        canvas.translate(1.0, 1.0);
        assert_eq!(canvas.translation(), (6.0, -2.0));
        canvas.restore();
        assert_eq!(canvas.translation(), (5.0, -3.0));
        canvas.restore();
        assert_eq!(canvas.translation(), (0.0, 0.0));
        assert_eq!(canvas.depth(), 0);
    }

    #[test]
    fn test_unbalanced_restore_is_ignored() {
        let mut canvas: RecordingCanvas<()> = RecordingCanvas::new();
        canvas.restore();
        assert!(canvas.ops().is_empty());
    }

    #[test]
    fn test_decoration_records_translation() {
        let mut canvas: RecordingCanvas<&str> = RecordingCanvas::new();
        canvas.translate(2.0, 4.0);
        canvas.draw_decoration(&"star", Bounds::new(0, 0, 8, 8));
        let recorded: Vec<_> = canvas.decorations().collect();
        assert_eq!(recorded, vec![(&"star", Bounds::new(0, 0, 8, 8), (2.0, 4.0))]);
    }

    #[test]
    fn test_ops_serialize_with_tag() {
        let mut canvas: RecordingCanvas<String> = RecordingCanvas::new();
        canvas.save();
        let json = serde_json::to_string(canvas.ops()).unwrap();
        assert_eq!(json, r#"[{"op":"save"}]"#);
    }

    #[test]
    fn test_clear() {
        let mut canvas: RecordingCanvas<()> = RecordingCanvas::new();
        canvas.save();
        canvas.translate(1.0, 1.0);
        canvas.clear();
        assert!(canvas.ops().is_empty());
        assert_eq!(canvas.depth(), 0);
        assert_eq!(canvas.translation(), (0.0, 0.0));
    }
}
