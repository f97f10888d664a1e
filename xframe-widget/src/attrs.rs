//! Declarative view attributes.
//!
//! A `DrawableTextAttrs` describes a view the way a layout resource would:
//! size, padding, text, and per-side drawable references with explicit
//! sizes. Every field has a default, so a description only lists what it
//! sets. Each side is three flat keys, `<side>_drawable`,
//! `<side>_drawable_width` and `<side>_drawable_height`, and unknown keys
//! are rejected:
//!
//! ```json
//! {
//!   "text": "Next",
//!   "width": 240,
//!   "height": 48,
//!   "drawable_padding": 6,
//!   "end_drawable": "ic_arrow",
//!   "end_drawable_width": 16,
//!   "end_drawable_height": 16
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use xframe_layout::{Insets, Slot};

use crate::error::AttrError;
use crate::view::DrawableTextView;

/// Drawable reference for one side, as read from the flat keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawableAttr<'a> {
    /// Resource name, resolved by the caller. `None` leaves the slot empty.
    pub drawable: Option<&'a str>,
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DrawableTextAttrs {
    pub text: String,
    pub width: i32,
    pub height: i32,
    pub padding: Insets,
    pub drawable_padding: i32,
    pub start_drawable: Option<String>,
    pub start_drawable_width: i32,
    pub start_drawable_height: i32,
    pub top_drawable: Option<String>,
    pub top_drawable_width: i32,
    pub top_drawable_height: i32,
    pub end_drawable: Option<String>,
    pub end_drawable_width: i32,
    pub end_drawable_height: i32,
    pub bottom_drawable: Option<String>,
    pub bottom_drawable_width: i32,
    pub bottom_drawable_height: i32,
}

impl DrawableTextAttrs {
    pub fn from_json(json: &str) -> Result<Self, AttrError> {
        let attrs: Self = serde_json::from_str(json)?;
        attrs.validate()?;
        Ok(attrs)
    }

    /// Read and validate a JSON description from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AttrError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let attrs = Self::from_json(&json)?;
        tracing::debug!("loaded view attributes from {:?}", path);
        Ok(attrs)
    }

    pub fn slot(&self, slot: Slot) -> DrawableAttr<'_> {
        let (drawable, width, height) = match slot {
            Slot::Start => (
                &self.start_drawable,
                self.start_drawable_width,
                self.start_drawable_height,
            ),
            Slot::Top => (
                &self.top_drawable,
                self.top_drawable_width,
                self.top_drawable_height,
            ),
            Slot::End => (
                &self.end_drawable,
                self.end_drawable_width,
                self.end_drawable_height,
            ),
            Slot::Bottom => (
                &self.bottom_drawable,
                self.bottom_drawable_width,
                self.bottom_drawable_height,
            ),
        };
        DrawableAttr {
            drawable: drawable.as_deref(),
            width,
            height,
        }
    }

    /// Reject negative sizes. Padding insets may be anything.
    pub fn validate(&self) -> Result<(), AttrError> {
        check("width", self.width)?;
        check("height", self.height)?;
        check("drawable_padding", self.drawable_padding)?;
        for slot in Slot::ALL {
            let attr = self.slot(slot);
            check(&format!("{}_drawable_width", slot_name(slot)), attr.width)?;
            check(&format!("{}_drawable_height", slot_name(slot)), attr.height)?;
        }
        Ok(())
    }
}

fn check(field: &str, value: i32) -> Result<(), AttrError> {
    if value < 0 {
        tracing::warn!(field, value, "rejected negative dimension");
        return Err(AttrError::NegativeDimension {
            field: field.to_string(),
            value,
        });
    }
    Ok(())
}

fn slot_name(slot: Slot) -> &'static str {
    match slot {
        Slot::Start => "start",
        Slot::Top => "top",
        Slot::End => "end",
        Slot::Bottom => "bottom",
    }
}

impl<D: Clone> DrawableTextView<D> {
    /// Build a view from attributes, resolving drawable names with `resolve`.
    ///
    /// A size given without a drawable is kept out of the layout, as with
    /// any absent slot.
    pub fn from_attrs(
        attrs: &DrawableTextAttrs,
        mut resolve: impl FnMut(&str) -> Option<D>,
    ) -> Result<Self, AttrError> {
        attrs.validate()?;

        let mut view = DrawableTextView::new(attrs.width, attrs.height);
        view.set_text(attrs.text.clone());
        view.set_padding(attrs.padding);
        view.set_drawable_padding(attrs.drawable_padding);

        for slot in Slot::ALL {
            let attr = attrs.slot(slot);
            let Some(name) = attr.drawable else {
                continue;
            };
            let Some(drawable) = resolve(name) else {
                tracing::warn!(?slot, name, "unresolved drawable");
                return Err(AttrError::UnknownDrawable {
                    slot,
                    name: name.to_string(),
                });
            };
            view.set_decoration(slot, Some(drawable), attr.width, attr.height);
        }

        Ok(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver(name: &str) -> Option<String> {
        name.starts_with("ic_").then(|| name.to_string())
    }

    #[test]
    fn test_defaults_fill_missing_fields() {
        let attrs = DrawableTextAttrs::from_json(r#"{ "text": "Hi" }"#).unwrap();
        assert_eq!(attrs.text, "Hi");
        assert_eq!(attrs.width, 0);
        assert_eq!(attrs.padding, Insets::ZERO);
        assert_eq!(attrs.slot(Slot::End), DrawableAttr::default());
    }

    #[test]
    fn test_padding_and_slots_parse() {
        let attrs = DrawableTextAttrs::from_json(
            r#"{
                "padding": { "start": 8, "end": 8 },
                "top_drawable": "ic_up",
                "top_drawable_width": 12,
                "top_drawable_height": 10
            }"#,
        )
        .unwrap();
        assert_eq!(attrs.padding, Insets::new(8, 0, 8, 0));
        assert_eq!(
            attrs.slot(Slot::Top),
            DrawableAttr {
                drawable: Some("ic_up"),
                width: 12,
                height: 10,
            }
        );
        assert_eq!(attrs.slot(Slot::Start).drawable, None);
    }

    #[test]
    fn test_unknown_keys_rejected() {
        // Nested per-side objects are not part of the format.
        let err = DrawableTextAttrs::from_json(
            r#"{ "start": { "drawable": "ic_share", "width": 24, "height": 24 } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, AttrError::Json(_)));

        let err = DrawableTextAttrs::from_json(r#"{ "start_drawable_widht": 24 }"#).unwrap_err();
        assert!(matches!(err, AttrError::Json(_)));

        let err = DrawableTextAttrs::from_json(r#"{ "padding": { "left": 4 } }"#).unwrap_err();
        assert!(matches!(err, AttrError::Json(_)));
    }

    #[test]
    fn test_negative_dimension_rejected() {
        let err =
            DrawableTextAttrs::from_json(r#"{ "bottom_drawable_width": -3 }"#).unwrap_err();
        match err {
            AttrError::NegativeDimension { field, value } => {
                assert_eq!(field, "bottom_drawable_width");
                assert_eq!(value, -3);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_negative_view_size_rejected_by_from_attrs() {
        let attrs = DrawableTextAttrs {
            height: -1,
            ..Default::default()
        };
        let err = DrawableTextView::from_attrs(&attrs, resolver).unwrap_err();
        assert!(matches!(
            err,
            AttrError::NegativeDimension { ref field, value: -1 } if field == "height"
        ));
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        let err = DrawableTextAttrs::from_json("{ not json").unwrap_err();
        assert!(matches!(err, AttrError::Json(_)));
    }

    #[test]
    fn test_from_attrs_resolves_drawables() {
        let attrs = DrawableTextAttrs {
            text: "Next".into(),
            width: 240,
            height: 48,
            drawable_padding: 6,
            end_drawable: Some("ic_arrow".into()),
            end_drawable_width: 16,
            end_drawable_height: 16,
            // Size without a drawable stays out of the layout.
            start_drawable_width: 30,
            start_drawable_height: 30,
            ..Default::default()
        };

        let view = DrawableTextView::from_attrs(&attrs, resolver).unwrap();
        assert_eq!(view.text(), "Next");
        assert_eq!(view.size(), (240, 48));
        assert_eq!(view.drawable_padding(), 6);
        assert_eq!(
            view.decoration(Slot::End).map(|d| d.drawable.as_str()),
            Some("ic_arrow")
        );
        assert!(view.decoration(Slot::Start).is_none());
    }

    #[test]
    fn test_from_attrs_unknown_drawable() {
        let attrs = DrawableTextAttrs {
            top_drawable: Some("missing".into()),
            top_drawable_width: 4,
            top_drawable_height: 4,
            ..Default::default()
        };
        let err = DrawableTextView::from_attrs(&attrs, resolver).unwrap_err();
        assert!(matches!(
            err,
            AttrError::UnknownDrawable { slot: Slot::Top, ref name } if name == "missing"
        ));
    }
}
