// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mark value types.
//!
//! A mark is one paintable thing: a filled rectangle, a stroked/filled
//! path, or a text label. Marks carry a stable [`MarkId`] so a retained
//! [`crate::Scene`] can replace a panel's marks across re-renders, and a
//! `z_index` so painting order never depends on generation order.

extern crate alloc;

use alloc::string::String;

use kurbo::{BezPath, Point, Rect};
use peniko::Brush;
use smallvec::SmallVec;

/// Stable mark identity.
///
/// Generators derive ids deterministically from an `id_base` plus small
/// offsets, so re-rendering the same chart yields the same ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkId(pub u64);

impl MarkId {
    /// Creates an id from a raw value.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Creates an id for the `index`-th element of a generator family.
    pub const fn for_index(base: u64, index: usize) -> Self {
        Self(base.wrapping_add(index as u64))
    }
}

/// Horizontal text anchoring relative to the label position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    /// The position is the start (left edge in LTR) of the text.
    Start,
    /// The position is the horizontal center of the text.
    Middle,
    /// The position is the end (right edge in LTR) of the text.
    End,
}

/// Vertical text baseline relative to the label position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextBaseline {
    /// The position is the vertical midline of the text.
    Middle,
    /// The position is the alphabetic baseline.
    Alphabetic,
    /// The position is the hanging baseline (text hangs below it).
    Hanging,
    /// The position is the ideographic baseline (text sits above it).
    Ideographic,
}

/// Dash pattern for stroked paths, in the same units as stroke width.
///
/// An empty pattern means a solid stroke. This mirrors the dash storage
/// used by `kurbo::Stroke`.
pub type Dash = SmallVec<[f64; 4]>;

/// A filled rectangle mark.
#[derive(Clone, Debug, PartialEq)]
pub struct RectMark {
    /// Rectangle in scene coordinates.
    pub rect: Rect,
    /// Fill paint.
    pub fill: Brush,
}

/// A path mark, optionally filled and optionally stroked.
#[derive(Clone, Debug, PartialEq)]
pub struct PathMark {
    /// Path geometry in scene coordinates.
    pub path: BezPath,
    /// Fill paint (use a transparent brush for stroke-only paths).
    pub fill: Brush,
    /// Stroke paint.
    pub stroke: Brush,
    /// Stroke width in scene coordinates; `0.0` disables stroking.
    pub stroke_width: f64,
    /// Dash pattern; empty for a solid stroke.
    pub dash: Dash,
}

/// A text label mark. Text is stored unshaped.
#[derive(Clone, Debug, PartialEq)]
pub struct TextMark {
    /// Anchor position in scene coordinates.
    pub pos: Point,
    /// Label content.
    pub text: String,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Rotation angle in degrees around `pos`.
    pub angle: f64,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Fill paint.
    pub fill: Brush,
}

/// The paintable content of a mark.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkPayload {
    /// A filled rectangle.
    Rect(RectMark),
    /// A filled and/or stroked path.
    Path(PathMark),
    /// A text label.
    Text(TextMark),
}

impl MarkPayload {
    /// Returns the geometric bounds of this payload, if it has any.
    ///
    /// Text bounds depend on shaping and are not computed here; callers
    /// that need a view box should estimate them (see the demo crate).
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::Rect(r) => Some(r.rect),
            Self::Path(p) => {
                use kurbo::Shape;
                Some(p.path.bounding_box())
            }
            Self::Text(_) => None,
        }
    }
}

/// One paintable mark: identity + ordering + payload.
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    /// Stable identity.
    pub id: MarkId,
    /// Rendering order hint; painters sort by `(z_index, id)`.
    pub z_index: i32,
    /// Paintable content.
    pub payload: MarkPayload,
}

impl Mark {
    /// Creates a rectangle mark.
    pub fn rect(id: MarkId, z_index: i32, rect: Rect, fill: impl Into<Brush>) -> Self {
        Self {
            id,
            z_index,
            payload: MarkPayload::Rect(RectMark {
                rect,
                fill: fill.into(),
            }),
        }
    }

    /// Creates a filled path mark with no stroke.
    pub fn filled_path(id: MarkId, z_index: i32, path: BezPath, fill: impl Into<Brush>) -> Self {
        Self {
            id,
            z_index,
            payload: MarkPayload::Path(PathMark {
                path,
                fill: fill.into(),
                stroke: Brush::default(),
                stroke_width: 0.0,
                dash: Dash::new(),
            }),
        }
    }

    /// Creates a stroke-only path mark.
    pub fn stroked_path(
        id: MarkId,
        z_index: i32,
        path: BezPath,
        stroke: impl Into<Brush>,
        stroke_width: f64,
        dash: Dash,
    ) -> Self {
        Self {
            id,
            z_index,
            payload: MarkPayload::Path(PathMark {
                path,
                fill: Brush::Solid(peniko::Color::TRANSPARENT),
                stroke: stroke.into(),
                stroke_width,
                dash,
            }),
        }
    }

    /// Creates a text mark.
    pub fn text(id: MarkId, z_index: i32, text_mark: TextMark) -> Self {
        Self {
            id,
            z_index,
            payload: MarkPayload::Text(text_mark),
        }
    }
}

impl TextMark {
    /// Creates a label with default styling: 12px, unrotated, start/middle
    /// anchoring, default brush.
    pub fn new(pos: Point, text: impl Into<String>) -> Self {
        Self {
            pos,
            text: text.into(),
            font_size: 12.0,
            angle: 0.0,
            anchor: TextAnchor::Start,
            baseline: TextBaseline::Middle,
            fill: Brush::default(),
        }
    }

    /// Sets the font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the horizontal anchor.
    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Sets the vertical baseline.
    pub fn with_baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    /// Sets the rotation angle in degrees.
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn for_index_offsets_from_base() {
        assert_eq!(MarkId::for_index(1000, 0), MarkId(1000));
        assert_eq!(MarkId::for_index(1000, 7), MarkId(1007));
    }

    #[test]
    fn rect_bounds_are_the_rect() {
        let m = Mark::rect(
            MarkId(1),
            0,
            Rect::new(1.0, 2.0, 3.0, 4.0),
            peniko::Color::WHITE,
        );
        assert_eq!(m.payload.bounds(), Some(Rect::new(1.0, 2.0, 3.0, 4.0)));
    }

    #[test]
    fn text_bounds_are_unknown() {
        let m = Mark::text(MarkId(2), 0, TextMark::new(Point::new(0.0, 0.0), "hi"));
        assert!(m.payload.bounds().is_none());
    }
}
