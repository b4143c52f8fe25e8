// Copyright 2025 the progress_ring Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small declarative draw tree.
//!
//! The tree is rebuilt from scratch on every render and handed to the host's
//! rendering surface as-is. Nothing in it is retained or mutated afterwards.

use alloc::{string::String, vec::Vec};

use smallvec::SmallVec;

use crate::{Affine, ArcPath, LineCap, Point, Size};

/// How a shape is painted.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Paint {
    /// Nothing is painted.
    #[default]
    None,
    /// A color, in any syntax the host understands (e.g. `#4A90E2`, `black`).
    Solid(String),
    /// A reference to a [`LinearGradient`] in [`Canvas::defs`], by id.
    Gradient(String),
}

impl Paint {
    /// A solid color.
    pub fn solid(color: impl Into<String>) -> Self {
        Self::Solid(color.into())
    }

    /// A gradient reference.
    pub fn gradient(id: impl Into<String>) -> Self {
        Self::Gradient(id.into())
    }
}

/// One color stop of a gradient.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradientStop {
    /// Position along the gradient vector, `0.0..=1.0`.
    pub offset: f64,
    /// Stop color.
    pub color: String,
    /// Stop opacity, `0.0..=1.0`.
    pub opacity: f64,
}

impl GradientStop {
    /// A fully opaque stop.
    pub fn new(offset: f64, color: impl Into<String>) -> Self {
        Self {
            offset,
            color: color.into(),
            opacity: 1.0,
        }
    }
}

/// A linear gradient definition.
///
/// `start` and `end` are fractions of the painted shape's bounding box, so
/// `(0, 0)` is its top left corner and `(1, 1)` its bottom right. Values
/// outside `0..=1` are allowed.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearGradient {
    /// Identifier used by [`Paint::Gradient`].
    pub id: String,
    /// Start of the gradient vector.
    pub start: Point,
    /// End of the gradient vector.
    pub end: Point,
    /// Color stops, in increasing offset order.
    pub stops: SmallVec<[GradientStop; 4]>,
}

/// Horizontal alignment of text relative to its anchor point.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextAnchor {
    /// The text starts at the anchor point.
    #[default]
    Start,
    /// The text is centered on the anchor point.
    Middle,
    /// The text ends at the anchor point.
    End,
}

/// A stroked and/or filled arc.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    /// Path geometry.
    pub data: ArcPath,
    /// Stroke paint.
    pub stroke: Paint,
    /// Stroke width.
    pub stroke_width: f64,
    /// Stroke cap style.
    pub line_cap: LineCap,
    /// Fill paint.
    pub fill: Paint,
}

/// A filled circle.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CircleNode {
    /// Circle center.
    pub center: Point,
    /// Circle radius.
    pub radius: f64,
    /// Fill paint.
    pub fill: Paint,
}

/// A single line of text.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextNode {
    /// The text to draw.
    pub text: String,
    /// Anchor point; `y` is the baseline.
    pub position: Point,
    /// Glyph fill.
    pub fill: Paint,
    /// Glyph outline.
    pub stroke: Paint,
    /// Font size.
    pub font_size: f64,
    /// Alignment relative to `position`.
    pub anchor: TextAnchor,
}

/// A container applying a transform to its children.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Group {
    /// Transform from the children's coordinates to the parent's.
    pub transform: Affine,
    /// Children, drawn in order.
    pub children: Vec<Node>,
}

/// A node in the draw tree.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Node {
    /// A transformed group of nodes.
    Group(Group),
    /// An arc path.
    Path(PathNode),
    /// A circle.
    Circle(CircleNode),
    /// Text.
    Text(TextNode),
}

impl Node {
    /// Visit this node and all of its descendants depth-first, in draw order.
    ///
    /// The callback receives each node together with the combined transform
    /// of its enclosing groups below `self`'s parent.
    pub fn walk(&self, mut f: impl FnMut(&Self, Affine)) {
        self.walk_impl(Affine::IDENTITY, &mut f);
    }

    fn walk_impl(&self, parent: Affine, f: &mut impl FnMut(&Self, Affine)) {
        f(self, parent);
        if let Self::Group(group) = self {
            let transform = parent * group.transform;
            for child in &group.children {
                child.walk_impl(transform, f);
            }
        }
    }
}

impl From<Group> for Node {
    fn from(group: Group) -> Self {
        Self::Group(group)
    }
}

impl From<PathNode> for Node {
    fn from(path: PathNode) -> Self {
        Self::Path(path)
    }
}

impl From<CircleNode> for Node {
    fn from(circle: CircleNode) -> Self {
        Self::Circle(circle)
    }
}

impl From<TextNode> for Node {
    fn from(text: TextNode) -> Self {
        Self::Text(text)
    }
}

/// The root of a draw tree: a drawing surface of a fixed size.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Canvas {
    /// Size of the drawing surface.
    pub size: Size,
    /// Gradients referenced by [`Paint::Gradient`].
    pub defs: Vec<LinearGradient>,
    /// Top-level nodes, drawn in order.
    pub children: Vec<Node>,
}

impl Canvas {
    /// Look up a gradient definition by id.
    pub fn gradient(&self, id: &str) -> Option<&LinearGradient> {
        self.defs.iter().find(|g| g.id == id)
    }

    /// Visit every node depth-first, in draw order, with the combined
    /// transform of its enclosing groups.
    pub fn walk(&self, mut f: impl FnMut(&Node, Affine)) {
        for child in &self.children {
            child.walk_impl(Affine::IDENTITY, &mut f);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Node {
        TextNode {
            text: s.into(),
            position: Point::ORIGIN,
            fill: Paint::None,
            stroke: Paint::None,
            font_size: 12.0,
            anchor: TextAnchor::Middle,
        }
        .into()
    }

    #[test]
    fn walk_accumulates_transforms() {
        let inner = Group {
            transform: Affine::translate(1.0, 2.0),
            children: vec![text("inner")],
        };
        let outer = Node::Group(Group {
            transform: Affine::translate(10.0, 10.0),
            children: vec![text("outer"), inner.into()],
        });

        let mut seen = Vec::new();
        outer.walk(|node, transform| {
            if let Node::Text(t) = node {
                seen.push((t.text.clone(), transform * Point::ORIGIN));
            }
        });
        assert_eq!(
            seen,
            vec![
                ("outer".to_string(), Point::new(10.0, 10.0)),
                ("inner".to_string(), Point::new(11.0, 12.0)),
            ]
        );
    }

    #[test]
    fn gradient_lookup() {
        let canvas = Canvas {
            size: Size::square(10.0),
            defs: vec![LinearGradient {
                id: "g".into(),
                start: Point::new(0.0, 0.0),
                end: Point::new(1.0, 0.0),
                stops: SmallVec::new(),
            }],
            children: Vec::new(),
        };
        assert!(canvas.gradient("g").is_some());
        assert!(canvas.gradient("h").is_none());
    }
}
