// Copyright 2025 the progress_ring Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The circular progress widget.

use alloc::{format, string::String, vec, vec::Vec};

use smallvec::smallvec;

use crate::common::round_half_up;
use crate::{
    circle_path, Affine, ArcPath, Canvas, CircleNode, GradientStop, Group, LineCap,
    LinearGradient, Node, Paint, PathNode, Point, Size, TextAnchor, TextNode,
};

/// Space added around the ring on every side of the canvas, so that round
/// caps and the percentage bubble are not clipped.
pub const CANVAS_MARGIN: f64 = 10.0;

/// Id of the gradient painting the foreground arc.
pub const GRADIENT_ID: &str = "greenGradient";

/// Radius of the percentage bubble.
pub const BUBBLE_RADIUS: f64 = 17.0;

/// Fill color of the percentage bubble.
pub const BUBBLE_COLOR: &str = "#4A90E2";

const LABEL_COLOR: &str = "white";
const LABEL_FONT_SIZE: f64 = 12.0;
const LABEL_OFFSET_Y: f64 = -8.0;

/// Restrict a fill percentage to `0.0..=100.0`.
///
/// NaN stays NaN, which renders as nothing.
///
/// # Examples
///
/// ```
/// use progress_ring::clamp_fill;
///
/// assert_eq!(clamp_fill(-5.0), 0.0);
/// assert_eq!(clamp_fill(42.0), 42.0);
/// assert_eq!(clamp_fill(150.0), 100.0);
/// ```
#[inline]
pub fn clamp_fill(fill: f64) -> f64 {
    fill.clamp(0.0, 100.0)
}

/// The label shown in the percentage bubble: the fill rounded to an integer,
/// followed by `%`.
///
/// The fill is *not* clamped, so `150.0` gives `"150%"` even though the arc
/// stops at 100%. Magnitudes of `1e21` and above print in exponent form with an
/// explicit sign, `1e+21%`.
///
/// # Examples
///
/// ```
/// use progress_ring::percent_label;
///
/// assert_eq!(percent_label(49.5), "50%");
/// assert_eq!(percent_label(150.0), "150%");
/// assert_eq!(percent_label(-3.2), "-3%");
/// ```
pub fn percent_label(fill: f64) -> String {
    let rounded = round_half_up(fill);
    if rounded.is_infinite() {
        let sign = if rounded < 0.0 { "-" } else { "" };
        format!("{sign}Infinity%")
    } else if rounded.abs() >= 1e21 {
        // `{:e}` is the shortest round-trip mantissa; the exponent is always positive here.
        let exp = format!("{rounded:e}");
        format!("{}%", exp.replacen('e', "e+", 1))
    } else {
        format!("{rounded}%")
    }
}

/// The configuration of one circular progress ring.
///
/// A ring is cheap plain data: build one per render from the current state
/// and call [`render`](Self::render).
///
/// # Examples
///
/// ```
/// use progress_ring::{LineCap, ProgressRing};
///
/// let frame = ProgressRing::new(100.0, 10.0, 50.0)
///     .with_background_color(Some("#3d5875".into()))
///     .with_line_cap(LineCap::Butt)
///     .render();
/// assert!(frame.canvas.to_svg().starts_with("<svg"));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProgressRing {
    /// Overall bounding dimension of the ring.
    pub size: f64,
    /// Stroke width of the foreground arc.
    pub width: f64,
    /// Stroke width of the background track; `0` means [`width`](Self::width).
    #[cfg_attr(feature = "serde", serde(default))]
    pub background_width: f64,
    /// Percentage complete. Any value is accepted.
    pub fill: f64,
    /// Tint color.
    ///
    /// Accepted for compatibility but not drawn: the foreground arc is always
    /// painted with the built-in gradient.
    #[cfg_attr(feature = "serde", serde(default = "default_color"))]
    pub tint_color: Option<String>,
    /// Color of the background track. `None` or an empty string omits the
    /// track.
    #[cfg_attr(feature = "serde", serde(default = "default_color"))]
    pub background_color: Option<String>,
    /// Angular offset of the ring start, in degrees clockwise.
    #[cfg_attr(feature = "serde", serde(default = "default_rotation"))]
    pub rotation: f64,
    /// Cap style of both strokes.
    #[cfg_attr(feature = "serde", serde(default))]
    pub line_cap: LineCap,
    /// Angular span of a full ring, in degrees. Less than 360 gives a gauge.
    #[cfg_attr(feature = "serde", serde(default = "default_arc_sweep_angle"))]
    pub arc_sweep_angle: f64,
}

fn default_color() -> Option<String> {
    Some("black".into())
}

const fn default_rotation() -> f64 {
    90.0
}

const fn default_arc_sweep_angle() -> f64 {
    360.0
}

/// The arc geometry of a ring, in ring coordinates (before rotation and the
/// canvas margin are applied).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingGeometry {
    /// Center of the ring.
    pub center: Point,
    /// Radius of the stroke centerline.
    pub radius: f64,
    /// Span of the background track, in degrees.
    pub background_sweep: f64,
    /// Span of the foreground arc, in degrees.
    pub foreground_sweep: f64,
    /// The background track.
    pub background: ArcPath,
    /// The foreground arc.
    pub foreground: ArcPath,
}

/// The area inside the ring where caller content is laid out.
#[derive(Clone, Debug, PartialEq)]
pub struct Overlay<C> {
    /// Top left corner, relative to the ring's layout origin.
    pub origin: Point,
    /// Size of the square content area.
    pub size: Size,
    /// Corner radius clipping the area to a circle.
    pub corner_radius: f64,
    /// Caller content, to be centered both ways within the area.
    pub content: C,
}

/// The output of one render pass.
#[derive(Clone, Debug, PartialEq)]
pub struct RingFrame<C = ()> {
    /// The vector drawing.
    pub canvas: Canvas,
    /// Caller content laid over the drawing, if any.
    pub overlay: Option<Overlay<C>>,
}

impl ProgressRing {
    /// Create a ring with the default styling.
    ///
    /// Defaults: black tint and background, background width equal to
    /// `width`, rotation 90°, round caps, full 360° sweep.
    pub fn new(size: f64, width: f64, fill: f64) -> Self {
        Self {
            size,
            width,
            background_width: 0.0,
            fill,
            tint_color: default_color(),
            background_color: default_color(),
            rotation: default_rotation(),
            line_cap: LineCap::Round,
            arc_sweep_angle: default_arc_sweep_angle(),
        }
    }

    /// Builder method for setting the fill percentage.
    #[must_use]
    pub fn with_fill(mut self, fill: f64) -> Self {
        self.fill = fill;
        self
    }

    /// Builder method for setting the background track width.
    #[must_use]
    pub fn with_background_width(mut self, width: f64) -> Self {
        self.background_width = width;
        self
    }

    /// Builder method for setting the tint color.
    #[must_use]
    pub fn with_tint_color(mut self, color: Option<String>) -> Self {
        self.tint_color = color;
        self
    }

    /// Builder method for setting the background track color.
    #[must_use]
    pub fn with_background_color(mut self, color: Option<String>) -> Self {
        self.background_color = color;
        self
    }

    /// Builder method for setting the rotation, in degrees.
    #[must_use]
    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    /// Builder method for setting the cap style.
    #[must_use]
    pub fn with_line_cap(mut self, cap: LineCap) -> Self {
        self.line_cap = cap;
        self
    }

    /// Builder method for setting the angular span of a full ring.
    #[must_use]
    pub fn with_arc_sweep_angle(mut self, angle: f64) -> Self {
        self.arc_sweep_angle = angle;
        self
    }

    /// The stroke width actually used for the background track.
    pub fn effective_background_width(&self) -> f64 {
        if self.background_width == 0.0 || self.background_width.is_nan() {
            self.width
        } else {
            self.background_width
        }
    }

    /// The background color, if the track should be drawn at all.
    fn track_color(&self) -> Option<&str> {
        self.background_color.as_deref().filter(|c| !c.is_empty())
    }

    /// Compute the arc geometry for the current configuration.
    pub fn geometry(&self) -> RingGeometry {
        let center = Point::new(self.size / 2.0, self.size / 2.0);
        let radius = self.size / 2.0 - self.width / 2.0;
        let background_sweep = self.arc_sweep_angle;
        let foreground_sweep = self.arc_sweep_angle * clamp_fill(self.fill) / 100.0;
        RingGeometry {
            center,
            radius,
            background_sweep,
            foreground_sweep,
            background: circle_path(center, radius, 0.0, background_sweep),
            foreground: circle_path(center, radius, 0.0, foreground_sweep),
        }
    }

    /// Render the ring without caller content.
    pub fn render(&self) -> RingFrame {
        RingFrame {
            canvas: self.canvas(),
            overlay: None,
        }
    }

    /// Render the ring, laying out the content produced by `children` inside
    /// it.
    ///
    /// `children` is called once, with the unclamped fill value.
    pub fn render_with_children<C>(&self, children: impl FnOnce(f64) -> C) -> RingFrame<C> {
        let side = self.size - 2.0 * self.width;
        RingFrame {
            canvas: self.canvas(),
            overlay: Some(Overlay {
                origin: Point::new(self.width, self.width),
                size: Size::square(side),
                corner_radius: side / 2.0,
                content: children(self.fill),
            }),
        }
    }

    fn canvas(&self) -> Canvas {
        let geometry = self.geometry();
        let mut ring: Vec<Node> = Vec::with_capacity(3);
        if let Some(color) = self.track_color() {
            ring.push(
                PathNode {
                    data: geometry.background,
                    stroke: Paint::solid(color),
                    stroke_width: self.effective_background_width(),
                    line_cap: self.line_cap,
                    fill: Paint::None,
                }
                .into(),
            );
        }
        ring.push(
            PathNode {
                data: geometry.foreground,
                stroke: Paint::gradient(GRADIENT_ID),
                stroke_width: self.width,
                line_cap: self.line_cap,
                fill: Paint::None,
            }
            .into(),
        );
        ring.push(percentage_bubble(
            self.fill,
            geometry.foreground.start,
            self.rotation,
        ));

        let transform = Affine::translate(CANVAS_MARGIN, CANVAS_MARGIN)
            * Affine::rotate_about(self.rotation.to_radians(), geometry.center);
        Canvas {
            size: Size::square(self.size + 2.0 * CANVAS_MARGIN),
            defs: vec![progress_gradient()],
            children: vec![Node::Group(Group {
                transform,
                children: ring,
            })],
        }
    }
}

/// The label bubble: a filled circle with the rounded fill percentage,
/// centered on `position` and counter-rotated so it reads upright inside a
/// ring rotated by `rotation` degrees.
pub fn percentage_bubble(fill: f64, position: Point, rotation: f64) -> Node {
    let transform =
        Affine::translate(position.x, position.y) * Affine::rotate(-rotation.to_radians());
    Node::Group(Group {
        transform,
        children: vec![
            CircleNode {
                center: Point::ORIGIN,
                radius: BUBBLE_RADIUS,
                fill: Paint::solid(BUBBLE_COLOR),
            }
            .into(),
            TextNode {
                text: percent_label(fill),
                position: Point::new(0.0, LABEL_OFFSET_Y),
                fill: Paint::solid(LABEL_COLOR),
                stroke: Paint::solid(LABEL_COLOR),
                font_size: LABEL_FONT_SIZE,
                anchor: TextAnchor::Middle,
            }
            .into(),
        ],
    })
}

/// The gradient painting the foreground arc.
pub fn progress_gradient() -> LinearGradient {
    LinearGradient {
        id: GRADIENT_ID.into(),
        start: Point::new(0.0, 2.0),
        end: Point::new(1.0, 0.0),
        stops: smallvec![
            GradientStop::new(0.0, "#4A90E2"),
            GradientStop::new(0.7, "#1F69C1"),
            GradientStop::new(1.0, "#19208C"),
        ],
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let ring: ProgressRing =
            serde_json::from_str(r#"{"size":100,"width":10,"fill":50}"#).unwrap();
        assert_eq!(ring, ProgressRing::new(100.0, 10.0, 50.0));
        assert_eq!(ring.tint_color.as_deref(), Some("black"));
        assert_eq!(ring.background_color.as_deref(), Some("black"));
        assert_eq!(ring.rotation, 90.0);
        assert_eq!(ring.line_cap, LineCap::Round);
        assert_eq!(ring.arc_sweep_angle, 360.0);
        assert_eq!(ring.background_width, 0.0);
    }

    #[test]
    fn explicit_fields_override_defaults() {
        let ring: ProgressRing = serde_json::from_str(
            r#"{"size":80,"width":6,"fill":20,"line_cap":"butt","background_color":null,"arc_sweep_angle":270}"#,
        )
        .unwrap();
        assert_eq!(ring.line_cap, LineCap::Butt);
        assert_eq!(ring.background_color, None);
        assert_eq!(ring.arc_sweep_angle, 270.0);
        assert!(serde_json::from_str::<ProgressRing>(
            r#"{"size":80,"width":6,"fill":20,"line_cap":"bevel"}"#
        )
        .is_err());
    }

    #[test]
    fn config_roundtrips() {
        let ring = ProgressRing::new(120.0, 12.0, 75.0)
            .with_rotation(225.0)
            .with_line_cap(LineCap::Square)
            .with_tint_color(None);
        let json = serde_json::to_string(&ring).unwrap();
        assert!(json.contains(r#""line_cap":"square""#));
        assert_eq!(serde_json::from_str::<ProgressRing>(&json).unwrap(), ring);
    }
}
