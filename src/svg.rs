// Copyright 2025 the progress_ring Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG document output for draw trees.

use alloc::string::String;
use core::fmt::{self, Write};

use crate::{Canvas, LinearGradient, Node, Paint, TextAnchor};

impl Canvas {
    /// Convert the canvas to a standalone SVG document.
    ///
    /// The current implementation doesn't take any special care to produce a
    /// short string (reducing precision, merging transforms).
    pub fn to_svg(&self) -> String {
        let mut result = String::new();
        // Writing into a `String` only fails on allocation failure, which aborts.
        let _ = self.write_svg(&mut result);
        result
    }

    /// Write the canvas as an SVG document into `w`.
    pub fn write_svg(&self, w: &mut impl Write) -> fmt::Result {
        let (width, height) = (self.size.width, self.size.height);
        write!(
            w,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        )?;
        if !self.defs.is_empty() {
            w.write_str("<defs>")?;
            for gradient in &self.defs {
                write_gradient(w, gradient)?;
            }
            w.write_str("</defs>")?;
        }
        for child in &self.children {
            write_node(w, child)?;
        }
        w.write_str("</svg>")
    }
}

impl Node {
    /// Convert this node and its descendants to an SVG fragment.
    pub fn to_svg(&self) -> String {
        let mut result = String::new();
        let _ = write_node(&mut result, self);
        result
    }
}

fn write_gradient(w: &mut impl Write, gradient: &LinearGradient) -> fmt::Result {
    w.write_str(r#"<linearGradient id=""#)?;
    write_escaped(w, &gradient.id)?;
    write!(
        w,
        r#"" x1="{}" y1="{}" x2="{}" y2="{}">"#,
        gradient.start.x, gradient.start.y, gradient.end.x, gradient.end.y
    )?;
    for stop in &gradient.stops {
        write!(w, r#"<stop offset="{}" stop-color=""#, stop.offset)?;
        write_escaped(w, &stop.color)?;
        write!(w, r#"" stop-opacity="{}"/>"#, stop.opacity)?;
    }
    w.write_str("</linearGradient>")
}

fn write_node(w: &mut impl Write, node: &Node) -> fmt::Result {
    match node {
        Node::Group(group) => {
            if group.transform.is_identity() {
                w.write_str("<g>")?;
            } else {
                let [a, b, c, d, e, f] = group.transform.as_coeffs();
                write!(w, r#"<g transform="matrix({a} {b} {c} {d} {e} {f})">"#)?;
            }
            for child in &group.children {
                write_node(w, child)?;
            }
            w.write_str("</g>")
        }
        Node::Path(path) => {
            w.write_str(r#"<path d=""#)?;
            path.data.write_svg(w)?;
            w.write_str(r#"" stroke=""#)?;
            write_paint(w, &path.stroke)?;
            write!(
                w,
                r#"" stroke-width="{}" stroke-linecap="{}" fill=""#,
                path.stroke_width, path.line_cap
            )?;
            write_paint(w, &path.fill)?;
            w.write_str(r#""/>"#)
        }
        Node::Circle(circle) => {
            write!(
                w,
                r#"<circle cx="{}" cy="{}" r="{}" fill=""#,
                circle.center.x, circle.center.y, circle.radius
            )?;
            write_paint(w, &circle.fill)?;
            w.write_str(r#""/>"#)
        }
        Node::Text(text) => {
            write!(w, r#"<text x="{}" y="{}" fill=""#, text.position.x, text.position.y)?;
            write_paint(w, &text.fill)?;
            w.write_str(r#"" stroke=""#)?;
            write_paint(w, &text.stroke)?;
            let anchor = match text.anchor {
                TextAnchor::Start => "start",
                TextAnchor::Middle => "middle",
                TextAnchor::End => "end",
            };
            write!(
                w,
                r#"" text-anchor="{anchor}" font-size="{}">"#,
                text.font_size
            )?;
            write_escaped(w, &text.text)?;
            w.write_str("</text>")
        }
    }
}

fn write_paint(w: &mut impl Write, paint: &Paint) -> fmt::Result {
    match paint {
        Paint::None => w.write_str("none"),
        Paint::Solid(color) => write_escaped(w, color),
        Paint::Gradient(id) => {
            w.write_str("url(#")?;
            write_escaped(w, id)?;
            w.write_str(")")
        }
    }
}

/// Escape text for use in XML character data and double-quoted attributes.
fn write_escaped(w: &mut impl Write, s: &str) -> fmt::Result {
    let mut last = 0;
    for (i, c) in s.char_indices() {
        let rep = match c {
            '&' => "&amp;",
            '<' => "&lt;",
            '>' => "&gt;",
            '"' => "&quot;",
            '\'' => "&apos;",
            _ => continue,
        };
        w.write_str(&s[last..i])?;
        w.write_str(rep)?;
        last = i + c.len_utf8();
    }
    w.write_str(&s[last..])
}

#[cfg(test)]
mod tests {
    use smallvec::smallvec;

    use crate::{
        circle_path, Affine, Canvas, CircleNode, GradientStop, Group, LineCap, LinearGradient,
        Node, Paint, PathNode, Point, Size, TextAnchor, TextNode,
    };

    #[test]
    fn empty_canvas() {
        let canvas = Canvas {
            size: Size::new(120.0, 80.0),
            defs: Vec::new(),
            children: Vec::new(),
        };
        assert_eq!(
            canvas.to_svg(),
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="120" height="80" viewBox="0 0 120 80"></svg>"#
        );
    }

    #[test]
    fn document_structure() {
        let canvas = Canvas {
            size: Size::square(20.0),
            defs: vec![LinearGradient {
                id: "g".into(),
                start: Point::new(0.0, 2.0),
                end: Point::new(1.0, 0.0),
                stops: smallvec![GradientStop::new(0.0, "#fff"), GradientStop::new(0.5, "red")],
            }],
            children: vec![Node::Group(Group {
                transform: Affine::translate(10.0, 10.0),
                children: vec![
                    CircleNode {
                        center: Point::ORIGIN,
                        radius: 5.0,
                        fill: Paint::gradient("g"),
                    }
                    .into(),
                    PathNode {
                        data: circle_path(Point::ORIGIN, 0.0, 0.0, 0.0),
                        stroke: Paint::solid("black"),
                        stroke_width: 2.0,
                        line_cap: LineCap::Butt,
                        fill: Paint::None,
                    }
                    .into(),
                ],
            })],
        };
        assert_eq!(
            canvas.to_svg(),
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 20 20">"#,
                r#"<defs><linearGradient id="g" x1="0" y1="2" x2="1" y2="0">"#,
                r##"<stop offset="0" stop-color="#fff" stop-opacity="1"/>"##,
                r#"<stop offset="0.5" stop-color="red" stop-opacity="1"/>"#,
                r#"</linearGradient></defs>"#,
                r#"<g transform="matrix(1 0 0 1 10 10)">"#,
                r##"<circle cx="0" cy="0" r="5" fill="url(#g)"/>"##,
                r#"<path d="M 0 0 A 0 0 0 0 0 0 0" stroke="black" stroke-width="2" stroke-linecap="butt" fill="none"/>"#,
                r#"</g></svg>"#,
            )
        );
    }

    #[test]
    fn text_is_escaped() {
        let node = Node::Text(TextNode {
            text: "<50% & \"more\">".into(),
            position: Point::new(0.0, -8.0),
            fill: Paint::solid("white"),
            stroke: Paint::solid("white"),
            font_size: 12.0,
            anchor: TextAnchor::Middle,
        });
        assert_eq!(
            node.to_svg(),
            r#"<text x="0" y="-8" fill="white" stroke="white" text-anchor="middle" font-size="12">&lt;50% &amp; &quot;more&quot;&gt;</text>"#
        );
    }

    #[test]
    fn identity_group_has_no_transform() {
        let node = Node::Group(Group::default());
        assert_eq!(node.to_svg(), "<g></g>");
    }
}
