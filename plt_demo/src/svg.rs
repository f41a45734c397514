// Copyright 2025 the plt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG canvas for `plt_demo`.

use std::fmt::Write as _;

use kurbo::{Affine, BezPath, Point, Size};
use peniko::Color;
use peniko::color::palette::css;
use plt::{Canvas, LineStyle, POINTS_PER_INCH, TextAlign, TextStyle};
use smallvec::SmallVec;

/// A transform plus the rotation it contains, in radians.
#[derive(Clone, Copy, Debug)]
struct State {
    transform: Affine,
    rotation: f64,
}

impl State {
    const IDENTITY: Self = Self {
        transform: Affine::IDENTITY,
        rotation: 0.0,
    };
}

/// Writes canvas calls out as SVG elements.
///
/// The canvas is y-up with the origin at the bottom-left; SVG is y-down, so
/// every position is flipped on the way out.
#[derive(Debug)]
pub(crate) struct SvgCanvas {
    dpi: f64,
    size: Size,
    body: String,
    state: State,
    saved: SmallVec<[State; 4]>,
    line_color: Color,
    line_width: f64,
    text_color: Color,
    font_size: f64,
    font_family: &'static str,
}

impl SvgCanvas {
    /// A canvas of `size` dots at `dpi` dots per inch.
    pub(crate) fn new(size: Size, dpi: f64) -> Self {
        Self {
            dpi,
            size,
            body: String::new(),
            state: State::IDENTITY,
            saved: SmallVec::new(),
            line_color: css::BLACK,
            line_width: 1.0,
            text_color: css::BLACK,
            font_size: 12.0,
            font_family: "serif",
        }
    }

    fn to_svg_space(&self, p: Point) -> Point {
        let p = self.state.transform * p;
        Point::new(p.x, self.size.height - p.y)
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let mut out = String::new();
        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        let _ = writeln!(
            out,
            r#"viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#,
            w = self.size.width,
            h = self.size.height,
        );
        out.push_str(r##"<rect width="100%" height="100%" fill="#ffffff"/>"##);
        out.push('\n');
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }
}

impl Canvas for SvgCanvas {
    fn dpi(&self) -> f64 {
        self.dpi
    }

    fn set_line_style(&mut self, style: &LineStyle) {
        self.line_color = style.color;
        self.line_width = style.width * self.dpi;
    }

    fn set_text_style(&mut self, style: &TextStyle) {
        self.text_color = style.color;
        self.font_size = style.font.size() / POINTS_PER_INCH * self.dpi;
        self.font_family = css_family(style.font.name());
    }

    fn line(&mut self, points: &[Point]) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        let mut path = BezPath::new();
        path.move_to(self.to_svg_space(*first));
        for p in rest {
            path.line_to(self.to_svg_space(*p));
        }
        let _ = write!(self.body, r#"<path d="{}" fill="none""#, path.to_svg());
        write_paint_attr(&mut self.body, "stroke", self.line_color);
        let _ = writeln!(self.body, r#" stroke-width="{}"/>"#, self.line_width);
    }

    fn text(&mut self, at: Point, align: TextAlign, text: &str) {
        if text.is_empty() {
            return;
        }
        let pos = self.to_svg_space(at);
        let _ = write!(
            self.body,
            r#"<text x="{}" y="{}" font-size="{}" font-family="{}" text-anchor="{}" dominant-baseline="{}""#,
            pos.x,
            pos.y,
            self.font_size,
            self.font_family,
            text_anchor(align.x),
            dominant_baseline(align.y),
        );
        if self.state.rotation != 0.0 {
            // SVG angles grow clockwise.
            let _ = write!(
                self.body,
                r#" transform="rotate({} {} {})""#,
                -self.state.rotation.to_degrees(),
                pos.x,
                pos.y
            );
        }
        write_paint_attr(&mut self.body, "fill", self.text_color);
        self.body.push('>');
        self.body.push_str(&escape_xml(text));
        self.body.push_str("</text>\n");
    }

    fn push(&mut self) {
        self.saved.push(self.state);
    }

    fn pop(&mut self) {
        self.state = self.saved.pop().unwrap_or(State::IDENTITY);
    }

    fn rotate(&mut self, radians: f64) {
        self.state.transform *= Affine::rotate(radians);
        self.state.rotation += radians;
    }
}

fn css_family(font_name: &str) -> &'static str {
    match font_name {
        "sans-serif" | "Helvetica" => "sans-serif",
        "monospace" | "Courier" => "monospace",
        _ => "serif",
    }
}

fn text_anchor(x_align: f64) -> &'static str {
    if x_align <= -0.75 {
        "end"
    } else if x_align <= -0.25 {
        "middle"
    } else {
        "start"
    }
}

fn dominant_baseline(y_align: f64) -> &'static str {
    if y_align <= -0.75 {
        "hanging"
    } else if y_align <= -0.25 {
        "central"
    } else {
        "alphabetic"
    }
}

fn write_paint_attr(out: &mut String, name: &str, color: Color) {
    let rgba = color.to_rgba8();
    let _ = write!(
        out,
        r##" {name}="#{:02x}{:02x}{:02x}""##,
        rgba.r, rgba.g, rgba.b
    );
    if rgba.a != 255 {
        let _ = write!(out, r#" {name}-opacity="{}""#, f64::from(rgba.a) / 255.0);
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
