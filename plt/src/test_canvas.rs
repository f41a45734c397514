// Copyright 2025 the plt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A canvas that records what is drawn on it.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kurbo::{Affine, Point};

use crate::{Canvas, LineStyle, TextAlign, TextStyle};

/// One recorded canvas call, in canvas coordinates.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Op {
    LineStyle(LineStyle),
    /// Font size of the selected text style.
    TextStyle(f64),
    Line(Vec<Point>),
    Text {
        at: Point,
        align: TextAlign,
        text: String,
    },
    Push,
    Pop,
    Rotate(f64),
}

/// Records every call, applying the current transform to positions.
#[derive(Debug)]
pub(crate) struct RecordingCanvas {
    dpi: f64,
    pub(crate) ops: Vec<Op>,
    transform: Affine,
    saved: Vec<Affine>,
}

impl RecordingCanvas {
    pub(crate) fn new(dpi: f64) -> Self {
        Self {
            dpi,
            ops: Vec::new(),
            transform: Affine::IDENTITY,
            saved: Vec::new(),
        }
    }

    pub(crate) fn lines(&self) -> Vec<Vec<Point>> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Line(points) => Some(points.clone()),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn texts(&self) -> Vec<(Point, TextAlign, String)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text { at, align, text } => Some((*at, *align, text.clone())),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn dpi(&self) -> f64 {
        self.dpi
    }

    fn set_line_style(&mut self, style: &LineStyle) {
        self.ops.push(Op::LineStyle(style.clone()));
    }

    fn set_text_style(&mut self, style: &TextStyle) {
        self.ops.push(Op::TextStyle(style.font.size()));
    }

    fn line(&mut self, points: &[Point]) {
        let points = points.iter().map(|p| self.transform * *p).collect();
        self.ops.push(Op::Line(points));
    }

    fn text(&mut self, at: Point, align: TextAlign, text: &str) {
        self.ops.push(Op::Text {
            at: self.transform * at,
            align,
            text: text.to_string(),
        });
    }

    fn push(&mut self) {
        self.saved.push(self.transform);
        self.ops.push(Op::Push);
    }

    fn pop(&mut self) {
        self.transform = self.saved.pop().unwrap_or(Affine::IDENTITY);
        self.ops.push(Op::Pop);
    }

    fn rotate(&mut self, radians: f64) {
        self.transform *= Affine::rotate(radians);
        self.ops.push(Op::Rotate(radians));
    }
}
