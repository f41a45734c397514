// Copyright 2025 the plt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis layout and tick generation for 2D plots.
//!
//! This crate turns a numeric data range into a drawable axis:
//! - **Ticks** are placed by a pluggable [`TickGenerator`].
//! - **Layout** measures the room an [`Axis`] needs (label text, tick labels,
//!   tick marks, line and padding) from real font metrics, before drawing.
//! - **Drawing** renders the axis into a [`DrawArea`] of any [`Canvas`], either
//!   horizontally or vertically, and exposes the data-to-drawing transforms
//!   ([`Axis::x`], [`Axis::y`]) used to place data.
//!
//! Font loading and the vector backend are out of scope; they are reached
//! through [`FontProvider`] and [`Canvas`].
//!
//! ```
//! use kurbo::Rect;
//! use plt::{Axis, Canvas, DrawArea};
//!
//! fn bottom_axis(canvas: &mut dyn Canvas, data: &[f64], width: f64) {
//!     let mut axis = Axis::new().with_label("time (s)");
//!     axis.include_all(data.iter().copied());
//!     let height = axis.height() * canvas.dpi();
//!     let mut da = DrawArea::from_rect(canvas, Rect::new(0.0, 0.0, width, height));
//!     axis.draw_horizontal(&mut da);
//! }
//! ```

#![no_std]

extern crate alloc;

mod axis;
mod draw;
mod format;
mod style;
#[cfg(test)]
mod test_canvas;
mod tick;
mod tick_layout;

pub use axis::{Axis, Orientation};
pub use draw::{Canvas, DrawArea, TextAlign};
pub use format::format_general;
pub use plt_text::{
    Font, FontError, FontExtents, FontFace, FontProvider, HeuristicFonts, POINTS_PER_INCH,
};
pub use style::{DEFAULT_FONT, HAIRLINE, LineStyle, TextStyle};
pub use tick::{ConstantTicks, DefaultTicks, Tick, TickGenerator};
pub use tick_layout::TickLayout;
