// Copyright 2025 the plt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis demos for `plt`.
//!
//! Each demo measures a horizontal and a vertical axis, reserves their space
//! around a data area, draws both axes and the data, and writes an SVG file.
//! Set `RUST_LOG=plt=trace` to see the measurements.

mod svg;

use kurbo::{Point, Rect, Size};
use peniko::color::palette::css;
use plt::{
    Axis, ConstantTicks, DrawArea, FontError, FontProvider, LineStyle, Orientation, Tick,
};
use tracing_subscriber::EnvFilter;

/// Output resolution of the demo SVGs.
const DPI: f64 = 96.0;

/// Page size in inches.
const PAGE: Size = Size::new(5.0, 3.5);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let fonts = demo_fonts();
    for (name, svg) in [
        ("plt_demo_sine.svg", sine_demo(fonts.as_ref())?),
        ("plt_demo_categories.svg", categories_demo(fonts.as_ref())?),
    ] {
        std::fs::write(name, svg)?;
        println!("wrote {name}");
    }
    Ok(())
}

fn demo_fonts() -> Box<dyn FontProvider> {
    #[cfg(feature = "parley")]
    {
        Box::new(plt_text_parley::ParleyFonts::new())
    }

    #[cfg(not(feature = "parley"))]
    {
        Box::new(plt::HeuristicFonts)
    }
}

fn sine_demo(fonts: &dyn FontProvider) -> Result<String, FontError> {
    let xs: Vec<f64> = (0..=200_i32).map(|i| f64::from(i) * 0.05).collect();
    let ys: Vec<f64> = xs.iter().map(|x| (-0.3 * x).exp() * (2.0 * x).sin()).collect();

    let mut x_axis = Axis::with_fonts(fonts)?.with_label("time (s)");
    x_axis.include_all(xs.iter().copied());
    let mut y_axis = Axis::with_fonts(fonts)?.with_label("amplitude");
    y_axis.include_all(ys.iter().copied());

    Ok(render(&x_axis, &y_axis, &xs, &ys))
}

fn categories_demo(fonts: &dyn FontProvider) -> Result<String, FontError> {
    let counts = [12.0, 30.0, 21.0, 7.0];
    let names = ["north", "east", "south", "west"];

    let categories: ConstantTicks = names
        .iter()
        .enumerate()
        .map(|(i, name)| Tick::major(i as f64, *name))
        .collect();
    let x_axis = Axis::with_fonts(fonts)?
        .with_range(-0.5, names.len() as f64 - 0.5)
        .with_label("region")
        .with_tick_generator(categories);

    let mut y_axis = Axis::with_fonts(fonts)?.with_label("orders");
    y_axis.include(0.0);
    y_axis.include_all(counts);

    let xs: Vec<f64> = (0..counts.len()).map(|i| i as f64).collect();
    Ok(render(&x_axis, &y_axis, &xs, &counts))
}

/// Lays out both axes around a data area and draws them with the data as a polyline.
fn render(x_axis: &Axis, y_axis: &Axis, xs: &[f64], ys: &[f64]) -> String {
    let page = Size::new(PAGE.width * DPI, PAGE.height * DPI);
    let left = y_axis.size(Orientation::Vertical) * DPI;
    let bottom = x_axis.size(Orientation::Horizontal) * DPI;
    tracing::debug!(left, bottom, "reserved axis space in dots");

    let mut canvas = svg::SvgCanvas::new(page, DPI);
    let mut da = DrawArea::new(&mut canvas, Point::ZERO, page);

    let data = Rect::new(left, bottom, page.width, page.height);
    x_axis.draw(
        &mut da.sub_area(Rect::new(left, 0.0, page.width, bottom)),
        Orientation::Horizontal,
    );
    y_axis.draw(
        &mut da.sub_area(Rect::new(0.0, bottom, left, page.height)),
        Orientation::Vertical,
    );

    let mut data_area = da.sub_area(data);
    let points: Vec<Point> = xs
        .iter()
        .zip(ys)
        .map(|(&x, &y)| Point::new(x_axis.x(&data_area, x), y_axis.y(&data_area, y)))
        .collect();
    data_area.set_line_style(&LineStyle::solid(css::STEEL_BLUE, 1.0 / 48.0));
    data_area.line(&points);

    canvas.to_svg_string()
}
