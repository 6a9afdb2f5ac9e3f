use log::trace;

use crate::sink::DrawingSink;
use crate::style::{Color, FillRule, LineCap, LineJoin, StrokeStyle};

impl Into<cairo::LineCap> for LineCap {
    fn into(self) -> cairo::LineCap {
	match self {
	    LineCap::Butt => cairo::LineCap::Butt,
	    LineCap::Round => cairo::LineCap::Round,
	    LineCap::Square => cairo::LineCap::Square,
	}
    }
}

impl Into<cairo::LineJoin> for LineJoin {
    fn into(self) -> cairo::LineJoin {
	match self.supported() {
	    LineJoin::Bevel => cairo::LineJoin::Bevel,
	    LineJoin::Round => cairo::LineJoin::Round,
	    _ => cairo::LineJoin::Miter,
	}
    }
}

impl Into<cairo::FillRule> for FillRule {
    fn into(self) -> cairo::FillRule {
	match self {
	    FillRule::NonZero => cairo::FillRule::Winding,
	    FillRule::EvenOdd => cairo::FillRule::EvenOdd,
	}
    }
}

/// Draws onto a cairo context.
///
/// Fill and stroke keep the path, so a path may be filled and then stroked;
/// the next path starts with a fresh one.
pub struct CairoSink<'a> {
    cr: &'a cairo::Context,
}

impl<'a> CairoSink<'a> {
    pub fn new(cr: &'a cairo::Context) -> Self {
	CairoSink { cr }
    }

    fn set_color(&self, color: Color) {
	self.cr.set_source_rgba(color.red, color.green, color.blue, color.alpha);
    }
}

impl<'a> DrawingSink for CairoSink<'a> {
    fn begin_path(&mut self) {
	self.cr.new_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
	self.cr.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
	self.cr.line_to(x, y);
    }

    fn quadratic_curve_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
	// cairo has no quadratic primitive; raise it to the equivalent cubic.
	let (x0, y0) = if self.cr.has_current_point() {
	    self.cr.get_current_point()
	} else {
	    (cx, cy)
	};

	self.cr.curve_to(x0 + 2.0 / 3.0 * (cx - x0), y0 + 2.0 / 3.0 * (cy - y0),
			 x + 2.0 / 3.0 * (cx - x), y + 2.0 / 3.0 * (cy - y),
			 x, y);
    }

    fn cubic_curve_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) {
	self.cr.curve_to(c1x, c1y, c2x, c2y, x, y);
    }

    fn arc(&mut self, cx: f64, cy: f64, rx: f64, ry: f64, rotation: f64, start_angle: f64, sweep_angle: f64) {
	trace!("arc around ({}, {}), {} degrees from {}", cx, cy, sweep_angle, start_angle);

	let start = start_angle.to_radians();
	let end = (start_angle + sweep_angle).to_radians();

	let mat = self.cr.get_matrix();
	self.cr.translate(cx, cy);
	self.cr.rotate(rotation.to_radians());
	self.cr.scale(rx, ry);

	if sweep_angle < 0.0 {
	    self.cr.arc_negative(0.0, 0.0, 1.0, start, end);
	} else {
	    self.cr.arc(0.0, 0.0, 1.0, start, end);
	}

	self.cr.set_matrix(mat);
    }

    fn close_path(&mut self) {
	self.cr.close_path();
    }

    fn fill(&mut self, color: Color, rule: FillRule) {
	self.set_color(color);
	self.cr.set_fill_rule(rule.into());
	self.cr.fill_preserve();
    }

    fn stroke(&mut self, color: Color, style: &StrokeStyle) {
	self.set_color(color);
	self.cr.set_line_width(style.width);
	self.cr.set_line_cap(style.line_cap.into());
	self.cr.set_line_join(style.line_join.into());
	self.cr.stroke_preserve();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::interpret;
    use crate::style::{Paint, PathStyle};

    fn surface() -> cairo::ImageSurface {
	cairo::ImageSurface::create(cairo::Format::ARgb32, 20, 20).unwrap()
    }

    #[test]
    fn arc_restores_matrix() {
	let surface = surface();
	let cr = cairo::Context::new(&surface);
	let before = cr.user_to_device(1.0, 2.0);

	let mut sink = CairoSink::new(&cr);
	sink.move_to(10.0, 8.0);
	sink.arc(10.0, 10.0, 5.0, 2.0, 30.0, -90.0, 180.0);

	assert_eq!(cr.user_to_device(1.0, 2.0), before);

	// The end point lies on the rotated ellipse, 90 degrees from its x-axis.
	let (x, y) = cr.get_current_point();
	assert!((x - 9.0).abs() < 1e-6);
	assert!((y - (10.0 + 3f64.sqrt())).abs() < 1e-6);
    }

    #[test]
    fn quadratic_ends_at_target() {
	let surface = surface();
	let cr = cairo::Context::new(&surface);

	let mut sink = CairoSink::new(&cr);
	sink.move_to(0.0, 0.0);
	sink.quadratic_curve_to(5.0, 10.0, 10.0, 0.0);

	assert_eq!(cr.get_current_point(), (10.0, 0.0));
    }

    #[test]
    fn fills_pixels() {
	let mut surface = surface();
	{
	    let cr = cairo::Context::new(&surface);
	    let style = PathStyle::new().with_fill(Paint::Color(Color::WHITE));

	    interpret("M0 0 H20 V20 H0 Z", &mut CairoSink::new(&cr), &style).unwrap();
	}

	surface.flush();
	let data = surface.get_data().unwrap();
	assert!(data.iter().all(|&b| b == 0xff));
    }
}
