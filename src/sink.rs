use crate::style::{Color, FillRule, StrokeStyle};

/// A drawing surface that path geometry is emitted into.
///
/// Calls arrive in path order with absolute coordinates. Arc angles are in
/// degrees; an arc lies on the ellipse centered at `(cx, cy)` with radii
/// `rx`/`ry` whose x-axis is rotated by `rotation`, and the sink is expected
/// to apply that rotation as a transform around the center.
pub trait DrawingSink {
    /// Called once before the geometry of a path, after it parsed.
    fn begin_path(&mut self) {}

    fn move_to(&mut self, x: f64, y: f64);

    fn line_to(&mut self, x: f64, y: f64);

    fn quadratic_curve_to(&mut self, cx: f64, cy: f64, x: f64, y: f64);

    fn cubic_curve_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64);

    fn arc(&mut self, cx: f64, cy: f64, rx: f64, ry: f64, rotation: f64, start_angle: f64, sweep_angle: f64);

    fn close_path(&mut self);

    fn fill(&mut self, color: Color, rule: FillRule);

    fn stroke(&mut self, color: Color, style: &StrokeStyle);
}

impl<S: DrawingSink + ?Sized> DrawingSink for &mut S {
    fn begin_path(&mut self) {
	(**self).begin_path()
    }

    fn move_to(&mut self, x: f64, y: f64) {
	(**self).move_to(x, y)
    }

    fn line_to(&mut self, x: f64, y: f64) {
	(**self).line_to(x, y)
    }

    fn quadratic_curve_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
	(**self).quadratic_curve_to(cx, cy, x, y)
    }

    fn cubic_curve_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) {
	(**self).cubic_curve_to(c1x, c1y, c2x, c2y, x, y)
    }

    fn arc(&mut self, cx: f64, cy: f64, rx: f64, ry: f64, rotation: f64, start_angle: f64, sweep_angle: f64) {
	(**self).arc(cx, cy, rx, ry, rotation, start_angle, sweep_angle)
    }

    fn close_path(&mut self) {
	(**self).close_path()
    }

    fn fill(&mut self, color: Color, rule: FillRule) {
	(**self).fill(color, rule)
    }

    fn stroke(&mut self, color: Color, style: &StrokeStyle) {
	(**self).stroke(color, style)
    }
}

/// One recorded sink call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawOp {
    MoveTo(f64, f64),
    LineTo(f64, f64),
    QuadraticCurveTo { cx: f64, cy: f64, x: f64, y: f64 },
    CubicCurveTo { c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64 },
    Arc { cx: f64, cy: f64, rx: f64, ry: f64, rotation: f64, start_angle: f64, sweep_angle: f64 },
    ClosePath,
    Fill(Color, FillRule),
    Stroke(Color, StrokeStyle),
}

/// A sink that buffers calls for inspection or later replay.
///
/// Interpreting into a `Recorder` first and replaying only on success keeps a
/// live surface untouched by anything that fails part way.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    ops: Vec<DrawOp>,
}

impl Recorder {
    pub fn new() -> Self {
	Recorder::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
	&self.ops
    }

    pub fn into_ops(self) -> Vec<DrawOp> {
	self.ops
    }

    pub fn is_empty(&self) -> bool {
	self.ops.is_empty()
    }

    pub fn clear(&mut self) {
	self.ops.clear();
    }

    pub fn replay<S: DrawingSink + ?Sized>(&self, sink: &mut S) {
	sink.begin_path();

	for op in &self.ops {
	    match *op {
		DrawOp::MoveTo(x, y) => sink.move_to(x, y),
		DrawOp::LineTo(x, y) => sink.line_to(x, y),
		DrawOp::QuadraticCurveTo { cx, cy, x, y } => sink.quadratic_curve_to(cx, cy, x, y),
		DrawOp::CubicCurveTo { c1x, c1y, c2x, c2y, x, y } => sink.cubic_curve_to(c1x, c1y, c2x, c2y, x, y),
		DrawOp::Arc { cx, cy, rx, ry, rotation, start_angle, sweep_angle } =>
		    sink.arc(cx, cy, rx, ry, rotation, start_angle, sweep_angle),
		DrawOp::ClosePath => sink.close_path(),
		DrawOp::Fill(color, rule) => sink.fill(color, rule),
		DrawOp::Stroke(color, ref style) => sink.stroke(color, style),
	    }
	}
    }
}

impl DrawingSink for Recorder {
    fn move_to(&mut self, x: f64, y: f64) {
	self.ops.push(DrawOp::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
	self.ops.push(DrawOp::LineTo(x, y));
    }

    fn quadratic_curve_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
	self.ops.push(DrawOp::QuadraticCurveTo { cx, cy, x, y });
    }

    fn cubic_curve_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) {
	self.ops.push(DrawOp::CubicCurveTo { c1x, c1y, c2x, c2y, x, y });
    }

    fn arc(&mut self, cx: f64, cy: f64, rx: f64, ry: f64, rotation: f64, start_angle: f64, sweep_angle: f64) {
	self.ops.push(DrawOp::Arc { cx, cy, rx, ry, rotation, start_angle, sweep_angle });
    }

    fn close_path(&mut self) {
	self.ops.push(DrawOp::ClosePath);
    }

    fn fill(&mut self, color: Color, rule: FillRule) {
	self.ops.push(DrawOp::Fill(color, rule));
    }

    fn stroke(&mut self, color: Color, style: &StrokeStyle) {
	self.ops.push(DrawOp::Stroke(color, *style));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replay_reproduces_calls() {
	let mut recorder = Recorder::new();
	recorder.move_to(1.0, 2.0);
	recorder.cubic_curve_to(1.0, 1.0, 2.0, 2.0, 3.0, 3.0);
	recorder.arc(0.0, 0.0, 1.0, 2.0, 30.0, 0.0, 90.0);
	recorder.close_path();
	recorder.fill(Color::BLACK, FillRule::EvenOdd);

	let mut copy = Recorder::new();
	recorder.replay(&mut copy);

	assert_eq!(copy.ops(), recorder.ops());
	assert_eq!(copy.ops().len(), 5);
    }

    #[test]
    fn forwards_through_mutable_reference() {
	fn draw_line<S: DrawingSink>(mut sink: S) {
	    sink.line_to(4.0, 5.0);
	}

	let mut recorder = Recorder::new();
	draw_line(&mut recorder);

	assert_eq!(recorder.into_ops(), vec![DrawOp::LineTo(4.0, 5.0)]);
    }
}
