//! Turns parsed path commands into absolute drawing calls.

use log::{debug, trace};

use crate::arc::{ArcSegment, EndpointArc};
use crate::command::{ArcParams, PathCommand, Point, Position};
use crate::error::ParseError;
use crate::parser::parse;
use crate::sink::DrawingSink;
use crate::style::PathStyle;

/// Cursor state of a single interpretation pass.
///
/// All points are absolute. The last control points are only set directly
/// after a curve of their family, so a smooth curve following anything else
/// reflects nothing and uses the current point.
#[derive(Debug, Clone, Default)]
pub struct InterpreterState {
    current: Point,
    subpath_start: Point,
    last_quadratic_control: Option<Point>,
    last_cubic_control: Option<Point>,
    element_count: usize,
    closed: bool,
}

impl InterpreterState {
    pub fn new() -> Self {
	InterpreterState::default()
    }

    pub fn current_point(&self) -> Point {
	self.current
    }

    pub fn subpath_start(&self) -> Point {
	self.subpath_start
    }

    /// Number of commands applied so far.
    pub fn element_count(&self) -> usize {
	self.element_count
    }

    fn resolve(&self, pos: Position, p: Point) -> Point {
	match pos {
	    Position::Absolute => p,
	    Position::Relative => self.current + p,
	}
    }

    fn set_current(&mut self, to: Point, quadratic_control: Option<Point>, cubic_control: Option<Point>) {
	self.current = to;
	self.last_quadratic_control = quadratic_control;
	self.last_cubic_control = cubic_control;
    }

    ///Starts the implicit subpath a drawing command after a closepath begins
    fn reopen<S: DrawingSink + ?Sized>(&mut self, sink: &mut S) {
	if self.closed {
	    sink.move_to(self.subpath_start.x, self.subpath_start.y);
	    self.closed = false;
	}
    }

    /// Applies one command, emitting its geometry into `sink`.
    pub fn apply<S: DrawingSink + ?Sized>(&mut self, command: &PathCommand, sink: &mut S) {
	trace!("{} {:?}", command.letter(), command);

	match *command {
	    PathCommand::MoveTo(pos, p) => self.move_to(pos, p, sink),
	    PathCommand::ClosePath => self.close_path(sink),
	    _ => {
		self.reopen(sink);
		self.draw(command, sink);
	    },
	}

	self.element_count += 1;
    }

    fn move_to<S: DrawingSink + ?Sized>(&mut self, pos: Position, p: Point, sink: &mut S) {
	// There is nothing to be relative to before the first command.
	let to = if self.element_count == 0 { p } else { self.resolve(pos, p) };

	sink.move_to(to.x, to.y);
	self.set_current(to, None, None);
	self.subpath_start = to;
	self.closed = false;
    }

    fn close_path<S: DrawingSink + ?Sized>(&mut self, sink: &mut S) {
	sink.close_path();
	let start = self.subpath_start;
	self.set_current(start, None, None);
	self.closed = true;
    }

    fn draw<S: DrawingSink + ?Sized>(&mut self, command: &PathCommand, sink: &mut S) {
	let cur = self.current;

	match *command {
	    PathCommand::LineTo(pos, p) => {
		let to = self.resolve(pos, p);
		sink.line_to(to.x, to.y);
		self.set_current(to, None, None);
	    },
	    PathCommand::HorizontalLineTo(pos, x) => {
		let x = if pos.is_absolute() { x } else { cur.x + x };
		sink.line_to(x, cur.y);
		self.set_current(Point::new(x, cur.y), None, None);
	    },
	    PathCommand::VerticalLineTo(pos, y) => {
		let y = if pos.is_absolute() { y } else { cur.y + y };
		sink.line_to(cur.x, y);
		self.set_current(Point::new(cur.x, y), None, None);
	    },
	    PathCommand::QuadraticCurveTo(pos, control, p) => {
		let control = self.resolve(pos, control);
		let to = self.resolve(pos, p);
		sink.quadratic_curve_to(control.x, control.y, to.x, to.y);
		self.set_current(to, Some(control), None);
	    },
	    PathCommand::SmoothQuadraticCurveTo(pos, p) => {
		let control = self.last_quadratic_control.map_or(cur, |c| cur.reflect(c));
		let to = self.resolve(pos, p);
		sink.quadratic_curve_to(control.x, control.y, to.x, to.y);
		self.set_current(to, Some(control), None);
	    },
	    PathCommand::CubicCurveTo(pos, control1, control2, p) => {
		let control1 = self.resolve(pos, control1);
		let control2 = self.resolve(pos, control2);
		let to = self.resolve(pos, p);
		sink.cubic_curve_to(control1.x, control1.y, control2.x, control2.y, to.x, to.y);
		self.set_current(to, None, Some(control2));
	    },
	    PathCommand::SmoothCubicCurveTo(pos, control2, p) => {
		let control1 = self.last_cubic_control.map_or(cur, |c| cur.reflect(c));
		let control2 = self.resolve(pos, control2);
		let to = self.resolve(pos, p);
		sink.cubic_curve_to(control1.x, control1.y, control2.x, control2.y, to.x, to.y);
		self.set_current(to, None, Some(control2));
	    },
	    PathCommand::EllipticalArcTo(pos, ref params) => self.arc(pos, params, sink),
	    PathCommand::MoveTo(..) | PathCommand::ClosePath => (),
	}
    }

    fn arc<S: DrawingSink + ?Sized>(&mut self, pos: Position, params: &ArcParams, sink: &mut S) {
	let to = self.resolve(pos, params.to);
	let endpoint = EndpointArc {
	    from: self.current,
	    to,
	    rx: params.rx,
	    ry: params.ry,
	    x_axis_rotation: params.x_axis_rotation,
	    large_arc: params.large_arc,
	    sweep: params.sweep,
	};

	match endpoint.center_parameterization() {
	    ArcSegment::Omit => trace!("arc ends where it starts, skipped"),
	    ArcSegment::LineTo(p) => {
		debug!("arc to ({}, {}) drawn as a line", p.x, p.y);
		sink.line_to(p.x, p.y);
	    },
	    ArcSegment::Arc(a) => {
		sink.arc(a.center.x, a.center.y, a.rx, a.ry, a.rotation, a.start_angle, a.sweep_angle);
	    },
	}

	self.set_current(to, None, None);
    }
}

/// Emits the geometry of already parsed commands, returning the final state.
pub fn emit<S: DrawingSink + ?Sized>(commands: &[PathCommand], sink: &mut S) -> InterpreterState {
    let mut state = InterpreterState::new();

    for command in commands {
	state.apply(command, sink);
    }

    state
}

/// Parses `data` and emits its geometry, without filling or stroking.
///
/// Nothing reaches `sink` unless the whole string parses.
pub fn trace_path<S: DrawingSink + ?Sized>(data: &str, sink: &mut S) -> Result<InterpreterState, ParseError> {
    let commands = parse(data)?;

    sink.begin_path();
    Ok(emit(&commands, sink))
}

/// Parses `data`, emits its geometry and then fills and strokes it as `style` asks.
///
/// The fill comes before the stroke. An invisible style makes no calls at
/// all, and nothing reaches `sink` unless the whole string parses.
pub fn interpret<S: DrawingSink + ?Sized>(data: &str, sink: &mut S, style: &PathStyle) -> Result<(), ParseError> {
    let commands = parse(data)?;

    if !style.visible {
	return Ok(());
    }

    sink.begin_path();
    emit(&commands, sink);

    if let Some(color) = style.fill_color() {
	sink.fill(color, style.fill_rule);
    }

    if let Some(color) = style.stroke_color() {
	sink.stroke(color, &style.stroke_style());
    }

    Ok(())
}
