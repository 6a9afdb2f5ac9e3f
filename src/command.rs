use std::ops::{Add, Sub};

/// A point in the path's local coordinate space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
	Point { x, y }
    }

    ///Mirrors `other` through `self`
    pub fn reflect(self, other: Point) -> Point {
	Point::new(2.0 * self.x - other.x, 2.0 * self.y - other.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
	Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
	Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
	Point::new(x, y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Absolute,
    Relative,
}

impl Position {
    pub fn of_letter(letter: char) -> Position {
	if letter.is_ascii_uppercase() {
	    Position::Absolute
	} else {
	    Position::Relative
	}
    }

    pub fn is_absolute(self) -> bool {
	self == Position::Absolute
    }
}

/// Parameters of an `A`/`a` command, exactly as written.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcParams {
    pub rx: f64,
    pub ry: f64,
    /// Rotation of the ellipse's x-axis in degrees.
    pub x_axis_rotation: f64,
    pub large_arc: bool,
    pub sweep: bool,
    pub to: Point,
}

/// One argument group of a path command.
///
/// A letter followed by repeated argument groups is split into one
/// `PathCommand` per group; coordinates are kept as written, so relative
/// commands still hold offsets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Position, Point),
    LineTo(Position, Point),
    HorizontalLineTo(Position, f64),
    VerticalLineTo(Position, f64),
    QuadraticCurveTo(Position, Point, Point),
    SmoothQuadraticCurveTo(Position, Point),
    CubicCurveTo(Position, Point, Point, Point),
    SmoothCubicCurveTo(Position, Point, Point),
    EllipticalArcTo(Position, ArcParams),
    ClosePath,
}

impl PathCommand {
    pub fn position(&self) -> Position {
	match *self {
	    PathCommand::MoveTo(pos, ..)
	    | PathCommand::LineTo(pos, ..)
	    | PathCommand::HorizontalLineTo(pos, ..)
	    | PathCommand::VerticalLineTo(pos, ..)
	    | PathCommand::QuadraticCurveTo(pos, ..)
	    | PathCommand::SmoothQuadraticCurveTo(pos, ..)
	    | PathCommand::CubicCurveTo(pos, ..)
	    | PathCommand::SmoothCubicCurveTo(pos, ..)
	    | PathCommand::EllipticalArcTo(pos, ..) => pos,
	    PathCommand::ClosePath => Position::Absolute,
	}
    }

    ///The command letter this group would be written with
    pub fn letter(&self) -> char {
	let upper = match self {
	    PathCommand::MoveTo(..) => 'M',
	    PathCommand::LineTo(..) => 'L',
	    PathCommand::HorizontalLineTo(..) => 'H',
	    PathCommand::VerticalLineTo(..) => 'V',
	    PathCommand::QuadraticCurveTo(..) => 'Q',
	    PathCommand::SmoothQuadraticCurveTo(..) => 'T',
	    PathCommand::CubicCurveTo(..) => 'C',
	    PathCommand::SmoothCubicCurveTo(..) => 'S',
	    PathCommand::EllipticalArcTo(..) => 'A',
	    PathCommand::ClosePath => 'Z',
	};

	match self.position() {
	    Position::Absolute => upper,
	    Position::Relative => upper.to_ascii_lowercase(),
	}
    }
}
