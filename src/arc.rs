//! Conversion of SVG elliptical arcs from endpoint to center parameterization.
//!
//! Path data describes an arc by its two endpoints, the radii, the rotation of
//! the ellipse's x-axis and two flags choosing one of four candidate arcs.
//! Drawing surfaces want a center, radii and an angular range instead. The
//! conversion follows the implementation notes of the SVG specification,
//! "Conversion from endpoint to center parameterization".
//!
//! Angles are in degrees, measured in the path's coordinate space from the
//! ellipse's (rotated) x-axis toward its y-axis. A positive sweep runs in the
//! direction of increasing angle, which is what a set sweep flag asks for.

use std::f64::consts::PI;

use crate::command::Point;

/// An arc as written in path data, with both endpoints absolute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EndpointArc {
    pub from: Point,
    pub to: Point,
    pub rx: f64,
    pub ry: f64,
    /// Rotation of the ellipse's x-axis in degrees.
    pub x_axis_rotation: f64,
    pub large_arc: bool,
    pub sweep: bool,
}

/// An arc described by its ellipse and angular range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenterArc {
    pub center: Point,
    pub rx: f64,
    pub ry: f64,
    /// Rotation of the ellipse's x-axis in degrees.
    pub rotation: f64,
    pub start_angle: f64,
    pub sweep_angle: f64,
}

impl CenterArc {
    ///Point on the ellipse at `angle` degrees
    pub fn point_at(&self, angle: f64) -> Point {
	let (sin_phi, cos_phi) = self.rotation.to_radians().sin_cos();
	let (sin_theta, cos_theta) = angle.to_radians().sin_cos();

	let x = self.rx * cos_theta;
	let y = self.ry * sin_theta;

	Point::new(self.center.x + x * cos_phi - y * sin_phi,
		   self.center.y + x * sin_phi + y * cos_phi)
    }

    pub fn start_point(&self) -> Point {
	self.point_at(self.start_angle)
    }

    pub fn end_point(&self) -> Point {
	self.point_at(self.start_angle + self.sweep_angle)
    }
}

/// What an arc command turns into once its parameters are resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArcSegment {
    /// Start and end coincide; nothing is drawn.
    Omit,
    /// A zero radius, or radii that cannot be scaled to a finite ellipse;
    /// the arc is drawn as a straight line to the end point.
    LineTo(Point),
    Arc(CenterArc),
}

impl EndpointArc {
    pub fn center_parameterization(&self) -> ArcSegment {
	let EndpointArc { from, to, x_axis_rotation, large_arc, sweep, .. } = *self;

	if from == to {
	    return ArcSegment::Omit;
	}

	if self.rx == 0.0 || self.ry == 0.0 {
	    return ArcSegment::LineTo(to);
	}

	let mut rx = self.rx.abs();
	let mut ry = self.ry.abs();

	let (sin_phi, cos_phi) = x_axis_rotation.to_radians().sin_cos();

	// Move the origin to the midpoint of the chord and line up the axes
	// with the ellipse's axes.
	let half_dx = (from.x - to.x) / 2.0;
	let half_dy = (from.y - to.y) / 2.0;
	let x1 = cos_phi * half_dx + sin_phi * half_dy;
	let y1 = -sin_phi * half_dx + cos_phi * half_dy;

	// Radii too small to span the chord grow uniformly until they just do.
	let radii_check = (x1 / rx).powi(2) + (y1 / ry).powi(2);
	if radii_check > 1.0 {
	    let scale = radii_check.sqrt();
	    rx *= scale;
	    ry *= scale;

	    if !rx.is_finite() || !ry.is_finite() {
		return ArcSegment::LineTo(to);
	    }
	}

	let rx_sq = rx * rx;
	let ry_sq = ry * ry;
	let denominator = rx_sq * y1 * y1 + ry_sq * x1 * x1;
	if denominator == 0.0 {
	    return ArcSegment::LineTo(to);
	}

	// Rounding can push the radicand slightly below zero when the radii
	// were just scaled.
	let radicand = ((rx_sq * ry_sq - denominator) / denominator).max(0.0);
	let sign = if large_arc == sweep { -1.0 } else { 1.0 };
	let coef = sign * radicand.sqrt();

	let cx1 = coef * rx * y1 / ry;
	let cy1 = -coef * ry * x1 / rx;

	let center = Point::new(cos_phi * cx1 - sin_phi * cy1 + (from.x + to.x) / 2.0,
				sin_phi * cx1 + cos_phi * cy1 + (from.y + to.y) / 2.0);

	let ux = (x1 - cx1) / rx;
	let uy = (y1 - cy1) / ry;
	let vx = (-x1 - cx1) / rx;
	let vy = (-y1 - cy1) / ry;

	let theta1 = uy.atan2(ux);
	let mut delta_theta = (ux * vy - uy * vx).atan2(ux * vx + uy * vy);

	if !sweep && delta_theta > 0.0 {
	    delta_theta -= 2.0 * PI;
	} else if sweep && delta_theta < 0.0 {
	    delta_theta += 2.0 * PI;
	}

	let arc = CenterArc {
	    center,
	    rx,
	    ry,
	    rotation: x_axis_rotation,
	    start_angle: theta1.to_degrees(),
	    sweep_angle: delta_theta.to_degrees(),
	};

	let finite = [arc.center.x, arc.center.y, arc.start_angle, arc.sweep_angle]
	    .iter()
	    .all(|v| v.is_finite());

	if finite {
	    ArcSegment::Arc(arc)
	} else {
	    ArcSegment::LineTo(to)
	}
    }
}
