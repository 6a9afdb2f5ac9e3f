use log::{debug, warn};
use thiserror::Error;

use style_derive::properties;

use crate::command::Point;
use crate::error::ParseError;
use crate::interpreter::interpret;
use crate::sink::DrawingSink;
use crate::style::{PathStyle, PathStyleChange};

/// A path string together with the style it is painted with.
#[properties]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathShape {
    pub data: String,
    pub style: PathStyle,
}

impl PathShape {
    pub fn new(data: impl Into<String>) -> Self {
	PathShape {
	    data: data.into(),
	    style: PathStyle::default(),
	}
    }

    pub fn draw<S: DrawingSink + ?Sized>(&self, sink: &mut S) -> Result<(), ParseError> {
	interpret(&self.data, sink, &self.style)
    }
}

/// A shape of a [`Scene`] that could not be drawn.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("shape {index}: {source}")]
pub struct SceneError {
    pub index: usize,
    pub source: ParseError,
}

/// Scale and offset that place a scene's canvas inside a target area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scale_x: f64,
    pub scale_y: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Viewport {
    ///Maps a canvas point into the target area
    pub fn map(&self, p: Point) -> Point {
	Point::new(self.offset_x + p.x * self.scale_x, self.offset_y + p.y * self.scale_y)
    }
}

/// An ordered list of shapes drawn onto a canvas of fixed size.
///
/// Every mutation reports whether it changed anything and marks the scene
/// dirty when it did. Rendering clears the flag.
#[derive(Debug, Clone)]
pub struct Scene {
    width: f64,
    height: f64,
    keep_aspect: bool,
    shapes: Vec<PathShape>,
    dirty: bool,
}

impl Scene {
    pub fn new(width: f64, height: f64) -> Self {
	Scene {
	    width,
	    height,
	    keep_aspect: true,
	    shapes: Vec::new(),
	    dirty: true,
	}
    }

    pub fn with_shapes(mut self, shapes: impl IntoIterator<Item = PathShape>) -> Self {
	self.shapes.extend(shapes);
	self
    }

    pub fn width(&self) -> f64 {
	self.width
    }

    pub fn height(&self) -> f64 {
	self.height
    }

    pub fn keep_aspect(&self) -> bool {
	self.keep_aspect
    }

    pub fn shapes(&self) -> &[PathShape] {
	&self.shapes
    }

    pub fn is_dirty(&self) -> bool {
	self.dirty
    }

    fn mark(&mut self, changed: bool) -> bool {
	self.dirty |= changed;
	changed
    }

    pub fn set_canvas_size(&mut self, width: f64, height: f64) -> bool {
	let changed = self.width != width || self.height != height;
	self.width = width;
	self.height = height;
	self.mark(changed)
    }

    pub fn set_keep_aspect(&mut self, keep_aspect: bool) -> bool {
	let changed = self.keep_aspect != keep_aspect;
	self.keep_aspect = keep_aspect;
	self.mark(changed)
    }

    pub fn push(&mut self, shape: PathShape) {
	self.shapes.push(shape);
	self.dirty = true;
    }

    pub fn remove(&mut self, index: usize) -> Option<PathShape> {
	if index >= self.shapes.len() {
	    return None;
	}

	self.dirty = true;
	Some(self.shapes.remove(index))
    }

    /// Applies `change` to the shape at `index`. Out of range is no change.
    pub fn update(&mut self, index: usize, change: PathShapeChange) -> bool {
	let changed = match self.shapes.get_mut(index) {
	    Some(shape) => shape.apply(change),
	    None => false,
	};

	self.mark(changed)
    }

    pub fn update_style(&mut self, index: usize, change: PathStyleChange) -> bool {
	let changed = match self.shapes.get_mut(index) {
	    Some(shape) => shape.style.apply(change),
	    None => false,
	};

	self.mark(changed)
    }

    /// Fits the canvas into a `target_width` by `target_height` area.
    ///
    /// Keeping the aspect ratio shrinks one side of the fitted area so the
    /// canvas scales uniformly, and centres it in the target. Returns `None`
    /// when either the target or the canvas has no area.
    pub fn fit(&self, target_width: f64, target_height: f64) -> Option<Viewport> {
	if !(target_width > 0.0 && target_height > 0.0 && self.width > 0.0 && self.height > 0.0) {
	    return None;
	}

	let mut width = target_width;
	let mut height = target_height;

	if self.keep_aspect {
	    let aspect_ratio = self.height / self.width;

	    if aspect_ratio * width > height {
		width = height / aspect_ratio;
	    } else if height / aspect_ratio > width {
		height = aspect_ratio * width;
	    }
	}

	Some(Viewport {
	    scale_x: width / self.width,
	    scale_y: height / self.height,
	    offset_x: (target_width - width) * 0.5,
	    offset_y: (target_height - height) * 0.5,
	})
    }

    /// Draws every shape in order. Shapes whose path does not parse are
    /// skipped and returned; the others are drawn regardless.
    pub fn render<S: DrawingSink + ?Sized>(&mut self, sink: &mut S) -> Vec<SceneError> {
	let mut errors = Vec::new();

	for (index, shape) in self.shapes.iter().enumerate() {
	    if let Err(source) = shape.draw(sink) {
		warn!("skipping shape {}: {}", index, source);
		errors.push(SceneError { index, source });
	    }
	}

	debug!("rendered {} of {} shapes", self.shapes.len() - errors.len(), self.shapes.len());
	self.dirty = false;

	errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{DrawOp, Recorder};
    use crate::style::{Color, Paint};
    use approx::assert_abs_diff_eq;

    fn scene() -> Scene {
	Scene::new(200.0, 100.0).with_shapes(vec![
	    PathShape::new("M0 0 L10 0 L10 10 Z"),
	    PathShape::new("M0 0 L"),
	    PathShape::new("M5 5 h1"),
	])
    }

    #[test]
    fn keeps_aspect_in_wide_target() {
	let viewport = scene().fit(400.0, 100.0).unwrap();

	assert_abs_diff_eq!(viewport.scale_x, 1.0);
	assert_abs_diff_eq!(viewport.scale_y, 1.0);
	assert_abs_diff_eq!(viewport.offset_x, 100.0);
	assert_abs_diff_eq!(viewport.offset_y, 0.0);
    }

    #[test]
    fn keeps_aspect_in_tall_target() {
	let viewport = scene().fit(100.0, 400.0).unwrap();

	assert_abs_diff_eq!(viewport.scale_x, 0.5);
	assert_abs_diff_eq!(viewport.scale_y, 0.5);
	assert_abs_diff_eq!(viewport.offset_x, 0.0);
	assert_abs_diff_eq!(viewport.offset_y, 175.0);
	assert_eq!(viewport.map(Point::new(200.0, 100.0)), Point::new(100.0, 225.0));
    }

    #[test]
    fn stretches_without_aspect() {
	let mut scene = scene();
	assert!(scene.set_keep_aspect(false));

	let viewport = scene.fit(100.0, 400.0).unwrap();
	assert_abs_diff_eq!(viewport.scale_x, 0.5);
	assert_abs_diff_eq!(viewport.scale_y, 4.0);
	assert_abs_diff_eq!(viewport.offset_y, 0.0);
    }

    #[test]
    fn empty_areas_do_not_fit() {
	assert_eq!(scene().fit(0.0, 10.0), None);
	assert_eq!(Scene::new(0.0, 10.0).fit(10.0, 10.0), None);
    }

    #[test]
    fn render_skips_bad_shapes() {
	let mut scene = scene();
	let mut recorder = Recorder::new();

	let errors = scene.render(&mut recorder);

	assert_eq!(errors, vec![SceneError {
	    index: 1,
	    source: ParseError::UnexpectedEndOfInput { position: 6 },
	}]);
	assert!(!scene.is_dirty());

	let fills = recorder.ops().iter().filter(|op| matches!(op, DrawOp::Fill(..))).count();
	assert_eq!(fills, 2);
    }

    #[test]
    fn updates_report_changes() {
	let mut scene = scene();
	scene.render(&mut Recorder::new());

	assert!(!scene.update(0, PathShapeChange::Data(String::from("M0 0 L10 0 L10 10 Z"))));
	assert!(!scene.is_dirty());
	assert!(!scene.update(7, PathShapeChange::Data(String::new())));

	assert!(scene.update_style(2, PathStyleChange::Fill(Paint::Color(Color::WHITE))));
	assert!(scene.is_dirty());
	assert_eq!(scene.shapes()[2].style.fill, Paint::Color(Color::WHITE));
    }

    #[test]
    fn canvas_size_marks_dirty() {
	let mut scene = Scene::new(10.0, 10.0);
	scene.render(&mut Recorder::new());

	assert!(!scene.set_canvas_size(10.0, 10.0));
	assert!(!scene.is_dirty());
	assert!(scene.set_canvas_size(20.0, 10.0));
	assert!(scene.is_dirty());
    }

    #[test]
    fn remove_out_of_range() {
	let mut scene = scene();
	assert_eq!(scene.remove(3), None);
	assert_eq!(scene.remove(1).map(|s| s.data), Some(String::from("M0 0 L")));
	assert_eq!(scene.shapes().len(), 2);
    }
}
