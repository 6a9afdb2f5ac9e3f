//! Interpreter for SVG path data.
//!
//! A `d` attribute string is parsed into [`PathCommand`]s and then replayed
//! as absolute drawing calls against a [`DrawingSink`], followed by the fill
//! and stroke a [`PathStyle`] asks for:
//!
//! ```
//! use svgnode::{interpret, DrawOp, PathStyle, Recorder};
//!
//! let mut recorder = Recorder::new();
//! interpret("M0,0 L10,0 L10,10 Z", &mut recorder, &PathStyle::new()).unwrap();
//!
//! assert_eq!(recorder.ops()[..4], [
//!     DrawOp::MoveTo(0.0, 0.0),
//!     DrawOp::LineTo(10.0, 0.0),
//!     DrawOp::LineTo(10.0, 10.0),
//!     DrawOp::ClosePath,
//! ]);
//! ```
//!
//! Elliptical arcs are converted to center parameterization before they
//! reach the sink, see [`arc`].

pub mod arc;
pub mod command;
pub mod demo;
pub mod document;
pub mod error;
pub mod interpreter;
pub mod parser;
pub mod scanner;
pub mod shape;
pub mod sink;
pub mod style;

#[cfg(feature = "cairo")]
pub mod cairo_sink;

pub use command::{ArcParams, PathCommand, Point, Position};
pub use error::ParseError;
pub use interpreter::{interpret, trace_path, InterpreterState};
pub use parser::parse;
pub use shape::{PathShape, PathShapeChange, Scene, SceneError, Viewport};
pub use sink::{DrawOp, DrawingSink, Recorder};
pub use style::{Color, FillRule, LineCap, LineJoin, Paint, PathStyle, PathStyleChange, StrokeStyle};

#[cfg(feature = "cairo")]
pub use cairo_sink::CairoSink;
