//! Paint and stroke options applied when a path is filled or stroked.
//!
//! Values parse from their SVG presentation attribute spellings, and a whole
//! [`PathStyle`] parses from a `style` attribute declaration list such as
//! `"fill:#fd6f71;stroke:none"`.

use std::str::FromStr;

use log::warn;
use style_derive::properties;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid color {input:?}: {reason}")]
pub struct ColorParseError {
    pub input: String,
    pub reason: String,
}

impl Color {
    pub const BLACK: Color = Color { red: 0.0, green: 0.0, blue: 0.0, alpha: 1.0 };
    pub const WHITE: Color = Color { red: 1.0, green: 1.0, blue: 1.0, alpha: 1.0 };
    pub const TRANSPARENT: Color = Color { red: 0.0, green: 0.0, blue: 0.0, alpha: 0.0 };

    pub fn rgb(red: f64, green: f64, blue: f64) -> Color {
	Color { red, green, blue, alpha: 1.0 }
    }

    pub fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Color {
	Color { red, green, blue, alpha }
    }

    pub fn set_alpha(self, alpha: f64) -> Color {
	Color { alpha, ..self }
    }

    pub fn is_transparent(&self) -> bool {
	self.alpha <= 0.0
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    ///Parses `#rrggbb` or `#rrggbbaa`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
	let err = |reason: &str| ColorParseError {
	    input: String::from(s),
	    reason: String::from(reason),
	};

	let hex = s.trim().strip_prefix('#').ok_or_else(|| err("missing '#'"))?;
	if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
	    return Err(err("expected 6 or 8 hex digits"));
	}

	let parse_hex = |s_rep: &str| u8::from_str_radix(s_rep, 16)
	    .map(|v| f64::from(v) / 255.0)
	    .map_err(|e| err(&e.to_string()));

	let r = parse_hex(&hex[0..2])?;
	let g = parse_hex(&hex[2..4])?;
	let b = parse_hex(&hex[4..6])?;

	if hex.len() == 6 {
	    return Ok(Color::rgb(r, g, b));
	}

	let a = parse_hex(&hex[6..8])?;
	Ok(Color::rgba(r, g, b, a))
    }
}

/// Fill or stroke paint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    None,
    Color(Color),
}

impl Paint {
    ///The color to paint with, unless nothing would show
    pub fn visible_color(&self) -> Option<Color> {
	match *self {
	    Paint::Color(color) if !color.is_transparent() => Some(color),
	    _ => None,
	}
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
	Paint::Color(color)
    }
}

impl FromStr for Paint {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
	let s = s.trim();

	if s.eq_ignore_ascii_case("none") {
	    Ok(Paint::None)
	} else if s.eq_ignore_ascii_case("transparent") {
	    Ok(Paint::Color(Color::TRANSPARENT))
	} else {
	    s.parse().map(Paint::Color)
	}
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StyleParseError {
    #[error("invalid {property} value: {value:?}")]
    InvalidValue { property: &'static str, value: String },

    #[error(transparent)]
    Color(#[from] ColorParseError),

    #[error("invalid declaration: {0:?}")]
    Declaration(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

impl Default for LineCap {
    fn default() -> Self {
	LineCap::Butt
    }
}

impl FromStr for LineCap {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
	Ok(match s.trim().to_lowercase().as_str() {
	    "butt" => Self::Butt,
	    "round" => Self::Round,
	    "square" => Self::Square,
	    _ => return Err(StyleParseError::InvalidValue { property: "stroke-linecap", value: String::from(s) }),
	})
    }
}

/// Line join. `Arcs` and `MiterClip` are accepted for completeness; backends
/// that lack them draw a miter join instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineJoin {
    Arcs,
    Bevel,
    Miter,
    MiterClip,
    Round,
}

impl Default for LineJoin {
    fn default() -> Self {
	LineJoin::Miter
    }
}

impl LineJoin {
    ///Maps joins without wide backend support onto `Miter`
    pub fn supported(self) -> LineJoin {
	match self {
	    LineJoin::Bevel | LineJoin::Miter | LineJoin::Round => self,
	    _ => {
		warn!("line-join not implemented: {:?}, using miter", self);
		LineJoin::Miter
	    }
	}
    }
}

impl FromStr for LineJoin {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
	Ok(match s.trim().to_lowercase().as_str() {
	    "arcs" => Self::Arcs,
	    "bevel" => Self::Bevel,
	    "miter" => Self::Miter,
	    "miter-clip" | "miterclip" => Self::MiterClip,
	    "round" => Self::Round,
	    _ => return Err(StyleParseError::InvalidValue { property: "stroke-linejoin", value: String::from(s) }),
	})
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillRule {
    NonZero,
    EvenOdd,
}

impl Default for FillRule {
    fn default() -> Self {
	FillRule::NonZero
    }
}

impl FromStr for FillRule {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
	Ok(match s.trim().to_lowercase().as_str() {
	    "nonzero" => Self::NonZero,
	    "evenodd" => Self::EvenOdd,
	    _ => return Err(StyleParseError::InvalidValue { property: "fill-rule", value: String::from(s) }),
	})
    }
}

/// The stroke geometry handed to a sink together with the stroke color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub width: f64,
    pub line_cap: LineCap,
    pub line_join: LineJoin,
}

/// How a path is painted once its geometry has been emitted.
#[properties]
#[derive(Debug, Clone, PartialEq)]
pub struct PathStyle {
    pub fill: Paint,
    pub stroke: Paint,
    #[clamp(0.0, f64::MAX)]
    pub stroke_width: f64,
    pub line_join: LineJoin,
    pub line_cap: LineCap,
    pub fill_rule: FillRule,
    pub visible: bool,
}

impl Default for PathStyle {
    fn default() -> Self {
	PathStyle {
	    fill: Paint::Color(Color::BLACK),
	    stroke: Paint::None,
	    stroke_width: 1.0,
	    line_join: LineJoin::default(),
	    line_cap: LineCap::default(),
	    fill_rule: FillRule::default(),
	    visible: true,
	}
    }
}

impl PathStyle {
    pub fn new() -> Self { PathStyle::default() }

    /// The fill color, if the path is visible and the fill would show.
    pub fn fill_color(&self) -> Option<Color> {
	if !self.visible {
	    return None;
	}

	self.fill.visible_color()
    }

    /// The stroke color, if the path is visible and the stroke would show.
    pub fn stroke_color(&self) -> Option<Color> {
	if !self.visible || self.stroke_width <= 0.0 {
	    return None;
	}

	self.stroke.visible_color()
    }

    pub fn stroke_style(&self) -> StrokeStyle {
	StrokeStyle {
	    width: self.stroke_width,
	    line_cap: self.line_cap,
	    line_join: self.line_join,
	}
    }
}

impl FromStr for PathStyle {
    type Err = StyleParseError;

    /// Parses `property: value` declarations separated by `;`, starting from
    /// the defaults. Unknown properties are ignored.
    fn from_str(s: &str) -> Result<Self, StyleParseError> {
	let mut result = PathStyle::new();

	for decl in s.split(';').filter(|decl| !decl.trim().is_empty()) {
	    let mut decl_pair = decl.splitn(2, ':');
	    let prop_name = decl_pair.next().unwrap_or_default().trim();
	    let val = decl_pair.next()
		.ok_or_else(|| StyleParseError::Declaration(String::from(decl)))?
		.trim();

	    match prop_name {
		"fill" => { result.set_fill(val.parse()?); },
		"stroke" => { result.set_stroke(val.parse()?); },
		"stroke-width" => {
		    let width = val.parse::<f64>()
			.map_err(|_| StyleParseError::InvalidValue { property: "stroke-width", value: String::from(val) })?;
		    result.set_stroke_width(width);
		},
		"stroke-linejoin" => { result.set_line_join(val.parse()?); },
		"stroke-linecap" => { result.set_line_cap(val.parse()?); },
		"fill-rule" => { result.set_fill_rule(val.parse()?); },
		"display" => { result.set_visible(!val.eq_ignore_ascii_case("none")); },
		"visibility" => { result.set_visible(val.eq_ignore_ascii_case("visible")); },
		_ => (),
	    };
	}

	Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn parses_hex_colors() {
	let c: Color = "#FD6F71".parse().unwrap();
	assert_relative_eq!(c.red, 253.0 / 255.0);
	assert_relative_eq!(c.green, 111.0 / 255.0);
	assert_relative_eq!(c.blue, 113.0 / 255.0);
	assert_relative_eq!(c.alpha, 1.0);

	let c: Color = "#00000080".parse().unwrap();
	assert_relative_eq!(c.alpha, 128.0 / 255.0);
    }

    #[test]
    fn rejects_bad_colors() {
	assert!("FD6F71".parse::<Color>().is_err());
	assert!("#FD6F7".parse::<Color>().is_err());
	assert!("#GG0000".parse::<Color>().is_err());
    }

    #[test]
    fn parses_paint_keywords() {
	assert_eq!("none".parse::<Paint>(), Ok(Paint::None));
	assert_eq!("Transparent".parse::<Paint>(), Ok(Paint::Color(Color::TRANSPARENT)));
	assert_eq!(Paint::Color(Color::TRANSPARENT).visible_color(), None);
	assert_eq!("#ffffff".parse::<Paint>().unwrap().visible_color(), Some(Color::WHITE));
    }

    #[test]
    fn parses_keywords() {
	assert_eq!("round".parse::<LineCap>(), Ok(LineCap::Round));
	assert_eq!("miter-clip".parse::<LineJoin>(), Ok(LineJoin::MiterClip));
	assert_eq!("evenodd".parse::<FillRule>(), Ok(FillRule::EvenOdd));
	assert!("wavy".parse::<LineCap>().is_err());
    }

    #[test]
    fn unsupported_joins_fall_back_to_miter() {
	assert_eq!(LineJoin::Arcs.supported(), LineJoin::Miter);
	assert_eq!(LineJoin::Round.supported(), LineJoin::Round);
    }

    #[test]
    fn defaults() {
	let style = PathStyle::default();
	assert_eq!(style.fill, Paint::Color(Color::BLACK));
	assert_eq!(style.stroke, Paint::None);
	assert_eq!(style.stroke_width, 1.0);
	assert_eq!(style.fill_rule, FillRule::NonZero);
	assert!(style.visible);
    }

    #[test]
    fn setters_report_changes() {
	let mut style = PathStyle::default();

	assert!(!style.set_visible(true));
	assert!(style.set_visible(false));
	assert!(style.set_fill_rule(FillRule::EvenOdd));
	assert!(!style.apply(PathStyleChange::FillRule(FillRule::EvenOdd)));
	assert!(style.apply(PathStyleChange::LineCap(LineCap::Square)));
	assert_eq!(style.line_cap, LineCap::Square);
    }

    #[test]
    fn stroke_width_is_clamped() {
	let style = PathStyle::default().with_stroke_width(-3.0);
	assert_eq!(style.stroke_width, 0.0);

	let mut style = PathStyle::default();
	assert!(style.set_stroke_width(-1.0));
	assert!(!style.set_stroke_width(-5.0));
    }

    #[test]
    fn gates_fill_and_stroke() {
	let style = PathStyle::default().with_stroke(Paint::Color(Color::BLACK));
	assert_eq!(style.fill_color(), Some(Color::BLACK));
	assert_eq!(style.stroke_color(), Some(Color::BLACK));

	let hidden = style.clone().with_visible(false);
	assert_eq!(hidden.fill_color(), None);
	assert_eq!(hidden.stroke_color(), None);

	let hairline = style.with_stroke_width(0.0);
	assert_eq!(hairline.stroke_color(), None);
    }

    #[test]
    fn parses_declarations() {
	let style: PathStyle = "fill:#ff0000; stroke: none ;stroke-width:2.5;stroke-linecap:round;fill-rule:evenodd;opacity:1;"
	    .parse()
	    .unwrap();

	assert_eq!(style.fill, Paint::Color(Color::rgb(1.0, 0.0, 0.0)));
	assert_eq!(style.stroke, Paint::None);
	assert_eq!(style.stroke_width, 2.5);
	assert_eq!(style.line_cap, LineCap::Round);
	assert_eq!(style.fill_rule, FillRule::EvenOdd);

	let hidden: PathStyle = "display:none".parse().unwrap();
	assert!(!hidden.visible);
    }

    #[test]
    fn rejects_bad_declarations() {
	assert!(matches!("fill".parse::<PathStyle>(), Err(StyleParseError::Declaration(_))));
	assert!(matches!("stroke-width:wide".parse::<PathStyle>(), Err(StyleParseError::InvalidValue { .. })));
	assert!(matches!("fill:red".parse::<PathStyle>(), Err(StyleParseError::Color(_))));
    }
}
