use log::debug;

use crate::command::{ArcParams, PathCommand, Point, Position};
use crate::error::ParseError;
use crate::scanner::Scanner;

fn read_point(scanner: &mut Scanner<'_>) -> Result<Point, ParseError> {
    let x = scanner.read_number()?;
    let y = scanner.read_number()?;

    Ok(Point::new(x, y))
}

fn read_arc(scanner: &mut Scanner<'_>) -> Result<ArcParams, ParseError> {
    let rx = scanner.read_number()?;
    let ry = scanner.read_number()?;
    let x_axis_rotation = scanner.read_number()?;
    let large_arc = scanner.read_flag()?;
    let sweep = scanner.read_flag()?;
    let to = read_point(scanner)?;

    Ok(ArcParams { rx, ry, x_axis_rotation, large_arc, sweep, to })
}

///Reads argument groups until the next token is no longer a number
fn repeated<'a, F>(scanner: &mut Scanner<'a>,
		   commands: &mut Vec<PathCommand>,
		   mut read_group: F
) -> Result<(), ParseError>
where
    F: FnMut(&mut Scanner<'a>) -> Result<PathCommand, ParseError>,
{
    loop {
	commands.push(read_group(scanner)?);

	if !scanner.next_is_numeric_token() {
	    return Ok(());
	}
    }
}

/// Parses path data into one [`PathCommand`] per argument group.
///
/// Coordinate pairs following the first pair of a moveto are returned as
/// linetos of the same position type. Parsing stops at the first error.
pub fn parse(data: &str) -> Result<Vec<PathCommand>, ParseError> {
    let mut scanner = Scanner::new(data);
    let mut commands = Vec::new();

    while let Some((letter, position)) = scanner.read_command() {
	let pos = Position::of_letter(letter);

	match letter.to_ascii_uppercase() {
	    'M' => {
		commands.push(PathCommand::MoveTo(pos, read_point(&mut scanner)?));

		while scanner.next_is_numeric_token() {
		    commands.push(PathCommand::LineTo(pos, read_point(&mut scanner)?));
		}
	    },
	    'L' => repeated(&mut scanner, &mut commands, |s| {
		Ok(PathCommand::LineTo(pos, read_point(s)?))
	    })?,
	    'H' => repeated(&mut scanner, &mut commands, |s| {
		Ok(PathCommand::HorizontalLineTo(pos, s.read_number()?))
	    })?,
	    'V' => repeated(&mut scanner, &mut commands, |s| {
		Ok(PathCommand::VerticalLineTo(pos, s.read_number()?))
	    })?,
	    'Q' => repeated(&mut scanner, &mut commands, |s| {
		let control = read_point(s)?;
		Ok(PathCommand::QuadraticCurveTo(pos, control, read_point(s)?))
	    })?,
	    'T' => repeated(&mut scanner, &mut commands, |s| {
		Ok(PathCommand::SmoothQuadraticCurveTo(pos, read_point(s)?))
	    })?,
	    'C' => repeated(&mut scanner, &mut commands, |s| {
		let control1 = read_point(s)?;
		let control2 = read_point(s)?;
		Ok(PathCommand::CubicCurveTo(pos, control1, control2, read_point(s)?))
	    })?,
	    'S' => repeated(&mut scanner, &mut commands, |s| {
		let control2 = read_point(s)?;
		Ok(PathCommand::SmoothCubicCurveTo(pos, control2, read_point(s)?))
	    })?,
	    'A' => repeated(&mut scanner, &mut commands, |s| {
		Ok(PathCommand::EllipticalArcTo(pos, read_arc(s)?))
	    })?,
	    'Z' => commands.push(PathCommand::ClosePath),
	    _ => return Err(ParseError::UnknownCommand { letter, position }),
	}
    }

    debug!("parsed {} path commands from {} bytes", commands.len(), data.len());

    Ok(commands)
}
