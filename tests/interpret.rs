use approx::assert_abs_diff_eq;
use svg::node::element::path::{Command, Data};

use svgnode::{demo, interpret, parse, trace_path, DrawOp, Paint, ParseError, PathCommand, PathStyle, Recorder};

fn geometry(data: &str) -> Vec<DrawOp> {
    let mut recorder = Recorder::new();
    trace_path(data, &mut recorder).unwrap();
    recorder.into_ops()
}

#[test]
fn closed_triangle() {
    let mut recorder = Recorder::new();
    interpret("M0,0 L10,0 L10,10 Z", &mut recorder, &PathStyle::new().with_fill(Paint::None)).unwrap();

    assert_eq!(recorder.into_ops(), vec![
	DrawOp::MoveTo(0.0, 0.0),
	DrawOp::LineTo(10.0, 0.0),
	DrawOp::LineTo(10.0, 10.0),
	DrawOp::ClosePath,
    ]);
}

#[test]
fn relative_path_matches_absolute() {
    let absolute = "M10 10 L20 10 H30 V20 Q40 30 50 20 T70 20 C70 30 80 30 80 20 S90 10 90 20 A5 5 0 0 1 100 20 Z L5 5";
    let relative = "m10 10 l10 0 h10 v10 q10 10 20 0 t20 0 c0 10 10 10 10 0 s10 -10 10 0 a5 5 0 0 1 10 0 z l-5 -5";

    assert_eq!(geometry(absolute), geometry(relative));
}

#[test]
fn drawing_after_close_starts_at_subpath_start() {
    let ops = geometry("M5 5 l10 0 l0 10 z h3 z m1 1 v2");

    assert_eq!(ops, vec![
	DrawOp::MoveTo(5.0, 5.0),
	DrawOp::LineTo(15.0, 5.0),
	DrawOp::LineTo(15.0, 15.0),
	DrawOp::ClosePath,
	DrawOp::MoveTo(5.0, 5.0),
	DrawOp::LineTo(8.0, 5.0),
	DrawOp::ClosePath,
	DrawOp::MoveTo(6.0, 6.0),
	DrawOp::LineTo(6.0, 8.0),
    ]);
}

#[test]
fn smooth_curves_without_predecessor_use_current_point() {
    assert_eq!(geometry("M1 2 S5 6 7 8"), geometry("M1 2 C1 2 5 6 7 8"));
    assert_eq!(geometry("M1 2 T7 8"), geometry("M1 2 Q1 2 7 8"));
    assert_eq!(geometry("M1 2 H4 t3 0"), geometry("M1 2 H4 Q4 2 7 2"));
}

#[test]
fn smooth_cubic_after_cubic_reflects() {
    assert_eq!(geometry("M0 0 C1 2 3 4 5 5 s5 1 6 0"), geometry("M0 0 C1 2 3 4 5 5 C7 6 10 6 11 5"));
}

#[test]
fn failed_parse_draws_nothing() {
    let mut recorder = Recorder::new();
    let result = interpret("M0 0 L10 0 L10 10 L", &mut recorder, &PathStyle::new());

    assert_eq!(result, Err(ParseError::UnexpectedEndOfInput { position: 19 }));
    assert!(recorder.is_empty());

    let result = interpret("M0 0 L10 0 K", &mut recorder, &PathStyle::new());
    assert_eq!(result, Err(ParseError::UnknownCommand { letter: 'K', position: 11 }));
    assert!(recorder.is_empty());
}

#[test]
fn fill_and_stroke_gating() {
    let count = |style: &PathStyle| {
	let mut recorder = Recorder::new();
	interpret("M0 0 L1 1", &mut recorder, style).unwrap();

	let fills = recorder.ops().iter().filter(|op| matches!(op, DrawOp::Fill(..))).count();
	let strokes = recorder.ops().iter().filter(|op| matches!(op, DrawOp::Stroke(..))).count();
	(fills, strokes)
    };

    let stroked: PathStyle = "fill:none;stroke:#000000;stroke-width:2".parse().unwrap();

    assert_eq!(count(&PathStyle::new()), (1, 0));
    assert_eq!(count(&stroked), (0, 1));
    assert_eq!(count(&stroked.clone().with_stroke_width(0.0)), (0, 0));
    assert_eq!(count(&stroked.clone().with_stroke("transparent".parse().unwrap())), (0, 0));
    assert_eq!(count(&stroked.with_fill(Paint::Color(svgnode::Color::WHITE))), (1, 1));
}

#[test]
fn half_circle_arc() {
    let ops = geometry("M0 0 A10 10 0 0 1 20 0");

    match ops[1] {
	DrawOp::Arc { cx, cy, rx, start_angle, sweep_angle, .. } => {
	    assert_abs_diff_eq!(cx, 10.0, epsilon = 1e-9);
	    assert_abs_diff_eq!(cy, 0.0, epsilon = 1e-9);
	    assert_abs_diff_eq!(sweep_angle.abs(), 180.0, epsilon = 1e-9);

	    let start = start_angle.to_radians();
	    assert_abs_diff_eq!(cx + rx * start.cos(), 0.0, epsilon = 1e-9);
	    assert_abs_diff_eq!(cy + rx * start.sin(), 0.0, epsilon = 1e-9);
	},
	ref other => panic!("expected an arc, got {:?}", other),
    }
}

#[test]
fn degenerate_arcs_never_reach_sink_as_arcs() {
    let ops = geometry("M0 0 A0 0 0 0 1 10 0 A5 5 0 1 1 10 0 a1e-300 1e-300 0 0 0 5 5");

    assert_eq!(ops, vec![
	DrawOp::MoveTo(0.0, 0.0),
	DrawOp::LineTo(10.0, 0.0),
	DrawOp::LineTo(15.0, 5.0),
    ]);
}

#[test]
fn first_relative_moveto_is_absolute() {
    assert_eq!(geometry("m3 4 l1 1"), geometry("M3 4 L4 5"));
}

#[test]
fn paths_parse_independently_across_threads() {
    let handles: Vec<_> = (0..4)
	.map(|i| std::thread::spawn(move || parse(&format!("M{} 0 l1 1 1 1", i)).map(|c| c.len())))
	.collect();

    for handle in handles {
	assert_eq!(handle.join().unwrap(), Ok(3));
    }
}

fn operands(command: &PathCommand) -> Vec<f64> {
    match *command {
	PathCommand::MoveTo(_, p) | PathCommand::LineTo(_, p) | PathCommand::SmoothQuadraticCurveTo(_, p) => vec![p.x, p.y],
	PathCommand::HorizontalLineTo(_, v) | PathCommand::VerticalLineTo(_, v) => vec![v],
	PathCommand::QuadraticCurveTo(_, c, p) | PathCommand::SmoothCubicCurveTo(_, c, p) => vec![c.x, c.y, p.x, p.y],
	PathCommand::CubicCurveTo(_, c1, c2, p) => vec![c1.x, c1.y, c2.x, c2.y, p.x, p.y],
	PathCommand::EllipticalArcTo(_, ref a) => vec![
	    a.rx, a.ry, a.x_axis_rotation,
	    if a.large_arc { 1.0 } else { 0.0 },
	    if a.sweep { 1.0 } else { 0.0 },
	    a.to.x, a.to.y,
	],
	PathCommand::ClosePath => vec![],
    }
}

#[test]
fn demo_paths_agree_with_svg_crate() {
    for shape in demo::scene().shapes() {
	let ours: Vec<f64> = parse(&shape.data).unwrap().iter().flat_map(operands).collect();

	let theirs: Vec<f32> = Data::parse(&shape.data).unwrap().iter()
	    .flat_map(|command| match command {
		Command::Move(_, p) | Command::Line(_, p) | Command::HorizontalLine(_, p)
		| Command::VerticalLine(_, p) | Command::QuadraticCurve(_, p)
		| Command::SmoothQuadraticCurve(_, p) | Command::CubicCurve(_, p)
		| Command::SmoothCubicCurve(_, p) | Command::EllipticalArc(_, p) => p.iter().cloned().collect::<Vec<f32>>(),
		_ => vec![],
	    })
	    .collect();

	assert_eq!(ours.len(), theirs.len());
	for (a, b) in ours.iter().zip(&theirs) {
	    assert_abs_diff_eq!(*a as f32, *b, epsilon = 1e-3);
	}
    }
}
