use std::env;
use std::fs::File;

use anyhow::{anyhow, bail, Context, Result};
use log::{info, warn};

use svgnode::{demo, document, CairoSink, PathShape, Scene};

const USAGE: &str = "usage: svgnode [--size WxH] [--keep-aspect|--stretch] [--output FILE] [SVG_FILE | -d PATH_DATA ...]";

#[derive(Debug)]
enum Input {
    Demo,
    Document(String),
    Data(Vec<String>),
}

#[derive(Debug)]
struct Options {
    size: Option<(i32, i32)>,
    keep_aspect: bool,
    output: String,
    input: Input,
}

fn parse_size(s: &str) -> Result<(i32, i32)> {
    let mut dims = s.splitn(2, |c| c == 'x' || c == 'X');
    let width = dims.next().unwrap_or("").trim().parse().with_context(|| format!("invalid width in {:?}", s))?;
    let height = dims.next().unwrap_or("").trim().parse().with_context(|| format!("invalid height in {:?}", s))?;

    if width <= 0 || height <= 0 {
	bail!("size must be positive, got {}", s);
    }

    Ok((width, height))
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options> {
    let mut options = Options {
	size: None,
	keep_aspect: true,
	output: String::from("svgnode.png"),
	input: Input::Demo,
    };
    let mut data = Vec::new();

    while let Some(arg) = args.next() {
	let mut value = |name: &str| args.next().ok_or_else(|| anyhow!("{} needs a value\n{}", name, USAGE));

	match arg.as_str() {
	    "--size" => options.size = Some(parse_size(&value("--size")?)?),
	    "--keep-aspect" => options.keep_aspect = true,
	    "--stretch" => options.keep_aspect = false,
	    "--output" | "-o" => options.output = value("--output")?,
	    "-d" => data.push(value("-d")?),
	    "--help" | "-h" => bail!("{}", USAGE),
	    flag if flag.starts_with('-') => bail!("unknown option {}\n{}", flag, USAGE),
	    _ => match options.input {
		Input::Demo => options.input = Input::Document(arg),
		_ => bail!("only one document may be given\n{}", USAGE),
	    },
	}
    }

    if !data.is_empty() {
	if let Input::Document(_) = options.input {
	    bail!("-d cannot be combined with a document\n{}", USAGE);
	}
	options.input = Input::Data(data);
    }

    Ok(options)
}

fn load_scene(input: &Input, size: Option<(i32, i32)>) -> Result<Scene> {
    let (width, height) = size.unwrap_or((demo::SIZE as i32, demo::SIZE as i32));
    let custom = |paths: Vec<String>| Scene::new(f64::from(width), f64::from(height))
	.with_shapes(paths.into_iter().map(PathShape::new));

    Ok(match input {
	Input::Demo => demo::scene(),
	Input::Document(path) => custom(document::load(path).with_context(|| format!("loading {}", path))?),
	Input::Data(data) => custom(data.clone()),
    })
}

fn render(scene: &mut Scene, width: i32, height: i32, output: &str) -> Result<()> {
    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)
	.map_err(|e| anyhow!("could not create surface: {:?}", e))?;
    let cr = cairo::Context::new(&surface);

    // ***** SET BACKGROUND *******
    cr.set_source_rgb(1.0, 1.0, 1.0);
    cr.paint();

    let viewport = scene.fit(f64::from(width), f64::from(height))
	.ok_or_else(|| anyhow!("scene has no area"))?;
    cr.translate(viewport.offset_x, viewport.offset_y);
    cr.scale(viewport.scale_x, viewport.scale_y);

    for error in scene.render(&mut CairoSink::new(&cr)) {
	warn!("{}", error);
    }

    let mut file = File::create(output).with_context(|| format!("creating {}", output))?;
    surface.write_to_png(&mut file).map_err(|e| anyhow!("writing {}: {:?}", output, e))?;

    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let options = parse_args(env::args().skip(1))?;
    let mut scene = load_scene(&options.input, options.size)?;
    scene.set_keep_aspect(options.keep_aspect);

    let (width, height) = options.size.unwrap_or((scene.width() as i32, scene.height() as i32));

    info!("rendering {} shapes to {} ({}x{})", scene.shapes().len(), options.output, width, height);
    render(&mut scene, width, height, &options.output)
}
