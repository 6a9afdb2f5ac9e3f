//! Pulls path data out of SVG documents.
//!
//! Only the `d` attribute of `<path>` elements is read. Transforms, styles
//! and every other element are ignored.

use std::io;
use std::path::Path;

use log::debug;
use svg::node::element::tag;
use svg::parser::{Event, Parser};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("could not read document: {0}")]
    Io(#[from] io::Error),

    #[error("malformed document: {0}")]
    Malformed(String),
}

fn collect_path_data<'l>(events: impl Iterator<Item = Event<'l>>) -> Result<Vec<String>, DocumentError> {
    let mut paths = Vec::new();

    for event in events {
	match event {
	    Event::Tag(tag::Path, _, attributes) => {
		if let Some(value) = attributes.get("d") {
		    let d: &str = value;
		    paths.push(String::from(d));
		}
	    },
	    Event::Error(e) => return Err(DocumentError::Malformed(format!("{:?}", e))),
	    _ => (),
	}
    }

    debug!("found {} path elements", paths.len());

    Ok(paths)
}

/// Returns the `d` attribute of every `<path>` in `source`, in document order.
pub fn path_data(source: &str) -> Result<Vec<String>, DocumentError> {
    collect_path_data(Parser::new(source))
}

/// Reads the document at `path` and returns its path data.
pub fn load<T: AsRef<Path>>(path: T) -> Result<Vec<String>, DocumentError> {
    let mut content = String::new();
    let events = svg::open(path, &mut content)?;

    collect_path_data(events)
}
