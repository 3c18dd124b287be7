//! Export backends: DOT generation and Graphviz execution.
//!
//! A validated [`DiagramHierarchy`](crate::structure::DiagramHierarchy) is
//! lowered to a `dot_structures::Graph` by the [`dot`] submodule, printed to
//! DOT source text, and optionally handed to the external Graphviz `dot`
//! binary for rasterization.

pub(crate) mod dot;

use std::{fmt, io, str::FromStr};

use graphviz_rust::{
    cmd::Format,
    printer::{DotPrinter, PrinterContext},
};

use crate::{config::AppConfig, structure::DiagramHierarchy};

/// Export-stage errors.
#[derive(Debug)]
pub enum Error {
    Render(String),
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}

/// Output formats supported by the renderer.
///
/// `Png` and `Svg` run the Graphviz `dot` executable; `Dot` emits the
/// generated source text without invoking Graphviz at all.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// Raster image (default, matches the published diagrams).
    #[default]
    Png,
    /// Vector image.
    Svg,
    /// Raw Graphviz DOT source.
    Dot,
}

impl OutputFormat {
    /// File extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
            OutputFormat::Dot => "dot",
        }
    }

    /// The Graphviz output format, or `None` when no Graphviz run is needed.
    fn graphviz_format(self) -> Option<Format> {
        match self {
            OutputFormat::Png => Some(Format::Png),
            OutputFormat::Svg => Some(Format::Svg),
            OutputFormat::Dot => None,
        }
    }
}

impl FromStr for OutputFormat {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "png" => Ok(Self::Png),
            "svg" => Ok(Self::Svg),
            "dot" => Ok(Self::Dot),
            _ => Err("Unsupported output format"),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Print a validated hierarchy as DOT source text.
pub(crate) fn to_dot_source(
    hierarchy: &DiagramHierarchy<'_>,
    config: &AppConfig,
) -> Result<String, Error> {
    let graph = dot::lower(hierarchy, config)?;
    Ok(graph.print(&mut PrinterContext::default()))
}

/// Turn DOT source into output bytes for the requested format.
///
/// For [`OutputFormat::Dot`] this is the source itself; otherwise the
/// external Graphviz `dot` binary performs layout and rasterization, and any
/// failure it reports surfaces as a single error.
pub(crate) fn render_bytes(source: String, format: OutputFormat) -> Result<Vec<u8>, Error> {
    match format.graphviz_format() {
        None => Ok(source.into_bytes()),
        Some(gv_format) => {
            graphviz_rust::exec_dot(source, vec![gv_format.into()]).map_err(Error::Io)
        }
    }
}
