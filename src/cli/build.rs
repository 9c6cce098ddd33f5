//! Build command implementation.
//!
//! Weaves each tartan definition file and writes its XPM and/or BMP image
//! next to it. Files are processed one after another; the first error
//! stops the run.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::error::Result;
use crate::output::Printer;
use crate::parser::load_tartan;
use crate::render::{write_bmp, write_xpm, RenderOptions, Sampler, BMP_EXTENSION, XPM_EXTENSION};
use crate::validation::{print_diagnostics, validate_tartan};

/// Weave tartan definition files into images
#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    /// Make a .bmp file only
    #[arg(short = 'b')]
    pub bmp: bool,

    /// Make a .xpm file only
    #[arg(short = 'x')]
    pub xpm: bool,

    /// Multiply every thread count by <N> [default: 1, or 2 with -c]
    #[arg(short = 's', value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub scale: Option<u32>,

    /// Weave at a 45 degree angle (cross)
    #[arg(short = 'c')]
    pub cross: bool,

    /// Tartan definition (.tdf) files
    pub files: Vec<PathBuf>,
}

impl BuildArgs {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::new(self.scale, self.cross)
    }

    pub fn formats(&self) -> OutputFormats {
        OutputFormats::from_flags(self.xpm, self.bmp)
    }
}

/// Which image formats to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputFormats {
    pub xpm: bool,
    pub bmp: bool,
}

impl OutputFormats {
    pub const ALL: Self = Self {
        xpm: true,
        bmp: true,
    };

    /// Formats for the `-x` / `-b` flags: the ones asked for, or all of
    /// them when neither flag is set.
    pub fn from_flags(xpm: bool, bmp: bool) -> Self {
        if xpm || bmp {
            Self { xpm, bmp }
        } else {
            Self::ALL
        }
    }
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let options = args.render_options();
    let formats = args.formats();

    let mut written = 0;
    for file in &args.files {
        written += build_file(file, &options, formats, printer)?.len();
    }

    printer.finished(written, args.files.len());

    Ok(())
}

/// Weave one definition file and write its images.
/// Returns the paths written.
pub fn build_file(
    path: &Path,
    options: &RenderOptions,
    formats: OutputFormats,
    printer: &Printer,
) -> Result<Vec<PathBuf>> {
    printer.weaving(path);

    let tartan = load_tartan(path, options.scale)?;
    print_diagnostics(&validate_tartan(&tartan), printer);

    let rendered = Sampler::new(&tartan.weave, options).render()?;
    let mut written = Vec::new();

    if formats.xpm {
        let output = path.with_extension(XPM_EXTENSION);
        write_xpm(&tartan.palette, &rendered, &output)?;
        printer.wrote(&output, rendered.width(), rendered.height());
        written.push(output);
    }

    if formats.bmp {
        let output = path.with_extension(BMP_EXTENSION);
        write_bmp(&tartan.palette, &rendered, &output)?;
        printer.wrote(&output, rendered.width(), rendered.height());
        written.push(output);
    }

    Ok(written)
}
