pub mod build;
pub mod help;

use clap::Parser;

use crate::error::Result;
use crate::output::Printer;

/// mktartan - Tartan and tweed image weaver
#[derive(Parser, Debug)]
#[command(name = "mktartan")]
#[command(version, about, long_about = None, disable_help_flag = true)]
pub struct Cli {
    /// Print help and exit
    #[arg(short = 'h', long = "help")]
    pub help: bool,

    #[command(flatten)]
    pub build: build::BuildArgs,
}

/// Run the command line, printing help when asked for or when there is
/// nothing to build.
pub fn run(cli: Cli, printer: &Printer) -> Result<()> {
    if cli.help || cli.build.files.is_empty() {
        eprint!("{}", help::HELP);
        return Ok(());
    }

    build::run(cli.build, printer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("mktartan").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_parse_defaults() {
        let cli = parse(&["mar.tdf"]);
        assert!(!cli.help);
        assert!(!cli.build.cross);
        assert_eq!(cli.build.scale, None);
        assert_eq!(cli.build.files, vec![PathBuf::from("mar.tdf")]);
    }

    #[test]
    fn test_parse_attached_scale() {
        let cli = parse(&["-s3", "mar.tdf"]);
        assert_eq!(cli.build.scale, Some(3));
    }

    #[test]
    fn test_parse_separate_scale() {
        let cli = parse(&["-s", "4", "mar.tdf"]);
        assert_eq!(cli.build.scale, Some(4));
    }

    #[test]
    fn test_parse_flags() {
        let cli = parse(&["-b", "-c", "-x", "a.tdf", "b.tdf"]);
        assert!(cli.build.bmp);
        assert!(cli.build.xpm);
        assert!(cli.build.cross);
        assert_eq!(cli.build.files.len(), 2);
    }

    #[test]
    fn test_parse_help_flag() {
        assert!(parse(&["-h"]).help);
    }

    #[test]
    fn test_zero_scale_rejected() {
        let result = Cli::try_parse_from(["mktartan", "-s0", "mar.tdf"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_flag_rejected() {
        let result = Cli::try_parse_from(["mktartan", "-q", "mar.tdf"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_run_without_files_prints_help() {
        let cli = parse(&[]);
        assert!(run(cli, &Printer::new()).is_ok());
    }
}
