use clap::error::ErrorKind;
use clap::Parser;
use miette::Result;
use mktartan::cli::Cli;
use mktartan::output::Printer;
use mktartan::TartanError;

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::DisplayVersion => e.exit(),
        Err(e) => return Err(argument_error(&e).into()),
    };

    mktartan::cli::run(cli, &Printer::new())?;

    Ok(())
}

/// Turn a clap error into a one-line argument error, so bad arguments exit
/// with status 1 like every other failure.
fn argument_error(e: &clap::Error) -> TartanError {
    let rendered = e.to_string();
    let message = rendered
        .lines()
        .next()
        .unwrap_or_default()
        .trim_start_matches("error: ")
        .to_string();
    TartanError::InvalidArguments { message }
}
