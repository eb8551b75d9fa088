use clap::Parser;
use miette::Result;
use mosaic::cli::{Cli, Commands};
use mosaic::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = if cli.quiet {
        Printer::quiet()
    } else {
        Printer::new()
    };

    match cli.command {
        Commands::Convert(args) => {
            mosaic::cli::convert::run(args, &printer)?;
        }
        Commands::Palette(args) => mosaic::cli::palette::run(args, &printer)?,
        Commands::Init(args) => mosaic::cli::init::run(args, &printer)?,
        Commands::Completions(args) => mosaic::cli::completions::run(args)?,
    }

    Ok(())
}
