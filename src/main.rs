use clap::Parser;
use flamegen::cli::Cli;
use flamegen::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = if cli.quiet { Printer::quiet() } else { Printer::new() };

    flamegen::cli::run(cli, &printer)?;

    Ok(())
}
