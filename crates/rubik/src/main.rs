//! Rubik's cube simulator.

mod cli;
mod summary;

fn main() -> eyre::Result<()> {
    use clap::Parser;

    let args = cli::Args::parse();

    color_eyre::install()?;
    env_logger::builder().init();

    cli::exec(args.subcommand)
}
