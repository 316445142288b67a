mod cli;
mod commands;
mod output;
mod tui;

use clap::Parser;

fn main() {
    let cli = cli::Cli::parse();

    if let Err(err) = tabsync::logging::init(cli.log_file.as_deref()) {
        eprintln!("{err}");
        std::process::exit(1);
    }

    if let Err(err) = commands::dispatch(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
