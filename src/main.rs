mod app;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod output;
mod scan;
mod utils;

use clap::Parser;

use cli::Cli;
use config::Config;
use utils::set_scan_debug;

fn main() {
    let cli = Cli::parse();

    // JSON runs load config without stderr chatter
    let config = if cli.json {
        Config::load_quiet()
    } else {
        Config::load()
    };
    let cli = cli.with_config(&config);

    set_scan_debug(cli.debug);

    if let Err(err) = app::run(&cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
