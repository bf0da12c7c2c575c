//! firecat CLI - build and input tooling for the game client
//!
//! Usage: firecat <COMMAND>
//!
//! Commands:
//!   build    Production build into the output directory
//!   dev      Build, then rebuild whenever sources change
//!   preview  Show what the last build would serve
//!   keys     Check whether the capture filter swallows a key event

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod ui;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli) {
        ui::output::print_error(&err, json);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let root = cli.root.as_deref();
    match cli.command {
        Commands::Build {
            out_dir,
            base,
            profile,
        } => commands::build::cmd_build(
            root,
            out_dir,
            base,
            profile.map(Into::into),
            cli.json,
            cli.verbose,
            cli.color,
        ),
        Commands::Dev { port, host } => {
            commands::dev::cmd_dev(root, port, host, cli.json, cli.verbose, cli.color)
        }
        Commands::Preview {
            out_dir,
            port,
            host,
        } => commands::preview::cmd_preview(
            root,
            out_dir,
            port,
            host,
            cli.json,
            cli.verbose,
            cli.color,
        ),
        Commands::Keys {
            key,
            ctrl,
            alt,
            meta,
            up,
        } => commands::keys::cmd_keys(key, ctrl, alt, meta, up, cli.json, cli.color),
    }
}
