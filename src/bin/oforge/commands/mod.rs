mod bond;
mod config;

use bond::run_bond;
use config::run_config;

use anyhow::Result;

use crate::cli::Cli;
use crate::cli::Command;
use crate::display::Context;

pub fn dispatch(cli: Cli, ctx: Context) -> Result<()> {
    let config_path = cli.global.config.as_deref();
    match cli.command {
        Command::Config(args) => run_config(args, config_path, ctx),
        Command::Bond(args) => run_bond(args, config_path, ctx),
    }
}
