//! classcheck CLI entry point

use clap::Parser;
use classcheck::cli::{args::Cli, check, common, list};
use std::process;

fn main() {
    let cli = Cli::parse();
    common::init_logging(cli.verbose);

    let exit_code = if cli.list {
        list::run_list(cli.format)
    } else {
        check::run_check(cli.check, &cli.root, cli.format)
    };

    process::exit(exit_code);
}
