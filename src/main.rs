use clap::Parser;
use colored::*;
use skaffold_config::cli::Cli;
use skaffold_config::commands::runner::CommandRunner;
use skaffold_config::kubectx::KubectlContextProvider;
use std::io;

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    let runner = CommandRunner::new(Box::new(KubectlContextProvider::default()));
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = runner.run(&cli, &mut out) {
        eprintln!("{} {}", "Error:".bright_red(), e);
        std::process::exit(1);
    }
}
