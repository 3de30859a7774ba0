use clap::Parser;
use colored::Colorize;
use herd_cli::{cli::Cli, logging, run};

#[tokio::main]
async fn main() {
	let cli = Cli::parse();
	logging::init_logging(cli.verbose);

	if let Err(err) = run::run(cli).await {
		eprintln!("{} {err}", "error:".red().bold());
		std::process::exit(1);
	}
}
