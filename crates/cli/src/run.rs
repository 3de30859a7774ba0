//! Entry flow: launch every configured browser, park them on the landing
//! page, then tear the whole herd down.

use colored::Colorize;
use herd::{HerdConfig, HerdError, Result, SessionManager};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use crate::cli::Cli;

/// Every launched session is pointed at this page.
const LANDING_URL: &str = "https://www.example.com";

/// Runs the launch/acknowledge/teardown cycle.
///
/// `close_all` runs on the normal and the failing path alike, so sessions
/// opened before a launch or navigation failure never outlive the process.
pub async fn run(cli: Cli) -> Result<()> {
	let mut config = match &cli.config {
		Some(path) => HerdConfig::from_file(path)?,
		None => HerdConfig::builtin(),
	};
	if !cli.browser.is_empty() {
		config.retain(&cli.browser);
	}
	if cli.headless {
		config.force_headless();
	}
	if config.is_empty() {
		return Err(HerdError::Config("no browsers configured".to_string()));
	}

	let mut manager = SessionManager::new();
	let outcome = drive(&mut manager, &config).await;
	manager.close_all().await;
	println!("{}", "all browser sessions closed".dimmed());
	outcome
}

async fn drive(manager: &mut SessionManager, config: &HerdConfig) -> Result<()> {
	for (kind, profile) in config.iter() {
		println!("{} {}...", "launching".green().bold(), profile.name);
		let session = manager.launch(kind, profile).await?;
		session.navigate(LANDING_URL).await?;
	}
	info!(target: "herd", count = config.len(), url = LANDING_URL, "all configured browsers are up");

	wait_for_ack().await
}

async fn wait_for_ack() -> Result<()> {
	println!("{}", "press Enter to close all browsers...".bold());
	let mut line = String::new();
	BufReader::new(tokio::io::stdin()).read_line(&mut line).await?;
	Ok(())
}
