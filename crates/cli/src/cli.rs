use std::path::PathBuf;

use clap::Parser;
use herd::BrowserKind;

/// Root CLI for herd.
#[derive(Parser, Debug)]
#[command(name = "herd")]
#[command(about = "Launch a herd of browsers, park them on a page, close them all at once")]
#[command(version)]
pub struct Cli {
	/// Increase verbosity (-v info, -vv debug)
	#[arg(short, long, action = clap::ArgAction::Count)]
	pub verbose: u8,

	/// Path to a JSON browser configuration file
	#[arg(short, long, value_name = "FILE")]
	pub config: Option<PathBuf>,

	/// Launch only the given browser kinds (repeatable)
	#[arg(short, long = "browser", value_name = "KIND", value_parser = parse_kind)]
	pub browser: Vec<BrowserKind>,

	/// Run every browser headless
	#[arg(long)]
	pub headless: bool,
}

fn parse_kind(raw: &str) -> herd::Result<BrowserKind> {
	raw.parse()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn bare_invocation_uses_defaults() {
		let cli = Cli::try_parse_from(["herd"]).unwrap();
		assert_eq!(cli.verbose, 0);
		assert!(cli.config.is_none());
		assert!(cli.browser.is_empty());
		assert!(!cli.headless);
	}

	#[test]
	fn browser_filter_accepts_known_kinds() {
		let cli = Cli::try_parse_from(["herd", "--browser", "chrome", "-b", "edge", "--headless"]).unwrap();
		assert_eq!(cli.browser, [BrowserKind::Chrome, BrowserKind::Edge]);
		assert!(cli.headless);
	}

	#[test]
	fn unknown_browser_kind_is_rejected() {
		assert!(Cli::try_parse_from(["herd", "--browser", "safari"]).is_err());
	}

	#[test]
	fn verbosity_flag_counts() {
		let cli = Cli::try_parse_from(["herd", "-vv"]).unwrap();
		assert_eq!(cli.verbose, 2);
	}
}
