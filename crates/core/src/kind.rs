use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thirtyfour::{Capabilities, ChromiumLikeCapabilities, DesiredCapabilities};

use crate::config::BrowserProfile;
use crate::error::{HerdError, Result};

/// Browser family targeted by a launch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrowserKind {
	/// Google Chrome via chromedriver.
	Chrome,
	/// Mozilla Firefox via geckodriver.
	Firefox,
	/// Microsoft Edge via msedgedriver.
	Edge,
}

impl BrowserKind {
	/// All supported kinds, in canonical launch order.
	pub fn all() -> [BrowserKind; 3] {
		[BrowserKind::Chrome, BrowserKind::Firefox, BrowserKind::Edge]
	}

	/// Executable name of the matching WebDriver server.
	pub fn driver_binary(self) -> &'static str {
		match self {
			BrowserKind::Chrome => "chromedriver",
			BrowserKind::Firefox => "geckodriver",
			BrowserKind::Edge => "msedgedriver",
		}
	}

	/// Environment variable that overrides driver binary lookup.
	pub fn driver_env(self) -> &'static str {
		match self {
			BrowserKind::Chrome => "HERD_CHROMEDRIVER",
			BrowserKind::Firefox => "HERD_GECKODRIVER",
			BrowserKind::Edge => "HERD_EDGEDRIVER",
		}
	}

	/// Builds launch capabilities for this kind from `profile`.
	///
	/// Startup options are applied verbatim, in sequence order.
	pub fn capabilities(self, profile: &BrowserProfile) -> Result<Capabilities> {
		match self {
			BrowserKind::Chrome => {
				let mut caps = DesiredCapabilities::chrome();
				if profile.headless {
					caps.set_headless()?;
				}
				for option in &profile.options {
					caps.add_arg(option)?;
				}
				Ok(caps.into())
			}
			BrowserKind::Firefox => {
				let mut caps = DesiredCapabilities::firefox();
				if profile.headless {
					caps.set_headless()?;
				}
				for option in &profile.options {
					caps.add_arg(option)?;
				}
				Ok(caps.into())
			}
			BrowserKind::Edge => {
				let mut caps = DesiredCapabilities::edge();
				if profile.headless {
					caps.set_headless()?;
				}
				for option in &profile.options {
					caps.add_arg(option)?;
				}
				Ok(caps.into())
			}
		}
	}
}

impl fmt::Display for BrowserKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			BrowserKind::Chrome => write!(f, "chrome"),
			BrowserKind::Firefox => write!(f, "firefox"),
			BrowserKind::Edge => write!(f, "edge"),
		}
	}
}

impl FromStr for BrowserKind {
	type Err = HerdError;

	fn from_str(raw: &str) -> Result<Self> {
		match raw {
			"chrome" => Ok(BrowserKind::Chrome),
			"firefox" => Ok(BrowserKind::Firefox),
			"edge" => Ok(BrowserKind::Edge),
			other => Err(HerdError::UnsupportedBrowserKind(other.to_string())),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn display_round_trips_through_from_str() {
		for kind in BrowserKind::all() {
			assert_eq!(kind.to_string().parse::<BrowserKind>().unwrap(), kind);
		}
	}

	#[test]
	fn unknown_kind_is_rejected() {
		let err = "safari".parse::<BrowserKind>().unwrap_err();
		assert!(matches!(err, HerdError::UnsupportedBrowserKind(ref k) if k == "safari"));
	}

	#[test]
	fn driver_binaries_match_kinds() {
		assert_eq!(BrowserKind::Chrome.driver_binary(), "chromedriver");
		assert_eq!(BrowserKind::Firefox.driver_binary(), "geckodriver");
		assert_eq!(BrowserKind::Edge.driver_binary(), "msedgedriver");
	}

	#[test]
	fn serde_uses_lowercase_names() {
		assert_eq!(serde_json::to_string(&BrowserKind::Edge).unwrap(), "\"edge\"");
		let kind: BrowserKind = serde_json::from_str("\"firefox\"").unwrap();
		assert_eq!(kind, BrowserKind::Firefox);
	}

	#[test]
	fn startup_options_land_in_capabilities() {
		let profile = BrowserProfile {
			name: "Chrome".into(),
			options: vec!["--start-maximized".into(), "--disable-notifications".into()],
			headless: false,
			webdriver_url: None,
		};
		let caps = BrowserKind::Chrome.capabilities(&profile).unwrap();
		let json = serde_json::to_value(&caps).unwrap().to_string();
		assert!(json.contains("goog:chromeOptions"));
		assert!(json.contains("--start-maximized"));
		assert!(json.contains("--disable-notifications"));
	}

	#[test]
	fn firefox_options_use_moz_namespace() {
		let profile = BrowserProfile {
			name: "Firefox".into(),
			options: vec!["--start-maximized".into()],
			headless: false,
			webdriver_url: None,
		};
		let caps = BrowserKind::Firefox.capabilities(&profile).unwrap();
		let json = serde_json::to_value(&caps).unwrap().to_string();
		assert!(json.contains("moz:firefoxOptions"));
		assert!(json.contains("--start-maximized"));
	}
}
