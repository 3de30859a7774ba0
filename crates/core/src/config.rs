//! Browser launch configuration.
//!
//! The launch table is built once at startup, either from the builtin
//! defaults or from a JSON file, and handed explicitly to the entry flow
//! and session manager.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::error::{HerdError, Result};
use crate::kind::BrowserKind;

/// Startup options every builtin profile carries.
const DEFAULT_OPTIONS: [&str; 2] = ["--start-maximized", "--disable-notifications"];

/// Launch profile for one browser kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserProfile {
	/// Human-facing browser name used in status output.
	pub name: String,
	/// Command-line style startup options, applied in order.
	#[serde(default)]
	pub options: Vec<String>,
	/// Launch without a visible window.
	#[serde(default)]
	pub headless: bool,
	/// Attach to an already-running WebDriver server instead of spawning one.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub webdriver_url: Option<String>,
}

impl BrowserProfile {
	fn builtin(kind: BrowserKind) -> Self {
		let name = match kind {
			BrowserKind::Chrome => "Chrome",
			BrowserKind::Firefox => "Firefox",
			BrowserKind::Edge => "Edge",
		};
		Self {
			name: name.to_string(),
			options: DEFAULT_OPTIONS.iter().map(|s| s.to_string()).collect(),
			headless: false,
			webdriver_url: None,
		}
	}
}

/// On-disk form of one config entry. `kind` stays a raw string so unknown
/// kinds surface as [`HerdError::UnsupportedBrowserKind`] instead of an
/// opaque serde error.
#[derive(Debug, Serialize, Deserialize)]
struct RawEntry {
	kind: String,
	#[serde(flatten)]
	profile: BrowserProfile,
}

#[derive(Debug, Serialize, Deserialize)]
struct RawConfig {
	browsers: Vec<RawEntry>,
}

/// Immutable launch table: one profile per browser kind, in table order.
#[derive(Debug, Clone)]
pub struct HerdConfig {
	entries: Vec<(BrowserKind, BrowserProfile)>,
}

impl HerdConfig {
	/// Default table: all supported kinds with the canonical options.
	pub fn builtin() -> Self {
		Self {
			entries: BrowserKind::all()
				.iter()
				.map(|&kind| (kind, BrowserProfile::builtin(kind)))
				.collect(),
		}
	}

	/// Loads the JSON config file at `path`.
	pub fn from_file(path: &Path) -> Result<Self> {
		let raw = fs::read_to_string(path)?;
		let config = Self::from_json(&raw)?;
		debug!(
			target: "herd.config",
			path = %path.display(),
			browsers = config.len(),
			"loaded config file"
		);
		Ok(config)
	}

	/// Parses the JSON config form.
	pub fn from_json(raw: &str) -> Result<Self> {
		let raw: RawConfig = serde_json::from_str(raw)?;
		let mut entries: Vec<(BrowserKind, BrowserProfile)> = Vec::with_capacity(raw.browsers.len());
		for entry in raw.browsers {
			let kind: BrowserKind = entry.kind.parse()?;
			if entries.iter().any(|(tracked, _)| *tracked == kind) {
				return Err(HerdError::Config(format!("duplicate browser kind: {kind}")));
			}
			validate_profile(kind, &entry.profile)?;
			entries.push((kind, entry.profile));
		}
		Ok(Self { entries })
	}

	/// Keeps only the given kinds, preserving table order.
	pub fn retain(&mut self, kinds: &[BrowserKind]) {
		self.entries.retain(|(kind, _)| kinds.contains(kind));
	}

	/// Forces headless launch for every profile.
	pub fn force_headless(&mut self) {
		for (_, profile) in &mut self.entries {
			profile.headless = true;
		}
	}

	/// Looks up the profile for `kind`.
	pub fn get(&self, kind: BrowserKind) -> Option<&BrowserProfile> {
		self.entries
			.iter()
			.find(|(tracked, _)| *tracked == kind)
			.map(|(_, profile)| profile)
	}

	/// Iterates entries in table order.
	pub fn iter(&self) -> impl Iterator<Item = (BrowserKind, &BrowserProfile)> {
		self.entries.iter().map(|(kind, profile)| (*kind, profile))
	}

	/// Number of configured browsers.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether no browsers are configured.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

fn validate_profile(kind: BrowserKind, profile: &BrowserProfile) -> Result<()> {
	if profile.name.trim().is_empty() {
		return Err(HerdError::Config(format!("empty display name for {kind}")));
	}
	if let Some(raw) = &profile.webdriver_url {
		Url::parse(raw).map_err(|e| HerdError::Config(format!("invalid webdriver_url for {kind}: {e}")))?;
	}
	Ok(())
}
