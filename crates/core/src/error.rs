use thiserror::Error;

use crate::kind::BrowserKind;

pub type Result<T> = std::result::Result<T, HerdError>;

#[derive(Debug, Error)]
pub enum HerdError {
	/// Browser kind outside the supported set. Surfaces at the
	/// configuration boundary; the kind space itself is a closed enum.
	#[error("unsupported browser kind: {0}")]
	UnsupportedBrowserKind(String),

	#[error("invalid configuration: {0}")]
	Config(String),

	#[error("webdriver server `{binary}` for {kind} not found on PATH; install it or set {env}")]
	DriverNotFound {
		kind: BrowserKind,
		binary: &'static str,
		env: &'static str,
	},

	#[error("failed to launch {kind}: {message}")]
	Launch { kind: BrowserKind, message: String },

	#[error("navigation failed: {url}")]
	Navigation {
		url: String,
		#[source]
		source: anyhow::Error,
	},

	#[error(transparent)]
	Io(#[from] std::io::Error),

	#[error(transparent)]
	Json(#[from] serde_json::Error),

	#[error(transparent)]
	WebDriver(#[from] thirtyfour::error::WebDriverError),
}
