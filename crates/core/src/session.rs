//! Live browser sessions.
//!
//! A session owns the WebDriver connection plus the driver server backing
//! it, and exposes explicit close semantics; the manager relies on the
//! [`ManagedSession`] seam so lifecycle invariants stay testable without a
//! running browser.

use async_trait::async_trait;
use thirtyfour::WebDriver;
use tracing::debug;

use crate::config::BrowserProfile;
use crate::driver::DriverServer;
use crate::error::{HerdError, Result};
use crate::kind::BrowserKind;

/// Lifecycle contract between [`crate::manager::SessionManager`] and the
/// concrete WebDriver-backed session.
#[async_trait]
pub trait ManagedSession: Send {
	/// Kind this session was launched as.
	fn kind(&self) -> BrowserKind;

	/// Terminates the session, releasing every owned resource.
	async fn close(self) -> Result<()>;
}

/// One live browser: the WebDriver connection plus the server process that
/// backs it (absent when attached to an external server).
pub struct BrowserSession {
	kind: BrowserKind,
	name: String,
	driver: WebDriver,
	server: Option<DriverServer>,
}

impl BrowserSession {
	/// Launches a new session for `kind` configured by `profile`.
	pub async fn launch(kind: BrowserKind, profile: &BrowserProfile) -> Result<Self> {
		let caps = kind.capabilities(profile)?;

		let (server, endpoint) = match profile.webdriver_url.as_deref() {
			Some(url) => {
				debug!(target: "herd.session", browser = %kind, %url, "attaching to external webdriver server");
				(None, url.to_string())
			}
			None => {
				let server = DriverServer::start(kind).await?;
				let endpoint = server.url().to_string();
				(Some(server), endpoint)
			}
		};

		let driver = match WebDriver::new(&endpoint, caps).await {
			Ok(driver) => driver,
			Err(err) => {
				// A server spawned for this session must not outlive the failed launch.
				if let Some(server) = server {
					server.stop().await;
				}
				return Err(HerdError::Launch {
					kind,
					message: err.to_string(),
				});
			}
		};

		debug!(target: "herd.session", browser = %kind, endpoint = %endpoint, "session established");
		Ok(Self {
			kind,
			name: profile.name.clone(),
			driver,
			server,
		})
	}

	/// Display name from the launching profile.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Navigates the session to `url`.
	pub async fn navigate(&self, url: &str) -> Result<()> {
		self.driver.goto(url).await.map_err(|e| HerdError::Navigation {
			url: url.to_string(),
			source: anyhow::Error::new(e),
		})
	}
}

#[async_trait]
impl ManagedSession for BrowserSession {
	fn kind(&self) -> BrowserKind {
		self.kind
	}

	async fn close(self) -> Result<()> {
		let quit = self.driver.quit().await;
		if let Some(server) = self.server {
			server.stop().await;
		}
		quit.map_err(HerdError::from)
	}
}
