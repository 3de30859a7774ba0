//! WebDriver server process ownership.
//!
//! Each launched browser is backed by its own server process
//! (chromedriver, geckodriver, msedgedriver) on a free loopback port.
//! Binary resolution checks the per-kind environment override first, then
//! falls back to `PATH`.

use std::env;
use std::net::TcpListener;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use tokio::net::TcpStream;
use tokio::process::{Child, Command};
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::error::{HerdError, Result};
use crate::kind::BrowserKind;

const READY_POLL_INTERVAL: Duration = Duration::from_millis(100);
const READY_POLL_ATTEMPTS: u32 = 50;

/// One spawned WebDriver server.
///
/// The child is killed on drop as a backstop; [`DriverServer::stop`] is the
/// intended teardown path.
pub struct DriverServer {
	kind: BrowserKind,
	child: Child,
	port: u16,
	url: String,
}

impl DriverServer {
	/// Spawns the server for `kind` on a free loopback port and waits until
	/// it accepts connections.
	pub async fn start(kind: BrowserKind) -> Result<Self> {
		let binary = resolve_binary(kind)?;
		let port = free_port()?;
		debug!(
			target: "herd.driver",
			browser = %kind,
			binary = %binary.display(),
			port,
			"starting webdriver server"
		);

		let child = Command::new(&binary)
			.arg(format!("--port={port}"))
			.stdin(Stdio::null())
			.stdout(Stdio::null())
			.stderr(Stdio::null())
			.kill_on_drop(true)
			.spawn()
			.map_err(|e| HerdError::Launch {
				kind,
				message: format!("failed to spawn {}: {e}", binary.display()),
			})?;

		let mut server = Self {
			kind,
			child,
			port,
			url: format!("http://127.0.0.1:{port}"),
		};
		server.wait_ready().await?;
		Ok(server)
	}

	/// Base URL of the running server.
	pub fn url(&self) -> &str {
		&self.url
	}

	/// Kills and reaps the server process. Never fails teardown.
	pub async fn stop(mut self) {
		if let Err(err) = self.child.start_kill() {
			warn!(
				target: "herd.driver",
				browser = %self.kind,
				error = %err,
				"failed to kill webdriver server"
			);
		}
		let _ = self.child.wait().await;
		debug!(target: "herd.driver", browser = %self.kind, port = self.port, "webdriver server stopped");
	}

	async fn wait_ready(&mut self) -> Result<()> {
		for _ in 0..READY_POLL_ATTEMPTS {
			if let Some(status) = self.child.try_wait()? {
				return Err(HerdError::Launch {
					kind: self.kind,
					message: format!("webdriver server exited during startup: {status}"),
				});
			}
			if TcpStream::connect(("127.0.0.1", self.port)).await.is_ok() {
				return Ok(());
			}
			sleep(READY_POLL_INTERVAL).await;
		}
		Err(HerdError::Launch {
			kind: self.kind,
			message: format!("webdriver server on port {} never accepted connections", self.port),
		})
	}
}

/// Resolves the server binary: env override first, then `PATH`.
fn resolve_binary(kind: BrowserKind) -> Result<PathBuf> {
	if let Some(path) = env::var_os(kind.driver_env()) {
		return Ok(PathBuf::from(path));
	}
	which::which(kind.driver_binary()).map_err(|_| HerdError::DriverNotFound {
		kind,
		binary: kind.driver_binary(),
		env: kind.driver_env(),
	})
}

/// Asks the OS for a currently-free loopback port.
fn free_port() -> Result<u16> {
	let listener = TcpListener::bind(("127.0.0.1", 0))?;
	Ok(listener.local_addr()?.port())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn free_port_is_bindable() {
		let port = free_port().unwrap();
		assert_ne!(port, 0);
		TcpListener::bind(("127.0.0.1", port)).unwrap();
	}

	#[tokio::test]
	async fn wait_ready_succeeds_once_port_is_listening() {
		let listener = TcpListener::bind(("127.0.0.1", 0)).unwrap();
		let port = listener.local_addr().unwrap().port();
		let child = Command::new("sleep")
			.arg("30")
			.kill_on_drop(true)
			.spawn()
			.unwrap();

		let mut server = DriverServer {
			kind: BrowserKind::Chrome,
			child,
			port,
			url: format!("http://127.0.0.1:{port}"),
		};
		server.wait_ready().await.unwrap();
		server.stop().await;
	}

	#[tokio::test]
	async fn wait_ready_reports_launch_failure_for_dead_server() {
		let port = free_port().unwrap();
		let child = Command::new("sh")
			.arg("-c")
			.arg("exit 3")
			.kill_on_drop(true)
			.spawn()
			.unwrap();

		let mut server = DriverServer {
			kind: BrowserKind::Firefox,
			child,
			port,
			url: format!("http://127.0.0.1:{port}"),
		};
		let err = server.wait_ready().await.unwrap_err();
		assert!(matches!(err, HerdError::Launch { kind: BrowserKind::Firefox, .. }));
	}
}
