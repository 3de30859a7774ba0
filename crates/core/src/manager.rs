//! Exclusive ownership of active browser sessions.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::config::BrowserProfile;
use crate::error::Result;
use crate::kind::BrowserKind;
use crate::session::{BrowserSession, ManagedSession};

/// Owns the mapping from browser kind to live session.
///
/// At most one session is tracked per kind; tracking a kind that already
/// holds a live session closes the previous session before the new one
/// replaces it.
pub struct SessionManager<S = BrowserSession> {
	sessions: BTreeMap<BrowserKind, S>,
}

impl<S: ManagedSession> SessionManager<S> {
	/// Creates an empty manager.
	pub fn new() -> Self {
		Self {
			sessions: BTreeMap::new(),
		}
	}

	/// Returns the tracked session for `kind`.
	pub fn get(&self, kind: BrowserKind) -> Option<&S> {
		self.sessions.get(&kind)
	}

	/// Whether a session is tracked for `kind`.
	pub fn contains(&self, kind: BrowserKind) -> bool {
		self.sessions.contains_key(&kind)
	}

	/// Number of tracked sessions.
	pub fn len(&self) -> usize {
		self.sessions.len()
	}

	/// Whether no sessions are tracked.
	pub fn is_empty(&self) -> bool {
		self.sessions.is_empty()
	}

	/// Takes ownership of a session, closing any previous session of the
	/// same kind before the new one replaces it.
	pub async fn track(&mut self, session: S) -> &S {
		let kind = session.kind();
		if let Some(previous) = self.sessions.remove(&kind) {
			warn!(target: "herd.session", browser = %kind, "replacing live session; closing previous one");
			if let Err(err) = previous.close().await {
				warn!(
					target: "herd.session",
					browser = %kind,
					error = %err,
					"failed to close replaced session"
				);
			}
		}
		self.sessions.entry(kind).or_insert(session)
	}

	/// Closes and forgets the session for `kind`; an absent kind is a no-op.
	pub async fn close(&mut self, kind: BrowserKind) -> Result<()> {
		match self.sessions.remove(&kind) {
			Some(session) => {
				debug!(target: "herd.session", browser = %kind, "closing session");
				session.close().await
			}
			None => Ok(()),
		}
	}

	/// Closes every tracked session, best-effort.
	///
	/// A failing close is logged and never prevents the remaining closes;
	/// the mapping is empty afterwards regardless.
	pub async fn close_all(&mut self) {
		for (kind, session) in std::mem::take(&mut self.sessions) {
			if let Err(err) = session.close().await {
				warn!(
					target: "herd.session",
					browser = %kind,
					error = %err,
					"failed to close session"
				);
			}
		}
	}
}

impl<S: ManagedSession> Default for SessionManager<S> {
	fn default() -> Self {
		Self::new()
	}
}

impl SessionManager<BrowserSession> {
	/// Launches a browser for `kind` and tracks the resulting session.
	///
	/// A launch failure leaves the mapping untouched.
	pub async fn launch(&mut self, kind: BrowserKind, profile: &BrowserProfile) -> Result<&BrowserSession> {
		let session = BrowserSession::launch(kind, profile).await?;
		Ok(self.track(session).await)
	}
}
