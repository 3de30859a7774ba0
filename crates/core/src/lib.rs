//! Multi-browser session herding over WebDriver.
//!
//! `herd` launches several browsers (Chrome, Firefox, Edge) through their
//! WebDriver servers, points every session at a page, and tears the whole
//! set down again. DOM-level control is delegated to [`thirtyfour`]; this
//! crate owns configuration, driver-server processes, and session
//! lifecycle.

pub mod config;
pub mod driver;
pub mod error;
pub mod kind;
pub mod manager;
pub mod session;

pub use config::{BrowserProfile, HerdConfig};
pub use driver::DriverServer;
pub use error::{HerdError, Result};
pub use kind::BrowserKind;
pub use manager::SessionManager;
pub use session::{BrowserSession, ManagedSession};
