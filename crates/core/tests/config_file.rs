use std::fs;

use herd::{BrowserKind, HerdConfig, HerdError};
use tempfile::TempDir;

#[test]
fn config_file_loads_profiles() {
	let dir = TempDir::new().unwrap();
	let path = dir.path().join("browsers.json");
	fs::write(
		&path,
		r#"{
  "browsers": [
    { "kind": "chrome", "name": "Chrome", "options": ["--start-maximized", "--disable-notifications"] },
    { "kind": "firefox", "name": "Firefox", "options": ["--start-maximized"], "headless": true }
  ]
}"#,
	)
	.unwrap();

	let config = HerdConfig::from_file(&path).unwrap();
	assert_eq!(config.len(), 2);

	let chrome = config.get(BrowserKind::Chrome).unwrap();
	assert_eq!(chrome.options, ["--start-maximized", "--disable-notifications"]);
	assert!(!chrome.headless);

	assert!(config.get(BrowserKind::Firefox).unwrap().headless);
	assert!(config.get(BrowserKind::Edge).is_none());
}

#[test]
fn missing_config_file_is_an_io_error() {
	let dir = TempDir::new().unwrap();
	let err = HerdConfig::from_file(&dir.path().join("absent.json")).unwrap_err();
	assert!(matches!(err, HerdError::Io(_)));
}

#[test]
fn unknown_kind_in_file_is_rejected_before_any_launch() {
	let dir = TempDir::new().unwrap();
	let path = dir.path().join("browsers.json");
	fs::write(&path, r#"{ "browsers": [{ "kind": "netscape", "name": "Netscape" }] }"#).unwrap();

	let err = HerdConfig::from_file(&path).unwrap_err();
	assert!(matches!(err, HerdError::UnsupportedBrowserKind(ref k) if k == "netscape"));
}
