//! Settings layering: defaults < TOML file < environment.

use islet_conf::{Settings, SettingsError, SourceError};
use rstest::*;
use serial_test::serial;
use std::env;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[fixture]
fn config_dir() -> TempDir {
	let dir = TempDir::new().unwrap();
	fs::write(
		dir.path().join("islet.toml"),
		r#"
[build]
out_dir = "public"
lang = "ja"
scripts = ["/static/hydrate.js"]

[serializer]
max_depth = 128
"#,
	)
	.unwrap();
	dir
}

#[rstest]
#[serial(islet_env)]
fn test_toml_file_overrides_defaults(config_dir: TempDir) {
	let settings = Settings::load(Some(&config_dir.path().join("islet.toml"))).unwrap();

	assert_eq!(settings.build.out_dir, PathBuf::from("public"));
	assert_eq!(settings.build.lang, "ja");
	assert_eq!(settings.build.scripts, vec!["/static/hydrate.js"]);
	assert_eq!(settings.build.mount_id, "root");
	assert_eq!(settings.serializer.max_depth, 128);
	assert_eq!(settings.payload.version, "1.0");
}

#[rstest]
#[serial(islet_env)]
fn test_environment_overrides_toml_file(config_dir: TempDir) {
	// SAFETY: Setting environment variables is unsafe in multi-threaded programs.
	// This test uses #[serial] to ensure exclusive access to environment variables.
	unsafe {
		env::set_var("ISLET_BUILD__LANG", "en-GB");
		env::set_var("ISLET_SERIALIZER__MAX_DEPTH", "16");
		env::set_var("ISLET_BUILD__INLINE_PAYLOAD", "true");
		env::set_var("ISLET_BOUNDARY__COMPONENT_DIR", "islands");
	}

	let result = Settings::load(Some(&config_dir.path().join("islet.toml")));

	// SAFETY: Removing environment variables is unsafe in multi-threaded programs.
	// This test uses #[serial] to ensure exclusive access to environment variables.
	unsafe {
		env::remove_var("ISLET_BUILD__LANG");
		env::remove_var("ISLET_SERIALIZER__MAX_DEPTH");
		env::remove_var("ISLET_BUILD__INLINE_PAYLOAD");
		env::remove_var("ISLET_BOUNDARY__COMPONENT_DIR");
	}

	let settings = result.unwrap();
	assert_eq!(settings.build.lang, "en-GB");
	assert_eq!(settings.build.out_dir, PathBuf::from("public"));
	assert!(settings.build.inline_payload);
	assert_eq!(settings.serializer.max_depth, 16);
	assert_eq!(settings.boundary.component_dir, "islands");
}

#[rstest]
#[serial(islet_env)]
fn test_missing_explicit_file_is_an_error() {
	let dir = TempDir::new().unwrap();

	let result = Settings::load(Some(&dir.path().join("missing.toml")));

	assert!(matches!(
		result,
		Err(SettingsError::Source {
			source: SourceError::NotFound(_),
			..
		})
	));
}

#[rstest]
#[serial(islet_env)]
fn test_invalid_environment_value_is_reported() {
	// SAFETY: Setting environment variables is unsafe in multi-threaded programs.
	// This test uses #[serial] to ensure exclusive access to environment variables.
	unsafe {
		env::set_var("ISLET_SERIALIZER__MAX_DEPTH", "very-deep");
	}

	let dir = TempDir::new().unwrap();
	let result = Settings::load(Some(&{
		let path = dir.path().join("islet.toml");
		fs::write(&path, "").unwrap();
		path
	}));

	// SAFETY: Removing environment variables is unsafe in multi-threaded programs.
	// This test uses #[serial] to ensure exclusive access to environment variables.
	unsafe {
		env::remove_var("ISLET_SERIALIZER__MAX_DEPTH");
	}

	assert!(matches!(result, Err(SettingsError::Deserialize(_))));
}
