use pgen_kernel::config::{ConfigError, Map, load_config, load_config_from};
use pgen_kernel::domain::config::AppConfig;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tempfile::tempdir;

fn env(pairs: &[(&str, &str)]) -> Map<String, String> {
    pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
}

#[test]
fn defaults_without_file_or_env() {
    let cfg: AppConfig = load_config_from(None, Some(Map::new())).expect("defaults load");

    assert_eq!(cfg.generator.length(), 8);
    assert_eq!(cfg.notification.message, "Password Copied");
    assert_eq!(cfg.notification.duration(), Duration::from_secs(2));
}

#[test]
fn file_values_override_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("pgen.toml");
    fs::write(
        &path,
        r#"
[generator]
length = 16
include_symbols = true

[notification]
message = "Copied!"
"#,
    )?;

    let cfg: AppConfig = load_config_from(Some(&path), Some(Map::new()))?;
    assert_eq!(cfg.generator.length(), 16);
    assert!(cfg.generator.include_symbols());
    assert!(!cfg.generator.include_digits());
    assert_eq!(cfg.notification.message, "Copied!");
    assert_eq!(cfg.notification.duration_ms, 2_000);
    Ok(())
}

#[test]
fn environment_overrides_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("pgen.toml");
    fs::write(&path, "[generator]\nlength = 16\n")?;

    let overrides = env(&[
        ("PGEN__GENERATOR__LENGTH", "12"),
        ("PGEN__GENERATOR__INCLUDE_DIGITS", "true"),
        ("PGEN__NOTIFICATION__DURATION_MS", "500"),
    ]);

    let cfg: AppConfig = load_config_from(Some(&path), Some(overrides))?;
    assert_eq!(cfg.generator.length(), 12);
    assert!(cfg.generator.include_digits());
    assert_eq!(cfg.notification.duration(), Duration::from_millis(500));
    Ok(())
}

#[test]
fn out_of_range_length_is_clamped() {
    let cfg: AppConfig = load_config_from(None, Some(env(&[("PGEN__GENERATOR__LENGTH", "99")])))
        .expect("config should load");
    assert_eq!(cfg.generator.length(), 30);
}

#[test]
fn negative_and_overflowing_lengths_are_clamped() {
    let cfg: AppConfig = load_config_from(None, Some(env(&[("PGEN__GENERATOR__LENGTH", "-3")])))
        .expect("negative length should load");
    assert_eq!(cfg.generator.length(), 6);

    let cfg: AppConfig = load_config_from(
        None,
        Some(env(&[("PGEN__GENERATOR__LENGTH", "99999999999999999999999")])),
    )
    .expect("overflowing length should load");
    assert_eq!(cfg.generator.length(), 30);
}

#[test]
fn missing_file_is_an_error() {
    let err = load_config::<AppConfig>(Some(Path::new("/definitely/not/here/pgen.toml")))
        .expect_err("missing file must fail");

    let ConfigError::Config { context, .. } = &err;
    assert_eq!(context.as_deref(), Some("Failed to build config"));
    assert!(err.to_string().starts_with("Config error (Failed to build config)"));
}
