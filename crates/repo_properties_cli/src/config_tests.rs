use super::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_app_config_default() {
    let config = AppConfig::default();

    assert!(config.api_url.is_none());
    assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    assert_eq!(config.authentication.auth_method, AuthMethod::Token);
}

#[test]
fn test_app_config_load_full() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("repo-props.toml");
    fs::write(
        &config_path,
        r#"
api_url = "https://github.example.com/api/v3"
timeout_secs = 5

[authentication]
auth_method = "app"
app_id = 42
private_key_path = "/tmp/app.pem"
"#,
    )
    .expect("Failed to write config");

    let config = AppConfig::load(&config_path).expect("Failed to load config");

    assert_eq!(
        config.api_url.as_deref(),
        Some("https://github.example.com/api/v3")
    );
    assert_eq!(config.timeout(), Duration::from_secs(5));
    assert_eq!(config.authentication.auth_method, AuthMethod::App);
    assert_eq!(config.authentication.app_id, Some(42));
    assert_eq!(
        config.authentication.private_key_path,
        Some(PathBuf::from("/tmp/app.pem"))
    );
}

#[test]
fn test_app_config_load_empty_file_uses_defaults() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("repo-props.toml");
    fs::write(&config_path, "").expect("Failed to write config");

    let config = AppConfig::load(&config_path).expect("Failed to load config");

    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_app_config_load_invalid_toml() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("invalid_config.toml");
    fs::write(&config_path, "invalid = toml = syntax").expect("Failed to write invalid TOML");

    let result = AppConfig::load(&config_path);

    if let Err(Error::Config(msg)) = result {
        assert!(msg.contains("Failed to parse configuration file"));
    } else {
        panic!("Expected Config error");
    }
}

#[test]
fn test_app_config_load_unknown_auth_method() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("repo-props.toml");
    fs::write(&config_path, "[authentication]\nauth_method = \"oauth\"\n")
        .expect("Failed to write config");

    let result = AppConfig::load(&config_path);

    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_app_config_load_nonexistent_file() {
    let nonexistent_path = PathBuf::from("nonexistent_config.toml");
    let result = AppConfig::load(&nonexistent_path);

    if let Err(Error::Config(msg)) = result {
        assert!(msg.contains("Configuration file not found"));
    } else {
        panic!("Expected Config error");
    }
}

#[test]
fn test_resolve_explicit_missing_file_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let missing = temp_dir.path().join("missing.toml");

    let result = AppConfig::resolve(missing.to_str());

    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_get_config_path_with_custom_path() {
    let custom_path = "/custom/path/config.toml";
    let result = get_config_path(Some(custom_path));
    assert_eq!(result, PathBuf::from(custom_path));
}

#[test]
fn test_get_config_path_default() {
    let result = get_config_path(None);
    assert!(result.ends_with(DEFAULT_CONFIG_FILENAME));
}

#[test]
fn test_resolve_token_present() {
    let token = resolve_token(|name| {
        assert_eq!(name, TOKEN_ENV_VAR);
        Some(" ghp_example \n".to_string())
    })
    .expect("Token should resolve");

    assert_eq!(token, "ghp_example");
}

#[test]
fn test_resolve_token_missing_or_blank() {
    assert!(matches!(resolve_token(|_| None), Err(Error::Auth(_))));
    assert!(matches!(
        resolve_token(|_| Some("   ".to_string())),
        Err(Error::Auth(_))
    ));
}
