use crate::settings::manager::SettingsManager;
use crate::settings::Settings;
use tempfile::TempDir;

#[test]
fn missing_file_is_created_with_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let settings_path = temp_dir.path().join("settings.toml");

    let manager = SettingsManager::from_path(settings_path.clone()).unwrap();

    assert!(settings_path.exists());
    assert_eq!(manager.settings(), Settings::default());
    assert_eq!(manager.settings().request_timeout_secs, 300);
}

#[test]
fn saved_settings_survive_a_reload() {
    let temp_dir = TempDir::new().unwrap();
    let settings_path = temp_dir.path().join("settings.toml");

    let manager = SettingsManager::from_path(settings_path.clone()).unwrap();
    manager.update_setting(|settings| {
        settings.api_key = Some("stored-key".to_string());
        settings.request_timeout_secs = 30;
    });
    manager.save().unwrap();

    let reloaded = SettingsManager::from_path(settings_path).unwrap();
    let settings = reloaded.settings();
    assert_eq!(settings.api_key.as_deref(), Some("stored-key"));
    assert_eq!(settings.request_timeout_secs, 30);
}

#[test]
fn updates_are_not_persisted_until_save() {
    let temp_dir = TempDir::new().unwrap();
    let settings_path = temp_dir.path().join("settings.toml");

    let manager = SettingsManager::from_path(settings_path.clone()).unwrap();
    manager.update_setting(|settings| settings.api_key = Some("in-memory-only".to_string()));

    let reloaded = SettingsManager::from_path(settings_path).unwrap();
    assert_eq!(reloaded.settings().api_key, None);
}

#[test]
fn corrupt_file_is_backed_up_and_replaced_with_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let settings_path = temp_dir.path().join("settings.toml");
    std::fs::write(&settings_path, "this is { not toml").unwrap();

    let manager = SettingsManager::from_path(settings_path.clone()).unwrap();

    assert_eq!(manager.settings(), Settings::default());
    let backup_path = settings_path.with_extension("toml.backup");
    assert!(backup_path.exists());
    assert_eq!(
        std::fs::read_to_string(backup_path).unwrap(),
        "this is { not toml"
    );
}

#[test]
fn partial_files_fill_in_field_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let settings_path = temp_dir.path().join("settings.toml");
    std::fs::write(&settings_path, "api_key = \"only-field\"\n").unwrap();

    let manager = SettingsManager::from_path(settings_path).unwrap();
    let settings = manager.settings();

    assert_eq!(settings.api_key.as_deref(), Some("only-field"));
    assert_eq!(settings.request_timeout_secs, 300);
    assert_eq!(settings.api_base_url, None);
}

#[test]
fn zero_timeout_disables_the_ceiling() {
    let settings = Settings {
        request_timeout_secs: 0,
        ..Settings::default()
    };

    assert_eq!(settings.request_timeout(), None);
    assert_eq!(
        Settings::default().request_timeout(),
        Some(std::time::Duration::from_secs(300))
    );
}

#[test]
fn a_disabled_timeout_round_trips_through_the_file() {
    let temp_dir = TempDir::new().unwrap();
    let settings_path = temp_dir.path().join("settings.toml");

    let manager = SettingsManager::from_path(settings_path.clone()).unwrap();
    manager.update_setting(|settings| settings.request_timeout_secs = 0);
    manager.save().unwrap();

    let reloaded = SettingsManager::from_path(settings_path).unwrap();
    assert_eq!(reloaded.settings().request_timeout_secs, 0);
    assert_eq!(reloaded.settings().request_timeout(), None);
}
