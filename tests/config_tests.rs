mod common;

use turfbook::config::Config;

#[test]
fn missing_file_loads_defaults() {
    let manager = common::setup_config_env();
    let config = manager.load().unwrap();
    assert_eq!(config.theme, "light");
    assert!(config.last_city_filter.is_none());
}

#[test]
fn save_and_load_roundtrip() {
    let manager = common::setup_config_env();
    let config = Config {
        theme: "dark".into(),
        last_city_filter: Some("Surat".into()),
    };
    manager.save(&config).unwrap();

    let loaded = manager.load().unwrap();
    assert_eq!(loaded.theme, "dark");
    assert_eq!(loaded.last_city_filter.as_deref(), Some("Surat"));
    assert!(manager.path().exists());
}

#[test]
fn saving_twice_overwrites_cleanly() {
    let manager = common::setup_config_env();
    let mut config = Config::default();
    manager.save(&config).unwrap();

    config.last_city_filter = Some("Ahmedabad".into());
    manager.save(&config).unwrap();

    let loaded = manager.load().unwrap();
    assert_eq!(loaded.last_city_filter.as_deref(), Some("Ahmedabad"));
}
