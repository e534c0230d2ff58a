use pospanel_core::db::open_db_in_memory;
use pospanel_core::{
    SettingsRepository, SqliteSettingsRepository, ThemeMode, ThemeService, ThemeServiceError,
    THEME_SETTING_KEY,
};

#[test]
fn resolve_follows_system_preference_when_nothing_stored() {
    let conn = open_db_in_memory().unwrap();
    let service = ThemeService::new(SqliteSettingsRepository::try_new(&conn).unwrap());

    assert_eq!(service.stored_theme().unwrap(), None);
    assert_eq!(service.resolve(true).unwrap(), ThemeMode::Dark);
    assert_eq!(service.resolve(false).unwrap(), ThemeMode::Light);
}

#[test]
fn toggle_persists_and_overrides_system_preference() {
    let conn = open_db_in_memory().unwrap();
    let service = ThemeService::new(SqliteSettingsRepository::try_new(&conn).unwrap());

    assert_eq!(service.toggle(false).unwrap(), ThemeMode::Dark);
    assert_eq!(service.resolve(false).unwrap(), ThemeMode::Dark);
    assert_eq!(service.resolve(true).unwrap(), ThemeMode::Dark);

    assert_eq!(service.toggle(true).unwrap(), ThemeMode::Light);
    assert_eq!(service.resolve(true).unwrap(), ThemeMode::Light);

    let stored: String = conn
        .query_row(
            "SELECT value FROM app_settings WHERE key = ?1;",
            [THEME_SETTING_KEY],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(stored, "light");
}

#[test]
fn set_and_reset_round_trip_to_system_preference() {
    let conn = open_db_in_memory().unwrap();
    let service = ThemeService::new(SqliteSettingsRepository::try_new(&conn).unwrap());

    service.set(ThemeMode::Dark).unwrap();
    assert_eq!(service.resolve(false).unwrap(), ThemeMode::Dark);

    assert!(service.reset().unwrap());
    assert_eq!(service.resolve(false).unwrap(), ThemeMode::Light);
    assert!(!service.reset().unwrap());
}

#[test]
fn unrecognized_stored_value_is_reported_by_resolve() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSettingsRepository::try_new(&conn).unwrap();
    repo.put_setting(THEME_SETTING_KEY, "sepia").unwrap();

    let service = ThemeService::new(repo);
    match service.resolve(true).unwrap_err() {
        ThemeServiceError::InvalidStoredTheme(value) => assert_eq!(value, "sepia"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn toggle_replaces_unrecognized_stored_value() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSettingsRepository::try_new(&conn).unwrap();
    repo.put_setting(THEME_SETTING_KEY, "sepia").unwrap();

    let service = ThemeService::new(repo);
    assert_eq!(service.toggle(true).unwrap(), ThemeMode::Light);
    assert_eq!(service.stored_theme().unwrap(), Some(ThemeMode::Light));
    assert_eq!(service.resolve(true).unwrap(), ThemeMode::Light);
}

#[test]
fn set_and_reset_clear_unrecognized_stored_value() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSettingsRepository::try_new(&conn).unwrap();
    repo.put_setting(THEME_SETTING_KEY, "sepia").unwrap();
    let service = ThemeService::new(repo);

    service.set(ThemeMode::Dark).unwrap();
    assert_eq!(service.resolve(false).unwrap(), ThemeMode::Dark);

    service.set(ThemeMode::Light).unwrap();
    let repo = SqliteSettingsRepository::try_new(&conn).unwrap();
    repo.put_setting(THEME_SETTING_KEY, "sepia").unwrap();
    assert!(service.reset().unwrap());
    assert_eq!(service.resolve(true).unwrap(), ThemeMode::Dark);
}
