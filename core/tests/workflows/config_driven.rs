// SPDX-FileCopyrightText: 2025-2026 Fearefull <todoreminder@fearefull.com>
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration driven workflow tests.

use todoreminder_core::{AlarmTitleType, Config, LocalDb, Repeat};

use crate::common::{open_editor, setup_temp_dirs};

#[tokio::test]
async fn config_defaults_seed_the_editor() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let toml = format!(
        r#"
state_dir = "{}"
default_ringtone = "Rooster"
default_title_type = "birthday"
default_repeat = "yearly"
"#,
        temp_dirs.state_dir.to_str().unwrap().replace('\\', "/")
    );
    let mut config: Config = toml::from_str(&toml).unwrap();
    config.normalize().unwrap();
    let db = LocalDb::open(config.db_path().as_deref()).await.unwrap();

    // Act
    let (mut editor, _signals) = open_editor(&db);
    editor.init(config.default_alarm());

    // Assert
    let state = editor.ui_state();
    assert_eq!(state.title, "Birthday");
    assert_eq!(state.title_icon, Some(AlarmTitleType::Birthday.icon()));
    assert_eq!(state.ringtone, "Rooster");
    assert_eq!(state.current_tab, Some(Repeat::Yearly.value()));
    assert!(!editor.should_update());
}

#[tokio::test]
async fn config_without_state_dir_uses_memory() {
    let config = Config::default();
    assert!(config.db_path().is_none());

    let db = LocalDb::open(config.db_path().as_deref()).await.unwrap();
    assert!(db.list_alarms().await.unwrap().is_empty());
}
