// SPDX-FileCopyrightText: 2025-2026 Fearefull <todoreminder@fearefull.com>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end alarm lifecycle workflow tests.
//!
//! These tests create alarms through the editor, reopen them for editing,
//! and check what ends up in the database.

use todoreminder_core::{
    Alarm, AlarmTitleType, CustomRepeat, CustomRepeatType, EditorPhase, LocalDb, Repeat,
    RepeatEntry, Signal, WeekType,
};

use crate::common::{open_editor, setup_temp_dirs, test_alarm, test_config, wait_until_settled};

#[tokio::test]
async fn alarm_lifecycle_create_through_editor() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let config = test_config(&temp_dirs.state_dir);
    let db = LocalDb::open(config.db_path().as_deref()).await.unwrap();
    let (mut editor, mut signals) = open_editor(&db);

    // Act
    editor.init(config.default_alarm());
    editor.set_title_type(AlarmTitleType::Sport);
    editor.on_title_text_changed("Evening run");
    editor.save();
    editor.add_repeat(RepeatEntry::new(Repeat::Daily, 18, 30));
    let phase = wait_until_settled(&mut editor).await;

    // Assert
    assert_eq!(phase, EditorPhase::Saved);
    let mut received = Vec::new();
    while let Ok(signal) = signals.try_recv() {
        received.push(signal);
    }
    assert_eq!(
        received,
        vec![
            Signal::ClearIcon,
            Signal::PromptLastRepeat(Repeat::Once),
            Signal::CreateIconWithEmphasis,
            Signal::Saved
        ]
    );

    let alarms = db.list_alarms().await.unwrap();
    assert_eq!(alarms.len(), 1);
    assert_eq!(alarms[0].title, "Evening run");
    assert_eq!(alarms[0].title_type, AlarmTitleType::Sport);
    assert_eq!(alarms[0].ringtone, "Default");
    assert_eq!(alarms[0].repeats[0].describe(), "18:30 Daily");
}

#[tokio::test]
async fn alarm_lifecycle_edit_updates_in_place() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let config = test_config(&temp_dirs.state_dir);
    let db = LocalDb::open(config.db_path().as_deref()).await.unwrap();
    let id = db.insert(&test_alarm("Wake up")).await.unwrap();

    // Act
    let (mut editor, _signals) = open_editor(&db);
    editor.init(db.get_alarm(id).await.unwrap());
    assert!(editor.should_update());

    let mut custom = CustomRepeat::new(CustomRepeatType::Week);
    custom.add_weekday(WeekType::Day6);
    editor.add_repeat(RepeatEntry::with_custom(9, 30, custom));
    editor.on_ringtone_picked("Birds", Some("content://ringtones/birds"));
    editor.save();
    let phase = wait_until_settled(&mut editor).await;

    // Assert
    assert_eq!(phase, EditorPhase::Saved);
    let alarms = db.list_alarms().await.unwrap();
    assert_eq!(alarms.len(), 1, "editing must not insert a second alarm");

    let stored = &alarms[0];
    assert_eq!(stored.id, Some(id));
    assert_eq!(stored.ringtone, "Birds");
    assert_eq!(stored.repeat_count(), 2);
    assert_eq!(
        stored.last_repeat().map(RepeatEntry::describe).as_deref(),
        Some("09:30 Saturday, Thursday")
    );
}

#[tokio::test]
async fn alarm_lifecycle_unconfirmed_repeat_is_not_saved() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let config = test_config(&temp_dirs.state_dir);
    let db = LocalDb::open(config.db_path().as_deref()).await.unwrap();
    let id = db.insert(&test_alarm("Read")).await.unwrap();

    // Act
    let (mut editor, mut signals) = open_editor(&db);
    editor.init(db.get_alarm(id).await.unwrap());
    editor.on_title_text_changed("Read a book");
    editor.save();
    let phase = wait_until_settled(&mut editor).await;

    // Assert
    assert_eq!(phase, EditorPhase::Ready);
    assert!(editor.pending_exit());
    let mut prompted = false;
    while let Ok(signal) = signals.try_recv() {
        prompted |= signal == Signal::PromptLastRepeat(Repeat::Daily);
    }
    assert!(prompted);
    assert_eq!(db.get_alarm(id).await.unwrap().title, "Read");
}

#[tokio::test]
async fn alarm_lifecycle_survives_reopen() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let config = test_config(&temp_dirs.state_dir);
    let path = config.db_path().unwrap();

    // Act
    let db = LocalDb::open(Some(&path)).await.unwrap();
    let id = db.insert(&test_alarm("Water plants")).await.unwrap();
    db.close().await.unwrap();

    let db = LocalDb::open(Some(&path)).await.unwrap();
    let stored = db.get_alarm(id).await.unwrap();

    // Assert
    assert_eq!(
        stored,
        Alarm {
            id: Some(id),
            ..test_alarm("Water plants")
        }
    );
}
