// SPDX-FileCopyrightText: 2025-2026 Fearefull <todoreminder@fearefull.com>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use std::path::Path;
use std::sync::Arc;

use todoreminder_core::{
    Alarm, AlarmEditor, AlarmTitleType, Catalog, Config, EditorPhase, LocalDb, Repeat,
    RepeatEntry, Signal,
};
use tokio::sync::mpsc::UnboundedReceiver;

/// Creates a test configuration storing its database in `state_dir`.
#[must_use]
pub fn test_config(state_dir: &Path) -> Config {
    Config {
        state_dir: Some(state_dir.to_path_buf()),
        default_ringtone: "Default".to_string(),
        default_title_type: AlarmTitleType::Alarm,
        default_repeat: Repeat::Once,
    }
}

/// Creates an unsaved alarm with one daily entry.
#[must_use]
pub fn test_alarm(title: &str) -> Alarm {
    let mut alarm = Alarm {
        title: title.to_string(),
        ringtone: "Chime".to_string(),
        default_repeat: Repeat::Daily,
        ..Default::default()
    };
    alarm.repeats.push(RepeatEntry::new(Repeat::Daily, 7, 0));
    alarm
}

/// Creates an editor backed by `db` and returns it with its signal stream.
pub fn open_editor(db: &LocalDb) -> (AlarmEditor, UnboundedReceiver<Signal>) {
    let mut editor = AlarmEditor::new(Arc::new(db.clone()), Arc::new(Catalog));
    let signals = editor
        .take_signals()
        .expect("a new editor always has its signal stream");
    (editor, signals)
}

/// Applies background results until nothing is outstanding, returning the final phase.
pub async fn wait_until_settled(editor: &mut AlarmEditor) -> EditorPhase {
    while editor.process_next().await {}
    editor.phase()
}
