// SPDX-FileCopyrightText: 2025-2026 Fearefull <todoreminder@fearefull.com>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, sync::Arc};

use clap::{ArgMatches, Command};
use colored::Colorize;
use todoreminder_core::{
    Alarm, AlarmEditor, Catalog, Config as CoreConfig, EditorPhase, LocalDb, Signal,
};

use crate::alarm_formatter::{AlarmDetail, AlarmFormatter};
use crate::arg::{AlarmArgs, AlarmIdArgs};
use crate::util::ArgOutputFormat;

#[derive(Debug, Clone)]
pub struct CmdAlarmNew {
    pub args: AlarmArgs,
    pub output_format: ArgOutputFormat,
}

impl CmdAlarmNew {
    pub const NAME: &str = "new";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("add")
            .about("Add a new alarm")
            .args(AlarmArgs::args())
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            args: AlarmArgs::from(matches),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, db: &LocalDb, config: &CoreConfig) -> Result<(), Box<dyn Error>> {
        tracing::debug!("adding new alarm...");
        save_with_editor(db, config.default_alarm(), &self.args).await?;

        // newest row, the editor does not report the inserted id
        let alarm = db.list_alarms().await?.pop().ok_or("Alarm was not stored")?;
        let formatter = AlarmFormatter::new().with_output_format(self.output_format);
        print!("{}", formatter.format(&[alarm]));
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdAlarmEdit {
    pub id: i64,
    pub args: AlarmArgs,
    pub output_format: ArgOutputFormat,
}

impl CmdAlarmEdit {
    pub const NAME: &str = "edit";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Edit an alarm, adding a repeat entry with --at")
            .arg(AlarmIdArgs::id())
            .args(AlarmArgs::args())
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: AlarmIdArgs::get_id(matches),
            args: AlarmArgs::from(matches),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, db: &LocalDb) -> Result<(), Box<dyn Error>> {
        tracing::debug!(id = self.id, "editing alarm...");
        let alarm = db.get_alarm(self.id).await?;
        let alarm = save_with_editor(db, alarm, &self.args).await?;

        let formatter = AlarmFormatter::new().with_output_format(self.output_format);
        print!("{}", formatter.format(&[alarm]));
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdAlarmList {
    pub output_format: ArgOutputFormat,
}

impl CmdAlarmList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List all alarms")
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, db: &LocalDb) -> Result<(), Box<dyn Error>> {
        tracing::debug!("listing alarms...");
        let alarms = db.list_alarms().await?;
        let formatter = AlarmFormatter::new().with_output_format(self.output_format);
        print!("{}", formatter.format(&alarms));
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdAlarmShow {
    pub id: i64,
    pub output_format: ArgOutputFormat,
}

impl CmdAlarmShow {
    pub const NAME: &str = "show";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show an alarm with all its repeat entries")
            .arg(AlarmIdArgs::id())
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: AlarmIdArgs::get_id(matches),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, db: &LocalDb) -> Result<(), Box<dyn Error>> {
        let alarm = db.get_alarm(self.id).await?;
        match self.output_format {
            ArgOutputFormat::Table => print!("{}", AlarmDetail(&alarm)),
            ArgOutputFormat::Json => {
                let formatter = AlarmFormatter::new().with_output_format(ArgOutputFormat::Json);
                print!("{}", formatter.format(&[alarm]));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdAlarmDelete {
    pub ids: Vec<i64>,
}

impl CmdAlarmDelete {
    pub const NAME: &str = "delete";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Delete alarms")
            .arg(AlarmIdArgs::id().num_args(1..))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            ids: matches
                .get_many::<i64>("id")
                .map(|a| a.copied().collect())
                .unwrap_or_default(),
        }
    }

    pub async fn run(self, db: &LocalDb) -> Result<(), Box<dyn Error>> {
        for id in self.ids {
            tracing::debug!(id, "deleting alarm...");
            db.delete_alarm(id).await?;
            println!("{} alarm #{id}", "Deleted".green());
        }
        Ok(())
    }
}

/// Drives one editing session: applies the fields, saves, and adds the
/// repeat entry when the editor asks for it.
async fn save_with_editor(
    db: &LocalDb,
    alarm: Alarm,
    args: &AlarmArgs,
) -> Result<Alarm, Box<dyn Error>> {
    let mut editor = AlarmEditor::new(Arc::new(db.clone()), Arc::new(Catalog));
    let mut signals = editor.take_signals().ok_or("Editor signals already taken")?;

    editor.init(alarm);
    args.apply(&mut editor);
    editor.save();

    let mut prompt = None;
    while let Ok(signal) = signals.try_recv() {
        if let Signal::PromptLastRepeat(repeat) = signal {
            prompt = Some(repeat);
        }
    }
    if let Some(repeat) = prompt {
        let Some(entry) = args.entry(repeat)? else {
            let msg = format!("Add a repeat with --at HH:MM to save the alarm ({repeat})");
            return Err(msg.into());
        };
        // the pending save runs again once the entry is in
        editor.add_repeat(entry);
    }

    while editor.process_next().await {}
    match editor.phase() {
        EditorPhase::Saved => Ok(editor.alarm().clone()),
        phase => {
            tracing::debug!(?phase, "editor did not save");
            Err("Failed to save the alarm".into())
        }
    }
}

#[cfg(test)]
mod tests {
    use todoreminder_core::{AlarmTitleType, Repeat, RepeatEntry};

    use super::*;

    async fn open_db() -> LocalDb {
        LocalDb::open(None).await.unwrap()
    }

    #[tokio::test]
    async fn test_save_new_alarm() {
        let db = open_db().await;
        let args = AlarmArgs {
            title: Some("Stretch".to_string()),
            title_type: Some(AlarmTitleType::Sport),
            at: Some((7, 45)),
            ..Default::default()
        };
        let config = CoreConfig {
            default_repeat: Repeat::Daily,
            ..Default::default()
        };

        let saved = save_with_editor(&db, config.default_alarm(), &args).await.unwrap();

        assert_eq!(saved.title, "Stretch");
        let alarms = db.list_alarms().await.unwrap();
        assert_eq!(alarms.len(), 1);
        assert_eq!(alarms[0].title_type, AlarmTitleType::Sport);
        assert_eq!(alarms[0].repeats[0].describe(), "07:45 Daily");
    }

    #[tokio::test]
    async fn test_save_requires_time() {
        let db = open_db().await;
        let args = AlarmArgs {
            title: Some("Stretch".to_string()),
            ..Default::default()
        };

        let result = save_with_editor(&db, Alarm::default(), &args).await;

        assert!(result.unwrap_err().to_string().contains("--at"));
        assert!(db.list_alarms().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_edit_updates_existing() {
        let db = open_db().await;
        let mut alarm = Alarm::default();
        alarm.repeats.push(RepeatEntry::new(Repeat::Once, 8, 0));
        let id = db.insert(&alarm).await.unwrap();

        let args = AlarmArgs {
            ringtone: Some("Birds".to_string()),
            repeat: Some(Repeat::Weekly),
            at: Some((9, 0)),
            ..Default::default()
        };
        let stored = db.get_alarm(id).await.unwrap();
        save_with_editor(&db, stored, &args).await.unwrap();

        let alarms = db.list_alarms().await.unwrap();
        assert_eq!(alarms.len(), 1);
        assert_eq!(alarms[0].ringtone, "Birds");
        assert_eq!(alarms[0].repeat_count(), 2);
        assert_eq!(alarms[0].repeats[1].describe(), "09:00 Weekly");
    }
}
