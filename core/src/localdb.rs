// SPDX-FileCopyrightText: 2025-2026 Fearefull <todoreminder@fearefull.com>
//
// SPDX-License-Identifier: Apache-2.0

mod alarms;


use std::path::Path;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::localdb::alarms::{AlarmRecord, Alarms};
use crate::{Alarm, AlarmStore, Error};

/// SQLite backed alarm storage.
#[derive(Debug, Clone)]
pub struct LocalDb {
    pool: SqlitePool,

    alarms: Alarms,
}

impl LocalDb {
    /// Opens a sqlite database connection.
    /// If `filename` is `None`, it opens an in-memory database.
    pub async fn open(filename: Option<&Path>) -> Result<Self, Error> {
        let (options, pool_options) = if let Some(filename) = filename {
            tracing::info!(path = %filename.display(), "connecting to SQLite database");
            let options = SqliteConnectOptions::new()
                .filename(filename)
                .create_if_missing(true);
            (options, SqlitePoolOptions::new())
        } else {
            // Every connection to `:memory:` sees its own database, so keep exactly one alive.
            tracing::info!("connecting to in-memory SQLite database");
            let options = SqliteConnectOptions::new().in_memory(true);
            let pool_options = SqlitePoolOptions::new()
                .min_connections(1)
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
            (options, pool_options)
        };

        let pool = pool_options.connect_with(options).await?;

        sqlx::migrate!("src/localdb/migrations") // relative path from the crate root
            .run(&pool)
            .await?;

        let alarms = Alarms::new(pool.clone());
        Ok(LocalDb { pool, alarms })
    }

    /// Inserts a new alarm and returns its id. The alarm's own id is ignored.
    pub async fn insert(&self, alarm: &Alarm) -> Result<i64, Error> {
        let record = AlarmRecord::try_from(alarm)?;
        let id = self.alarms.insert(&record).await?;
        tracing::debug!(id, "alarm inserted");
        Ok(id)
    }

    /// Overwrites a stored alarm, returning whether a row was changed.
    pub async fn update(&self, alarm: &Alarm) -> Result<bool, Error> {
        let Some(id) = alarm.id else {
            tracing::warn!("cannot update an alarm without id");
            return Ok(false);
        };

        let record = AlarmRecord::try_from(alarm)?;
        let updated = self.alarms.update(&record).await? > 0;
        tracing::debug!(id, updated, "alarm updated");
        Ok(updated)
    }

    pub async fn get_alarm(&self, id: i64) -> Result<Alarm, Error> {
        match self.alarms.get(id).await? {
            Some(record) => record.try_into(),
            None => Err(Error::NotFound(id)),
        }
    }

    pub async fn list_alarms(&self) -> Result<Vec<Alarm>, Error> {
        self.alarms
            .list()
            .await?
            .into_iter()
            .map(Alarm::try_from)
            .collect()
    }

    pub async fn delete_alarm(&self, id: i64) -> Result<(), Error> {
        match self.alarms.delete(id).await? {
            0 => Err(Error::NotFound(id)),
            _ => Ok(()),
        }
    }

    pub async fn close(self) -> Result<(), Error> {
        tracing::debug!("closing database connection");
        self.pool.close().await;
        Ok(())
    }
}

#[async_trait]
impl AlarmStore for LocalDb {
    async fn insert_alarm(&self, alarm: Alarm) -> Result<bool, Error> {
        self.insert(&alarm).await.map(|_| true)
    }

    async fn update_alarm(&self, alarm: Alarm) -> Result<bool, Error> {
        self.update(&alarm).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AlarmTitleType, CustomRepeat, CustomRepeatType, MonthType, Repeat, RepeatEntry};

    fn sample_alarm() -> Alarm {
        let mut custom = CustomRepeat::new(CustomRepeatType::Year);
        custom.add_month(MonthType::Mehr);

        let mut alarm = Alarm {
            ringtone: "Morning".to_string(),
            default_repeat: Repeat::Weekly,
            ..Default::default()
        };
        alarm.set_title_type(AlarmTitleType::Work);
        alarm.repeats.push(RepeatEntry::new(Repeat::Daily, 7, 30));
        alarm.repeats.push(RepeatEntry::with_custom(9, 0, custom));
        alarm
    }

    #[tokio::test]
    async fn insert_then_get_restores_alarm() {
        let db = LocalDb::open(None).await.unwrap();
        let alarm = sample_alarm();

        let id = db.insert(&alarm).await.unwrap();
        let stored = db.get_alarm(id).await.unwrap();

        assert_eq!(stored, Alarm { id: Some(id), ..alarm });
    }

    #[tokio::test]
    async fn update_overwrites_fields() {
        let db = LocalDb::open(None).await.unwrap();
        let id = db.insert(&sample_alarm()).await.unwrap();

        let mut alarm = db.get_alarm(id).await.unwrap();
        alarm.title = "Standup".to_string();
        alarm.repeats[0].enabled = false;
        assert!(db.update(&alarm).await.unwrap());

        let stored = db.get_alarm(id).await.unwrap();
        assert_eq!(stored.title, "Standup");
        assert!(!stored.repeats[0].enabled);
    }

    #[tokio::test]
    async fn update_missing_alarm_reports_false() {
        let db = LocalDb::open(None).await.unwrap();

        let unsaved = sample_alarm();
        assert!(!db.update(&unsaved).await.unwrap());

        let ghost = Alarm {
            id: Some(42),
            ..sample_alarm()
        };
        assert!(!db.update(&ghost).await.unwrap());
    }

    #[tokio::test]
    async fn list_and_delete() {
        let db = LocalDb::open(None).await.unwrap();
        let first = db.insert(&sample_alarm()).await.unwrap();
        let second = db.insert(&Alarm::default()).await.unwrap();

        let ids: Vec<_> = db
            .list_alarms()
            .await
            .unwrap()
            .into_iter()
            .filter_map(|a| a.id)
            .collect();
        assert_eq!(ids, vec![first, second]);

        db.delete_alarm(first).await.unwrap();
        assert!(matches!(db.get_alarm(first).await, Err(Error::NotFound(_))));
        assert!(matches!(db.delete_alarm(first).await, Err(Error::NotFound(_))));
        assert_eq!(db.list_alarms().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn store_facade_reports_success() {
        let db = LocalDb::open(None).await.unwrap();
        assert!(db.insert_alarm(sample_alarm()).await.unwrap());

        let mut alarm = db.list_alarms().await.unwrap().remove(0);
        alarm.ringtone = "Evening".to_string();
        assert!(db.update_alarm(alarm).await.unwrap());
    }

    #[tokio::test]
    async fn open_file_database_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reminder.db");

        let db = LocalDb::open(Some(&path)).await.unwrap();
        let id = db.insert(&sample_alarm()).await.unwrap();
        db.close().await.unwrap();

        let db = LocalDb::open(Some(&path)).await.unwrap();
        assert_eq!(db.get_alarm(id).await.unwrap().title, "Work");
    }
}
