// SPDX-FileCopyrightText: 2025-2026 Fearefull <todoreminder@fearefull.com>
//
// SPDX-License-Identifier: Apache-2.0

use sqlx::SqlitePool;

use crate::codec;
use crate::{Alarm, Error, Repeat, RepeatEntry};

#[derive(Debug, Clone)]
pub struct Alarms {
    pool: SqlitePool,
}

impl Alarms {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, alarm: &AlarmRecord) -> Result<i64, sqlx::Error> {
        const SQL: &str = "\
INSERT INTO alarms (title, title_type, ringtone, default_repeat, repeats, times, enabled, customs)
VALUES (?, ?, ?, ?, ?, ?, ?, ?);
";

        let result = sqlx::query(SQL)
            .bind(&alarm.title)
            .bind(&alarm.title_type)
            .bind(&alarm.ringtone)
            .bind(alarm.default_repeat)
            .bind(&alarm.repeats)
            .bind(&alarm.times)
            .bind(&alarm.enabled)
            .bind(&alarm.customs)
            .execute(&self.pool)
            .await?;

        Ok(result.last_insert_rowid())
    }

    pub async fn update(&self, alarm: &AlarmRecord) -> Result<u64, sqlx::Error> {
        const SQL: &str = "\
UPDATE alarms SET
    title          = ?,
    title_type     = ?,
    ringtone       = ?,
    default_repeat = ?,
    repeats        = ?,
    times          = ?,
    enabled        = ?,
    customs        = ?
WHERE id = ?;
";

        let result = sqlx::query(SQL)
            .bind(&alarm.title)
            .bind(&alarm.title_type)
            .bind(&alarm.ringtone)
            .bind(alarm.default_repeat)
            .bind(&alarm.repeats)
            .bind(&alarm.times)
            .bind(&alarm.enabled)
            .bind(&alarm.customs)
            .bind(alarm.id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn get(&self, id: i64) -> Result<Option<AlarmRecord>, sqlx::Error> {
        const SQL: &str = "\
SELECT id, title, title_type, ringtone, default_repeat, repeats, times, enabled, customs
FROM alarms
WHERE id = ?;
";

        sqlx::query_as(SQL)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn list(&self) -> Result<Vec<AlarmRecord>, sqlx::Error> {
        const SQL: &str = "\
SELECT id, title, title_type, ringtone, default_repeat, repeats, times, enabled, customs
FROM alarms
ORDER BY id ASC;
";

        sqlx::query_as(SQL).fetch_all(&self.pool).await
    }

    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        const SQL: &str = "DELETE FROM alarms WHERE id = ?;";

        let result = sqlx::query(SQL).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }
}

/// Row of the `alarms` table. Repeat entries are stored column-wise as JSON
/// lists of equal length.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AlarmRecord {
    id: Option<i64>,
    title: String,
    title_type: String,
    ringtone: String,
    default_repeat: i64,
    repeats: Option<String>,
    times: Option<String>,
    enabled: Option<String>,
    customs: Option<String>,
}

impl TryFrom<&Alarm> for AlarmRecord {
    type Error = Error;

    fn try_from(alarm: &Alarm) -> Result<Self, Self::Error> {
        let repeats: Vec<_> = alarm.repeats.iter().map(|a| a.repeat).collect();
        let times: Vec<_> = alarm
            .repeats
            .iter()
            .map(|a| vec![i32::from(a.hour), i32::from(a.minute)])
            .collect();
        let enabled: Vec<_> = alarm.repeats.iter().map(|a| a.enabled).collect();
        let customs: Vec<_> = alarm.repeats.iter().map(|a| a.custom.clone()).collect();

        Ok(Self {
            id: alarm.id,
            title: alarm.title.clone(),
            title_type: codec::from_alarm_title_type(Some(&alarm.title_type))?
                .unwrap_or_default(),
            ringtone: alarm.ringtone.clone(),
            default_repeat: alarm.default_repeat.value() as i64,
            repeats: codec::from_repeat_list(Some(&repeats))?,
            times: codec::from_list_integer_list(Some(&times))?,
            enabled: codec::from_boolean_list(Some(&enabled))?,
            customs: codec::from_custom_repeat_list(Some(&customs))?,
        })
    }
}

impl TryFrom<AlarmRecord> for Alarm {
    type Error = Error;

    fn try_from(record: AlarmRecord) -> Result<Self, Self::Error> {
        let repeats = codec::to_repeat_list(record.repeats.as_deref())?.unwrap_or_default();
        let mut times =
            codec::to_list_integer_list(record.times.as_deref())?.unwrap_or_default();
        let mut enabled = codec::to_boolean_list(record.enabled.as_deref())?.unwrap_or_default();
        let mut customs =
            codec::to_custom_repeat_list(record.customs.as_deref())?.unwrap_or_default();

        // the repeats column holds the entry count, shorter columns are padded
        if times.len() < repeats.len() || enabled.len() < repeats.len() {
            tracing::warn!(
                id = record.id,
                repeats = repeats.len(),
                times = times.len(),
                enabled = enabled.len(),
                "entry columns are shorter than repeats, padding with defaults"
            );
        }
        times.resize(repeats.len(), Vec::new());
        enabled.resize(repeats.len(), true);
        customs.resize(repeats.len(), None);

        let repeats = repeats
            .into_iter()
            .zip(times)
            .zip(enabled)
            .zip(customs)
            .map(|(((repeat, time), enabled), custom)| RepeatEntry {
                repeat,
                hour: time_part(&time, 0),
                minute: time_part(&time, 1),
                enabled,
                custom,
            })
            .collect();

        Ok(Self {
            id: record.id,
            title: record.title,
            title_type: codec::to_alarm_title_type(Some(&record.title_type))?.unwrap_or_default(),
            ringtone: record.ringtone,
            default_repeat: usize::try_from(record.default_repeat)
                .ok()
                .and_then(Repeat::from_value)
                .unwrap_or_default(),
            repeats,
        })
    }
}

fn time_part(time: &[i32], index: usize) -> u8 {
    time.get(index)
        .and_then(|&a| u8::try_from(a).ok())
        .unwrap_or_default()
}
