// SPDX-FileCopyrightText: 2025-2026 Fearefull <todoreminder@fearefull.com>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::{Color, Colorize};
use todoreminder_core::Alarm;

use crate::table::{PaddingDirection, Table, TableColumn};
use crate::util::ArgOutputFormat;

#[derive(Debug)]
pub struct AlarmFormatter {
    columns: Vec<AlarmColumn>,
    format: ArgOutputFormat,
}

impl AlarmFormatter {
    pub fn new() -> Self {
        Self {
            columns: vec![
                AlarmColumn::Id,
                AlarmColumn::Title,
                AlarmColumn::TitleType,
                AlarmColumn::Repeats,
            ],
            format: ArgOutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: ArgOutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, alarms: &'a [Alarm]) -> Display<'a> {
        Display {
            alarms,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    alarms: &'a [Alarm],
    formatter: &'a AlarmFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatter.format {
            ArgOutputFormat::Json => {
                let json = serde_json::to_string_pretty(self.alarms).map_err(|_| fmt::Error)?;
                writeln!(f, "{json}")
            }
            ArgOutputFormat::Table if self.alarms.is_empty() => writeln!(f, "No alarms"),
            ArgOutputFormat::Table => write!(
                f,
                "{}",
                Table::new(&self.formatter.columns, self.alarms).with_header(true)
            ),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum AlarmColumn {
    Id,
    Title,
    TitleType,
    Repeats,
}

impl TableColumn<Alarm> for AlarmColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            AlarmColumn::Id => "ID",
            AlarmColumn::Title => "Title",
            AlarmColumn::TitleType => "Type",
            AlarmColumn::Repeats => "Repeats",
        }
        .into()
    }

    fn format<'a>(&self, alarm: &'a Alarm) -> Cow<'a, str> {
        match self {
            AlarmColumn::Id => alarm
                .id
                .map_or_else(|| "-".to_string(), |id| id.to_string())
                .into(),
            AlarmColumn::Title => alarm.title.as_str().into(),
            AlarmColumn::TitleType => alarm.title_type.text().into(),
            AlarmColumn::Repeats => alarm
                .repeats
                .iter()
                .filter(|a| a.enabled)
                .map(|a| a.describe())
                .collect::<Vec<_>>()
                .join("; ")
                .into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            AlarmColumn::Id => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn get_color(&self, alarm: &Alarm) -> Option<Color> {
        match self {
            AlarmColumn::Repeats if !alarm.repeats.iter().any(|a| a.enabled) => {
                Some(Color::Yellow)
            }
            _ => None,
        }
    }
}

/// Full view of a single alarm, one line per repeat entry.
pub struct AlarmDetail<'a>(pub &'a Alarm);

impl fmt::Display for AlarmDetail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let alarm = self.0;
        match alarm.id {
            Some(id) => writeln!(f, "{} {}", format!("#{id}").bold(), alarm.title.bold())?,
            None => writeln!(f, "{}", alarm.title.bold())?,
        }
        writeln!(f, "Type:     {}", alarm.title_type)?;
        writeln!(f, "Ringtone: {}", alarm.ringtone)?;
        writeln!(f, "Opens on: {}", alarm.default_repeat)?;

        if alarm.repeats.is_empty() {
            return writeln!(f, "{}", "No repeats".yellow());
        }
        writeln!(f, "Repeats:")?;
        for (i, entry) in alarm.repeats.iter().enumerate() {
            match entry.enabled {
                true => writeln!(f, "  {}. {entry}", i + 1)?,
                false => writeln!(f, "  {}. {} {}", i + 1, entry, "(off)".dimmed())?,
            }
        }
        Ok(())
    }
}
