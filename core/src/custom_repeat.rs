// SPDX-FileCopyrightText: 2025-2026 Fearefull <todoreminder@fearefull.com>
//
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::{CustomRepeatType, MonthDayType, MonthType, WeekType};

/// A user-defined repeat schedule: every `count` units, or on selected
/// weekdays, month days, or months depending on the repeat type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomRepeat {
    #[serde(rename = "type")]
    kind: CustomRepeatType,
    count: u32,
    on_week: Vec<WeekType>,
    on_month_day: Vec<MonthDayType>,
    on_month: Vec<MonthType>,
}

impl Default for CustomRepeat {
    fn default() -> Self {
        Self {
            kind: CustomRepeatType::Week,
            count: 1,
            on_week: vec![WeekType::Day1],
            on_month_day: vec![MonthDayType::Day1],
            on_month: vec![MonthType::Farvardin],
        }
    }
}

impl CustomRepeat {
    pub fn new(kind: CustomRepeatType) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    pub fn kind(&self) -> CustomRepeatType {
        self.kind
    }

    pub fn set_kind(&mut self, kind: CustomRepeatType) {
        self.kind = kind;
    }

    /// Number of units between two rings, used by minute, hour and day repeats.
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn set_count(&mut self, count: u32) {
        self.count = count;
    }

    pub fn weekdays(&self) -> &[WeekType] {
        &self.on_week
    }

    pub fn set_weekdays(&mut self, weekdays: Vec<WeekType>) {
        self.on_week = weekdays;
    }

    /// Adds a weekday unless it is already selected.
    pub fn add_weekday(&mut self, weekday: WeekType) {
        push_unique(&mut self.on_week, weekday);
    }

    pub fn remove_weekday(&mut self, weekday: WeekType) {
        remove_first(&mut self.on_week, weekday);
    }

    pub fn month_days(&self) -> &[MonthDayType] {
        &self.on_month_day
    }

    pub fn set_month_days(&mut self, month_days: Vec<MonthDayType>) {
        self.on_month_day = month_days;
    }

    /// Adds a day of month unless it is already selected.
    pub fn add_month_day(&mut self, month_day: MonthDayType) {
        push_unique(&mut self.on_month_day, month_day);
    }

    pub fn remove_month_day(&mut self, month_day: MonthDayType) {
        remove_first(&mut self.on_month_day, month_day);
    }

    pub fn months(&self) -> &[MonthType] {
        &self.on_month
    }

    pub fn set_months(&mut self, months: Vec<MonthType>) {
        self.on_month = months;
    }

    /// Adds a month unless it is already selected.
    pub fn add_month(&mut self, month: MonthType) {
        push_unique(&mut self.on_month, month);
    }

    pub fn remove_month(&mut self, month: MonthType) {
        remove_first(&mut self.on_month, month);
    }

    /// Human readable description of when this repeat rings.
    pub fn describe(&self) -> String {
        match self.kind {
            CustomRepeatType::Minute | CustomRepeatType::Hour | CustomRepeatType::Day => {
                format!("{} {}", self.count, self.kind.label())
            }
            CustomRepeatType::Week => join_labels(self.on_week.iter().map(|a| a.label())),
            CustomRepeatType::Month => join_labels(self.on_month_day.iter().map(|a| a.label())),
            CustomRepeatType::Year => join_labels(self.on_month.iter().map(|a| a.label())),
        }
    }
}

fn push_unique<T: PartialEq>(list: &mut Vec<T>, item: T) {
    if !list.contains(&item) {
        list.push(item);
    }
}

fn remove_first<T: PartialEq>(list: &mut Vec<T>, item: T) {
    if let Some(i) = list.iter().position(|a| *a == item) {
        list.remove(i);
    }
}

fn join_labels<'a>(labels: impl Iterator<Item = &'a str>) -> String {
    labels.collect::<Vec<_>>().join(", ")
}
