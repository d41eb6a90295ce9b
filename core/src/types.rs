// SPDX-FileCopyrightText: 2025-2026 Fearefull <todoreminder@fearefull.com>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter, FromRepr, IntoEnumIterator};

/// Identifier of an icon drawable shown next to a title or repeat counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconRes(pub &'static str);

impl Display for IconRes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Unit of recurrence for a custom repeat.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(EnumIter, EnumCount, FromRepr)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum CustomRepeatType {
    Minute,
    Hour,
    Day,
    #[default]
    Week,
    Month,
    Year,
}

impl CustomRepeatType {
    pub fn label(self) -> &'static str {
        match self {
            CustomRepeatType::Minute => "minute",
            CustomRepeatType::Hour => "hour",
            CustomRepeatType::Day => "day",
            CustomRepeatType::Week => "week",
            CustomRepeatType::Month => "month",
            CustomRepeatType::Year => "year",
        }
    }
}

impl Display for CustomRepeatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Day of the week. The week starts on Saturday.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(EnumIter, EnumCount, FromRepr)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum WeekType {
    #[default]
    Day1,
    Day2,
    Day3,
    Day4,
    Day5,
    Day6,
    Day7,
}

const WEEK_LABELS: [&str; WeekType::COUNT] = [
    "Saturday",
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
];

impl WeekType {
    pub fn label(self) -> &'static str {
        WEEK_LABELS[self as usize]
    }

    /// Finds the weekday whose label matches, ignoring ASCII case.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::iter().find(|a| a.label().eq_ignore_ascii_case(label.trim()))
    }
}

impl Display for WeekType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Day of a calendar month, 1 to 31.
#[rustfmt::skip]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(EnumIter, EnumCount, FromRepr)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum MonthDayType {
    #[default]
    Day1, Day2, Day3, Day4, Day5, Day6, Day7, Day8, Day9, Day10,
    Day11, Day12, Day13, Day14, Day15, Day16, Day17, Day18, Day19, Day20,
    Day21, Day22, Day23, Day24, Day25, Day26, Day27, Day28, Day29, Day30,
    Day31,
}

#[rustfmt::skip]
const MONTH_DAY_LABELS: [&str; MonthDayType::COUNT] = [
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "10",
    "11", "12", "13", "14", "15", "16", "17", "18", "19", "20",
    "21", "22", "23", "24", "25", "26", "27", "28", "29", "30",
    "31",
];

impl MonthDayType {
    pub fn label(self) -> &'static str {
        MONTH_DAY_LABELS[self as usize]
    }

    /// The day number, from 1 to 31.
    pub fn day(self) -> u8 {
        self as u8 + 1
    }

    pub fn from_day(day: u8) -> Option<Self> {
        day.checked_sub(1).and_then(Self::from_repr)
    }

    pub fn from_label(label: &str) -> Option<Self> {
        label.trim().parse().ok().and_then(Self::from_day)
    }
}

impl Display for MonthDayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Month of the Solar Hijri calendar.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(EnumIter, EnumCount, FromRepr)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum MonthType {
    #[default]
    Farvardin,
    Ordibehesht,
    Khordad,
    Tir,
    Mordad,
    Shahrivar,
    Mehr,
    Aban,
    Azar,
    Dey,
    Bahman,
    Esfand,
}

const MONTH_LABELS: [&str; MonthType::COUNT] = [
    "Farvardin",
    "Ordibehesht",
    "Khordad",
    "Tir",
    "Mordad",
    "Shahrivar",
    "Mehr",
    "Aban",
    "Azar",
    "Dey",
    "Bahman",
    "Esfand",
];

impl MonthType {
    pub fn label(self) -> &'static str {
        MONTH_LABELS[self as usize]
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::iter().find(|a| a.label().eq_ignore_ascii_case(label.trim()))
    }
}

impl Display for MonthType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Repeat mode of one alarm entry. The discriminant is the editor tab index.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(EnumIter, EnumCount, FromRepr)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Repeat {
    /// Rings once.
    #[default]
    Once,

    /// Rings every day.
    Daily,

    /// Rings on the same weekday each week.
    Weekly,

    /// Rings on the same day each month.
    Monthly,

    /// Rings on the same day each year.
    Yearly,

    /// Rings according to a [`CustomRepeat`](crate::CustomRepeat).
    Custom,
}

impl Repeat {
    /// Number of repeat modes, which is also the number of editor pages.
    pub const fn count() -> usize {
        Self::COUNT
    }

    /// Tab index of this mode in the editor.
    pub fn value(self) -> usize {
        self as usize
    }

    pub fn from_value(value: usize) -> Option<Self> {
        u8::try_from(value).ok().and_then(Self::from_repr)
    }

    pub fn label(self) -> &'static str {
        match self {
            Repeat::Once => "Once",
            Repeat::Daily => "Daily",
            Repeat::Weekly => "Weekly",
            Repeat::Monthly => "Monthly",
            Repeat::Yearly => "Yearly",
            Repeat::Custom => "Custom",
        }
    }

    pub fn icon(self) -> IconRes {
        match self {
            Repeat::Once => IconRes("ic_repeat_once"),
            Repeat::Daily => IconRes("ic_repeat_daily"),
            Repeat::Weekly => IconRes("ic_repeat_weekly"),
            Repeat::Monthly => IconRes("ic_repeat_monthly"),
            Repeat::Yearly => IconRes("ic_repeat_yearly"),
            Repeat::Custom => IconRes("ic_repeat_custom"),
        }
    }
}

impl Display for Repeat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Category of an alarm title, carrying a default text and icon.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(EnumIter, EnumCount)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum AlarmTitleType {
    #[default]
    Alarm,
    Work,
    Study,
    Sport,
    Medicine,
    Meeting,
    Shopping,
    Birthday,
}

impl AlarmTitleType {
    /// Default title text for this category.
    pub fn text(self) -> &'static str {
        self.metadata().0
    }

    pub fn icon(self) -> IconRes {
        self.metadata().1
    }

    fn metadata(self) -> (&'static str, IconRes) {
        match self {
            AlarmTitleType::Alarm => ("Alarm", IconRes("ic_title_alarm")),
            AlarmTitleType::Work => ("Work", IconRes("ic_title_work")),
            AlarmTitleType::Study => ("Study", IconRes("ic_title_study")),
            AlarmTitleType::Sport => ("Sport", IconRes("ic_title_sport")),
            AlarmTitleType::Medicine => ("Take medicine", IconRes("ic_title_medicine")),
            AlarmTitleType::Meeting => ("Meeting", IconRes("ic_title_meeting")),
            AlarmTitleType::Shopping => ("Shopping", IconRes("ic_title_shopping")),
            AlarmTitleType::Birthday => ("Birthday", IconRes("ic_title_birthday")),
        }
    }
}

impl Display for AlarmTitleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
