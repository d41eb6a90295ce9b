// SPDX-FileCopyrightText: 2025-2026 Fearefull <todoreminder@fearefull.com>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{Arg, ArgAction, ArgMatches, arg, value_parser};
use todoreminder_core::{
    AlarmEditor, AlarmTitleType, CustomRepeat, CustomRepeatType, MonthDayType, MonthType, Repeat,
    RepeatEntry, WeekType,
};

use crate::util::parse_time;

/// Stands in for the picker uri, the ringtone comes from the command line.
const COMMAND_LINE_RINGTONE_URI: &str = "cli:ringtone";

#[derive(Debug, Clone, Copy)]
pub struct AlarmIdArgs;

impl AlarmIdArgs {
    pub fn id() -> Arg {
        arg!(id: <ID> "The id of the alarm").value_parser(value_parser!(i64))
    }

    pub fn get_id(matches: &ArgMatches) -> i64 {
        matches
            .get_one::<i64>("id")
            .copied()
            .expect("id is required")
    }
}

/// Fields of an alarm that can be set from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlarmArgs {
    pub title: Option<String>,
    pub title_type: Option<AlarmTitleType>,
    pub ringtone: Option<String>,
    pub repeat: Option<Repeat>,
    pub at: Option<(u8, u8)>,
    pub every: Option<u32>,
    pub unit: Option<CustomRepeatType>,
    pub on: Vec<String>,
}

impl AlarmArgs {
    pub fn args() -> Vec<Arg> {
        vec![
            arg!(title: -t --title <TITLE> "Title of the alarm"),
            arg!(title_type: --"type" <TYPE> "Category of the alarm, also resets the title")
                .value_parser(value_parser!(AlarmTitleType)),
            arg!(--ringtone <RINGTONE> "Ringtone of the alarm"),
            arg!(-r --repeat <REPEAT> "Repeat mode of the new entry")
                .value_parser(value_parser!(Repeat)),
            arg!(--at <TIME> "Time of day of the new entry, in HH:MM").value_parser(parse_time),
            arg!(--every <N> "Number of units between two rings of a custom repeat")
                .value_parser(value_parser!(u32).range(1..)),
            arg!(--unit <UNIT> "Unit of a custom repeat")
                .value_parser(value_parser!(CustomRepeatType)),
            arg!(--on <LABEL> "Weekdays, days of month or months of a custom repeat")
                .num_args(1..)
                .value_delimiter(',')
                .action(ArgAction::Append),
        ]
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            title: matches.get_one("title").cloned(),
            title_type: matches.get_one("title_type").copied(),
            ringtone: matches.get_one("ringtone").cloned(),
            repeat: matches.get_one("repeat").copied(),
            at: matches.get_one("at").copied(),
            every: matches.get_one("every").copied(),
            unit: matches.get_one("unit").copied(),
            on: matches
                .get_many::<String>("on")
                .map(|a| a.cloned().collect())
                .unwrap_or_default(),
        }
    }

    /// Applies the alarm fields to an editing session. The type goes first
    /// since it resets the title.
    pub fn apply(&self, editor: &mut AlarmEditor) {
        if let Some(title_type) = self.title_type {
            editor.set_title_type(title_type);
        }
        if let Some(title) = &self.title {
            editor.on_title_text_changed(title);
        }
        if let Some(ringtone) = &self.ringtone {
            editor.on_ringtone_picked(ringtone, Some(COMMAND_LINE_RINGTONE_URI));
        }
    }

    /// Builds the repeat entry to add, `None` when no time is given.
    pub fn entry(&self, selected: Repeat) -> Result<Option<RepeatEntry>, Box<dyn Error>> {
        let custom_given = self.every.is_some() || self.unit.is_some() || !self.on.is_empty();
        let Some((hour, minute)) = self.at else {
            if self.repeat.is_some() || custom_given {
                return Err("A repeat needs a time, use --at HH:MM".into());
            }
            return Ok(None);
        };

        let repeat = match self.repeat {
            Some(repeat) => repeat,
            None if custom_given => Repeat::Custom,
            None => selected,
        };
        if repeat != Repeat::Custom {
            if custom_given {
                let msg = format!("--every, --unit and --on need --repeat custom, got {repeat}");
                return Err(msg.into());
            }
            return Ok(Some(RepeatEntry::new(repeat, hour, minute)));
        }

        let custom = self.custom_repeat()?;
        Ok(Some(RepeatEntry::with_custom(hour, minute, custom)))
    }

    fn custom_repeat(&self) -> Result<CustomRepeat, Box<dyn Error>> {
        let mut custom = CustomRepeat::new(self.unit.unwrap_or_default());
        if let Some(every) = self.every {
            custom.set_count(every);
        }
        if self.on.is_empty() {
            return Ok(custom);
        }

        match custom.kind() {
            CustomRepeatType::Week => {
                custom.set_weekdays(parse_labels(&self.on, WeekType::from_label)?)
            }
            CustomRepeatType::Month => {
                custom.set_month_days(parse_labels(&self.on, MonthDayType::from_label)?)
            }
            CustomRepeatType::Year => {
                custom.set_months(parse_labels(&self.on, MonthType::from_label)?)
            }
            kind => return Err(format!("--on does not apply to a {kind} repeat").into()),
        }
        Ok(custom)
    }
}

fn parse_labels<T: PartialEq>(
    labels: &[String],
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Vec<T>, Box<dyn Error>> {
    let mut out = Vec::with_capacity(labels.len());
    for label in labels {
        let item = parse(label).ok_or_else(|| format!("Unknown label: {label}"))?;
        if !out.contains(&item) {
            out.push(item);
        }
    }
    Ok(out)
}
