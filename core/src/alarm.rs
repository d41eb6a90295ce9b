// SPDX-FileCopyrightText: 2025-2026 Fearefull <todoreminder@fearefull.com>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{AlarmTitleType, CustomRepeat, Repeat};

/// An alarm with its title, ringtone and the repeat entries it rings on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alarm {
    /// Row id, `None` until the alarm is inserted.
    pub id: Option<i64>,

    pub title: String,

    pub title_type: AlarmTitleType,

    /// Display name of the ringtone.
    pub ringtone: String,

    /// Repeat mode the editor opens on.
    pub default_repeat: Repeat,

    pub repeats: Vec<RepeatEntry>,
}

impl Default for Alarm {
    fn default() -> Self {
        let title_type = AlarmTitleType::default();
        Self {
            id: None,
            title: title_type.text().to_owned(),
            title_type,
            ringtone: String::new(),
            default_repeat: Repeat::default(),
            repeats: Vec::new(),
        }
    }
}

impl Alarm {
    /// Number of repeat entries configured on this alarm.
    pub fn repeat_count(&self) -> usize {
        self.repeats.len()
    }

    /// Sets the title type, resetting the title to the type's default text.
    pub fn set_title_type(&mut self, title_type: AlarmTitleType) {
        self.title_type = title_type;
        self.title = title_type.text().to_owned();
    }

    pub fn last_repeat(&self) -> Option<&RepeatEntry> {
        self.repeats.last()
    }
}

/// One time of day an alarm rings at, with its repeat mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepeatEntry {
    pub repeat: Repeat,
    pub hour: u8,
    pub minute: u8,
    pub enabled: bool,

    /// Schedule for [`Repeat::Custom`] entries.
    pub custom: Option<CustomRepeat>,
}

impl RepeatEntry {
    pub fn new(repeat: Repeat, hour: u8, minute: u8) -> Self {
        Self {
            repeat,
            hour,
            minute,
            enabled: true,
            custom: (repeat == Repeat::Custom).then(CustomRepeat::default),
        }
    }

    pub fn with_custom(hour: u8, minute: u8, custom: CustomRepeat) -> Self {
        Self {
            custom: Some(custom),
            ..Self::new(Repeat::Custom, hour, minute)
        }
    }

    /// Describes when this entry rings, e.g. `07:30 Daily` or `07:30 5 minute`.
    pub fn describe(&self) -> String {
        match (&self.repeat, &self.custom) {
            (Repeat::Custom, Some(custom)) => {
                format!("{:02}:{:02} {}", self.hour, self.minute, custom.describe())
            }
            (repeat, _) => format!("{:02}:{:02} {}", self.hour, self.minute, repeat),
        }
    }
}

impl fmt::Display for RepeatEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CustomRepeatType, WeekType};

    #[test]
    fn new_alarm_has_no_repeats() {
        let alarm = Alarm::default();
        assert_eq!(alarm.repeat_count(), 0);
        assert_eq!(alarm.title, "Alarm");
        assert!(alarm.last_repeat().is_none());
    }

    #[test]
    fn set_title_type_resets_title() {
        let mut alarm = Alarm {
            title: "Something".to_string(),
            ..Default::default()
        };
        alarm.set_title_type(AlarmTitleType::Study);
        assert_eq!(alarm.title_type, AlarmTitleType::Study);
        assert_eq!(alarm.title, "Study");
    }

    #[test]
    fn custom_entry_gets_default_schedule() {
        let entry = RepeatEntry::new(Repeat::Custom, 6, 0);
        assert_eq!(entry.custom, Some(CustomRepeat::default()));
        assert_eq!(entry.describe(), "06:00 Saturday");

        let entry = RepeatEntry::new(Repeat::Daily, 7, 5);
        assert!(entry.custom.is_none());
        assert_eq!(entry.to_string(), "07:05 Daily");
    }

    #[test]
    fn describe_custom_entry() {
        let mut custom = CustomRepeat::new(CustomRepeatType::Week);
        custom.add_weekday(WeekType::Day3);
        let entry = RepeatEntry::with_custom(21, 45, custom);
        assert_eq!(entry.describe(), "21:45 Saturday, Monday");
    }
}
