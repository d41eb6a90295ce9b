// SPDX-FileCopyrightText: 2025-2026 Fearefull <todoreminder@fearefull.com>
//
// SPDX-License-Identifier: Apache-2.0

//! Core of the to-do reminder: repeat schedules, alarm records, their storage,
//! and the editor state that drives an alarm editing session.

mod alarm;
pub mod codec;
mod config;
mod custom_repeat;
mod editor;
mod error;
mod items;
mod localdb;
mod types;

pub use crate::alarm::{Alarm, RepeatEntry};
pub use crate::config::{APP_NAME, Config};
pub use crate::custom_repeat::CustomRepeat;
pub use crate::editor::{AlarmEditor, AlarmStore, EditorPhase, EditorUiState, Signal};
pub use crate::error::Error;
pub use crate::items::{AlarmTitleItem, Catalog, ItemProvider, RepeatItem};
pub use crate::localdb::LocalDb;
pub use crate::types::{
    AlarmTitleType, CustomRepeatType, IconRes, MonthDayType, MonthType, Repeat, WeekType,
};
