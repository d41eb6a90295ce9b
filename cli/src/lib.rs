// SPDX-FileCopyrightText: 2025-2026 Fearefull <todoreminder@fearefull.com>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line front end of the to-do reminder.

mod alarm_formatter;
mod arg;
mod cli;
mod cmd_alarm;
mod config;
mod table;
mod util;

pub use crate::cli::{Cli, Commands, run};
pub use crate::config::{Config, parse_config};
