// SPDX-FileCopyrightText: 2025-2026 Fearefull <todoreminder@fearefull.com>
//
// SPDX-License-Identifier: Apache-2.0

use clap::{Arg, ArgMatches, arg, value_parser};

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ArgOutputFormat {
    Json,
    Table,
}

impl ArgOutputFormat {
    pub fn arg() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(ArgOutputFormat))
            .default_value("table")
    }

    pub fn from(matches: &ArgMatches) -> Self {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(ArgOutputFormat::Table)
    }
}

/// Parses a time of day in `HH:MM` form.
pub fn parse_time(time: &str) -> Result<(u8, u8), String> {
    const INVALID: &str = "Invalid time format. Expected format: HH:MM";

    let (hour, minute) = time.trim().split_once(':').ok_or(INVALID)?;
    let hour: u8 = hour.parse().map_err(|_| INVALID)?;
    let minute: u8 = minute.parse().map_err(|_| INVALID)?;
    if hour > 23 || minute > 59 {
        return Err(format!("Time out of range: {time}"));
    }
    Ok((hour, minute))
}
