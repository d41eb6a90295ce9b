// SPDX-FileCopyrightText: 2025-2026 Fearefull <todoreminder@fearefull.com>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use todoreminder_core::{Config as CoreConfig, LocalDb};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cmd_alarm::{CmdAlarmDelete, CmdAlarmEdit, CmdAlarmList, CmdAlarmNew, CmdAlarmShow};
use crate::config::parse_config;
use crate::util::ArgOutputFormat;

/// Run the reminder command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    };
    Ok(())
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new("reminder")
            .about("To-do alarms with repeat schedules.")
            .author("Fearefull <todoreminder@fearefull.com>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to list
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $REMINDER_CONFIG, then \
$XDG_CONFIG_HOME/todoreminder/config.toml on Linux and MacOS, \
%LOCALAPPDATA%/todoreminder/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdAlarmNew::command())
            .subcommand(CmdAlarmEdit::command())
            .subcommand(CmdAlarmList::command())
            .subcommand(CmdAlarmShow::command())
            .subcommand(CmdAlarmDelete::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Ok(Self::from(matches))
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Ok(Self::from(matches))
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Self {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdAlarmNew::NAME, matches)) => New(CmdAlarmNew::from(matches)),
            Some((CmdAlarmEdit::NAME, matches)) => Edit(CmdAlarmEdit::from(matches)),
            Some((CmdAlarmList::NAME, matches)) => List(CmdAlarmList::from(matches)),
            Some((CmdAlarmShow::NAME, matches)) => Show(CmdAlarmShow::from(matches)),
            Some((CmdAlarmDelete::NAME, matches)) => Delete(CmdAlarmDelete::from(matches)),
            None => List(CmdAlarmList {
                output_format: ArgOutputFormat::Table,
            }),
            _ => unreachable!(),
        };

        let config = matches.get_one("config").cloned();
        Cli { config, command }
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Add a new alarm
    New(CmdAlarmNew),

    /// Edit an alarm
    Edit(CmdAlarmEdit),

    /// List alarms
    List(CmdAlarmList),

    /// Show one alarm
    Show(CmdAlarmShow),

    /// Delete alarms
    Delete(CmdAlarmDelete),
}

impl Commands {
    /// Run the command with the given configuration
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        tracing::debug!("parsing configuration...");
        let mut core_config = parse_config(config).await?.core;
        core_config.normalize()?;
        if let Some(dir) = &core_config.state_dir {
            tokio::fs::create_dir_all(dir).await?;
        }
        let db = LocalDb::open(core_config.db_path().as_deref()).await?;

        let result = self.run_with(&db, &core_config).await;

        db.close().await?;
        result
    }

    async fn run_with(self, db: &LocalDb, config: &CoreConfig) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            New(a) => a.run(db, config).await,
            Edit(a) => a.run(db).await,
            List(a) => a.run(db).await,
            Show(a) => a.run(db).await,
            Delete(a) => a.run(db).await,
        }
    }
}
