// SPDX-FileCopyrightText: 2025-2026 Fearefull <todoreminder@fearefull.com>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end workflow tests for the todoreminder-core crate.
//!
//! These tests drive an editor against a real SQLite database.

mod alarm_lifecycle;
mod config_driven;
