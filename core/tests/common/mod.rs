// SPDX-FileCopyrightText: 2025-2026 Fearefull <todoreminder@fearefull.com>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - Test data factories (fixtures)
//! - Temporary directory management

mod fixtures;
mod temp_dir;

#[allow(unused_imports)]
pub use fixtures::{open_editor, test_alarm, test_config, wait_until_settled};
pub use temp_dir::setup_temp_dirs;
