// SPDX-FileCopyrightText: 2025-2026 Fearefull <todoreminder@fearefull.com>
//
// SPDX-License-Identifier: Apache-2.0

fn main() {
    // rebuild when a migration is added
    println!("cargo:rerun-if-changed=src/localdb/migrations");
}
