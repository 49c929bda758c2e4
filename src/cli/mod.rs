// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the keyed command-line interface.
//!
//! Two subcommands: `demo` runs one read and one write through both tiers of
//! the demonstration map, and `inspect` prints its bindings. With no
//! subcommand the demo runs.

pub mod display;
pub mod inspect;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "keyed",
    about = "Heterogeneous key/type tables checked before the program runs",
    version
)]
pub struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Read `world` and write `is = 5.0` through the static and dynamic tiers
    Demo,

    /// Print the demonstration map's bindings
    Inspect {
        /// Also check the deliberately broken maps and list every violation
        #[arg(long)]
        all: bool,
    },
}
