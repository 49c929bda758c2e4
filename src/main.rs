// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::process::ExitCode;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use keyed::demo::{self, CompileTimeMap, Is, True, World, DEMO_MAP};
use keyed::{get, set, StaticKey};

mod cli;
use cli::{inspect, Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => run_demo(),
        Commands::Inspect { all } => run_inspect(all),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("❌ {:#}", err);
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` wins; otherwise `info`, or `debug` with `--verbose`.
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);
    if let Err(err) = builder.try_init() {
        eprintln!("failed to install tracing subscriber: {err}");
    }
}

/// One read and one write through each tier of the demonstration map.
fn run_demo() -> Result<()> {
    // Static tier: key presence and value types were settled by the compiler.
    let ret: True = get::<World, CompileTimeMap>();
    set::<Is, CompileTimeMap>(5.0);
    info!(world = ?ret, "static tier: read world, wrote is = 5.0");

    // Dynamic tier: same contract, checked on first use.
    let map = DEMO_MAP
        .try_validated()
        .map_err(Clone::clone)
        .context("validating the demonstration map")?;
    let ret: True = map.get(World::KEY)?;
    map.set(Is::KEY, &5.0_f64)?;
    info!(map = map.name(), world = ?ret, "dynamic tier: read world, wrote is = 5.0");

    println!("world = {:?}, is = 5.0", ret);
    Ok(())
}

/// Print the demonstration map, and with `all` the broken ones as well.
fn run_inspect(all: bool) -> Result<()> {
    let found = inspect::print_map(&CompileTimeMap::KEY_MAP);
    ensure!(found == 0, "the demonstration map has {} violations", found);

    if all {
        for map in [demo::NON_UNIQUE_MAP, demo::OTHER_NON_UNIQUE_MAP] {
            let found = inspect::print_map(&map);
            let err = map.validate().err();
            ensure!(
                found > 0 && err.is_some(),
                "map `{}` should have been rejected",
                map.name()
            );
            if let Some(err) = err {
                debug!(%err, "rejected as expected");
            }
        }
    }
    Ok(())
}
