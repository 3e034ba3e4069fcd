// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/main.rs - Command line front end for pdgen.
 *  Copyright (C) 2026  Forest Crossman <cyrozap@gmail.com>
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  You should have received a copy of the GNU General Public License
 *  along with this program.  If not, see <https://www.gnu.org/licenses/>.
 */

use std::io;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pdgen::Config;
use pdgen::layout::PcbTool;
use pdgen::report::{Format, write_report};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The `pcb` board file.
    board: PathBuf,

    /// The part database CSV export.
    part_db: PathBuf,

    /// The layout tool executable.
    #[arg(long, env = "PDGEN_PCB", default_value = "pcb")]
    pcb: PathBuf,

    /// Keep the gerber layers in this directory.
    #[arg(long)]
    gerber_dir: Option<PathBuf>,

    /// Report format.
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Log more. Repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config = Config::new(&args.board, &args.part_db);
    if let Some(gerber_dir) = &args.gerber_dir {
        config = config.with_gerber_dir(gerber_dir);
    }
    let tool = PcbTool::new(&args.pcb);

    let components = match pdgen::pipeline::run(&config, &tool) {
        Ok(components) => components,
        Err(error) => {
            eprintln!("Error processing board {:?}: {}", &args.board, error);
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = io::stdout().lock();
    if let Err(error) = write_report(&mut stdout, &components, args.format) {
        eprintln!("Error writing report: {}", error);
        return ExitCode::FAILURE;
    }
    if let Err(error) = stdout.flush() {
        eprintln!("Error writing report: {}", error);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
