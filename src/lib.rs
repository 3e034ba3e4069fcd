// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/lib.rs - Pick-and-place report generator library for `pcb` boards.
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

/*!
 * # `pdgen` Crate
 *
 * Turns a gEDA `pcb` board into gerber layers and a pick-and-place report
 * annotated with the package of every part.
 *
 * The crate provides a pipeline with these stages:
 *
 * 1. [layout]: Runs the external layout tool to export gerbers and placements.
 * 2. [filter]: Drops blank lines and `#` comments from the exported text.
 * 3. [parser]: Converts placement rows into [Component] records.
 * 4. [partdb]: Loads the part-code-to-package table.
 * 5. [lookup]: Fills in each component's package from the part database.
 * 6. [report]: Writes the finished components out.
 *
 * [pipeline::run] runs stages 1 through 5 inside a scratch directory.
 *
 * ## Usage Example
 *
 * ```no_run
 * use std::io;
 *
 * use pdgen::Config;
 * use pdgen::layout::PcbTool;
 * use pdgen::report::{Format, write_report};
 *
 * fn main() -> Result<(), Box<dyn std::error::Error>> {
 *     let config = Config::new("board.pcb", "parts.csv");
 *
 *     // Run the layout tool and look up every package
 *     let components = pdgen::pipeline::run(&config, &PcbTool::default())?;
 *
 *     write_report(io::stdout().lock(), &components, Format::Text)?;
 *
 *     Ok(())
 * }
 * ```
 */

pub mod config;
pub mod error;
pub mod filter;
pub mod layout;
pub mod lookup;
pub mod parser;
pub mod partdb;
pub mod pipeline;
pub mod report;

pub use config::Config;
pub use error::{Error, Result};
pub use parser::Component;
