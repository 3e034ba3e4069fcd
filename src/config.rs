// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/config.rs - Run configuration for pdgen.
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

use std::path::PathBuf;

/// Prefix of the per-run scratch directory.
pub const SCRATCH_PREFIX: &str = "pdgen-scratch-";

/// Inputs and output locations for one run of [crate::pipeline::run].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The board layout file.
    pub board: PathBuf,
    /// The part database export.
    pub part_db: PathBuf,
    /// Where to keep the gerber layers. When unset they are written to the
    /// scratch directory and removed with it.
    pub gerber_dir: Option<PathBuf>,
}

impl Config {
    pub fn new(board: impl Into<PathBuf>, part_db: impl Into<PathBuf>) -> Self {
        Self {
            board: board.into(),
            part_db: part_db.into(),
            gerber_dir: None,
        }
    }

    pub fn with_gerber_dir(mut self, gerber_dir: impl Into<PathBuf>) -> Self {
        self.gerber_dir = Some(gerber_dir.into());
        self
    }
}
