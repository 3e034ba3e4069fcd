// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/layout.rs - Interface to the external board layout tool.
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
 * # `layout` Module
 *
 * Runs the gEDA `pcb` exporter to turn a board file into gerber layers and a
 * placement (xy) file.
 */

use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use crate::error::{Error, Result};

/// Name of the placement file written into the scratch directory.
pub const PLACEMENT_FILE_NAME: &str = "components.xy";

/// Base name given to every gerber layer file.
pub const GERBER_BASE_NAME: &str = "board";

/// Files produced from a board by an [ArtifactProducer].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    /// Directory holding the gerber layers.
    pub gerber_dir: PathBuf,
    /// The pick-and-place export.
    pub placement_file: PathBuf,
}

/// Something that can export manufacturing files from a board.
pub trait ArtifactProducer {
    /// Writes gerber layers into `gerber_dir` and a placement file somewhere
    /// under `scratch_dir`, using `scratch_dir` for any intermediate files.
    fn produce_manufacturing_artifacts(
        &self,
        board: &Path,
        scratch_dir: &Path,
        gerber_dir: &Path,
    ) -> Result<Artifacts>;
}

/// The gEDA `pcb` command-line exporter.
#[derive(Debug, Clone)]
pub struct PcbTool {
    program: PathBuf,
}

impl PcbTool {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    fn export_gerber(&self, board: &Path, gerber_dir: &Path, scratch_dir: &Path) -> Result<()> {
        fs::create_dir_all(gerber_dir).map_err(|e| Error::io(gerber_dir, e))?;
        let base = absolute(gerber_dir)?.join(GERBER_BASE_NAME);
        self.run(
            [
                OsStr::new("-x"),
                OsStr::new("gerber"),
                OsStr::new("--gerberfile"),
                base.as_os_str(),
                board.as_os_str(),
            ],
            scratch_dir,
        )
    }

    fn export_xy(&self, board: &Path, xy_path: &Path, scratch_dir: &Path) -> Result<()> {
        if let Some(parent) = xy_path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        let xy_path = absolute(xy_path)?;
        self.run(
            [
                OsStr::new("-x"),
                OsStr::new("bom"),
                OsStr::new("--xyfile"),
                xy_path.as_os_str(),
                board.as_os_str(),
            ],
            scratch_dir,
        )
    }

    fn run<'a>(&self, args: impl IntoIterator<Item = &'a OsStr>, cwd: &Path) -> Result<()> {
        let mut command = Command::new(&self.program);
        command.args(args).current_dir(cwd);
        let command_line = format!("{command:?}");

        debug!(command = %command_line, "running layout tool");
        let status = command.status().map_err(|source| Error::ToolSpawn {
            command: command_line.clone(),
            source,
        })?;

        if !status.success() {
            return Err(Error::ToolFailed {
                command: command_line,
                status,
            });
        }

        Ok(())
    }
}

impl Default for PcbTool {
    fn default() -> Self {
        Self::new("pcb")
    }
}

impl ArtifactProducer for PcbTool {
    fn produce_manufacturing_artifacts(
        &self,
        board: &Path,
        scratch_dir: &Path,
        gerber_dir: &Path,
    ) -> Result<Artifacts> {
        let board = fs::canonicalize(board).map_err(|e| Error::io(board, e))?;

        self.export_gerber(&board, gerber_dir, scratch_dir)?;

        let placement_file = scratch_dir.join(PLACEMENT_FILE_NAME);
        self.export_xy(&board, &placement_file, scratch_dir)?;

        Ok(Artifacts {
            gerber_dir: gerber_dir.to_path_buf(),
            placement_file,
        })
    }
}

// The tool runs in the scratch directory, so relative paths would resolve
// against the wrong base.
fn absolute(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path).map_err(|e| Error::io(path, e))
}
