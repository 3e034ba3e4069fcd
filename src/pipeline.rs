// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/pipeline.rs - End-to-end placement report generation.
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
 * # `pipeline` Module
 *
 * Ties the stages together:
 *
 * 1. [crate::layout]: exports gerbers and the placement file from the board.
 * 2. [crate::partdb]: loads the part database.
 * 3. [crate::parser] and [crate::lookup]: stream the placement file through
 *    the parser and the package lookup.
 *
 * The run is all-or-nothing. Any error aborts it and no components are
 * returned.
 */

use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;

use tracing::{debug, info, warn};

use crate::config::{Config, SCRATCH_PREFIX};
use crate::error::{Error, Result};
use crate::layout::ArtifactProducer;
use crate::lookup::look_up_packages;
use crate::parser::{Component, read_components};
use crate::partdb::PartDatabase;

/// Runs the whole pipeline and returns the components with their packages.
///
/// The scratch directory is removed before this function returns, whether or
/// not the run succeeded.
pub fn run(config: &Config, producer: &dyn ArtifactProducer) -> Result<Vec<Component>> {
    let scratch = tempfile::Builder::new()
        .prefix(SCRATCH_PREFIX)
        .tempdir()
        .map_err(Error::Scratch)?;
    debug!(path = %scratch.path().display(), "created scratch directory");

    let gerber_dir = match &config.gerber_dir {
        Some(dir) => dir.clone(),
        None => scratch.path().join("gerber"),
    };

    let artifacts =
        producer.produce_manufacturing_artifacts(&config.board, scratch.path(), &gerber_dir)?;
    info!(gerber_dir = %artifacts.gerber_dir.display(), "exported manufacturing artifacts");

    let part_db = PartDatabase::from_path(&config.part_db)?;

    let placement_file = File::open(&artifacts.placement_file)
        .map_err(|e| Error::io(&artifacts.placement_file, e))?;
    let components = read_components(BufReader::new(placement_file));
    let components: Vec<Component> = look_up_packages(components, &part_db)
        .collect::<Result<_>>()
        .map_err(|e| e.at_path(&artifacts.placement_file))?;

    warn_duplicate_refdes(&components);
    info!(components = components.len(), "looked up packages");

    Ok(components)
}

fn warn_duplicate_refdes(components: &[Component]) {
    let mut seen = HashSet::new();
    for component in components {
        if !seen.insert(component.refdes.as_str()) {
            warn!(refdes = %component.refdes, "duplicate reference designator");
        }
    }
}
