// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/partdb.rs - Part database parser.
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
 * # `partdb` Module
 *
 * The part database is a CSV export with one row per orderable part:
 *
 * ```text
 * part_code,manufacturer,part_number,description,order_number,supplier,quantity_per_reel,package
 * ```
 *
 * Only the part code and the package are kept.
 */

use std::collections::HashMap;
use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::filter::StrippedReader;
use crate::parser::SENTINEL_PART_CODE;

const PART_DB_FIELDS: usize = 8;

/// Maps part codes to package names.
#[derive(Debug, Default, Clone)]
pub struct PartDatabase {
    packages: HashMap<String, String>,
}

impl PartDatabase {
    /// Reads a part database from `input`.
    ///
    /// Rows using [SENTINEL_PART_CODE] are skipped whatever their width. When
    /// a part code appears more than once, the last row wins.
    pub fn from_reader<B: BufRead>(input: B) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(StrippedReader::new(input));

        let mut packages = HashMap::new();

        for (index, result) in reader.records().enumerate() {
            let record = result?;
            if record.get(0) == Some(SENTINEL_PART_CODE) {
                continue;
            }

            if record.len() != PART_DB_FIELDS {
                return Err(Error::FieldCount {
                    kind: "part database",
                    record: index as u64 + 1,
                    expected: PART_DB_FIELDS,
                    found: record.len(),
                });
            }

            let part_code = &record[0];
            let package = &record[7];
            if let Some(previous) = packages.insert(part_code.to_string(), package.to_string()) {
                debug!(part_code, previous = %previous, package, "duplicate part code, keeping last");
            }
        }

        Ok(Self { packages })
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        let db = Self::from_reader(BufReader::new(file)).map_err(|e| e.at_path(path))?;
        debug!(path = %path.display(), parts = db.len(), "loaded part database");
        Ok(db)
    }

    /// Returns the package for `part_code`, if the database has it.
    pub fn get(&self, part_code: &str) -> Option<&str> {
        self.packages.get(part_code).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl FromIterator<(String, String)> for PartDatabase {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            packages: iter.into_iter().collect(),
        }
    }
}
