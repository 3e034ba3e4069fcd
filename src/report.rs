// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/report.rs - Pick-and-place report output.
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

use std::io::Write;

use clap::ValueEnum;

use crate::error::Result;
use crate::parser::Component;

const HEADER: [&str; 7] = ["refdes", "part_code", "package", "x", "y", "rotation", "layer"];

/// Output format of the placement report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One tab-separated line per component.
    #[default]
    Text,
    /// CSV with a header row.
    Csv,
}

/// Writes `components` to `out` in the given format.
///
/// Fields containing the delimiter, a quote, or a line break are quoted in
/// both formats.
pub fn write_report<W: Write>(out: W, components: &[Component], format: Format) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(match format {
            Format::Text => b'\t',
            Format::Csv => b',',
        })
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(out);

    if format == Format::Csv {
        writer.write_record(HEADER)?;
    }

    for component in components {
        let x = component.x.to_string();
        let y = component.y.to_string();
        let rotation = component.rotation.to_string();
        writer.write_record([
            component.refdes.as_str(),
            component.part_code.as_str(),
            component.package.as_deref().unwrap_or(""),
            x.as_str(),
            y.as_str(),
            rotation.as_str(),
            component.layer.as_str(),
        ])?;
    }

    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}
