// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/parser.rs - Parser for `pcb` pick-and-place (xy) exports.
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
 * # `parser` Module
 *
 * This module parses the placement (xy) file written by `pcb -x bom` into
 * [Component] records.
 *
 * ## Usage Example
 *
 * ```no_run
 * use std::fs::File;
 * use std::io::BufReader;
 *
 * use pdgen::parser::read_components;
 *
 * fn main() -> Result<(), Box<dyn std::error::Error>> {
 *     let file = File::open("components.xy")?;
 *
 *     for component in read_components(BufReader::new(file)) {
 *         let component = component?;
 *         println!("{}: {} at ({}, {})", component.refdes, component.part_code, component.x, component.y);
 *     }
 *
 *     Ok(())
 * }
 * ```
 */

use std::io::BufRead;

use rust_decimal::Decimal;

use crate::error::{Error, Result};
use crate::filter::StrippedReader;

/// Part code marking a position that is left unpopulated.
pub const SENTINEL_PART_CODE: &str = "sr-nothing";

const PLACEMENT_FIELDS: usize = 7;

/// Represents a component placed on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    /// The reference designator (e.g., "R1") of the component.
    pub refdes: String,
    /// The key of this component's part in the part database.
    pub part_code: String,
    /// The X-coordinate of the component's origin.
    pub x: Decimal,
    /// The Y-coordinate of the component's origin.
    pub y: Decimal,
    /// The rotation of the component in degrees.
    pub rotation: i32,
    /// The board side the component is mounted on.
    pub layer: String,
    /// The package name, filled in from the part database by
    /// [crate::lookup::look_up_packages].
    pub package: Option<String>,
}

impl Component {
    /// Returns this component with its package set.
    pub fn with_package(self, package: impl Into<String>) -> Self {
        Self {
            package: Some(package.into()),
            ..self
        }
    }
}

/// Lazily parses placement records from a filtered CSV stream.
///
/// Rows using [SENTINEL_PART_CODE] are skipped. The first malformed row
/// yields an error.
pub struct Components<B> {
    records: csv::StringRecordsIntoIter<StrippedReader<B>>,
    record: u64,
}

/// Parses the placement records in `input`.
///
/// Blank lines and `#` comments are ignored.
pub fn read_components<B: BufRead>(input: B) -> Components<B> {
    let records = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(StrippedReader::new(input))
        .into_records();

    Components { records, record: 0 }
}

impl<B: BufRead> Iterator for Components<B> {
    type Item = Result<Component>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let record = match self.records.next()? {
                Ok(record) => record,
                Err(e) => return Some(Err(e.into())),
            };
            self.record += 1;

            if record.len() != PLACEMENT_FIELDS {
                return Some(Err(Error::FieldCount {
                    kind: "placement",
                    record: self.record,
                    expected: PLACEMENT_FIELDS,
                    found: record.len(),
                }));
            }

            // Field 1 is the free-text description, which nothing downstream uses.
            if &record[2] == SENTINEL_PART_CODE {
                continue;
            }

            return Some(parse_component(&record, self.record));
        }
    }
}

fn parse_component(record: &csv::StringRecord, index: u64) -> Result<Component> {
    Ok(Component {
        refdes: record[0].to_string(),
        part_code: record[2].to_string(),
        x: parse_decimal(&record[3], "x", index)?,
        y: parse_decimal(&record[4], "y", index)?,
        rotation: record[5]
            .trim()
            .parse::<i32>()
            .map_err(|source| Error::InvalidRotation {
                record: index,
                value: record[5].to_string(),
                source,
            })?,
        layer: record[6].to_string(),
        package: None,
    })
}

// Coordinates that do not fit a Decimal exactly are rejected, never rounded.
fn parse_decimal(s: &str, field: &'static str, index: u64) -> Result<Decimal> {
    let s = s.trim();
    let parsed = match s.find(['e', 'E']) {
        Some(pos) => Decimal::from_str_exact(&s[..pos]).and_then(|_| Decimal::from_scientific(s)),
        None => Decimal::from_str_exact(s),
    };
    parsed.map_err(|source| Error::InvalidCoordinate {
        record: index,
        field,
        value: s.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn parse(text: &str) -> Result<Vec<Component>> {
        read_components(text.as_bytes()).collect()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_read_components() {
        let text = "# refdes,description,part_code,x,y,rotation,layer\n\
                    R1,10k resistor,sr-res-10k,12.700,5.080,90,top\n\
                    U7,\"MCU, 48 pin\",sr-mcu-f0,-3.25,100,270,bottom\n";
        let components = parse(text).unwrap();

        assert_eq!(
            components,
            [
                Component {
                    refdes: "R1".to_string(),
                    part_code: "sr-res-10k".to_string(),
                    x: dec("12.700"),
                    y: dec("5.080"),
                    rotation: 90,
                    layer: "top".to_string(),
                    package: None,
                },
                Component {
                    refdes: "U7".to_string(),
                    part_code: "sr-mcu-f0".to_string(),
                    x: dec("-3.25"),
                    y: dec("100"),
                    rotation: 270,
                    layer: "bottom".to_string(),
                    package: None,
                },
            ]
        );
    }

    #[test]
    fn test_sentinel_rows_skipped() {
        let text = "R1,10k,sr-res-10k,1,2,0,top\n\
                    C1,unpopulated,sr-nothing,3,4,0,top\n\
                    R2,10k,sr-res-10k,5,6,180,top\n";
        let refdes: Vec<String> = parse(text).unwrap().into_iter().map(|c| c.refdes).collect();
        assert_eq!(refdes, ["R1", "R2"]);
    }

    #[test]
    fn test_coordinates_are_exact() {
        let components = parse("R1,,sr-res-10k,12.700,0.1,0,top\n").unwrap();
        let x = components[0].x;
        assert_eq!(x.to_string(), "12.700");
        assert_eq!(x + dec("0.001"), dec("12.701"));
        assert_eq!((x + dec("0.001")).to_string(), "12.701");
        assert_eq!(components[0].y + dec("0.2"), dec("0.3"));
    }

    #[test]
    fn test_numeric_fields_tolerate_whitespace() {
        let components = parse("R1,,sr-res-10k, 1.5 , 2.5, -90 ,top\n").unwrap();
        assert_eq!(components[0].x, dec("1.5"));
        assert_eq!(components[0].y, dec("2.5"));
        assert_eq!(components[0].rotation, -90);
    }

    #[test]
    fn test_scientific_coordinates() {
        let components = parse("R1,,sr-res-10k,1.27e1,0,0,top\n").unwrap();
        assert_eq!(components[0].x, dec("12.7"));
    }

    #[test]
    fn test_wrong_field_count() {
        let err = parse("R1,10k,sr-res-10k,1,2,90\n").unwrap_err();
        assert!(matches!(
            err,
            Error::FieldCount {
                record: 1,
                expected: 7,
                found: 6,
                ..
            }
        ));
    }

    #[test]
    fn test_too_many_fields() {
        let err = parse("R1,10k,sr-res-10k,1,2,90,top,extra\n").unwrap_err();
        assert!(matches!(
            err,
            Error::FieldCount {
                record: 1,
                expected: 7,
                found: 8,
                ..
            }
        ));
    }

    #[test]
    fn test_over_precise_coordinate_rejected() {
        let err = parse("R1,,sr-res-10k,1.00000000000000000000000000000001,0,0,top\n")
            .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidCoordinate {
                record: 1,
                field: "x",
                ..
            }
        ));

        let err = parse("R1,,sr-res-10k,0,1.00000000000000000000000000000001e1,0,top\n")
            .unwrap_err();
        assert!(matches!(err, Error::InvalidCoordinate { field: "y", .. }));
    }

    #[test]
    fn test_short_sentinel_row_is_malformed() {
        let err = parse("C1,unpopulated,sr-nothing\n").unwrap_err();
        assert!(matches!(err, Error::FieldCount { found: 3, .. }));
    }

    #[test]
    fn test_invalid_coordinate() {
        let err = parse("R1,10k,sr-res-10k,1,2,0,top\nR2,10k,sr-res-10k,abc,2,0,top\n")
            .unwrap_err();
        match err {
            Error::InvalidCoordinate {
                record,
                field,
                value,
                ..
            } => {
                assert_eq!(record, 2);
                assert_eq!(field, "x");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_rotation() {
        let err = parse("R1,10k,sr-res-10k,1,2,90.5,top\n").unwrap_err();
        assert!(matches!(err, Error::InvalidRotation { record: 1, .. }));
    }

    #[test]
    fn test_with_package() {
        let component = parse("R1,10k,sr-res-10k,1,2,0,top\n").unwrap().remove(0);
        let original = component.clone();
        let enriched = component.with_package("R_0805");

        assert_eq!(enriched.package.as_deref(), Some("R_0805"));
        assert_eq!(
            Component {
                package: None,
                ..enriched
            },
            original
        );
    }
}
