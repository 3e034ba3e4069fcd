// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/lookup.rs - Package lookup for parsed placement records.
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
 * # `lookup` Module
 *
 * Joins placement records with the part database.
 *
 * ## Usage Example
 *
 * ```no_run
 * use std::fs::File;
 * use std::io::BufReader;
 * use std::path::Path;
 *
 * use pdgen::lookup::look_up_packages;
 * use pdgen::parser::read_components;
 * use pdgen::partdb::PartDatabase;
 *
 * fn main() -> Result<(), Box<dyn std::error::Error>> {
 *     let part_db = PartDatabase::from_path(Path::new("parts.csv"))?;
 *     let components = read_components(BufReader::new(File::open("components.xy")?));
 *
 *     for component in look_up_packages(components, &part_db) {
 *         let component = component?;
 *         println!("{} -> {:?}", component.refdes, component.package);
 *     }
 *
 *     Ok(())
 * }
 * ```
 */

use crate::error::{Error, Result};
use crate::parser::Component;
use crate::partdb::PartDatabase;

/// Iterator returned by [look_up_packages].
pub struct LookUpPackages<'a, I> {
    components: I,
    part_db: &'a PartDatabase,
}

/// Fills in the package of every component from `part_db`.
///
/// Order is preserved. Errors from `components` pass through unchanged, and a
/// part code missing from the database yields [Error::PartNotFound].
pub fn look_up_packages<I>(components: I, part_db: &PartDatabase) -> LookUpPackages<'_, I::IntoIter>
where
    I: IntoIterator<Item = Result<Component>>,
{
    LookUpPackages {
        components: components.into_iter(),
        part_db,
    }
}

impl<I> Iterator for LookUpPackages<'_, I>
where
    I: Iterator<Item = Result<Component>>,
{
    type Item = Result<Component>;

    fn next(&mut self) -> Option<Self::Item> {
        let component = match self.components.next()? {
            Ok(component) => component,
            Err(e) => return Some(Err(e)),
        };

        Some(match self.part_db.get(&component.part_code) {
            Some(package) => Ok(component.with_package(package)),
            None => Err(Error::PartNotFound {
                refdes: component.refdes,
                part_code: component.part_code,
            }),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.components.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn component(refdes: &str, part_code: &str) -> Component {
        Component {
            refdes: refdes.to_string(),
            part_code: part_code.to_string(),
            x: Decimal::new(12700, 3),
            y: Decimal::new(5080, 3),
            rotation: 90,
            layer: "top".to_string(),
            package: None,
        }
    }

    fn part_db() -> PartDatabase {
        [
            ("sr-res-10k", "R_0805"),
            ("sr-cap-1u", "C_0805"),
            ("sr-led-red", "LED_0603"),
        ]
        .into_iter()
        .map(|(code, package)| (code.to_string(), package.to_string()))
        .collect()
    }

    #[test]
    fn test_look_up_packages() {
        let db = part_db();
        let input = vec![Ok(component("R1", "sr-res-10k"))];
        let enriched: Vec<Component> = look_up_packages(input, &db)
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(enriched.len(), 1);
        assert_eq!(enriched[0].package.as_deref(), Some("R_0805"));
        assert_eq!(enriched[0].x, Decimal::new(12700, 3));
        assert_eq!(enriched[0].rotation, 90);
    }

    #[test]
    fn test_order_preserved() {
        let db = part_db();
        let refdes = ["D3", "R1", "C2", "R9", "C1"];
        let codes = ["sr-led-red", "sr-res-10k", "sr-cap-1u", "sr-res-10k", "sr-cap-1u"];
        let input: Vec<_> = refdes
            .iter()
            .zip(codes)
            .map(|(r, c)| Ok(component(r, c)))
            .collect();

        let enriched: Vec<Component> = look_up_packages(input, &db)
            .collect::<Result<_>>()
            .unwrap();
        let order: Vec<&str> = enriched.iter().map(|c| c.refdes.as_str()).collect();
        assert_eq!(order, refdes);
    }

    #[test]
    fn test_missing_part_is_an_error() {
        let db = part_db();
        let input = vec![
            Ok(component("R1", "sr-res-10k")),
            Ok(component("R2", "sr-res-99k")),
        ];
        let mut enriched = look_up_packages(input, &db);

        assert!(enriched.next().unwrap().is_ok());
        let err = enriched.next().unwrap().unwrap_err();
        match &err {
            Error::PartNotFound { refdes, part_code } => {
                assert_eq!(refdes, "R2");
                assert_eq!(part_code, "sr-res-99k");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        let message = err.to_string();
        assert!(message.contains("R2"));
        assert!(message.contains("sr-res-99k"));
    }

    #[test]
    fn test_collect_aborts_on_missing_part() {
        let db = part_db();
        let input = vec![
            Ok(component("R1", "sr-res-99k")),
            Ok(component("R2", "sr-res-10k")),
        ];
        let result: Result<Vec<Component>> = look_up_packages(input, &db).collect();
        assert!(matches!(result, Err(Error::PartNotFound { .. })));
    }

    #[test]
    fn test_errors_pass_through() {
        let db = part_db();
        let input = vec![Err(Error::FieldCount {
            kind: "placement",
            record: 1,
            expected: 7,
            found: 6,
        })];
        let result: Result<Vec<Component>> = look_up_packages(input, &db).collect();
        assert!(matches!(result, Err(Error::FieldCount { found: 6, .. })));
    }
}
