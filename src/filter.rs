// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/filter.rs - Comment and blank line filter for exported CSV text.
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
 * # `filter` Module
 *
 * Both the `pcb` placement export and the part database allow `#` comments
 * and blank lines between rows. This module removes them before the text
 * reaches the CSV reader.
 *
 * ## Usage Example
 *
 * ```
 * use std::io::BufRead;
 *
 * use pdgen::filter::strip_comments;
 *
 * let text = "# header\n\n  R1,10k,sr-res-10k,1.0,2.0,0,top\n";
 * let lines: Vec<String> = strip_comments(text.as_bytes().lines())
 *     .collect::<Result<_, _>>()
 *     .unwrap();
 * assert_eq!(lines, ["R1,10k,sr-res-10k,1.0,2.0,0,top"]);
 * ```
 */

use std::io;
use std::io::BufRead;
use std::io::Lines;
use std::io::Read;

/// Iterator adapter that drops blank lines and `#` comment lines.
///
/// Leading whitespace is trimmed from every line; the rest of the line is
/// passed through untouched.
#[derive(Debug)]
pub struct StripComments<I> {
    lines: I,
}

/// Wraps a line iterator in a [StripComments] filter.
pub fn strip_comments<I>(lines: I) -> StripComments<I::IntoIter>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    StripComments {
        lines: lines.into_iter(),
    }
}

impl<I> Iterator for StripComments<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e)),
            };

            let trimmed = line.trim_start();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            if trimmed.len() == line.len() {
                return Some(Ok(line));
            }
            return Some(Ok(trimmed.to_string()));
        }
    }
}

/// A [Read] implementation yielding only the lines that survive
/// [StripComments], each terminated by `\n`.
///
/// This lets a [csv::Reader] stream the filtered text without buffering the
/// whole file.
#[derive(Debug)]
pub struct StrippedReader<B> {
    lines: StripComments<Lines<B>>,
    pending: Vec<u8>,
    pos: usize,
}

impl<B: BufRead> StrippedReader<B> {
    pub fn new(input: B) -> Self {
        Self {
            lines: strip_comments(input.lines()),
            pending: Vec::new(),
            pos: 0,
        }
    }
}

impl<B: BufRead> Read for StrippedReader<B> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        while self.pos >= self.pending.len() {
            let line = match self.lines.next() {
                Some(line) => line?,
                None => return Ok(0),
            };
            self.pending.clear();
            self.pending.extend_from_slice(line.as_bytes());
            self.pending.push(b'\n');
            self.pos = 0;
        }

        let remaining = &self.pending[self.pos..];
        let n = remaining.len().min(buf.len());
        buf[..n].copy_from_slice(&remaining[..n]);
        self.pos += n;
        Ok(n)
    }
}
