// SPDX-FileCopyrightText: 2025-2026 Fearefull <todoreminder@fearefull.com>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::{Color, Colorize};
use unicode_width::UnicodeWidthStr;

pub trait TableColumn<T> {
    fn name(&self) -> Cow<'_, str>;
    fn format<'a>(&self, data: &'a T) -> Cow<'a, str>;

    fn padding_direction(&self) -> PaddingDirection {
        PaddingDirection::Left
    }

    fn get_color(&self, _data: &T) -> Option<Color> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

/// Plain text table with aligned columns.
pub struct Table<'a, T, C: TableColumn<T>> {
    columns: &'a [C],
    data: &'a [T],
    separator: &'a str,
    header: bool,
}

impl<'a, T, C: TableColumn<T>> Table<'a, T, C> {
    pub fn new(columns: &'a [C], data: &'a [T]) -> Self {
        Self {
            columns,
            data,
            separator: " ",
            header: false,
        }
    }

    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    fn widths(&self, cells: &[Vec<Cow<'_, str>>]) -> Vec<usize> {
        let mut widths: Vec<usize> = match self.header {
            true => self.columns.iter().map(|a| a.name().width()).collect(),
            false => vec![0; self.columns.len()],
        };
        for row in cells {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.width());
            }
        }
        widths
    }

    fn write_row<'c>(
        &self,
        f: &mut fmt::Formatter<'_>,
        widths: &[usize],
        cells: impl Iterator<Item = (Cow<'c, str>, Option<Color>)>,
    ) -> fmt::Result {
        let last = self.columns.len().saturating_sub(1);
        for (i, (col, (cell, color))) in self.columns.iter().zip(cells).enumerate() {
            // no trailing spaces after a left-aligned last column
            let cell = match (col.padding_direction(), i == last) {
                (PaddingDirection::Left, true) => cell.into_owned(),
                (direction, _) => pad(&cell, widths[i], direction),
            };
            match color {
                Some(color) => write!(f, "{}", cell.as_str().color(color))?,
                None => write!(f, "{cell}")?,
            }
            if i < last {
                write!(f, "{}", self.separator)?;
            }
        }
        writeln!(f)
    }
}

impl<T, C: TableColumn<T>> fmt::Display for Table<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<Vec<Cow<'_, str>>> = self
            .data
            .iter()
            .map(|row| self.columns.iter().map(|col| col.format(row)).collect())
            .collect();
        let widths = self.widths(&cells);

        if self.header {
            let names = self.columns.iter().map(|a| (a.name(), None));
            self.write_row(f, &widths, names)?;
        }

        for (row, data) in cells.into_iter().zip(self.data) {
            let colored = row
                .into_iter()
                .zip(self.columns)
                .map(|(cell, col)| (cell, col.get_color(data)));
            self.write_row(f, &widths, colored)?;
        }
        Ok(())
    }
}

fn pad(cell: &str, width: usize, direction: PaddingDirection) -> String {
    let fill = " ".repeat(width.saturating_sub(cell.width()));
    match direction {
        PaddingDirection::Left => format!("{cell}{fill}"),
        PaddingDirection::Right => format!("{fill}{cell}"),
    }
}
