use std::mem;

use anyhow::{Context, Result};
use rusqlite::Connection;

use crate::db::fetch_by_group;
use crate::models::{Element, ACTINIDE_GROUP, LANTHANIDE_GROUP};
use crate::quiz::Quiz;
use crate::units::TemperatureUnit;

/// Columns in the main block of the table.
pub(crate) const TABLE_COLUMNS: usize = 18;
/// Seven periods, a spacer row, then the lanthanide and actinide rows.
pub(crate) const TABLE_ROWS: usize = 10;
/// Column where the detached f-block rows start.
const F_BLOCK_FIRST_COLUMN: usize = 2;
const LANTHANIDE_ROW: usize = 8;
const ACTINIDE_ROW: usize = 9;
/// Longest atomic number that can be typed into the jump buffer.
const JUMP_DIGITS: usize = 3;

/// An element placed on the grid.
pub(crate) struct Tile {
    pub(crate) row: usize,
    pub(crate) col: usize,
    pub(crate) element: Element,
}

/// Periodic table grid plus the cursor.
pub(crate) struct TableScreen {
    pub(crate) tiles: Vec<Tile>,
    pub(crate) selected: usize,
    /// Digits typed so far for a jump to an atomic number.
    pub(crate) jump: String,
}

impl TableScreen {
    pub(crate) fn empty() -> Self {
        Self {
            tiles: Vec::new(),
            selected: 0,
            jump: String::new(),
        }
    }

    /// Query every group and lay the results out on the grid.
    pub(crate) fn load(conn: &Connection) -> Result<Self> {
        let mut tiles = Vec::new();

        for group in 1..=TABLE_COLUMNS as i64 {
            let elements = fetch_by_group(conn, group)
                .with_context(|| format!("failed to load group {group}"))?;
            for element in elements {
                let Some(period) = element.period() else {
                    continue;
                };
                tiles.push(Tile {
                    row: period as usize - 1,
                    col: group as usize - 1,
                    element,
                });
            }
        }

        for (group, row) in [(LANTHANIDE_GROUP, LANTHANIDE_ROW), (ACTINIDE_GROUP, ACTINIDE_ROW)] {
            let elements = fetch_by_group(conn, group)
                .with_context(|| format!("failed to load group {group}"))?;
            // Storage order decides the left-to-right order of the row.
            for (offset, element) in elements.into_iter().enumerate() {
                tiles.push(Tile {
                    row,
                    col: F_BLOCK_FIRST_COLUMN + offset,
                    element,
                });
            }
        }

        tiles.sort_by_key(|tile| (tile.row, tile.col));
        Ok(Self {
            tiles,
            selected: 0,
            jump: String::new(),
        })
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub(crate) fn current(&self) -> Option<&Element> {
        self.tiles.get(self.selected).map(|tile| &tile.element)
    }

    pub(crate) fn tile_at(&self, row: usize, col: usize) -> Option<(usize, &Tile)> {
        self.tiles
            .iter()
            .enumerate()
            .find(|(_, tile)| tile.row == row && tile.col == col)
    }

    /// Move to the nearest occupied tile in the given direction. Horizontal
    /// moves stay in the row; vertical moves prefer the same column and then
    /// the closest row.
    pub(crate) fn move_selection(&mut self, d_row: isize, d_col: isize) {
        let Some(current) = self.tiles.get(self.selected) else {
            return;
        };
        let (row, col) = (current.row as isize, current.col as isize);

        let target = self
            .tiles
            .iter()
            .enumerate()
            .filter(|(_, tile)| {
                let (t_row, t_col) = (tile.row as isize, tile.col as isize);
                if d_col != 0 {
                    t_row == row && (t_col - col).signum() == d_col.signum()
                } else {
                    (t_row - row).signum() == d_row.signum()
                }
            })
            .min_by_key(|(_, tile)| {
                let dist_row = (tile.row as isize - row).abs();
                let dist_col = (tile.col as isize - col).abs();
                if d_col != 0 {
                    (dist_col, 0)
                } else {
                    (dist_col, dist_row)
                }
            })
            .map(|(idx, _)| idx);

        if let Some(idx) = target {
            self.selected = idx;
        }
    }

    pub(crate) fn push_jump_digit(&mut self, digit: char) {
        if digit.is_ascii_digit() && self.jump.len() < JUMP_DIGITS {
            self.jump.push(digit);
        }
    }

    /// Consume the jump buffer and move the cursor there. `None` means the
    /// buffer was empty.
    pub(crate) fn take_jump(&mut self) -> Option<Result<i64, i64>> {
        if self.jump.is_empty() {
            return None;
        }
        let buffer = mem::take(&mut self.jump);
        let id = buffer.parse::<i64>().unwrap_or_default();
        Some(if self.select_id(id) { Ok(id) } else { Err(id) })
    }

    /// Put the cursor on a given atomic number, if it is on the grid.
    pub(crate) fn select_id(&mut self, id: i64) -> bool {
        match self.tiles.iter().position(|tile| tile.element.id == id) {
            Some(idx) => {
                self.selected = idx;
                true
            }
            None => false,
        }
    }
}

/// Detail page for one element.
pub(crate) struct DetailScreen {
    pub(crate) element: Element,
    pub(crate) unit: TemperatureUnit,
}

impl DetailScreen {
    pub(crate) fn new(element: Element, unit: TemperatureUnit) -> Self {
        Self { element, unit }
    }

    pub(crate) fn cycle_unit(&mut self) {
        self.unit = self.unit.next();
    }
}

/// One quiz question plus the highlighted option.
pub(crate) struct QuizScreen {
    pub(crate) quiz: Quiz,
    pub(crate) cursor: usize,
}

impl QuizScreen {
    pub(crate) fn new(quiz: Quiz) -> Self {
        Self { quiz, cursor: 0 }
    }

    pub(crate) fn move_cursor(&mut self, offset: isize) {
        let len = self.quiz.choices().len() as isize;
        if len == 0 {
            return;
        }
        let next = (self.cursor as isize + offset).clamp(0, len - 1);
        self.cursor = next as usize;
    }
}

/// Map an option letter (`a`, `b`, ...) to its index.
pub(crate) fn option_index(ch: char) -> Option<usize> {
    let lower = ch.to_ascii_lowercase();
    if lower.is_ascii_lowercase() {
        Some((lower as u8 - b'a') as usize)
    } else {
        None
    }
}

pub(crate) fn option_letter(index: usize) -> char {
    (b'a' + (index % 26) as u8) as char
}
