// Tile grid: cell codes, their classification and the text map loader.
// The ray caster only talks to `GridSource`; `TileMap` is the stock
// implementation.

use glam::Vec2;
use log::info;

/// Side length of one cell in world units (also the unprojected wall height).
pub const TILE_SIZE: f32 = 64.0;

/// What a ray (or the player) finds in a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    /// Code `0`: open floor.
    Empty,
    /// Codes `1` and `2`: full-height wall, the code picks the colour.
    Wall(u8),
    /// Code `3`: half-height block with its own shading.
    Sprite,
    /// Any other code. Rays pass through, the player does not.
    Reserved(i32),
}

impl Cell {
    /// Single place where raw cell codes are interpreted.
    #[inline]
    pub fn classify(code: i32) -> Self {
        match code {
            0 => Cell::Empty,
            1 | 2 => Cell::Wall(code as u8),
            3 => Cell::Sprite,
            other => Cell::Reserved(other),
        }
    }

    /// Stops a ray.
    #[inline]
    pub fn is_solid(self) -> bool {
        matches!(self, Cell::Wall(_) | Cell::Sprite)
    }

    /// The player may stand here.
    #[inline]
    pub fn is_walkable(self) -> bool {
        self == Cell::Empty
    }
}

/// Read-only access to a rectangular grid of cell codes.
///
/// `cell_at` is only ever called with `x < width()` and `y < height()`.
pub trait GridSource {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn cell_at(&self, x: usize, y: usize) -> i32;

    /// Classified cell, or `None` when `(x, y)` is off the grid.
    #[inline]
    fn cell(&self, x: i64, y: i64) -> Option<Cell> {
        if x < 0 || y < 0 || x >= self.width() as i64 || y >= self.height() as i64 {
            return None;
        }
        Some(Cell::classify(self.cell_at(x as usize, y as usize)))
    }

    /// Cell under a world-space point.
    #[inline]
    fn cell_at_world(&self, p: Vec2) -> Option<Cell> {
        if !(p.x >= 0.0 && p.y >= 0.0) {
            return None;
        }
        self.cell(
            (p.x / TILE_SIZE).floor() as i64,
            (p.y / TILE_SIZE).floor() as i64,
        )
    }
}

/// Things that can go wrong while building a [`TileMap`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GridError {
    #[error("map has no rows")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("row {row}, column {col}: `{token}` is not a cell code")]
    BadCell {
        row: usize,
        col: usize,
        token: String,
    },

    #[error("map has no empty cell to spawn in")]
    NoOpenCell,
}

/// Row-major grid of raw cell codes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileMap {
    width: usize,
    height: usize,
    cells: Vec<i32>,
}

/// Built-in level: a walled room with a few pillars and one sprite block.
const DEMO_MAP: &str = "\
# 0 empty, 1 grey wall, 2 red wall, 3 sprite block
111111111111
100000000001
102200003001
100000000001
100001100001
100001100001
100000000201
100300000001
100000220001
111111111111
";

impl TileMap {
    /// Build from equally long rows.
    pub fn from_rows(rows: Vec<Vec<i32>>) -> Result<Self, GridError> {
        let width = rows.first().map(Vec::len).ok_or(GridError::Empty)?;
        if width == 0 {
            return Err(GridError::Empty);
        }
        let height = rows.len();
        let mut cells = Vec::with_capacity(width * height);
        for (row, r) in rows.into_iter().enumerate() {
            if r.len() != width {
                return Err(GridError::Ragged {
                    row,
                    expected: width,
                    found: r.len(),
                });
            }
            cells.extend(r);
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Parse the text map format.
    ///
    /// * one row per line, blank lines and `#` comments are skipped
    /// * a row is either packed single digits (`10021`) or integers
    ///   separated by whitespace and/or commas (`1, 0, 12`)
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let mut rows = Vec::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let row = rows.len();
            let separated = line.contains(|c: char| c.is_whitespace() || c == ',');
            let parsed: Result<Vec<i32>, GridError> = if separated {
                line.split(|c: char| c.is_whitespace() || c == ',')
                    .filter(|t| !t.is_empty())
                    .enumerate()
                    .map(|(col, tok)| parse_token(row, col, tok))
                    .collect()
            } else {
                line.char_indices()
                    .enumerate()
                    .map(|(col, (i, ch))| parse_token(row, col, &line[i..i + ch.len_utf8()]))
                    .collect()
            };
            rows.push(parsed?);
        }
        let map = Self::from_rows(rows)?;
        info!("loaded {}x{} tile map", map.width, map.height);
        Ok(map)
    }

    pub fn demo() -> Self {
        // the embedded map is known-good
        Self::parse(DEMO_MAP).unwrap_or_else(|_| Self::enclosed(3, 3))
    }

    /// `w × h` room of open floor ringed by code-`1` walls.
    pub fn enclosed(w: usize, h: usize) -> Self {
        let (w, h) = (w.max(1), h.max(1));
        let cells = (0..h)
            .flat_map(|y| (0..w).map(move |x| (x, y)))
            .map(|(x, y)| {
                if x == 0 || y == 0 || x == w - 1 || y == h - 1 {
                    1
                } else {
                    0
                }
            })
            .collect();
        Self {
            width: w,
            height: h,
            cells,
        }
    }

    /// Overwrite one cell; out-of-range coordinates are ignored.
    pub fn set(&mut self, x: usize, y: usize, code: i32) {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = code;
        }
    }

    /// World-space centre of the first empty cell in row-major order.
    pub fn spawn_point(&self) -> Result<Vec2, GridError> {
        let idx = self
            .cells
            .iter()
            .position(|&c| Cell::classify(c) == Cell::Empty)
            .ok_or(GridError::NoOpenCell)?;
        let (x, y) = (idx % self.width, idx / self.width);
        Ok(Vec2::new(
            (x as f32 + 0.5) * TILE_SIZE,
            (y as f32 + 0.5) * TILE_SIZE,
        ))
    }
}

fn parse_token(row: usize, col: usize, tok: &str) -> Result<i32, GridError> {
    tok.parse().map_err(|_| GridError::BadCell {
        row,
        col,
        token: tok.to_string(),
    })
}

impl GridSource for TileMap {
    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn cell_at(&self, x: usize, y: usize) -> i32 {
        self.cells[y * self.width + x]
    }
}

/*======================================================================*/
/*                               Tests                                  */
/*======================================================================*/
