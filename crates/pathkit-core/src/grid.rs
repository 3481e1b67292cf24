//! Character grids as searchable graphs
//!
//! A grid is read from text using the legend in [`GridConfig`]. Walls block
//! movement, digits `1`-`9` are open cells whose entry cost is the digit,
//! and any other character is an open cell costing 1.

use std::fmt;

use serde::Serialize;

use crate::config::GridConfig;
use crate::error::{PathkitError, Result};
use crate::search::{Cost, Graph};

/// Cell coordinate, row-major from the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const DIAGONAL: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Entry cost per cell, `None` for walls
    cells: Vec<Option<Cost>>,
    start: Pos,
    goal: Option<Pos>,
    diagonal: bool,
}

impl Grid {
    /// Parse a rectangular grid. Trailing blank lines are ignored.
    pub fn parse(text: &str, config: &GridConfig) -> Result<Self> {
        let mut rows: Vec<&str> = text.lines().map(|line| line.trim_end_matches('\r')).collect();
        while rows.last().is_some_and(|row| row.is_empty()) {
            rows.pop();
        }
        let Some(first_row) = rows.first() else {
            return Err(PathkitError::invalid_grid(1, "grid is empty"));
        };

        let width = first_row.chars().count();
        let mut cells = Vec::with_capacity(width * rows.len());
        let mut start = None;
        let mut goal = None;

        for (row, line) in rows.iter().enumerate() {
            let line_no = row + 1;
            let found = line.chars().count();
            if found != width {
                return Err(PathkitError::invalid_grid(
                    line_no,
                    format!("expected {width} columns, found {found}"),
                ));
            }

            for (col, c) in line.chars().enumerate() {
                let pos = Pos::new(row, col);
                if c == config.wall {
                    cells.push(None);
                    continue;
                }
                if c == config.start {
                    if let Some(previous) = start.replace(pos) {
                        return Err(PathkitError::invalid_grid(
                            line_no,
                            format!("second start cell at {pos}, first at {previous}"),
                        ));
                    }
                } else if c == config.goal {
                    if let Some(previous) = goal.replace(pos) {
                        return Err(PathkitError::invalid_grid(
                            line_no,
                            format!("second goal cell at {pos}, first at {previous}"),
                        ));
                    }
                }

                let cost = match c.to_digit(10) {
                    Some(digit) if digit > 0 => Cost::from(digit),
                    _ => 1,
                };
                cells.push(Some(cost));
            }
        }

        let start = start.ok_or_else(|| {
            PathkitError::invalid_grid(rows.len(), format!("no start cell '{}'", config.start))
        })?;

        tracing::debug!(width, height = rows.len(), has_goal = goal.is_some(), "parsed grid");
        Ok(Self {
            width,
            height: rows.len(),
            cells,
            start,
            goal,
            diagonal: config.diagonal,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn start(&self) -> Pos {
        self.start
    }

    pub fn goal(&self) -> Option<Pos> {
        self.goal
    }

    pub fn is_diagonal(&self) -> bool {
        self.diagonal
    }

    pub fn with_diagonal(mut self, diagonal: bool) -> Self {
        self.diagonal = diagonal;
        self
    }

    /// Entry cost of `pos`, `None` for walls and positions off the grid
    pub fn cost_at(&self, pos: Pos) -> Option<Cost> {
        if pos.row >= self.height || pos.col >= self.width {
            return None;
        }
        self.cells[pos.row * self.width + pos.col]
    }

    pub fn is_open(&self, pos: Pos) -> bool {
        self.cost_at(pos).is_some()
    }

    fn step(&self, pos: Pos, (dr, dc): (isize, isize)) -> Option<Pos> {
        let row = pos.row.checked_add_signed(dr)?;
        let col = pos.col.checked_add_signed(dc)?;
        let next = Pos::new(row, col);
        self.is_open(next).then_some(next)
    }
}

impl Graph for Grid {
    type Node = Pos;

    fn neighbors(&self, node: &Pos) -> Vec<Pos> {
        let diagonals: &[(isize, isize)] = if self.diagonal { &DIAGONAL } else { &[] };
        ORTHOGONAL
            .iter()
            .chain(diagonals)
            .filter_map(|&delta| self.step(*node, delta))
            .collect()
    }

    fn cost(&self, _from: &Pos, to: &Pos) -> Result<Cost> {
        self.cost_at(*to)
            .ok_or_else(|| PathkitError::invalid_value("move", format!("{to} is not an open cell")))
    }

    fn cost_estimate(&self, from: &Pos, to: &Pos) -> Result<Cost> {
        let dr = from.row.abs_diff(to.row) as Cost;
        let dc = from.col.abs_diff(to.col) as Cost;
        Ok(if self.diagonal { dr.max(dc) } else { dr + dc })
    }
}
