//! Data types for autotile rules.
//!
//! An [`AutotileRule`] pairs a [`RuleMatrix`] with the [`TilesetPosition`] of
//! the sprite to draw when the pattern matches.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ─── CellRule ────────────────────────────────────────────────────────────────

/// Match requirement for a single cell of a [`RuleMatrix`].
///
/// Serialized as the small integer codes used by form definition files
/// (0 = empty, 1 = autotile, 2 = any, 3 = same type). Codes outside that
/// range fail deserialization with [`InvalidCellCode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum CellRule {
    /// No tile from the same layer.
    Empty,
    /// A tile governed by this same autotile rule system.
    Autotile,
    /// Any tile within the same layer, including no tile.
    Any,
    /// A same-layer tile sharing the evaluated tile's object type.
    SameType,
}

/// A cell code outside the four defined values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid cell rule code {0}, expected 0-3")]
pub struct InvalidCellCode(pub u8);

impl TryFrom<u8> for CellRule {
    type Error = InvalidCellCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Empty),
            1 => Ok(Self::Autotile),
            2 => Ok(Self::Any),
            3 => Ok(Self::SameType),
            other => Err(InvalidCellCode(other)),
        }
    }
}

impl From<CellRule> for u8 {
    fn from(cell: CellRule) -> Self {
        match cell {
            CellRule::Empty => 0,
            CellRule::Autotile => 1,
            CellRule::Any => 2,
            CellRule::SameType => 3,
        }
    }
}

// ─── RuleMatrix ──────────────────────────────────────────────────────────────

/// 3×3 neighbor-match pattern, row-major.
///
/// The center cell (`[1][1]`) describes the evaluated tile itself; the
/// surrounding eight cells describe its 8-connected neighbors. Immutable once
/// constructed — rotation produces a new matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleMatrix(pub [[CellRule; 3]; 3]);

impl RuleMatrix {
    /// Create a matrix from row-major cells.
    pub const fn new(cells: [[CellRule; 3]; 3]) -> Self {
        Self(cells)
    }

    /// A matrix with every cell set to `cell`.
    pub const fn filled(cell: CellRule) -> Self {
        Self([[cell; 3]; 3])
    }

    /// The center cell, i.e. the requirement on the evaluated tile itself.
    pub const fn center(self) -> CellRule {
        self.0[1][1]
    }
}

// ─── TilesetPosition ─────────────────────────────────────────────────────────

/// Position of a sprite within a tileset image, in tile units.
///
/// Serialized as a two-element `[x, y]` array, the encoding rule definition
/// files use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(u32, u32)", into = "(u32, u32)")]
pub struct TilesetPosition {
    pub x: u32,
    pub y: u32,
}

impl TilesetPosition {
    /// Create a position from tile-unit coordinates.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl From<(u32, u32)> for TilesetPosition {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

impl From<TilesetPosition> for (u32, u32) {
    fn from(position: TilesetPosition) -> Self {
        (position.x, position.y)
    }
}

// ─── AutotileRule ────────────────────────────────────────────────────────────

/// A single autotile rule: when a tile's neighborhood matches `matrix`, the
/// tile is drawn with the sprite at `display`.
///
/// Rules are created at configuration time and read-only afterwards. The
/// rule-matching engine that evaluates them against live neighbors lives with
/// the consumer, not in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutotileRule {
    pub matrix: RuleMatrix,
    pub display: TilesetPosition,
}

impl AutotileRule {
    /// Pair a rule matrix with a display position.
    pub const fn new(matrix: RuleMatrix, display: TilesetPosition) -> Self {
        Self { matrix, display }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
