//! Clockwise rotation of 3×3 rule matrices in 90° steps.

use crate::RuleMatrix;

/// A clockwise rotation in quarter-turn steps.
///
/// Only the four quarter-turn angles exist, so an invalid angle is
/// unrepresentable. Use [`Rotation::from_degrees`] when holding a raw angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// The canonical four-fold sequence used when expanding a rule group.
    pub const CLOCKWISE: [Self; 4] = [Self::Deg0, Self::Deg90, Self::Deg180, Self::Deg270];

    /// Parse a rotation from an angle in degrees.
    pub const fn from_degrees(degrees: u32) -> Option<Self> {
        match degrees {
            0 => Some(Self::Deg0),
            90 => Some(Self::Deg90),
            180 => Some(Self::Deg180),
            270 => Some(Self::Deg270),
            _ => None,
        }
    }

    /// The angle in degrees.
    pub const fn degrees(self) -> u32 {
        self.quarter_turns() * 90
    }

    /// Number of 90° clockwise turns this rotation applies.
    const fn quarter_turns(self) -> u32 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 1,
            Self::Deg180 => 2,
            Self::Deg270 => 3,
        }
    }
}

impl RuleMatrix {
    /// Return this matrix rotated clockwise, leaving the input unmodified.
    ///
    /// 180° and 270° are repeated quarter turns. The center cell never moves.
    pub fn rotated(self, rotation: Rotation) -> Self {
        let mut out = self;
        for _ in 0..rotation.quarter_turns() {
            out = out.rotated_cw();
        }
        out
    }

    /// One 90° clockwise turn: cell `(r, c)` moves to `(c, 2 - r)`.
    fn rotated_cw(self) -> Self {
        let mut cells = self.0;
        for (r, row) in self.0.iter().enumerate() {
            for (c, &cell) in row.iter().enumerate() {
                cells[c][2 - r] = cell;
            }
        }
        Self(cells)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
