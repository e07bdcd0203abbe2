//! Library of named patterns that can be stamped onto a universe.
//!
//! Offsets are `(row, col)` relative to the anchor passed to
//! [`Universe::stamp`](crate::Universe::stamp). Every built-in pattern is
//! anchored at the top-left corner of its bounding box.

use life_core::Position;
use std::borrow::Cow;

/// An immutable, named set of live-cell offsets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    name: Cow<'static, str>,
    offsets: Cow<'static, [(i64, i64)]>,
}

impl Pattern {
    /// Create a caller-defined pattern
    pub fn new(name: impl Into<Cow<'static, str>>, offsets: Vec<(i64, i64)>) -> Self {
        Self {
            name: name.into(),
            offsets: Cow::Owned(offsets),
        }
    }

    const fn builtin(name: &'static str, offsets: &'static [(i64, i64)]) -> Self {
        Self {
            name: Cow::Borrowed(name),
            offsets: Cow::Borrowed(offsets),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn offsets(&self) -> &[(i64, i64)] {
        &self.offsets
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Top-left and bottom-right corners (inclusive) of the offsets
    pub fn bounding_box(&self) -> Option<(Position, Position)> {
        let (&(first_row, first_col), rest) = self.offsets.split_first()?;
        let mut min = Position::new(first_row, first_col);
        let mut max = min;
        for &(row, col) in rest {
            min.row = min.row.min(row);
            min.col = min.col.min(col);
            max.row = max.row.max(row);
            max.col = max.col.max(col);
        }
        Some((min, max))
    }
}

const GLIDER: &[(i64, i64)] = &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];

const PULSAR: &[(i64, i64)] = &[
    (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
    (2, 0), (2, 5), (2, 7), (2, 12),
    (3, 0), (3, 5), (3, 7), (3, 12),
    (4, 0), (4, 5), (4, 7), (4, 12),
    (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
    (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
    (8, 0), (8, 5), (8, 7), (8, 12),
    (9, 0), (9, 5), (9, 7), (9, 12),
    (10, 0), (10, 5), (10, 7), (10, 12),
    (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
];

const BLINKER: &[(i64, i64)] = &[(0, 0), (0, 1), (0, 2)];

const TOAD: &[(i64, i64)] = &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)];

const BEACON: &[(i64, i64)] = &[
    (0, 0), (0, 1), (1, 0), (1, 1),
    (2, 2), (2, 3), (3, 2), (3, 3),
];

const BLOCK: &[(i64, i64)] = &[(0, 0), (0, 1), (1, 0), (1, 1)];

const LIGHTWEIGHT_SPACESHIP: &[(i64, i64)] = &[
    (0, 1), (0, 4),
    (1, 0),
    (2, 0), (2, 4),
    (3, 0), (3, 1), (3, 2), (3, 3),
];

const R_PENTOMINO: &[(i64, i64)] = &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)];

/// Five-cell spaceship travelling one cell down and right every 4 generations
pub fn glider() -> Pattern {
    Pattern::builtin("glider", GLIDER)
}

/// 48-cell period-3 oscillator in a 13x13 box
pub fn pulsar() -> Pattern {
    Pattern::builtin("pulsar", PULSAR)
}

/// Horizontal period-2 oscillator
pub fn blinker() -> Pattern {
    Pattern::builtin("blinker", BLINKER)
}

pub fn toad() -> Pattern {
    Pattern::builtin("toad", TOAD)
}

pub fn beacon() -> Pattern {
    Pattern::builtin("beacon", BEACON)
}

/// 2x2 still life
pub fn block() -> Pattern {
    Pattern::builtin("block", BLOCK)
}

/// Spaceship travelling one cell left every 2 generations
pub fn lightweight_spaceship() -> Pattern {
    Pattern::builtin("lightweight-spaceship", LIGHTWEIGHT_SPACESHIP)
}

pub fn r_pentomino() -> Pattern {
    Pattern::builtin("r-pentomino", R_PENTOMINO)
}

/// Every built-in pattern
pub fn all() -> Vec<Pattern> {
    vec![
        glider(),
        pulsar(),
        blinker(),
        toad(),
        beacon(),
        block(),
        lightweight_spaceship(),
        r_pentomino(),
    ]
}

/// Look up a built-in pattern by name, ignoring ASCII case
pub fn by_name(name: &str) -> Option<Pattern> {
    all()
        .into_iter()
        .find(|pattern| pattern.name().eq_ignore_ascii_case(name))
}
