//! 7-hexagon neighborhood patterns and their coupling tables.
//!
//! A pattern packs one ⬢ cell and its six neighbors, each 0 or 1, into
//! seven bits:
//!
//! ```text
//!   0 1
//!  5 6 2
//!   4 3
//! ```
//!
//! Bits 0-5 are the ring in [`HexDir`] order and bit 6 is the center, so
//! the possible values are exactly [0, 127]. Two patterns whose centers sit
//! within two steps of each other overlap in one to four physical hexagons;
//! the coupling tables below record, for every (pattern, direction) pair,
//! which of the 128 candidate neighbors agree on all shared hexagons.

use std::fmt;

use crate::direction::HexDir;
use crate::error::{Error, Result};

/// Number of distinct patterns.
pub const CODE_COUNT: usize = 128;

/// Mask with one bit per pattern, all set.
pub const ALL_CODES: u128 = u128::MAX;

/// Coupling masks for every (pattern, direction) pair, one bit per
/// candidate neighbor pattern.
struct CouplingTables {
    /// Neighbor one step away: four shared hexagons, 8 candidates survive.
    direct1: [[u128; 6]; CODE_COUNT],
    /// Neighbor two straight steps away: one shared hexagon, 64 survive.
    direct2: [[u128; 6]; CODE_COUNT],
    /// Neighbor a knight's move away (one step in `dir`, one in
    /// `dir.next()`): two shared hexagons, 32 survive.
    knight: [[u128; 6]; CODE_COUNT],
}

/// Returns bit `index` of `value` as 0 or 1.
const fn bit(value: usize, index: usize) -> usize {
    value >> index & 1
}

/// Builds every coupling mask at compile time.
///
/// Walking one step in ring direction `i` superimposes the two
/// neighborhoods so that ring positions shift by three: the candidate's
/// hexagon `(i+4)%6` lands on this pattern's `(i+5)%6`, its `(i+3)%6` on
/// the center, its center on `i`, and its `(i+2)%6` on `(i+1)%6`. The
/// distance-2 relations pin the analogous one and two shared hexagons.
const fn build_coupling_tables() -> CouplingTables {
    let mut direct1 = [[0u128; 6]; CODE_COUNT];
    let mut direct2 = [[0u128; 6]; CODE_COUNT];
    let mut knight = [[0u128; 6]; CODE_COUNT];

    let mut code = 0;
    while code < CODE_COUNT {
        let mut i = 0;
        while i < 6 {
            let mut hex = 0;
            while hex < CODE_COUNT {
                if bit(hex, (i + 4) % 6) == bit(code, (i + 5) % 6)
                    && bit(hex, (i + 3) % 6) == bit(code, 6)
                    && bit(hex, 6) == bit(code, i)
                    && bit(hex, (i + 2) % 6) == bit(code, (i + 1) % 6)
                {
                    direct1[code][i] |= 1u128 << hex;
                }
                if bit(hex, (i + 3) % 6) == bit(code, i) {
                    direct2[code][i] |= 1u128 << hex;
                }
                if bit(hex, (i + 4) % 6) == bit(code, i)
                    && bit(hex, (i + 3) % 6) == bit(code, (i + 1) % 6)
                {
                    knight[code][i] |= 1u128 << hex;
                }
                hex += 1;
            }
            i += 1;
        }
        code += 1;
    }

    CouplingTables {
        direct1,
        direct2,
        knight,
    }
}

static COUPLING: CouplingTables = build_coupling_tables();

/// One of the 128 possible 7-hexagon neighborhoods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PatternCode(u8);

impl PatternCode {
    /// Every pattern in value order.
    pub const ALL: [PatternCode; CODE_COUNT] = {
        let mut all = [PatternCode(0); CODE_COUNT];
        let mut value = 0;
        while value < CODE_COUNT {
            all[value] = PatternCode(value as u8);
            value += 1;
        }
        all
    };

    /// Returns the pattern encoding `value`, or an error outside [0, 127].
    pub fn of(value: i32) -> Result<Self> {
        if !(0..CODE_COUNT as i32).contains(&value) {
            return Err(Error::InvalidCode(value));
        }
        Ok(Self(value as u8))
    }

    /// The encoded value. Bit 7 is never set.
    #[inline(always)]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Bit `index` of the encoded value, as 0 or 1.
    #[inline(always)]
    pub const fn bit(self, index: usize) -> u8 {
        self.0 >> index & 1
    }

    /// This pattern's bit in a 128-bit pattern set.
    #[inline(always)]
    pub const fn mask(self) -> u128 {
        1u128 << self.0
    }

    /// Patterns that agree with this one on all four shared hexagons when
    /// placed one step away in direction `dir`.
    #[inline]
    pub fn coupling_direct1(self, dir: HexDir) -> u128 {
        COUPLING.direct1[self.0 as usize][dir.index()]
    }

    /// Patterns that agree with this one when placed two straight steps
    /// away in direction `dir`.
    #[inline]
    pub fn coupling_direct2(self, dir: HexDir) -> u128 {
        COUPLING.direct2[self.0 as usize][dir.index()]
    }

    /// Patterns that agree with this one when placed one step in `dir`
    /// followed by one step in `dir.next()`.
    #[inline]
    pub fn coupling_knight(self, dir: HexDir) -> u128 {
        COUPLING.knight[self.0 as usize][dir.index()]
    }

    /// The distinct patterns reachable by rotating the ring one position at
    /// a time, center fixed.
    pub fn rotations(self) -> Vec<PatternCode> {
        let mut seen = self.mask();
        let mut ring = self.0 & 0x3f;
        for _ in 1..6 {
            ring = (ring << 1 | ring >> 5) & 0x3f;
            seen |= 1u128 << (self.0 & 0x40 | ring);
        }
        codes_in(seen).collect()
    }
}

impl fmt::Display for PatternCode {
    /// Draws the neighborhood the way it sits on the grid.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "  {} {}\n {} {} {}\n  {} {}",
            self.bit(0),
            self.bit(1),
            self.bit(5),
            self.bit(6),
            self.bit(2),
            self.bit(4),
            self.bit(3)
        )
    }
}

/// Iterates the patterns whose bits are set in `mask`, in value order.
pub fn codes_in(mut mask: u128) -> impl Iterator<Item = PatternCode> {
    std::iter::from_fn(move || {
        if mask == 0 {
            return None;
        }
        let value = mask.trailing_zeros() as u8;
        mask &= mask - 1;
        Some(PatternCode(value))
    })
}
