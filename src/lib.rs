//! Exhaustive 7-hexagon pattern coverings of a toroidal grid.
//!
//! A 7-hexagon neighborhood on a hexagonal grid (a center ⬢ and its six
//! neighbors, each 0 or 1) has 128 possible configurations. This crate
//! searches for tilings of a 128-cell toroidal hexagonal grid where every
//! cell is assigned one such neighborhood, overlapping neighborhoods agree
//! on the hexagons they share, and each configuration appears exactly
//! once: a De Bruijn-like covering on the hex lattice.
//!
//! The pieces, leaf first:
//! - [`HexDir`] and [`HexCoord`]: the lattice geometry.
//! - [`PatternCode`]: the neighborhood encoding, plus precomputed coupling
//!   masks for every (pattern, direction) pair at distances one and two.
//! - [`Torus`]: the wrapping grid; derives the legal candidates for any
//!   empty cell by intersecting its neighbors' coupling masks.
//! - [`Search`]: randomized depth-first backtracking over a fixed visiting
//!   order, with strict place/undo discipline.
//! - [`text`]: the flat token format, plus read-only views of a torus.

pub mod coord;
pub mod direction;
pub mod error;
pub mod pattern;
pub mod search;
pub mod text;
pub mod torus;

pub use coord::HexCoord;
pub use direction::HexDir;
pub use error::{Error, Result};
pub use pattern::{codes_in, PatternCode, ALL_CODES, CODE_COUNT};
pub use search::{Outcome, Search};
pub use torus::{Torus, UNSET};
