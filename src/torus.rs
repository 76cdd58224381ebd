//! Toroidal hexagonal grid of neighborhood patterns.

use rustc_hash::FxHashMap;

use crate::coord::HexCoord;
use crate::direction::HexDir;
use crate::error::{Error, Result};
use crate::pattern::{PatternCode, ALL_CODES, CODE_COUNT};

/// Raw cell value marking an empty cell.
pub const UNSET: u8 = 0xff;

/// Toroidal surface carrying a `width` × `height` hexagonal grid.
///
/// Each cell holds a pattern value in [0, 127] or [`UNSET`], stored in a
/// flat row-major array (`index = y * width + x`) with odd rows offset half
/// a cell to the right:
///
/// ```text
/// (0,0) (1,0) (2,0) (3,0)
///    (0,1) (1,1) (2,1) (3,1)
/// (0,2) (1,2) (2,2) (3,2)
/// ```
///
/// The height must be even: vertical wraparound would otherwise flip row
/// parity and shear the brick-wall layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Torus {
    width: i32,
    height: i32,
    cells: Vec<u8>,
}

impl Torus {
    /// Creates a fully unset torus.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width < 0 || height < 0 || height % 2 != 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![UNSET; (width * height) as usize],
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of cells.
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    /// Whether `coord` falls outside the stored array.
    pub fn out_of_bounds(&self, coord: HexCoord) -> bool {
        coord.x < 0 || coord.y < 0 || coord.x >= self.width || coord.y >= self.height
    }

    /// Wraps an arbitrary coordinate onto the torus.
    pub fn normalize(&self, coord: HexCoord) -> HexCoord {
        if self.out_of_bounds(coord) {
            HexCoord::new(coord.x.rem_euclid(self.width), coord.y.rem_euclid(self.height))
        } else {
            coord
        }
    }

    /// Flat index of an in-bounds coordinate.
    #[inline(always)]
    pub fn index(&self, coord: HexCoord) -> usize {
        debug_assert!(!self.out_of_bounds(coord));
        (coord.y * self.width + coord.x) as usize
    }

    /// Coordinate of a flat index.
    #[inline(always)]
    pub fn coord(&self, index: usize) -> HexCoord {
        HexCoord::new(index as i32 % self.width, index as i32 / self.width)
    }

    /// Whether the in-bounds cell at `coord` holds a pattern.
    pub fn is_set(&self, coord: HexCoord) -> bool {
        self.cells[self.index(coord)] != UNSET
    }

    /// Pattern at the in-bounds cell `coord`.
    pub fn get(&self, coord: HexCoord) -> Result<PatternCode> {
        let raw = self.cells[self.index(coord)];
        if raw == UNSET {
            return Err(Error::UnsetCell(coord));
        }
        PatternCode::of(raw as i32)
    }

    /// Places `code` at the in-bounds cell `coord`.
    pub fn set(&mut self, coord: HexCoord, code: PatternCode) {
        let index = self.index(coord);
        self.cells[index] = code.value();
    }

    /// Empties the in-bounds cell `coord`.
    pub fn unset(&mut self, coord: HexCoord) {
        let index = self.index(coord);
        self.cells[index] = UNSET;
    }

    /// Raw byte stored at `index`.
    pub fn raw(&self, index: usize) -> u8 {
        self.cells[index]
    }

    /// Stores a raw byte at `index` without pattern validation.
    ///
    /// This is how the text tools load flat 0/1 grids; [`Torus::verify`]
    /// checks the domain.
    pub fn set_raw(&mut self, index: usize, value: u8) {
        self.cells[index] = value;
    }

    /// Pattern at a set cell, skipping the unset check.
    fn code_at(&self, coord: HexCoord) -> PatternCode {
        let raw = self.cells[self.index(coord)];
        debug_assert!(raw != UNSET);
        PatternCode::ALL[(raw & 0x7f) as usize]
    }

    /// Mask of patterns that could occupy `coord` without conflicting with
    /// any placed pattern whose neighborhood overlaps it.
    ///
    /// 18 cells are consulted: per direction, the immediate neighbor, the
    /// straight distance-2 neighbor and the knight's-move neighbor (one
    /// step in `dir`, one in `dir.next()`). The distance-2 check only runs
    /// when the immediate neighbor is empty, since a set immediate neighbor
    /// already constrains the hexagon shared with the farther cell. Each
    /// coupling mask is read from the neighbor's point of view, looking
    /// back at `coord`.
    ///
    /// Only meaningful for unset coordinates.
    pub fn available(&self, coord: HexCoord) -> u128 {
        debug_assert!(
            !self.is_set(coord),
            "candidates requested for an occupied cell {coord}"
        );
        let mut result = ALL_CODES;
        for dir in HexDir::ALL {
            let back = dir.invert();
            let direct = self.normalize(coord.step(dir));
            if self.is_set(direct) {
                result &= self.code_at(direct).coupling_direct1(back);
            } else {
                let straight = self.normalize(direct.step(dir));
                if self.is_set(straight) {
                    result &= self.code_at(straight).coupling_direct2(back);
                }
            }
            let knight = self.normalize(coord.step(dir).step(dir.next()));
            if self.is_set(knight) {
                result &= self.code_at(knight).coupling_knight(back);
            }
        }
        result
    }

    /// Mask of patterns present anywhere on the torus.
    pub fn calculate_visited(&self) -> u128 {
        let mut visited = 0u128;
        for &raw in &self.cells {
            if raw != UNSET && raw < CODE_COUNT as u8 {
                visited |= 1u128 << raw;
            }
        }
        visited
    }

    /// Number of unset cells.
    pub fn calculate_unset_size(&self) -> usize {
        self.cells.iter().filter(|&&raw| raw == UNSET).count()
    }

    /// Whether `coord` is unset with at least one set neighbor.
    pub(crate) fn is_boundary(&self, coord: HexCoord) -> bool {
        if self.is_set(coord) {
            return false;
        }
        HexDir::ALL
            .iter()
            .any(|&dir| self.is_set(self.normalize(coord.step(dir))))
    }

    /// Occurrence count per pattern, reconstructed from raw 0/1 cells.
    ///
    /// This runs against the flat representation the text tools exchange,
    /// where each cell holds a single hexagon bit rather than a whole
    /// neighborhood. A cell contributes one tally when it and all six of
    /// its neighbors are populated: the cell becomes bit 6 and the
    /// neighbors the ring bits. Cells holding anything other than 0, 1 or
    /// [`UNSET`] are an error.
    pub fn verify(&self) -> Result<FxHashMap<PatternCode, usize>> {
        let mut counts = FxHashMap::default();
        for index in 0..self.cells.len() {
            let raw = self.cells[index];
            if raw == UNSET {
                continue;
            }
            if raw > 1 {
                return Err(Error::InconsistentCell { index, value: raw });
            }

            // center hexagon is bit 6
            let mut value = u32::from(raw) << 6;
            let center = self.coord(index);
            let mut complete = true;
            for dir in HexDir::ALL {
                let neighbor = self.cells[self.index(self.normalize(center.step(dir)))];
                if neighbor == UNSET {
                    complete = false;
                    break;
                }
                value |= u32::from(neighbor != 0) << dir.index();
            }
            if !complete {
                continue;
            }

            let code = PatternCode::of(value as i32)?;
            *counts.entry(code).or_insert(0) += 1;
        }
        Ok(counts)
    }
}
