//! Textual views of a torus, and their inverse.
//!
//! These tools sit outside the grid itself and only use its public
//! accessors. The flat format they exchange is rows of whitespace-separated
//! tokens, one per hexagon: `0`/`O` and `1`/`I` for populated hexagons,
//! anything else (conventionally `.`) for unset ones. A parsed torus is
//! assumed to cover 128 hexagons; its width is whatever the first row
//! holds.

use std::fmt;

use crate::direction::HexDir;
use crate::error::{Error, Result};
use crate::torus::{Torus, UNSET};

/// Total number of hexagons a parsed torus is assumed to contain.
const PARSE_AREA: usize = 128;

/// Reads a torus from rows of `0`/`1`/`.` tokens.
///
/// Rows beyond the inferred height are ignored; missing rows leave the
/// remaining cells unset.
pub fn parse(input: &str) -> Result<Torus> {
    let rows: Vec<Vec<&str>> = input
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>())
        .filter(|tokens| !tokens.is_empty())
        .collect();

    let Some(first) = rows.first() else {
        return Err(Error::UnsupportedArea(0));
    };
    let width = first.len();
    if PARSE_AREA % width != 0 {
        return Err(Error::UnsupportedArea(width));
    }
    let height = PARSE_AREA / width;

    let mut torus = Torus::new(width as i32, height as i32)?;
    for (row, tokens) in rows.iter().take(height).enumerate() {
        if tokens.len() != width {
            return Err(Error::RaggedLine {
                row: row + 1,
                found: tokens.len(),
                expected: width,
            });
        }
        for (column, token) in tokens.iter().enumerate() {
            torus.set_raw(row * width + column, raw_value(token));
        }
    }
    Ok(torus)
}

/// Maps one token to a raw cell value.
fn raw_value(token: &str) -> u8 {
    match token {
        "0" | "O" => 0,
        "1" | "I" => 1,
        _ => UNSET,
    }
}

/// Hex-value view: one `x%02x` token per cell, `...` when unset, odd rows
/// indented half a cell.
pub fn render_codes(torus: &Torus) -> String {
    let width = torus.width() as usize;
    let mut out = String::new();
    for index in 0..torus.area() {
        if index % width == 0 {
            if index > 0 {
                out.push('\n');
            }
            if (index / width) % 2 == 1 {
                out.push_str("  ");
            }
        } else {
            out.push(' ');
        }
        let raw = torus.raw(index);
        if raw == UNSET {
            out.push_str("...");
        } else {
            out.push_str(&format!("x{raw:02x}"));
        }
    }
    out.push('\n');
    out
}

/// Center-bit view: `0`/`1` per populated cell, `.` when unset. An unset
/// cell bordering a populated one instead shows the bit that neighbor's
/// neighborhood assigns to it, as `O`/`I`.
pub fn render_bits(torus: &Torus) -> String {
    let width = torus.width() as usize;
    let mut out = String::new();
    for index in 0..torus.area() {
        if index % width == 0 {
            if index > 0 {
                out.push('\n');
            }
            if (index / width) % 2 == 1 {
                out.push(' ');
            }
        } else {
            out.push(' ');
        }
        out.push(bit_char(torus, index));
    }
    out.push('\n');
    out
}

fn bit_char(torus: &Torus, index: usize) -> char {
    let raw = torus.raw(index);
    if raw != UNSET {
        return if raw >> 6 & 1 == 0 { '0' } else { '1' };
    }
    let coord = torus.coord(index);
    if !torus.is_boundary(coord) {
        return '.';
    }
    // walk around until we hit the populated neighbor
    let mut dir = HexDir::UpLeft;
    while !torus.is_set(torus.normalize(coord.step(dir))) {
        dir = dir.next();
    }
    match torus.get(torus.normalize(coord.step(dir))) {
        Ok(code) if code.bit(dir.invert().index()) == 0 => 'O',
        Ok(_) => 'I',
        Err(_) => '.',
    }
}

/// Reprints a `W`×`H` ⬢ torus as an `H`×`2W` ⬣ torus.
///
/// The rotated orientation walks the grid column by column, pairing rows
/// of opposite parity: each output line holds `H/2` cells read at a
/// two-row stride.
pub fn transpose(torus: &Torus) -> String {
    let width = torus.width() as usize;
    let height = torus.height() as usize;
    let mut out = String::new();
    for line in 0..2 * width {
        if line % 2 == 0 {
            out.push(' ');
        }
        let offset = if line % 2 == 0 {
            line / 2 + 1
        } else {
            width + line / 2 + 1
        };
        let start = 2 * width - offset;
        for i in 0..height / 2 {
            if i > 0 {
                out.push(' ');
            }
            out.push(match torus.raw(start + i * 2 * width) {
                UNSET => '.',
                0 => '0',
                _ => '1',
            });
        }
        out.push('\n');
    }
    out
}

impl fmt::Display for Torus {
    /// Both views, hex values above center bits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", render_codes(self), render_bits(self))
    }
}

#[cfg(test)]
mod tests {
    use crate::coord::HexCoord;
    use crate::pattern::PatternCode;

    use super::*;

    #[test]
    fn parses_tokens_into_raw_cells() {
        let row = vec!["1"; 64].join(" ");
        let input = format!("{row}\n{row}\n");

        let torus = parse(&input).unwrap();
        assert_eq!(torus.width(), 64);
        assert_eq!(torus.height(), 2);
        assert_eq!(torus.calculate_unset_size(), 0);
        assert!((0..torus.area()).all(|index| torus.raw(index) == 1));
    }

    #[test]
    fn accepts_letter_tokens_and_leaves_the_rest_unset() {
        let torus = parse("O I . x\n").unwrap();
        assert_eq!(torus.width(), 4);
        assert_eq!(torus.height(), 32);
        assert_eq!(torus.raw(0), 0);
        assert_eq!(torus.raw(1), 1);
        assert_eq!(torus.raw(2), UNSET);
        assert_eq!(torus.raw(3), UNSET);
        assert_eq!(torus.calculate_unset_size(), 126);
    }

    #[test]
    fn skips_blank_lines() {
        let row = vec!["0"; 32].join(" ");
        let input = format!("\n{row}\n\n{row}\n");
        let torus = parse(&input).unwrap();
        assert_eq!(torus.width(), 32);
        assert_eq!(torus.calculate_unset_size(), 64);
    }

    #[test]
    fn rejects_rows_that_cannot_tile_128_cells() {
        assert!(matches!(parse(""), Err(Error::UnsupportedArea(0))));
        assert!(matches!(
            parse("1 1 1 1 1\n"),
            Err(Error::UnsupportedArea(5))
        ));
    }

    #[test]
    fn rejects_ragged_rows() {
        assert!(matches!(
            parse("1 1 1 1\n1 1 1\n"),
            Err(Error::RaggedLine {
                row: 2,
                found: 3,
                expected: 4
            })
        ));
    }

    #[test]
    fn rejects_widths_producing_odd_heights() {
        let row = vec!["1"; 128].join(" ");
        assert!(matches!(
            parse(&row),
            Err(Error::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn renders_the_code_view() {
        let mut torus = Torus::new(4, 2).unwrap();
        torus.set(HexCoord::new(0, 0), PatternCode::of(0x12).unwrap());
        torus.set(HexCoord::new(1, 1), PatternCode::of(0x7f).unwrap());

        insta::assert_snapshot!(render_codes(&torus), @r"
        x12 ... ... ...
          ... x7f ... ...
        ");
    }

    #[test]
    fn renders_the_bit_view_with_boundary_probes() {
        let mut torus = Torus::new(4, 2).unwrap();
        torus.set(HexCoord::new(0, 0), PatternCode::of(0x40).unwrap());

        insta::assert_snapshot!(render_bits(&torus), @r"
        1 O . O
         O . . O
        ");
    }

    #[test]
    fn transpose_walks_columns() {
        let mut torus = Torus::new(4, 2).unwrap();
        for index in 0..torus.area() {
            torus.set_raw(index, (index % 2) as u8);
        }
        assert_eq!(transpose(&torus), " 1\n1\n 0\n0\n 1\n1\n 0\n0\n");
    }

    #[test]
    fn display_stacks_both_views() {
        let mut torus = Torus::new(4, 2).unwrap();
        torus.set(HexCoord::new(0, 0), PatternCode::of(0x40).unwrap());

        let rendered = torus.to_string();
        assert!(rendered.contains("x40"));
        assert!(rendered.contains("1 O"));
    }

    #[test]
    fn parsed_torus_feeds_the_verifier() {
        let row = vec!["0"; 16].join(" ");
        let input = format!("{}\n", vec![row; 8].join("\n"));

        let torus = parse(&input).unwrap();
        let counts = torus.verify().unwrap();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts[&PatternCode::of(0).unwrap()], 128);
    }
}
