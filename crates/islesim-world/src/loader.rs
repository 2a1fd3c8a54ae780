//! Parsing a multi-line map sketch into a [`Grid`].
//!
//! The sketch format is one character per cell: `W` water, `D` desert,
//! `H` highland, `L` lowland. Blank leading and trailing lines are
//! ignored and common leading whitespace is stripped, so sketches can
//! be written inline in indented code or config files.

use islesim_types::TerrainKind;
use tracing::debug;

use crate::cell::Cell;
use crate::error::WorldError;
use crate::grid::Grid;

/// Parse a map sketch into a grid.
///
/// # Errors
///
/// - [`WorldError::EmptyMap`] when no non-blank line remains;
/// - [`WorldError::NotRectangular`] when row lengths differ;
/// - [`WorldError::UnknownTerrainCode`] for any character outside
///   `WDHL`;
/// - [`WorldError::OpenBorder`] when a boundary cell is not water.
pub fn parse_map(sketch: &str) -> Result<Grid, WorldError> {
    let lines = dedent(sketch);
    if lines.is_empty() {
        return Err(WorldError::EmptyMap);
    }

    let rows = lines.len();
    let cols = lines[0].chars().count();
    let mut terrain = Vec::with_capacity(rows * cols);
    for (row, line) in lines.iter().enumerate() {
        let found = line.chars().count();
        if found != cols {
            return Err(WorldError::NotRectangular {
                row,
                expected: cols,
                found,
            });
        }
        for (col, code) in line.chars().enumerate() {
            let kind = TerrainKind::from_code(code)
                .ok_or(WorldError::UnknownTerrainCode { code, row, col })?;
            terrain.push(kind);
        }
    }

    for (i, kind) in terrain.iter().enumerate() {
        let (row, col) = (i / cols, i % cols);
        let on_border = row == 0 || row == rows - 1 || col == 0 || col == cols - 1;
        if on_border && *kind != TerrainKind::Water {
            return Err(WorldError::OpenBorder { row, col });
        }
    }

    let cells = terrain.into_iter().map(Cell::new).collect();
    debug!(rows, cols, "map sketch parsed");
    Ok(Grid::from_cells(rows, cols, cells))
}

/// Drop blank leading and trailing lines and strip the longest common
/// leading-whitespace prefix from the rest.
fn dedent(sketch: &str) -> Vec<String> {
    let lines: Vec<&str> = sketch
        .lines()
        .skip_while(|l| l.trim().is_empty())
        .collect();
    let lines: Vec<&str> = lines
        .iter()
        .rev()
        .skip_while(|l| l.trim().is_empty())
        .copied()
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();

    let indent = lines
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.chars().take_while(|c| c.is_whitespace()).count())
        .min()
        .unwrap_or(0);

    lines
        .iter()
        .map(|l| l.chars().skip(indent).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use islesim_types::Coord;

    use super::*;

    #[test]
    fn a_minimal_island_parses() {
        let grid = parse_map("WWW\nWLW\nWWW").unwrap_or_else(|_| {
            Grid::from_cells(0, 0, Vec::new())
        });
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 3);
        assert!(grid.is_accessible(Coord::new(1, 1)));
        assert!(!grid.is_accessible(Coord::new(0, 0)));
    }

    #[test]
    fn indented_sketches_are_dedented() {
        let sketch = "
            WWWW
            WLHW
            WWWW
        ";
        let grid = parse_map(sketch).unwrap_or_else(|_| Grid::from_cells(0, 0, Vec::new()));
        assert_eq!((grid.rows(), grid.cols()), (3, 4));
        assert_eq!(
            grid.get(Coord::new(1, 2)).map(Cell::terrain),
            Some(TerrainKind::Highland)
        );
    }

    #[test]
    fn empty_sketch_is_rejected() {
        assert_eq!(parse_map("").err(), Some(WorldError::EmptyMap));
        assert_eq!(parse_map("  \n   \n").err(), Some(WorldError::EmptyMap));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = parse_map("WWW\nWW\nWWW").err();
        assert_eq!(
            err,
            Some(WorldError::NotRectangular {
                row: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn unknown_codes_are_rejected_with_position() {
        let err = parse_map("WWW\nWXW\nWWW").err();
        assert_eq!(
            err,
            Some(WorldError::UnknownTerrainCode {
                code: 'X',
                row: 1,
                col: 1
            })
        );
    }

    #[test]
    fn land_on_the_border_is_rejected() {
        let err = parse_map("WWW\nWLL\nWWW").err();
        assert_eq!(err, Some(WorldError::OpenBorder { row: 1, col: 2 }));
        let err = parse_map("WLW\nWLW\nWWW").err();
        assert_eq!(err, Some(WorldError::OpenBorder { row: 0, col: 1 }));
    }

    #[test]
    fn all_water_is_a_legal_if_lifeless_map() {
        let grid = parse_map("WW\nWW").unwrap_or_else(|_| Grid::from_cells(0, 0, Vec::new()));
        assert_eq!((grid.rows(), grid.cols()), (2, 2));
    }
}
