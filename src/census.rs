//! Colour census over a board.
//!
//! Counts how many pins of each colour a board needs. Used by the
//! build report and by `pushpin palette` over an existing board image.

use std::collections::HashMap;

use crate::types::{Colour, Raster};

/// Count pins per colour, most common first.
///
/// Ties are broken by colour bytes so the report order is stable
/// across runs.
pub fn colour_census(board: &Raster) -> Vec<(Colour, u64)> {
    let mut counts: HashMap<Colour, u64> = HashMap::new();
    for &c in board.pixels() {
        *counts.entry(c).or_insert(0) += 1;
    }

    let mut census: Vec<(Colour, u64)> = counts.into_iter().collect();
    census.sort_by(|a, b| {
        b.1.cmp(&a.1)
            .then_with(|| (a.0.r, a.0.g, a.0.b).cmp(&(b.0.r, b.0.g, b.0.b)))
    });
    census
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_census_counts() {
        let mut board = Raster::filled(3, 2, Colour::WHITE);
        board.set(0, 0, Colour::BLACK);
        board.set(1, 1, Colour::BLACK);

        let census = colour_census(&board);
        assert_eq!(census, vec![(Colour::WHITE, 4), (Colour::BLACK, 2)]);
    }

    #[test]
    fn test_census_tie_order_is_stable() {
        let mut board = Raster::filled(2, 1, Colour::WHITE);
        board.set(0, 0, Colour::BLACK);

        // One pin each: black sorts before white on bytes.
        let census = colour_census(&board);
        assert_eq!(census, vec![(Colour::BLACK, 1), (Colour::WHITE, 1)]);
    }

    #[test]
    fn test_census_single_colour() {
        let board = Raster::filled(4, 4, Colour::rgb(7, 7, 7));
        let census = colour_census(&board);
        assert_eq!(census, vec![(Colour::rgb(7, 7, 7), 16)]);
    }
}
