use crate::enc::{DecodeError, GridCodec, Plaintext};
use crate::grid::Grid;
use rand::Rng;

/// Dimensions of the built-in seed pattern
pub const SEED_ROWS: usize = 23;
pub const SEED_COLS: usize = 23;

/// The built-in starting configuration, a 23x23 plaintext pattern
pub const FIXED_SEED: &str = "\
.O.....................
O.O...................O
...O.............OOO...
.OOO.............OOO...
.................O.....
.......................
.................OOO...
.................OOO...
.................OO....
........OO........O....
.................OOO...
.................OOO...
.................OOO...
.....O.................
...OO........OOO.......
.....O..........O......
......O......O.OO......
...O.O.O......OO.O.....
...............O.O.....
...............O.......
.......................
.O...................OO
.O...................O.
";

/// Where the starting grid comes from
pub enum SeedSource {
    /// The built-in fixed pattern
    Fixed,
    /// Every cell drawn independently with probability 1/2
    Random,
    /// All cells dead
    Empty,
}

impl SeedSource {
    pub fn new<S: AsRef<str>>(s: S) -> Option<Self> {
        match s.as_ref() {
            "fixed" => Some(Self::Fixed),
            "random" => Some(Self::Random),
            "empty" => Some(Self::Empty),
            _ => None,
        }
    }

    /// Produces the starting grid
    ///
    /// `rows`/`cols` size the generated fills; the fixed pattern carries its
    /// own dimensions and ignores them.
    pub fn create_grid(self, rows: usize, cols: usize) -> Result<Grid, DecodeError> {
        match self {
            Self::Fixed => Plaintext.decode(FIXED_SEED),
            Self::Random => {
                let mut rng = rand::rng();
                Ok(Grid::from_fn(rows, cols, |_, _| rng.random_bool(0.5))?)
            }
            Self::Empty => Ok(Grid::new(rows, cols)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_seed_has_expected_shape() {
        let grid = SeedSource::Fixed.create_grid(0, 0).expect("fixed seed parses");

        assert_eq!(grid.rows(), SEED_ROWS);
        assert_eq!(grid.cols(), SEED_COLS);
        assert_eq!(grid.live_count(), 61);
    }

    #[test]
    fn fixed_seed_spot_checks() {
        let grid = SeedSource::Fixed.create_grid(0, 0).expect("fixed seed parses");

        assert!(grid.get(0, 1));
        assert!(grid.get(1, 0));
        assert!(grid.get(1, 22));
        assert!(grid.get(9, 8));
        assert!(grid.get(9, 9));
        assert!(grid.get(22, 1));
        assert!(grid.get(22, 21));
        assert!(!grid.get(0, 0));
        assert!(!grid.get(22, 22));
    }

    #[test]
    fn source_parses() {
        assert!(matches!(SeedSource::new("fixed"), Some(SeedSource::Fixed)));
        assert!(matches!(SeedSource::new("random"), Some(SeedSource::Random)));
        assert!(matches!(SeedSource::new("empty"), Some(SeedSource::Empty)));
        assert!(SeedSource::new("glider").is_none());
    }

    #[test]
    fn empty_fill_is_all_dead() {
        let grid = SeedSource::Empty.create_grid(4, 6).expect("4x6 grid");

        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.cols(), 6);
        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    fn random_fill_matches_requested_size() {
        let grid = SeedSource::Random.create_grid(5, 7).expect("5x7 grid");

        assert_eq!(grid.rows(), 5);
        assert_eq!(grid.cols(), 7);
    }
}
