mod faults;

pub use self::faults::FaultLog;
use crate::grid::Grid;

/// The generation-update engine: two grid buffers plus the rule logic.
///
/// `current` holds the authoritative state for the present generation,
/// `next` is the scratch buffer written while computing the following one.
/// Both always have identical dimensions.
#[derive(Debug)]
pub struct GameOfLife {
    current: Grid,
    next: Grid,
    generation: u32,
    faults: FaultLog,
}

impl GameOfLife {
    pub fn from_seed(seed: Grid) -> Self {
        let next = seed.like();
        Self {
            current: seed,
            next,
            generation: 0,
            faults: FaultLog::default(),
        }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.current
    }

    #[inline]
    pub fn generation(&self) -> u32 {
        self.generation
    }

    #[inline]
    pub fn faults(&self) -> &FaultLog {
        &self.faults
    }

    #[inline]
    pub fn fault_count(&self) -> u32 {
        self.faults.count()
    }

    /// Counts live cells among the up-to-8 positions around (row, col)
    ///
    /// The center is never counted. Offsets that fall outside the grid are
    /// skipped, so corner and edge cells clamp naturally and an out-of-range
    /// center yields the count over whatever candidates remain in range.
    ///
    /// A checked access that misses despite the bounds pre-check is recovered
    /// locally: the fault is counted and logged, and the partial count
    /// accumulated so far is returned.
    pub fn num_neighbors(&self, row: i32, col: i32) -> u8 {
        let rows = self.current.rows() as i32;
        let cols = self.current.cols() as i32;

        let mut count = 0;
        for dr in -1..=1 {
            for dc in -1..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let (r, c) = (row + dr, col + dc);
                if r < 0 || r >= rows || c < 0 || c >= cols {
                    continue;
                }
                match self.current.cell(r as usize, c as usize) {
                    Some(true) => count += 1,
                    Some(false) => {}
                    None => {
                        // unreachable while dimensions agree with storage
                        debug_assert!(false, "neighbor scan escaped bounds at ({r}, {c})");
                        self.faults.record(r, c, rows - 1, cols - 1);
                        return count;
                    }
                }
            }
        }
        count
    }

    /// Computes the next generation in place
    ///
    /// Counts are read exclusively from `current` so every cell updates
    /// against the same snapshot; results land in `next`, which is then
    /// copied back cell-by-cell.
    pub fn step(&mut self) {
        let rows = self.current.rows();
        let cols = self.current.cols();

        for row in 0..rows {
            for col in 0..cols {
                let neighbors = self.num_neighbors(row as i32, col as i32);
                let alive = self.current.get(row, col);
                self.next.set(row, col, next_state(alive, neighbors));
            }
        }

        for row in 0..rows {
            for col in 0..cols {
                self.current.set(row, col, self.next.get(row, col));
            }
        }

        self.generation += 1;
    }
}

/// The birth/death rule table applied to a single cell
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        // under-population
        (true, n) if n < 2 => false,
        (true, 2 | 3) => true,
        // overcrowding
        (true, _) => false,
        // reproduction
        (false, 3) => true,
        (false, _) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enc::{GridCodec, Plaintext};
    use crate::seed;

    fn seed_game() -> GameOfLife {
        let grid = Plaintext.decode(seed::FIXED_SEED).expect("fixed seed parses");
        GameOfLife::from_seed(grid)
    }

    fn game_from(pattern: &str) -> GameOfLife {
        GameOfLife::from_seed(Plaintext.decode(pattern).expect("pattern parses"))
    }

    #[test]
    fn seed_corner_neighbor_counts() {
        let game = seed_game();

        assert_eq!(game.num_neighbors(0, 0), 2);
        assert_eq!(game.num_neighbors(22, 0), 2);
        assert_eq!(game.num_neighbors(0, 22), 1);
        assert_eq!(game.num_neighbors(22, 22), 3);
    }

    #[test]
    fn seed_interior_neighbor_counts() {
        let game = seed_game();

        assert_eq!(game.num_neighbors(4, 5), 0);
        assert_eq!(game.num_neighbors(4, 4), 1);
        assert_eq!(game.num_neighbors(4, 3), 2);
        assert_eq!(game.num_neighbors(4, 2), 3);
        assert_eq!(game.num_neighbors(2, 1), 4);
        assert_eq!(game.num_neighbors(2, 2), 5);
        assert_eq!(game.num_neighbors(3, 18), 6);
        assert_eq!(game.num_neighbors(7, 18), 7);
        assert_eq!(game.num_neighbors(11, 18), 8);
    }

    #[test]
    fn neighbor_counts_stay_in_range() {
        let game = seed_game();

        for row in 0..23 {
            for col in 0..23 {
                assert!(game.num_neighbors(row, col) <= 8);
            }
        }
    }

    #[test]
    fn center_cell_is_not_its_own_neighbor() {
        let game = game_from("...\n.O.\n...");

        assert_eq!(game.num_neighbors(1, 1), 0);
    }

    #[test]
    fn corners_and_edges_clamp() {
        let game = game_from("OOO\nOOO\nOOO");

        // a corner has 3 candidate neighbors, a non-corner edge cell 5
        assert_eq!(game.num_neighbors(0, 0), 3);
        assert_eq!(game.num_neighbors(0, 1), 5);
        assert_eq!(game.num_neighbors(1, 1), 8);
    }

    #[test]
    fn out_of_range_center_is_tolerated() {
        let game = seed_game();

        // only (22, 22) is a candidate position, and it is live in the seed
        assert_eq!(game.num_neighbors(23, 23), 1);
        assert_eq!(game.num_neighbors(-1, -1), 0);
        assert_eq!(game.num_neighbors(-5, 40), 0);
        assert_eq!(game.fault_count(), 0);
    }

    #[test]
    fn rule_table() {
        assert!(!next_state(true, 0));
        assert!(!next_state(true, 1));
        assert!(next_state(true, 2));
        assert!(next_state(true, 3));
        assert!(!next_state(true, 4));
        assert!(!next_state(true, 8));

        assert!(next_state(false, 3));
        assert!(!next_state(false, 2));
        assert!(!next_state(false, 4));
        assert!(!next_state(false, 0));
    }

    #[test]
    fn live_center_with_two_neighbors_survives() {
        let mut game = game_from("O.O\n.O.\n...");

        assert_eq!(game.num_neighbors(1, 1), 2);
        game.step();
        assert!(game.grid().get(1, 1));
    }

    #[test]
    fn live_center_with_one_neighbor_dies() {
        let mut game = game_from("O..\n.O.\n...");

        game.step();
        assert!(!game.grid().get(1, 1));
    }

    #[test]
    fn live_center_with_four_neighbors_dies() {
        let mut game = game_from("O.O\n.O.\nO.O");

        assert_eq!(game.num_neighbors(1, 1), 4);
        game.step();
        assert!(!game.grid().get(1, 1));
    }

    #[test]
    fn block_is_a_still_life() {
        let mut game = game_from("....\n.OO.\n.OO.\n....");
        let before = game.grid().clone();

        game.step();
        assert_eq!(game.grid(), &before);
    }

    #[test]
    fn blinker_oscillates() {
        let mut game = game_from(".....\n.....\n.OOO.\n.....\n.....");

        game.step();
        assert!(game.grid().get(1, 2));
        assert!(game.grid().get(2, 2));
        assert!(game.grid().get(3, 2));
        assert_eq!(game.grid().live_count(), 3);

        game.step();
        assert!(game.grid().get(2, 1));
        assert!(game.grid().get(2, 2));
        assert!(game.grid().get(2, 3));
    }

    #[test]
    fn step_increments_generation() {
        let mut game = seed_game();
        assert_eq!(game.generation(), 0);

        game.step();
        game.step();
        assert_eq!(game.generation(), 2);
    }

    #[test]
    fn full_run_is_deterministic() {
        let mut a = seed_game();
        let mut b = seed_game();

        for _ in 0..30 {
            a.step();
            b.step();
            assert_eq!(a.grid(), b.grid());
        }
    }

    #[test]
    fn full_run_records_no_faults() {
        let mut game = seed_game();

        for _ in 0..20 {
            game.step();
        }
        assert_eq!(game.fault_count(), 0);
    }
}
