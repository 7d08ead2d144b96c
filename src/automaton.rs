/// State of a single cell.
#[derive(Copy, Clone, Eq, PartialEq, std::hash::Hash, std::fmt::Debug)]
pub enum CellState {
    Dead,
    Alive,
}

impl Default for CellState {
    fn default() -> Self {
        Self::Dead
    }
}

impl CellState {
    #[inline]
    pub fn is_alive(&self) -> bool {
        matches!(self, CellState::Alive)
    }

    pub fn toggle(&self) -> Self {
        match self {
            CellState::Dead => CellState::Alive,
            CellState::Alive => CellState::Dead,
        }
    }

    /// Plain-text rendering used by `Grid`'s `Display` implementation.
    pub fn symbol(&self) -> char {
        match self {
            CellState::Dead => '.',
            CellState::Alive => '#',
        }
    }
}

/// The B3/S23 rule: a dead cell with exactly three live neighbors is born, a
/// live cell with two or three live neighbors survives, every other cell is
/// dead in the next generation.
pub fn next_state(current: CellState, live_neighbors: usize) -> CellState {
    match (current, live_neighbors) {
        (CellState::Dead, 3) => CellState::Alive,
        (CellState::Alive, 2) | (CellState::Alive, 3) => CellState::Alive,
        _ => CellState::Dead,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn truth_table() {
        for n in 0..=8 {
            let born = next_state(CellState::Dead, n);
            let survives = next_state(CellState::Alive, n);
            assert_eq!(born.is_alive(), n == 3, "dead cell with {} neighbors", n);
            assert_eq!(
                survives.is_alive(),
                n == 2 || n == 3,
                "live cell with {} neighbors",
                n
            );
        }
    }

    #[test]
    fn toggle_flips_state() {
        assert_eq!(CellState::Dead.toggle(), CellState::Alive);
        assert_eq!(CellState::Alive.toggle(), CellState::Dead);
        assert_eq!(CellState::default(), CellState::Dead);
    }

    proptest! {
        #[test]
        fn birth_only_at_three(n in 0usize..=8) {
            prop_assert_eq!(next_state(CellState::Dead, n) == CellState::Alive, n == 3);
        }

        #[test]
        fn overcrowding_and_isolation_kill(n in prop_oneof![0usize..2, 4usize..=8]) {
            prop_assert_eq!(next_state(CellState::Alive, n), CellState::Dead);
        }
    }
}
