use crate::common::{State, BLANK, CELLS, SIDE};

/// Estimate of the remaining cost from a state to the goal.
pub trait Heuristic {
    fn estimate(&self, state: &State) -> usize;
}

impl<F> Heuristic for F
where
    F: Fn(&State) -> usize,
{
    fn estimate(&self, state: &State) -> usize {
        self(state)
    }
}

/// Counts, for every non-blank tile, one if it sits outside its goal row and
/// one if it sits outside its goal column. Each tile contributes at most its
/// Manhattan distance.
#[derive(Debug, Clone)]
pub struct OutOfRowAndColumn {
    goal_positions: [(usize, usize); CELLS],
}

impl OutOfRowAndColumn {
    pub fn new(goal: &State) -> Self {
        let mut goal_positions = [(0, 0); CELLS];
        for (index, &tile) in goal.tiles().iter().enumerate() {
            goal_positions[tile as usize] = (index / SIDE, index % SIDE);
        }
        OutOfRowAndColumn { goal_positions }
    }
}

impl Heuristic for OutOfRowAndColumn {
    fn estimate(&self, state: &State) -> usize {
        let mut out_of_row = 0;
        let mut out_of_column = 0;
        for (index, &tile) in state.tiles().iter().enumerate() {
            if tile == BLANK {
                continue;
            }
            let (goal_row, goal_col) = self.goal_positions[tile as usize];
            if index / SIDE != goal_row {
                out_of_row += 1;
            }
            if index % SIDE != goal_col {
                out_of_column += 1;
            }
        }
        out_of_row + out_of_column
    }
}
