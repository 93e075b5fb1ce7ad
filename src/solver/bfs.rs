use super::{SearchFailure, SearchResult, Solution, Solver};
use crate::common::{Node, State};
use crate::problem::Problem;

use std::collections::{HashSet, VecDeque};
use tracing::{debug, instrument, trace};

/// Breadth-first search. States are marked reached when enqueued and goal
/// tested when generated.
#[derive(Debug, Default, Clone, Copy)]
pub struct BreadthFirst;

impl Solver for BreadthFirst {
    fn name(&self) -> &'static str {
        "BFS"
    }

    #[instrument(skip_all, name = "bfs", fields(initial = %problem.initial()), level = "debug")]
    fn solve(&self, problem: &Problem) -> SearchResult {
        let root = Node::root(*problem.initial());
        if problem.is_goal(root.state()) {
            return Ok(Solution::from_node(&root, 0));
        }

        let mut frontier = VecDeque::from([root]);
        let mut reached: HashSet<State> = HashSet::from([*problem.initial()]);
        let mut nodes_explored = 0;

        while let Some(node) = frontier.pop_front() {
            nodes_explored += 1;
            trace!("expand node: {} depth {}", node.state(), node.depth());

            for child in problem.expand(&node) {
                if problem.is_goal(child.state()) {
                    debug!("goal generated at depth {}", child.depth());
                    return Ok(Solution::from_node(&child, nodes_explored));
                }
                if reached.insert(*child.state()) {
                    frontier.push_back(child);
                }
            }
        }

        debug!("frontier exhausted, {} states reached", reached.len());
        Err(SearchFailure { nodes_explored })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::test_support::{assert_valid_solution, init_tracing, state};

    #[test]
    fn test_bfs_initial_is_goal() {
        init_tracing();
        let problem = Problem::new(State::default_goal());
        let solution = BreadthFirst.solve(&problem).unwrap();
        assert_eq!(solution.nodes_explored, 0);
        assert_eq!(solution.move_count(), 0);
    }

    #[test]
    fn test_bfs_one_move() {
        init_tracing();
        let problem = Problem::new(state("1 0 2 3 4 5 6 7 8"));
        let solution = BreadthFirst.solve(&problem).unwrap();
        assert_eq!(solution.move_count(), 1);
        // The goal is generated while expanding the root.
        assert_eq!(solution.nodes_explored, 1);
        assert_eq!(solution.moved_tiles(), vec![1]);
        assert_valid_solution(&problem, &solution);
    }

    #[test]
    fn test_bfs_one_move_custom_goal() {
        init_tracing();
        let problem = Problem::with_goal(state("1 2 3 4 5 6 7 0 8"), state("1 2 3 4 5 6 7 8 0"));
        let solution = BreadthFirst.solve(&problem).unwrap();
        assert_eq!(solution.move_count(), 1);
        assert_eq!(solution.moved_tiles(), vec![8]);
    }

    #[test]
    fn test_bfs_shortest_path() {
        init_tracing();
        // Three moves from the goal: blank went Right, Down, Right.
        let problem = Problem::new(state("1 4 2 3 5 0 6 7 8"));
        let solution = BreadthFirst.solve(&problem).unwrap();
        assert_eq!(solution.move_count(), 3);
        assert_valid_solution(&problem, &solution);
    }

    #[test]
    fn test_bfs_unreachable_goal_exhausts_frontier() {
        init_tracing();
        // Odd parity relative to the goal: half of the state space is unreachable.
        let problem = Problem::new(state("0 2 1 3 4 5 6 7 8"));
        let failure = BreadthFirst.solve(&problem).unwrap_err();
        // Every state of the initial's parity class is expanded exactly once.
        assert_eq!(failure.nodes_explored, 181_440);
    }
}
