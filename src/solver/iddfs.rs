use super::{SearchFailure, SearchResult, Solution, Solver};
use crate::common::Node;
use crate::problem::Problem;

use std::rc::Rc;
use tracing::{debug, instrument, trace};

/// Result of one depth-limited pass.
#[derive(Debug)]
pub enum LimitOutcome {
    Found(Rc<Node>),
    /// Some branch was stopped by the depth ceiling.
    Cutoff,
    /// Everything under the ceiling was searched without reaching the goal.
    Failure,
}

/// Iterative deepening: depth-limited searches with ceilings 0, 1, 2, ...
/// The reported node count is that of the final pass only.
#[derive(Debug, Default, Clone, Copy)]
pub struct IterativeDeepening {
    max_depth: Option<usize>,
}

impl IterativeDeepening {
    /// `max_depth` of `None` deepens until the search stops reporting cutoff.
    pub fn new(max_depth: Option<usize>) -> Self {
        IterativeDeepening { max_depth }
    }
}

impl Solver for IterativeDeepening {
    fn name(&self) -> &'static str {
        "IDDFS"
    }

    #[instrument(skip_all, name = "iddfs", fields(initial = %problem.initial()), level = "debug")]
    fn solve(&self, problem: &Problem) -> SearchResult {
        let root = Node::root(*problem.initial());
        if problem.is_goal(root.state()) {
            return Ok(Solution::from_node(&root, 0));
        }

        let mut limit = 0;
        loop {
            let (outcome, nodes_explored) = depth_limited_search(problem, limit);
            debug!("depth limit {limit}: {outcome:?}, {nodes_explored} nodes explored");

            match outcome {
                LimitOutcome::Found(node) => {
                    return Ok(Solution::from_node(&node, nodes_explored));
                }
                LimitOutcome::Failure => return Err(SearchFailure { nodes_explored }),
                LimitOutcome::Cutoff => {
                    if self.max_depth.is_some_and(|max| limit >= max) {
                        debug!("maximum depth {limit} reached");
                        return Err(SearchFailure { nodes_explored });
                    }
                    limit += 1;
                }
            }
        }
    }
}

/// Depth-limited search from the problem's initial state. A node cut off by
/// the ceiling counts as one explored node; a goal node counts as none.
pub fn depth_limited_search(problem: &Problem, limit: usize) -> (LimitOutcome, usize) {
    recursive_dls(problem, &Node::root(*problem.initial()), limit)
}

fn recursive_dls(problem: &Problem, node: &Rc<Node>, limit: usize) -> (LimitOutcome, usize) {
    if problem.is_goal(node.state()) {
        return (LimitOutcome::Found(Rc::clone(node)), 0);
    }
    if node.depth() >= limit {
        return (LimitOutcome::Cutoff, 1);
    }

    trace!("expand node: {} depth {}", node.state(), node.depth());
    let mut nodes_explored = 1;
    let mut cutoff_occurred = false;

    for child in problem.expand(node) {
        if child.is_ancestor_cycle() {
            continue;
        }
        let (outcome, explored) = recursive_dls(problem, &child, limit);
        nodes_explored += explored;
        match outcome {
            LimitOutcome::Cutoff => cutoff_occurred = true,
            LimitOutcome::Failure => {}
            found @ LimitOutcome::Found(_) => return (found, nodes_explored),
        }
    }

    let outcome = if cutoff_occurred {
        LimitOutcome::Cutoff
    } else {
        LimitOutcome::Failure
    };
    (outcome, nodes_explored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::State;
    use crate::solver::test_support::{assert_valid_solution, init_tracing, state};

    #[test]
    fn test_limit_zero_is_cutoff_with_one_node() {
        init_tracing();
        let problem = Problem::new(state("1 0 2 3 4 5 6 7 8"));
        let (outcome, explored) = depth_limited_search(&problem, 0);
        assert!(matches!(outcome, LimitOutcome::Cutoff));
        assert_eq!(explored, 1);
    }

    #[test]
    fn test_limit_one_counts_root_and_children() {
        init_tracing();
        // Blank in the centre: four children, none of them the goal.
        let problem = Problem::new(state("1 2 3 4 0 5 6 7 8"));
        let (outcome, explored) = depth_limited_search(&problem, 1);
        assert!(matches!(outcome, LimitOutcome::Cutoff));
        assert_eq!(explored, 5);
    }

    #[test]
    fn test_limit_two_skips_moves_back_to_an_ancestor() {
        init_tracing();
        // Root, four children, then two grandchildren each: the move straight
        // back to the root is pruned.
        let problem = Problem::new(state("1 2 3 4 0 5 6 7 8"));
        let (outcome, explored) = depth_limited_search(&problem, 2);
        assert!(matches!(outcome, LimitOutcome::Cutoff));
        assert_eq!(explored, 1 + 4 + 4 * 2);
    }

    #[test]
    fn test_limit_at_goal_finds_it() {
        init_tracing();
        let problem = Problem::new(state("1 0 2 3 4 5 6 7 8"));
        let (outcome, explored) = depth_limited_search(&problem, 1);
        match outcome {
            LimitOutcome::Found(node) => assert_eq!(*node.state(), State::default_goal()),
            other => panic!("expected goal, got {other:?}"),
        }
        // The root is expanded; its LEFT child is the goal and adds nothing.
        assert_eq!(explored, 1);
    }

    #[test]
    fn test_iddfs_initial_is_goal() {
        init_tracing();
        let problem = Problem::new(State::default_goal());
        let solution = IterativeDeepening::default().solve(&problem).unwrap();
        assert_eq!(solution.nodes_explored, 0);
        assert_eq!(solution.move_count(), 0);
    }

    #[test]
    fn test_iddfs_finds_shortest_path() {
        init_tracing();
        let problem = Problem::new(state("1 4 2 3 5 0 6 7 8"));
        let solution = IterativeDeepening::default().solve(&problem).unwrap();
        assert_eq!(solution.move_count(), 3);
        assert_valid_solution(&problem, &solution);
    }

    #[test]
    fn test_iddfs_max_depth_gives_up() {
        init_tracing();
        let problem = Problem::new(state("1 4 2 3 5 0 6 7 8"));
        let failure = IterativeDeepening::new(Some(2))
            .solve(&problem)
            .unwrap_err();
        assert!(failure.nodes_explored > 0);
    }
}
