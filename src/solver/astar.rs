use super::frontier::PriorityFrontier;
use super::{SearchFailure, SearchResult, Solution, Solver};
use crate::common::{Node, State};
use crate::problem::{Heuristic, Problem};

use std::collections::HashMap;
use tracing::{debug, instrument, trace};

/// A* search on f = g + h. A state already reached is pushed again only when
/// the new f improves on the best one recorded for it.
#[derive(Debug, Clone)]
pub struct AStar<H> {
    heuristic: H,
}

impl<H: Heuristic> AStar<H> {
    pub fn new(heuristic: H) -> Self {
        AStar { heuristic }
    }
}

impl<H: Heuristic> Solver for AStar<H> {
    fn name(&self) -> &'static str {
        "A*"
    }

    #[instrument(skip_all, name = "a_star", fields(initial = %problem.initial()), level = "debug")]
    fn solve(&self, problem: &Problem) -> SearchResult {
        let root = Node::root(*problem.initial());
        if problem.is_goal(root.state()) {
            return Ok(Solution::from_node(&root, 0));
        }

        let root_f = root.path_cost() + self.heuristic.estimate(root.state());
        let mut reached: HashMap<State, usize> = HashMap::from([(*root.state(), root_f)]);
        let mut frontier = PriorityFrontier::new();
        frontier.push(root, root_f);
        let mut nodes_explored = 0;

        while let Some(node) = frontier.pop() {
            nodes_explored += 1;
            trace!(
                "expand node: {} g {} depth {}",
                node.state(),
                node.path_cost(),
                node.depth()
            );

            if problem.is_goal(node.state()) {
                debug!("goal dequeued with cost {}", node.path_cost());
                return Ok(Solution::from_node(&node, nodes_explored));
            }

            for child in problem.expand(&node) {
                let f_cost = child.path_cost() + self.heuristic.estimate(child.state());
                let improves = reached
                    .get(child.state())
                    .map_or(true, |&best| f_cost < best);
                if improves {
                    reached.insert(*child.state(), f_cost);
                    frontier.push(child, f_cost);
                }
            }
            trace!("frontier size {}", frontier.len());
        }

        debug!("frontier exhausted, {} states reached", reached.len());
        Err(SearchFailure { nodes_explored })
    }
}
