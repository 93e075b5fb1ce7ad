mod heuristic;

pub use heuristic::{Heuristic, OutOfRowAndColumn};

use std::rc::Rc;
use std::vec;

use crate::common::{Action, Node, State};
use crate::error::{PuzzleError, Result};

use tracing::warn;

/// Fixed initial and goal boards with the unit-cost transition model.
#[derive(Debug, Clone)]
pub struct Problem {
    initial: State,
    goal: State,
}

impl Problem {
    pub fn new(initial: State) -> Self {
        Self::with_goal(initial, State::default_goal())
    }

    pub fn with_goal(initial: State, goal: State) -> Self {
        Problem { initial, goal }
    }

    pub fn initial(&self) -> &State {
        &self.initial
    }

    pub fn goal(&self) -> &State {
        &self.goal
    }

    pub fn actions(&self, state: &State) -> Vec<Action> {
        state.legal_actions()
    }

    pub fn result(&self, state: &State, action: Action) -> Result<State> {
        state
            .slide(action)
            .ok_or_else(|| PuzzleError::InvalidAction {
                action,
                state: state.to_string(),
            })
    }

    pub fn action_cost(&self, _state: &State, _action: Action, _next: &State) -> usize {
        1
    }

    pub fn is_goal(&self, state: &State) -> bool {
        *state == self.goal
    }

    /// Children of `node` in `actions` order. Each call computes a fresh sequence.
    pub fn expand<'a>(&'a self, node: &Rc<Node>) -> Expand<'a> {
        Expand {
            problem: self,
            parent: Rc::clone(node),
            actions: self.actions(node.state()).into_iter(),
        }
    }

    /// Row-and-column heuristic measured against this problem's goal.
    pub fn out_of_row_and_column(&self) -> OutOfRowAndColumn {
        OutOfRowAndColumn::new(&self.goal)
    }
}

pub struct Expand<'a> {
    problem: &'a Problem,
    parent: Rc<Node>,
    actions: vec::IntoIter<Action>,
}

impl Iterator for Expand<'_> {
    type Item = Rc<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        for action in self.actions.by_ref() {
            let next = match self.problem.result(self.parent.state(), action) {
                Ok(next) => next,
                Err(err) => {
                    warn!("skipping child: {err}");
                    continue;
                }
            };
            let cost = self.problem.action_cost(self.parent.state(), action, &next);
            return Some(Node::child(&self.parent, next, action, cost));
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.actions.len()))
    }
}
