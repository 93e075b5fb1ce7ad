use std::rc::Rc;

use super::{Action, State};

/// Root-to-node sequence of states, each paired with the action that reached it.
pub type Path = Vec<(State, Option<Action>)>;

/// Search tree node. Children share their parent through `Rc`, so a parent
/// lives as long as any frontier entry or path still reaches it.
#[derive(Debug)]
pub struct Node {
    pub(crate) state: State,
    pub(crate) parent: Option<Rc<Node>>,
    pub(crate) action: Option<Action>,
    pub(crate) path_cost: usize,
    pub(crate) depth: usize,
}

impl Node {
    pub fn root(state: State) -> Rc<Node> {
        Rc::new(Node {
            state,
            parent: None,
            action: None,
            path_cost: 0,
            depth: 0,
        })
    }

    pub fn child(parent: &Rc<Node>, state: State, action: Action, step_cost: usize) -> Rc<Node> {
        Rc::new(Node {
            state,
            parent: Some(Rc::clone(parent)),
            action: Some(action),
            path_cost: parent.path_cost + step_cost,
            depth: parent.depth + 1,
        })
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn parent(&self) -> Option<&Rc<Node>> {
        self.parent.as_ref()
    }

    pub fn action(&self) -> Option<Action> {
        self.action
    }

    pub fn path_cost(&self) -> usize {
        self.path_cost
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Walks the parent chain, nearest ancestor first. Excludes `self`.
    pub fn ancestors(&self) -> Ancestors<'_> {
        Ancestors {
            next: self.parent.as_deref(),
        }
    }

    pub fn path(&self) -> Path {
        let mut path: Path = std::iter::once(self)
            .chain(self.ancestors())
            .map(|node| (node.state, node.action))
            .collect();
        path.reverse();
        path
    }

    /// True if some ancestor holds the same state. Only the current branch is
    /// checked; the same state reached along another branch is not a cycle.
    pub fn is_ancestor_cycle(&self) -> bool {
        self.ancestors().any(|ancestor| ancestor.state == self.state)
    }
}

// Unlink the parent chain iteratively so dropping a deep greedy path does not
// recurse once per ancestor.
impl Drop for Node {
    fn drop(&mut self) {
        let mut parent = self.parent.take();
        while let Some(node) = parent {
            match Rc::try_unwrap(node) {
                Ok(mut node) => parent = node.parent.take(),
                Err(_) => break,
            }
        }
    }
}

pub struct Ancestors<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.parent.as_deref();
        Some(node)
    }
}
