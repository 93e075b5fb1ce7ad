mod node;
mod state;

pub use node::{Ancestors, Node, Path};
pub use state::{Action, State, BLANK, CELLS, SIDE};
