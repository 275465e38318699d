pub mod game;
pub mod journal;
pub mod layout;
pub mod replay;
pub mod rules;
pub mod state;
pub mod types;

pub use game::{Game, TurnSource};
pub use journal::{InputJournal, InputRecord};
pub use layout::{AdversaryStart, Layout, LayoutError, LayoutSpec};
pub use replay::*;
pub use rules::Rules;
pub use state::{GameSnapshot, GameState, Map};
pub use types::*;
