pub mod types;
pub mod direction;
pub mod board;
pub mod rules;
pub mod history;
pub mod state;
pub mod round;

pub use types::*;
pub use direction::*;
pub use board::*;
pub use rules::*;
pub use history::*;
pub use state::*;
pub use round::*;
