//! Driving whole games between move-choosing policies.
//!
//! A [`Policy`] picks a move for a board. [`play_game`] alternates two
//! policies from the empty board and records every move.
//!
//! ```rust
//! use tictactoe_minimax::play::{play_game, MinimaxPolicy, RandomPolicy};
//!
//! let mut perfect = MinimaxPolicy::default();
//! let mut random = RandomPolicy::new(7);
//!
//! let record = play_game(&mut random, &mut perfect).unwrap();
//! // Perfect play as O never loses.
//! assert!(record.utility() <= 0);
//! ```

pub mod game;
pub mod policy;

pub use game::{play_from, play_game, GameRecord, PlayError};
pub use policy::{MinimaxPolicy, Policy, RandomPolicy};
