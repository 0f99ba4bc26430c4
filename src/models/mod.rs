//! Draw domain models.
//!
//! Provides the core data types for representing a round's input
//! (competitors and their role histories) and its solution (rooms of
//! seated competitors).
//!
//! # Domain Mappings
//!
//! | u-draw | British Parliamentary debating | Four-player games |
//! |--------|-------------------------------|-------------------|
//! | Competitor | Team | Player |
//! | RankScore | Team points | Match points |
//! | Role | Position (OG/OO/CG/CO) | Seat / colour |
//! | Room | Debate room | Table |
//! | Bracket | Points bracket | Score group |

mod bracket;
mod competitor;
mod role;
mod room;

pub use bracket::Bracket;
pub use competitor::{Competitor, RankScore};
pub use role::{Role, RoleProfile};
pub use room::{Draw, Room, Seat};
