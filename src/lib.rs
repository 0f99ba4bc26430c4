//! Fair round-draw generation for four-seat rooms.
//!
//! Seats competitors into rooms of four ordered roles so that only
//! similarly-ranked competitors share a room, while minimizing role
//! unfairness accumulated over previous rounds.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Competitor`, `Role`, `RoleProfile`,
//!   `Bracket`, `Room`, `Seat`, `Draw`
//! - **`cost`**: Seat cost functions (position badness table, range,
//!   entropy, variance, adjusted variance) and the exponent-aware `CostModel`
//! - **`assignment`**: Cost matrices with forbidden cells, the Hungarian
//!   solver, and its randomized wrapper
//! - **`draw`**: Bracket formation, matrix construction, collation, the
//!   `DrawGenerator`, and draw metrics
//! - **`config`**: `DrawConfig` (serde/TOML)
//! - **`validation`**: Input integrity checks (duplicate IDs, room-size divisibility)
//!
//! # Architecture
//!
//! A draw is a pure, single-threaded computation. The only nondeterminism
//! is the row/column shuffle, driven by a caller-supplied (or seeded) RNG.
//! Nothing is shared between draws.
//!
//! # References
//!
//! - Kuhn (1955), "The Hungarian Method for the Assignment Problem"
//! - Munkres (1957), "Algorithms for the Assignment and Transportation Problems"
//! - Shannon (1948), "A Mathematical Theory of Communication"

pub mod assignment;
pub mod config;
pub mod cost;
pub mod draw;
mod error;
pub mod models;
pub mod validation;

pub use config::DrawConfig;
pub use draw::DrawGenerator;
pub use error::DrawError;
