//! Draw generation: brackets → cost matrix → shuffled assignment → rooms.
//!
//! # Algorithm
//!
//! 1. Drop inactive competitors and validate the rest.
//! 2. Form one bracket per room from rank scores, pulling lower tiers up
//!    to complete rooms ([`define_brackets`]).
//! 3. Price every competitor × seat pair with the configured cost model;
//!    pairs outside the competitor's bracket are forbidden
//!    ([`build_cost_matrix`]).
//! 4. Solve the assignment exactly after a random row/column shuffle
//!    ([`solve_shuffled`](crate::assignment::solve_shuffled)).
//! 5. Map the matching back to rooms and verify the result
//!    ([`collate_rooms`], [`Draw::verify`]).
//!
//! # Complexity
//! O(n³) in the number of competitors, dominated by the assignment.
//!
//! # References
//! - Kuhn (1955), "The Hungarian Method for the Assignment Problem"
//! - WUDC debating and adjudication manual, draw rules for BP tournaments

mod brackets;
mod collate;
mod costs;
mod report;

pub use brackets::define_brackets;
pub use collate::collate_rooms;
pub use costs::{build_cost_matrix, slot_index, slot_of};
pub use report::{ComparisonEntry, DrawComparison, DrawSummary};

use rand::Rng;
use tracing::{debug, debug_span, warn};

use crate::assignment::solve_shuffled;
use crate::config::DrawConfig;
use crate::error::DrawError;
use crate::models::{Competitor, Draw, RankScore};
use crate::validation::validate_competitors;

/// Generates fair draws for a round.
///
/// Holds no state between draws; one generator can serve any number of
/// independent rounds.
///
/// # Example
///
/// ```
/// use u_draw::config::DrawConfig;
/// use u_draw::draw::DrawGenerator;
/// use u_draw::models::Competitor;
///
/// let competitors: Vec<Competitor> = [10, 10, 10, 10, 8, 8, 8, 8]
///     .iter()
///     .enumerate()
///     .map(|(i, &rank)| Competitor::new(format!("T{i}"), rank))
///     .collect();
///
/// let generator = DrawGenerator::new(DrawConfig::new().with_seed(1));
/// let draw = generator.generate(&competitors)?;
/// assert_eq!(draw.room_count(), 2);
/// assert_eq!(draw.total_cost(), 0.0);
/// # Ok::<(), u_draw::DrawError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct DrawGenerator {
    config: DrawConfig,
}

impl DrawGenerator {
    /// Creates a generator with the given settings.
    pub fn new(config: DrawConfig) -> Self {
        Self { config }
    }

    /// The generator's settings.
    pub fn config(&self) -> &DrawConfig {
        &self.config
    }

    /// Generates a draw using the configured seed (or OS entropy).
    pub fn generate(&self, competitors: &[Competitor]) -> Result<Draw, DrawError> {
        let mut rng = self.config.rng();
        self.generate_with_rng(competitors, &mut rng)
    }

    /// Generates a draw using the caller's random source for the shuffle.
    ///
    /// # Errors
    /// - [`DrawError::InvalidConfig`] for out-of-range settings.
    /// - [`DrawError::InvalidInput`] if the active competitors fail validation,
    ///   or the configured exponent pushes costs beyond `f64` range.
    /// - [`DrawError::UnsupportedProfile`] if the penalty table cannot price a seat.
    /// - [`DrawError::InfeasibleAssignment`] if no matching avoids forbidden seats.
    /// - [`DrawError::InvariantViolation`] if the collated draw fails verification.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        competitors: &[Competitor],
        rng: &mut R,
    ) -> Result<Draw, DrawError> {
        self.config.validate()?;

        let active: Vec<Competitor> = competitors.iter().filter(|c| c.active).cloned().collect();
        let span = debug_span!(
            "draw",
            competitors = active.len(),
            cost_function = %self.config.cost_function
        );
        let _guard = span.enter();
        debug!(
            inactive = competitors.len() - active.len(),
            "filtered inactive competitors"
        );

        validate_competitors(&active).map_err(DrawError::InvalidInput)?;

        let ranks: Vec<RankScore> = active.iter().map(|c| c.rank).collect();
        let brackets = define_brackets(&ranks)?;
        debug!(
            rooms = brackets.len(),
            pull_ups = brackets.iter().filter(|b| b.has_pull_up()).count(),
            "brackets formed"
        );

        let model = self.config.cost_model();
        let matrix = build_cost_matrix(&active, &brackets, &model)?;
        debug!(dimension = matrix.dimension(), "cost matrix built");

        let matching = solve_shuffled(&matrix, rng)?;
        if !matching.is_feasible() {
            warn!(
                forbidden_cells = matching.forbidden_cells(),
                "assignment forced competitors outside their brackets"
            );
        }
        let matching = matching.into_feasible()?;

        let rooms = collate_rooms(&active, &brackets, &matrix, &matching)?;
        let draw = Draw::new(rooms);
        draw.verify(&active).map_err(DrawError::InvariantViolation)?;

        debug!(
            total_cost = draw.total_cost(),
            total_badness = ?draw.total_badness(),
            "draw generated"
        );
        Ok(draw)
    }
}
