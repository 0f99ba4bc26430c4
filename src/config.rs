//! Draw generation settings.
//!
//! Settings are plain data: build them in code with the `with_*` methods
//! or load them from TOML.
//!
//! ```toml
//! cost_function = "adjusted-variance"
//! exponent = 2.0
//! seed = 42
//! ```

use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::cost::{CostFunctionKind, CostModel};
use crate::error::DrawError;

/// Settings for one draw.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawConfig {
    /// Cost function used to build the matrix.
    pub cost_function: CostFunctionKind,
    /// Optional exponent applied to every seat cost. `None` = identity.
    pub exponent: Option<f64>,
    /// Random seed for the row/column shuffle. `None` = OS entropy.
    pub seed: Option<u64>,
}

impl DrawConfig {
    /// Creates the default configuration (penalty table, no exponent, unseeded).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the cost function.
    pub fn with_cost_function(mut self, kind: CostFunctionKind) -> Self {
        self.cost_function = kind;
        self
    }

    /// Sets the cost exponent.
    pub fn with_exponent(mut self, exponent: f64) -> Self {
        self.exponent = Some(exponent);
        self
    }

    /// Fixes the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parses and validates a TOML configuration.
    ///
    /// Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, DrawError> {
        let config: DrawConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    /// [`DrawError::InvalidConfig`] if the exponent is not finite and positive.
    pub fn validate(&self) -> Result<(), DrawError> {
        if let Some(e) = self.exponent {
            if !e.is_finite() || e <= 0.0 {
                return Err(DrawError::InvalidConfig(format!(
                    "exponent must be finite and positive, got {e}"
                )));
            }
        }
        Ok(())
    }

    /// Resolves the cost function and exponent into a model.
    pub fn cost_model(&self) -> CostModel {
        CostModel::new(self.cost_function).with_optional_exponent(self.exponent)
    }

    /// Random generator for the shuffle: seeded if configured.
    pub fn rng(&self) -> SmallRng {
        match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        }
    }
}
