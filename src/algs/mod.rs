//! Round stages and the round driver.
//!
//! Each stage is a pure function over an explicit snapshot:
//! [`weights`] → [`aggregate`] → [`select`] → [`anchor_policy`].
//! [`superstep`] composes them over a partition plan.

pub mod aggregate;
pub mod anchor_policy;
pub mod select;
pub mod superstep;
pub mod weights;

pub use aggregate::{LabelScores, aggregate, aggregate_partition};
pub use anchor_policy::{apply_anchor_policy, reanchor};
pub use select::{select_label, select_labels};
pub use superstep::{RoundStats, propagate, run_stages, superstep};
pub use weights::{EffectiveWeights, adjust_weights, effective_weight};
