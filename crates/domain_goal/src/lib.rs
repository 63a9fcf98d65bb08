//! Goal Domain - Savings goal projection
//!
//! Projects a goal's corpus to its target date from a monthly SIP and the
//! amount already saved, and works out how far off track it is:
//!
//! ```text
//! sip   = P * (((1 + r)^n - 1) / r) * (1 + r)      r = annual / 12, n = months
//! lump  = C * (1 + annual)^(n / 12)
//! total = sip + lump
//! ```

pub mod category;
pub mod goal;
pub mod planner;
pub mod projection;

pub use category::{CategoryInfo, GoalCategory, CATEGORY_TABLE};
pub use goal::Goal;
pub use planner::{
    annuity_due_factor, lump_sum_future_value, required_monthly_contribution, sip_future_value,
};
pub use projection::{project, GoalProjection, GoalProjector, ProjectionHorizon};
pub use core_kernel::{Rate, ValidationError};
