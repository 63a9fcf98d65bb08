//! Core Kernel - Foundational types shared by the portfolio engine
//!
//! This crate provides the building blocks used across all domain modules:
//! - Decimal amount helpers and the `Rate` value object
//! - Calendar month arithmetic for projection horizons
//! - Strongly-typed identifiers
//! - The single `ValidationError` taxonomy returned by every engine operation

pub mod money;
pub mod temporal;
pub mod identifiers;
pub mod error;

pub use money::{
    Rate, round_currency, round_currency_up, percentage_of, share_of, ensure_non_negative, ensure_positive,
    CURRENCY_PRECISION,
};
pub use temporal::{months_between, MonthSpan};
pub use identifiers::{HoldingId, GoalId, MemberId, ClientId};
pub use error::ValidationError;
