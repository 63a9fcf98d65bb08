//! Family Domain - Household portfolio aggregation
//!
//! Only linked members count towards the family totals. Unlinked members stay
//! visible in the member list with a zero contribution share.

pub mod member;
pub mod portfolio;
pub mod aggregator;

pub use member::{FamilyMember, Relationship};
pub use portfolio::{FamilyPortfolio, MemberSummary};
pub use aggregator::{aggregate, FamilyAggregator};
pub use core_kernel::{MemberId, ValidationError};
