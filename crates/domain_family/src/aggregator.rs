//! Rolls member portfolios up into a [`FamilyPortfolio`]

use rust_decimal::Decimal;
use tracing::debug;

use core_kernel::{percentage_of, share_of, ValidationError};

use crate::member::FamilyMember;
use crate::portfolio::{FamilyPortfolio, MemberSummary};

/// Combines linked members' figures into one household composite
#[derive(Debug, Clone, Copy, Default)]
pub struct FamilyAggregator;

impl FamilyAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Aggregates `members`, keeping their order
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Negative` if any member, linked or not, carries a
    /// negative portfolio value or invested amount.
    pub fn aggregate(&self, members: &[FamilyMember]) -> Result<FamilyPortfolio, ValidationError> {
        for member in members {
            member.validate()?;
        }

        let linked: Vec<&FamilyMember> = members.iter().filter(|m| m.is_linked).collect();
        let total_value: Decimal = linked.iter().map(|m| m.portfolio_value).sum();
        let total_invested: Decimal = linked.iter().map(|m| m.invested_amount).sum();
        let total_returns = total_value - total_invested;

        let composite_xirr: Decimal = linked
            .iter()
            .map(|m| m.xirr * share_of(m.portfolio_value, total_value))
            .sum();

        let summaries = members
            .iter()
            .map(|member| MemberSummary {
                returns: member.returns(),
                returns_percentage: member.returns_percentage(),
                contribution_percentage: if member.is_linked {
                    percentage_of(member.portfolio_value, total_value)
                } else {
                    Decimal::ZERO
                },
                member: member.clone(),
            })
            .collect();

        debug!(
            members = members.len(),
            linked = linked.len(),
            total_value = %total_value,
            composite_xirr = %composite_xirr,
            "family aggregated"
        );

        Ok(FamilyPortfolio {
            members: summaries,
            total_value,
            total_invested,
            total_returns,
            returns_percentage: percentage_of(total_returns, total_invested),
            composite_xirr,
            linked_member_count: linked.len(),
        })
    }
}

/// Aggregates `members` into a household composite
pub fn aggregate(members: &[FamilyMember]) -> Result<FamilyPortfolio, ValidationError> {
    FamilyAggregator::new().aggregate(members)
}
