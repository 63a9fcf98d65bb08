//! Household composite

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::member::FamilyMember;

/// A member together with their figures relative to the household
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberSummary {
    pub member: FamilyMember,
    pub returns: Decimal,
    pub returns_percentage: Decimal,
    /// Share of the family value in percent; always zero for unlinked members
    pub contribution_percentage: Decimal,
}

/// Family totals over linked members
///
/// Unlinked members are still listed in `members` but take no part in any total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyPortfolio {
    pub members: Vec<MemberSummary>,
    pub total_value: Decimal,
    pub total_invested: Decimal,
    pub total_returns: Decimal,
    pub returns_percentage: Decimal,
    /// Value-weighted average of linked members' XIRR, in percent
    pub composite_xirr: Decimal,
    pub linked_member_count: usize,
}

impl FamilyPortfolio {
    /// A household with no members
    pub fn empty() -> Self {
        Self {
            members: Vec::new(),
            total_value: Decimal::ZERO,
            total_invested: Decimal::ZERO,
            total_returns: Decimal::ZERO,
            returns_percentage: Decimal::ZERO,
            composite_xirr: Decimal::ZERO,
            linked_member_count: 0,
        }
    }

    pub fn linked_members(&self) -> impl Iterator<Item = &MemberSummary> {
        self.members.iter().filter(|summary| summary.member.is_linked)
    }

    pub fn head(&self) -> Option<&MemberSummary> {
        self.members.iter().find(|summary| summary.member.is_head)
    }

    /// Sum of linked contribution percentages; 100 whenever the family holds any value
    pub fn contribution_total(&self) -> Decimal {
        self.members.iter().map(|summary| summary.contribution_percentage).sum()
    }
}

impl Default for FamilyPortfolio {
    fn default() -> Self {
        Self::empty()
    }
}
