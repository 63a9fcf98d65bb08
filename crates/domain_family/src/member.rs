//! Family member portfolios

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{ensure_non_negative, percentage_of, MemberId, ValidationError};

/// How a member relates to the account holder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relationship {
    #[serde(rename = "Self")]
    Myself,
    Spouse,
    Child,
    Parent,
    Sibling,
    Other,
}

impl Relationship {
    pub fn label(&self) -> &'static str {
        match self {
            Relationship::Myself => "Self",
            Relationship::Spouse => "Spouse",
            Relationship::Child => "Child",
            Relationship::Parent => "Parent",
            Relationship::Sibling => "Sibling",
            Relationship::Other => "Other",
        }
    }
}

impl std::fmt::Display for Relationship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One member's portfolio as seen by the household
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyMember {
    pub id: MemberId,
    pub name: String,
    pub relationship: Relationship,
    /// Current market value
    pub portfolio_value: Decimal,
    /// Total amount invested
    pub invested_amount: Decimal,
    /// Annualised return in percent, supplied by the caller
    pub xirr: Decimal,
    /// Whether this portfolio counts towards the family totals
    pub is_linked: bool,
    /// Head of the family
    #[serde(default)]
    pub is_head: bool,
}

impl FamilyMember {
    /// Creates a linked, non-head member
    pub fn new(
        name: impl Into<String>,
        relationship: Relationship,
        portfolio_value: Decimal,
        invested_amount: Decimal,
        xirr: Decimal,
    ) -> Self {
        Self {
            id: MemberId::new_v7(),
            name: name.into(),
            relationship,
            portfolio_value,
            invested_amount,
            xirr,
            is_linked: true,
            is_head: false,
        }
    }

    pub fn unlinked(mut self) -> Self {
        self.is_linked = false;
        self
    }

    pub fn as_head(mut self) -> Self {
        self.is_head = true;
        self
    }

    /// Rejects negative value or invested amounts
    pub fn validate(&self) -> Result<(), ValidationError> {
        ensure_non_negative("portfolio_value", self.portfolio_value)?;
        ensure_non_negative("invested_amount", self.invested_amount)?;
        Ok(())
    }

    /// Value minus invested; negative for a loss
    pub fn returns(&self) -> Decimal {
        self.portfolio_value - self.invested_amount
    }

    /// Returns relative to invested, in percent; zero when nothing is invested
    pub fn returns_percentage(&self) -> Decimal {
        percentage_of(self.returns(), self.invested_amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_member_returns() {
        let member = FamilyMember::new("Priya", Relationship::Spouse, dec!(850000), dec!(700000), dec!(15.2));
        assert_eq!(member.returns(), dec!(150000));
        assert_eq!(member.returns_percentage().round_dp(2), dec!(21.43));
    }

    #[test]
    fn test_zero_invested_returns_percentage() {
        let member = FamilyMember::new("Aarav", Relationship::Child, dec!(0), dec!(0), dec!(0));
        assert_eq!(member.returns_percentage(), Decimal::ZERO);
    }

    #[test]
    fn test_relationship_serde() {
        let json = serde_json::to_string(&Relationship::Myself).unwrap();
        assert_eq!(json, "\"Self\"");
        let parsed: Relationship = serde_json::from_str("\"Sibling\"").unwrap();
        assert_eq!(parsed, Relationship::Sibling);
    }

    #[test]
    fn test_negative_value_rejected() {
        let member = FamilyMember::new("Raj", Relationship::Myself, dec!(-1), dec!(0), dec!(0));
        assert!(matches!(
            member.validate(),
            Err(ValidationError::Negative { field: "portfolio_value", .. })
        ));
    }
}
