//! Goal categories and their starting defaults
//!
//! Every per-category fact (label, default target, default horizon) lives in
//! `CATEGORY_TABLE`, in `GoalCategory` declaration order.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What a goal is being saved for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalCategory {
    Retirement,
    Education,
    Home,
    Car,
    Vacation,
    Wedding,
    EmergencyFund,
    WealthCreation,
    Custom,
}

/// One row of the category table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryInfo {
    pub category: GoalCategory,
    pub label: &'static str,
    /// Target amount suggested for a new goal
    pub default_target: Decimal,
    /// Years from creation to the suggested target date
    pub default_years: u32,
}

/// Category table, in `GoalCategory` declaration order
pub const CATEGORY_TABLE: [CategoryInfo; 9] = [
    CategoryInfo {
        category: GoalCategory::Retirement,
        label: "Retirement",
        default_target: dec!(10000000),
        default_years: 25,
    },
    CategoryInfo {
        category: GoalCategory::Education,
        label: "Education",
        default_target: dec!(2500000),
        default_years: 15,
    },
    CategoryInfo {
        category: GoalCategory::Home,
        label: "Home",
        default_target: dec!(1000000),
        default_years: 5,
    },
    CategoryInfo {
        category: GoalCategory::Car,
        label: "Car",
        default_target: dec!(500000),
        default_years: 3,
    },
    CategoryInfo {
        category: GoalCategory::Vacation,
        label: "Vacation",
        default_target: dec!(200000),
        default_years: 1,
    },
    CategoryInfo {
        category: GoalCategory::Wedding,
        label: "Wedding",
        default_target: dec!(1500000),
        default_years: 3,
    },
    CategoryInfo {
        category: GoalCategory::EmergencyFund,
        label: "Emergency Fund",
        default_target: dec!(300000),
        default_years: 1,
    },
    CategoryInfo {
        category: GoalCategory::WealthCreation,
        label: "Wealth Creation",
        default_target: dec!(5000000),
        default_years: 10,
    },
    CategoryInfo {
        category: GoalCategory::Custom,
        label: "Custom",
        default_target: dec!(100000),
        default_years: 5,
    },
];

impl GoalCategory {
    /// All categories, in table order
    pub const ALL: [GoalCategory; 9] = [
        GoalCategory::Retirement,
        GoalCategory::Education,
        GoalCategory::Home,
        GoalCategory::Car,
        GoalCategory::Vacation,
        GoalCategory::Wedding,
        GoalCategory::EmergencyFund,
        GoalCategory::WealthCreation,
        GoalCategory::Custom,
    ];

    /// Table row for this category
    pub fn info(&self) -> &'static CategoryInfo {
        &CATEGORY_TABLE[*self as usize]
    }

    pub fn label(&self) -> &'static str {
        self.info().label
    }

    pub fn default_target(&self) -> Decimal {
        self.info().default_target
    }

    pub fn default_years(&self) -> u32 {
        self.info().default_years
    }
}

impl fmt::Display for GoalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
