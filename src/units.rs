// ABOUTME: Weight unit handling with kg/lbs conversion and display rounding
// ABOUTME: Provides the conversion factor used by the database-wide batch conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog

use serde::{Deserialize, Serialize};

/// Pounds per kilogram
pub const KG_TO_LBS: f64 = 2.204_62;

/// Display unit for weights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    /// Kilograms
    Kg,
    /// Pounds (default)
    #[default]
    Lbs,
}

impl WeightUnit {
    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Kg => "kg",
            Self::Lbs => "lbs",
        }
    }

    /// Parse from database string representation
    ///
    /// Unknown values fall back to the default (`lbs`).
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "kg" => Self::Kg,
            _ => Self::Lbs,
        }
    }

    /// The other unit
    #[must_use]
    pub const fn toggled(&self) -> Self {
        match self {
            Self::Kg => Self::Lbs,
            Self::Lbs => Self::Kg,
        }
    }
}

impl std::fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Convert a kilogram value into the given display unit, rounded to one
/// decimal place for pounds
#[must_use]
pub fn to_display(kg: f64, unit: WeightUnit) -> f64 {
    match unit {
        WeightUnit::Kg => kg,
        WeightUnit::Lbs => (kg * KG_TO_LBS * 10.0).round() / 10.0,
    }
}

/// Convert a value in the given display unit back into kilograms, rounded
/// to two decimal places
#[must_use]
pub fn to_kg(value: f64, unit: WeightUnit) -> f64 {
    match unit {
        WeightUnit::Kg => value,
        WeightUnit::Lbs => ((value / KG_TO_LBS) * 100.0).round() / 100.0,
    }
}

/// Multiplier applied to stored weights when switching display units
///
/// Identity when the units match.
#[must_use]
pub fn conversion_factor(from: WeightUnit, to: WeightUnit) -> f64 {
    match (from, to) {
        (WeightUnit::Kg, WeightUnit::Lbs) => KG_TO_LBS,
        (WeightUnit::Lbs, WeightUnit::Kg) => 1.0 / KG_TO_LBS,
        _ => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_rounds_lbs_to_one_decimal() {
        assert!((to_display(100.0, WeightUnit::Lbs) - 220.5).abs() < f64::EPSILON);
        assert!((to_display(100.0, WeightUnit::Kg) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn to_kg_rounds_to_two_decimals() {
        assert!((to_kg(225.0, WeightUnit::Lbs) - 102.06).abs() < f64::EPSILON);
        assert!((to_kg(80.0, WeightUnit::Kg) - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn conversion_factor_round_trips() {
        let there = conversion_factor(WeightUnit::Kg, WeightUnit::Lbs);
        let back = conversion_factor(WeightUnit::Lbs, WeightUnit::Kg);
        assert!((there * back - 1.0).abs() < 1e-12);
        assert!((conversion_factor(WeightUnit::Kg, WeightUnit::Kg) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn parse_falls_back_to_lbs() {
        assert_eq!(WeightUnit::parse("kg"), WeightUnit::Kg);
        assert_eq!(WeightUnit::parse("stone"), WeightUnit::Lbs);
    }
}
