//! Product lines and product-specific coverage/asset detail
//!
//! The book of business carries two product lines. What is covered and what
//! is insured differ per line, so both travel together in [`ProductDetail`]:
//! the coverage shape can never disagree with the asset shape or the product.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Product lines sold by the organisation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductLine {
    Motor,
    Home,
}

impl ProductLine {
    /// All product lines, in reference order
    pub const ALL: [ProductLine; 2] = [ProductLine::Motor, ProductLine::Home];
}

impl fmt::Display for ProductLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductLine::Motor => write!(f, "Motor"),
            ProductLine::Home => write!(f, "Home"),
        }
    }
}

/// Motor policy coverage flags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotorCoverage {
    /// Cover level, e.g. "Comprehensive" or "Third Party, Fire & Theft"
    pub cover: String,
    pub windscreen: bool,
    pub courtesy_car: bool,
    pub personal_injury: bool,
}

/// Home policy coverage flags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeCoverage {
    pub buildings: bool,
    pub contents: bool,
    pub accidental_damage: bool,
    pub home_emergency: bool,
}

/// The insured vehicle on a motor policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleAsset {
    /// UK registration mark, e.g. "LK65 ZRT"
    pub registration: String,
    pub make: String,
    pub model: String,
    pub year: i32,
}

/// The insured property on a home policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyAsset {
    /// e.g. "Semi-detached", "Terraced"
    pub property_type: String,
    pub year_built: i32,
    pub bedrooms: u8,
}

/// Product-specific policy detail, keyed by product line
///
/// A discriminated union: the coverage and asset variants are selected
/// together by the product, enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "product")]
pub enum ProductDetail {
    Motor {
        coverage: MotorCoverage,
        vehicle: VehicleAsset,
    },
    Home {
        coverage: HomeCoverage,
        property: PropertyAsset,
    },
}

impl ProductDetail {
    /// The product line this detail belongs to
    pub fn product(&self) -> ProductLine {
        match self {
            ProductDetail::Motor { .. } => ProductLine::Motor,
            ProductDetail::Home { .. } => ProductLine::Home,
        }
    }

    /// Short description of the insured asset for list rendering
    pub fn asset_summary(&self) -> String {
        match self {
            ProductDetail::Motor { vehicle, .. } => format!(
                "{} {} ({}) {}",
                vehicle.make, vehicle.model, vehicle.year, vehicle.registration
            ),
            ProductDetail::Home { property, .. } => format!(
                "{}, {} bed, built {}",
                property.property_type, property.bedrooms, property.year_built
            ),
        }
    }
}
