//! Product catalog for refrigerated cargo.
//!
//! Every product carries the lowest storage temperature (°C) it tolerates.
//! The lookup is an exhaustive `match`, so adding a product without a
//! temperature entry is a compile error rather than a silent default.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Cargo products that can travel in a refrigerated container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductType {
    Bananas,
    Chocolate,
    Fish,
    Meat,
    IceCream,
    FrozenPizza,
    Cheese,
    Sausage,
    Butter,
    Eggs,
}

impl ProductType {
    /// All products in catalog order.
    pub const ALL: [ProductType; 10] = [
        ProductType::Bananas,
        ProductType::Chocolate,
        ProductType::Fish,
        ProductType::Meat,
        ProductType::IceCream,
        ProductType::FrozenPizza,
        ProductType::Cheese,
        ProductType::Sausage,
        ProductType::Butter,
        ProductType::Eggs,
    ];

    /// Lowest storage temperature in degrees Celsius.
    pub fn required_min_temperature(self) -> f64 {
        match self {
            ProductType::Bananas => 13.3,
            ProductType::Chocolate => 18.0,
            ProductType::Fish => 2.0,
            ProductType::Meat => -15.0,
            ProductType::IceCream => -18.0,
            ProductType::FrozenPizza => -30.0,
            ProductType::Cheese => 7.2,
            ProductType::Sausage => 5.0,
            ProductType::Butter => 20.5,
            ProductType::Eggs => 19.0,
        }
    }

    /// Stable kebab-case name, matching the serde representation.
    pub fn name(self) -> &'static str {
        match self {
            ProductType::Bananas => "bananas",
            ProductType::Chocolate => "chocolate",
            ProductType::Fish => "fish",
            ProductType::Meat => "meat",
            ProductType::IceCream => "ice-cream",
            ProductType::FrozenPizza => "frozen-pizza",
            ProductType::Cheese => "cheese",
            ProductType::Sausage => "sausage",
            ProductType::Butter => "butter",
            ProductType::Eggs => "eggs",
        }
    }
}

/// Free-function form of [`ProductType::required_min_temperature`].
pub fn required_min_temperature(product: ProductType) -> f64 {
    product.required_min_temperature()
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProductType {
    type Err = Error;

    /// Parse a product name, ignoring case and `-`/`_`/space separators.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = normalize_name(s);
        ProductType::ALL
            .into_iter()
            .find(|product| normalize_name(product.name()) == wanted)
            .ok_or_else(|| Error::UnknownProduct {
                name: s.trim().to_string(),
            })
    }
}

fn normalize_name(name: &str) -> String {
    name.trim()
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Catalog row used by report renderers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductSummary {
    pub product: ProductType,
    pub min_temperature_c: f64,
}

/// The full catalog in order.
pub fn catalog() -> Vec<ProductSummary> {
    ProductType::ALL
        .into_iter()
        .map(|product| ProductSummary {
            product,
            min_temperature_c: product.required_min_temperature(),
        })
        .collect()
}
