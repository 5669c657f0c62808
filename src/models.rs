//! Domain models that mirror the `items` table. These stay plain data holders
//! so the repository and the console loop can pass them around freely.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
/// A single inventory record. The `id` is chosen by the operator and never
/// generated by storage.
pub struct Item {
    /// Primary key supplied by the operator.
    pub id: i64,
    pub name: String,
    pub price: f64,
    /// Stock on hand. Negative values are accepted.
    pub quantity: i64,
    /// Checked against `[1900, current year]` when entered, not by storage.
    pub release_year: i32,
}

impl fmt::Display for Item {
    /// Listing format: `id name price quantity year`, price to two decimals.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {:.2} {} {}",
            self.id, self.name, self.price, self.quantity, self.release_year
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Everything an update overwrites. The id is passed separately so it can
/// never change.
pub struct ItemFields {
    pub name: String,
    pub price: f64,
    pub quantity: i64,
    pub release_year: i32,
}

impl ItemFields {
    /// Attach an id, producing a full record.
    pub fn with_id(self, id: i64) -> Item {
        Item {
            id,
            name: self.name,
            price: self.price,
            quantity: self.quantity,
            release_year: self.release_year,
        }
    }
}
