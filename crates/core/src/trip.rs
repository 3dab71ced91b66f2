//! Trip cost arithmetic.
//!
//! A user's total cost is always the sum of the three component costs.
//! It is recomputed on create and on itinerary copy, never on a plain
//! merge update.

use crate::error::CoreError;
use crate::types::Amount;

/// The three cost components that make up a trip.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TripCosts {
    pub flight: Amount,
    pub hotel: Amount,
    pub itinerary: Amount,
}

impl TripCosts {
    pub fn total(&self) -> Amount {
        self.flight + self.hotel + self.itinerary
    }

    /// Reject negative or non-finite components before anything is persisted.
    pub fn validate(&self) -> Result<(), CoreError> {
        for (label, value) in [
            ("flight_cost", self.flight),
            ("hotel_cost", self.hotel),
            ("itinerary_cost", self.itinerary),
        ] {
            if !value.is_finite() {
                return Err(CoreError::Validation(format!(
                    "{label} must be a finite number"
                )));
            }
            if value < 0.0 {
                return Err(CoreError::Validation(format!(
                    "{label} must not be negative, got {value}"
                )));
            }
        }
        Ok(())
    }
}
