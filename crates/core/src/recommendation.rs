//! Itinerary recommendation selection.
//!
//! Two tiers: itineraries in the user's origin city win outright, in
//! collection order and regardless of rating. When none match, the single
//! highest-rated itinerary across the whole collection is returned, with
//! the earliest record winning ties.

use crate::error::CoreError;
use crate::types::Amount;

/// Anything that can be matched by city and ranked by rating.
pub trait Rated {
    fn city_name(&self) -> &str;
    fn rating(&self) -> Amount;
}

/// Outcome of [`recommend`].
#[derive(Debug, Clone, PartialEq)]
pub enum Recommendation<T> {
    /// Every itinerary located in the origin city, in collection order.
    SameCity(Vec<T>),
    /// Fallback: the highest-rated itinerary overall.
    TopRated(T),
}

impl<T> Recommendation<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Recommendation::SameCity(items) => items,
            Recommendation::TopRated(item) => vec![item],
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Recommendation::TopRated(_))
    }
}

/// Pick recommendations for a user whose flight departs from `origin`.
///
/// A user without an origin never matches the first tier.
pub fn recommend<T: Rated>(
    origin: Option<&str>,
    itineraries: Vec<T>,
) -> Result<Recommendation<T>, CoreError> {
    if itineraries.is_empty() {
        return Err(CoreError::EmptyCollection("itineraries"));
    }

    if let Some(origin) = origin {
        if itineraries.iter().any(|it| it.city_name() == origin) {
            let same_city = itineraries
                .into_iter()
                .filter(|it| it.city_name() == origin)
                .collect();
            return Ok(Recommendation::SameCity(same_city));
        }
    }

    top_rated(itineraries)
        .map(Recommendation::TopRated)
        .ok_or(CoreError::EmptyCollection("itineraries"))
}

/// The first record holding the maximum rating. `None` only for an empty input.
pub fn top_rated<T: Rated>(itineraries: Vec<T>) -> Option<T> {
    itineraries.into_iter().fold(None, |best, candidate| match best {
        Some(current) if candidate.rating() <= current.rating() => Some(current),
        Some(current) if candidate.rating().is_nan() => Some(current),
        _ => Some(candidate),
    })
}
