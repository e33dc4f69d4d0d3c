//! Itinerary categorization and ordering.
//!
//! Tags the globally fastest itinerary (and, among the rest, the
//! cheapest) and orders the result list per the requested sort mode.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::domain::Itinerary;

/// Category label for a ranked itinerary.
///
/// Categories are exclusive and the time check takes priority: an
/// itinerary that is both time-minimal and price-minimal is tagged
/// `Fastest`, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Fastest,
    Cheapest,
}

/// Requested ordering on total price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum PriceOrder {
    #[serde(rename = "price_asc")]
    Ascending,
    #[serde(rename = "price_desc")]
    Descending,
}

/// Requested ordering on first-leg departure time.
///
/// Takes precedence over [`PriceOrder`] when both are set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum TimeOrder {
    #[serde(rename = "time_asc")]
    Ascending,
    #[serde(rename = "time_desc")]
    Descending,
}

/// The full requested result ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResultOrder {
    pub by_price: Option<PriceOrder>,
    pub by_time: Option<TimeOrder>,
}

/// An itinerary with its category label.
#[derive(Debug, Clone)]
pub struct RankedItinerary {
    pub itinerary: Itinerary,
    pub category: Option<Category>,
}

/// Assign category labels across a set of completed itineraries.
///
/// Every itinerary whose total time equals the minimum is tagged
/// `Fastest` (ties included). Of the remainder, those whose total price
/// equals the minimum price are tagged `Cheapest`. Everything else is
/// left uncategorized. Input order is preserved.
pub fn categorize(itineraries: Vec<Itinerary>) -> Vec<RankedItinerary> {
    if itineraries.is_empty() {
        return Vec::new();
    }

    let fastest_time = itineraries
        .iter()
        .map(Itinerary::total_time_hours)
        .fold(f64::INFINITY, f64::min);
    let cheapest_price = itineraries
        .iter()
        .map(Itinerary::total_price)
        .fold(f64::INFINITY, f64::min);

    itineraries
        .into_iter()
        .map(|itinerary| {
            let category = if itinerary.total_time_hours() == fastest_time {
                Some(Category::Fastest)
            } else if itinerary.total_price() == cheapest_price {
                Some(Category::Cheapest)
            } else {
                None
            };
            RankedItinerary {
                itinerary,
                category,
            }
        })
        .collect()
}

fn category_rank(category: Option<Category>) -> u8 {
    match category {
        Some(Category::Fastest) => 0,
        Some(Category::Cheapest) => 1,
        None => 2,
    }
}

/// Compare first-leg departures; itineraries without a first leg sort
/// after everything else in either direction.
fn compare_departures(
    a: &RankedItinerary,
    b: &RankedItinerary,
    direction: TimeOrder,
) -> Ordering {
    match (
        a.itinerary.first_departure(),
        b.itinerary.first_departure(),
    ) {
        (Some(x), Some(y)) => match direction {
            TimeOrder::Ascending => x.cmp(&y),
            TimeOrder::Descending => y.cmp(&x),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Apply the requested ordering in strict precedence: time mode wins
/// over price mode; with neither set, sort by category rank then total
/// price ascending. All sorts are stable, so ties keep their discovery
/// order.
pub fn order_results(results: &mut [RankedItinerary], order: &ResultOrder) {
    if let Some(by_time) = order.by_time {
        results.sort_by(|a, b| compare_departures(a, b, by_time));
        return;
    }

    if let Some(by_price) = order.by_price {
        results.sort_by(|a, b| {
            let cmp = a.itinerary.total_price().total_cmp(&b.itinerary.total_price());
            match by_price {
                PriceOrder::Ascending => cmp,
                PriceOrder::Descending => cmp.reverse(),
            }
        });
        return;
    }

    results.sort_by(|a, b| {
        category_rank(a.category)
            .cmp(&category_rank(b.category))
            .then_with(|| {
                a.itinerary
                    .total_price()
                    .total_cmp(&b.itinerary.total_price())
            })
    });
}

/// Categorize and order in one step.
pub fn rank_results(itineraries: Vec<Itinerary>, order: &ResultOrder) -> Vec<RankedItinerary> {
    let mut results = categorize(itineraries);
    order_results(&mut results, order);
    results
}
