//! BFS itinerary search algorithm.
//!
//! Explores the route graph breadth-first over flight legs (not cities)
//! to produce all valid simple paths from origin to destination,
//! honoring layover and via-city constraints.

use std::collections::{HashSet, VecDeque};
use std::sync::Arc;

use chrono::{Duration, NaiveDateTime};
use tracing::debug;

use crate::domain::{City, Flight, Itinerary};
use crate::repository::{FlightRepository, RepositoryError};

use super::config::SearchConfig;
use super::graph::RouteGraph;
use super::rank::{RankedItinerary, ResultOrder, rank_results};

/// Error from itinerary search.
///
/// No error conditions originate inside the search itself; an empty or
/// unreachable network simply yields zero itineraries.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The flight repository failed to produce candidates
    #[error("failed to fetch candidate flights: {0}")]
    Repository(#[from] RepositoryError),
}

/// Criteria for an itinerary search.
#[derive(Debug, Clone)]
pub struct SearchCriteria {
    /// Origin city.
    pub from_city: City,

    /// Destination city.
    pub to_city: City,

    /// Start of the inclusive departure window.
    pub date_from: NaiveDateTime,

    /// End of the inclusive departure window.
    pub date_to: NaiveDateTime,

    /// Seats required on every leg.
    pub passengers: u32,

    /// City that must appear somewhere in the visited sequence.
    pub via_city: Option<City>,
}

/// Result of itinerary search, before ranking.
#[derive(Debug)]
pub struct SearchOutcome {
    /// Completed itineraries in discovery order.
    pub itineraries: Vec<Itinerary>,

    /// Number of queue states processed during search.
    pub states_explored: usize,
}

/// BFS state: a partial path under construction.
///
/// States are immutable once enqueued; expansion produces a fresh
/// extended state rather than mutating a shared one.
#[derive(Debug, Clone)]
struct SearchState {
    /// Cities visited so far, origin first.
    path: Vec<City>,

    /// Legs taken so far.
    legs: Vec<Arc<Flight>>,

    /// Accumulated flight plus layover time (hours).
    total_time_hours: f64,
}

impl SearchState {
    fn origin(from_city: &City) -> Self {
        SearchState {
            path: vec![from_city.clone()],
            legs: Vec::new(),
            total_time_hours: 0.0,
        }
    }

    fn current_city(&self) -> &City {
        // Safe: the path starts with the origin and only grows
        self.path.last().unwrap()
    }

    fn extend(&self, flight: &Arc<Flight>, layover_hours: f64) -> Self {
        let mut path = self.path.clone();
        path.push(flight.arrival_city().clone());

        let mut legs = self.legs.clone();
        legs.push(Arc::clone(flight));

        SearchState {
            path,
            legs,
            total_time_hours: self.total_time_hours + flight.duration_hours() + layover_hours,
        }
    }
}

/// Search for all valid itineraries matching the criteria.
///
/// Fetches candidate flights from the repository (window and seat
/// filtering happen there), builds the route graph and runs a FIFO
/// work-queue BFS over partial paths. A branch completes when it
/// reaches the destination; it is never expanded further. A required
/// via-city absent from a completed branch discards that branch.
///
/// Expansion is bounded by a global visited set: only the first branch
/// to dequeue a given city expands its departures, later branches
/// arriving there are dropped. This is a deliberate pruning trade-off
/// that can suppress alternate paths through an already-expanded city.
pub fn search_itineraries<R: FlightRepository + ?Sized>(
    repository: &R,
    criteria: &SearchCriteria,
    config: &SearchConfig,
) -> Result<SearchOutcome, SearchError> {
    let candidates = repository.fetch_candidate_flights(
        criteria.date_from,
        criteria.date_to,
        criteria.passengers,
    )?;
    let graph = RouteGraph::build(candidates);

    let mut queue: VecDeque<SearchState> = VecDeque::new();
    queue.push_back(SearchState::origin(&criteria.from_city));

    let mut visited: HashSet<City> = HashSet::new();
    let mut completed: Vec<Itinerary> = Vec::new();
    let mut states_explored = 0usize;

    while let Some(state) = queue.pop_front() {
        states_explored += 1;
        let current = state.current_city().clone();

        if current == criteria.to_city {
            if let Some(via) = &criteria.via_city {
                if !state.path.contains(via) {
                    continue;
                }
            }
            // Completed branches are never expanded past the destination.
            // Safe: extend() keeps path and legs in lockstep, so the
            // itinerary invariants hold by construction
            let itinerary = Itinerary::new(state.path, state.legs, state.total_time_hours)
                .expect("search state produced a disconnected itinerary");
            completed.push(itinerary);
            continue;
        }

        // Only the first branch to dequeue a city expands its departures
        if !visited.insert(current.clone()) {
            continue;
        }

        for flight in graph.departures_from(&current) {
            // No cycles: never revisit a city already on this path
            if state.path.contains(flight.arrival_city()) {
                continue;
            }

            let mut layover_hours = 0.0;
            if let Some(prev) = state.legs.last() {
                let gap = flight
                    .departure_time()
                    .signed_duration_since(prev.arrival_time());
                if gap < Duration::zero() {
                    // Cannot board before the inbound leg has landed
                    continue;
                }
                if gap > config.max_layover() {
                    continue;
                }
                layover_hours = gap.num_seconds() as f64 / 3600.0;
            }

            queue.push_back(state.extend(flight, layover_hours));
        }
    }

    debug!(
        from = %criteria.from_city,
        to = %criteria.to_city,
        itineraries = completed.len(),
        states_explored,
        "itinerary search complete"
    );

    Ok(SearchOutcome {
        itineraries: completed,
        states_explored,
    })
}

/// Search and rank in one call.
///
/// This is the outward-facing operation: it produces the final list of
/// tagged, ordered itineraries ready for serialization.
pub fn search_ranked<R: FlightRepository + ?Sized>(
    repository: &R,
    criteria: &SearchCriteria,
    order: &ResultOrder,
    config: &SearchConfig,
) -> Result<Vec<RankedItinerary>, SearchError> {
    let outcome = search_itineraries(repository, criteria, config)?;
    Ok(rank_results(outcome.itineraries, order))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::rank::{Category, PriceOrder, TimeOrder};
    use crate::repository::InMemoryFlightRepository;

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
    }

    fn city(name: &str) -> City {
        City::new(name)
    }

    fn flight(
        id: i64,
        from: &str,
        to: &str,
        dep: &str,
        arr: &str,
        price: f64,
        total: u32,
        booked: u32,
    ) -> Flight {
        Flight::new(
            id,
            city(from),
            city(to),
            dt(dep),
            dt(arr),
            price,
            total,
            booked,
        )
        .unwrap()
    }

    fn repo(flights: Vec<Flight>) -> InMemoryFlightRepository {
        let repo = InMemoryFlightRepository::new();
        for f in flights {
            repo.insert(f);
        }
        repo
    }

    /// June 2026 window, one passenger, no via-city.
    fn criteria(from: &str, to: &str) -> SearchCriteria {
        SearchCriteria {
            from_city: city(from),
            to_city: city(to),
            date_from: dt("2026-06-01 00:00"),
            date_to: dt("2026-06-30 23:59"),
            passengers: 1,
            via_city: None,
        }
    }

    fn search(repo: &InMemoryFlightRepository, criteria: &SearchCriteria) -> Vec<Itinerary> {
        search_itineraries(repo, criteria, &SearchConfig::default())
            .unwrap()
            .itineraries
    }

    #[test]
    fn direct_flight_single_result() {
        let repo = repo(vec![flight(
            1,
            "Berlin",
            "Prague",
            "2026-06-01 10:00",
            "2026-06-01 13:00",
            500.0,
            100,
            0,
        )]);

        let ranked = search_ranked(
            &repo,
            &criteria("Berlin", "Prague"),
            &ResultOrder::default(),
            &SearchConfig::default(),
        )
        .unwrap();

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].category, Some(Category::Fastest));
        let itinerary = &ranked[0].itinerary;
        assert_eq!(itinerary.leg_count(), 1);
        assert_eq!(
            itinerary.path(),
            &[city("Berlin"), city("Prague")]
        );
        assert_eq!(itinerary.total_time_hours(), 3.0);
        assert_eq!(itinerary.total_price(), 500.0);
    }

    #[test]
    fn no_route_returns_empty() {
        let repo = repo(vec![flight(
            1,
            "Berlin",
            "Prague",
            "2026-06-01 10:00",
            "2026-06-01 13:00",
            500.0,
            100,
            0,
        )]);

        assert!(search(&repo, &criteria("Berlin", "Oslo")).is_empty());
        assert!(search(&repo, &criteria("Oslo", "Prague")).is_empty());
    }

    #[test]
    fn empty_repository_returns_empty() {
        let repo = InMemoryFlightRepository::new();
        assert!(search(&repo, &criteria("Berlin", "Prague")).is_empty());
    }

    #[test]
    fn connection_accumulates_layover_time() {
        // Berlin -> Prague 10:00-12:00 (2h), Prague -> Vienna
        // 14:00-15:00 (1h), layover 2h: total 5h.
        let repo = repo(vec![
            flight(1, "Berlin", "Prague", "2026-06-01 10:00", "2026-06-01 12:00", 80.0, 100, 0),
            flight(2, "Prague", "Vienna", "2026-06-01 14:00", "2026-06-01 15:00", 60.0, 100, 0),
        ]);

        let found = search(&repo, &criteria("Berlin", "Vienna"));

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].total_time_hours(), 5.0);
        assert_eq!(found[0].total_price(), 140.0);
        assert_eq!(
            found[0].path(),
            &[city("Berlin"), city("Prague"), city("Vienna")]
        );
    }

    #[test]
    fn layover_over_cap_is_pruned() {
        // Connecting flight departs 30 hours after the inbound leg
        // arrives; the continuation must not appear.
        let repo = repo(vec![
            flight(1, "Berlin", "Prague", "2026-06-01 08:00", "2026-06-01 12:00", 80.0, 100, 0),
            flight(2, "Prague", "Vienna", "2026-06-02 18:00", "2026-06-02 19:00", 60.0, 100, 0),
        ]);

        assert!(search(&repo, &criteria("Berlin", "Vienna")).is_empty());
    }

    #[test]
    fn layover_exactly_at_cap_is_allowed() {
        let repo = repo(vec![
            flight(1, "Berlin", "Prague", "2026-06-01 08:00", "2026-06-01 12:00", 80.0, 100, 0),
            flight(2, "Prague", "Vienna", "2026-06-02 12:00", "2026-06-02 13:00", 60.0, 100, 0),
        ]);

        let found = search(&repo, &criteria("Berlin", "Vienna"));
        assert_eq!(found.len(), 1);
        // 4h + 24h layover + 1h
        assert_eq!(found[0].total_time_hours(), 29.0);
    }

    #[test]
    fn connection_departing_before_arrival_is_pruned() {
        // The onward flight leaves while the inbound one is still in
        // the air.
        let repo = repo(vec![
            flight(1, "Berlin", "Prague", "2026-06-01 08:00", "2026-06-01 12:00", 80.0, 100, 0),
            flight(2, "Prague", "Vienna", "2026-06-01 11:00", "2026-06-01 12:30", 60.0, 100, 0),
        ]);

        assert!(search(&repo, &criteria("Berlin", "Vienna")).is_empty());
    }

    #[test]
    fn paths_never_revisit_a_city() {
        let repo = repo(vec![
            flight(1, "Berlin", "Prague", "2026-06-01 08:00", "2026-06-01 09:00", 50.0, 100, 0),
            flight(2, "Prague", "Berlin", "2026-06-01 10:00", "2026-06-01 11:00", 50.0, 100, 0),
            flight(3, "Prague", "Vienna", "2026-06-01 12:00", "2026-06-01 13:00", 50.0, 100, 0),
        ]);

        let found = search(&repo, &criteria("Berlin", "Vienna"));

        assert_eq!(found.len(), 1);
        for itinerary in &found {
            let mut seen = HashSet::new();
            for c in itinerary.path() {
                assert!(seen.insert(c.clone()), "city revisited: {c}");
            }
        }
    }

    #[test]
    fn seat_requirement_applies_to_every_leg() {
        // Second leg has only 2 seats left.
        let repo = repo(vec![
            flight(1, "Berlin", "Prague", "2026-06-01 08:00", "2026-06-01 09:00", 50.0, 100, 0),
            flight(2, "Prague", "Vienna", "2026-06-01 11:00", "2026-06-01 12:00", 50.0, 100, 98),
        ]);

        let mut three = criteria("Berlin", "Vienna");
        three.passengers = 3;
        assert!(search(&repo, &three).is_empty());

        let mut two = criteria("Berlin", "Vienna");
        two.passengers = 2;
        let found = search(&repo, &two);
        assert_eq!(found.len(), 1);
        for leg in found[0].legs() {
            assert!(leg.available_seats() >= 2);
        }
    }

    #[test]
    fn departure_window_is_inclusive() {
        let repo = repo(vec![
            flight(1, "Berlin", "Prague", "2026-06-01 00:00", "2026-06-01 02:00", 50.0, 100, 0),
            flight(2, "Berlin", "Prague", "2026-06-30 23:59", "2026-07-01 02:00", 50.0, 100, 0),
            flight(3, "Berlin", "Prague", "2026-07-01 00:00", "2026-07-01 02:00", 50.0, 100, 0),
        ]);

        let found = search(&repo, &criteria("Berlin", "Prague"));
        let mut ids: Vec<i64> = found.iter().map(|i| i.legs()[0].id()).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn via_city_filters_completed_paths() {
        let repo = repo(vec![
            // Direct route
            flight(1, "Berlin", "Vienna", "2026-06-01 08:00", "2026-06-01 09:30", 200.0, 100, 0),
            // Route via Prague
            flight(2, "Berlin", "Prague", "2026-06-01 09:00", "2026-06-01 10:00", 80.0, 100, 0),
            flight(3, "Prague", "Vienna", "2026-06-01 11:00", "2026-06-01 12:00", 60.0, 100, 0),
        ]);

        let unrestricted = search(&repo, &criteria("Berlin", "Vienna"));
        assert_eq!(unrestricted.len(), 2);

        let mut via = criteria("Berlin", "Vienna");
        via.via_city = Some(city("Prague"));
        let found = search(&repo, &via);
        assert_eq!(found.len(), 1);
        assert!(found[0].path().contains(&city("Prague")));
    }

    #[test]
    fn via_city_with_no_match_returns_empty() {
        let repo = repo(vec![flight(
            1,
            "Berlin",
            "Prague",
            "2026-06-01 10:00",
            "2026-06-01 13:00",
            500.0,
            100,
            0,
        )]);

        let mut via = criteria("Berlin", "Prague");
        via.via_city = Some(city("Oslo"));
        assert!(search(&repo, &via).is_empty());
    }

    #[test]
    fn via_city_may_equal_origin() {
        // The via-city check runs over the whole visited sequence,
        // origin included; whether that should count is ambiguous in
        // the product sense, but the literal rule says it does.
        let repo = repo(vec![flight(
            1,
            "Berlin",
            "Prague",
            "2026-06-01 10:00",
            "2026-06-01 13:00",
            500.0,
            100,
            0,
        )]);

        let mut via = criteria("Berlin", "Prague");
        via.via_city = Some(city("Berlin"));
        assert_eq!(search(&repo, &via).len(), 1);
    }

    #[test]
    fn origin_equals_destination_yields_zero_leg_itinerary() {
        let repo = repo(vec![flight(
            1,
            "Berlin",
            "Prague",
            "2026-06-01 10:00",
            "2026-06-01 13:00",
            500.0,
            100,
            0,
        )]);

        let found = search(&repo, &criteria("Berlin", "Berlin"));

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].leg_count(), 0);
        assert_eq!(found[0].total_price(), 0.0);
        assert_eq!(found[0].total_time_hours(), 0.0);
    }

    #[test]
    fn first_dequeue_of_a_city_wins_expansion() {
        // Two ways to reach Prague; only the branch that dequeues it
        // first is expanded onward, so exactly one Vienna itinerary
        // comes back. Documents the global visited-set trade-off.
        let repo = repo(vec![
            flight(1, "Berlin", "Prague", "2026-06-01 08:00", "2026-06-01 09:00", 50.0, 100, 0),
            flight(2, "Berlin", "Dresden", "2026-06-01 08:30", "2026-06-01 09:30", 50.0, 100, 0),
            flight(3, "Dresden", "Prague", "2026-06-01 10:00", "2026-06-01 11:00", 50.0, 100, 0),
            flight(4, "Prague", "Vienna", "2026-06-01 12:00", "2026-06-01 13:00", 50.0, 100, 0),
        ]);

        let found = search(&repo, &criteria("Berlin", "Vienna"));

        assert_eq!(found.len(), 1);
        assert_eq!(
            found[0].path(),
            &[city("Berlin"), city("Prague"), city("Vienna")]
        );
    }

    #[test]
    fn direct_and_via_routes_tagged_per_comparison() {
        // Direct: 3h, $500. Via Prague: 1h + 0.5h layover + 1h = 2.5h,
        // $300. The via route is both faster and cheaper, so it gets
        // "fastest" (time priority) and the direct flight stays
        // uncategorized because its price is not the minimum.
        let repo = repo(vec![
            flight(1, "Berlin", "Vienna", "2026-06-01 10:00", "2026-06-01 13:00", 500.0, 100, 0),
            flight(2, "Berlin", "Prague", "2026-06-01 10:00", "2026-06-01 11:00", 150.0, 100, 0),
            flight(3, "Prague", "Vienna", "2026-06-01 11:30", "2026-06-01 12:30", 150.0, 100, 0),
        ]);

        let ranked = search_ranked(
            &repo,
            &criteria("Berlin", "Vienna"),
            &ResultOrder::default(),
            &SearchConfig::default(),
        )
        .unwrap();

        assert_eq!(ranked.len(), 2);
        // Default ordering puts the fastest first
        assert_eq!(ranked[0].category, Some(Category::Fastest));
        assert_eq!(ranked[0].itinerary.total_time_hours(), 2.5);
        assert_eq!(ranked[0].itinerary.total_price(), 300.0);
        assert_eq!(ranked[1].category, None);
        assert_eq!(ranked[1].itinerary.total_price(), 500.0);
    }

    #[test]
    fn time_desc_orders_later_departure_first() {
        let repo = repo(vec![
            flight(1, "Berlin", "Prague", "2026-06-01 10:00", "2026-06-01 11:00", 50.0, 100, 0),
            flight(2, "Berlin", "Prague", "2026-06-01 15:00", "2026-06-01 16:00", 70.0, 100, 0),
        ]);

        let ranked = search_ranked(
            &repo,
            &criteria("Berlin", "Prague"),
            &ResultOrder {
                by_price: None,
                by_time: Some(TimeOrder::Descending),
            },
            &SearchConfig::default(),
        )
        .unwrap();

        assert_eq!(ranked.len(), 2);
        assert_eq!(
            ranked[0].itinerary.first_departure(),
            Some(dt("2026-06-01 15:00"))
        );
        assert_eq!(
            ranked[1].itinerary.first_departure(),
            Some(dt("2026-06-01 10:00"))
        );
        // Both fly for 1h: tied on time, so both carry the fastest tag
        assert_eq!(ranked[0].category, Some(Category::Fastest));
        assert_eq!(ranked[1].category, Some(Category::Fastest));
    }

    #[test]
    fn price_asc_orders_by_total_price() {
        let repo = repo(vec![
            flight(1, "Berlin", "Vienna", "2026-06-01 10:00", "2026-06-01 13:00", 500.0, 100, 0),
            flight(2, "Berlin", "Prague", "2026-06-01 10:00", "2026-06-01 11:00", 150.0, 100, 0),
            flight(3, "Prague", "Vienna", "2026-06-01 11:30", "2026-06-01 12:30", 150.0, 100, 0),
        ]);

        let ranked = search_ranked(
            &repo,
            &criteria("Berlin", "Vienna"),
            &ResultOrder {
                by_price: Some(PriceOrder::Ascending),
                by_time: None,
            },
            &SearchConfig::default(),
        )
        .unwrap();

        let prices: Vec<f64> = ranked.iter().map(|r| r.itinerary.total_price()).collect();
        assert_eq!(prices, vec![300.0, 500.0]);
    }

    #[test]
    fn identical_searches_yield_identical_output() {
        let repo = repo(vec![
            flight(1, "Berlin", "Vienna", "2026-06-01 10:00", "2026-06-01 13:00", 500.0, 100, 0),
            flight(2, "Berlin", "Prague", "2026-06-01 10:00", "2026-06-01 11:00", 150.0, 100, 0),
            flight(3, "Prague", "Vienna", "2026-06-01 11:30", "2026-06-01 12:30", 150.0, 100, 0),
            flight(4, "Berlin", "Vienna", "2026-06-01 09:00", "2026-06-01 12:00", 500.0, 100, 0),
        ]);

        let run = || {
            search_ranked(
                &repo,
                &criteria("Berlin", "Vienna"),
                &ResultOrder::default(),
                &SearchConfig::default(),
            )
            .unwrap()
            .iter()
            .map(|r| {
                (
                    r.itinerary.legs().iter().map(|f| f.id()).collect::<Vec<_>>(),
                    r.category,
                )
            })
            .collect::<Vec<_>>()
        };

        assert_eq!(run(), run());
    }

    #[test]
    fn expansion_order_follows_departure_time() {
        // Two direct flights: discovery (and therefore tie) order is by
        // departure time, regardless of insertion order.
        let repo = repo(vec![
            flight(2, "Berlin", "Prague", "2026-06-01 15:00", "2026-06-01 16:00", 50.0, 100, 0),
            flight(1, "Berlin", "Prague", "2026-06-01 10:00", "2026-06-01 11:00", 50.0, 100, 0),
        ]);

        let found = search(&repo, &criteria("Berlin", "Prague"));
        let ids: Vec<i64> = found.iter().map(|i| i.legs()[0].id()).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn states_explored_is_reported() {
        let repo = repo(vec![flight(
            1,
            "Berlin",
            "Prague",
            "2026-06-01 10:00",
            "2026-06-01 13:00",
            500.0,
            100,
            0,
        )]);

        let outcome =
            search_itineraries(&repo, &criteria("Berlin", "Prague"), &SearchConfig::default())
                .unwrap();

        // The origin state plus the completed branch
        assert_eq!(outcome.states_explored, 2);
        assert_eq!(outcome.itineraries.len(), 1);
    }
}
