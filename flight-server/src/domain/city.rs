//! City value type.

use std::fmt;
use std::sync::Arc;

/// A city in the flight network, identified by its display name.
///
/// City names are free-form ("Berlin", "Saint Petersburg"); there is no
/// format to validate. The name is held in a shared allocation so that
/// cloning a `City` while extending search paths is cheap.
///
/// # Examples
///
/// ```
/// use flight_server::domain::City;
///
/// let berlin = City::new("Berlin");
/// assert_eq!(berlin.as_str(), "Berlin");
/// assert_eq!(berlin, City::new("Berlin"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct City(Arc<str>);

impl City {
    /// Creates a city from its name.
    pub fn new(name: impl Into<String>) -> Self {
        City(Arc::from(name.into()))
    }

    /// Returns the city name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "City({})", self.as_str())
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
