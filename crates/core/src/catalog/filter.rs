//! Filter predicate set.
//!
//! A [`FilterSet`] is a declarative AND-composition of independent
//! predicates: text match, select equality, and inclusive ranges. The
//! builders are tolerant by contract: an empty text query or an absent
//! selection constrains nothing, and malformed numeric input coerces to
//! "no constraint" instead of failing the screen.

use rust_decimal::Decimal;

/// A boolean test applied per record to decide inclusion in the view.
pub type Predicate<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// Inclusive `[min, max]` bounds with either side optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds<V> {
    /// Lower bound, inclusive. `None` means unbounded below.
    pub min: Option<V>,
    /// Upper bound, inclusive. `None` means unbounded above.
    pub max: Option<V>,
}

impl<V> Bounds<V> {
    /// Bounds with both sides set.
    pub const fn closed(min: V, max: V) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Bounds constraining nothing.
    pub const fn unbounded() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    /// Whether neither side constrains anything.
    pub const fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

// Not derived: the derive would demand `V: Default`, and bound types like
// timestamps have no meaningful default.
impl<V> Default for Bounds<V> {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl<V: PartialOrd> Bounds<V> {
    /// Whether `value` falls within the bounds.
    pub fn contains(&self, value: &V) -> bool {
        if let Some(min) = &self.min
            && value < min
        {
            return false;
        }
        if let Some(max) = &self.max
            && value > max
        {
            return false;
        }
        true
    }
}

impl Bounds<Decimal> {
    /// Parse user-supplied bound fields.
    ///
    /// Blank or malformed input on either side coerces to unbounded on that
    /// side; this function never fails.
    #[must_use]
    pub fn parse(min: &str, max: &str) -> Self {
        Self {
            min: min.trim().parse().ok(),
            max: max.trim().parse().ok(),
        }
    }
}

/// An AND-composition of predicates over one record type.
///
/// An empty set matches everything (the identity filter).
pub struct FilterSet<T> {
    predicates: Vec<Predicate<T>>,
}

impl<T: 'static> Default for FilterSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> FilterSet<T> {
    /// The identity filter: matches every record.
    #[must_use]
    pub fn new() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }

    /// Whether no predicate is active.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Add an arbitrary predicate.
    #[must_use]
    pub fn with(mut self, predicate: Predicate<T>) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Case-insensitive substring match against one or more fields.
    ///
    /// A record passes if any field contains the query. A blank query adds
    /// no constraint.
    #[must_use]
    pub fn text(mut self, query: &str, fields: Vec<fn(&T) -> &str>) -> Self {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self;
        }
        self.predicates.push(Box::new(move |record| {
            fields
                .iter()
                .any(|field| field(record).to_lowercase().contains(&needle))
        }));
        self
    }

    /// Exact equality against a selected value.
    ///
    /// `None` is the "all" sentinel and adds no constraint.
    #[must_use]
    pub fn select<V>(mut self, selected: Option<V>, value_of: fn(&T) -> V) -> Self
    where
        V: PartialEq + Send + Sync + 'static,
    {
        let Some(wanted) = selected else {
            return self;
        };
        self.predicates
            .push(Box::new(move |record| value_of(record) == wanted));
        self
    }

    /// Inclusive range over a comparable field (prices, timestamps).
    ///
    /// Fully unbounded bounds add no constraint.
    #[must_use]
    pub fn range<V>(mut self, bounds: Bounds<V>, value_of: fn(&T) -> V) -> Self
    where
        V: PartialOrd + Send + Sync + 'static,
    {
        if bounds.is_unbounded() {
            return self;
        }
        self.predicates
            .push(Box::new(move |record| bounds.contains(&value_of(record))));
        self
    }

    /// Match nothing.
    ///
    /// Used when a filter control carries an unrecognized category or
    /// status value: the view degrades to empty rather than crashing or
    /// silently showing everything.
    #[must_use]
    pub fn never(mut self) -> Self {
        self.predicates.push(Box::new(|_| false));
        self
    }

    /// Whether a record passes every active predicate.
    #[must_use]
    pub fn matches(&self, record: &T) -> bool {
        self.predicates.iter().all(|predicate| predicate(record))
    }
}
