// crates/paypoint-core/src/traits.rs
use crate::model::{Coordinates, Facet, FilterState, Point, UserCoordinate};

/// Facet-based matching for records that expose categorical attributes.
///
/// Implementors provide the attribute value for each [`Facet`] via
/// [`Faceted::facet_value`], and get [`Faceted::matches`] for free:
/// a record matches a [`FilterState`] iff every constrained facet equals the
/// record's value exactly (case-sensitive, no folding).
///
/// # Examples
/// ```rust
/// use paypoint_core::traits::Faceted;
/// use paypoint_core::{Facet, FilterState};
///
/// struct Kiosk;
/// impl Faceted for Kiosk {
///     fn facet_value(&self, facet: Facet) -> &str {
///         match facet {
///             Facet::City => "Ankara",
///             Facet::District => "Çankaya",
///             Facet::Type => "ATM",
///         }
///     }
/// }
///
/// assert!(Kiosk.matches(&FilterState::new().with(Facet::City, "Ankara")));
/// assert!(!Kiosk.matches(&FilterState::new().with(Facet::City, "ankara")));
/// ```
pub trait Faceted {
    fn facet_value(&self, facet: Facet) -> &str;

    #[inline]
    fn matches(&self, filters: &FilterState) -> bool {
        filters
            .active()
            .all(|(facet, wanted)| self.facet_value(facet) == wanted)
    }
}

impl Faceted for Point {
    #[inline]
    fn facet_value(&self, facet: Facet) -> &str {
        match facet {
            Facet::City => &self.city,
            Facet::District => &self.district,
            Facet::Type => &self.kind,
        }
    }
}

/// Anything with a position on the map.
pub trait Located {
    fn location(&self) -> Coordinates;
}

impl Located for Coordinates {
    fn location(&self) -> Coordinates {
        *self
    }
}

impl Located for UserCoordinate {
    fn location(&self) -> Coordinates {
        (*self).into()
    }
}

impl Located for Point {
    fn location(&self) -> Coordinates {
        self.coordinates
    }
}

impl<T: Located + ?Sized> Located for &T {
    fn location(&self) -> Coordinates {
        (**self).location()
    }
}
