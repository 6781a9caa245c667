// crates/paypoint-core/src/location.rs

//! One-shot geolocation acquisition.
//!
//! The platform capability is modeled as a [`LocationProvider`] that receives a
//! single-use [`LocationReply`]. The reply is backed by a channel, so the
//! provider may answer synchronously, from a callback, or from another
//! thread. [`Geolocation`] owns the state machine:
//!
//! ```text
//! Unresolved -> Resolving -> Resolved(coordinate)
//!                         -> Failed(reason)
//! ```
//!
//! There is exactly one attempt per [`Geolocation`]; nothing is retried.

use crate::error::LocationError;
use crate::model::UserCoordinate;
use serde::Serialize;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

type Outcome = Result<UserCoordinate, LocationError>;

/// Where the single acquisition attempt stands.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum LocationState {
    /// Not requested yet, or the capability is unavailable.
    #[default]
    Unresolved,
    Resolving,
    Resolved(UserCoordinate),
    /// Diagnostic reason; the user coordinate stays absent.
    Failed(String),
}

impl LocationState {
    pub fn coordinate(&self) -> Option<UserCoordinate> {
        match self {
            LocationState::Resolved(c) => Some(*c),
            _ => None,
        }
    }
}

/// Emitted once by [`Geolocation::poll`] when the request completes.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationEvent {
    Resolved(UserCoordinate),
    Failed(String),
}

/// Single-use answer handle handed to a [`LocationProvider`].
///
/// Consumed by [`resolve`](LocationReply::resolve) or
/// [`fail`](LocationReply::fail). Dropping it unanswered completes the request
/// with [`LocationError::Dropped`].
#[derive(Debug)]
pub struct LocationReply {
    tx: Sender<Outcome>,
}

impl LocationReply {
    /// Answers with a position fix. Out-of-range values fail the request.
    pub fn resolve(self, lat: f64, lng: f64) {
        let outcome = UserCoordinate::new(lat, lng).map_err(LocationError::from);
        self.send(outcome);
    }

    pub fn fail(self, error: LocationError) {
        self.send(Err(error));
    }

    fn send(self, outcome: Outcome) {
        // the receiving side may already be gone; nothing left to notify
        let _ = self.tx.send(outcome);
    }
}

/// The platform location capability.
pub trait LocationProvider {
    /// Whether the capability exists at all. When `false`, no request is made.
    fn is_available(&self) -> bool {
        true
    }

    /// Starts the request. Must eventually consume `reply` (or drop it).
    fn request(&self, reply: LocationReply);
}

/// Answers immediately with a fixed position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedLocation {
    pub lat: f64,
    pub lng: f64,
}

impl FixedLocation {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl LocationProvider for FixedLocation {
    fn request(&self, reply: LocationReply) {
        reply.resolve(self.lat, self.lng);
    }
}

/// A platform without a location capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocation;

impl LocationProvider for NoLocation {
    fn is_available(&self) -> bool {
        false
    }

    fn request(&self, reply: LocationReply) {
        reply.fail(LocationError::Unavailable);
    }
}

/// The acquisition state machine. One attempt per instance.
#[derive(Debug, Default)]
pub struct Geolocation {
    state: LocationState,
    pending: Option<Receiver<Outcome>>,
    attempted: bool,
}

impl Geolocation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LocationState {
        &self.state
    }

    pub fn coordinate(&self) -> Option<UserCoordinate> {
        self.state.coordinate()
    }

    /// Issues the one request this instance will ever make.
    ///
    /// Returns `true` when a request was handed to the provider. Returns
    /// `false` on a second call, or when the provider is unavailable, in
    /// which case the state stays [`LocationState::Unresolved`] for good.
    pub fn start(&mut self, provider: &dyn LocationProvider) -> bool {
        if self.attempted {
            tracing::debug!("geolocation already attempted; ignoring start");
            return false;
        }
        self.attempted = true;

        if !provider.is_available() {
            tracing::warn!("geolocation capability unavailable");
            return false;
        }

        let (tx, rx) = mpsc::channel();
        self.state = LocationState::Resolving;
        self.pending = Some(rx);
        provider.request(LocationReply { tx });
        true
    }

    /// Checks for the provider's answer without blocking.
    ///
    /// Yields a [`LocationEvent`] exactly once, on the poll that observes the
    /// completion; `None` before and after.
    pub fn poll(&mut self) -> Option<LocationEvent> {
        let outcome = match self.pending.as_ref()?.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(LocationError::Dropped),
        };
        self.pending = None;
        Some(self.finish(outcome))
    }

    fn finish(&mut self, outcome: Outcome) -> LocationEvent {
        match outcome {
            Ok(coord) => {
                tracing::info!(lat = coord.lat(), lng = coord.lng(), "location resolved");
                self.state = LocationState::Resolved(coord);
                LocationEvent::Resolved(coord)
            }
            Err(e) => {
                tracing::warn!(error = %e, "location unavailable");
                let reason = e.to_string();
                self.state = LocationState::Failed(reason.clone());
                LocationEvent::Failed(reason)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_location_resolves_on_first_poll() {
        let mut geo = Geolocation::new();
        assert_eq!(geo.state(), &LocationState::Unresolved);
        assert!(geo.start(&FixedLocation::new(41.0, 29.0)));
        assert_eq!(geo.state(), &LocationState::Resolving);

        let event = geo.poll().unwrap();
        let coord = UserCoordinate::new(41.0, 29.0).unwrap();
        assert_eq!(event, LocationEvent::Resolved(coord));
        assert_eq!(geo.coordinate(), Some(coord));
        assert_eq!(geo.poll(), None);
    }

    #[test]
    fn unavailable_stays_unresolved() {
        let mut geo = Geolocation::new();
        assert!(!geo.start(&NoLocation));
        assert_eq!(geo.state(), &LocationState::Unresolved);
        assert_eq!(geo.poll(), None);
        assert_eq!(geo.coordinate(), None);
    }

    #[test]
    fn invalid_fix_fails() {
        let mut geo = Geolocation::new();
        geo.start(&FixedLocation::new(123.0, 29.0));
        assert!(matches!(geo.poll(), Some(LocationEvent::Failed(_))));
        assert!(matches!(geo.state(), LocationState::Failed(_)));
        assert_eq!(geo.coordinate(), None);
    }

    #[test]
    fn start_is_one_shot() {
        let mut geo = Geolocation::new();
        assert!(geo.start(&FixedLocation::new(41.0, 29.0)));
        assert!(!geo.start(&FixedLocation::new(39.0, 32.0)));
        geo.poll();
        assert!(!geo.start(&FixedLocation::new(39.0, 32.0)));
        assert_eq!(geo.coordinate().map(|c| c.lat()), Some(41.0));
    }

    #[cfg(feature = "json")]
    #[test]
    fn state_serializes_tagged() {
        let json = serde_json::to_string(&LocationState::Failed("denied".into())).unwrap();
        assert_eq!(json, r#"{"state":"failed","value":"denied"}"#);
    }
}
