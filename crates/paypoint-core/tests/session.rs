use paypoint_core::prelude::*;
use std::cell::RefCell;
use std::thread;

/// Holds the reply until the test decides to answer, like a browser callback.
#[derive(Default)]
struct Deferred {
    reply: RefCell<Option<LocationReply>>,
}

impl LocationProvider for Deferred {
    fn request(&self, reply: LocationReply) {
        *self.reply.borrow_mut() = Some(reply);
    }
}

impl Deferred {
    fn take(&self) -> LocationReply {
        self.reply.borrow_mut().take().expect("request was made")
    }
}

/// Answers from a worker thread.
struct Threaded(f64, f64);

impl LocationProvider for Threaded {
    fn request(&self, reply: LocationReply) {
        let (lat, lng) = (self.0, self.1);
        thread::spawn(move || reply.resolve(lat, lng));
    }
}

fn catalog() -> PointCatalog {
    PointCatalog::embedded().unwrap()
}

#[test]
fn fresh_session_shows_everything_without_nearest() {
    let catalog = catalog();
    let session = LocatorSession::new(&catalog);
    assert_eq!(session.result().filtered.len(), catalog.len());
    assert!(session.result().nearest.is_none());
    assert_eq!(session.location(), &LocationState::Unresolved);
    assert_eq!(session.facets(), catalog.facets());
}

#[test]
fn filters_recompute_list_but_keep_nearest() {
    let catalog = catalog();
    let mut session = LocatorSession::new(&catalog);
    assert!(session.start_location(&FixedLocation::new(39.9208, 32.8541)));
    assert!(matches!(
        session.poll_location(),
        Some(LocationEvent::Resolved(_))
    ));
    let nearest = session.result().nearest_point().unwrap().id;

    session.set_filter(Facet::City, "İzmir");
    assert!(session
        .result()
        .filtered
        .iter()
        .all(|p| p.city() == "İzmir"));
    assert_eq!(session.result().nearest_point().unwrap().id, nearest);

    session.set_filter(Facet::City, "");
    assert_eq!(session.result().filtered.len(), catalog.len());

    session.set_filters(FilterState::new().with(Facet::Type, "ATM"));
    assert!(session.result().filtered.iter().all(|p| p.kind() == "ATM"));
    session.clear_filters();
    assert!(session.filters().is_empty());
}

#[test]
fn deferred_answer_arrives_on_later_poll() {
    let catalog = catalog();
    let provider = Deferred::default();
    let mut session = LocatorSession::new(&catalog);

    assert!(session.start_location(&provider));
    assert_eq!(session.location(), &LocationState::Resolving);
    assert_eq!(session.poll_location(), None);
    assert!(session.result().nearest.is_none());

    provider.take().resolve(41.0422, 29.0067);
    let event = session.poll_location();
    assert!(matches!(event, Some(LocationEvent::Resolved(_))));
    assert_eq!(session.result().nearest_point().map(|p| p.id), Some(2));
    assert_eq!(session.poll_location(), None);
}

#[test]
fn denied_leaves_location_absent() {
    let catalog = catalog();
    let provider = Deferred::default();
    let mut session = LocatorSession::new(&catalog);

    session.start_location(&provider);
    provider.take().fail(LocationError::Denied);

    assert_eq!(
        session.poll_location(),
        Some(LocationEvent::Failed("geolocation permission denied".into()))
    );
    assert!(session.result().nearest.is_none());
    assert!(session.location().coordinate().is_none());
    assert!(!session.start_location(&FixedLocation::new(41.0, 29.0)));
}

#[test]
fn dropped_reply_counts_as_failure() {
    let catalog = catalog();
    let provider = Deferred::default();
    let mut session = LocatorSession::new(&catalog);

    session.start_location(&provider);
    drop(provider.take());
    assert!(matches!(
        session.poll_location(),
        Some(LocationEvent::Failed(_))
    ));
}

#[test]
fn unavailable_capability_never_resolves() {
    let catalog = catalog();
    let mut session = LocatorSession::new(&catalog);
    assert!(!session.start_location(&NoLocation));
    assert_eq!(session.poll_location(), None);
    assert_eq!(session.location(), &LocationState::Unresolved);
}

#[test]
fn answer_from_another_thread() {
    let catalog = catalog();
    let mut session = LocatorSession::new(&catalog);
    session.start_location(&Threaded(38.4365, 27.1428));

    let event = loop {
        if let Some(event) = session.poll_location() {
            break event;
        }
        thread::yield_now();
    };
    assert!(matches!(event, LocationEvent::Resolved(_)));
    assert_eq!(session.result().nearest_point().map(|p| p.city()), Some("İzmir"));
}
