mod common;

use common::{excluded, FakeFetcher, FakeGeocoder, Slow, US_MINI};
use geofence_core::prelude::*;
use geofence_core::session::SearchOutcome;
use std::cell::RefCell;

fn config() -> GeofenceConfig {
    GeofenceConfig {
        sources: vec!["us".into()],
        ..GeofenceConfig::default()
    }
}

fn us_loader() -> RegionDataLoader<FakeFetcher> {
    let config = config();
    RegionDataLoader::new(
        config.sources.clone(),
        config.excluded_set(),
        FakeFetcher::new().with_body("us", US_MINI),
    )
}

async fn ready_session() -> MapSession<NullView> {
    let session = RefCell::new(MapSession::new(&config(), NullView::default()));
    assert_eq!(
        MapSession::load_with(&session, &us_loader()).await,
        LoadState::Ready
    );
    session.into_inner()
}

#[tokio::test]
async fn click_in_continental_interior_selects_and_recenters() {
    let mut session = ready_session().await;
    let p = GeoPoint::new(39.5, -98.35);

    assert!(session.handle_pointer(PointerEvent::Click(p)));
    assert_eq!(session.selection(), Some(p));
    assert_eq!(session.view().center, Some(p));
    assert_eq!(session.view().zoom, config().min_select_zoom);
}

#[tokio::test]
async fn click_in_excluded_area_is_ignored() {
    let mut session = ready_session().await;
    assert!(!session.handle_pointer(PointerEvent::Click(GeoPoint::new(61.2, -149.9))));
    assert_eq!(session.selection(), None);
    assert_eq!(session.view().center, None);
}

#[tokio::test]
async fn fallback_admits_until_exact_boundaries_arrive() {
    let mut session = MapSession::new(&config(), NullView::default());
    // Inside the rectangle, outside every named state in the fixture.
    let texas = GeoPoint::new(32.0, -97.0);

    let token = session.begin_load();
    assert_eq!(session.load_state(), LoadState::Loading);
    assert!(session.gate().is_admissible(texas));
    session.on_pointer_move(texas);
    assert!(!session.is_hover_blocked());

    let result = us_loader().load().await;
    assert!(session.finish_load(token, result));
    assert_eq!(session.load_state(), LoadState::Ready);

    assert!(!session.gate().is_admissible(texas));
    session.on_pointer_move(texas);
    assert!(session.is_hover_blocked());
    assert_eq!(session.view().cursor, Cursor::Blocked);
    assert!(!session.on_click(texas));
}

#[tokio::test]
async fn failed_load_keeps_fallback_rectangle() {
    let config = config();
    let loader = RegionDataLoader::new(
        config.sources.clone(),
        config.excluded_set(),
        FakeFetcher::new().with_status("us", 502),
    );
    let session = RefCell::new(MapSession::new(&config, NullView::default()));
    assert_eq!(MapSession::load_with(&session, &loader).await, LoadState::Failed);
    let mut session = session.into_inner();

    assert!(session.on_click(GeoPoint::new(32.0, -97.0)));
    assert!(!session.on_click(GeoPoint::new(61.2, -149.9)));
}

#[tokio::test]
async fn load_resolving_after_teardown_is_discarded() {
    let mut session = MapSession::new(&config(), NullView::default());
    let token = session.begin_load();
    session.teardown();

    let result = us_loader().load().await;
    assert!(!session.finish_load(token, result));
    assert_eq!(session.load_state(), LoadState::Loading);
}

#[tokio::test]
async fn superseded_load_is_discarded() {
    let mut session = MapSession::new(&config(), NullView::default());
    let stale = session.begin_load();
    let fresh = session.begin_load();

    assert!(!session.finish_load(stale, us_loader().load().await));
    assert_eq!(session.load_state(), LoadState::Loading);
    assert!(session.finish_load(fresh, us_loader().load().await));
    assert_eq!(session.load_state(), LoadState::Ready);
}

#[tokio::test]
async fn unfiltered_dataset_would_admit_the_excluded_area() {
    let loader = RegionDataLoader::new(
        vec!["us".into()],
        excluded(&[]),
        FakeFetcher::new().with_body("us", US_MINI),
    );
    let session = RefCell::new(MapSession::new(&config(), NullView::default()));
    MapSession::load_with(&session, &loader).await;
    assert!(session.borrow_mut().on_click(GeoPoint::new(61.2, -149.9)));
}

#[tokio::test]
async fn pointer_events_are_served_while_boundaries_load() {
    let config = config();
    let loader = RegionDataLoader::new(
        config.sources.clone(),
        config.excluded_set(),
        Slow::new(FakeFetcher::new().with_body("us", US_MINI), 4),
    );
    let session = RefCell::new(MapSession::new(&config, NullView::default()));
    // Inside the rectangle, outside every named state in the fixture.
    let texas = GeoPoint::new(32.0, -97.0);

    let (state, during) = tokio::join!(MapSession::load_with(&session, &loader), async {
        tokio::task::yield_now().await;
        let mut session = session.borrow_mut();
        session.handle_pointer(PointerEvent::Move(texas));
        let clicked = session.handle_pointer(PointerEvent::Click(texas));
        (session.load_state(), clicked, session.is_hover_blocked())
    });

    assert_eq!(during, (LoadState::Loading, true, false));
    assert_eq!(state, LoadState::Ready);

    let mut session = session.into_inner();
    // The cursor caught up with the exact boundaries on its own.
    assert!(session.is_hover_blocked());
    assert_eq!(session.view().cursor, Cursor::Blocked);
    assert!(!session.on_click(texas));
    assert_eq!(session.selection(), Some(texas));
}

#[tokio::test]
async fn pointer_events_are_served_while_geocoding() {
    let session = RefCell::new(ready_session().await);
    let kansas = GeoPoint::new(39.05, -95.68);
    let denver = GeoPoint::new(39.7392, -104.9903);
    let search = LocationSearch::new(Slow::new(FakeGeocoder::Hits(vec![denver]), 4));

    let query = SearchQuery::Name("Denver".into());
    let (outcome, clicked) = tokio::join!(
        MapSession::search(&session, &search, &query),
        async {
            tokio::task::yield_now().await;
            session.borrow_mut().on_click(kansas)
        }
    );

    assert!(clicked);
    assert_eq!(outcome, SearchOutcome::Selected(denver));
    assert_eq!(session.borrow().selection(), Some(denver));
}

#[tokio::test]
async fn search_by_coordinates() {
    let session = RefCell::new(ready_session().await);
    let search = LocationSearch::new(FakeGeocoder::Hits(vec![]));

    let query = SearchQuery::Coordinates {
        lat: "39.5".into(),
        lon: "-98.35".into(),
    };
    let outcome = MapSession::search(&session, &search, &query).await;
    assert_eq!(outcome, SearchOutcome::Selected(GeoPoint::new(39.5, -98.35)));
    assert_eq!(session.borrow().selection(), Some(GeoPoint::new(39.5, -98.35)));

    let bad = SearchQuery::Coordinates {
        lat: "north".into(),
        lon: "-98".into(),
    };
    let outcome = MapSession::search(&session, &search, &bad).await;
    assert_eq!(outcome, SearchOutcome::Failed(SearchFailure::InvalidCoordinates));
    // A failed search leaves the earlier selection alone.
    assert_eq!(session.borrow().selection(), Some(GeoPoint::new(39.5, -98.35)));
}

#[tokio::test]
async fn search_by_name_uses_first_candidate() {
    let session = RefCell::new(ready_session().await);
    let denver = GeoPoint::new(39.7392, -104.9903);
    let search = LocationSearch::new(FakeGeocoder::Hits(vec![denver, GeoPoint::new(61.2, -149.9)]));

    let outcome =
        MapSession::search(&session, &search, &SearchQuery::Name("  Denver ".into())).await;
    assert_eq!(outcome, SearchOutcome::Selected(denver));
    assert!(outcome.message().is_none());
}

#[tokio::test]
async fn search_outside_region_is_an_advisory() {
    let session = RefCell::new(ready_session().await);
    let anchorage = GeoPoint::new(61.2, -149.9);
    let search = LocationSearch::new(FakeGeocoder::Hits(vec![anchorage]));

    let outcome =
        MapSession::search(&session, &search, &SearchQuery::Name("Anchorage".into())).await;
    assert_eq!(outcome, SearchOutcome::OutOfRegion(anchorage));
    assert!(outcome.message().is_some());

    let session = session.into_inner();
    assert_eq!(session.selection(), None);
    assert_eq!(session.load_state(), LoadState::Ready);
}

#[tokio::test]
async fn search_failures_leave_region_state_alone() {
    let session = RefCell::new(ready_session().await);

    let empty = LocationSearch::new(FakeGeocoder::Hits(vec![]));
    let outcome =
        MapSession::search(&session, &empty, &SearchQuery::Name("Atlantis".into())).await;
    assert_eq!(outcome, SearchOutcome::Failed(SearchFailure::NoResults));

    let blank = MapSession::search(&session, &empty, &SearchQuery::Name("   ".into())).await;
    assert_eq!(blank, SearchOutcome::Failed(SearchFailure::EmptyQuery));

    let down = LocationSearch::new(FakeGeocoder::Down);
    let outcome = MapSession::search(&session, &down, &SearchQuery::Name("Topeka".into())).await;
    assert_eq!(outcome, SearchOutcome::Failed(SearchFailure::Lookup));

    let mut session = session.into_inner();
    assert_eq!(session.last_search(), Some(&outcome));
    assert_eq!(session.load_state(), LoadState::Ready);
    assert_eq!(session.gate().regions().map(|r| r.len()), Some(3));

    session.dismiss_search_message();
    assert!(session.last_search().is_none());
}

#[tokio::test]
async fn clear_drops_selection_only() {
    let mut session = ready_session().await;
    let p = GeoPoint::new(39.5, -98.35);
    session.on_click(p);
    session.clear_selection();
    assert_eq!(session.selection(), None);
    assert_eq!(session.view().center, Some(p));
}
