// crates/geofence-core/src/session.rs

//! # Map Session
//!
//! The map component as the rest of the application sees it: pointer events
//! go in, cursor and recenter commands come out, and a boundary load plus a
//! location search can be driven against it. One session per mounted map.
//!
//! The async drivers ([`MapSession::load_with`], [`MapSession::search`]) take
//! the session as a `&RefCell` and only borrow it around the awaits, so the
//! widget can keep delivering pointer events while a fetch is in flight.

use crate::config::{GeofenceConfig, MarkerIconConfig};
use crate::error::Result;
use crate::gate::{InteractionGate, LoadToken, SearchAdmission};
use crate::loader::{BoundaryFetch, LoadedRegion, RegionDataLoader};
use crate::model::{GeoPoint, LoadState};
use crate::search::{Geocoder, LocationSearch, SearchFailure, SearchQuery};
use crate::selection::{Cursor, MapView, SelectionController};
use std::cell::RefCell;
use tracing::info;

/// Pointer events delivered by the map widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Move(GeoPoint),
    Click(GeoPoint),
}

/// What a location search ended in.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Selected(GeoPoint),
    /// Resolved fine but outside the allowed region.
    OutOfRegion(GeoPoint),
    Failed(SearchFailure),
}

impl SearchOutcome {
    /// Transient message for the user, if any.
    pub fn message(&self) -> Option<String> {
        match self {
            SearchOutcome::Selected(_) => None,
            SearchOutcome::OutOfRegion(_) => {
                Some("That location is outside the supported region.".to_string())
            }
            SearchOutcome::Failed(failure) => Some(failure.to_string()),
        }
    }
}

pub struct MapSession<V> {
    gate: InteractionGate,
    selection: SelectionController<V>,
    marker: MarkerIconConfig,
    hover_blocked: bool,
    last_pointer: Option<GeoPoint>,
    last_search: Option<SearchOutcome>,
}

impl<V: MapView> MapSession<V> {
    pub fn new(config: &GeofenceConfig, view: V) -> Self {
        Self {
            gate: InteractionGate::new(config.fallback_bounds),
            selection: SelectionController::new(view, config.min_select_zoom),
            marker: config.marker.clone(),
            hover_blocked: false,
            last_pointer: None,
            last_search: None,
        }
    }

    // -----------------------------------------------------------------------
    // STATE
    // -----------------------------------------------------------------------

    pub fn load_state(&self) -> LoadState {
        self.gate.load_state()
    }

    pub fn gate(&self) -> &InteractionGate {
        &self.gate
    }

    pub fn selection(&self) -> Option<GeoPoint> {
        self.selection.current()
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn is_hover_blocked(&self) -> bool {
        self.hover_blocked
    }

    pub fn marker_icon(&self) -> &MarkerIconConfig {
        &self.marker
    }

    pub fn last_search(&self) -> Option<&SearchOutcome> {
        self.last_search.as_ref()
    }

    pub fn dismiss_search_message(&mut self) {
        self.last_search = None;
    }

    pub fn view(&self) -> &V {
        self.selection.view()
    }

    // -----------------------------------------------------------------------
    // BOUNDARY LOADING
    // -----------------------------------------------------------------------

    pub fn begin_load(&mut self) -> LoadToken {
        let token = self.gate.begin_load();
        self.refresh_hover();
        token
    }

    /// Applies a load result. Returns `false` for a superseded token.
    pub fn finish_load(&mut self, token: LoadToken, result: Result<LoadedRegion>) -> bool {
        let applied = self.gate.finish_load(token, result);
        if applied {
            self.refresh_hover();
        }
        applied
    }

    /// Loads boundaries and applies them.
    ///
    /// The session is borrowed only to start and to finish the load, never
    /// across the fetch.
    pub async fn load_with<F: BoundaryFetch>(
        session: &RefCell<Self>,
        loader: &RegionDataLoader<F>,
    ) -> LoadState {
        let token = session.borrow_mut().begin_load();
        let result = loader.load().await;
        let mut session = session.borrow_mut();
        session.finish_load(token, result);
        session.load_state()
    }

    /// The owning view is going away; results still in flight are dropped.
    pub fn teardown(&mut self) {
        self.gate.invalidate();
        info!("map session torn down");
    }

    // -----------------------------------------------------------------------
    // POINTER EVENTS
    // -----------------------------------------------------------------------

    /// Entry point registered with the map widget's event callbacks.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        match event {
            PointerEvent::Move(p) => {
                self.on_pointer_move(p);
                false
            }
            PointerEvent::Click(p) => self.on_click(p),
        }
    }

    pub fn on_pointer_move(&mut self, p: GeoPoint) {
        self.last_pointer = Some(p);
        self.update_cursor(p);
    }

    // Re-evaluates the last hovered point against the current state.
    fn refresh_hover(&mut self) {
        if let Some(p) = self.last_pointer {
            self.update_cursor(p);
        }
    }

    fn update_cursor(&mut self, p: GeoPoint) {
        let blocked = !self.gate.hover(p);
        if blocked != self.hover_blocked {
            self.hover_blocked = blocked;
            let cursor = if blocked { Cursor::Blocked } else { Cursor::Pointer };
            self.selection.view_mut().set_cursor(cursor);
        }
    }

    /// Returns whether the click became the selection.
    pub fn on_click(&mut self, p: GeoPoint) -> bool {
        self.gate.click(p, &mut self.selection)
    }

    // -----------------------------------------------------------------------
    // SEARCH
    // -----------------------------------------------------------------------

    /// Resolves a query, then runs the candidate through the gate.
    ///
    /// The geocoder is awaited without holding a borrow of the session.
    pub async fn search<G: Geocoder>(
        session: &RefCell<Self>,
        search: &LocationSearch<G>,
        query: &SearchQuery,
    ) -> SearchOutcome {
        let resolved = search.resolve(query).await;
        session.borrow_mut().apply_search(resolved).clone()
    }

    /// Records the outcome of an already resolved search.
    pub fn apply_search(
        &mut self,
        resolved: std::result::Result<GeoPoint, SearchFailure>,
    ) -> &SearchOutcome {
        let outcome = match resolved {
            Ok(p) => match self.gate.admit_search(p, &mut self.selection) {
                SearchAdmission::Admitted(p) => SearchOutcome::Selected(p),
                SearchAdmission::OutOfRegion(p) => SearchOutcome::OutOfRegion(p),
            },
            Err(failure) => SearchOutcome::Failed(failure),
        };
        self.last_search.insert(outcome)
    }
}
