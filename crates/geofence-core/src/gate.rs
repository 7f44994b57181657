// crates/geofence-core/src/gate.rs

//! # Interaction Gate
//!
//! Single authority on whether a coordinate may become the selection.
//! Exact polygons decide once loaded; until then (or if loading failed) the
//! fallback rectangle decides. The current state is read on every call, so a
//! transition to ready applies to the very next event.

use crate::error::Result;
use crate::geometry::{point_in_approx_bounds, point_in_region_set};
use crate::loader::LoadedRegion;
use crate::model::{AllowedRegionSet, Bounds, GeoPoint, LoadState};
use crate::selection::{MapView, SelectionController};
use tracing::{debug, trace, warn};

/// Proof of a load attempt. Only the most recent token may apply a result.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a load token must be handed back to `finish_load`"]
pub struct LoadToken(u64);

#[derive(Debug)]
enum RegionState {
    Loading,
    Ready(AllowedRegionSet),
    Failed,
}

/// Result of running a search candidate through the gate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchAdmission {
    Admitted(GeoPoint),
    OutOfRegion(GeoPoint),
}

#[derive(Debug)]
pub struct InteractionGate {
    state: RegionState,
    fallback: Bounds,
    generation: u64,
    last_hover: Option<(GeoPoint, bool)>,
}

impl InteractionGate {
    /// A gate that starts out loading, i.e. on the fallback rectangle.
    pub fn new(fallback: Bounds) -> Self {
        Self {
            state: RegionState::Loading,
            fallback,
            generation: 0,
            last_hover: None,
        }
    }

    pub fn load_state(&self) -> LoadState {
        match self.state {
            RegionState::Loading => LoadState::Loading,
            RegionState::Ready(_) => LoadState::Ready,
            RegionState::Failed => LoadState::Failed,
        }
    }

    pub fn regions(&self) -> Option<&AllowedRegionSet> {
        match &self.state {
            RegionState::Ready(regions) => Some(regions),
            _ => None,
        }
    }

    pub fn fallback_bounds(&self) -> &Bounds {
        &self.fallback
    }

    // -----------------------------------------------------------------------
    // LOAD LIFECYCLE
    // -----------------------------------------------------------------------

    /// Starts a fresh load attempt and supersedes any attempt in flight.
    pub fn begin_load(&mut self) -> LoadToken {
        self.generation += 1;
        self.set_state(RegionState::Loading);
        LoadToken(self.generation)
    }

    /// Applies a load result if `token` is still current.
    ///
    /// Returns `false` when the result was discarded because a newer attempt
    /// started or the owner tore down in the meantime.
    pub fn finish_load(&mut self, token: LoadToken, result: Result<LoadedRegion>) -> bool {
        if token.0 != self.generation {
            debug!(
                token = token.0,
                current = self.generation,
                "discarding superseded boundary load"
            );
            return false;
        }
        match result {
            Ok(loaded) => self.set_state(RegionState::Ready(loaded.regions)),
            Err(e) => {
                warn!(error = %e, "boundary load failed, using approximate bounds");
                self.set_state(RegionState::Failed);
            }
        }
        true
    }

    /// Invalidates every outstanding token without touching the current state.
    pub fn invalidate(&mut self) {
        self.generation += 1;
    }

    fn set_state(&mut self, state: RegionState) {
        self.state = state;
        self.last_hover = None;
    }

    // -----------------------------------------------------------------------
    // ADMISSION
    // -----------------------------------------------------------------------

    pub fn is_admissible(&self, p: GeoPoint) -> bool {
        match &self.state {
            RegionState::Ready(regions) => point_in_region_set(p, regions),
            RegionState::Loading | RegionState::Failed => point_in_approx_bounds(p, &self.fallback),
        }
    }

    /// Hover path: admissibility for the cursor affordance.
    ///
    /// Repeated events for the same point reuse the previous answer.
    pub fn hover(&mut self, p: GeoPoint) -> bool {
        if let Some((last, admissible)) = self.last_hover {
            if last == p {
                return admissible;
            }
        }
        let admissible = self.is_admissible(p);
        trace!(%p, admissible, "hover");
        self.last_hover = Some((p, admissible));
        admissible
    }

    /// Click path: admitted points become the selection, others are dropped
    /// without any feedback.
    pub fn click<V: MapView>(&self, p: GeoPoint, selection: &mut SelectionController<V>) -> bool {
        if !self.is_admissible(p) {
            debug!(%p, "click outside allowed region ignored");
            return false;
        }
        selection.select(p);
        true
    }

    /// Search path: like a click, but rejection is reported back so the
    /// caller can show an out-of-region advisory.
    pub fn admit_search<V: MapView>(
        &self,
        p: GeoPoint,
        selection: &mut SelectionController<V>,
    ) -> SearchAdmission {
        if !self.is_admissible(p) {
            debug!(%p, "search result outside allowed region");
            return SearchAdmission::OutOfRegion(p);
        }
        selection.select(p);
        SearchAdmission::Admitted(p)
    }
}
