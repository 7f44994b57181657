// crates/geofence-core/src/selection.rs
use crate::model::GeoPoint;
use tracing::debug;

/// Cursor affordance shown while hovering the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Pointer,
    Blocked,
}

/// Imperative commands the map widget accepts.
///
/// Whatever renders the map implements this; the engine never talks to a
/// concrete widget.
pub trait MapView {
    /// Current zoom level of the view.
    fn zoom(&self) -> u8;

    /// Moves the view. Fire-and-forget: the engine never waits on it.
    fn set_view(&mut self, center: GeoPoint, zoom: u8, animate: bool);

    fn set_cursor(&mut self, _cursor: Cursor) {}
}

/// A view that only remembers the last command. Useful for headless use.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NullView {
    pub center: Option<GeoPoint>,
    pub zoom: u8,
    pub cursor: Cursor,
}

impl MapView for NullView {
    fn zoom(&self) -> u8 {
        self.zoom
    }

    fn set_view(&mut self, center: GeoPoint, zoom: u8, _animate: bool) {
        self.center = Some(center);
        self.zoom = zoom;
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = cursor;
    }
}

/// Owns the current selection and recenters the map on it.
#[derive(Debug)]
pub struct SelectionController<V> {
    current: Option<GeoPoint>,
    view: V,
    min_zoom: u8,
}

impl<V: MapView> SelectionController<V> {
    pub fn new(view: V, min_zoom: u8) -> Self {
        Self {
            current: None,
            view,
            min_zoom,
        }
    }

    pub fn current(&self) -> Option<GeoPoint> {
        self.current
    }

    /// Selects `p` and recenters, zooming in to at least the minimum zoom.
    ///
    /// Only reachable through the gate; raw pointer handlers never call it.
    pub(crate) fn select(&mut self, p: GeoPoint) {
        self.current = Some(p);
        let zoom = self.view.zoom().max(self.min_zoom);
        debug!(%p, zoom, "selection set, recentering");
        self.view.set_view(p, zoom, true);
    }

    /// Drops the selection. The view stays where it is.
    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }
}
