//! Map Sync
//!
//! Turns the active day's places into numbered markers and a viewport that fits
//! them. The embedded map widget is never touched directly: its callbacks are fed
//! to a `MapEventAdapter` which answers with `MapCommand`s, so everything here
//! stays plain data and can be exercised without a browser.

use std::f64::consts::{LN_2, PI};

use serde::{Deserialize, Serialize};

use crate::models::trip::{Coordinates, Place};

pub const MAX_FIT_ZOOM: u8 = 15;
pub const DEFAULT_ZOOM: u8 = 12;
/// Seoul, used until a day with coordinates is shown.
pub const DEFAULT_CENTER: Coordinates = Coordinates {
    lat: 37.5665,
    lng: 126.9780,
};

const TILE_SIZE: f64 = 256.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapSize {
    pub width: u32,
    pub height: u32,
}

impl Default for MapSize {
    fn default() -> Self {
        Self {
            width: 400,
            height: 256,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    /// 1-based position in the day's full place list, not among markers.
    pub label: u32,
    pub title: String,
    pub position: Coordinates,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Bounds {
    fn at(point: Coordinates) -> Self {
        Self {
            south: point.lat,
            west: point.lng,
            north: point.lat,
            east: point.lng,
        }
    }

    fn extend(mut self, point: Coordinates) -> Self {
        self.south = self.south.min(point.lat);
        self.north = self.north.max(point.lat);
        self.west = self.west.min(point.lng);
        self.east = self.east.max(point.lng);
        self
    }

    pub fn contains(&self, point: Coordinates) -> bool {
        (self.south..=self.north).contains(&point.lat)
            && (self.west..=self.east).contains(&point.lng)
    }

    pub fn center(&self) -> Coordinates {
        Coordinates {
            lat: (self.south + self.north) / 2.0,
            lng: (self.west + self.east) / 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub bounds: Bounds,
    pub center: Coordinates,
    pub zoom: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapUpdate {
    pub markers: Vec<Marker>,
    /// `None` means leave the widget's current viewport alone.
    pub viewport: Option<Viewport>,
}

pub fn markers_for(places: &[Place]) -> Vec<Marker> {
    places
        .iter()
        .enumerate()
        .filter_map(|(index, place)| {
            place.coordinates.map(|position| Marker {
                label: index as u32 + 1,
                title: place.name.clone(),
                position,
            })
        })
        .collect()
}

pub fn bounds_of(markers: &[Marker]) -> Option<Bounds> {
    let mut positions = markers.iter().map(|marker| marker.position);
    let first = positions.next()?;
    Some(positions.fold(Bounds::at(first), Bounds::extend))
}

/// Highest zoom at which `bounds` still fits a map of `size`, capped at
/// `MAX_FIT_ZOOM`. A single point or a tight cluster lands on the cap.
pub fn fit_zoom(bounds: &Bounds, size: MapSize) -> u8 {
    fn lat_rad(lat: f64) -> f64 {
        let sin = lat.to_radians().sin();
        let rad_x2 = ((1.0 + sin) / (1.0 - sin)).ln() / 2.0;
        rad_x2.clamp(-PI, PI) / 2.0
    }

    fn zoom_for(map_px: f64, fraction: f64) -> f64 {
        if fraction <= 0.0 {
            return f64::INFINITY;
        }
        (map_px / TILE_SIZE / fraction).ln() / LN_2
    }

    let lat_fraction = (lat_rad(bounds.north) - lat_rad(bounds.south)) / PI;
    let lng_fraction = (bounds.east - bounds.west) / 360.0;

    let zoom = zoom_for(size.height as f64, lat_fraction)
        .min(zoom_for(size.width as f64, lng_fraction))
        .floor();

    if zoom.is_nan() || zoom >= MAX_FIT_ZOOM as f64 {
        MAX_FIT_ZOOM
    } else if zoom <= 0.0 {
        0
    } else {
        zoom as u8
    }
}

pub fn fit_viewport(markers: &[Marker], size: MapSize) -> Option<Viewport> {
    let bounds = bounds_of(markers)?;
    Some(Viewport {
        bounds,
        center: bounds.center(),
        zoom: fit_zoom(&bounds, size),
    })
}

/// Callbacks coming back from the widget.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MapEvent {
    MarkerClicked { label: u32 },
    BoundsChanged { zoom: u8 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoWindow {
    pub name: String,
    pub description: String,
    pub category: String,
    pub estimated_time: u32,
}

/// What the widget should do in response to an event.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MapCommand {
    OpenInfoWindow { label: u32, content: InfoWindow },
    SetZoom { zoom: u8 },
}

/// Listener state for one rendered set of markers.
#[derive(Debug, Default)]
pub struct MapEventAdapter {
    info_windows: Vec<(u32, InfoWindow)>,
    // One-shot, like a bounds_changed listener registered once after fitBounds
    clamp_pending: bool,
}

impl MapEventAdapter {
    fn attach(places: &[Place], fitted: bool) -> Self {
        let info_windows = places
            .iter()
            .enumerate()
            .filter(|(_, place)| place.coordinates.is_some())
            .map(|(index, place)| {
                (
                    index as u32 + 1,
                    InfoWindow {
                        name: place.name.clone(),
                        description: place.description.clone(),
                        category: place.category.clone(),
                        estimated_time: place.estimated_time,
                    },
                )
            })
            .collect();

        Self {
            info_windows,
            clamp_pending: fitted,
        }
    }

    pub fn handle(&mut self, event: MapEvent) -> Option<MapCommand> {
        match event {
            MapEvent::MarkerClicked { label } => self
                .info_windows
                .iter()
                .find(|(marker, _)| *marker == label)
                .map(|(label, content)| MapCommand::OpenInfoWindow {
                    label: *label,
                    content: content.clone(),
                }),
            MapEvent::BoundsChanged { zoom } => {
                if !self.clamp_pending {
                    return None;
                }
                self.clamp_pending = false;
                (zoom > MAX_FIT_ZOOM).then_some(MapCommand::SetZoom { zoom: MAX_FIT_ZOOM })
            }
        }
    }
}

/// Owns the adapter for whatever is currently drawn and replaces it on every sync.
#[derive(Debug, Default)]
pub struct MapSync {
    size: MapSize,
    adapter: Option<MapEventAdapter>,
}

impl MapSync {
    pub fn new(size: MapSize) -> Self {
        Self {
            size,
            adapter: None,
        }
    }

    pub fn sync(&mut self, places: &[Place]) -> MapUpdate {
        self.teardown();

        let markers = markers_for(places);
        let viewport = fit_viewport(&markers, self.size);
        self.adapter = Some(MapEventAdapter::attach(places, viewport.is_some()));

        MapUpdate { markers, viewport }
    }

    /// Events arriving after teardown are dropped.
    pub fn handle_event(&mut self, event: MapEvent) -> Option<MapCommand> {
        self.adapter.as_mut()?.handle(event)
    }

    pub fn teardown(&mut self) {
        self.adapter = None;
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapStyler {
    pub visibility: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapStyle {
    pub feature_type: &'static str,
    pub element_type: &'static str,
    pub stylers: Vec<MapStyler>,
}

/// Bootstrap options for the embedded map widget.
#[derive(Debug, Clone, Serialize)]
pub struct MapConfig {
    pub api_key: String,
    pub center: Coordinates,
    pub zoom: u8,
    pub styles: Vec<MapStyle>,
}

impl MapConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            // Hide point-of-interest labels so only our markers stand out
            styles: vec![MapStyle {
                feature_type: "poi",
                element_type: "labels",
                stylers: vec![MapStyler { visibility: "off" }],
            }],
        }
    }
}
