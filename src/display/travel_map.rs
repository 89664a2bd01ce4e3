//! Travel map: a fixed base map with two clickable markers.

use serde::Serialize;

use crate::render::{MapSink, RenderError, escape_html};

pub const DEFAULT_CENTER: LatLng = LatLng { lat: 20.0, lng: 10.0 };
pub const DEFAULT_ZOOM: u8 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MapView {
    pub center: LatLng,
    pub zoom: u8,
}

impl Default for MapView {
    fn default() -> Self {
        Self { center: DEFAULT_CENTER, zoom: DEFAULT_ZOOM }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TravelMarker {
    pub position: LatLng,
    pub title: String,
    pub icon: String,
}

impl TravelMarker {
    /// Content of the info popup opened when the marker is clicked.
    #[must_use]
    pub fn popup_html(&self) -> String {
        let title = escape_html(&self.title);
        format!("<div class=\"map-popup\"><h3>{title}</h3><p>One of my favourite stops: {title}.</p></div>")
    }
}

/// The fixed marker set, in drawing order.
#[must_use]
pub fn markers() -> Vec<TravelMarker> {
    vec![
        TravelMarker {
            position: LatLng { lat: 48.8584, lng: 2.2945 },
            title: "Eiffel Tower".to_string(),
            icon: "/static/images/tower.png".to_string(),
        },
        TravelMarker {
            position: LatLng { lat: 35.0116, lng: 135.7681 },
            title: "Kyoto".to_string(),
            icon: "/static/images/temple.png".to_string(),
        },
    ]
}

/// Draw the base map and markers. Returns how many markers were placed.
///
/// # Errors
///
/// Returns [`RenderError`] if the map widget fails.
pub fn render(sink: &dyn MapSink) -> Result<usize, RenderError> {
    let markers = markers();
    sink.draw(&MapView::default(), &markers)?;
    tracing::debug!(markers = markers.len(), "travel map drawn");
    Ok(markers.len())
}

#[cfg(test)]
#[path = "travel_map_test.rs"]
mod tests;
