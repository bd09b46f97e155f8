//! Page model and the operations that render into it.
//!
//! `Page` stands in for the browser DOM: a details panel that can be hidden
//! and a map view holding either nothing, an error message or a map widget.
//! Every render replaces what it touches; nothing is patched in place.

use serde::Serialize;

use crate::config::{
    LABEL_IP_ADDRESS, LABEL_ISP, LABEL_LOCATION, LABEL_TIMEZONE, MAP_ZOOM, MARKER_ICON_PATH,
    TILE_ATTRIBUTION, TILE_URL_TEMPLATE,
};
use crate::geolocation::{Coordinates, LocationRecord};

/// One label/value row of the details panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailItem {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailsPanel {
    pub hidden: bool,
    pub items: Vec<DetailItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub position: Coordinates,
    pub icon_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileLayer {
    pub url_template: String,
    pub attribution: String,
}

/// A single-marker map.
///
/// Created whole by [`render_map`] and dropped on the next render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapWidget {
    pub center: Coordinates,
    pub zoom: u8,
    pub marker: Marker,
    pub tiles: TileLayer,
}

impl MapWidget {
    /// Map centred on `center` at the fixed zoom, with the location marker
    /// and the OpenStreetMap tile layer.
    pub fn new(center: Coordinates) -> Self {
        Self {
            center,
            zoom: MAP_ZOOM,
            marker: Marker {
                position: center,
                icon_url: MARKER_ICON_PATH.to_string(),
            },
            tiles: TileLayer {
                url_template: TILE_URL_TEMPLATE.to_string(),
                attribution: TILE_ATTRIBUTION.to_string(),
            },
        }
    }

    /// Link to the same view on openstreetmap.org.
    pub fn osm_link(&self) -> String {
        format!(
            "https://www.openstreetmap.org/?mlat={lat}&mlon={lng}#map={zoom}/{lat}/{lng}",
            lat = self.center.lat,
            lng = self.center.lng,
            zoom = self.zoom
        )
    }
}

/// Content of the map container.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum MapView {
    /// Nothing rendered yet
    Empty,
    /// An error message is the sole content
    Error(String),
    Map(MapWidget),
}

/// What the page is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewState {
    /// Nothing has been rendered yet
    Loading,
    /// A location is shown on the map with its details
    Idle,
    /// An error message replaces the map; details are hidden
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    /// Text of the search box
    pub search_text: String,
    pub details: DetailsPanel,
    pub map_view: MapView,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            details: DetailsPanel {
                hidden: true,
                items: Vec::new(),
            },
            map_view: MapView::Empty,
        }
    }
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view_state(&self) -> ViewState {
        match self.map_view {
            MapView::Empty => ViewState::Loading,
            MapView::Error(_) => ViewState::Error,
            MapView::Map(_) => ViewState::Idle,
        }
    }

    /// Value of the detail row with `label`, if present.
    pub fn detail(&self, label: &str) -> Option<&str> {
        self.details
            .items
            .iter()
            .find(|item| item.label == label)
            .map(|item| item.value.as_str())
    }

    pub fn map(&self) -> Option<&MapWidget> {
        match &self.map_view {
            MapView::Map(widget) => Some(widget),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.map_view {
            MapView::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Hides the details panel and shows `message` alone in the map container.
pub fn render_error(page: &mut Page, message: &str) {
    page.details.hidden = true;
    page.map_view = MapView::Error(message.to_string());
}

/// Shows the details panel with the four rows for `record`.
pub fn render_details(page: &mut Page, record: &LocationRecord) {
    let location = &record.location;
    page.details.hidden = false;
    page.details.items = vec![
        DetailItem {
            label: LABEL_IP_ADDRESS,
            value: record.ip.clone(),
        },
        DetailItem {
            label: LABEL_LOCATION,
            value: format!(
                "{}, {} {}",
                location.region, location.city, location.postal_code
            ),
        },
        DetailItem {
            label: LABEL_TIMEZONE,
            value: format!("UTC {}", location.timezone),
        },
        DetailItem {
            label: LABEL_ISP,
            value: record.isp.clone(),
        },
    ];
}

/// Replaces the map container with a new map centred on `record`, then
/// renders its details.
pub fn render_map(page: &mut Page, record: &LocationRecord) {
    page.map_view = MapView::Map(MapWidget::new(record.coordinates()));
    render_details(page, record);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geolocation::Location;

    fn new_york() -> LocationRecord {
        LocationRecord {
            ip: "203.0.113.7".to_string(),
            location: Location {
                lat: 40.7128,
                lng: -74.006,
                region: "NY".to_string(),
                city: "New York".to_string(),
                postal_code: "10001".to_string(),
                timezone: "-05:00".to_string(),
                country: "US".to_string(),
                geoname_id: None,
            },
            isp: "ExampleISP".to_string(),
            autonomous_system: None,
        }
    }

    #[test]
    fn test_new_page_is_loading() {
        let page = Page::new();
        assert_eq!(page.view_state(), ViewState::Loading);
        assert!(page.details.hidden);
        assert!(page.details.items.is_empty());
    }

    #[test]
    fn test_render_map_shows_details_and_centres_map() {
        let mut page = Page::new();
        render_map(&mut page, &new_york());

        assert_eq!(page.view_state(), ViewState::Idle);
        assert!(!page.details.hidden);
        assert_eq!(page.detail(LABEL_IP_ADDRESS), Some("203.0.113.7"));
        assert_eq!(page.detail(LABEL_LOCATION), Some("NY, New York 10001"));
        assert_eq!(page.detail(LABEL_TIMEZONE), Some("UTC -05:00"));
        assert_eq!(page.detail(LABEL_ISP), Some("ExampleISP"));

        let map = page.map().unwrap();
        assert_eq!(
            map.center,
            Coordinates {
                lat: 40.7128,
                lng: -74.006
            }
        );
        assert_eq!(map.zoom, 15);
        assert_eq!(map.marker.position, map.center);
        assert_eq!(map.marker.icon_url, MARKER_ICON_PATH);
        assert!(map.tiles.attribution.contains("OpenStreetMap"));
    }

    #[test]
    fn test_render_error_hides_details_and_clears_map() {
        let mut page = Page::new();
        render_map(&mut page, &new_york());
        render_error(&mut page, "Problem fetching data");

        assert_eq!(page.view_state(), ViewState::Error);
        assert!(page.details.hidden);
        assert!(page.map().is_none());
        assert_eq!(page.error_message(), Some("Problem fetching data"));
    }

    #[test]
    fn test_render_error_keeps_message_verbatim() {
        let mut page = Page::new();
        render_error(&mut page, "bad\x1b[31m news");
        assert_eq!(page.error_message(), Some("bad\x1b[31m news"));
    }

    #[test]
    fn test_render_map_replaces_previous_state() {
        let mut page = Page::new();
        render_error(&mut page, "boom");

        let mut other = new_york();
        other.location.lat = 51.5072;
        other.location.lng = -0.1276;
        other.location.city = "London".to_string();
        render_map(&mut page, &new_york());
        render_map(&mut page, &other);

        assert_eq!(page.details.items.len(), 4);
        assert_eq!(page.detail(LABEL_LOCATION), Some("NY, London 10001"));
        assert_eq!(page.map().unwrap().center.lat, 51.5072);
        assert_eq!(page.error_message(), None);
    }

    #[test]
    fn test_osm_link() {
        let widget = MapWidget::new(Coordinates {
            lat: 40.7128,
            lng: -74.006,
        });
        assert_eq!(
            widget.osm_link(),
            "https://www.openstreetmap.org/?mlat=40.7128&mlon=-74.006#map=15/40.7128/-74.006"
        );
    }

    #[test]
    fn test_page_serializes_map_view_kind() {
        let mut page = Page::new();
        render_error(&mut page, "nope");
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["map_view"]["kind"], "error");
        assert_eq!(json["map_view"]["content"], "nope");
        assert_eq!(json["details"]["hidden"], true);
    }
}
