//! HTML rendering of a [`Page`].
//!
//! Produces a complete document: header with the search form, the details
//! panel and the map container. The map itself is drawn in the browser by
//! Leaflet from the widget's centre, zoom, marker and tile layer.

use crate::config::{LEAFLET_CSS_URL, LEAFLET_JS_URL};
use crate::render::page::{DetailsPanel, MapView, MapWidget, Page};
use crate::utils::escape_html;

const STYLE: &str = r#"
*{box-sizing:border-box;margin:0;padding:0}
body{font-family:"Rubik",system-ui,sans-serif;font-size:18px;min-height:100vh;display:flex;flex-direction:column}
header{background:linear-gradient(135deg,#4a5cd6,#6f8bf5);padding:2rem 1rem 8rem;text-align:center;color:#fff}
header h1{font-weight:500;margin-bottom:1.5rem}
.search{display:flex;max-width:555px;margin:0 auto}
.search input{flex:1;border:none;border-radius:15px 0 0 15px;padding:1rem 1.5rem;font-size:1.1rem}
.arrow{border:none;border-radius:0 15px 15px 0;background:#000;color:#fff;width:58px;font-size:1.2rem;cursor:pointer}
.arrow:hover{background:#3f3f3f}
.details{position:relative;z-index:1000;display:grid;grid-template-columns:repeat(4,1fr);max-width:1110px;margin:-6rem auto 0;background:#fff;border-radius:15px;padding:2rem;box-shadow:0 20px 40px rgba(0,0,0,.1)}
.details__label{font-size:.75rem;font-weight:700;letter-spacing:.15em;text-transform:uppercase;color:#969696;margin-bottom:.5rem}
.details__value{font-size:1.4rem;font-weight:500;color:#2b2b2b}
.hidden{display:none}
.mapView{flex:1;display:flex;flex-direction:column}
#map{flex:1;min-height:420px}
.error{color:#2b2b2b;padding:8rem 1rem}
.txt-center{text-align:center}
@media (max-width:768px){.details{grid-template-columns:1fr;text-align:center;margin:-6rem 1rem 0}}
"#;

/// How the document is going to be used.
#[derive(Debug, Clone, Copy)]
pub struct HtmlOptions<'a> {
    /// Text to pre-fill the search box with
    pub search_text: &'a str,
    /// Served by the local web UI: include the search form and the custom
    /// marker icon. Standalone documents use Leaflet's default marker since
    /// the icon route is not available.
    pub interactive: bool,
}

/// Renders `page` as a complete HTML document.
pub fn render_document(page: &Page, options: HtmlOptions<'_>) -> String {
    let search = if options.interactive {
        render_search_form(options.search_text)
    } else {
        String::new()
    };
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>IP Address Tracker</title>
<link rel="stylesheet" href="{css}">
<script src="{js}"></script>
<style>{style}</style>
</head>
<body>
<header>
<h1>IP Address Tracker</h1>
{search}</header>
{details}
{map_view}
</body>
</html>
"#,
        css = LEAFLET_CSS_URL,
        js = LEAFLET_JS_URL,
        style = STYLE,
        search = search,
        details = render_details_panel(&page.details),
        map_view = render_map_view(&page.map_view, options.interactive),
    )
}

fn render_search_form(search_text: &str) -> String {
    format!(
        r#"<form class="search" action="/search" method="get">
<input id="searchbar" name="q" type="text" value="{}" placeholder="Search for any IP address or domain" autocomplete="off">
<button class="arrow" type="submit" aria-label="Search">&gt;</button>
</form>
"#,
        escape_html(search_text)
    )
}

/// The `.details` panel. Hidden panels keep their last content.
pub fn render_details_panel(details: &DetailsPanel) -> String {
    let class = if details.hidden {
        "details hidden"
    } else {
        "details"
    };
    let items: String = details
        .items
        .iter()
        .map(|item| {
            format!(
                r#"<div class="details__item">
<p class="details__label">{}</p>
<p class="details__value">{}</p>
</div>
"#,
                escape_html(item.label),
                escape_html(&item.value)
            )
        })
        .collect();
    format!("<section class=\"{class}\">\n{items}</section>")
}

/// The `.mapView` container: empty, an error heading, or the map.
pub fn render_map_view(map_view: &MapView, custom_icon: bool) -> String {
    let content = match map_view {
        MapView::Empty => String::new(),
        MapView::Error(message) => format!(
            "<h2 class=\"error txt-center\">{}</h2>\n",
            escape_html(message)
        ),
        MapView::Map(widget) => render_map_widget(widget, custom_icon),
    };
    format!("<main class=\"mapView\">\n{content}</main>")
}

fn render_map_widget(widget: &MapWidget, custom_icon: bool) -> String {
    let lat = widget.center.lat;
    let lng = widget.center.lng;
    let marker_options = if custom_icon {
        format!(
            ", {{ icon: L.icon({{ iconUrl: {} }}) }}",
            js_string(&widget.marker.icon_url)
        )
    } else {
        String::new()
    };
    format!(
        r#"<div id="map"></div>
<script>
const map = L.map('map').setView([{lat}, {lng}], {zoom});
L.tileLayer({tiles}, {{ attribution: {attribution} }}).addTo(map);
L.marker([{mlat}, {mlng}]{marker_options}).addTo(map);
</script>
"#,
        zoom = widget.zoom,
        tiles = js_string(&widget.tiles.url_template),
        attribution = js_string(&widget.tiles.attribution),
        mlat = widget.marker.position.lat,
        mlng = widget.marker.position.lng,
    )
}

/// A JavaScript string literal that is also safe inside a `<script>` element.
fn js_string(value: &str) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| "\"\"".to_string())
        .replace("</", "<\\/")
}
