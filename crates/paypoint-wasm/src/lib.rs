//! paypoint-wasm: WebAssembly bindings for paypoint-core
//!
//! Exposes the embedded payment point catalog to a JavaScript map front end.
//! The page fills its three selectors from `get_facets()`, renders the
//! markers returned by `filter_points(...)`, and once the browser's
//! geolocation answers, highlights `nearest_point(lat, lng)`.
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { get_facets, filter_points, nearest_point } from 'paypoint-wasm';
//!
//! await init();
//! const facets = get_facets();          // { cities: [...], districts: [...], types: [...] }
//! const shown = filter_points('İstanbul', null, 'ATM');
//!
//! navigator.geolocation?.getCurrentPosition(
//!   (pos) => console.log(nearest_point(pos.coords.latitude, pos.coords.longitude)),
//!   (err) => console.warn(err.message),  // no nearest point on failure
//! );
//! ```
//!
//! Notes
//! -----
//! - Filter arguments take `null`, `undefined` or `''` for "no constraint".
//! - The nearest point always searches the whole catalog, regardless of the
//!   active filters.
//! - Functions return `null` instead of throwing when the catalog failed to
//!   load; the failure is reported once on the console.
use std::sync::OnceLock;
use wasm_bindgen::prelude::*;

use paypoint_core::prelude::*;
use serde::Serialize;
use serde_wasm_bindgen::to_value;

static CATALOG: OnceLock<Option<PointCatalog>> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Initializing paypoint WASM module...".into());
    if let Some(catalog) = catalog() {
        web_sys::console::log_1(&format!("Loaded {} payment points", catalog.len()).into());
    }
}

fn report(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    tracing::error!("{message}");
}

fn catalog() -> Option<&'static PointCatalog> {
    CATALOG
        .get_or_init(|| match PointCatalog::embedded() {
            Ok(c) => Some(c),
            Err(e) => {
                report(&format!("paypoint: embedded catalog failed to load: {e}"));
                None
            }
        })
        .as_ref()
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> JsValue {
    to_value(value).unwrap_or_else(|e| {
        report(&format!("paypoint: serialization failed: {e}"));
        JsValue::NULL
    })
}

fn filters(city: Option<String>, district: Option<String>, kind: Option<String>) -> FilterState {
    let mut state = FilterState::new();
    for (facet, value) in [
        (Facet::City, city),
        (Facet::District, district),
        (Facet::Type, kind),
    ] {
        if let Some(v) = value {
            state.set(facet, v);
        }
    }
    state
}

/// Validates a position from the page; out-of-range values are reported and dropped.
fn user_position(lat: f64, lng: f64) -> Option<UserCoordinate> {
    UserCoordinate::new(lat, lng)
        .map_err(|e| report(&format!("paypoint: invalid position: {e}")))
        .ok()
}

/// The nearest point as handed to JavaScript.
#[derive(Serialize)]
struct NearestView<'a> {
    point: &'a Point,
    distance_m: f64,
    distance_text: String,
}

impl<'a> From<Nearest<'a>> for NearestView<'a> {
    fn from(n: Nearest<'a>) -> Self {
        Self {
            point: n.point,
            distance_m: n.distance_m,
            distance_text: query::format_distance_km(n.distance_m),
        }
    }
}

#[derive(Serialize)]
struct QueryView<'a> {
    filtered: Vec<&'a Point>,
    nearest: Option<NearestView<'a>>,
    bounds: Option<Bounds>,
}

/* --------------------------------------------------------------------------
   Catalog
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn point_count() -> usize {
    catalog().map_or(0, PointCatalog::len)
}

#[wasm_bindgen]
pub fn get_points() -> JsValue {
    catalog().map_or(JsValue::NULL, |c| to_js(c.points()))
}

/// `{ cities, districts, types }`, each sorted ascending.
#[wasm_bindgen]
pub fn get_facets() -> JsValue {
    catalog().map_or(JsValue::NULL, |c| to_js(c.facets()))
}

/// Initial map view when nothing is shown: `{ center: [lat, lng], zoom }`.
#[wasm_bindgen]
pub fn default_view() -> JsValue {
    #[derive(Serialize)]
    struct View {
        center: Coordinates,
        zoom: u8,
    }
    to_js(&View {
        center: DEFAULT_CENTER,
        zoom: DEFAULT_ZOOM,
    })
}

/* --------------------------------------------------------------------------
   Queries
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn filter_points(
    city: Option<String>,
    district: Option<String>,
    kind: Option<String>,
) -> JsValue {
    let Some(catalog) = catalog() else {
        return JsValue::NULL;
    };
    let matched = query::filter(catalog, &filters(city, district, kind));
    to_js(&matched)
}

/// Nearest point over the whole catalog, or `null` for an invalid position.
#[wasm_bindgen]
pub fn nearest_point(lat: f64, lng: f64) -> JsValue {
    let Some(catalog) = catalog() else {
        return JsValue::NULL;
    };
    let Some(user) = user_position(lat, lng) else {
        return JsValue::NULL;
    };
    match query::nearest(catalog, Some(user)) {
        Some(n) => to_js(&NearestView::from(n)),
        None => JsValue::NULL,
    }
}

/// Filtered points, their bounds and (when a position is given) the nearest point.
#[wasm_bindgen]
pub fn run_query(
    city: Option<String>,
    district: Option<String>,
    kind: Option<String>,
    lat: Option<f64>,
    lng: Option<f64>,
) -> JsValue {
    let Some(catalog) = catalog() else {
        return JsValue::NULL;
    };
    let user = match (lat, lng) {
        (Some(lat), Some(lng)) => user_position(lat, lng),
        _ => None,
    };
    let result = query::run(catalog, &filters(city, district, kind), user);
    to_js(&QueryView {
        filtered: result.filtered,
        nearest: result.nearest.map(NearestView::from),
        bounds: result.bounds,
    })
}

#[wasm_bindgen]
pub fn format_distance(meters: f64) -> String {
    query::format_distance_km(meters)
}
