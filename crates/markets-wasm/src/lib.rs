//! markets-wasm — WebAssembly bindings for markets-core
//!
//! The map page loads the consolidated dataset once, then asks for the markets
//! inside the visible bounds every time the map moves, passing the ids already
//! drawn so they are not returned twice.
//!
//! ```javascript
//! import init, { init_dataset, query } from 'markets-wasm';
//! import markets from './markets.json?raw';
//!
//! await init();
//! init_dataset(markets);
//!
//! const shown = [];
//! map.on('moveend', () => {
//!   const b = map.getBounds();
//!   const found = query(b.getSouth(), b.getWest(), b.getNorth(), b.getEast(), shown);
//!   for (const m of found) { addMarker(m); shown.push(m.id); }
//! });
//! ```
//!
//! Notes
//! -----
//! - Results are plain objects shaped like `Market`
//!   (`id`, `title`, `coordinates`, `address`, `postalCode`, `city`, `hours`).
//! - Calling `query` before `init_dataset` throws.
use std::collections::HashSet;
use std::sync::OnceLock;
use wasm_bindgen::prelude::*;

use markets_core::{Bounds, CompactMarket, Market, MarketDataset, MarketSearch};
use serde::Serialize;
use serde_wasm_bindgen::Serializer;

static DB: OnceLock<MarketDataset> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// Loads the artifact text. Only the first successful call takes effect.
#[wasm_bindgen]
pub fn init_dataset(json: &str) -> Result<usize, JsError> {
    if let Some(db) = DB.get() {
        return Ok(db.len());
    }
    let db = MarketDataset::from_json_str(json).map_err(|e| JsError::new(&e.to_string()))?;
    let db = DB.get_or_init(|| db);

    log(&format!("✓ Loaded {} markets", db.len()));
    Ok(db.len())
}

#[wasm_bindgen]
pub fn market_count() -> usize {
    DB.get().map_or(0, MarketDataset::len)
}

/* --------------------------------------------------------------------------
   Bounds Query
-------------------------------------------------------------------------- */

/// Markets strictly inside the box, minus the ids in `excluded`.
///
/// Above 100 matches, a random `limit` of them (default 100) is returned.
#[wasm_bindgen]
pub fn query(
    min_lat: f64,
    min_lng: f64,
    max_lat: f64,
    max_lng: f64,
    excluded: &js_sys::Array,
    limit: Option<u32>,
) -> Result<JsValue, JsError> {
    let db = dataset()?;
    let excluded: HashSet<String> = excluded.iter().filter_map(|v| v.as_string()).collect();
    let bounds = Bounds::new([min_lat, min_lng], [max_lat, max_lng]);

    let found = db.query(&bounds, &excluded, limit.map(|l| l as usize));
    to_js(&found)
}

#[wasm_bindgen]
pub fn markets_in_city(city: &str) -> Result<JsValue, JsError> {
    let found: Vec<Market> = dataset()?
        .find_by_city(city)
        .into_iter()
        .map(CompactMarket::to_market)
        .collect();
    to_js(&found)
}

fn dataset() -> Result<&'static MarketDataset, JsError> {
    DB.get()
        .ok_or_else(|| JsError::new("dataset not loaded; call init_dataset first"))
}

// Plain objects rather than ES `Map`s for the hours mapping.
fn to_js(markets: &[Market]) -> Result<JsValue, JsError> {
    markets
        .serialize(&Serializer::json_compatible())
        .map_err(|e| JsError::new(&e.to_string()))
}

fn log(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&msg.into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}
