//! Browser bindings (feature `wasm`).
//!
//! Accepts the same request shape as [`SequenceRequest`] as a plain JS
//! object and returns `{ order, num_sequenced }`.

use wasm_bindgen::prelude::*;

use crate::distance::{DistanceFunction, Haversine};
use crate::models::{GeoPoint, SequenceRequest};

fn js_error(message: impl AsRef<str>) -> JsValue {
    js_sys::Error::new(message.as_ref()).into()
}

/// Orders delivery stops from an origin.
#[wasm_bindgen(js_name = sequenceRoute)]
pub fn sequence_route(request: JsValue) -> Result<JsValue, JsValue> {
    let request: SequenceRequest =
        serde_wasm_bindgen::from_value(request).map_err(|e| js_error(e.to_string()))?;
    let route = request.run().map_err(|e| js_error(e.to_string()))?;
    serde_wasm_bindgen::to_value(&route).map_err(|e| js_error(e.to_string()))
}

/// Great-circle distance in meters between two coordinates.
#[wasm_bindgen(js_name = distanceMeters)]
pub fn distance_meters(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> Result<f64, JsValue> {
    let a = GeoPoint::new(lat1, lng1).ok_or_else(|| js_error("invalid first coordinate"))?;
    let b = GeoPoint::new(lat2, lng2).ok_or_else(|| js_error("invalid second coordinate"))?;
    Ok(Haversine.distance(a, b))
}
