//! C ABI entry points (feature `ffi`).
//!
//! Requests and responses are JSON strings. The caller owns the request;
//! the returned string is owned by this library and must be released with
//! [`assetflow_free_string`].

use std::ffi::{CStr, CString};
use std::ptr;

use libc::c_char;

use crate::error::Result;
use crate::models::SequenceRequest;

/// Sequences a JSON [`SequenceRequest`] and returns the route as JSON.
///
/// On success the response is `{"order": [...], "num_sequenced": n}`; on
/// failure it is `{"error": "..."}`.
pub fn sequence_json(request: &str) -> Result<String> {
    let request: SequenceRequest = serde_json::from_str(request)?;
    let route = request.run()?;
    Ok(serde_json::to_string(&route)?)
}

fn error_json(message: &str) -> String {
    serde_json::json!({ "error": message }).to_string()
}

/// Sequences a NUL-terminated JSON request.
///
/// Returns a newly allocated NUL-terminated JSON response, or null if it
/// could not be allocated.
///
/// # Safety
///
/// `request` must be null or point to a valid NUL-terminated string that
/// stays alive for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn assetflow_sequence_json(request: *const c_char) -> *mut c_char {
    let response = if request.is_null() {
        error_json("null request")
    } else {
        let input = CStr::from_ptr(request).to_string_lossy();
        sequence_json(&input).unwrap_or_else(|e| error_json(&e.to_string()))
    };
    CString::new(response)
        .map(CString::into_raw)
        .unwrap_or(ptr::null_mut())
}

/// Releases a string returned by [`assetflow_sequence_json`].
///
/// # Safety
///
/// `s` must be null or a pointer obtained from [`assetflow_sequence_json`]
/// that has not been freed yet.
#[no_mangle]
pub unsafe extern "C" fn assetflow_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(request: &str) -> serde_json::Value {
        let input = CString::new(request).expect("no interior NUL");
        unsafe {
            let out = assetflow_sequence_json(input.as_ptr());
            assert!(!out.is_null());
            let text = CStr::from_ptr(out).to_string_lossy().into_owned();
            assetflow_free_string(out);
            serde_json::from_str(&text).expect("valid JSON response")
        }
    }

    #[test]
    fn test_ffi_sequence() {
        let out = call(
            r#"{"origin": {"lat": 0, "lng": 0},
                "stops": [{"id": "A", "location": {"lat": 0, "lng": 1}},
                          {"id": "B", "location": {"lat": 0, "lng": 3}},
                          {"id": "C", "location": {"lat": 0, "lng": 2}}]}"#,
        );
        assert_eq!(out, serde_json::json!({"order": ["A", "C", "B"], "num_sequenced": 3}));
    }

    #[test]
    fn test_ffi_malformed_json() {
        let out = call("{not json");
        assert!(out.get("error").is_some());
    }

    #[test]
    fn test_ffi_duplicate_ids() {
        let out = call(r#"{"origin": {"lat": 0, "lng": 0}, "stops": [{"id": "X"}, {"id": "X"}]}"#);
        assert_eq!(out["error"], "Duplicate stop id: X");
    }

    #[test]
    fn test_ffi_null_request() {
        unsafe {
            let out = assetflow_sequence_json(ptr::null());
            let text = CStr::from_ptr(out).to_string_lossy().into_owned();
            assetflow_free_string(out);
            assert!(text.contains("null request"));
            assetflow_free_string(ptr::null_mut());
        }
    }

    #[test]
    fn test_sequence_json_direct() {
        let out = sequence_json(r#"{"origin": {"lat": 0, "lng": 0}}"#).expect("ok");
        assert_eq!(out, r#"{"order":[],"num_sequenced":0}"#);
    }
}
