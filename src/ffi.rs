//! JSON and C-compatible boundary (enabled with the `ffi` feature).
//!
//! A request is a JSON object holding the matrix rows plus any
//! [`PlannerConfig`] fields:
//!
//! ```json
//! {"matrix": [[0, 1], [1, 0]], "strategy": "informed", "max_expansions": 10000}
//! ```
//!
//! A successful response is `{"tour": [0, 1, 0], "cost": 2.0}`. Through the
//! C entry point a failure becomes `{"error": "..."}`.
//!
//! # Memory Management
//!
//! - Request strings are null-terminated UTF-8 (char*)
//! - Returned strings are allocated by Rust and must be freed with
//!   `tourplan_free_string()`

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

use serde::{Deserialize, Serialize};

use crate::config::PlannerConfig;
use crate::distance::CostMatrix;
use crate::error::Result;
use crate::planner::Planner;

#[derive(Debug, Deserialize)]
struct PlanRequest {
    matrix: Vec<Vec<f64>>,
    #[serde(flatten)]
    config: PlannerConfig,
}

#[derive(Debug, Serialize)]
struct PlanResponse<'a> {
    tour: &'a [usize],
    cost: f64,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

/// Plans a tour for a JSON request and returns the JSON response.
///
/// # Examples
///
/// ```
/// let out = u_tourplan::ffi::plan_json(
///     r#"{"matrix": [[0, 2], [2, 0]], "strategy": "greedy"}"#,
/// )
/// .unwrap();
/// assert_eq!(out, r#"{"tour":[0,1,0],"cost":4.0}"#);
/// ```
pub fn plan_json(request: &str) -> Result<String> {
    let request: PlanRequest = serde_json::from_str(request)?;
    let matrix = CostMatrix::from_rows(request.matrix)?;
    let tour = Planner::new(request.config).plan(&matrix)?;
    let response = PlanResponse {
        tour: tour.nodes(),
        cost: tour.cost(),
    };
    Ok(serde_json::to_string(&response)?)
}

/// C entry point for [`plan_json`].
///
/// Returns a newly allocated JSON string (a tour or an `error` object) that
/// must be freed with `tourplan_free_string()`, or NULL if `request` is NULL
/// or not valid UTF-8.
///
/// # Safety
///
/// `request` must be NULL or point to a null-terminated string.
#[no_mangle]
pub unsafe extern "C" fn tourplan_plan_json(request: *const c_char) -> *mut c_char {
    if request.is_null() {
        return ptr::null_mut();
    }
    let request = match CStr::from_ptr(request).to_str() {
        Ok(s) => s,
        Err(_) => return ptr::null_mut(),
    };

    let body = plan_json(request).unwrap_or_else(|e| {
        let error = ErrorResponse {
            error: e.to_string(),
        };
        serde_json::to_string(&error).unwrap_or_else(|_| String::from("{}"))
    });

    match CString::new(body) {
        Ok(s) => s.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

/// Frees a string returned by `tourplan_plan_json()`.
///
/// # Safety
///
/// `ptr` must be NULL or a pointer previously returned by this library and
/// not yet freed.
#[no_mangle]
pub unsafe extern "C" fn tourplan_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}
