//! HTTP API module for the salary engine.
//!
//! This module provides the REST API endpoints for single gross-to-net
//! evaluations, part-time scenario sets, gross-income curves and the
//! listing of future-scenario presets.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{CurveParams, MAX_CURVE_STEPS, create_router};
pub use request::{HealthInsuranceType, TaxRequest};
pub use response::{ApiError, ApiErrorResponse, PresetSummary};
pub use state::AppState;
