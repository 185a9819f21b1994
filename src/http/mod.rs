//! HTTP utilities module
//!
//! Response construction shared by the request handlers.

pub mod response;

pub use response::{
    build_405_response, build_413_response, build_health_response, build_options_response,
    error_response, json_response,
};
