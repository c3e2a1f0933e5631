// TensiGuide-api lib.rs
//
// HTTP surface of TensiGuide: routes, handlers, public request types and
// the OpenAPI document.

pub mod api;
pub mod entities;
pub mod openapi;
