//! Cut request file parser module.

mod request;
mod sections;

pub use request::{parse_request_file, parse_request_str, RequestParser};
pub use sections::*;
