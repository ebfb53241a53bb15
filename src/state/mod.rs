//! Application state module

mod active;
mod app_state;
mod conference;

pub use active::*;
pub use app_state::*;
pub use conference::*;
