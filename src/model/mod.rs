//! Map data model.
//!
//! A [`Place`] is one marker; a [`UserMap`] is a titled, non-empty,
//! ordered list of places. Both are validated on construction and never
//! change afterwards.

mod error;
mod place;
mod sample;
mod user_map;

pub use error::ValidationError;
pub use place::{LatLng, Place};
pub use sample::sample_maps;
pub use user_map::UserMap;
