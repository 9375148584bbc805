//! Pure logic: field projection and location rendering.

pub mod fields;
pub mod location;
