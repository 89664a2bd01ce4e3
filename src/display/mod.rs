//! Render-once page sections. None of these keep state after they draw.

pub mod composition;
pub mod greeting;
pub mod happiness;
pub mod travel_map;
