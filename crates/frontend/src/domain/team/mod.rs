//! Teams back the roster facet and the dashboard count; there is no
//! dedicated team screen.

pub mod model;
pub mod sample;
