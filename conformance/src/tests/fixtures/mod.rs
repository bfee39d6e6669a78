//! Cube fixtures.
//!
//! Each constant holds a complete Turtle 1.1 document. All three satisfy
//! IC-1 to IC-21 once normalized; tests break them one triple at a time.

mod abbreviated_cube;
mod hierarchy_cube;
mod measure_dimension_cube;

pub use abbreviated_cube::ABBREVIATED_CUBE;
pub use hierarchy_cube::HIERARCHY_CUBE;
pub use measure_dimension_cube::MEASURE_DIMENSION_CUBE;
