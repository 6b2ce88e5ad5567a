pub mod accumulator;
pub mod decades;
pub mod tolerance;
