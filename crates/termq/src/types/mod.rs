mod float;

pub use float::Float64;
