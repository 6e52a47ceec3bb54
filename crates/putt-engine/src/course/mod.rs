pub mod derived;
pub mod model;
