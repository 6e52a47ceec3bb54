pub mod geom;
pub mod time;
