pub mod ball;
pub mod step;
pub mod surface;
pub mod trajectory;
pub mod walls;
