pub mod angle;
pub mod axes;
pub mod euler;
pub mod limits;
