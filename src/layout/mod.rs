pub mod scale;
pub mod solver;
