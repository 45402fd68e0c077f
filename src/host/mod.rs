pub mod memory;
pub mod sink;
pub mod tree;
