pub mod model;
pub mod script;
pub mod store;
