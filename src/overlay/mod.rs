pub mod config;
pub mod sequencer;
pub mod state;
