//! Load types

mod beam_load;

pub use beam_load::{BeamLoad, LoadType};
