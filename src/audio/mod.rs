pub mod backend;
pub mod controller;
pub mod player;
pub mod probe;
pub mod sampler;
