pub mod constants;
pub mod entity;
pub mod snapshot;
pub mod systems;
pub mod world;
