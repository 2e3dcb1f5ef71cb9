// Domain layer: tournament data types and the ports the engine talks through.

pub mod model;
pub mod ports;
