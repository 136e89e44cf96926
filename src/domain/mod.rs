// Domain layer: the partner model and the ports the section talks through.

pub mod model;
pub mod ports;
