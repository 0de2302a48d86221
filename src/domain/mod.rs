// Domain layer: the draft model and the ports the form talks through.

pub mod model;
pub mod ports;
