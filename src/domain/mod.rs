// Domain layer: the student record and the ports the roster talks through.

pub mod model;
pub mod ports;
