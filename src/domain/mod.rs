// Domain layer: student/export models and the ports the exporter depends on.

pub mod model;
pub mod ports;
