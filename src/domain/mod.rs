// Domain layer: wire records and ports. No transport concerns here.

pub mod model;
pub mod ports;
