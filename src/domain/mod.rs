// Domain layer: holiday answers, scan results and the oracle port.

pub mod model;
pub mod ports;
