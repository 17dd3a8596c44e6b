// Domain layer: the house model, the report snapshot and the ports renderers and storage plug into.

pub mod model;
pub mod ports;
pub mod report;
pub mod sample;
