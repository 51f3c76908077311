// Domain layer: quantity types, measurements and the config port the engine reads through.

pub mod model;
pub mod ports;
