// Domain layer: contact model and the repository/config ports.

pub mod model;
pub mod ports;
