// Domain layer: page models, the loaded event and the ports the assembler talks to.

pub mod events;
pub mod model;
pub mod ports;
