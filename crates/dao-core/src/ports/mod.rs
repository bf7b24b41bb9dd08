//! # Ports
//!
//! The registry's boundary surface. The inbound port is the operation table
//! dependent subsystems and administrators program against; the outbound
//! side is `dao_bus::ChangePublisher`, injected into the service.

pub mod inbound;
