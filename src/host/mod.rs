//! Host-facing contract, router and stdio bridge for native app integration.

pub mod contract;
pub mod router;
pub mod stdio;

pub use contract::{CommandEnvelope, CommandName, ResponseEnvelope};
pub use router::HostRouter;
