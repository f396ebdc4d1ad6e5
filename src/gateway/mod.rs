//! Remote gateway: translates local calls into API exchanges.

mod client;
mod error;
mod session;

pub use client::ApiGateway;
pub use error::GatewayError;
pub use session::{SessionEvent, SessionMonitor};
