//! Gateway Layer
//!
//! Server side of the widget: request checks and record writes.

mod error;
mod response;
mod service;
mod tasks_payload;


pub use error::GatewayError;
pub use response::{GatewayRequest, SaveResponse, WidgetBootstrap, INVALID_REQUEST_MESSAGE};
pub use service::PersistenceGateway;
