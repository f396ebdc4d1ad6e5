//! userdesk — headless core for a user-administration screen.
//!
//! Reconciles a remote user collection with local interactive view state:
//! fetch and cache through [`gateway::ApiGateway`] and [`store::EntityStore`],
//! drive mutations through [`store::UserActions`], and derive the visible
//! rows with [`list::ListController`] and the pure [`table`] pipeline.
//! Rendering, routing, forms, and session handling live elsewhere.

pub mod config;
pub mod gateway;
pub mod list;
pub mod logging;
pub mod model;
pub mod mvi;
pub mod notify;
pub mod store;
pub mod table;
