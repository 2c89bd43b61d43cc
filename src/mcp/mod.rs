//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes snippet and file extraction to AI coding agents over stdio.
//!
//! ## Module Structure
//!
//! - `server`: Tool router and server entry point
//! - `types`: Tool parameters and result DTOs

mod server;
pub mod types;

pub use server::{CodetrMcpServer, run_server};
