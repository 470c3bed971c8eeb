//! Tools domain module.
//!
//! Tools are the only capability this server exposes. Each one validates
//! its parameters, forwards a single request to CoinGecko and returns the
//! response body (or an `{"error": ...}` object) as one text block.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `registry.rs` - The constant tool table and registration onto a router
//! - `router.rs` - Builds the rmcp ToolRouter for a session
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` with params, `request()`,
//!    `execute()`, `to_tool()` and `create_route()`
//! 2. Export it in `definitions/mod.rs`
//! 3. Add it to `ToolRegistry::get_all_tools()` and `ToolRegistry::register_all()`

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
