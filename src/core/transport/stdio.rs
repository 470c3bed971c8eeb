//! STDIO transport implementation.
//!
//! Serves a single session over stdin/stdout, for clients that spawn the
//! server as a child process.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::SessionFactory;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Run the STDIO transport until the client closes the stream.
    pub async fn run(factory: SessionFactory) -> TransportResult<()> {
        info!("Ready - communicating via stdin/stdout");

        let service = factory
            .create()
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;

        service
            .waiting()
            .await
            .map_err(|e| TransportError::ServiceError(e.to_string()))?;

        info!("STDIO transport finished");
        Ok(())
    }
}
