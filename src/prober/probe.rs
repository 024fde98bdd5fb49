use tokio::time::Instant;
use tracing::{debug, info, warn};

use super::{
    CompatibilityChecker, GetOutcome, GetRequest, ProbeResult, ServerInfoProvider, Transport,
};

pub struct HttpProbe<T, C, S> {
    transport: T,
    compatibility: C,
    server_info: S,
}

impl<T, C, S> HttpProbe<T, C, S>
where
    T: Transport,
    C: CompatibilityChecker,
    S: ServerInfoProvider,
{
    pub fn new(transport: T, compatibility: C, server_info: S) -> Self {
        Self {
            transport,
            compatibility,
            server_info,
        }
    }

    /// Runs one timed GET. Yields `None` without touching the network when
    /// the host is not compatible; every transport error becomes a 500 result.
    pub async fn probe(&self, request: &GetRequest) -> Option<ProbeResult> {
        if !self.compatibility.is_compatible() {
            warn!("host is not compatible, skipping GET {}", request.uri);
            return None;
        }

        debug!("GET {} (timeout {}s, {} extra headers)", request.uri, request.wait_timeout, request.headers.len());
        let start = Instant::now();
        let outcome = match self.transport.get(request).await {
            Ok(line) => GetOutcome::Response(line),
            Err(e) => {
                warn!("GET {} failed: {:#}", request.uri, e);
                GetOutcome::TransportFailure(format!("{:#}", e))
            }
        };
        let elapsed_ms = start.elapsed().as_millis() as u64;

        let get = outcome.into_result(elapsed_ms);
        info!("GET {} -> {} {} in {}ms", request.uri, get.status_code, get.reason, get.elapsed_ms);

        Some(ProbeResult {
            get,
            server: self.server_info.get_server_info(),
        })
    }
}
