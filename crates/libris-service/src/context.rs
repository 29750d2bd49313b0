//! Request context carrying the client metadata an activity is stamped with.

use std::net::IpAddr;

use http::HeaderMap;
use http::header::USER_AGENT;

/// Placeholder stored when the request did not supply a value.
pub const UNKNOWN: &str = "Unknown";

/// Client metadata for the request that triggered an activity.
///
/// Built by the HTTP layer and passed into the recorder explicitly, so
/// recording never reads ambient request state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    /// Remote address of the request origin.
    pub ip_address: Option<String>,
    /// User-Agent header value.
    pub user_agent: Option<String>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(ip_address: impl Into<String>, user_agent: Option<String>) -> Self {
        Self {
            ip_address: Some(ip_address.into()),
            user_agent,
        }
    }

    /// Builds a context from the peer address and the request headers.
    ///
    /// A missing, empty, or non-UTF-8 `User-Agent` header counts as absent.
    pub fn from_parts(remote_addr: Option<IpAddr>, headers: &HeaderMap) -> Self {
        let user_agent = headers
            .get(USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from);

        Self {
            ip_address: remote_addr.map(|ip| ip.to_string()),
            user_agent,
        }
    }

    /// Remote address, or `"Unknown"` when the transport did not expose one.
    pub fn ip_address_or_default(&self) -> &str {
        self.ip_address.as_deref().unwrap_or(UNKNOWN)
    }

    /// User-Agent header, or `"Unknown"` when the client sent none.
    pub fn user_agent_or_default(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(UNKNOWN)
    }
}
