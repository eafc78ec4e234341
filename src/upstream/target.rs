//! The fixed upstream authority and request-target rewriting.

use std::str::FromStr;

use axum::http::header::HeaderValue;
use axum::http::uri::{Authority, PathAndQuery, Scheme};
use axum::http::Uri;
use url::Position;

use crate::config::validate_upstream_url;
use crate::error::ProxyError;

/// Scheme and authority every request is redirected to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamTarget {
    scheme: Scheme,
    authority: Authority,
    host: HeaderValue,
}

impl UpstreamTarget {
    /// Parse an upstream URL such as `http://example.com` or
    /// `http://127.0.0.1:3000`. The URL must pass the same checks as
    /// `upstream.url` in the config.
    pub fn parse(raw: &str) -> Result<Self, ProxyError> {
        let invalid = |reason: String| ProxyError::InvalidUpstream {
            url: raw.to_string(),
            reason,
        };

        let url = validate_upstream_url(raw).map_err(|errors| {
            invalid(
                errors
                    .iter()
                    .map(|e| e.message.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            )
        })?;

        let authority = Authority::from_str(&url[Position::BeforeHost..Position::AfterPort])
            .map_err(|e| invalid(e.to_string()))?;
        let host = HeaderValue::from_str(authority.as_str()).map_err(|e| invalid(e.to_string()))?;

        Ok(Self {
            scheme: Scheme::HTTP,
            authority,
            host,
        })
    }

    pub fn scheme(&self) -> &Scheme {
        &self.scheme
    }

    pub fn authority(&self) -> &Authority {
        &self.authority
    }

    /// Point `uri` at the upstream, keeping its path and query verbatim.
    ///
    /// Origin-form (`/a?b`) and absolute-form (`http://other/a?b`) targets
    /// both end up as `<scheme>://<authority>/a?b`. Authority-form targets
    /// (`host:port`) have no path and are sent to `/`. The asterisk-form
    /// target of `OPTIONS *` keeps `*` as its path; the client writes the
    /// path in origin position, so the upstream receives `OPTIONS *`.
    pub fn rewrite(&self, uri: &Uri) -> Result<Uri, ProxyError> {
        let mut parts = uri.clone().into_parts();
        parts.scheme = Some(self.scheme.clone());
        parts.authority = Some(self.authority.clone());
        if parts.path_and_query.is_none() {
            parts.path_and_query = Some(PathAndQuery::from_static("/"));
        }
        Ok(Uri::from_parts(parts)?)
    }

    /// Value for a `Host` header naming the upstream.
    pub fn host_header(&self) -> &HeaderValue {
        &self.host
    }
}

impl std::fmt::Display for UpstreamTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}://{}", self.scheme, self.authority)
    }
}
