use crate::artifacts::reference::SCHEME_URL_REGEX;
use crate::artifacts::reference::error::ResolveError;

/// A repository reference split into its raw host and path parts
///
/// The variant records which syntax matched, since only URL form carries a port
/// in its authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryReference<'r> {
    /// `scheme://[user@]host[:port]/path`
    Url { host: &'r str, path: &'r str },
    /// `[user@]host:path`
    ScpLike { host: &'r str, path: &'r str },
}

impl<'r> RepositoryReference<'r> {
    /// Parse as URL form when a scheme with a non-empty authority is present,
    /// otherwise split SCP-like on the first `:`.
    pub fn try_parse(reference: &'r str) -> Result<Self, ResolveError> {
        let re = regex::Regex::new(SCHEME_URL_REGEX)?;

        if let Some(captures) = re.captures(reference) {
            let netloc = captures.name("netloc").map_or("", |m| m.as_str());
            let path = captures.name("path").map_or("", |m| m.as_str());

            if !netloc.is_empty() {
                debug_log!("{reference}: url form, netloc '{netloc}', path '{path}'");
                return Ok(Self::Url { host: netloc, path });
            }
        }

        let (host, path) = reference.split_once(':').ok_or_else(|| {
            ResolveError::MissingHostSeparator {
                reference: reference.to_string(),
            }
        })?;

        debug_log!("{reference}: scp-like form, host '{host}', path '{path}'");
        Ok(Self::ScpLike { host, path })
    }

    pub fn raw_host(&self) -> &'r str {
        match self {
            Self::Url { host, .. } | Self::ScpLike { host, .. } => *host,
        }
    }

    pub fn path(&self) -> &'r str {
        match self {
            Self::Url { path, .. } | Self::ScpLike { path, .. } => *path,
        }
    }

    /// Host with authentication info (and, for URL form, the port) removed.
    ///
    /// Fails when nothing is left or a `:` survives.
    pub fn host(&self, reference: &str) -> Result<&'r str, ResolveError> {
        let host = strip_user_info(self.raw_host());
        let host = match self {
            Self::Url { .. } => strip_port(host),
            Self::ScpLike { .. } => host,
        };

        if host.is_empty() || host.contains(':') {
            return Err(ResolveError::UnsupportedReference {
                reference: reference.to_string(),
                host: host.to_string(),
            });
        }

        Ok(host.trim_start_matches('/'))
    }
}

/// Everything after the last `@`, or the whole host when there is none
pub fn strip_user_info(host: &str) -> &str {
    host.rsplit_once('@').map_or(host, |(_, host)| host)
}

fn strip_port(host: &str) -> &str {
    match host.rsplit_once(':') {
        Some((name, port)) if !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) => {
            name
        }
        _ => host,
    }
}
