//! Upstream GET for proxied module requests.
//!
//! Uses the curl crate (libcurl) on tokio's blocking pool. The whole response
//! (final status, headers, body) is collected in memory and handed back for
//! relaying, so memory use per request grows with the file size up to
//! [`FetchOptions::max_body`]. Dropping the returned future stops the transfer
//! at the next curl callback.

mod error;
mod parse;

pub use error::FetchError;

use std::cell::Cell;
use std::str;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::config::FetchConfig;

/// Transfer limits for upstream requests.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub connect_timeout: Duration,
    /// Whole-transfer limit; `None` waits as long as the upstream keeps sending.
    pub timeout: Option<Duration>,
    pub max_redirections: u32,
    /// Bodies larger than this fail with [`FetchError::TooLarge`]; `None` is unbounded.
    pub max_body: Option<u64>,
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self::from_config(&FetchConfig::default())
    }
}

impl FetchOptions {
    pub fn from_config(cfg: &FetchConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: (cfg.timeout_secs > 0).then(|| Duration::from_secs(cfg.timeout_secs)),
            max_redirections: cfg.max_redirections,
            max_body: (cfg.max_body_bytes > 0).then_some(cfg.max_body_bytes),
            user_agent: concat!("denoreg/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Final upstream response, ready to relay.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: u16,
    /// Content headers of the final response (hop-by-hop headers removed).
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

/// Sets the abort token when the owning future is dropped.
struct AbortOnDrop(Arc<AtomicBool>);

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        self.0.store(true, Ordering::Relaxed);
    }
}

/// Performs a GET of `url`, following redirects.
pub async fn get(url: &str, opts: &FetchOptions) -> Result<UpstreamResponse, FetchError> {
    let abort = Arc::new(AtomicBool::new(false));
    let _guard = AbortOnDrop(Arc::clone(&abort));

    let url = url.to_string();
    let opts = opts.clone();
    tokio::task::spawn_blocking(move || get_blocking(&url, &opts, &abort)).await?
}

/// Blocking GET. Stops early (returning [`FetchError::Aborted`]) once `abort` is set.
pub fn get_blocking(
    url: &str,
    opts: &FetchOptions,
    abort: &AtomicBool,
) -> Result<UpstreamResponse, FetchError> {
    let mut header_lines: Vec<String> = Vec::new();
    let mut body: Vec<u8> = Vec::new();
    let too_large = Cell::new(false);

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(opts.max_redirections)?;
    easy.connect_timeout(opts.connect_timeout)?;
    if let Some(timeout) = opts.timeout {
        easy.timeout(timeout)?;
    }
    easy.useragent(&opts.user_agent)?;
    easy.progress(true)?;

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(s) = str::from_utf8(data) {
                header_lines.push(s.trim_end().to_string());
            }
            true
        })?;
        transfer.write_function(|data| {
            if abort.load(Ordering::Relaxed) {
                return Ok(0); // abort transfer
            }
            if let Some(limit) = opts.max_body {
                if (body.len() + data.len()) as u64 > limit {
                    too_large.set(true);
                    return Ok(0);
                }
            }
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.progress_function(|_, _, _, _| !abort.load(Ordering::Relaxed))?;

        if let Err(e) = transfer.perform() {
            if abort.load(Ordering::Relaxed) {
                return Err(FetchError::Aborted);
            }
            if too_large.get() {
                return Err(FetchError::TooLarge(opts.max_body.unwrap_or_default()));
            }
            return Err(FetchError::Curl(e));
        }
    }

    let code = easy.response_code()?;
    let status = u16::try_from(code)
        .ok()
        .filter(|c| (100..=999).contains(c))
        .ok_or_else(|| FetchError::InvalidResponse(format!("status code {code}")))?;

    tracing::debug!(url, status, bytes = body.len(), "upstream response");

    Ok(UpstreamResponse {
        status,
        headers: parse::relay_headers(&header_lines),
        body,
    })
}
