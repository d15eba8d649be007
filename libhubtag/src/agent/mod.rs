//! Pluggable client-identifier (`User-Agent`) sources.
//!
//! The fetcher never decides what identifier to send; it asks a
//! [`UserAgentProvider`] before each request. That keeps the spoofing
//! behavior replaceable, or removable, without touching the client contract.

use rand::seq::IndexedRandom;


/// Source of the `User-Agent` header value for outgoing requests.
pub trait UserAgentProvider: Send + Sync {
    /// Identifier to send with the next request, or `None` to omit the header.
    fn user_agent(&self) -> Option<String>;
}

/// Sends no `User-Agent` header at all. The default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoUserAgent;

impl UserAgentProvider for NoUserAgent {
    fn user_agent(&self) -> Option<String> {
        None
    }
}

/// Always sends the same caller-supplied identifier.
#[derive(Debug, Clone)]
pub struct StaticUserAgent {
    value: String,
}

impl StaticUserAgent {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl UserAgentProvider for StaticUserAgent {
    fn user_agent(&self) -> Option<String> {
        Some(self.value.clone())
    }
}

/// Identifiers of common desktop browsers.
const BROWSER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_4) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Safari/605.1.15",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:125.0) Gecko/20100101 Firefox/125.0",
    "Mozilla/5.0 (X11; Linux x86_64; rv:125.0) Gecko/20100101 Firefox/125.0",
];

/// Picks a random identifier from a pool of browser strings on each request.
#[derive(Debug, Clone)]
pub struct BrowserAgentPool {
    agents: Vec<String>,
}

impl BrowserAgentPool {
    /// Pool drawing from a caller-supplied set of identifiers.
    pub fn new(agents: Vec<String>) -> Self {
        Self { agents }
    }
}

impl Default for BrowserAgentPool {
    /// Pool drawing from the built-in browser list.
    fn default() -> Self {
        Self {
            agents: BROWSER_AGENTS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl UserAgentProvider for BrowserAgentPool {
    fn user_agent(&self) -> Option<String> {
        self.agents.choose(&mut rand::rng()).cloned()
    }
}
