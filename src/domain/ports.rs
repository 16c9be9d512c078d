use crate::domain::model::Symbology;
use crate::utils::error::Result;
use async_trait::async_trait;

/// A lazy, finite-or-unbounded sequence of raw candidate strings.
///
/// Implementors wrap whatever actually produces candidates (a decoder feed,
/// a keyboard-wedge byte stream, a fixed replay list); the engine only ever
/// pulls the next candidate and never touches the device behind it.
#[async_trait]
pub trait CandidateSource: Send {
    /// Next raw candidate, or `None` once the source is exhausted.
    async fn next_candidate(&mut self) -> Result<Option<String>>;
}

pub trait ConfigProvider: Send + Sync {
    /// Symbologies the engine accepts. Candidates valid under a disabled
    /// symbology are rejected like any other.
    fn symbologies(&self) -> &[Symbology];
}
