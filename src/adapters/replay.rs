use crate::domain::ports::CandidateSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::VecDeque;

/// Replays a fixed list of candidates, then reports exhaustion.
#[derive(Debug, Clone)]
pub struct ReplaySource {
    candidates: VecDeque<String>,
}

impl ReplaySource {
    pub fn new<I>(candidates: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            candidates: candidates.into_iter().collect(),
        }
    }
}

#[async_trait]
impl CandidateSource for ReplaySource {
    async fn next_candidate(&mut self) -> Result<Option<String>> {
        Ok(self.candidates.pop_front())
    }
}
