use crate::core::ean;
use crate::domain::model::{ScanReport, Symbology, Validation};
use crate::domain::ports::{CandidateSource, ConfigProvider};
use crate::utils::error::Result;

/// First-match-wins scan engine.
///
/// Pulls candidates from the source until one validates under an enabled
/// symbology, then stops. Rejections never abort the loop; what a rejection
/// means to the user is the caller's concern.
pub struct ScanEngine<S: CandidateSource> {
    source: S,
    enabled: Vec<Symbology>,
}

impl<S: CandidateSource> ScanEngine<S> {
    pub fn new(source: S, enabled: Vec<Symbology>) -> Self {
        Self { source, enabled }
    }

    pub fn from_config<C: ConfigProvider>(source: S, config: &C) -> Self {
        Self::new(source, config.symbologies().to_vec())
    }

    /// Run until the first accepted candidate or source exhaustion.
    pub async fn run(&mut self) -> Result<Option<ScanReport>> {
        let mut rejected = 0usize;

        while let Some(candidate) = self.source.next_candidate().await? {
            match ean::classify(&candidate) {
                Validation::Valid { symbology } if self.enabled.contains(&symbology) => {
                    tracing::info!(code = %candidate, %symbology, rejected, "candidate accepted");
                    return Ok(Some(ScanReport::new(candidate, symbology, rejected)));
                }
                Validation::Valid { symbology } => {
                    rejected += 1;
                    tracing::debug!(code = %candidate, %symbology, "valid code under disabled symbology");
                }
                outcome => {
                    rejected += 1;
                    tracing::debug!(code = %candidate, ?outcome, "candidate rejected");
                }
            }
        }

        tracing::info!(rejected, "source exhausted without a valid candidate");
        Ok(None)
    }
}
