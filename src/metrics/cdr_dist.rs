//! Distância entre CDRs normalizada pela identidade.

use crate::alignment::{Aligner, GapPenalty};
use crate::cache::CacheStats;
use crate::scoring::{SubstitutionMatrix, SubstitutionScore};
use crate::types::config::Config;
use crate::SeqsimResult;

/// Distância `1 - sw(a, b) / sqrt(id(a) * id(b))`, limitada a `[0, 1]`.
///
/// `sw` é o score memorizado do [`Aligner`] e `id` o score de identidade.
/// Sequências com identidade zero ficam a distância 0 de si mesmas e 1 de
/// qualquer outra.
pub struct CdrDistance<M = SubstitutionMatrix> {
    aligner: Aligner<M>,
}

impl CdrDistance<SubstitutionMatrix> {
    /// BLOSUM62, gap linear 10.
    pub fn blosum62() -> SeqsimResult<Self> {
        let gap = GapPenalty::linear(10.0)?;
        let aligner = Aligner::new(
            SubstitutionMatrix::blosum62(),
            gap,
            Config::default().cache.capacity,
        )?;
        Ok(Self::from_aligner(aligner))
    }

    pub fn from_config(config: &Config) -> SeqsimResult<Self> {
        Ok(Self::from_aligner(Aligner::from_config(config)?))
    }
}

impl<M: SubstitutionScore> CdrDistance<M> {
    pub fn from_aligner(aligner: Aligner<M>) -> Self {
        Self { aligner }
    }

    /// Distância entre `a` e `b`.
    pub fn distance(&mut self, a: &str, b: &str) -> SeqsimResult<f64> {
        let score = self.aligner.score(a, b)?;
        let norm = (self.aligner.identity_score(a)? * self.aligner.identity_score(b)?).sqrt();

        if norm <= 0.0 {
            return Ok(if a == b { 0.0 } else { 1.0 });
        }
        Ok((1.0 - score / norm).clamp(0.0, 1.0))
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.aligner.cache_stats()
    }
}
