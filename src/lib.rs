//! # seqsim
//!
//! Scores de alinhamento local Smith-Waterman com memorização LRU.
//!
//! Dado um esquema de substituição e uma penalidade de gap, o
//! [`Aligner`](alignment::Aligner) calcula o melhor score de alinhamento
//! local entre duas sequências e guarda o resultado por par, para que
//! comparações repetidas não refaçam a programação dinâmica.
//!
//! ## Módulos
//!
//! - [`alignment`] - Alinhador Smith-Waterman e modelos de gap
//! - [`scoring`] - Matrizes de substituição (BLOSUM62, match/mismatch)
//! - [`cache`] - Cache LRU genérico
//! - [`metrics`] - Distância normalizada pela identidade
//! - [`cli`] - Interface de linha de comando
//! - [`types`] - Configuração e erros

pub mod alignment;
pub mod cache;
#[cfg(feature = "cli")]
pub mod cli;
pub mod metrics;
pub mod scoring;
pub mod types;

pub use alignment::{Aligner, GapPenalty};
pub use scoring::{SubstitutionMatrix, SubstitutionScore};
pub use types::config::Config;
pub use types::errors::{SeqsimError, SeqsimResult};
