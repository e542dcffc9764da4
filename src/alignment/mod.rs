//! Alinhamento local Smith-Waterman.
//!
//! Este módulo implementa o cálculo do melhor score de alinhamento local
//! entre duas sequências, com cache LRU dos pares já avaliados.
//!
//! ## Exemplo
//!
//! ```rust
//! use seqsim::alignment::{Aligner, GapPenalty};
//! use seqsim::scoring::SubstitutionMatrix;
//!
//! let matrix = SubstitutionMatrix::match_mismatch(2.0, -1.0, "ACGTU").unwrap();
//! let gap = GapPenalty::linear(1.0).unwrap();
//! let mut aligner = Aligner::new(matrix, gap, 1024).unwrap();
//!
//! assert_eq!(aligner.score("GATTACA", "GCATGCU").unwrap(), 5.0);
//! ```

mod gap;
mod matrix;
mod smith_waterman;

pub use gap::GapPenalty;
pub use matrix::ScoringMatrix;
pub use smith_waterman::{Aligner, PairKey};
