//! Métricas derivadas do score de alinhamento.

mod cdr_dist;

pub use cdr_dist::CdrDistance;
