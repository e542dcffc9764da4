//! Cache LRU para scores de alinhamento.
//!
//! Este módulo implementa um cache Least Recently Used (LRU) genérico,
//! usado pelo [`Aligner`](crate::alignment::Aligner) para memorizar scores
//! de pares de sequências já calculados.

mod lru;

pub use self::lru::{CacheStats, LruCache};
