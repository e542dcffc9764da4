//! Cache LRU genérico com capacidade fixa.

use std::fmt::Debug;
use std::hash::Hash;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};

use lru::LruCache as RawLru;

use crate::{SeqsimError, SeqsimResult};

/// Estatísticas do cache.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Número atual de entradas.
    pub size: usize,

    /// Capacidade máxima.
    pub capacity: usize,

    /// Número de acertos (cache hits).
    pub hits: u64,

    /// Número de erros (cache misses).
    pub misses: u64,

    /// Entradas removidas pela política LRU.
    pub evictions: u64,
}

impl CacheStats {
    /// Calcula a taxa de acerto.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Armazenamento chave→valor limitado, com remoção do item usado há mais tempo.
///
/// `exists` nunca altera a ordem de recência; apenas `get` e `put` o fazem.
/// `exists` também não mexe nos contadores de [`CacheStats`]: acertos e erros
/// vêm de `get` e de [`LruCache::record_miss`].
pub struct LruCache<K, V> {
    cache: RawLru<K, V>,
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Debug,
    V: Clone,
{
    /// Cria um novo cache.
    ///
    /// Falha com [`SeqsimError::Config`] se `capacity` for zero.
    pub fn new(capacity: usize) -> SeqsimResult<Self> {
        let cap = NonZeroUsize::new(capacity)
            .ok_or_else(|| SeqsimError::config("capacidade do cache deve ser >= 1"))?;
        Ok(Self {
            cache: RawLru::new(cap),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            evictions: AtomicU64::new(0),
        })
    }

    /// Verifica se a chave está presente, sem atualizar a recência.
    pub fn exists(&self, key: &K) -> bool {
        self.cache.contains(key)
    }

    /// Registra um miss detectado fora de `get` (consulta via `exists`).
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Busca no cache e marca a chave como usada mais recentemente.
    ///
    /// Retorna [`SeqsimError::KeyNotFound`] se a chave não existir.
    pub fn get(&mut self, key: &K) -> SeqsimResult<V> {
        match self.cache.get(key) {
            Some(value) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Ok(value.clone())
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                Err(SeqsimError::KeyNotFound(format!("{:?}", key)))
            }
        }
    }

    /// Insere ou sobrescreve uma entrada.
    ///
    /// Se a capacidade for excedida, remove exatamente a entrada menos
    /// recentemente usada e a retorna.
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        let overwrite = self.cache.contains(&key);
        let displaced = self.cache.push(key, value);

        // push() também devolve o par antigo ao sobrescrever; isso não é remoção
        if overwrite {
            return None;
        }

        if let Some((evicted, _)) = &displaced {
            self.evictions.fetch_add(1, Ordering::Relaxed);
            tracing::debug!("Entrada removida do cache (LRU): {:?}", evicted);
        }
        displaced
    }

    /// Número atual de entradas.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Indica se o cache está vazio.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Capacidade máxima.
    pub fn capacity(&self) -> usize {
        self.cache.cap().get()
    }

    /// Limpa todo o cache. Os contadores são preservados.
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    /// Retorna estatísticas do cache.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            size: self.cache.len(),
            capacity: self.capacity(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
        }
    }
}
