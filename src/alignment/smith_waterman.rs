//! Alinhador Smith-Waterman com memorização LRU.
//!
//! O preenchimento usa a forma de três estados (H, E, F) com máximos
//! acumulados de gap, então cada célula custa O(1) tanto no modelo linear
//! quanto no afim. O score é o maior valor em qualquer célula de H.

use std::collections::BTreeSet;

use super::gap::GapPenalty;
use super::matrix::ScoringMatrix;
use crate::cache::{CacheStats, LruCache};
use crate::scoring::{SubstitutionMatrix, SubstitutionScore};
use crate::types::config::{Config, MatrixKind};
use crate::SeqsimResult;

/// Chave do cache: o par ordenado de sequências.
///
/// `(a, b)` e `(b, a)` são chaves distintas; `("AB", "C")` e `("A", "BC")`
/// também, ao contrário de uma concatenação simples.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PairKey {
    a: String,
    b: String,
}

impl PairKey {
    pub fn new(a: &str, b: &str) -> Self {
        Self {
            a: a.to_string(),
            b: b.to_string(),
        }
    }
}

/// Calcula e memoriza o melhor score de alinhamento local entre sequências.
///
/// O `Aligner` é dono exclusivo do seu cache. `score` recebe `&mut self`, então
/// uso concorrente da mesma instância exige serialização externa
/// (por exemplo `Mutex<Aligner>` em volta da chamada inteira).
pub struct Aligner<M = SubstitutionMatrix> {
    matrix: M,
    cache: LruCache<PairKey, f64>,
    gap: GapPenalty,
}

impl<M: SubstitutionScore> Aligner<M> {
    /// Cria um alinhador com um cache novo de `capacity` entradas.
    ///
    /// # Errors
    ///
    /// Retorna [`SeqsimError::Config`](crate::SeqsimError::Config) se
    /// `capacity` for zero ou se a penalidade de gap for inválida.
    pub fn new(matrix: M, gap: GapPenalty, capacity: usize) -> SeqsimResult<Self> {
        let cache = LruCache::new(capacity)?;
        Self::with_cache(matrix, gap, cache)
    }

    /// Cria um alinhador usando um cache já construído.
    pub fn with_cache(
        matrix: M,
        gap: GapPenalty,
        cache: LruCache<PairKey, f64>,
    ) -> SeqsimResult<Self> {
        gap.validate()?;
        tracing::debug!(
            "Aligner criado: gap={:?}, capacidade do cache={}",
            gap,
            cache.capacity()
        );
        Ok(Self { matrix, cache, gap })
    }

    /// Score memorizado de `a` contra `b`.
    ///
    /// Em um miss, calcula via [`Aligner::forward`] e insere o resultado,
    /// o que pode remover a entrada menos recentemente usada.
    pub fn score(&mut self, a: &str, b: &str) -> SeqsimResult<f64> {
        let key = PairKey::new(a, b);
        if self.cache.exists(&key) {
            tracing::debug!("Cache hit: ({}, {})", a, b);
            return self.cache.get(&key);
        }

        tracing::debug!("Cache miss: ({}, {})", a, b);
        self.cache.record_miss();
        let result = self.forward(a, b)?;
        self.cache.put(key, result);
        Ok(result)
    }

    /// Melhor score de alinhamento local, sem consultar o cache.
    ///
    /// Retorna 0 se qualquer uma das sequências for vazia.
    pub fn forward(&self, a: &str, b: &str) -> SeqsimResult<f64> {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();

        let mut h = ScoringMatrix::new(a.len() + 1, b.len() + 1);
        self.fill_scoring_matrix(&mut h, &a, &b)?;

        let best = h.max();
        tracing::trace!("forward: {}x{} -> {}", h.rows(), h.cols(), best);
        Ok(best)
    }

    /// Score de auto-alinhamento, igual a `forward(a, a)`.
    ///
    /// Quando todo símbolo de `a` tem auto-score positivo e nenhum par com
    /// outro símbolo de `a` o supera, nenhum alinhamento passa da diagonal
    /// principal e o resultado é a soma dos auto-scores. Caso contrário,
    /// cai no cálculo completo.
    pub fn identity_score(&self, a: &str) -> SeqsimResult<f64> {
        let symbols: BTreeSet<char> = a.chars().collect();
        if !self.diagonal_dominates(&symbols)? {
            return self.forward(a, a);
        }

        let mut total = 0.0;
        for c in a.chars() {
            total += self.matrix.score(c, c)?;
        }
        Ok(total)
    }

    fn diagonal_dominates(&self, symbols: &BTreeSet<char>) -> SeqsimResult<bool> {
        for &x in symbols {
            let own = self.matrix.score(x, x)?;
            if own <= 0.0 {
                return Ok(false);
            }
            for &y in symbols {
                if self.matrix.score(x, y)? > own {
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }

    fn fill_scoring_matrix(
        &self,
        h: &mut ScoringMatrix,
        a: &[char],
        b: &[char],
    ) -> SeqsimResult<()> {
        let open = self.gap.open_cost();
        let extend = self.gap.extend_cost();

        // F: melhor score com gap em `b` terminando em (i, j), um valor por coluna
        let mut vertical = vec![f64::NEG_INFINITY; b.len() + 1];

        for i in 1..=a.len() {
            // E: melhor score com gap em `a` terminando em (i, j)
            let mut horizontal = f64::NEG_INFINITY;

            for j in 1..=b.len() {
                horizontal = (h.get(i, j - 1) - open).max(horizontal - extend);
                vertical[j] = (h.get(i - 1, j) - open).max(vertical[j] - extend);

                let diag = h.get(i - 1, j - 1) + self.matrix.score(a[i - 1], b[j - 1])?;
                let cell = diag.max(horizontal).max(vertical[j]).max(0.0);
                h.set(i, j, cell);
            }
        }

        Ok(())
    }

    /// Penalidade de gap configurada.
    pub fn gap_penalty(&self) -> GapPenalty {
        self.gap
    }

    /// Matriz de substituição.
    pub fn matrix(&self) -> &M {
        &self.matrix
    }

    /// Estatísticas do cache interno.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Indica se o par `(a, b)` está memorizado, sem alterar a recência.
    pub fn is_cached(&self, a: &str, b: &str) -> bool {
        self.cache.exists(&PairKey::new(a, b))
    }

    /// Esvazia o cache.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}

impl Aligner<SubstitutionMatrix> {
    /// Constrói matriz, gap e cache a partir da configuração.
    pub fn from_config(config: &Config) -> SeqsimResult<Self> {
        let scoring = &config.scoring;
        let mut matrix = match scoring.matrix {
            MatrixKind::Blosum62 => SubstitutionMatrix::blosum62(),
            MatrixKind::MatchMismatch => SubstitutionMatrix::match_mismatch(
                scoring.match_score,
                scoring.mismatch_score,
                &scoring.alphabet,
            )?,
        };
        if let Some(fallback) = scoring.fallback {
            matrix = matrix.with_fallback(fallback)?;
        }

        Self::new(matrix, scoring.gap, config.cache.capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SeqsimError;
    use std::cell::Cell;

    fn dna(gap: GapPenalty) -> Aligner {
        let matrix = SubstitutionMatrix::match_mismatch(2.0, -1.0, "ACGTU").unwrap();
        Aligner::new(matrix, gap, 16).unwrap()
    }

    fn linear(penalty: f64) -> GapPenalty {
        GapPenalty::linear(penalty).unwrap()
    }

    /// Conta cada consulta à matriz de substituição.
    struct CountingMatrix {
        inner: SubstitutionMatrix,
        calls: Cell<usize>,
    }

    impl SubstitutionScore for CountingMatrix {
        fn score(&self, a: char, b: char) -> SeqsimResult<f64> {
            self.calls.set(self.calls.get() + 1);
            self.inner.score(a, b)
        }
    }

    /// Recorrência que percorre todo comprimento de gap, com custo `gap.cost(k)`.
    fn scan_back_reference(a: &str, b: &str, gap: &GapPenalty) -> f64 {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let mut h = vec![vec![0.0f64; b.len() + 1]; a.len() + 1];
        let mut best = 0.0f64;
        for i in 1..=a.len() {
            for j in 1..=b.len() {
                let sub = if a[i - 1] == b[j - 1] { 2.0 } else { -1.0 };
                let mut cell = (h[i - 1][j - 1] + sub).max(0.0);
                for k in 1..=i {
                    cell = cell.max(h[i - k][j] - gap.cost(k));
                }
                for k in 1..=j {
                    cell = cell.max(h[i][j - k] - gap.cost(k));
                }
                h[i][j] = cell;
                best = best.max(cell);
            }
        }
        best
    }

    #[test]
    fn gattaca_textbook_example() {
        let aligner = dna(linear(1.0));
        assert_eq!(aligner.forward("GATTACA", "GCATGCU").unwrap(), 5.0);
    }

    const REFERENCE_PAIRS: [(&str, &str); 7] = [
        ("GATTACA", "GCATGCU"),
        ("ACGTACGT", "ACGACGT"),
        ("ACGTTTTTACGT", "ACGTACGT"),
        ("AAAAGGGG", "GGGGAAAA"),
        ("TGCATGCA", "ATGCAT"),
        ("ACGTAAAAAAACGTACGT", "ACGTACGTTTACGT"),
        ("A", "T"),
    ];

    fn assert_matches_reference(gap: GapPenalty) {
        let aligner = dna(gap);
        for (a, b) in REFERENCE_PAIRS {
            assert_eq!(
                aligner.forward(a, b).unwrap(),
                scan_back_reference(a, b, &gap),
                "{} vs {} with {:?}",
                a,
                b,
                gap
            );
            assert_eq!(
                aligner.forward(b, a).unwrap(),
                scan_back_reference(b, a, &gap),
                "{} vs {} with {:?}",
                b,
                a,
                gap
            );
        }
    }

    #[test]
    fn matches_scan_back_reference() {
        for penalty in [0.0, 0.5, 1.0, 3.0] {
            assert_matches_reference(linear(penalty));
        }
    }

    #[test]
    fn affine_matches_scan_back_reference() {
        for (open, extend) in [(5.0, 1.0), (3.0, 1.0), (2.0, 0.5), (1.5, 0.0), (4.0, 2.5)] {
            assert_matches_reference(GapPenalty::affine(open, extend).unwrap());
        }
    }

    #[test]
    fn affine_gap_scores() {
        assert_eq!(dna(linear(1.0)).forward("ACGTACGT", "ACGACGT").unwrap(), 13.0);
        let aligner = dna(GapPenalty::affine(5.0, 1.0).unwrap());
        assert_eq!(aligner.forward("ACGTACGT", "ACGACGT").unwrap(), 9.0);
        let aligner = dna(GapPenalty::affine(2.0, 0.5).unwrap());
        assert_eq!(aligner.forward("ACGTTTTTACGT", "ACGTACGT").unwrap(), 12.5);
    }

    #[test]
    fn empty_inputs_score_zero() {
        let aligner = dna(linear(1.0));
        assert_eq!(aligner.forward("", "ACGT").unwrap(), 0.0);
        assert_eq!(aligner.forward("ACGT", "").unwrap(), 0.0);
        assert_eq!(aligner.forward("", "").unwrap(), 0.0);
    }

    #[test]
    fn no_positive_region_scores_zero() {
        let aligner = dna(linear(1.0));
        assert_eq!(aligner.forward("AAAA", "CCCC").unwrap(), 0.0);
    }

    #[test]
    fn forward_is_symmetric_and_non_negative() {
        let aligner = Aligner::new(SubstitutionMatrix::blosum62(), linear(4.0), 4).unwrap();
        let seqs = ["CASSLGQAYEQYF", "CASSPGQGAYEQYF", "GTA", "HLA", "WWW", "*X*"];
        for a in seqs {
            for b in seqs {
                let ab = aligner.forward(a, b).unwrap();
                assert_eq!(ab, aligner.forward(b, a).unwrap(), "{} / {}", a, b);
                assert!(ab >= 0.0);
            }
        }
    }

    #[test]
    fn identity_matches_forward() {
        let aligner = Aligner::new(SubstitutionMatrix::blosum62(), linear(10.0), 4).unwrap();
        // X tem auto-score negativo, então passa pelo cálculo completo
        for seq in ["CASSLGQAYEQYF", "SEQVENCES", "A", "XXAX", "W*W", "BZDE"] {
            assert_eq!(
                aligner.identity_score(seq).unwrap(),
                aligner.forward(seq, seq).unwrap(),
                "{}",
                seq
            );
        }
        assert_eq!(aligner.identity_score("SEQVENCES").unwrap(), 47.0);
        assert_eq!(aligner.identity_score("").unwrap(), 0.0);
    }

    #[test]
    fn identity_with_dominated_diagonal_falls_back() {
        let entries = vec![(('A', 'A'), 1.0), (('B', 'B'), 1.0), (('A', 'B'), 3.0)];
        let matrix = SubstitutionMatrix::from_scores("skewed", entries).unwrap();
        let aligner = Aligner::new(matrix, linear(1.0), 4).unwrap();
        assert_eq!(
            aligner.identity_score("ABAB").unwrap(),
            aligner.forward("ABAB", "ABAB").unwrap()
        );
        assert!(aligner.identity_score("ABAB").unwrap() > 4.0);
    }

    #[test]
    fn undefined_pair_propagates() {
        let mut aligner = dna(linear(1.0));
        let err = aligner.score("ACGN", "ACGT").unwrap_err();
        assert!(err.is_undefined_pair());
        assert!(aligner.identity_score("N").is_err());
        // falhas não são memorizadas
        assert!(!aligner.is_cached("ACGN", "ACGT"));
    }

    #[test]
    fn second_call_hits_cache() {
        let matrix = CountingMatrix {
            inner: SubstitutionMatrix::match_mismatch(2.0, -1.0, "ACGT").unwrap(),
            calls: Cell::new(0),
        };
        let mut aligner = Aligner::new(matrix, linear(1.0), 4).unwrap();

        let first = aligner.score("ACGT", "AGT").unwrap();
        let calls = aligner.matrix().calls.get();
        assert_eq!(calls, 12);

        let second = aligner.score("ACGT", "AGT").unwrap();
        assert_eq!(first, second);
        assert_eq!(aligner.matrix().calls.get(), calls);

        let stats = aligner.cache_stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.size, 1);
    }

    #[test]
    fn is_cached_leaves_stats_unchanged() {
        let mut aligner = dna(linear(1.0));
        let before = aligner.cache_stats();
        for _ in 0..5 {
            assert!(!aligner.is_cached("A", "C"));
        }
        assert_eq!(aligner.cache_stats(), before);
        assert_eq!(aligner.cache_stats().misses, 0);

        aligner.score("A", "C").unwrap();
        let after_score = aligner.cache_stats();
        for _ in 0..5 {
            assert!(aligner.is_cached("A", "C"));
        }
        assert_eq!(aligner.cache_stats(), after_score);
        assert_eq!(after_score.misses, 1);
        assert_eq!(after_score.hits, 0);
    }

    #[test]
    fn cache_key_is_order_sensitive_and_structured() {
        let mut aligner = dna(linear(1.0));
        aligner.score("AC", "G").unwrap();
        assert!(aligner.is_cached("AC", "G"));
        assert!(!aligner.is_cached("G", "AC"));
        assert!(!aligner.is_cached("A", "CG"));
    }

    #[test]
    fn capacity_two_evicts_oldest_pair() {
        let matrix = SubstitutionMatrix::match_mismatch(1.0, -1.0, "ABCDEF").unwrap();
        let mut aligner = Aligner::new(matrix, linear(1.0), 2).unwrap();

        aligner.score("AA", "BB").unwrap();
        aligner.score("CC", "DD").unwrap();
        aligner.score("EE", "FF").unwrap();

        assert!(!aligner.is_cached("AA", "BB"));
        assert!(aligner.is_cached("CC", "DD"));
        assert!(aligner.is_cached("EE", "FF"));
        assert_eq!(aligner.cache_stats().evictions, 1);
    }

    #[test]
    fn injected_cache_is_used() {
        let cache = LruCache::new(1).unwrap();
        let matrix = SubstitutionMatrix::match_mismatch(1.0, -1.0, "AC").unwrap();
        let mut aligner = Aligner::with_cache(matrix, linear(1.0), cache).unwrap();

        aligner.score("A", "A").unwrap();
        aligner.score("C", "C").unwrap();
        assert_eq!(aligner.cache_stats().capacity, 1);
        assert!(!aligner.is_cached("A", "A"));

        aligner.clear_cache();
        assert_eq!(aligner.cache_stats().size, 0);
    }

    #[test]
    fn invalid_construction_fails_fast() {
        let matrix = SubstitutionMatrix::blosum62();
        let err = Aligner::new(matrix.clone(), linear(1.0), 0).err().unwrap();
        assert!(matches!(err, SeqsimError::Config(_)));

        let bad_gap = GapPenalty::Linear { penalty: -2.0 };
        assert!(Aligner::new(matrix, bad_gap, 4).is_err());
    }

    #[test]
    fn from_config_builds_matrix() {
        let mut config = Config::default();
        config.scoring.matrix = MatrixKind::MatchMismatch;
        config.scoring.alphabet = "ACGTU".to_string();
        config.scoring.gap = linear(1.0);
        config.cache.capacity = 3;

        let mut aligner = Aligner::from_config(&config).unwrap();
        assert_eq!(aligner.score("GATTACA", "GCATGCU").unwrap(), 5.0);
        assert_eq!(aligner.cache_stats().capacity, 3);
        assert_eq!(aligner.gap_penalty(), linear(1.0));

        config.scoring.fallback = Some(-1.0);
        let aligner = Aligner::from_config(&config).unwrap();
        assert_eq!(aligner.forward("NNN", "NNN").unwrap(), 0.0);
    }
}
