//! Matriz de substituição simétrica.

use std::collections::{BTreeSet, HashMap};

use super::blosum::blosum62_entries;
use super::SubstitutionScore;
use crate::{SeqsimError, SeqsimResult};

/// Matriz de substituição imutável, indexada por pares de símbolos.
///
/// O par é armazenado em ordem canônica, então `score(a, b) == score(b, a)`
/// por construção. Pares fora do alfabeto falham com
/// [`SeqsimError::UndefinedSymbolPair`], a menos que um valor de fallback
/// tenha sido definido com [`SubstitutionMatrix::with_fallback`].
#[derive(Debug, Clone)]
pub struct SubstitutionMatrix {
    name: String,
    scores: HashMap<(char, char), f64>,
    alphabet: BTreeSet<char>,
    fallback: Option<f64>,
}

fn canonical(a: char, b: char) -> (char, char) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

impl SubstitutionMatrix {
    /// Constrói a matriz a partir de pares `((a, b), score)`.
    ///
    /// Um par pode aparecer nas duas orientações, desde que com o mesmo score.
    ///
    /// # Errors
    ///
    /// Retorna [`SeqsimError::Config`] se algum score não for finito ou se
    /// `(a, b)` e `(b, a)` tiverem scores diferentes.
    pub fn from_scores<S, I>(name: S, entries: I) -> SeqsimResult<Self>
    where
        S: Into<String>,
        I: IntoIterator<Item = ((char, char), f64)>,
    {
        let name = name.into();
        let mut scores = HashMap::new();
        let mut alphabet = BTreeSet::new();

        for ((a, b), score) in entries {
            if !score.is_finite() {
                return Err(SeqsimError::config(format!(
                    "{}: score não finito para ('{}', '{}')",
                    name, a, b
                )));
            }
            if let Some(previous) = scores.insert(canonical(a, b), score) {
                if previous != score {
                    return Err(SeqsimError::config(format!(
                        "{}: matriz assimétrica em ('{}', '{}'): {} != {}",
                        name, a, b, previous, score
                    )));
                }
            }
            alphabet.insert(a);
            alphabet.insert(b);
        }

        tracing::debug!(
            "Matriz '{}' construída: {} símbolos, {} pares",
            name,
            alphabet.len(),
            scores.len()
        );

        Ok(Self {
            name,
            scores,
            alphabet,
            fallback: None,
        })
    }

    /// Esquema simples: `match_score` para símbolos iguais, `mismatch_score`
    /// para diferentes, sobre os símbolos de `alphabet`.
    pub fn match_mismatch(
        match_score: f64,
        mismatch_score: f64,
        alphabet: &str,
    ) -> SeqsimResult<Self> {
        let symbols: BTreeSet<char> = alphabet.chars().collect();
        if symbols.is_empty() {
            return Err(SeqsimError::config("alfabeto vazio"));
        }

        let entries = symbols.iter().flat_map(|&a| {
            symbols.iter().map(move |&b| {
                let score = if a == b { match_score } else { mismatch_score };
                ((a, b), score)
            })
        });
        Self::from_scores("match/mismatch", entries)
    }

    /// BLOSUM62: 20 aminoácidos mais B, Z, X e `*`.
    pub fn blosum62() -> Self {
        let mut scores = HashMap::new();
        let mut alphabet = BTreeSet::new();
        for ((a, b), score) in blosum62_entries() {
            scores.insert(canonical(a, b), score);
            alphabet.insert(a);
        }
        Self {
            name: "BLOSUM62".to_string(),
            scores,
            alphabet,
            fallback: None,
        }
    }

    /// Define o score usado para pares com símbolos fora do alfabeto.
    pub fn with_fallback(mut self, score: f64) -> SeqsimResult<Self> {
        if !score.is_finite() {
            return Err(SeqsimError::config("score de fallback deve ser finito"));
        }
        self.fallback = Some(score);
        Ok(self)
    }

    /// Nome da matriz (ex.: "BLOSUM62").
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Símbolos com score definido.
    pub fn alphabet(&self) -> &BTreeSet<char> {
        &self.alphabet
    }
}

impl SubstitutionScore for SubstitutionMatrix {
    fn score(&self, a: char, b: char) -> SeqsimResult<f64> {
        match self.scores.get(&canonical(a, b)) {
            Some(&score) => Ok(score),
            None => self
                .fallback
                .ok_or(SeqsimError::UndefinedSymbolPair(a, b)),
        }
    }
}
