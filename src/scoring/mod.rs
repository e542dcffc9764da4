//! Esquemas de score de substituição.
//!
//! O [`Aligner`](crate::alignment::Aligner) depende apenas do trait
//! [`SubstitutionScore`]; a implementação concreta é [`SubstitutionMatrix`],
//! que oferece BLOSUM62 embutida e um esquema simples de match/mismatch.

mod blosum;
mod substitution;

use std::rc::Rc;
use std::sync::Arc;

use crate::SeqsimResult;

pub use substitution::SubstitutionMatrix;

/// Consulta de score para um par de símbolos.
///
/// Implementações devem ser imutáveis do ponto de vista do alinhador e
/// retornar [`SeqsimError::UndefinedSymbolPair`](crate::SeqsimError::UndefinedSymbolPair)
/// para pares que não sabem resolver.
pub trait SubstitutionScore {
    /// Score de alinhar `a` contra `b`.
    fn score(&self, a: char, b: char) -> SeqsimResult<f64>;
}

impl<T: SubstitutionScore + ?Sized> SubstitutionScore for &T {
    fn score(&self, a: char, b: char) -> SeqsimResult<f64> {
        (**self).score(a, b)
    }
}

impl<T: SubstitutionScore + ?Sized> SubstitutionScore for Box<T> {
    fn score(&self, a: char, b: char) -> SeqsimResult<f64> {
        (**self).score(a, b)
    }
}

impl<T: SubstitutionScore + ?Sized> SubstitutionScore for Rc<T> {
    fn score(&self, a: char, b: char) -> SeqsimResult<f64> {
        (**self).score(a, b)
    }
}

impl<T: SubstitutionScore + ?Sized> SubstitutionScore for Arc<T> {
    fn score(&self, a: char, b: char) -> SeqsimResult<f64> {
        (**self).score(a, b)
    }
}
