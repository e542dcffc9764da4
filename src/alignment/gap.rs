//! Modelos de penalidade de gap.

use serde::{Deserialize, Serialize};

use crate::{SeqsimError, SeqsimResult};

/// Política de custo de gaps.
///
/// - `Linear`: um gap de comprimento `L` custa `L * penalty`.
/// - `Affine`: um gap de comprimento `L` custa `open + (L - 1) * extend`.
///
/// Todos os custos são não negativos e são subtraídos do score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum GapPenalty {
    Linear { penalty: f64 },
    Affine { open: f64, extend: f64 },
}

impl GapPenalty {
    /// Cria uma penalidade linear.
    pub fn linear(penalty: f64) -> SeqsimResult<Self> {
        let gap = Self::Linear { penalty };
        gap.validate()?;
        Ok(gap)
    }

    /// Cria uma penalidade afim.
    pub fn affine(open: f64, extend: f64) -> SeqsimResult<Self> {
        let gap = Self::Affine { open, extend };
        gap.validate()?;
        Ok(gap)
    }

    /// Verifica que todos os custos são finitos e não negativos.
    pub fn validate(&self) -> SeqsimResult<()> {
        let (open, extend) = (self.open_cost(), self.extend_cost());
        if !open.is_finite() || !extend.is_finite() {
            return Err(SeqsimError::config(format!(
                "penalidade de gap não finita: {:?}",
                self
            )));
        }
        if open < 0.0 || extend < 0.0 {
            return Err(SeqsimError::config(format!(
                "penalidade de gap negativa: {:?}",
                self
            )));
        }
        Ok(())
    }

    /// Custo do primeiro símbolo de um gap.
    pub fn open_cost(&self) -> f64 {
        match *self {
            Self::Linear { penalty } => penalty,
            Self::Affine { open, .. } => open,
        }
    }

    /// Custo de cada símbolo adicional de um gap já aberto.
    pub fn extend_cost(&self) -> f64 {
        match *self {
            Self::Linear { penalty } => penalty,
            Self::Affine { extend, .. } => extend,
        }
    }

    /// Custo total de um gap de comprimento `len`.
    pub fn cost(&self, len: usize) -> f64 {
        if len == 0 {
            return 0.0;
        }
        self.open_cost() + (len - 1) as f64 * self.extend_cost()
    }
}

impl Default for GapPenalty {
    fn default() -> Self {
        Self::Linear { penalty: 10.0 }
    }
}
