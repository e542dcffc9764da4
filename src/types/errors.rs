//! Tipos de erro do seqsim.

use thiserror::Error;

/// Tipo de resultado padrão do seqsim.
pub type SeqsimResult<T> = Result<T, SeqsimError>;

/// Erros possíveis no seqsim.
#[derive(Error, Debug)]
pub enum SeqsimError {
    #[error("Erro de configuração: {0}")]
    Config(String),

    #[error("Chave não encontrada no cache: {0}")]
    KeyNotFound(String),

    #[error("Par de símbolos sem score definido: ('{0}', '{1}')")]
    UndefinedSymbolPair(char, char),

    #[error("Erro de IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("Erro ao parsear TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Erro ao serializar TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Erro de JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl SeqsimError {
    /// Cria um erro de configuração.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Indica se o erro vem de um par de símbolos que a matriz não resolve.
    pub fn is_undefined_pair(&self) -> bool {
        matches!(self, Self::UndefinedSymbolPair(_, _))
    }
}
