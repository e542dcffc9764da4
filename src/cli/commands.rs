//! Implementação dos comandos CLI do seqsim.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::alignment::Aligner;
use crate::metrics::CdrDistance;
use crate::types::config::Config;
use crate::SeqsimResult;

#[derive(Debug, Serialize)]
struct PairOutput<'a> {
    a: &'a str,
    b: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    distance: Option<f64>,
}

/// Initializes configuration in the specified directory.
pub fn init(path: Option<PathBuf>) -> SeqsimResult<()> {
    let target_dir = path.unwrap_or_else(|| PathBuf::from("."));

    // Create directory if it doesn't exist
    if !target_dir.exists() {
        std::fs::create_dir_all(&target_dir)?;
        tracing::info!("Directory created: {}", target_dir.display());
    }

    let config_path = target_dir.join("seqsim.toml");

    if config_path.exists() {
        println!("Configuration already exists at: {}", config_path.display());
        return Ok(());
    }

    let config = Config::default_config();
    config.save(&config_path)?;

    println!("Configuration created at: {}", config_path.display());
    Ok(())
}

/// Calcula o score de alinhamento local.
pub fn score(a: &str, b: &str, json: bool, config: &Config) -> SeqsimResult<()> {
    let mut aligner = Aligner::from_config(config)?;
    let value = aligner.score(a, b)?;

    if json {
        let output = PairOutput {
            a,
            b,
            score: Some(value),
            distance: None,
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{}", value);
    }
    Ok(())
}

/// Calcula o score de identidade.
pub fn identity(sequence: &str, config: &Config) -> SeqsimResult<()> {
    let aligner = Aligner::from_config(config)?;
    println!("{}", aligner.identity_score(sequence)?);
    Ok(())
}

/// Calcula a distância normalizada.
pub fn distance(a: &str, b: &str, json: bool, config: &Config) -> SeqsimResult<()> {
    let mut metric = CdrDistance::from_config(config)?;
    let value = metric.distance(a, b)?;

    if json {
        let output = PairOutput {
            a,
            b,
            score: None,
            distance: Some(value),
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{:.4}", value);
    }
    Ok(())
}

/// Mostra a configuração efetiva e verifica se ela constrói um alinhador.
pub fn config_cmd(config_path: &Path, config: &Config) -> SeqsimResult<()> {
    if config_path.exists() {
        println!("# {}", config_path.display());
    } else {
        println!("# {} não encontrado, usando padrões", config_path.display());
    }
    print!("{}", toml::to_string_pretty(config)?);

    Aligner::from_config(config)?;
    println!();
    println!("✓ Configuração válida");
    Ok(())
}

/// Mostra versão.
pub fn version() {
    println!("seqsim {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Scores de alinhamento local Smith-Waterman com cache LRU");
}
