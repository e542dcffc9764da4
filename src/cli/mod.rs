//! Interface de linha de comando do seqsim.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// seqsim - scores de alinhamento local Smith-Waterman com cache LRU.
#[derive(Parser, Debug)]
#[command(name = "seqsim")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Arquivo de configuração.
    #[arg(short, long, default_value = "seqsim.toml")]
    pub config: PathBuf,

    /// Modo verbose.
    #[arg(short, long)]
    pub verbose: bool,

    /// Modo silencioso.
    #[arg(short, long)]
    pub quiet: bool,

    /// Comando a executar.
    #[command(subcommand)]
    pub command: Commands,
}

/// Comandos disponíveis.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Cria seqsim.toml com a configuração padrão.
    Init {
        /// Diretório de destino (padrão: diretório atual).
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// Score de alinhamento local entre duas sequências.
    Score {
        /// Primeira sequência.
        a: String,

        /// Segunda sequência.
        b: String,

        /// Saída em JSON.
        #[arg(long)]
        json: bool,
    },

    /// Score de identidade (auto-alinhamento) de uma sequência.
    Identity {
        /// Sequência.
        sequence: String,
    },

    /// Distância normalizada pela identidade entre duas sequências.
    Distance {
        /// Primeira sequência.
        a: String,

        /// Segunda sequência.
        b: String,

        /// Saída em JSON.
        #[arg(long)]
        json: bool,
    },

    /// Mostra e valida a configuração efetiva.
    Config,

    /// Mostra versão.
    Version,
}
