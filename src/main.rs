//! tplnorm - Passo tpl do pipeline de templates
//!
//! Reescreve elementos `<tpl>` em `<template>` e, opcionalmente, normaliza o
//! atributo `:data` em `data`.
//!
//! # Uso
//! ```bash
//! tplnorm transform pages/index.json --data-attr
//! tplnorm transform pages/*.json --write
//! tplnorm check "item: item, index: idx" --data-attr
//! tplnorm env
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;

mod commands;
mod core;

#[derive(Parser)]
#[command(name = "tplnorm")]
#[command(about = "🔨 tplnorm - Normalizador de elementos tpl", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Aplica o passo tpl em documentos JSON
    Transform {
        /// Documentos de entrada
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Arquivo de configuração (padrão: tplnorm.toml mais próximo)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Força a normalização de :data
        #[arg(long)]
        data_attr: bool,

        /// Sobrescreve os arquivos em vez de imprimir
        #[arg(short, long)]
        write: bool,
    },

    /// Mostra como um valor :data seria normalizado
    Check {
        /// Valor do atributo :data
        value: String,

        /// Arquivo de configuração
        #[arg(long)]
        config: Option<PathBuf>,

        /// Força a normalização de :data
        #[arg(long)]
        data_attr: bool,
    },

    /// Mostra configuração efetiva
    Env {
        /// Arquivo de configuração
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Banner
    if !cli.quiet {
        eprintln!("{}", "🔨 tplnorm - Passo tpl do pipeline de templates".bright_cyan().bold());
        eprintln!();
    }

    match cli.command {
        Commands::Transform {
            files,
            config,
            data_attr,
            write,
        } => commands::transform::run(&files, config, data_attr, write, cli.verbose)?,
        Commands::Check {
            value,
            config,
            data_attr,
        } => commands::check::run(&value, config, data_attr, cli.verbose)?,
        Commands::Env { config } => commands::env::run(config, cli.verbose)?,
    }

    Ok(())
}
