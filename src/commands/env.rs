//! Comando env - Mostra configuração efetiva
use anyhow::Result;
use colored::*;
use std::path::PathBuf;

use crate::core::config::files;
use crate::core::options::ProjectConfig;

pub fn run(config: Option<PathBuf>, _verbose: bool) -> Result<()> {
    println!("{}", "🔧 Configuração:".bright_cyan());
    println!();

    let (project, config_path) = ProjectConfig::resolve(config.as_deref())?;

    match config_path {
        Some(path) => println!("   Arquivo: {}", path.display().to_string().bright_green()),
        None => println!(
            "   Arquivo: {}",
            format!("nenhum {} encontrado", files::CONFIG).bright_black()
        ),
    }

    match &project.transform {
        Some(opts) => println!(
            "   transform_data_attr: {}",
            opts.transform_data_attr.to_string().bright_green()
        ),
        None => println!("   transform: {}", "ausente".bright_black()),
    }

    Ok(())
}
