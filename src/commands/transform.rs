//! Comando transform - Aplica o passo tpl em documentos

use anyhow::Result;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};

use crate::core::element::Node;
use crate::core::options::{ProjectConfig, TemplateOptions, TransformOptions};
use crate::core::pass::TPL_PASS;
use crate::core::{document, utils};

pub fn run(
    files: &[PathBuf],
    config: Option<PathBuf>,
    data_attr: bool,
    write: bool,
    verbose: bool,
) -> Result<()> {
    let (project, config_path) = ProjectConfig::resolve(config.as_deref())?;
    let opts = project.transform_options(data_attr);

    if verbose {
        match &config_path {
            Some(path) => utils::print_info(&format!("Config: {}", path.display())),
            None => utils::print_info("Nenhum config encontrado, usando padrões"),
        }
        let enabled = opts.as_ref().is_some_and(|o| o.transform_data_attr);
        utils::print_info(&format!("transform_data_attr: {}", enabled));
    }

    if !write {
        for file in files {
            let (nodes, _) = transform_file(file, &project.template, opts.as_ref(), verbose)?;
            println!("{}", document::to_pretty_json(&nodes)?);
        }
        return Ok(());
    }

    eprintln!("{}", "🔨 Normalizando templates...".bright_yellow());

    let bar = ProgressBar::new(files.len() as u64);
    bar.set_style(
        ProgressStyle::with_template("   {bar:30.cyan/blue} {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let mut total = 0;
    for file in files {
        bar.set_message(file.display().to_string());
        let (nodes, count) = bar.suspend(|| {
            transform_file(file, &project.template, opts.as_ref(), verbose)
        })?;
        bar.suspend(|| document::write_document(file, &nodes, verbose))?;
        total += count;
        bar.inc(1);
    }
    bar.finish_and_clear();

    utils::print_success(&format!(
        "{} arquivo(s), {} elemento(s) reescrito(s)",
        files.len(),
        total
    ));
    Ok(())
}

fn transform_file(
    file: &Path,
    tpl_opts: &TemplateOptions,
    opts: Option<&TransformOptions>,
    verbose: bool,
) -> Result<(Vec<Node>, usize)> {
    let mut nodes = match document::read_document(file) {
        Ok(nodes) => nodes,
        Err(err) => {
            utils::print_error(&format!("{}", file.display()));
            return Err(err);
        }
    };

    let count = TPL_PASS.run(&mut nodes, tpl_opts, opts);

    if verbose {
        utils::print_step(&format!(
            "{}: {} elemento(s) <{}> reescrito(s)",
            file.display(),
            count,
            TPL_PASS.tag
        ));
    }
    if count == 0 {
        utils::print_warning(&format!("{}: nenhum elemento <{}>", file.display(), TPL_PASS.tag));
    }

    Ok((nodes, count))
}
