//! Comando check - Mostra como um valor :data seria normalizado
use anyhow::Result;
use colored::*;
use std::path::PathBuf;

use crate::core::config::{attrs, tags};
use crate::core::element::Element;
use crate::core::options::ProjectConfig;
use crate::core::{pattern, tpl, utils};

pub fn run(value: &str, config: Option<PathBuf>, data_attr: bool, _verbose: bool) -> Result<()> {
    let (project, _) = ProjectConfig::resolve(config.as_deref())?;
    let opts = project.transform_options(data_attr);

    let mut element = Element::new(tags::TPL).with_attr(attrs::DATA_BINDING, value);
    tpl::transform_tpl_element(&mut element, &project.template, opts.as_ref());

    println!("{}", "🔍 Valor :data".bright_cyan());
    println!("   Entrada: {}", format!("{:?}", value).bright_black());

    let matched = pattern::is_plain_object(value.trim());
    println!(
        "   Objeto sem chaves: {}",
        if matched { "sim".bright_green() } else { "não".bright_black() }
    );

    match element.attributes.get(attrs::DATA) {
        Some(normalized) => {
            let rendered = serde_json::to_string(normalized)?;
            println!("   {}: {}", attrs::DATA, rendered.bright_green());
        }
        None => {
            utils::print_warning("transform_data_attr desativado, :data mantido");
        }
    }

    Ok(())
}
