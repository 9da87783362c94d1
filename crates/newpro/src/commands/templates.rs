//! List the templates offered by the wizard

use std::process::ExitCode;

use anyhow::Result;
use camino::Utf8Path;
use newpro_projects::{NewproConfig, TemplateRegistry};
use tabled::{settings::Style, Table, Tabled};

use crate::output;

#[derive(Tabled)]
struct TemplateRow {
    id: String,
    label: String,
    questions: String,
}

fn rows(registry: &TemplateRegistry) -> Vec<TemplateRow> {
    registry
        .iter()
        .map(|t| TemplateRow {
            id: t.id().to_string(),
            label: t.label().to_string(),
            questions: if t.flags().is_empty() {
                "-".to_string()
            } else {
                t.flags()
                    .iter()
                    .map(|f| f.prompt)
                    .collect::<Vec<_>>()
                    .join(", ")
            },
        })
        .collect()
}

pub fn run(config: &NewproConfig, origin: Option<&Utf8Path>) -> Result<ExitCode> {
    let registry = TemplateRegistry::builtin(config);

    output::header("Templates");
    let mut table = Table::new(rows(&registry));
    table.with(Style::sharp());
    println!("{}", table);

    output::header("Configuration");
    output::kv(
        "config",
        origin.map(Utf8Path::as_str).unwrap_or("(defaults)"),
    );
    output::kv("go module", &config.go.module_path("<name>"));
    output::kv("astro template", &config.astro.template);

    Ok(ExitCode::SUCCESS)
}
