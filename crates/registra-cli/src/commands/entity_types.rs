//! Implementation of the `registra entity-types` command.

use registra_core::{application::CatalogService, domain::Locale};

use crate::{
    cli::{EntityTypesArgs, ListFormat},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: EntityTypesArgs, output: OutputManager) -> CliResult<()> {
    let catalog = CatalogService::new().list();

    match args.format {
        ListFormat::Table => {
            output.header("Entity Types:")?;
            for (position, info) in catalog.iter().enumerate() {
                let label = info.label_in(output.locale());
                let other = match output.locale() {
                    Locale::English => info.label,
                    Locale::Arabic => info.english_label,
                };
                output.print(&format!(
                    "  {:>2}. {:<24} {} ({})",
                    position + 1,
                    info.id,
                    label,
                    other
                ))?;
            }
        }

        // JSON must be parseable even in non-TTY pipes and quiet mode.
        ListFormat::Json => output.json(&catalog)?,

        ListFormat::List => {
            for info in &catalog {
                println!("{}", info.id);
            }
        }

        ListFormat::Csv => {
            println!("id,label,english_label");
            for info in &catalog {
                println!("{},{},{}", info.id, info.label, info.english_label);
            }
        }
    }

    Ok(())
}
