use std::path::PathBuf;

use clap::Subcommand;

use super::{open_store, CmdResult};

const DEFAULT_EXPORT_FILE: &str = "studydeck_data.json";

#[derive(Subcommand)]
pub enum DataAction {
    /// Write the whole study document to a JSON file
    Export {
        /// Output file ("-" for stdout)
        #[arg(long, default_value = DEFAULT_EXPORT_FILE)]
        out: PathBuf,
    },
    /// Replace the study document with a previously exported file
    Import {
        /// File to import
        path: PathBuf,
    },
}

pub fn run(action: DataAction) -> CmdResult {
    let mut store = open_store()?;
    match action {
        DataAction::Export { out } => {
            let json = store.export_document()?;
            if out.as_os_str() == "-" {
                println!("{json}");
            } else {
                std::fs::write(&out, json)?;
                eprintln!("Data exported as JSON to {}", out.display());
            }
        }
        DataAction::Import { path } => {
            let raw = std::fs::read_to_string(&path)?;
            store.import_document(&raw)?;
        }
    }
    Ok(())
}
