/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 the repoforms authors
*/

use clap::{Parser, Subcommand};
use repoforms_core::FieldDefinitionData;
use repoforms_mapper::{load_field_definition, resolve_choices, OptionListEditor};
use schemars::schema_for;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the effective choices of a selection field for a language
    Resolve {
        /// Path to the field definition YAML/JSON file
        field: PathBuf,

        /// Language code to resolve for
        #[arg(short, long)]
        language: String,
    },
    /// Apply the submit rule to an edited option list
    Normalize {
        /// Edited entries; empty entries are dropped
        #[arg(value_delimiter = ',')]
        entries: Vec<String>,
    },
    /// Generate JSON schema for field definition data
    Schema,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve { field, language } => {
            let definition = match load_field_definition(&field) {
                Ok(definition) => definition,
                Err(e) => {
                    eprintln!("Error reading field definition: {}", e);
                    std::process::exit(1);
                }
            };
            for choice in resolve_choices(&definition, &language) {
                println!("{choice}");
            }
        }
        Commands::Normalize { entries } => {
            for entry in OptionListEditor::submit(entries) {
                println!("{entry}");
            }
        }
        Commands::Schema => {
            let schema = schema_for!(FieldDefinitionData);
            println!("{}", serde_json::to_string_pretty(&schema).unwrap());
        }
    }
}
