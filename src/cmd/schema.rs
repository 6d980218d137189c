//! Schema command - print expected input formats

use crate::household::HouseholdInput;
use clap::Args;
use schemars::schema_for;

#[derive(Args, Debug)]
pub struct SchemaCommand {
    /// Output format: json-schema or csv-header
    #[arg(value_enum, default_value = "json-schema")]
    format: SchemaFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SchemaFormat {
    /// JSON Schema for the batch input format
    JsonSchema,
    /// CSV header row with column names
    CsvHeader,
    /// CSV column descriptions
    CsvFields,
}

impl SchemaCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        match self.format {
            SchemaFormat::JsonSchema => self.print_json_schema(),
            SchemaFormat::CsvHeader => self.print_csv_header(),
            SchemaFormat::CsvFields => self.print_csv_fields(),
        }
    }

    fn print_json_schema(&self) -> anyhow::Result<()> {
        let schema = schema_for!(HouseholdInput);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        Ok(())
    }

    fn print_csv_header(&self) -> anyhow::Result<()> {
        println!("{}", CSV_COLUMNS.join(","));
        Ok(())
    }

    fn print_csv_fields(&self) -> anyhow::Result<()> {
        println!("CSV Input Format");
        println!("================");
        println!();
        for (name, required, description) in CSV_FIELD_DESCRIPTIONS {
            let req = if *required { "required" } else { "optional" };
            println!("{:20} ({:8})  {}", name, req, description);
        }
        println!();
        println!("Monetary amounts are whole currency units");
        Ok(())
    }
}

const CSV_COLUMNS: &[&str] = &[
    "income1",
    "income2",
    "family_status",
    "dependent_children",
    "disabled_children",
    "isolated_parent",
];

const CSV_FIELD_DESCRIPTIONS: &[(&str, bool, &str)] = &[
    ("income1", true, "Net income of the first declarant"),
    (
        "income2",
        false,
        "Net income of the second declarant (couples only)",
    ),
    (
        "family_status",
        true,
        "Single, Married, RegisteredPartnership, Divorced or Widowed",
    ),
    (
        "dependent_children",
        false,
        "Number of dependent children (0-7)",
    ),
    (
        "disabled_children",
        false,
        "Number of disabled dependent children",
    ),
    (
        "isolated_parent",
        false,
        "true if the declarant raises the children alone",
    ),
];
