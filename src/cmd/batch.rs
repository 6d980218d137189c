//! Batch command - assess many households from a CSV or JSON file

use crate::cmd::read_households;
use crate::household::Household;
use crate::tax::calculate_tax;
use anyhow::Context;
use clap::Args;
use std::io;
use std::path::PathBuf;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct BatchCommand {
    /// CSV or JSON file containing household records
    #[arg(short, long)]
    file: PathBuf,

    /// Output as CSV instead of formatted table
    #[arg(long)]
    csv: bool,
}

/// Row for the batch results table
#[derive(Debug, Clone, Tabled, serde::Serialize)]
struct BatchRow {
    #[tabled(rename = "#")]
    row_num: usize,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Income 1")]
    income1: i64,
    #[tabled(rename = "Income 2")]
    income2: i64,
    #[tabled(rename = "Children")]
    children: i32,
    #[tabled(rename = "Parts")]
    parts: String,
    #[tabled(rename = "Reference Income")]
    reference_income: String,
    #[tabled(rename = "Net Tax")]
    net_tax: String,
}

impl BatchCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let records = read_households(&self.file)?;

        let mut rows = Vec::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            let household = Household::try_from(record)
                .with_context(|| format!("invalid household at row {}", i + 1))?;
            let assessment = calculate_tax(&household);
            rows.push(BatchRow {
                row_num: i + 1,
                status: household.status.to_string(),
                income1: record.income1,
                income2: record.income2,
                children: record.dependent_children,
                parts: assessment.household_parts.to_string(),
                reference_income: assessment.reference_income.to_string(),
                net_tax: assessment.net_tax.to_string(),
            });
        }

        if self.csv {
            self.write_csv(&rows)
        } else {
            self.print_table(&rows);
            Ok(())
        }
    }

    fn print_table(&self, rows: &[BatchRow]) {
        if rows.is_empty() {
            println!("No households found in input");
            return;
        }

        let table = Table::new(rows)
            .with(Style::rounded())
            .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
            .to_string();
        println!("{}", table);
    }

    fn write_csv(&self, rows: &[BatchRow]) -> anyhow::Result<()> {
        let mut wtr = csv::Writer::from_writer(io::stdout());
        for row in rows {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        Ok(())
    }
}
