pub mod assess;
pub mod batch;
pub mod schema;

use crate::household::{self, HouseholdRecord};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Read household records from a CSV or JSON file, chosen by extension
pub fn read_households(path: &Path) -> anyhow::Result<Vec<HouseholdRecord>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        household::read_json(reader)
    } else {
        household::read_csv(reader)
    }
}
