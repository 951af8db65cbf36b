use anyhow::Result;
use hocr_lib::RegattaConfig;

use crate::output::{build_event_rows, build_regatta_rows, print_json, print_rows, OutputFormat};

pub fn run(config: &RegattaConfig, format: &OutputFormat) -> Result<()> {
    if *format == OutputFormat::Json {
        print_json(config);
        return Ok(());
    }
    print_rows(&build_regatta_rows(config), format)?;
    print_rows(&build_event_rows(config), format)
}
