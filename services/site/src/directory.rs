use chrono::Weekday;
use clap::Args;
use direct_title_loans::config::AppConfig;
use direct_title_loans::content::{ContentRegistry, LocationRecord};
use direct_title_loans::error::AppError;
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct ExportArgs {
    /// Write to this file instead of stdout
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

/// One row of the citation directory.
#[derive(Debug, Serialize)]
struct DirectoryRow<'a> {
    city: &'a str,
    state: &'a str,
    code: &'a str,
    address: &'a str,
    phone: &'a str,
    monday_hours: &'a str,
    saturday_hours: &'a str,
}

impl<'a> From<&'a LocationRecord> for DirectoryRow<'a> {
    fn from(location: &'a LocationRecord) -> Self {
        Self {
            city: &location.city,
            state: &location.state,
            code: &location.state_code,
            address: &location.address,
            phone: &location.phone,
            monday_hours: location.hours.for_day(Weekday::Mon),
            saturday_hours: location.hours.for_day(Weekday::Sat),
        }
    }
}

pub(crate) fn write_directory<W: Write>(registry: &ContentRegistry, writer: W) -> io::Result<usize> {
    let mut csv = csv::Writer::from_writer(writer);
    for location in registry.locations() {
        csv.serialize(DirectoryRow::from(location))?;
    }
    csv.flush()?;
    Ok(registry.locations().len())
}

pub(crate) fn run_export(args: ExportArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let registry = ContentRegistry::load(config.site.content_dir.as_deref())?;

    match args.output {
        Some(path) => {
            let rows = write_directory(&registry, File::create(&path)?)?;
            info!(rows, path = %path.display(), "location directory exported");
        }
        None => {
            write_directory(&registry, io::stdout().lock())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_lists_every_branch() {
        let registry = ContentRegistry::embedded().expect("fixtures load");
        let mut buffer = Vec::new();
        let rows = write_directory(&registry, &mut buffer).expect("csv writes");
        assert_eq!(rows, 4);

        let text = String::from_utf8(buffer).expect("utf8");
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("city,state,code,address,phone,monday_hours,saturday_hours")
        );
        assert_eq!(lines.count(), 4);
        assert!(text.contains("Tampa,Florida,FL,"));
        assert!(text.contains("\"4521 Hollywood Blvd, Suite 100, Los Angeles, CA 90027\""));
    }
}
