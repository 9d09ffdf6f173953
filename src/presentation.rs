// src/presentation.rs
use crate::config::Config;
use crate::options::OutputFormat;
use route_count_domain::ScanSummary;
use route_count_shared_kernel::Result;
use route_count_usecase::ScanReport;
use std::fmt::Write as _;
use std::io::Write;

/// Renders the finished scan in the configured format.
pub fn render(summary: ScanSummary, config: &Config) -> Result<String> {
    match config.format {
        OutputFormat::Text => Ok(render_text(&summary, config.per_file)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&ScanReport::from(summary))?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Yaml => Ok(serde_yaml::to_string(&ScanReport::from(summary))?),
    }
}

fn render_text(summary: &ScanSummary, per_file: bool) -> String {
    let mut out = String::new();
    if per_file {
        for tally in &summary.files {
            let _ = writeln!(out, "{} --> {}", tally.path.display(), tally.routes);
        }
    }
    let _ = writeln!(out, "Total routes: {}", summary.total);
    out
}

pub fn print_results<W: Write>(out: &mut W, summary: ScanSummary, config: &Config) -> Result<()> {
    let rendered = render(summary, config)?;
    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}
