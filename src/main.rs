use anyhow::Context;
use clap::Parser;
use hr_insights::engine::insights::InsightBattery;
use hr_insights::engine::pipeline::{HR_SOURCE, OFFICE_A_SOURCE, OFFICE_B_SOURCE, Pipeline};
use hr_insights::engine::source::JsonDirLoader;
use hr_insights::logging;
use hr_insights::shared::config::{Settings, load_settings, load_settings_from};
use tracing::info;

#[derive(Parser)]
#[command(name = "hr_insights")]
#[command(about = "Unify office and HR employee records and report workforce metrics", long_about = None)]
struct Args {
    /// Settings file; defaults to $HR_INSIGHTS_CONFIG or ./config.toml
    #[arg(short, long)]
    config: Option<String>,

    /// Directory holding the source files, overriding [sources].data_dir
    #[arg(short, long)]
    data_dir: Option<String>,

    /// Pretty-print the JSON report
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let settings: Settings = match &args.config {
        Some(path) => {
            load_settings_from(path).with_context(|| format!("loading settings from {}", path))?
        }
        None => load_settings().context("loading settings from $HR_INSIGHTS_CONFIG or ./config")?,
    };
    logging::init(&settings.logging)?;

    let data_dir = args
        .data_dir
        .clone()
        .unwrap_or_else(|| settings.sources.data_dir.clone());
    info!(data_dir = %data_dir, "Starting hr_insights");

    let loader = JsonDirLoader::new(&data_dir)
        .with_file(OFFICE_A_SOURCE, &settings.sources.office_a)
        .with_file(OFFICE_B_SOURCE, &settings.sources.office_b)
        .with_file(HR_SOURCE, &settings.sources.hr);

    let output = Pipeline::new(&settings).run(&loader)?;
    let report = InsightBattery::new(settings.report.to_battery_config())
        .run(&output.unified.table, &output.unified.diagnostics)?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", json);
    Ok(())
}
