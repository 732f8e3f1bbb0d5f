use super::PeriodArgs;
use crate::{
    db::events::Events,
    libs::{
        config::Config,
        export::{ExportFormat, Exporter},
        messages::Message,
        period::{build_daily_rows, summarize_period, ReportOptions},
    },
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    period: PeriodArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Csv)]
    format: ExportFormat,

    /// Output file, defaults to ponto_report_<start>_<end>.<ext>
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let period = args.period.period()?;
    let filter = args.period.filter();
    let options = ReportOptions::from(&Config::read()?);
    let all_events = Events::new()?.fetch_all()?;

    let rows = build_daily_rows(&all_events, &period, filter, &options);
    if rows.is_empty() {
        msg_info!(Message::NoEventsInPeriod);
        return Ok(());
    }
    let summary = summarize_period(&all_events, &period, filter, &options);

    let exporter = Exporter::new(args.format, args.output, period);
    exporter.export(&rows, &summary)?;

    msg_success!(Message::ExportCompleted(exporter.output_path().display().to_string()));
    Ok(())
}
