use super::PeriodArgs;
use crate::{
    db::events::Events,
    libs::{
        config::Config,
        messages::Message,
        period::{analyze_period, build_report_rows, summarize_shifts, ReportOptions},
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ReportArgs {
    #[command(flatten)]
    period: PeriodArgs,
}

pub fn cmd(args: ReportArgs) -> Result<()> {
    let period = args.period.period()?;
    let filter = args.period.filter();
    let options = ReportOptions::from(&Config::read()?);
    let all_events = Events::new()?.fetch_all()?;

    let shifts = analyze_period(&all_events, &period, filter, &options);
    if shifts.is_empty() {
        msg_info!(Message::NoEventsInPeriod);
        return Ok(());
    }

    msg_print!(Message::ReportHeader(period.start.to_string(), period.end.to_string()), true);

    View::events(&build_report_rows(&all_events, &period, filter))?;

    msg_print!(Message::ShiftsHeader, true);
    View::shifts(&shifts)?;

    msg_print!(Message::SummaryHeader, true);
    View::summary(&summarize_shifts(&shifts))?;

    Ok(())
}
