use crate::{
    db::snapshot::Snapshot,
    libs::{
        config::Config,
        formatter::format_timestamp,
        messages::Message,
        period::{summarize_period, EmployeeFilter, Period, ReportOptions},
        view::View,
    },
    msg_info, msg_print, msg_warning,
};
use anyhow::Result;
use tokio::time::{self, Duration};

/// Re-reads the database every `poll_interval` seconds and shows who is on
/// shift together with today's totals. Stops on Ctrl+C.
pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    let options = ReportOptions::from(&config);
    let poll_interval = config.kiosk().poll_interval.max(1);

    msg_info!(Message::WatchStarted(poll_interval), true);
    let mut interval = time::interval(Duration::from_secs(poll_interval));

    loop {
        tokio::select! {
            _ = interval.tick() => {
                match Snapshot::refresh() {
                    Ok(snapshot) => render(&snapshot, &options)?,
                    Err(e) => msg_warning!(e),
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    Ok(())
}

fn render(snapshot: &Snapshot, options: &ReportOptions) -> Result<()> {
    msg_print!(Message::WatchRefreshed(format_timestamp(&snapshot.taken_at)), true);

    let presence = snapshot.presence();
    if presence.is_empty() {
        msg_info!(Message::NobodyOnShift);
    } else {
        msg_print!(Message::OnShiftHeader);
        View::presence(&presence)?;
    }

    let today = Period::day(snapshot.taken_at.date());
    msg_print!(Message::SummaryHeader);
    View::summary(&summarize_period(&snapshot.events, &today, EmployeeFilter::All, options))?;
    Ok(())
}
