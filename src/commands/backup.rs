use crate::{
    db::{db::Db, snapshot::Snapshot},
    libs::{backup::Backup, messages::Message},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct BackupArgs {
    /// Output file, defaults to ponto_backup_<timestamp>.json
    path: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct RestoreArgs {
    /// Backup file to restore
    path: PathBuf,

    /// Skip confirmation
    #[arg(short, long)]
    yes: bool,
}

pub fn backup_cmd(args: BackupArgs) -> Result<()> {
    let path = args.path.unwrap_or_else(Backup::default_path);
    Backup::from_snapshot(&Snapshot::refresh()?).write(&path)?;

    msg_success!(Message::BackupCreated(path.display().to_string()));
    Ok(())
}

pub fn restore_cmd(args: RestoreArgs) -> Result<()> {
    let backup = Backup::read(&args.path)?;

    let confirmed = args.yes
        || Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmRestore(args.path.display().to_string()).to_string())
            .default(false)
            .interact()?;

    if !confirmed {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    backup.restore(&mut Db::new()?)?;
    msg_success!(Message::RestoreCompleted {
        employees: backup.employees.len(),
        events: backup.events.len(),
    });
    Ok(())
}
