#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use ponto::db::db::Db;
    use ponto::db::employees::Employees;
    use ponto::db::events::Events;
    use ponto::db::snapshot::Snapshot;
    use ponto::libs::backup::Backup;
    use ponto::libs::employee::NewEmployee;
    use ponto::libs::event::{ClockEvent, EventType, NewClockEvent};
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct BackupTestContext {
        temp_dir: TempDir,
        db_path: PathBuf,
    }

    impl TestContext for BackupTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join("ponto.db");

            let mut employees = Employees::with(Db::open(&db_path).unwrap());
            let ana = employees.insert(&NewEmployee::new("Ana", "1234", "555-0101")).unwrap();
            employees.insert(&NewEmployee::new("Bruno", "2345", "555-0102")).unwrap();

            let mut events = Events::with(Db::open(&db_path).unwrap());
            let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
            events
                .insert(&NewClockEvent::new(ana.id, &ana.name, EventType::Entry, day.and_hms_opt(8, 0, 0).unwrap()))
                .unwrap();
            events
                .insert(&NewClockEvent::new(ana.id, &ana.name, EventType::Exit, day.and_hms_opt(17, 0, 0).unwrap()))
                .unwrap();

            BackupTestContext { temp_dir, db_path }
        }
    }

    impl BackupTestContext {
        fn snapshot(&self) -> Snapshot {
            Snapshot::refresh_from(&Db::open(&self.db_path).unwrap()).unwrap()
        }
    }

    #[test_context(BackupTestContext)]
    #[test]
    fn test_backup_and_restore(ctx: &mut BackupTestContext) {
        let before = ctx.snapshot();
        let path = ctx.temp_dir.path().join("backup.json");
        Backup::from_snapshot(&before).write(&path).unwrap();

        // change everything after the backup was taken
        let mut employees = Employees::with(Db::open(&ctx.db_path).unwrap());
        let ana = employees.fetch_by_pin("1234").unwrap().unwrap();
        employees.delete(ana.id).unwrap();
        employees.insert(&NewEmployee::new("Carla", "3456", "")).unwrap();

        let backup = Backup::read(&path).unwrap();
        backup.restore(&mut Db::open(&ctx.db_path).unwrap()).unwrap();

        let after = ctx.snapshot();
        assert_eq!(after.employees, before.employees);
        assert_eq!(after.events, before.events);
    }

    #[test_context(BackupTestContext)]
    #[test]
    fn test_failed_restore_changes_nothing(ctx: &mut BackupTestContext) {
        let before = ctx.snapshot();

        let mut backup = Backup::from_snapshot(&before);
        backup.events.push(ClockEvent {
            id: 99,
            employee_id: 42,
            employee_name: "Ghost".to_string(),
            event_type: EventType::Entry,
            timestamp: NaiveDate::from_ymd_opt(2024, 3, 2).unwrap().and_hms_opt(8, 0, 0).unwrap(),
        });
        backup.employees.truncate(1);

        assert!(backup.restore(&mut Db::open(&ctx.db_path).unwrap()).is_err());

        let after = ctx.snapshot();
        assert_eq!(after.employees, before.employees);
        assert_eq!(after.events, before.events);
    }
}
