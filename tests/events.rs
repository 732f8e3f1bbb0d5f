#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use ponto::db::db::Db;
    use ponto::db::employees::Employees;
    use ponto::db::error::StoreError;
    use ponto::db::events::Events;
    use ponto::db::snapshot::Snapshot;
    use ponto::libs::employee::{Employee, NewEmployee};
    use ponto::libs::event::{EventType, NewClockEvent};
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct EventTestContext {
        _temp_dir: TempDir,
        db_path: PathBuf,
        ana: Employee,
    }

    impl EventTestContext {
        fn events(&self) -> Events {
            Events::with(Db::open(&self.db_path).unwrap())
        }
    }

    impl TestContext for EventTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join("ponto.db");
            let ana = Employees::with(Db::open(&db_path).unwrap())
                .insert(&NewEmployee::new("Ana", "1234", "555-0101"))
                .unwrap();
            EventTestContext {
                _temp_dir: temp_dir,
                db_path,
                ana,
            }
        }
    }

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().and_hms_opt(h, m, 0).unwrap()
    }

    #[test_context(EventTestContext)]
    #[test]
    fn test_insert_and_fetch(ctx: &mut EventTestContext) {
        let mut events = ctx.events();

        let exit = events.insert(&NewClockEvent::new(ctx.ana.id, "Ana", EventType::Exit, at(17, 0))).unwrap();
        let entry = events.insert(&NewClockEvent::new(ctx.ana.id, "Ana", EventType::Entry, at(8, 0))).unwrap();

        assert_eq!(entry.timestamp, at(8, 0));
        assert_eq!(entry.event_type, EventType::Entry);

        let all = events.fetch_all().unwrap();
        assert_eq!(all.iter().map(|e| e.id).collect::<Vec<_>>(), vec![entry.id, exit.id]);

        let last = events.last_for_employee(ctx.ana.id).unwrap().unwrap();
        assert_eq!(last.id, exit.id);
    }

    #[test_context(EventTestContext)]
    #[test]
    fn test_duplicate_punch_is_rejected(ctx: &mut EventTestContext) {
        let mut events = ctx.events();
        let punch = NewClockEvent::new(ctx.ana.id, "Ana", EventType::Entry, at(8, 0));
        events.insert(&punch).unwrap();

        let err = events.insert(&punch).unwrap_err();
        match err.downcast_ref::<StoreError>() {
            Some(StoreError::DuplicateEvent { employee_id, timestamp, .. }) => {
                assert_eq!(*employee_id, ctx.ana.id);
                assert_eq!(*timestamp, at(8, 0));
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(events.fetch_all().unwrap().len(), 1);

        // same time, different type is allowed
        events.insert(&NewClockEvent::new(ctx.ana.id, "Ana", EventType::Exit, at(8, 0))).unwrap();
    }

    #[test_context(EventTestContext)]
    #[test]
    fn test_unknown_employee_is_rejected(ctx: &mut EventTestContext) {
        let err = ctx
            .events()
            .insert(&NewClockEvent::new(999, "Ghost", EventType::Entry, at(8, 0)))
            .unwrap_err();
        assert!(matches!(err.downcast_ref::<StoreError>(), Some(StoreError::EmployeeNotFound(999))));
    }

    #[test_context(EventTestContext)]
    #[test]
    fn test_edit_and_delete(ctx: &mut EventTestContext) {
        let mut events = ctx.events();
        let entry = events.insert(&NewClockEvent::new(ctx.ana.id, "Ana", EventType::Entry, at(8, 0))).unwrap();
        let exit = events.insert(&NewClockEvent::new(ctx.ana.id, "Ana", EventType::Exit, at(17, 0))).unwrap();

        let edited = events.update(entry.id, EventType::Entry, at(7, 45)).unwrap();
        assert_eq!(edited.timestamp, at(7, 45));

        // saving a punch unchanged is not a duplicate of itself
        events.update(entry.id, EventType::Entry, at(7, 45)).unwrap();

        let err = events.update(exit.id, EventType::Entry, at(7, 45)).unwrap_err();
        assert!(matches!(err.downcast_ref::<StoreError>(), Some(StoreError::DuplicateEvent { .. })));

        let err = events.update(999, EventType::Exit, at(18, 0)).unwrap_err();
        assert!(matches!(err.downcast_ref::<StoreError>(), Some(StoreError::EventNotFound(999))));

        events.delete(exit.id).unwrap();
        assert!(events.fetch_by_id(exit.id).unwrap().is_none());
        let err = events.delete(exit.id).unwrap_err();
        assert!(matches!(err.downcast_ref::<StoreError>(), Some(StoreError::EventNotFound(_))));
    }

    #[test_context(EventTestContext)]
    #[test]
    fn test_snapshot_presence(ctx: &mut EventTestContext) {
        let bruno = Employees::with(Db::open(&ctx.db_path).unwrap())
            .insert(&NewEmployee::new("Bruno", "2345", ""))
            .unwrap();
        let carla = Employees::with(Db::open(&ctx.db_path).unwrap())
            .insert(&NewEmployee::new("Carla", "3456", ""))
            .unwrap();

        let mut events = ctx.events();
        events.insert(&NewClockEvent::new(ctx.ana.id, "Ana", EventType::Entry, at(8, 0))).unwrap();
        events.insert(&NewClockEvent::new(ctx.ana.id, "Ana", EventType::BreakStart, at(12, 0))).unwrap();
        events.insert(&NewClockEvent::new(bruno.id, "Bruno", EventType::Entry, at(9, 0))).unwrap();
        events.insert(&NewClockEvent::new(carla.id, "Carla", EventType::Entry, at(6, 0))).unwrap();
        events.insert(&NewClockEvent::new(carla.id, "Carla", EventType::Exit, at(10, 0))).unwrap();

        let snapshot = Snapshot::refresh_from(&Db::open(&ctx.db_path).unwrap()).unwrap();
        assert_eq!(snapshot.employees.len(), 3);
        assert_eq!(snapshot.events.len(), 5);
        // same rows and order as the stores return
        assert_eq!(snapshot.events, events.fetch_all().unwrap());
        assert_eq!(
            snapshot.employees,
            Employees::with(Db::open(&ctx.db_path).unwrap()).fetch_all().unwrap()
        );

        let presence = snapshot.presence();
        let names: Vec<&str> = presence.iter().map(|p| p.employee_name.as_str()).collect();
        assert_eq!(names, vec!["Ana", "Bruno"]);
        assert!(presence[0].on_break());
        assert!(!presence[1].on_break());
    }
}
