#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use ponto::libs::config::PayConfig;
    use ponto::libs::event::{ClockEvent, EventType};
    use ponto::libs::period::{
        analyze_period, build_daily_rows, build_report_rows, summarize_period, DailyRowKind, EmployeeFilter, Period, ReportOptions,
    };
    use ponto::libs::shift::{group_into_shifts, EntryPolicy};
    use ponto::libs::work::{calculate_work_details, WorkStatus};
    use test_context::{test_context, TestContext};

    const HOUR: i64 = 3_600_000;

    struct PeriodTestContext {
        events: Vec<ClockEvent>,
        options: ReportOptions,
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn at(d: u32, h: u32, m: u32) -> NaiveDateTime {
        day(d).and_hms_opt(h, m, 0).unwrap()
    }

    impl TestContext for PeriodTestContext {
        fn setup() -> Self {
            let punches = [
                // Bruno: one complete shift on the 4th, one still open on the 5th
                (2, "Bruno", EventType::Entry, at(4, 9, 0)),
                (2, "Bruno", EventType::Exit, at(4, 13, 0)),
                (2, "Bruno", EventType::Entry, at(5, 9, 0)),
                // Ana: 10h on the 4th, 8h on the 5th
                (1, "Ana", EventType::Entry, at(4, 8, 0)),
                (1, "Ana", EventType::BreakStart, at(4, 12, 0)),
                (1, "Ana", EventType::BreakEnd, at(4, 13, 0)),
                (1, "Ana", EventType::Exit, at(4, 19, 0)),
                (1, "Ana", EventType::Entry, at(5, 8, 0)),
                (1, "Ana", EventType::BreakStart, at(5, 12, 0)),
                (1, "Ana", EventType::BreakEnd, at(5, 13, 0)),
                (1, "Ana", EventType::Exit, at(5, 17, 0)),
                // Ana, outside the period
                (1, "Ana", EventType::Entry, at(9, 8, 0)),
                (1, "Ana", EventType::Exit, at(9, 12, 0)),
            ];
            let events = punches
                .into_iter()
                .enumerate()
                .map(|(i, (employee_id, name, event_type, timestamp))| ClockEvent {
                    id: i as i64 + 1,
                    employee_id,
                    employee_name: name.to_string(),
                    event_type,
                    timestamp,
                })
                .collect();

            PeriodTestContext {
                events,
                options: ReportOptions::default(),
            }
        }
    }

    fn period() -> Period {
        Period::new(day(4), day(5))
    }

    #[test]
    fn test_worked_day_examples() {
        let pay = PayConfig::default();
        let shift = |punches: &[(EventType, u32, u32)]| -> Vec<ClockEvent> {
            punches
                .iter()
                .enumerate()
                .map(|(i, (t, h, m))| ClockEvent {
                    id: i as i64,
                    employee_id: 1,
                    employee_name: "Ana".to_string(),
                    event_type: *t,
                    timestamp: at(1, *h, *m),
                })
                .collect()
        };

        let full = calculate_work_details(
            &shift(&[(EventType::Entry, 8, 0), (EventType::BreakStart, 12, 0), (EventType::BreakEnd, 13, 0), (EventType::Exit, 17, 0)]),
            &pay,
        );
        assert_eq!((full.total_ms, full.normal_ms, full.extra_ms), (8 * HOUR, 8 * HOUR, 0));
        assert_eq!(full.status, WorkStatus::Complete);

        let long = calculate_work_details(
            &shift(&[(EventType::Entry, 8, 0), (EventType::BreakStart, 12, 0), (EventType::BreakEnd, 13, 0), (EventType::Exit, 19, 0)]),
            &pay,
        );
        assert_eq!((long.total_ms, long.normal_ms, long.extra_ms), (10 * HOUR, 8 * HOUR, 2 * HOUR));
        assert!((long.payment - 97.80).abs() < 1e-9);

        let half = calculate_work_details(&shift(&[(EventType::Entry, 8, 0), (EventType::Exit, 12, 0)]), &pay);
        assert_eq!((half.total_ms, half.normal_ms, half.extra_ms), (4 * HOUR, 4 * HOUR, 0));
        assert_eq!(half.status, WorkStatus::Complete);
    }

    #[test_context(PeriodTestContext)]
    #[test]
    fn test_trailing_open_shift(ctx: &mut PeriodTestContext) {
        let bruno: Vec<ClockEvent> = ctx.events.iter().filter(|e| e.employee_id == 2).cloned().collect();
        let shifts = group_into_shifts(&bruno);

        assert_eq!(shifts.len(), 2);
        assert_eq!(calculate_work_details(&shifts[0], &ctx.options.pay).status, WorkStatus::Complete);
        assert_eq!(calculate_work_details(&shifts[1], &ctx.options.pay).status, WorkStatus::Incomplete);
    }

    #[test_context(PeriodTestContext)]
    #[test]
    fn test_summary_counts_only_complete_shifts(ctx: &mut PeriodTestContext) {
        let summary = summarize_period(&ctx.events, &period(), EmployeeFilter::All, &ctx.options);

        assert_eq!(summary.employees, 2);
        assert_eq!(summary.shifts, 4);
        assert_eq!(summary.complete_shifts, 3);
        // 10h + 8h + 4h
        assert_eq!(summary.total_ms(), 22 * HOUR);
        assert_eq!(summary.extra_ms, 2 * HOUR);
        assert!((summary.payment - (20.0 * 8.15 + 2.0 * 16.30)).abs() < 1e-9);

        let shifts = analyze_period(&ctx.events, &period(), EmployeeFilter::All, &ctx.options);
        let complete_total: i64 = shifts
            .iter()
            .filter(|s| s.details.status == WorkStatus::Complete)
            .map(|s| s.details.total_ms)
            .sum();
        assert_eq!(summary.normal_ms + summary.extra_ms, complete_total);
    }

    #[test_context(PeriodTestContext)]
    #[test]
    fn test_summary_is_idempotent(ctx: &mut PeriodTestContext) {
        let first = summarize_period(&ctx.events, &period(), EmployeeFilter::All, &ctx.options);
        let second = summarize_period(&ctx.events, &period(), EmployeeFilter::All, &ctx.options);
        assert_eq!(first, second);
    }

    #[test_context(PeriodTestContext)]
    #[test]
    fn test_employee_filter(ctx: &mut PeriodTestContext) {
        let summary = summarize_period(&ctx.events, &period(), EmployeeFilter::Employee(2), &ctx.options);
        assert_eq!(summary.employees, 1);
        assert_eq!(summary.total_ms(), 4 * HOUR);

        let rows = build_report_rows(&ctx.events, &period(), EmployeeFilter::Employee(1));
        assert_eq!(rows.len(), 8);
        assert!(rows.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
    }

    #[test_context(PeriodTestContext)]
    #[test]
    fn test_empty_range(ctx: &mut PeriodTestContext) {
        let empty = Period::new(day(20), day(25));

        let summary = summarize_period(&ctx.events, &empty, EmployeeFilter::All, &ctx.options);
        assert_eq!(summary.total_ms(), 0);
        assert_eq!(summary.payment, 0.0);
        assert!(build_report_rows(&ctx.events, &empty, EmployeeFilter::All).is_empty());
        assert!(build_daily_rows(&ctx.events, &empty, EmployeeFilter::All, &ctx.options).is_empty());
    }

    #[test_context(PeriodTestContext)]
    #[test]
    fn test_daily_rows(ctx: &mut PeriodTestContext) {
        let rows = build_daily_rows(&ctx.events, &period(), EmployeeFilter::All, &ctx.options);

        let layout: Vec<(DailyRowKind, &str, Option<NaiveDate>)> = rows.iter().map(|r| (r.kind, r.employee_name.as_str(), r.date)).collect();
        assert_eq!(
            layout,
            vec![
                (DailyRowKind::Day, "Ana", Some(day(4))),
                (DailyRowKind::Day, "Ana", Some(day(5))),
                (DailyRowKind::Subtotal, "Ana", None),
                (DailyRowKind::Day, "Bruno", Some(day(4))),
                (DailyRowKind::Day, "Bruno", Some(day(5))),
                (DailyRowKind::Subtotal, "Bruno", None),
                (DailyRowKind::GrandTotal, "", None),
            ]
        );

        let ana_first = &rows[0];
        assert_eq!(ana_first.entry, Some(at(4, 8, 0)));
        assert_eq!(ana_first.break_start, Some(at(4, 12, 0)));
        assert_eq!(ana_first.break_end, Some(at(4, 13, 0)));
        assert_eq!(ana_first.exit, Some(at(4, 19, 0)));
        assert_eq!(ana_first.total_ms, 10 * HOUR);
        assert_eq!(ana_first.status, Some(WorkStatus::Complete));

        assert_eq!(rows[2].total_ms, 18 * HOUR);

        let bruno_open = &rows[4];
        assert_eq!(bruno_open.status, Some(WorkStatus::Incomplete));
        assert_eq!(bruno_open.total_ms, 0);
        assert_eq!(bruno_open.exit, None);

        let grand_total = rows.last().unwrap();
        assert_eq!(grand_total.total_ms, 22 * HOUR);
        assert_eq!(grand_total.status, None);
    }

    #[test_context(PeriodTestContext)]
    #[test]
    fn test_split_policy_on_repeated_entry(ctx: &mut PeriodTestContext) {
        // Bruno forgets to punch out on the 5th and punches in again later
        ctx.events.push(ClockEvent {
            id: 100,
            employee_id: 2,
            employee_name: "Bruno".to_string(),
            event_type: EventType::Entry,
            timestamp: at(5, 14, 0),
        });
        ctx.events.push(ClockEvent {
            id: 101,
            employee_id: 2,
            employee_name: "Bruno".to_string(),
            event_type: EventType::Exit,
            timestamp: at(5, 18, 0),
        });

        let merged = summarize_period(&ctx.events, &period(), EmployeeFilter::Employee(2), &ctx.options);
        assert_eq!(merged.shifts, 2);
        // 4h on the 4th, 09:00 to 18:00 on the 5th
        assert_eq!(merged.total_ms(), 13 * HOUR);

        let split = ReportOptions {
            entry_policy: EntryPolicy::Split,
            ..ctx.options.clone()
        };
        let summary = summarize_period(&ctx.events, &period(), EmployeeFilter::Employee(2), &split);
        assert_eq!(summary.shifts, 3);
        assert_eq!(summary.complete_shifts, 2);
        assert_eq!(summary.total_ms(), 8 * HOUR);
    }
}
