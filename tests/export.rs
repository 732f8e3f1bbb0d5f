#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use ponto::libs::event::{ClockEvent, EventType};
    use ponto::libs::export::{csv_string, default_file_name, ExportFormat, Exporter, BOM};
    use ponto::libs::period::{build_daily_rows, summarize_period, EmployeeFilter, Period, ReportOptions};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
        events: Vec<ClockEvent>,
    }

    fn at(d: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap().and_hms_opt(h, m, 0).unwrap()
    }

    fn punch(id: i64, employee_id: i64, name: &str, event_type: EventType, timestamp: NaiveDateTime) -> ClockEvent {
        ClockEvent {
            id,
            employee_id,
            employee_name: name.to_string(),
            event_type,
            timestamp,
        }
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            let events = vec![
                punch(1, 1, "Souza, Ana \"Aninha\"", EventType::Entry, at(4, 8, 0)),
                punch(2, 1, "Souza, Ana \"Aninha\"", EventType::BreakStart, at(4, 12, 0)),
                punch(3, 1, "Souza, Ana \"Aninha\"", EventType::BreakEnd, at(4, 13, 0)),
                punch(4, 1, "Souza, Ana \"Aninha\"", EventType::Exit, at(4, 19, 0)),
                punch(5, 2, "Bruno", EventType::Entry, at(4, 22, 0)),
                punch(6, 2, "Bruno", EventType::Exit, at(5, 2, 30)),
                punch(7, 2, "Bruno", EventType::Entry, at(6, 9, 0)),
            ];
            ExportTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
                events,
            }
        }
    }

    fn period() -> Period {
        Period::new(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(), NaiveDate::from_ymd_opt(2024, 3, 31).unwrap())
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_csv_layout(ctx: &mut ExportTestContext) {
        let rows = build_daily_rows(&ctx.events, &period(), EmployeeFilter::All, &ReportOptions::default());
        let csv = csv_string(&rows).unwrap();

        assert!(csv.starts_with(BOM));
        let lines: Vec<&str> = csv.trim_start_matches(BOM).lines().collect();
        assert_eq!(
            lines[0],
            "Employee,Date,Entry,Break start,Break end,Exit,Normal hours,Extra hours,Total hours,Payment,Status"
        );

        // Bruno sorts first; his night shift is reported on the day it started
        assert_eq!(lines[1], "Bruno,2024-03-04,22:00,,,2024-03-05 02:30,04:30,00:00,04:30,36.68,Complete");
        // an open shift shows its status instead of hours
        assert_eq!(lines[2], "Bruno,2024-03-06,09:00,,,,,,,,Incomplete");
        assert_eq!(lines[3], "Bruno,Subtotal,,,,,04:30,00:00,04:30,36.68,");

        // names with commas and quotes are quoted, inner quotes doubled
        assert_eq!(
            lines[4],
            "\"Souza, Ana \"\"Aninha\"\"\",2024-03-04,08:00,12:00,13:00,19:00,08:00,02:00,10:00,97.80,Complete"
        );
        assert!(lines[5].starts_with("\"Souza, Ana \"\"Aninha\"\"\",Subtotal,"));
        assert_eq!(lines[6], "TOTAL,,,,,,12:30,02:00,14:30,134.48,");
        assert_eq!(lines.len(), 7);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_files(ctx: &mut ExportTestContext) {
        let options = ReportOptions::default();
        let rows = build_daily_rows(&ctx.events, &period(), EmployeeFilter::All, &options);
        let summary = summarize_period(&ctx.events, &period(), EmployeeFilter::All, &options);

        let csv_path = ctx.temp_dir.path().join("march.csv");
        let exporter = Exporter::new(ExportFormat::Csv, Some(csv_path.clone()), period());
        exporter.export(&rows, &summary).unwrap();
        assert_eq!(exporter.output_path(), csv_path.as_path());
        let content = std::fs::read_to_string(&csv_path).unwrap();
        assert!(content.starts_with(BOM));
        assert!(content.contains("TOTAL"));

        let json_path = ctx.temp_dir.path().join("march.json");
        Exporter::new(ExportFormat::Json, Some(json_path.clone()), period())
            .export(&rows, &summary)
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(json["rows"].as_array().unwrap().len(), rows.len());
        assert_eq!(json["summary"]["complete_shifts"], 2);
        assert_eq!(json["period"]["start"], "2024-03-01");
    }

    #[test]
    fn test_default_file_name() {
        assert_eq!(default_file_name(&period(), ExportFormat::Csv), "ponto_report_2024-03-01_2024-03-31.csv");
        assert_eq!(default_file_name(&period(), ExportFormat::Json), "ponto_report_2024-03-01_2024-03-31.json");
    }
}
