#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModulePay,
    ConfigModuleKiosk,
    ConfigModuleShift,

    // === EMPLOYEE MESSAGES ===
    EmployeeCreated(String),       // name
    EmployeeUpdated(String),       // name
    EmployeeDeleted(String, usize), // name, removed punches
    EmployeeNotFound(i64),
    EmployeesHeader,
    NoEmployees,
    ConfirmDeleteEmployee(String), // name
    ImportCompleted(usize, usize), // imported, skipped
    ImportRowSkipped(u64, String), // line, reason

    // === PUNCH MESSAGES ===
    PinNotRecognized,
    AdminPinCannotPunch,
    PunchRecorded {
        name: String,
        event_type: String,
        time: String,
    },
    PunchOutOfSequence {
        event_type: String,
        previous: Option<String>,
    },

    // === EVENT MESSAGES ===
    EventUpdated(i64),
    EventDeleted(i64),
    EventNotFound(i64),
    ConfirmDeleteEvent(i64),
    NoEventsInPeriod,
    InvalidTimestamp(String),
    InvalidDate(String),
    InvalidPeriod(String, String), // start, end

    // === REPORT MESSAGES ===
    ReportHeader(String, String), // start, end
    ShiftsHeader,
    SummaryHeader,
    ExportCompleted(String), // path

    // === BACKUP MESSAGES ===
    BackupCreated(String), // path
    RestoreCompleted { employees: usize, events: usize },
    ConfirmRestore(String), // path

    // === WATCH MESSAGES ===
    WatchStarted(u64), // poll interval, seconds
    WatchRefreshed(String), // snapshot time
    NobodyOnShift,
    OnShiftHeader,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),        // count
    RunningMigration(u32, String), // version, name
    MigrationFailed(u32, String),  // version, error
    AllMigrationsCompleted,
    DatabaseVersion(u32),
    DatabaseUpToDate,
    DatabaseNeedsUpdate,
    MigrationHistory,

    // === PROMPTS ===
    PromptSelectModules,
    PromptNormalRate,
    PromptExtraRate,
    PromptNormalHours,
    PromptAdminPin,
    PromptPollInterval,
    PromptEntryPolicy,
    PromptPin,
    PromptEventType,
    PromptEmployeeName,
    PromptEmployeePin,
    PromptEmployeePhone,
    PromptEmployeeTaxId,
    PromptEmployeeRole,
    PromptEmployeePaymentKey,

    // === GENERAL MESSAGES ===
    OperationCancelled,
}
