/// Every user-facing message the application can emit.
///
/// Centralizing message content keeps wording consistent across commands
/// and gives each message a typed slot for its dynamic parts instead of
/// ad-hoc format strings scattered through the code.
#[derive(Debug, Clone)]
pub enum Message {
    // === ENTRY MESSAGES ===
    EntryStarted(String, String), // text, local start
    EntryStopped(String, String), // text, elapsed
    EntryAdded {
        duration: String,
        start: String,
        end: String,
        text: String,
    },
    ActiveEntry {
        text: String,
        since: String,
        elapsed: String,
    },
    NoActiveEntry,
    AlreadyActiveEntry,
    StopBeforeStart,
    EndBeforeStart,
    EntryOverlaps(String, String), // conflicting start, overlap duration

    // === REPORT MESSAGES ===
    ReportHeader(String, String), // from, to
    ReportEmpty,
    ReportTotal(String),
    TagTasksHeader(String),
    ConflictingRangeFlags,
    RangeFlagsWithDates,
    ReportEndBeforeStart,

    // === TAG MESSAGES ===
    TagsHeader,
    NoTagsFound,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleLog,
    PromptLogPath,

    // === EXPORT MESSAGES ===
    ExportCompleted(String), // path
    ExportEmpty,
}
