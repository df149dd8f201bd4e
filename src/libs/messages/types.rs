#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigPath(String),
    ConfigModuleClockify,
    ConfigModuleReport,
    ConfigModuleAccount,

    // === DATA LOADING MESSAGES ===
    LoadingEntries(String), // period title
    EntriesLoaded(usize),
    NoEntriesInRange(String, String), // start, end
    UsingAccount(String),

    // === SELECTION MESSAGES ===
    ClientsHeader,
    ClientsForRange(String), // period title
    ClientSelected(String),
    ProjectsSelected(String),
    AllProjectsSelected,
    NoRowsForSelection,

    // === REPORT MESSAGES ===
    ReportHeader(String, String), // client, period title
    WeeklyHoursHeader,
    ReportSaved(String),
    ManualRowIncomplete,
    LogoMissing(String),

    // === PROMPTS ===
    PromptSelectModules,
    PromptStartDate,
    PromptEndDate,
    PromptClient,
    PromptClientId(String), // ambiguous client name
    PromptProjects,
    PromptAccountName,
    PromptApiKey,
    PromptWorkspaceId,
    PromptBaseUrl,
    PromptPageSize,
    PromptTimeout,
    PromptCompanyName,
    PromptLogoPath,
    PromptDecimalSeparator,
}
