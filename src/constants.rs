//! Static configuration for the API connection and the dashboard.

pub const API_BASE_URL: &str = "https://api.rotaportasdeaco.com:3080";

pub const ENDPOINT_GRAVACOES: &str = "/gravacoes";
pub const ENDPOINT_LISTAS: &str = "/listas";
pub const ENDPOINT_MAILING_IMPORT: &str = "/mailing/import";
pub const ENDPOINT_MAILING_LIST: &str = "/mailing/list";
pub const ENDPOINT_MAILING_COMPATIBLE: &str = "/mailing/compatible";

/// Toggle to serve generated data instead of calling the real backend.
pub const USE_MOCK_DATA: bool = false;

pub const DEFAULT_PAGE_SIZE: u32 = 15;
pub const PAGE_SIZE_OPTIONS: [u32; 5] = [10, 15, 25, 50, 100];

/// Rows sent per request when importing a mailing.
pub const UPLOAD_BATCH_SIZE: usize = 1000;

/// Ceiling used by the aggregate and export fetches to capture the whole
/// filtered set in one page. Large filtered sets beyond this are undercounted.
pub const AGGREGATE_FETCH_LIMIT: u32 = 100_000;

/// Top-N lists fetched for the performance table and chart.
pub const LIST_STATS_LIMIT: u32 = 100;

pub const CHART_COLORS: [&str; 6] = [
    "#0ea5e9", // sky
    "#22c55e", // green
    "#eab308", // yellow
    "#ef4444", // red
    "#8b5cf6", // violet
    "#f97316", // orange
];
