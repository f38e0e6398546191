// Endpoints internos (la URL base vive en AppConfig, ver config.rs)
pub const SESSION_ENDPOINT: &str = "/api/auth/session";
pub const STATS_ENDPOINT: &str = "/api/dashboard/stats";

// Rutas del frontend (navegación con documento completo)
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const SIGNIN_PATH: &str = "/account/signin";
pub const REPORTS_PATH: &str = "/reports";
pub const NEW_REPORT_PATH: &str = "/reports/new";

// Claves de localStorage
pub const CACHED_USER_KEY: &str = "reportflow_user";
