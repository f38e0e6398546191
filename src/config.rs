use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url_development: "http://localhost:3000".to_string(),
            backend_url_production: "https://app.reportflow.one".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            backend_url_development: option_env!("BACKEND_URL_DEVELOPMENT")
                .unwrap_or("http://localhost:3000").to_string(),
            backend_url_production: option_env!("BACKEND_URL_PRODUCTION")
                .unwrap_or("https://app.reportflow.one").to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
        }
    }

    /// Obtiene la URL del backend según el entorno actual
    pub fn backend_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.backend_url_production,
            _ => &self.backend_url_development,
        }
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_apunta_a_desarrollo() {
        let config = AppConfig::default();
        assert_eq!(config.backend_url(), "http://localhost:3000");
        assert!(config.is_logging_enabled());
    }

    #[test]
    fn backend_url_cambia_con_entorno() {
        let mut config = AppConfig::default();
        config.environment = "production".to_string();
        assert_eq!(config.backend_url(), "https://app.reportflow.one");
    }
}
