use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Web server
    pub web_host: String,
    pub web_port: u16,

    // Admin
    pub admin_username: String,
    pub admin_password: String,
    pub session_secret: String,

    // Storage
    pub data_dir: String,

    // Templates
    pub templates_dir: String,
    /// Origin the template-markup fetch reads from. Defaults to this
    /// server's own template mount.
    pub template_base_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    /// Panics with a clear message if required vars are missing.
    pub fn from_env() -> Self {
        let web_port: u16 = env::var("WEB_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .expect("WEB_PORT must be a number");

        Self {
            web_host: env::var("WEB_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            web_port,
            admin_username: env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string()),
            admin_password: required_env("ADMIN_PASSWORD"),
            session_secret: env::var("SESSION_SECRET").unwrap_or_default(),
            data_dir: env::var("DATA_DIR").unwrap_or_else(|_| "./data".to_string()),
            templates_dir: env::var("TEMPLATES_DIR").unwrap_or_else(|_| "./templates".to_string()),
            template_base_url: env::var("TEMPLATE_BASE_URL")
                .unwrap_or_else(|_| format!("http://127.0.0.1:{web_port}")),
        }
    }
}

fn required_env(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| panic!("{key} environment variable is required"))
}
