use serde::Deserialize;

pub const DEFAULT_URL: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
}

#[derive(Debug, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            url: default_url(),
            port: default_port(),
        }
    }
}

impl AppConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.app.url, self.app.port)
    }
}

fn default_url() -> String {
    DEFAULT_URL.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}
