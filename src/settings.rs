pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

pub const USAGE: &str = "Uso: brasileirao -ano=2023 [-rodada=37]";
pub const HINT: &str = "Se a rodada não for informada, mostra o campeão do ano";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_url: String,
}

impl Settings {
    pub fn with_base_url(base_url: impl Into<String>) -> Settings {
        let base_url: String = base_url.into();

        Settings {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings::with_base_url(DEFAULT_BASE_URL)
    }
}

// Settings functions
pub fn load_settings() -> Settings {
    Settings::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_api() {
        assert_eq!(load_settings().base_url, "http://localhost:8000");
    }

    #[test]
    fn trailing_slash_is_dropped() {
        let settings = Settings::with_base_url("http://127.0.0.1:9000/");
        assert_eq!(settings.base_url, "http://127.0.0.1:9000");
    }
}
