const DATABASE_PATH_VAR: &str = "DATABASE_PATH";

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub path: String,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: "swiss_tournament.db".to_string(),
        }
    }
}

impl DatabaseSettings {
    /// Default settings with the path taken from `DATABASE_PATH` when set
    pub fn from_env() -> Self {
        Self::with_override(std::env::var(DATABASE_PATH_VAR).ok())
    }

    fn with_override(path: Option<String>) -> Self {
        match path.filter(|p| !p.trim().is_empty()) {
            Some(path) => Self { path },
            None => Self::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self { port: 3000 }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseSettings,
    pub server: ServerSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            database: DatabaseSettings::from_env(),
            server: ServerSettings::default(),
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.server.port = port;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_path_override() {
        let settings = DatabaseSettings::with_override(Some("/tmp/league.db".to_string()));
        assert_eq!(settings.path, "/tmp/league.db");
    }

    #[test]
    fn test_blank_override_falls_back_to_default() {
        assert_eq!(DatabaseSettings::with_override(Some("  ".to_string())).path, "swiss_tournament.db");
        assert_eq!(DatabaseSettings::with_override(None).path, "swiss_tournament.db");
    }
}
