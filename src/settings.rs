use std::path::PathBuf;

#[derive(Debug, ::thiserror::Error)]
pub enum SettingsError {
    #[error("DATABASE_URL is not set")]
    DatabaseUrlIsNotSet,
    #[error("`{0}` has incorrect value: `{1}`")]
    IncorrectValue(&'static str, String),
}

/// runtime configuration collected from the environment (and `.env`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub database_url: String,
    pub bind_addr: String,
    pub port: u16,
    pub workers: usize,
    /// json file with packages and tours to load at start up
    pub tours_import_file: Option<PathBuf>,
}

impl Settings {
    pub const DEFAULT_BIND_ADDR: &'static str = "0.0.0.0";
    pub const DEFAULT_PORT: u16 = 8080;
    pub const DEFAULT_WORKERS: usize = 2;

    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_vars(std::env::vars())
    }

    pub fn from_vars<I>(vars: I) -> Result<Self, SettingsError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let vars = vars.into_iter().collect::<Vec<_>>();
        let var = |key: &str| {
            vars.iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.trim())
                .filter(|v| !v.is_empty())
        };

        let database_url = var("DATABASE_URL")
            .map(str::to_owned)
            .ok_or(SettingsError::DatabaseUrlIsNotSet)?;

        let bind_addr = var("BIND_ADDR")
            .unwrap_or(Self::DEFAULT_BIND_ADDR)
            .to_owned();

        let port = match var("PORT") {
            Some(v) => v
                .parse()
                .map_err(|_| SettingsError::IncorrectValue("PORT", v.to_owned()))?,
            None => Self::DEFAULT_PORT,
        };

        let workers = match var("WORKERS") {
            Some(v) => match v.parse() {
                Ok(n) if n > 0 => n,
                _ => Err(SettingsError::IncorrectValue("WORKERS", v.to_owned()))?,
            },
            None => Self::DEFAULT_WORKERS,
        };

        let tours_import_file = var("TOURS_IMPORT_FILE").map(PathBuf::from);

        Ok(Self {
            database_url,
            bind_addr,
            port,
            workers,
            tours_import_file,
        })
    }
}
