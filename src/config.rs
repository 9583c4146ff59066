use crate::models::PlayerId;
use thiserror::Error;
use url::Url;

pub static DEFAULT_API_ROOT: &str = "https://fsa-puppy-bowl.herokuapp.com/api/";
pub static DEFAULT_COHORT: &str = "2309-FTB-ET-WEB-FT";

/// How long to wait after a confirmed removal before refreshing, so the
/// console confirmation is visible first.
pub const REFRESH_DELAY_MS: i32 = 1000;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("cohort name must not be empty")]
    EmptyCohort,

    #[error("cohort name '{0}' must be a single path segment")]
    InvalidCohort(String),

    #[error("invalid API root: {0}")]
    Url(#[from] url::ParseError),
}

/// Where the roster lives: an API root plus the cohort segment that selects
/// one isolated dataset under it.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    cohort: String,
    base: Url,
}

impl ApiConfig {
    pub fn new(api_root: &str, cohort: &str) -> Result<Self, ConfigError> {
        let cohort = cohort.trim();
        if cohort.is_empty() {
            return Err(ConfigError::EmptyCohort);
        }
        // dot segments, plain or percent-encoded, would make `join` climb
        // out of the API root
        let unescaped = cohort.to_ascii_lowercase().replace("%2e", ".");
        if unescaped == "."
            || unescaped == ".."
            || cohort.contains('/')
            || cohort.contains('?')
            || cohort.contains('#')
        {
            return Err(ConfigError::InvalidCohort(cohort.to_owned()));
        }

        // `Url::join` drops the last segment unless it ends with a slash.
        let mut root = Url::parse(api_root)?;
        if !root.path().ends_with('/') {
            let path = format!("{}/", root.path());
            root.set_path(&path);
        }
        let base = root.join(&format!("{}/", cohort))?;

        Ok(ApiConfig {
            cohort: cohort.to_owned(),
            base,
        })
    }

    pub fn for_cohort(cohort: &str) -> Result<Self, ConfigError> {
        ApiConfig::new(DEFAULT_API_ROOT, cohort)
    }

    pub fn cohort(&self) -> &str {
        &self.cohort
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    pub fn players_url(&self) -> Result<Url, url::ParseError> {
        self.base.join("players")
    }

    pub fn player_url(&self, id: PlayerId) -> Result<Url, url::ParseError> {
        self.base.join(&format!("players/{}", id))
    }
}

/// What happens once a removal has been confirmed and the refresh delay
/// has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterRemove {
    /// Re-fetch the list and re-render the container in place.
    Rerender,
    /// Reload the whole document.
    ReloadPage,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub after_remove: AfterRemove,
    pub refresh_delay_ms: i32,
}

impl AppConfig {
    pub fn new(api: ApiConfig) -> Self {
        AppConfig {
            api,
            after_remove: AfterRemove::Rerender,
            refresh_delay_ms: REFRESH_DELAY_MS,
        }
    }
}
