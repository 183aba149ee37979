use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/";

#[derive(thiserror::Error, Debug)]
pub enum ConfError {
    #[error("Invalid API base URL {0:?}")]
    InvalidBaseUrl(String, #[source] url::ParseError),

    #[error("API base URL {0:?} cannot hold a path")]
    CannotBeABase(String),
}

/// Where the student API lives.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiConf {
    base_url: Url,
}

impl ApiConf {
    pub fn parse(raw: &str) -> Result<Self, ConfError> {
        let raw = raw.trim();

        // endpoints are appended to the base, a missing slash would replace the last segment
        let normalized = if raw.ends_with('/') {
            raw.to_owned()
        } else {
            format!("{}/", raw)
        };

        let base_url =
            Url::parse(&normalized).map_err(|e| ConfError::InvalidBaseUrl(raw.to_owned(), e))?;

        if base_url.cannot_be_a_base() {
            return Err(ConfError::CannotBeABase(raw.to_owned()));
        }

        Ok(Self { base_url })
    }

    /// Reads `API_BASE_URL` captured at build time.
    pub fn from_build_env() -> Self {
        match option_env!("API_BASE_URL") {
            None => Self::default(),
            Some(raw) => Self::parse(raw).unwrap_or_else(|e| {
                log::error!("{}, falling back to {}", e, DEFAULT_API_BASE_URL);
                Self::default()
            }),
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL of a relative endpoint path like `student/all`.
    pub fn endpoint(&self, path: &str) -> String {
        match self.base_url.join(path.trim_start_matches('/')) {
            Ok(url) => url.into(),
            Err(_) => format!("{}{}", self.base_url, path.trim_start_matches('/')),
        }
    }
}

impl Default for ApiConf {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_API_BASE_URL).expect("default base URL is valid"),
        }
    }
}

/// Console log level from `LOG_LEVEL` captured at build time.
pub fn log_level() -> log::LevelFilter {
    parse_log_level(option_env!("LOG_LEVEL"))
}

fn parse_log_level(raw: Option<&str>) -> log::LevelFilter {
    raw.and_then(|level| level.trim().parse().ok())
        .unwrap_or(log::LevelFilter::Info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use claim::*;

    #[test]
    fn endpoints_are_appended_to_the_base_path() {
        let conf = ApiConf::parse("https://api.example.com/v1").unwrap();

        assert_eq!(conf.base_url().as_str(), "https://api.example.com/v1/");
        assert_eq!(
            conf.endpoint("student/all"),
            "https://api.example.com/v1/student/all"
        );
        assert_eq!(
            conf.endpoint("/percentage/"),
            "https://api.example.com/v1/percentage/"
        );
    }

    #[test]
    fn ids_become_path_segments() {
        let conf = ApiConf::parse("http://localhost:8000/").unwrap();

        assert_eq!(
            conf.endpoint(&format!("student/delete/{}", 42)),
            "http://localhost:8000/student/delete/42"
        );
    }

    #[test]
    fn rejects_relative_and_opaque_urls() {
        assert_err!(ApiConf::parse("not a url"));
        assert_matches!(
            ApiConf::parse("mailto:admin@example.com"),
            Err(ConfError::CannotBeABase(_))
        );
    }

    #[test]
    fn default_points_at_local_api() {
        assert_eq!(ApiConf::default().endpoint("login"), "http://localhost:8000/login");
    }

    #[test]
    fn log_level_defaults_to_info() {
        assert_eq!(parse_log_level(None), log::LevelFilter::Info);
        assert_eq!(parse_log_level(Some("chatty")), log::LevelFilter::Info);
        assert_eq!(parse_log_level(Some("debug")), log::LevelFilter::Debug);
        assert_eq!(parse_log_level(Some("off")).to_level(), None);
    }
}
