use std::{env, str::FromStr, time::Duration};

use crate::{
    descriptor::{BoundsReduction, ZoomRange},
    error::ConfigError,
    extract::Extractor,
};

pub const DEFAULT_SOURCE_URL: &str =
    "https://aerodyne-solar.s3.us-east-2.amazonaws.com/Maptiler+200ft/openlayers.html";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    pub source_url: String,
    pub fetch_timeout: Duration,
    pub zoom_range: ZoomRange,
    pub bounds_reduction: BoundsReduction,
    pub settle_delay: Duration,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.into(),
            fetch_timeout: Duration::from_secs(30),
            zoom_range: ZoomRange::default(),
            bounds_reduction: BoundsReduction::default(),
            settle_delay: Duration::from_millis(2000),
        }
    }
}

impl FromStr for BoundsReduction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "source-compatible" => Ok(BoundsReduction::SourceCompatible),
            "two-corner" => Ok(BoundsReduction::TwoCorner),
            _ => Err("expected \"source-compatible\" or \"two-corner\"".into()),
        }
    }
}

fn parse<T>(key: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: ToString,
{
    match value {
        None => Ok(default),
        Some(value) => match value.trim().parse() {
            Ok(parsed) => Ok(parsed),
            Err(e) => Err(ConfigError::Invalid {
                key,
                reason: e.to_string(),
                value,
            }),
        },
    }
}

impl ViewerConfig {
    /// Reads `.env` if there is one, then the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let default = Self::default();

        let source_url = lookup("MAPTILER_SOURCE_URL").unwrap_or(default.source_url);
        let timeout_secs = parse(
            "FETCH_TIMEOUT_SECS",
            lookup("FETCH_TIMEOUT_SECS"),
            default.fetch_timeout.as_secs(),
        )?;
        let min = parse("VIEWPORT_MIN_ZOOM", lookup("VIEWPORT_MIN_ZOOM"), default.zoom_range.min)?;
        let max = parse("VIEWPORT_MAX_ZOOM", lookup("VIEWPORT_MAX_ZOOM"), default.zoom_range.max)?;
        let bounds_reduction = parse(
            "VIEWPORT_BOUNDS_MODE",
            lookup("VIEWPORT_BOUNDS_MODE"),
            default.bounds_reduction,
        )?;
        let settle_ms = parse(
            "SETTLE_DELAY_MS",
            lookup("SETTLE_DELAY_MS"),
            default.settle_delay.as_millis() as u64,
        )?;

        if min > max {
            return Err(ConfigError::Invalid {
                key: "VIEWPORT_MIN_ZOOM",
                value: min.to_string(),
                reason: format!("greater than VIEWPORT_MAX_ZOOM ({max})"),
            });
        }

        Ok(Self {
            source_url,
            fetch_timeout: Duration::from_secs(timeout_secs),
            zoom_range: ZoomRange { min, max },
            bounds_reduction,
            settle_delay: Duration::from_millis(settle_ms),
        })
    }

    pub fn extractor(&self) -> Extractor {
        Extractor::new(self.bounds_reduction, self.zoom_range)
    }
}
