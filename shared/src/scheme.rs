use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

pub const SCHEME_COOKIE: &str = "scheme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    Light,
    Dark,
}

impl Scheme {
    pub fn toggle(self) -> Scheme {
        match self {
            Scheme::Light => Scheme::Dark,
            Scheme::Dark => Scheme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Light => "light",
            Scheme::Dark => "dark",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scheme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Scheme::Light),
            "dark" => Ok(Scheme::Dark),
            _ => Err(()),
        }
    }
}

/// The site's configured scheme; `System` follows `prefers-color-scheme`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemeSetting {
    Light,
    Dark,
    System,
}

/// A saved choice wins over the configured setting.
pub fn resolve(setting: SchemeSetting, saved: Option<&str>, prefers_dark: bool) -> Scheme {
    if let Some(scheme) = saved.and_then(|saved| saved.parse().ok()) {
        return scheme;
    }

    match setting {
        SchemeSetting::Light => Scheme::Light,
        SchemeSetting::Dark => Scheme::Dark,
        SchemeSetting::System if prefers_dark => Scheme::Dark,
        SchemeSetting::System => Scheme::Light,
    }
}

/// Reads `name` out of a `document.cookie` string.
pub fn cookie_value<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then_some(value)
    })
}
