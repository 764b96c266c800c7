// Location: src/config.rs

//! Logger construction parameters

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::level::Level;

/// Construction parameters for a logger or a sub-logger
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    /// Tags appended to every line as ` #tag`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<TagSpec>,

    /// Severity threshold; `None` means default (or inherited, for `sub`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<LevelSpec>,
}

/// A single tag or an ordered list of tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagSpec {
    /// A single tag
    One(String),
    /// Tags in order
    Many(Vec<String>),
}

/// A severity given either as a number or by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LevelSpec {
    /// 0 to 5; out-of-range values are clamped
    Numeric(i64),
    /// `none`, `error`, `warn`, `log`, `debug` or `profile`
    Name(String),
}

/// Whether line headers are colorized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Colorize only when the target stream supports it
    #[default]
    Auto,
    /// Always emit color escapes
    Always,
    /// Plain text only
    Never,
}

impl LoggerConfig {
    /// Empty configuration: no tags, default level
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a single tag
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(TagSpec::One(tag.into()));
        self
    }

    /// Set an ordered list of tags
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tag = Some(TagSpec::Many(tags.into_iter().map(Into::into).collect()));
        self
    }

    /// Set the threshold, numerically, by name, or as a [`Level`]
    pub fn level(mut self, level: impl Into<LevelSpec>) -> Self {
        self.level = Some(level.into());
        self
    }

    /// Parse a configuration document such as `{"tag": ["db"], "level": "log"}`.
    ///
    /// Level names are not validated here; that happens when the logger is built.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub(crate) fn tag_list(&self) -> Vec<String> {
        self.tag.clone().map(TagSpec::into_vec).unwrap_or_default()
    }

    /// Resolve the configured level, if any
    pub(crate) fn resolve_level(&self) -> Result<Option<Level>> {
        self.level.as_ref().map(LevelSpec::resolve).transpose()
    }
}

impl TagSpec {
    /// Normalize to an ordered list
    pub fn into_vec(self) -> Vec<String> {
        match self {
            TagSpec::One(tag) => vec![tag],
            TagSpec::Many(tags) => tags,
        }
    }
}

impl From<&str> for TagSpec {
    fn from(tag: &str) -> Self {
        TagSpec::One(tag.to_string())
    }
}

impl From<String> for TagSpec {
    fn from(tag: String) -> Self {
        TagSpec::One(tag)
    }
}

impl From<Vec<String>> for TagSpec {
    fn from(tags: Vec<String>) -> Self {
        TagSpec::Many(tags)
    }
}

impl From<&[&str]> for TagSpec {
    fn from(tags: &[&str]) -> Self {
        TagSpec::Many(tags.iter().map(|t| t.to_string()).collect())
    }
}

impl LevelSpec {
    /// Turn the spec into a [`Level`], failing on unknown names
    pub fn resolve(&self) -> Result<Level> {
        match self {
            // negative means none; large values saturate
            LevelSpec::Numeric(value) => {
                Ok(Level::from_numeric((*value).clamp(0, u8::MAX as i64) as u8))
            }
            LevelSpec::Name(name) => name.parse(),
        }
    }
}

impl From<u8> for LevelSpec {
    fn from(value: u8) -> Self {
        LevelSpec::Numeric(value.into())
    }
}

impl From<i32> for LevelSpec {
    fn from(value: i32) -> Self {
        LevelSpec::Numeric(value.into())
    }
}

impl From<Level> for LevelSpec {
    fn from(level: Level) -> Self {
        LevelSpec::Numeric(level.as_u8().into())
    }
}

impl From<&str> for LevelSpec {
    fn from(name: &str) -> Self {
        LevelSpec::Name(name.to_string())
    }
}

impl From<String> for LevelSpec {
    fn from(name: String) -> Self {
        LevelSpec::Name(name)
    }
}
