//! Tree validator settings

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::{ConfigError, ConfigResult};

/// What `n == 0` means
///
/// A tree on `n` vertices has `n - 1` edges, which no edge list can match
/// when `n == 0`, so the literal answer is "not a tree".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyGraphPolicy {
    /// Zero vertices is not a tree
    #[default]
    Reject,

    /// Zero vertices (and zero edges) is the empty tree
    Accept,
}

impl EmptyGraphPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reject => "reject",
            Self::Accept => "accept",
        }
    }
}

impl FromStr for EmptyGraphPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "accept" => Ok(Self::Accept),
            _ => Err(ConfigError::UnknownPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for EmptyGraphPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Graph tree validator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorConfig {
    /// Answer for a graph with no vertices
    pub empty_graph: EmptyGraphPolicy,

    /// Largest vertex count accepted (1..=u32::MAX); larger `n` is an
    /// invalid argument
    pub max_vertices: u32,

    /// Check every endpoint before the first union (default).
    ///
    /// When `false`, endpoints are checked edge by edge in input order, so
    /// a cycle closed before the first bad endpoint yields "not a tree"
    /// instead of an error.
    pub check_all_endpoints: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            empty_graph: EmptyGraphPolicy::Reject,
            max_vertices: u32::MAX,
            check_all_endpoints: true,
        }
    }
}

impl ValidatorConfig {
    pub fn empty_graph(mut self, policy: EmptyGraphPolicy) -> Self {
        self.empty_graph = policy;
        self
    }

    pub fn max_vertices(mut self, max: u32) -> Self {
        self.max_vertices = max;
        self
    }

    pub fn check_all_endpoints(mut self, eager: bool) -> Self {
        self.check_all_endpoints = eager;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_vertices == 0 {
            return Err(ConfigError::range_with_hint(
                "max_vertices",
                self.max_vertices,
                1,
                u32::MAX,
                "A graph needs room for at least one vertex",
            ));
        }
        Ok(())
    }
}
