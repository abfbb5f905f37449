//! Search configuration.

/// How concurrent searches interact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LockPolicy {
    /// Every search owns its state; searches run in parallel freely.
    #[default]
    Independent,
    /// Every search in the process takes one global lock first, so at most
    /// one runs at a time.
    Serialized,
}

/// Which way the per-cell link points and how the route is rebuilt from it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LinkMode {
    /// `link[neighbor] = current`; the route is walked back from the target.
    #[default]
    Parent,
    /// `link[current] = neighbor`; the route is walked forward from the start
    /// and the final expanded cell is appended.
    ///
    /// This reproduces the legacy route layout. It only yields a connected
    /// route when the last neighbor improved from each expanded cell happens
    /// to lead to the target, which holds on corridors but not on open maps.
    Successor,
}

/// Options for a [`GridPathfinder`](crate::GridPathfinder).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    pub lock: LockPolicy,
    pub links: LinkMode,
}

impl SearchConfig {
    /// Return a copy using `lock`.
    pub fn with_lock(mut self, lock: LockPolicy) -> Self {
        self.lock = lock;
        self
    }

    /// Return a copy using `links`.
    pub fn with_links(mut self, links: LinkMode) -> Self {
        self.links = links;
        self
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let c = SearchConfig {
            lock: LockPolicy::Serialized,
            links: LinkMode::Successor,
        };
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"lock":"serialized","links":"successor"}"#);
        let back: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let c: SearchConfig = serde_json::from_str(r#"{"links":"successor"}"#).unwrap();
        assert_eq!(c.lock, LockPolicy::Independent);
        assert_eq!(c.links, LinkMode::Successor);
        let c: SearchConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(c, SearchConfig::default());
    }
}
