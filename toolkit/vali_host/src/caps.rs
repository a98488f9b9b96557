//! Environment capability description.

/// Engine generations of this WebKit line reported not-yet-standardized
/// collection constructors as plain callables. When the engine string names
/// that generation, "callable" alone is not a sufficient class-definition
/// signal.
const LEGACY_COLLECTIONS_ENGINE: &str = "AppleWebKit/534";

/// Which optional container types the running environment supports.
///
/// Environments may lack the insertion-ordered mapping type, the uniqueness
/// set type, or both; the classifier degrades gracefully instead of failing.
/// The engine id string is only consulted for the legacy-callable quirk —
/// non-browser hosts leave it empty and the quirk guard is always false.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostCaps {
    /// The insertion-ordered mapping container type is available.
    pub map_supported: bool,
    /// The uniqueness-set container type is available.
    pub set_supported: bool,
    /// Read-only engine/version identification string, when the host
    /// exposes one.
    pub engine_id: Option<String>,
}

impl HostCaps {
    /// An environment with every optional container type available and no
    /// engine string.
    pub fn full() -> Self {
        HostCaps {
            map_supported: true,
            set_supported: true,
            engine_id: None,
        }
    }

    /// Drop mapping-container support.
    pub fn without_map(mut self) -> Self {
        self.map_supported = false;
        self
    }

    /// Drop uniqueness-set support.
    pub fn without_set(mut self) -> Self {
        self.set_supported = false;
        self
    }

    /// Attach the host's engine-identification string.
    pub fn with_engine_id(mut self, engine_id: impl Into<String>) -> Self {
        self.engine_id = Some(engine_id.into());
        self
    }

    /// Whether this host misreports experimental built-ins as callables.
    ///
    /// True only for the one legacy engine generation identified by
    /// [`LEGACY_COLLECTIONS_ENGINE`]; always false when no engine string is
    /// configured.
    pub fn misreports_experimental_callables(&self) -> bool {
        self.engine_id
            .as_deref()
            .is_some_and(|id| id.contains(LEGACY_COLLECTIONS_ENGINE))
    }
}

impl Default for HostCaps {
    fn default() -> Self {
        HostCaps::full()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn full_caps_support_everything() {
        let caps = HostCaps::full();
        assert!(caps.map_supported);
        assert!(caps.set_supported);
        assert!(!caps.misreports_experimental_callables());
        assert_eq!(caps, HostCaps::default());
    }

    #[test]
    fn builders_drop_capabilities() {
        let caps = HostCaps::full().without_map().without_set();
        assert!(!caps.map_supported);
        assert!(!caps.set_supported);
    }

    #[test]
    fn legacy_engine_detected_by_version_string() {
        let legacy = HostCaps::full().with_engine_id(
            "Mozilla/5.0 (Macintosh) AppleWebKit/534.57.2 (KHTML, like Gecko) Safari/534.57.2",
        );
        assert!(legacy.misreports_experimental_callables());

        let modern = HostCaps::full().with_engine_id(
            "Mozilla/5.0 (Macintosh) AppleWebKit/605.1.15 (KHTML, like Gecko) Safari/605.1.15",
        );
        assert!(!modern.misreports_experimental_callables());
    }
}
