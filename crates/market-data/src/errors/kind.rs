use serde::Serialize;

/// Coarse classification of a failed refresh.
///
/// Callers use this to decide what to show while the previous snapshot stays
/// on screen. None of the kinds is fatal: a refresh loop keeps running and
/// simply tries again at the next scheduled tick.
///
/// | Kind | Typical cause | Effect on the cached snapshot |
/// |------|---------------|-------------------------------|
/// | `Network` | connect failure, timeout, non-2xx status | untouched |
/// | `Decode` | malformed JSON, empty result array | untouched |
/// | `Config` | endpoint is not a valid URL | untouched |
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// The request never produced a usable HTTP body.
    Network,

    /// A body arrived but could not be turned into a snapshot.
    Decode,

    /// The provider was configured with values it cannot use.
    /// Retrying without a config change will fail the same way.
    Config,
}

impl ErrorKind {
    /// Short lowercase label, used in logs and by text renderers.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Network => "network",
            Self::Decode => "decode",
            Self::Config => "config",
        }
    }
}
