//! Host-facts provider with a once-per-process instance-type cache.

use tokio::sync::OnceCell;
use tracing::{debug, warn};

use crate::client::ImdsClient;
use crate::error::FactsError;
use crate::imds;

/// Architecture identifier for 64-bit ARM (Graviton) hosts.
pub const GRAVITON_ARCH: &str = "aarch64";

/// Environment variable consulted by the env-based instance-type source.
pub const INSTANCE_TYPE_ENV_VAR: &str = "EC2_INSTANCE_TYPE";

/// Placeholder returned when the instance type cannot be determined.
pub const INSTANCE_TYPE_PLACEHOLDER: &str = "Unknown (EC2_INSTANCE_TYPE not set)";

/// Returns true iff `arch` is the 64-bit ARM identifier.
///
/// Any other value, including the empty string, is not Graviton.
pub fn is_graviton_arch(arch: &str) -> bool {
    arch == GRAVITON_ARCH
}

/// Provider of descriptive host metadata for the rendering layer.
///
/// Holds the IMDS client and the process-wide instance-type cache. Construct
/// one at application start and pass it by reference to request handlers;
/// the cache is scoped to the provider instance, not a global.
///
/// The instance type is fetched from IMDS at most once per provider
/// lifetime: concurrent first callers block on a single in-flight fetch and
/// all observe the same cached value. A failed fetch is not cached, so a
/// later call retries.
#[derive(Debug)]
pub struct HostFacts {
    client: ImdsClient,
    instance_type: OnceCell<String>,
}

impl HostFacts {
    /// Create a provider using the default IMDS endpoint.
    pub fn new() -> Self {
        Self {
            client: ImdsClient::default(),
            instance_type: OnceCell::new(),
        }
    }

    /// Create a provider with a custom IMDS base URL (for testing).
    pub fn with_base_url(base_url: &str) -> Result<Self, FactsError> {
        Ok(Self {
            client: ImdsClient::with_base_url(base_url)?,
            instance_type: OnceCell::new(),
        })
    }

    /// Get the EC2 instance type, fetching it from IMDS on first call.
    ///
    /// The instance type of a running host never changes, so the first
    /// successful response is cached for the provider's lifetime and every
    /// later call is a non-blocking read.
    ///
    /// # Errors
    ///
    /// Propagates the IMDS failure (timeout, connect error, non-success
    /// status) to the caller. Nothing is cached on failure; callers that
    /// prefer graceful degradation should use
    /// [`instance_type_or_placeholder`](Self::instance_type_or_placeholder).
    pub async fn instance_type(&self) -> Result<&str, FactsError> {
        let value = self
            .instance_type
            .get_or_try_init(|| async {
                debug!(base_url = self.client.base_url(), "fetching instance type");
                imds::fetch_instance_type(&self.client).await
            })
            .await?;
        Ok(value.as_str())
    }

    /// Get the EC2 instance type, degrading to the placeholder on failure.
    ///
    /// Same caching behavior as [`instance_type`](Self::instance_type), but
    /// an IMDS failure is logged and replaced with
    /// [`INSTANCE_TYPE_PLACEHOLDER`]. The placeholder itself is never
    /// cached, so a later call retries the fetch.
    pub async fn instance_type_or_placeholder(&self) -> String {
        match self.instance_type().await {
            Ok(value) => value.to_string(),
            Err(e) => {
                warn!(error = %e, "instance-type fetch failed, using placeholder");
                INSTANCE_TYPE_PLACEHOLDER.to_string()
            }
        }
    }

    /// Get the instance type from the `EC2_INSTANCE_TYPE` environment
    /// variable, or the placeholder when it is unset or empty.
    ///
    /// Environment variables do not change for the life of the process, so
    /// no caching is involved. Never returns an empty string.
    pub fn instance_type_from_env(&self) -> String {
        instance_type_from_value(std::env::var(INSTANCE_TYPE_ENV_VAR).ok().as_deref())
    }

    /// Get the processor architecture identifier, e.g. `x86_64` or `aarch64`.
    pub fn os_arch(&self) -> &'static str {
        std::env::consts::ARCH
    }

    /// True iff this host is a Graviton (aarch64) instance.
    ///
    /// Pure read of the compiled-for architecture; not cached because the
    /// lookup is already free.
    pub fn is_graviton(&self) -> bool {
        is_graviton_arch(self.os_arch())
    }
}

impl Default for HostFacts {
    fn default() -> Self {
        Self::new()
    }
}

fn instance_type_from_value(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => INSTANCE_TYPE_PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graviton_arch_literal() {
        assert_eq!(GRAVITON_ARCH, "aarch64");
    }

    #[test]
    fn test_is_graviton_arch() {
        assert!(is_graviton_arch("aarch64"));
        assert!(!is_graviton_arch("x86_64"));
        assert!(!is_graviton_arch("arm"));
        assert!(!is_graviton_arch(""));
    }

    #[test]
    fn test_env_value_present() {
        assert_eq!(instance_type_from_value(Some("m7g.medium")), "m7g.medium");
    }

    #[test]
    fn test_env_value_absent_or_empty() {
        assert_eq!(instance_type_from_value(None), INSTANCE_TYPE_PLACEHOLDER);
        assert_eq!(instance_type_from_value(Some("")), INSTANCE_TYPE_PLACEHOLDER);
    }

    #[test]
    fn test_placeholder_is_not_empty() {
        assert!(!INSTANCE_TYPE_PLACEHOLDER.is_empty());
    }

    #[test]
    fn test_is_graviton_matches_os_arch() {
        let facts = HostFacts::new();
        assert_eq!(facts.is_graviton(), facts.os_arch() == "aarch64");
    }
}
