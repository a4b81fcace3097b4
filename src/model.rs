//! View-model struct bound into the template namespace.

use serde::Serialize;

use crate::error::FactsError;
use crate::provider::HostFacts;

/// Host facts gathered for one page render.
///
/// The rendering collaborator calls [`gather`](Self::gather) (or
/// [`gather_degraded`](Self::gather_degraded)) before invoking the template
/// engine and binds the fields by name, replacing any implicit per-render
/// attribute injection with an explicit call site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageFacts {
    /// EC2 instance type, e.g. `m7g.medium`.
    pub ec2_instance_type: String,
    /// Processor architecture identifier, e.g. `x86_64` or `aarch64`.
    pub os_arch: String,
    /// Whether this host is a Graviton (aarch64) instance.
    pub is_graviton_instance: bool,
}

impl PageFacts {
    /// Gather facts from the provider, propagating IMDS failure.
    ///
    /// A transient metadata-service outage fails the render that triggered
    /// the fetch. Use [`gather_degraded`](Self::gather_degraded) to render a
    /// placeholder instead.
    pub async fn gather(facts: &HostFacts) -> Result<Self, FactsError> {
        Ok(Self {
            ec2_instance_type: facts.instance_type().await?.to_string(),
            os_arch: facts.os_arch().to_string(),
            is_graviton_instance: facts.is_graviton(),
        })
    }

    /// Gather facts from the provider, substituting the placeholder text
    /// when IMDS is unreachable. Never fails.
    pub async fn gather_degraded(facts: &HostFacts) -> Self {
        Self {
            ec2_instance_type: facts.instance_type_or_placeholder().await,
            os_arch: facts.os_arch().to_string(),
            is_graviton_instance: facts.is_graviton(),
        }
    }

    /// Gather facts using the `EC2_INSTANCE_TYPE` environment variable
    /// instead of IMDS. Never fails.
    pub fn gather_from_env(facts: &HostFacts) -> Self {
        Self {
            ec2_instance_type: facts.instance_type_from_env(),
            os_arch: facts.os_arch().to_string(),
            is_graviton_instance: facts.is_graviton(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_template_field_names() {
        let model = PageFacts {
            ec2_instance_type: "m7g.medium".to_string(),
            os_arch: "aarch64".to_string(),
            is_graviton_instance: true,
        };
        let json = serde_json::to_value(&model).unwrap();
        assert_eq!(json["ec2InstanceType"], "m7g.medium");
        assert_eq!(json["osArch"], "aarch64");
        assert_eq!(json["isGravitonInstance"], true);
    }

    #[test]
    fn test_gather_from_env_arch_consistency() {
        let facts = HostFacts::new();
        let model = PageFacts::gather_from_env(&facts);
        assert_eq!(model.os_arch, facts.os_arch());
        assert_eq!(model.is_graviton_instance, model.os_arch == "aarch64");
        assert!(!model.ec2_instance_type.is_empty());
    }
}
