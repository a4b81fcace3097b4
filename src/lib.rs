//! Cached EC2 instance-type and Graviton-architecture facts for page rendering.
//!
//! This crate supplies two pieces of descriptive host metadata to a consuming
//! rendering layer: the EC2 instance type and whether the host is a Graviton
//! (aarch64) instance. The instance type is fetched at most once per process
//! from the EC2 instance metadata service (IMDSv2) and cached; the
//! architecture check is a cheap local read.
//!
//! # Example
//!
//! ```ignore
//! use ec2_facts::{FactsError, HostFacts, PageFacts};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), FactsError> {
//!     let facts = HostFacts::new();
//!
//!     // First call hits IMDS; later calls return the cached value.
//!     let instance_type = facts.instance_type().await?;
//!     println!("{} graviton={}", instance_type, facts.is_graviton());
//!
//!     // Or gather everything the template layer binds in one struct.
//!     let model = PageFacts::gather(&facts).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Instance-type sources
//!
//! | Source | Mechanism | Absent/unreachable behavior |
//! |--------|-----------|-----------------------------|
//! | IMDS | `GET /latest/meta-data/instance-type` (IMDSv2 token flow) | error, or placeholder via the degraded accessors |
//! | Environment | `EC2_INSTANCE_TYPE` variable | fixed placeholder text |

mod client;
mod error;
mod imds;
mod model;
mod provider;

pub use error::FactsError;
pub use model::PageFacts;
pub use provider::{
    is_graviton_arch, HostFacts, GRAVITON_ARCH, INSTANCE_TYPE_ENV_VAR, INSTANCE_TYPE_PLACEHOLDER,
};
