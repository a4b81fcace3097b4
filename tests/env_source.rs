//! Env-variable instance-type source behavior.
//!
//! Both cases live in one test function because they mutate the same
//! process-wide environment variable.

use ec2_facts::{HostFacts, PageFacts, INSTANCE_TYPE_ENV_VAR, INSTANCE_TYPE_PLACEHOLDER};

#[test]
fn test_env_source_set_and_unset() {
    let facts = HostFacts::new();

    std::env::set_var(INSTANCE_TYPE_ENV_VAR, "t4g.small");
    assert_eq!(facts.instance_type_from_env(), "t4g.small");

    let model = PageFacts::gather_from_env(&facts);
    assert_eq!(model.ec2_instance_type, "t4g.small");

    std::env::remove_var(INSTANCE_TYPE_ENV_VAR);
    assert_eq!(facts.instance_type_from_env(), INSTANCE_TYPE_PLACEHOLDER);
}
