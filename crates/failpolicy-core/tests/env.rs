//! Debug flag read from the environment.
//!
//! Kept in its own test binary: it mutates the process environment.

use failpolicy_core::{
    DispatchPolicy, OutcomePolicy, PolicyConfig, RequestInfo, ResponseDescriptor, StrictPolicy,
    DEBUG_ENV_VAR,
};

#[test]
fn debug_env_var_controls_constructed_policies() {
    let request = RequestInfo::new("GET", "https://api.example.com/items/9");
    let response = ResponseDescriptor::new().with_status("404");

    std::env::set_var(DEBUG_ENV_VAR, "1");
    assert!(PolicyConfig::from_env().debug);

    let err = StrictPolicy::new(&request)
        .classify(&response, "no such item".into())
        .unwrap_err();
    assert!(err.is_verbose());
    assert!(err.to_string().ends_with("Received body:\nno such item"));

    let err = DispatchPolicy::new(&request)
        .classify(&response, "no such item".into())
        .unwrap_err();
    assert!(err.is_verbose());

    std::env::set_var(DEBUG_ENV_VAR, "");
    assert!(!PolicyConfig::from_env().debug);

    std::env::remove_var(DEBUG_ENV_VAR);
    assert!(!PolicyConfig::from_env().debug);

    let err = StrictPolicy::new(&request)
        .classify(&response, "no such item".into())
        .unwrap_err();
    assert!(!err.is_verbose());
    assert_eq!(err.to_string(), r#"404: {"status":"404"}"#);
}
