use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> =
        pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn defaults_apply_when_only_the_key_is_set() {
    let config = LlmConfig::from_lookup(lookup_from(&[("ANTHROPIC_API_KEY", "sk-test")])).unwrap();
    assert_eq!(config.api_key, "sk-test");
    assert_eq!(config.model, DEFAULT_MODEL);
    assert_eq!(config.timeouts.request_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    assert_eq!(config.timeouts.connect_secs, DEFAULT_CONNECT_TIMEOUT_SECS);
}

#[test]
fn key_var_indirection_is_honored() {
    let config = LlmConfig::from_lookup(lookup_from(&[
        ("LLM_API_KEY_ENV", "MY_KEY"),
        ("MY_KEY", "sk-other"),
    ]))
    .unwrap();
    assert_eq!(config.api_key, "sk-other");
}

#[test]
fn missing_key_reports_the_variable_name() {
    let err = LlmConfig::from_lookup(lookup_from(&[("LLM_API_KEY_ENV", "MY_KEY")])).unwrap_err();
    assert!(matches!(err, LlmError::MissingApiKey { ref var } if var == "MY_KEY"));
}

#[test]
fn model_and_timeouts_can_be_overridden() {
    let config = LlmConfig::from_lookup(lookup_from(&[
        ("ANTHROPIC_API_KEY", "sk-test"),
        ("LLM_MODEL", "claude-haiku-4-5"),
        ("LLM_REQUEST_TIMEOUT_SECS", "30"),
        ("LLM_CONNECT_TIMEOUT_SECS", "5"),
    ]))
    .unwrap();
    assert_eq!(config.model, "claude-haiku-4-5");
    assert_eq!(config.timeouts, LlmTimeouts { request_secs: 30, connect_secs: 5 });
}

#[test]
fn non_numeric_timeout_is_a_config_error() {
    let err = LlmConfig::from_lookup(lookup_from(&[
        ("ANTHROPIC_API_KEY", "sk-test"),
        ("LLM_REQUEST_TIMEOUT_SECS", "soon"),
    ]))
    .unwrap_err();
    assert!(matches!(err, LlmError::ConfigParse(_)));
}
