mod common;

use common::CensoTest;
use std::fs;

// ============================================================================
// Config command tests
// ============================================================================

#[test]
fn test_config_show_defaults() {
    let censo = CensoTest::new();

    let output = censo.run_success(&["config", "show", "--json"]);
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["timeout"], 30);
    assert_eq!(json["page_size"], 10);
    assert_eq!(json["api_url_from_env"], true);
}

#[test]
fn test_config_set_then_get() {
    let censo = CensoTest::new();

    censo.run_success(&["config", "set", "page_size", "25"]);
    let output = censo.run_success(&["config", "get", "page_size"]);
    assert_eq!(output.trim(), "25");

    let written = fs::read_to_string(censo.temp_dir.path().join("config.yaml")).unwrap();
    assert!(written.contains("page_size: 25"));
}

#[test]
fn test_config_set_rejects_zero_page_size() {
    let censo = CensoTest::new();

    let stderr = censo.run_failure(&["config", "set", "page_size", "0"]);
    assert!(stderr.contains("page_size"));
    assert!(!censo.temp_dir.path().join("config.yaml").exists());
}

#[test]
fn test_config_unknown_key() {
    let censo = CensoTest::new();

    let stderr = censo.run_failure(&["config", "get", "token"]);
    assert!(stderr.contains("Valid keys"));
}

#[test]
fn test_config_path_uses_config_dir() {
    let censo = CensoTest::new();

    let output = censo.run_success(&["config", "path"]);
    assert!(output.trim().ends_with("config.yaml"));
    assert!(output.contains(&*censo.temp_dir.path().to_string_lossy()));
}

// ============================================================================
// Argument validation (never reaches the network)
// ============================================================================

#[test]
fn test_invalid_boolean_value_rejected() {
    let censo = CensoTest::new();

    let stderr = censo.run_failure(&[
        "cidade", "Recife", "--param", "in_internet", "--value", "yes",
    ]);
    assert!(stderr.contains("invalid value 'yes'"), "stderr: {stderr}");
    assert!(!stderr.contains("request failed"));
}

#[test]
fn test_invalid_integer_value_rejected() {
    let censo = CensoTest::new();

    let stderr = censo.run_failure(&[
        "estado", "PR", "--param", "qt_salas_utilizadas", "--value", "doze",
    ]);
    assert!(stderr.contains("whole number"), "stderr: {stderr}");
}

#[test]
fn test_unknown_parameter_rejected() {
    let censo = CensoTest::new();

    let stderr = censo.run_failure(&[
        "cidade", "Recife", "--param", "in_piscina", "--value", "true",
    ]);
    assert!(stderr.contains("in_internet"));
}

#[test]
fn test_unknown_state_rejected() {
    let censo = CensoTest::new();

    let stderr = censo.run_failure(&[
        "estado", "ZZ", "--param", "in_internet", "--value", "true",
    ]);
    assert!(stderr.contains("ZZ"));
}

// ============================================================================
// Service errors
// ============================================================================

#[test]
fn test_unreachable_service_fails() {
    let censo = CensoTest::new();

    let stderr = censo.run_failure(&["curso", "Enfermagem"]);
    assert!(stderr.contains("request failed"), "stderr: {stderr}");
}

#[test]
fn test_geral_unreachable_service_fails() {
    let censo = CensoTest::new();

    let stderr = censo.run_failure(&["geral"]);
    assert!(stderr.contains("request failed"), "stderr: {stderr}");
}

// ============================================================================
// Reference listings
// ============================================================================

#[test]
fn test_parametros_lists_labels() {
    let censo = CensoTest::new();

    let output = censo.run_success(&["parametros"]);
    assert!(output.contains("in_internet"));
    assert!(output.contains("Possui Internet"));
    assert!(output.contains("qt_desktop_aluno"));
}

#[test]
fn test_estados_json() {
    let censo = CensoTest::new();

    let output = censo.run_success(&["estados", "--json"]);
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    let estados = json.as_array().unwrap();
    assert_eq!(estados.len(), 27);
    assert!(estados.iter().any(|e| e["sigla"] == "PR" && e["nome"] == "Paraná"));
}

// ============================================================================
// Completions
// ============================================================================

#[test]
fn test_completions_bash() {
    let censo = CensoTest::new();

    let output = censo.run_success(&["completions", "bash"]);
    assert!(output.contains("_censo"));
}

#[test]
fn test_completions_zsh() {
    let censo = CensoTest::new();

    let output = censo.run_success(&["completions", "zsh"]);
    assert!(output.contains("#compdef censo"));
}
