use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{rvs, temp_out};

#[test]
fn test_list_shows_sample_data() {
    rvs()
        .args(["--test", "list"])
        .assert()
        .success()
        .stdout(contains("Dados Coletados (4 registros)"))
        .stdout(contains("Centro"))
        .stdout(contains("Nova California"))
        .stdout(contains("1.200"))
        .stdout(contains("15/01/2024"));
}

#[test]
fn test_list_filtered_by_week() {
    rvs()
        .args(["--test", "list", "--week", "3"])
        .assert()
        .success()
        .stdout(contains("Dados Coletados (2 registros)"))
        .stdout(contains("Jardim Brasil"))
        .stdout(contains("Santa Catarina").not());
}

#[test]
fn test_list_filtered_by_locality_substring() {
    rvs()
        .args(["--test", "list", "--locality", "CENT"])
        .assert()
        .success()
        .stdout(contains("Dados Coletados (1 registros)"))
        .stdout(contains("Centro"));
}

#[test]
fn test_list_without_matches() {
    rvs()
        .args(["--test", "list", "--modality", "TR", "--week", "3"])
        .assert()
        .success()
        .stdout(contains("No records match"));
}

#[test]
fn test_stats_all_and_filtered() {
    rvs()
        .args(["--test", "stats"])
        .assert()
        .success()
        .stdout(contains("84.3%"))
        .stdout(contains("Registros: 4 de 4"));

    rvs()
        .args(["--test", "stats", "--week", "3"])
        .assert()
        .success()
        .stdout(contains("81.5%"))
        .stdout(contains("Registros: 2 de 4"));
}

#[test]
fn test_charts_render_every_view() {
    rvs()
        .args(["--test", "charts"])
        .assert()
        .success()
        .stdout(contains("81.7"))
        .stdout(contains("Trabalhados"))
        .stdout(contains("3.750"))
        .stdout(contains("SE 3"))
        .stdout(contains("86.5"));
}

#[test]
fn test_charts_single_kind() {
    rvs()
        .args(["--test", "charts", "--kind", "line", "--cycle", "2"])
        .assert()
        .success()
        .stdout(contains("SE 4"))
        .stdout(contains("SE 3").not())
        .stdout(contains("Distribuição").not());
}

#[test]
fn test_invalid_filters_fail() {
    rvs()
        .args(["--test", "list", "--week", "54"])
        .assert()
        .failure()
        .stderr(contains("Invalid epidemiological week"));

    rvs()
        .args(["--test", "list", "--modality", "LIRAa"])
        .assert()
        .failure()
        .stderr(contains("Invalid work modality"));
}

#[test]
fn test_add_record() {
    rvs()
        .args([
            "--test",
            "add",
            "--locality",
            "mutuns",
            "--total",
            "200",
            "--worked",
            "150",
            "--informed",
            "100",
            "--date",
            "2024-02-10",
            "--modality",
            "li+t",
            "--week",
            "6",
            "--cycle",
            "Ciclo 03",
        ])
        .assert()
        .success()
        .stdout(contains("Record for 'Mutuns' added"))
        .stdout(contains("Dados Coletados (5 registros)"))
        .stdout(contains("75.0%"));
}

#[test]
fn test_add_rejects_worked_above_total() {
    rvs()
        .args([
            "--test",
            "add",
            "--locality",
            "Centro",
            "--total",
            "10",
            "--worked",
            "11",
            "--date",
            "2024-02-10",
            "--modality",
            "PE",
            "--week",
            "6",
            "--cycle",
            "1",
        ])
        .assert()
        .failure()
        .stderr(contains("cannot exceed total units"));
}

#[test]
fn test_import_stub() {
    let file = temp_out("levantamento", "xlsx");
    fs::write(&file, b"not really a spreadsheet").expect("write import file");

    rvs()
        .args(["--test", "import", &file])
        .assert()
        .success()
        .stdout(contains("Importado - levantamento_rvectorsurvey_out"))
        .stdout(contains("Dados Coletados (5 registros)"));
}

#[test]
fn test_import_rejects_other_types() {
    let file = temp_out("levantamento_txt", "txt");
    fs::write(&file, b"plain text").expect("write import file");

    rvs()
        .args(["--test", "import", &file])
        .assert()
        .failure()
        .stderr(contains("Unsupported import file"));
}

#[test]
fn test_export_csv_filtered() {
    let out = temp_out("export_csv_week4", "csv");

    rvs()
        .args([
            "--test", "export", "--format", "csv", "--file", &out, "--week", "4", "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("id,locality,total_units"));
    assert!(content.contains("Santa Catarina"));
    assert!(content.contains("Nova California"));
    assert!(!content.contains("Centro"));
}

#[test]
fn test_export_json_all() {
    let out = temp_out("export_json_all", "json");

    rvs()
        .args(["--test", "export", "--format", "json", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(rows.as_array().map(|a| a.len()), Some(4));
    assert!(content.contains("\"work_modality\": \"LI + T\""));
}

#[test]
fn test_refs_and_config_print() {
    rvs()
        .args(["--test", "refs"])
        .assert()
        .success()
        .stdout(contains("Zildolandia"))
        .stdout(contains("LI + T"))
        .stdout(contains("Ciclo 06"));

    rvs()
        .args(["--test", "config", "--print"])
        .assert()
        .success()
        .stdout(contains("seed_sample_data: true"))
        .stdout(contains("decimals: 1"));
}

#[test]
fn test_config_file_controls_seed_and_decimals() {
    let conf = temp_out("cli_config", "conf");
    fs::write(&conf, "seed_sample_data: false\ndecimals: 2\n").expect("write config");

    rvs()
        .args(["--config", &conf, "stats"])
        .assert()
        .success()
        .stdout(contains("Registros: 0 de 0"))
        .stdout(contains("0.00%"));
}

#[test]
fn test_export_with_no_matches_keeps_existing_file_without_prompt() {
    let out = temp_out("export_no_match", "csv");
    fs::write(&out, "previous export\n").expect("write existing file");

    rvs()
        .args(["--test", "export", "--format", "csv", "--file", &out, "--locality", "zzzz"])
        .assert()
        .success()
        .stdout(contains("nothing exported"))
        .stdout(contains("Overwrite?").not());

    let content = fs::read_to_string(&out).expect("read existing file");
    assert_eq!(content, "previous export\n");
}
