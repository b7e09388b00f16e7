mod common;
use common::temp_out;
use rvectorsurvey::config::Config;
use rvectorsurvey::errors::AppError;
use std::fs;
use std::path::Path;

#[test]
fn test_missing_file_gives_defaults() {
    let path = temp_out("config_missing", "conf");
    let cfg = Config::load_from(Path::new(&path)).expect("defaults");

    assert_eq!(cfg, Config::default());
    assert!(cfg.seed_sample_data);
    assert_eq!(cfg.decimals, 1);
    assert_eq!(cfg.separator_char, "-");
    assert_eq!(cfg.log_level, "warn");
}

#[test]
fn test_partial_file_fills_defaults() {
    let path = temp_out("config_partial", "conf");
    fs::write(&path, "decimals: 2\n").expect("write config");

    let cfg = Config::load_from(Path::new(&path)).expect("load");

    assert_eq!(cfg.decimals, 2);
    assert!(cfg.seed_sample_data);
    assert_eq!(cfg.separator_char, "-");
}

#[test]
fn test_invalid_values_are_rejected() {
    let path = temp_out("config_invalid", "conf");
    fs::write(&path, "decimals: 12\n").expect("write config");
    assert!(matches!(
        Config::load_from(Path::new(&path)),
        Err(AppError::Config(_))
    ));

    fs::write(&path, "separator_char: \"==\"\n").expect("write config");
    assert!(matches!(
        Config::load_from(Path::new(&path)),
        Err(AppError::Config(_))
    ));

    fs::write(&path, "decimals: [oops\n").expect("write config");
    assert!(matches!(
        Config::load_from(Path::new(&path)),
        Err(AppError::Yaml(_))
    ));
}

#[test]
fn test_init_file_writes_loadable_defaults() {
    let path = temp_out("config_init", "conf");

    Config::init_file(Path::new(&path)).expect("init");
    let cfg = Config::load_from(Path::new(&path)).expect("load");

    assert_eq!(cfg, Config::default());
}

#[test]
fn test_unreadable_file_reports_cause() {
    let path = temp_out("config_is_dir", "conf");
    fs::create_dir_all(&path).expect("create dir");

    let err = Config::load_from(Path::new(&path)).expect_err("directory is not a config file");
    fs::remove_dir_all(&path).ok();

    match err {
        AppError::ConfigLoad(msg) => {
            assert!(msg.contains("config_is_dir"), "missing path in: {msg}");
            assert!(msg.len() > path.len() + 2, "missing cause in: {msg}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
