use hpb_benchgen::config::{Config, HarnessConfig};
use std::io::Write;

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().expect("tempfile");
    f.write_all(content.as_bytes()).expect("write config");
    f
}

#[test]
fn defaults_match_hpb_runtime() {
    let cfg = Config::default();
    assert_eq!(cfg.harness.arena_type, "hpb_Arena");
    assert_eq!(cfg.harness.arena_new, "hpb_Arena_New");
    assert_eq!(cfg.harness.buffer_len, 1);
    assert_eq!(cfg.logging.level, "info");
}

#[test]
fn empty_file_gives_defaults() {
    let f = write_config("");
    let cfg = Config::load(f.path().to_str().unwrap()).expect("load");
    assert_eq!(cfg, Config::default());
}

#[test]
fn partial_harness_section() {
    let f = write_config("[harness]\narena_type = \"upb_Arena\"\n");
    let cfg = Config::load(f.path().to_str().unwrap()).expect("load");
    let expected = HarnessConfig { arena_type: "upb_Arena".into(), ..HarnessConfig::default() };
    assert_eq!(cfg.harness, expected);
    assert_eq!(cfg.logging.level, "info");
}

#[test]
fn zero_buffer_rejected() {
    let f = write_config("[harness]\nbuffer_len = 0\n");
    let err = Config::load(f.path().to_str().unwrap()).unwrap_err();
    assert!(err.to_string().contains("buffer_len"), "{err}");
}

#[test]
fn malformed_toml_reports_path() {
    let f = write_config("[harness\n");
    let path = f.path().to_str().unwrap().to_string();
    let err = Config::load(&path).unwrap_err();
    assert!(err.to_string().contains(&path), "{err}");
}

#[test]
fn missing_file_is_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nope.toml");
    assert!(Config::load(path.to_str().unwrap()).is_err());
}
