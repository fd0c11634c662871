//! Integration tests for clash-groups.

#![allow(clippy::expect_used)]

use clash_groups::error::{Error, ExtractError};
use clash_groups::{GroupOptions, generate};

const SAMPLE: &str = "proxies:
  - { name: 'HK-01', server: x }
  - { name: \"US-02\", server: y }
  - { name: JP-03, server: z }
proxy-groups:
";

const SAMPLE_GROUPS: &str = "proxy-groups:
    - { name: 'Group 1', type: select, proxies: ['HK-01', 'US-02'] }
    - { name: 'Group 2', type: select, proxies: ['JP-03'] }";

/// A fuller Clash config: header keys, mixed entry styles, comments,
/// and an existing `proxy-groups` section that must be ignored.
const FULL_CONFIG: &str = "port: 7890
socks-port: 7891
mode: rule
proxies:
  # Hong Kong
  - { name: '🇭🇰 香港 01', type: ss, server: hk1.example.com, port: 443, cipher: aes-128-gcm, password: pw }
  - { name: \"🇭🇰 香港 02\", type: ss, server: hk2.example.com, port: 443 }

  # name: 'commented out'
  - { name: O'Hare-HK, type: trojan, server: ohare.example.com, port: 443 }
  - name: US Block Style
    type: vmess
    server: us.example.com
  - { name: 'JP, Tokyo {premium}', type: ss, server: jp.example.com }
proxy-groups:
  - { name: Auto, type: url-test, proxies: ['🇭🇰 香港 01'] }
rules:
  - MATCH,Auto
";

#[test]
fn test_end_to_end_sample() {
    let out = generate(SAMPLE, &GroupOptions::new(2, "Group")).expect("generate failed");
    assert_eq!(out.text, SAMPLE_GROUPS);
}

#[test]
fn test_full_config() {
    let out = generate(FULL_CONFIG, &GroupOptions::new(3, "节点分组")).expect("generate failed");
    assert_eq!(out.name_count, 5);
    assert_eq!(out.group_count, 2);
    assert_eq!(
        out.text,
        "proxy-groups:
    - { name: '节点分组 1', type: select, proxies: ['🇭🇰 香港 01', '🇭🇰 香港 02', 'O''Hare-HK'] }
    - { name: '节点分组 2', type: select, proxies: ['US Block Style', 'JP, Tokyo {premium}'] }"
    );
}

#[test]
fn test_existing_groups_not_extracted() {
    let out = generate(FULL_CONFIG, &GroupOptions::default()).expect("generate failed");
    assert!(!out.text.contains("Auto"));
    assert!(!out.text.contains("commented out"));
}

#[test]
fn test_missing_end_marker() {
    let config = "proxies:\n  - { name: a }\n  - { name: b }\n  - { name: c }";
    let out = generate(config, &GroupOptions::new(2, "G")).expect("generate failed");
    assert_eq!(out.name_count, 3);
    assert_eq!(out.group_count, 2);
}

#[test]
fn test_missing_start_marker() {
    let result = generate("port: 7890\nproxy-groups:\n", &GroupOptions::default());
    assert!(matches!(
        result,
        Err(Error::Extract(ExtractError::MissingSection { .. }))
    ));
}

#[test]
fn test_empty_section() {
    let result = generate(
        "proxies:\n\n  # nothing here\nproxy-groups:\n",
        &GroupOptions::default(),
    );
    assert!(matches!(
        result,
        Err(Error::Extract(ExtractError::NoNamesParsed))
    ));
}

mod property_tests {
    use clash_groups::core::GroupOptions;
    use clash_groups::{extract_names, partition, wrap_yaml_name};
    use proptest::prelude::*;

    fn name_strategy() -> impl Strategy<Value = String> {
        "[A-Za-z0-9][A-Za-z0-9 _-]{0,15}[A-Za-z0-9]"
    }

    proptest! {
        #[test]
        fn group_count_is_ceiling(len in 0usize..200, chunk in 1usize..20) {
            let names: Vec<String> = (0..len).map(|i| format!("n{i}")).collect();
            let groups = partition(&names, &GroupOptions::new(chunk, "G")).expect("partition");
            prop_assert_eq!(groups.len(), len.div_ceil(chunk));
            prop_assert_eq!(groups.iter().map(|g| g.proxies.len()).sum::<usize>(), len);
        }

        #[test]
        fn only_last_group_is_short(len in 1usize..200, chunk in 1usize..20) {
            let names: Vec<String> = (0..len).map(|i| format!("n{i}")).collect();
            let groups = partition(&names, &GroupOptions::new(chunk, "G")).expect("partition");
            let (last, full) = groups.split_last().expect("at least one group");
            prop_assert!(full.iter().all(|g| g.proxies.len() == chunk));
            prop_assert!((1..=chunk).contains(&last.proxies.len()));
        }

        #[test]
        fn order_preserved(names in prop::collection::vec(name_strategy(), 1..40), chunk in 1usize..10) {
            let groups = partition(&names, &GroupOptions::new(chunk, "G")).expect("partition");
            let flattened: Vec<String> = groups.into_iter().flat_map(|g| g.proxies).collect();
            prop_assert_eq!(flattened, names);
        }

        #[test]
        fn extraction_round_trips_quoted_names(names in prop::collection::vec(name_strategy(), 1..40)) {
            let block: String = names
                .iter()
                .map(|n| format!("  - {{ name: '{n}', type: ss }}\n"))
                .collect();
            prop_assert_eq!(extract_names(&block), names);
        }

        #[test]
        fn quoting_only_doubles_apostrophes(name in "[^\n]{0,30}") {
            let wrapped = wrap_yaml_name(&name);
            prop_assert!(wrapped.starts_with('\'') && wrapped.ends_with('\''));
            let inner = &wrapped[1..wrapped.len() - 1];
            prop_assert_eq!(inner.replace("''", "'"), name);
        }
    }
}

/// CLI command integration tests.
mod cli_tests {
    use super::{SAMPLE, SAMPLE_GROUPS};
    use clash_groups::cli::commands::execute;
    use clash_groups::cli::parser::Cli;
    use clash_groups::error::{CommandError, Error, ExtractError, IoError};
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    /// Helper to create a CLI struct reading `input` and writing `output`.
    fn make_cli(input: PathBuf, output: PathBuf) -> Cli {
        Cli {
            input: Some(input),
            output: Some(output),
            chunk: 2,
            prefix: "Group".to_string(),
            base_dir: None,
            stdout: false,
            verbose: false,
            format: "text".to_string(),
        }
    }

    fn write_input(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("keke.yaml");
        std::fs::write(&path, content).expect("write input");
        path
    }

    #[test]
    fn test_execute_writes_output() {
        let temp_dir = TempDir::new().expect("temp dir");
        let input = write_input(temp_dir.path(), SAMPLE);
        let output = temp_dir.path().join("groups.txt");

        let report = execute(&make_cli(input, output.clone())).expect("execute");
        assert!(report.contains("Generated proxy-groups written to:"));
        assert_eq!(
            std::fs::read_to_string(&output).expect("read output"),
            SAMPLE_GROUPS
        );
    }

    #[test]
    fn test_execute_base_dir_defaults() {
        let temp_dir = TempDir::new().expect("temp dir");
        write_input(temp_dir.path(), SAMPLE);

        let mut cli = make_cli(PathBuf::new(), PathBuf::new());
        cli.input = None;
        cli.output = None;
        cli.base_dir = Some(temp_dir.path().to_path_buf());

        execute(&cli).expect("execute");
        let written = temp_dir.path().join("generated_proxy_groups.txt");
        assert_eq!(
            std::fs::read_to_string(written).expect("read output"),
            SAMPLE_GROUPS
        );
    }

    #[test]
    fn test_execute_stdout_mode() {
        let temp_dir = TempDir::new().expect("temp dir");
        let input = write_input(temp_dir.path(), SAMPLE);

        let mut cli = make_cli(input, PathBuf::new());
        cli.output = None;
        cli.stdout = true;
        cli.base_dir = Some(temp_dir.path().to_path_buf());

        let report = execute(&cli).expect("execute");
        assert_eq!(report, format!("{SAMPLE_GROUPS}\n"));
        assert!(!temp_dir.path().join("generated_proxy_groups.txt").exists());
    }

    #[test]
    fn test_execute_json_report() {
        let temp_dir = TempDir::new().expect("temp dir");
        let input = write_input(temp_dir.path(), SAMPLE);
        let mut cli = make_cli(input, temp_dir.path().join("out.txt"));
        cli.format = "json".to_string();

        let report = execute(&cli).expect("execute");
        let value: serde_json::Value = serde_json::from_str(&report).expect("valid json");
        assert_eq!(value["success"], true);
        assert_eq!(value["names"], 3);
        assert_eq!(value["groups"], 2);
    }

    #[test]
    fn test_execute_missing_input() {
        let temp_dir = TempDir::new().expect("temp dir");
        let output = temp_dir.path().join("out.txt");
        let cli = make_cli(temp_dir.path().join("absent.yaml"), output.clone());

        let result = execute(&cli);
        assert!(matches!(
            result,
            Err(Error::Io(IoError::FileNotFound { .. }))
        ));
        assert!(!output.exists());
    }

    #[test]
    fn test_execute_missing_section_writes_nothing() {
        let temp_dir = TempDir::new().expect("temp dir");
        let input = write_input(temp_dir.path(), "port: 7890\n");
        let output = temp_dir.path().join("out.txt");

        let result = execute(&make_cli(input, output.clone()));
        assert!(matches!(
            result,
            Err(Error::Extract(ExtractError::MissingSection { .. }))
        ));
        assert!(!output.exists());
    }

    #[test]
    fn test_execute_no_names_writes_nothing() {
        let temp_dir = TempDir::new().expect("temp dir");
        let input = write_input(temp_dir.path(), "proxies:\n  - not a proxy\nproxy-groups:\n");
        let output = temp_dir.path().join("out.txt");

        let result = execute(&make_cli(input, output.clone()));
        assert!(matches!(
            result,
            Err(Error::Extract(ExtractError::NoNamesParsed))
        ));
        assert!(!output.exists());
    }

    #[test]
    fn test_execute_refuses_to_overwrite_input() {
        let temp_dir = TempDir::new().expect("temp dir");
        let input = write_input(temp_dir.path(), SAMPLE);

        let result = execute(&make_cli(input.clone(), input.clone()));
        assert!(matches!(
            result,
            Err(Error::Command(CommandError::InvalidArgument(_)))
        ));
        assert_eq!(std::fs::read_to_string(&input).expect("read input"), SAMPLE);
    }

    #[test]
    fn test_execute_unwritable_output() {
        let temp_dir = TempDir::new().expect("temp dir");
        let input = write_input(temp_dir.path(), SAMPLE);
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "x").expect("write blocker");

        let result = execute(&make_cli(input, blocker.join("out.txt")));
        assert!(matches!(
            result,
            Err(Error::Io(IoError::WriteFailed { .. }))
        ));
    }
}

/// Tests that run the compiled binary.
mod binary_tests {
    use super::{SAMPLE, SAMPLE_GROUPS};
    use assert_cmd::Command;
    use predicates::prelude::*;
    use tempfile::TempDir;

    fn bin() -> Command {
        let mut cmd = Command::cargo_bin("clash-groups").expect("binary built");
        cmd.env_remove("CLASH_GROUPS_BASE_DIR").env_remove("RUST_LOG");
        cmd
    }

    #[test]
    fn test_binary_success() {
        let temp_dir = TempDir::new().expect("temp dir");
        let input = temp_dir.path().join("keke.yaml");
        let output = temp_dir.path().join("groups.txt");
        std::fs::write(&input, SAMPLE).expect("write input");

        bin()
            .arg("-i")
            .arg(&input)
            .arg("-o")
            .arg(&output)
            .args(["-c", "2", "--prefix", "Group"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Generated proxy-groups written to:",
            ));

        assert_eq!(
            std::fs::read_to_string(&output).expect("read output"),
            SAMPLE_GROUPS
        );
    }

    #[test]
    fn test_binary_stdout() {
        let temp_dir = TempDir::new().expect("temp dir");
        std::fs::write(temp_dir.path().join("keke.yaml"), SAMPLE).expect("write input");

        bin()
            .arg("--base-dir")
            .arg(temp_dir.path())
            .args(["--stdout", "-c", "2", "--prefix", "Group"])
            .assert()
            .success()
            .stdout(format!("{SAMPLE_GROUPS}\n"));
    }

    #[test]
    fn test_binary_missing_section_exits_one() {
        let temp_dir = TempDir::new().expect("temp dir");
        let input = temp_dir.path().join("keke.yaml");
        std::fs::write(&input, "port: 7890\n").expect("write input");

        bin()
            .arg("-i")
            .arg(&input)
            .arg("-o")
            .arg(temp_dir.path().join("out.txt"))
            .assert()
            .code(1)
            .stderr(predicate::str::contains("could not find 'proxies:' section"));

        assert!(!temp_dir.path().join("out.txt").exists());
    }

    #[test]
    fn test_binary_missing_input_exits_one() {
        let temp_dir = TempDir::new().expect("temp dir");

        bin()
            .arg("--base-dir")
            .arg(temp_dir.path())
            .assert()
            .code(1)
            .stderr(predicate::str::contains("file not found"));
    }

    #[test]
    fn test_binary_json_error() {
        let temp_dir = TempDir::new().expect("temp dir");
        let input = temp_dir.path().join("keke.yaml");
        std::fs::write(&input, "proxies:\nproxy-groups:\n").expect("write input");

        bin()
            .arg("-i")
            .arg(&input)
            .args(["--stdout", "--format", "json"])
            .assert()
            .code(1)
            .stdout(predicate::str::contains("\"kind\": \"no_names_parsed\""));
    }

    #[test]
    fn test_binary_rejects_zero_chunk() {
        bin()
            .args(["-c", "0"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("chunk size must be at least 1"));
    }

    #[test]
    fn test_binary_rejects_non_numeric_chunk() {
        bin()
            .args(["-c", "abc"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("--chunk"));
    }

    #[test]
    fn test_binary_help_succeeds() {
        bin()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("--prefix"));
    }
}
