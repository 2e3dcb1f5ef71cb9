use anyhow::Result;
use group_outcomes::{DataDirectory, OutcomeEngine, OutcomeError, Settings, TomlConfig};
use pretty_assertions::assert_eq;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_dataset(dir: &Path, groups: &str, matches: &str) -> Result<()> {
    std::fs::write(dir.join("groups.json"), groups)?;
    std::fs::write(dir.join("matches.json"), matches)?;
    Ok(())
}

fn plain_settings(root: &Path, dataset: &str) -> Settings {
    Settings {
        data_root: root.to_path_buf(),
        dataset: dataset.to_string(),
        colour: false,
        ..Settings::default()
    }
}

fn run(settings: &Settings) -> Result<(group_outcomes::RunSummary, String), OutcomeError> {
    let engine = OutcomeEngine::new(DataDirectory::new(settings.dataset_dir()));
    let mut out = Vec::new();
    let summary = engine.run(settings, &mut out)?;
    Ok((summary, String::from_utf8_lossy(&out).into_owned()))
}

#[test]
fn test_end_to_end_single_group() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let dataset = temp_dir.path().join("mini");
    std::fs::create_dir(&dataset)?;
    write_dataset(
        &dataset,
        r#"{"a": ["D", "C", "B", "A"]}"#,
        r#"[
            {"A": 1, "D": 0},
            {"B": 2, "C": 1},
            {"A": -1, "C": -1},
            {"B": -1, "D": -1}
        ]"#,
    )?;

    let settings = Settings {
        win_path: true,
        ..plain_settings(temp_dir.path(), "mini")
    };
    let (summary, output) = run(&settings)?;

    assert_eq!(summary.groups, 1);
    assert_eq!(summary.snapshots, 9);

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        &lines[..6],
        &[
            "",
            "GROUP A",
            "Matches:",
            "\tA vs. C",
            "\tB vs. D",
            "Possible Outcomes:",
        ]
    );
    assert_eq!(lines[6], "\tA beats C, B beats D");
    assert_eq!(
        lines[7],
        format!(
            "\t+{:>14} (6)     \t+{:>14} (6)     \t {:>14} (0)     \t {:>14} (0)     ",
            "A", "B", "C", "D"
        )
    );
    assert_eq!(lines.len(), 6 + 2 * 9);
    Ok(())
}

#[test]
fn test_shipped_dataset_after_two_matchdays() -> Result<()> {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data");
    let settings = plain_settings(&root, "qatar-2022");

    let (summary, output) = run(&settings)?;
    assert_eq!(summary.groups, 8);
    assert_eq!(summary.snapshots, 8 * 9);

    let headers: Vec<&str> = output.lines().filter(|l| l.starts_with("GROUP")).collect();
    assert_eq!(
        headers,
        vec!["GROUP A", "GROUP B", "GROUP C", "GROUP D", "GROUP E", "GROUP F", "GROUP G", "GROUP H"]
    );
    Ok(())
}

#[test]
fn test_shipped_dataset_group_with_full_names() -> Result<()> {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data");
    let settings = Settings {
        full_names: true,
        win_path: true,
        group: Some("c".to_string()),
        ..plain_settings(&root, "qatar-2022")
    };

    let (summary, output) = run(&settings)?;
    assert_eq!(summary.groups, 1);
    assert!(output.contains("\tPoland vs. Argentina\n"));
    assert!(output.contains("\tSaudi Arabia vs. Mexico\n"));
    assert!(output.contains("\tPoland beats Argentina, Saudi Arabia beats Mexico\n"));
    // POL 4 + 3 and KSA 3 + 3: Poland and Saudi Arabia both certain
    let first_table = output.lines().nth(7).unwrap_or_default();
    assert!(first_table.contains(&format!("+{:>14} (7)", "Poland")));
    assert!(first_table.contains(&format!("+{:>14} (6)", "Saudi Arabia")));
    Ok(())
}

#[test]
fn test_validation_failure_produces_no_output() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let dataset = temp_dir.path().join("broken");
    std::fs::create_dir(&dataset)?;
    write_dataset(
        &dataset,
        r#"{"A": ["QAT", "ECU", "SEN", "NED"]}"#,
        r#"[{"QAT": -1, "ECU": 2}]"#,
    )?;

    let settings = plain_settings(temp_dir.path(), "broken");
    let engine = OutcomeEngine::new(DataDirectory::new(settings.dataset_dir()));
    let mut out = Vec::new();
    let err = engine.run(&settings, &mut out).unwrap_err();

    assert!(matches!(err, OutcomeError::InconsistentScore { .. }));
    assert_eq!(err.exit_code(), 1);
    assert!(out.is_empty());
    Ok(())
}

#[test]
fn test_missing_dataset_is_a_system_error() {
    let temp_dir = TempDir::new().unwrap();
    let settings = plain_settings(temp_dir.path(), "nowhere");
    let err = run(&settings).unwrap_err();
    assert!(matches!(err, OutcomeError::IoError(_)));
    assert_eq!(err.exit_code(), 3);
}

#[test]
fn test_settings_file_drives_run() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let dataset = temp_dir.path().join("from-file");
    std::fs::create_dir(&dataset)?;
    write_dataset(
        &dataset,
        r#"{"B": ["W", "X", "Y", "Z"]}"#,
        r#"[{"W": 3, "X": 0}, {"Y": 1, "Z": 1}, {"W": -1, "Y": -1}]"#,
    )?;

    let config = TomlConfig::from_toml_str(&format!(
        "[data]\nroot = '{}'\ndataset = 'from-file'\n[display]\ncolour = false\n",
        temp_dir.path().display()
    ))?;
    let settings = Settings::from_toml(&config);
    let (summary, output) = run(&settings)?;

    assert_eq!(summary.snapshots, 3);
    // W 3, Y 1, Z 1, X 0 with W vs. Y open
    assert!(output.contains("\tW vs. Y\n"));
    Ok(())
}
