use std::{fs, io::Write};

use tempfile::tempdir;

use healthsync_viz_cli::{
    ARCHITECTURE_FILE, Args, Command, FEATURES_FILE, JOURNEY_FILE, ROI_FILE, TECH_SPECS_FILE, run,
};

fn args_for(output_dir: &str) -> Args {
    Args {
        output_dir: output_dir.to_string(),
        dataset: None,
        config: None,
        log_level: "off".to_string(),
        command: None,
    }
}

#[test]
fn e2e_smoke_test_default_run_writes_all_outputs() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let out = temp_dir.path().to_string_lossy().to_string();

    run(&args_for(&out)).expect("Default run should succeed");

    for file in [
        ARCHITECTURE_FILE,
        JOURNEY_FILE,
        FEATURES_FILE,
        ROI_FILE,
        TECH_SPECS_FILE,
    ] {
        let path = temp_dir.path().join(file);
        assert!(path.exists(), "missing output file {file}");
    }

    let architecture = fs::read_to_string(temp_dir.path().join(ARCHITECTURE_FILE)).unwrap();
    assert!(architecture.starts_with("<svg"));
    assert!(architecture.contains("User Interface"));
    assert!(architecture.contains("Privacy Layer"));

    let journey = fs::read_to_string(temp_dir.path().join(JOURNEY_FILE)).unwrap();
    assert!(journey.starts_with("<svg"));
    assert!(journey.contains("HealthSync User Journey"));

    let features = fs::read_to_string(temp_dir.path().join(FEATURES_FILE)).unwrap();
    assert_eq!(
        features.lines().next().unwrap(),
        "Feature Category,Specific Feature,Implementation Status,User Benefit,Time Saved (minutes)"
    );
    // Header plus the 17 feature rows.
    assert_eq!(features.lines().count(), 18);
}

#[test]
fn e2e_smoke_test_single_command_writes_only_its_output() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let mut args = args_for(&temp_dir.path().to_string_lossy());
    args.command = Some(Command::Journey);

    run(&args).expect("Journey run should succeed");

    assert!(temp_dir.path().join(JOURNEY_FILE).exists());
    assert!(!temp_dir.path().join(ARCHITECTURE_FILE).exists());
    assert!(!temp_dir.path().join(FEATURES_FILE).exists());
}

#[test]
fn e2e_smoke_test_rerun_overwrites_outputs() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let args = args_for(&temp_dir.path().to_string_lossy());

    run(&args).expect("First run should succeed");
    let first = fs::read_to_string(temp_dir.path().join(ARCHITECTURE_FILE)).unwrap();

    run(&args).expect("Second run should succeed");
    let second = fs::read_to_string(temp_dir.path().join(ARCHITECTURE_FILE)).unwrap();

    assert_eq!(first, second);
}

#[test]
fn e2e_smoke_test_invalid_dataset_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    // A dataset whose only connection refers to an undefined node.
    let mut dataset_file = tempfile::NamedTempFile::new().unwrap();
    write!(
        dataset_file,
        r##"
[architecture]
title = "Broken"

[[architecture.components]]
name = "Only Node"
pos = [0.5, 0.5]
category = "frontend"

[[architecture.connections]]
source = "Only Node"
target = "Ghost"

[architecture.palette]
frontend = "#1565C0"

[architecture.overlay]
label = "Layer"
sublabel = "X"
marker_color = "#D32F2F"
region_fill = "rgba(211, 47, 47, 0.05)"
region_stroke = "rgba(211, 47, 47, 0.3)"

[journey]
title = "Journey"

[[journey.steps]]
id = 1
title = "Start"
display_title = "Start"
description = "d"
kind = "start"
time = "1 minute"

[journey.palette]
start = "#1FB8CD"

[reports]
features = []
roi = []
tech_specs = []
"##
    )
    .unwrap();

    let mut args = args_for(&temp_dir.path().to_string_lossy());
    args.dataset = Some(dataset_file.path().to_string_lossy().to_string());
    args.command = Some(Command::Architecture);

    let err = run(&args).expect_err("Undefined connection endpoint must fail");
    assert!(err.to_string().contains("Only Node -> Ghost"), "got: {err}");
}

#[test]
fn e2e_smoke_test_valid_toml_dataset_is_rendered() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let mut dataset_file = tempfile::NamedTempFile::new().unwrap();
    write!(
        dataset_file,
        r##"
[architecture]
title = "Tiny System"

[[architecture.components]]
name = "Client"
pos = [0.1, 0.5]
category = "frontend"

[[architecture.components]]
name = "Server"
pos = [0.9, 0.5]
category = "backend"

[[architecture.connections]]
source = "Client"
target = "Server"

[architecture.palette]
frontend = "#1565C0"
backend = "#2E7D32"

[architecture.overlay]
label = "Secure Zone"
sublabel = "TLS"
marker_color = "#D32F2F"
region_fill = "rgba(211, 47, 47, 0.05)"
region_stroke = "rgba(211, 47, 47, 0.3)"

[journey]
title = "Tiny Journey"

[[journey.steps]]
id = 1
title = "Open"
display_title = "Open"
description = "d"
kind = "start"
time = "1 minute"

[[journey.steps]]
id = 2
title = "Done"
display_title = "Done"
description = "d"
kind = "end"
time = "1 minute"

[journey.palette]
start = "#1FB8CD"
end = "#1FB8CD"

[reports]
features = []
roi = []
tech_specs = []
"##
    )
    .unwrap();

    let mut args = args_for(&temp_dir.path().to_string_lossy());
    args.dataset = Some(dataset_file.path().to_string_lossy().to_string());

    run(&args).expect("Tiny dataset should render");

    let architecture = fs::read_to_string(temp_dir.path().join(ARCHITECTURE_FILE)).unwrap();
    assert!(architecture.contains("Tiny System"));
    assert!(architecture.contains("Client"));
    assert!(architecture.contains("Secure Zone"));
}
