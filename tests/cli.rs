use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn colorpick_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("colorpick").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd
}

fn write_config(config_home: &TempDir, contents: &str) {
    let dir = config_home.path().join("colorpick");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), contents).unwrap();
}

#[test]
fn colorpick_help_prints_usage() {
    let temp = TempDir::new().unwrap();
    colorpick_cmd(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Color format conversion and shade utility",
        ));
}

#[test]
fn prints_all_four_formats() {
    let temp = TempDir::new().unwrap();
    colorpick_cmd(&temp)
        .arg("red")
        .assert()
        .success()
        .stdout(
            "HEX  #FF0000\n\
             RGB  rgb(255, 0, 0)\n\
             HSL  hsl(0, 100%, 50%)\n\
             CMYK cmyk(0%, 100%, 100%, 0%)\n",
        );
}

#[test]
fn single_format_prints_bare_value() {
    let temp = TempDir::new().unwrap();
    colorpick_cmd(&temp)
        .args(["#000000", "--format", "cmyk"])
        .assert()
        .success()
        .stdout("cmyk(0%, 0%, 0%, 100%)\n");
}

#[test]
fn lighter_without_amount_uses_default() {
    let temp = TempDir::new().unwrap();
    colorpick_cmd(&temp)
        .args(["0,0,0", "-f", "hex", "--lighter"])
        .assert()
        .success()
        .stdout("#333333\n");
}

#[test]
fn darker_ignores_sign_of_amount() {
    let temp = TempDir::new().unwrap();
    colorpick_cmd(&temp)
        .args(["white", "-f", "rgb", "--darker=-0.5"])
        .assert()
        .success()
        .stdout("rgb(127, 127, 127)\n");
}

#[test]
fn lighter_and_darker_conflict() {
    let temp = TempDir::new().unwrap();
    colorpick_cmd(&temp)
        .args(["red", "--lighter=0.1", "--darker=0.1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn shades_prints_nine_swatches() {
    let temp = TempDir::new().unwrap();
    let output = colorpick_cmd(&temp)
        .args(["black", "-f", "hex", "--shades"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0], "#000000");
    assert_eq!(lines[1], "#000000");
    assert_eq!(lines[5], "#000000");
    assert_eq!(lines[9], "#666666");
}

#[test]
fn short_component_list_falls_back_to_placeholder() {
    let temp = TempDir::new().unwrap();
    write_config(&temp, "[picker]\nplaceholder = \"--\"\n");
    colorpick_cmd(&temp)
        .args(["0.2,0.4", "-f", "hex"])
        .assert()
        .success()
        .stdout("--\n");
}

#[test]
fn default_color_comes_from_config() {
    let temp = TempDir::new().unwrap();
    write_config(&temp, "[picker]\ndefault_color = [255, 128, 0]\n");
    colorpick_cmd(&temp)
        .args(["-f", "hex"])
        .assert()
        .success()
        .stdout("#FF8000\n");
}

#[test]
fn invalid_color_is_reported() {
    let temp = TempDir::new().unwrap();
    colorpick_cmd(&temp)
        .arg("#12345")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid color '#12345'"));
}

#[test]
fn init_config_writes_example_once() {
    let temp = TempDir::new().unwrap();
    colorpick_cmd(&temp)
        .arg("--init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created default config"));
    assert!(temp.path().join("colorpick/config.toml").exists());

    colorpick_cmd(&temp)
        .arg("--init-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn lighter_before_color_leaves_color_positional() {
    let temp = TempDir::new().unwrap();
    colorpick_cmd(&temp)
        .args(["--lighter", "black", "-f", "hex"])
        .assert()
        .success()
        .stdout("#333333\n");
}

#[test]
fn too_many_components_are_rejected() {
    let temp = TempDir::new().unwrap();
    colorpick_cmd(&temp)
        .args(["0.1,0.2,0.3,0.4,0.9", "-f", "hex"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected 3 or 4 components, got 5"));
}
