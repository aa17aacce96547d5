use assert_cmd::Command;
use predicates::prelude::*;
use pyxelator_raster::{io, Canvas, Color, RasterBuffer};
use std::path::{Path, PathBuf};
use tempfile::tempdir;

/// Left half red, right half near-white.
fn write_target(dir: &Path, width: u32, height: u32) -> PathBuf {
    let mut raster = RasterBuffer::new(Canvas::new(width, height), Color::new(240, 240, 235)).unwrap();
    for y in 0..height {
        for x in 0..width / 2 {
            raster.set_pixel(x, y, Color::new(200, 30, 30));
        }
    }
    let path = dir.join("target.png");
    io::save_png(&raster, &path).unwrap();
    path
}

fn pyxelator() -> Command {
    let mut cmd = Command::cargo_bin("pyxelator").unwrap();
    cmd.env("RUST_LOG", "info");
    cmd
}

fn snapshots(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_init_writes_default_configuration() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("config.json");

    pyxelator()
        .arg("init")
        .arg("--output")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Population Size: 100"))
        .stdout(predicate::str::contains("Configuration written to"));

    let json = std::fs::read_to_string(&path).unwrap();
    assert!(json.contains("\"population_size\": 100"));
    assert!(json.contains("\"mutation_factor\": 600"));
    assert!(json.contains("\"dot_size\": 11"));
}

#[test]
fn test_init_params() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("config.json");

    pyxelator()
        .arg("init")
        .arg("-o")
        .arg(&path)
        .arg("--population-size")
        .arg("10")
        .arg("--generations")
        .arg("50")
        .arg("--renderer")
        .arg("scanline")
        .assert()
        .success()
        .stdout(predicate::str::contains("Population Size: 10"))
        .stdout(predicate::str::contains("Generations: 50"))
        .stdout(predicate::str::contains("Renderer: scanline"));
}

#[test]
fn test_init_refuses_to_overwrite() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("config.json");
    std::fs::write(&path, "{}").unwrap();

    pyxelator()
        .arg("init")
        .arg("-o")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    pyxelator()
        .arg("init")
        .arg("-o")
        .arg(&path)
        .arg("--force")
        .assert()
        .success();
}

#[test]
fn test_init_rejects_invalid_values() {
    let temp = tempdir().unwrap();
    pyxelator()
        .arg("init")
        .arg("-o")
        .arg(temp.path().join("config.json"))
        .arg("--mutation-factor")
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Mutation factor"));
}

#[test]
fn test_init_rejects_unknown_renderer() {
    pyxelator()
        .arg("init")
        .arg("--renderer")
        .arg("vector")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown render strategy"));
}

#[test]
fn test_inspect_reports_palette() {
    let temp = tempdir().unwrap();
    let image = write_target(temp.path(), 20, 10);

    pyxelator()
        .arg("inspect")
        .arg(&image)
        .assert()
        .success()
        .stdout(predicate::str::contains("Size: 20x10"))
        .stdout(predicate::str::contains("Distinct Colors: 2"))
        .stdout(predicate::str::contains("Background: light"))
        .stdout(predicate::str::contains("#c81e1e"));
}

#[test]
fn test_run_writes_snapshots() {
    let temp = tempdir().unwrap();
    let image = write_target(temp.path(), 24, 24);
    let out = temp.path().join("out");

    pyxelator()
        .arg("run")
        .arg(&image)
        .args(["--width", "24", "--height", "24", "--dot-size", "4"])
        .args(["-n", "6", "-g", "4", "--persist-every", "2", "--seed", "42"])
        .arg("--mutation-factor")
        .arg("10")
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Simulation complete!"))
        .stdout(predicate::str::contains("Final generation: 4"))
        .stdout(predicate::str::contains("Generations run: 5"))
        .stdout(predicate::str::contains("Snapshots written: 3"));

    let names = snapshots(&out);
    assert_eq!(names.len(), 3);
    assert!(names.iter().any(|n| n.starts_with("pyx_0gen_")));
    assert!(names.iter().any(|n| n.starts_with("pyx_2gen_")));
    assert!(names.iter().any(|n| n.starts_with("pyx_4gen_")));
    assert!(names.iter().all(|n| n.ends_with("score.png")));
}

#[test]
fn test_run_is_reproducible() {
    let temp = tempdir().unwrap();
    let image = write_target(temp.path(), 24, 24);

    let mut runs = Vec::new();
    for name in ["a", "b"] {
        let out = temp.path().join(name);
        pyxelator()
            .arg("run")
            .arg(&image)
            .args(["--width", "24", "--height", "24", "--dot-size", "4"])
            .args(["-n", "4", "-g", "3", "--persist-every", "3", "--seed", "7"])
            .arg("-o")
            .arg(&out)
            .assert()
            .success();
        runs.push(snapshots(&out));
    }
    assert_eq!(runs[0], runs[1]);
}

#[test]
fn test_run_with_config_file() {
    let temp = tempdir().unwrap();
    let image = write_target(temp.path(), 20, 20);
    let config = temp.path().join("config.json");
    let out = temp.path().join("out");

    pyxelator()
        .arg("init")
        .arg("-o")
        .arg(&config)
        .args(["--width", "20", "--height", "20", "--dot-size", "4"])
        .args(["-n", "4", "-g", "2", "--persist-every", "1"])
        .assert()
        .success();

    pyxelator()
        .arg("run")
        .arg(&image)
        .arg("--config")
        .arg(&config)
        .arg("--renderer")
        .arg("scanline")
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Renderer: scanline"))
        .stdout(predicate::str::contains("Snapshots written: 3"));
}

#[test]
fn test_run_rejects_wrong_dimensions() {
    let temp = tempdir().unwrap();
    let image = write_target(temp.path(), 30, 20);

    pyxelator()
        .arg("run")
        .arg(&image)
        .args(["--width", "20", "--height", "20", "--dot-size", "4", "-g", "1"])
        .arg("-o")
        .arg(temp.path().join("out"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("30x20"));
}

#[test]
fn test_run_missing_image() {
    let temp = tempdir().unwrap();
    pyxelator()
        .arg("run")
        .arg(temp.path().join("nope.png"))
        .arg("-o")
        .arg(temp.path().join("out"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load target image"));
}

#[test]
fn test_run_zero_generations_still_saves_best() {
    let temp = tempdir().unwrap();
    let image = write_target(temp.path(), 16, 16);
    let out = temp.path().join("out");

    pyxelator()
        .arg("run")
        .arg(&image)
        .args(["--width", "16", "--height", "16", "--dot-size", "4", "-n", "3", "-g", "0"])
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Final generation: 0"))
        .stdout(predicate::str::contains("Generations run: 1"));

    let names = snapshots(&out);
    assert_eq!(names.len(), 1);
    assert!(names[0].starts_with("pyx_0gen_"));
}

#[test]
fn test_threads_flag() {
    let temp = tempdir().unwrap();
    let image = write_target(temp.path(), 16, 16);

    pyxelator()
        .args(["-t", "2"])
        .arg("run")
        .arg(&image)
        .args(["--width", "16", "--height", "16", "--dot-size", "4", "-n", "4", "-g", "1"])
        .arg("-o")
        .arg(temp.path().join("out"))
        .assert()
        .success();
}
