//! Integration tests for rpmlock

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::path::Path;
    use tempfile::TempDir;

    /// rpmlock with an isolated config file inside `dir`
    fn rpmlock(dir: &Path) -> Command {
        let mut cmd = cargo_bin_cmd!("rpmlock");
        cmd.env("RPMLOCK_CONFIG", dir.join("config.toml"))
            .arg("--local-dir")
            .arg(dir);
        cmd
    }

    #[cfg(unix)]
    fn fake_tool(dir: &Path, script: &str) -> std::path::PathBuf {
        write_script(dir, "fake-rpm-lockfile-prototype", script)
    }

    /// Caching generator stand-in, invoked as `<manifest> --outfile <path>`
    #[cfg(unix)]
    fn fake_caching_tool(dir: &Path, script: &str) {
        let tool = write_script(dir, "fake-caching-rpm-lockfile-prototype", script);
        let config = format!("[lockfile]\ncaching_tool = \"{}\"\n", tool.display());
        std::fs::write(dir.join("config.toml"), config).unwrap();
    }

    #[cfg(unix)]
    fn write_script(dir: &Path, name: &str, script: &str) -> std::path::PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{}\n", script)).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[cfg(unix)]
    fn read(dir: &Path, name: &str) -> Option<String> {
        std::fs::read_to_string(dir.join(name)).ok()
    }

    #[cfg(unix)]
    fn in_place_config(dir: &Path, tool: &Path) {
        let config = format!(
            "[lockfile]\nstrategy = \"in-place\"\ntool = \"{}\"\n",
            tool.display()
        );
        std::fs::write(dir.join("config.toml"), config).unwrap();
    }

    #[test]
    fn help_displays() {
        cargo_bin_cmd!("rpmlock")
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("RPM lockfile maintenance"));
    }

    #[test]
    fn version_displays() {
        cargo_bin_cmd!("rpmlock")
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("rpmlock"));
    }

    #[test]
    fn info_lists_file_match() {
        let temp = TempDir::new().unwrap();
        rpmlock(temp.path())
            .arg("info")
            .assert()
            .success()
            .stdout(predicate::str::contains("supportsLockFileMaintenance"))
            .stdout(predicate::str::contains("rpm-lockfile"));
    }

    #[test]
    fn config_show() {
        let temp = TempDir::new().unwrap();
        rpmlock(temp.path())
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[lockfile]"));
    }

    #[test]
    fn config_path() {
        let temp = TempDir::new().unwrap();
        rpmlock(temp.path())
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));
    }

    #[test]
    fn lookup_reads_generated_lockfile() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("rpms.lock.tmp.yaml"),
            "arches:\n  - arch: x86_64\n    packages:\n      - name: bash\n        evr: 5.1.8-9.el9\n",
        )
        .unwrap();

        rpmlock(temp.path())
            .args(["lookup", "bash", "zsh"])
            .assert()
            .success()
            .stdout(predicate::str::contains("bash 5.1.8-9.el9"))
            .stdout(predicate::str::contains("zsh not found"));
    }

    #[test]
    fn extract_lists_packages() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("rpms.in.yaml"),
            "packages:\n  - bash\n  - name: grub2\n",
        )
        .unwrap();

        rpmlock(temp.path())
            .arg("extract")
            .assert()
            .success()
            .stdout(predicate::str::contains("bash"))
            .stdout(predicate::str::contains("grub2"));
    }

    #[cfg(unix)]
    #[test]
    fn update_writes_changed_lockfile() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("rpms.in.yaml"), "packages: [bash]\n").unwrap();
        std::fs::write(temp.path().join("rpms.lock.yaml"), "Current rpms.lock.yaml\n").unwrap();
        let tool = fake_tool(temp.path(), "echo 'New rpms.lock.yaml' > rpms.lock.yaml");
        in_place_config(temp.path(), &tool);

        rpmlock(temp.path())
            .arg("update")
            .assert()
            .success()
            .stdout(predicate::str::contains("rpms.lock.yaml"));

        let lockfile = std::fs::read_to_string(temp.path().join("rpms.lock.yaml")).unwrap();
        assert_eq!(lockfile, "New rpms.lock.yaml\n");
    }

    #[cfg(unix)]
    #[test]
    fn update_reports_unchanged_lockfile() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("rpms.in.yaml"), "packages: [bash]\n").unwrap();
        std::fs::write(temp.path().join("rpms.lock.yaml"), "same\n").unwrap();
        let tool = fake_tool(temp.path(), "echo same > rpms.lock.yaml");
        in_place_config(temp.path(), &tool);

        rpmlock(temp.path())
            .arg("update")
            .assert()
            .success()
            .stdout(predicate::str::contains("up to date"));
    }

    #[cfg(unix)]
    #[test]
    fn update_failure_shows_tool_output() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("rpms.in.yaml"), "packages: [nope]\n").unwrap();
        let tool = fake_tool(temp.path(), "echo 'No match for nope' >&2; exit 1");
        in_place_config(temp.path(), &tool);

        rpmlock(temp.path())
            .arg("update")
            .assert()
            .failure()
            .stderr(predicate::str::contains("No match for nope"))
            .stderr(predicate::str::contains("Failed to update rpms.lock.yaml"));
    }

    #[cfg(unix)]
    #[test]
    fn update_failure_keeps_in_place_lockfile() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("rpms.in.yaml"), "packages: [nope]\n").unwrap();
        std::fs::write(temp.path().join("rpms.lock.yaml"), "Current\n").unwrap();
        let tool = fake_tool(temp.path(), "echo 'No match for nope' >&2; exit 1");
        in_place_config(temp.path(), &tool);

        rpmlock(temp.path()).arg("update").assert().failure();

        assert_eq!(read(temp.path(), "rpms.lock.yaml").as_deref(), Some("Current\n"));
    }

    #[cfg(unix)]
    #[test]
    fn temp_output_writes_changed_lockfile() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("rpms.in.yaml"), "packages: [bash]\n").unwrap();
        std::fs::write(temp.path().join("rpms.lock.yaml"), "Current\n").unwrap();
        fake_caching_tool(
            temp.path(),
            "[ \"$1\" = rpms.in.yaml ] && [ \"$2\" = --outfile ] || exit 2\necho New > \"$3\"",
        );

        rpmlock(temp.path())
            .arg("update")
            .assert()
            .success()
            .stdout(predicate::str::contains("Updated"))
            .stdout(predicate::str::contains("rpms.lock.yaml"));

        assert_eq!(read(temp.path(), "rpms.lock.yaml").as_deref(), Some("New\n"));
        // The generator wrote only where --outfile pointed it
        assert_eq!(read(temp.path(), "rpms.lock.tmp.yaml").as_deref(), Some("New\n"));
    }

    #[cfg(unix)]
    #[test]
    fn temp_output_unchanged_keeps_lockfile() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("rpms.in.yaml"), "packages: [bash]\n").unwrap();
        std::fs::write(temp.path().join("rpms.lock.yaml"), "same\n").unwrap();
        fake_caching_tool(temp.path(), "echo same > \"$3\"");

        rpmlock(temp.path())
            .arg("update")
            .assert()
            .success()
            .stdout(predicate::str::contains("up to date"));

        assert_eq!(read(temp.path(), "rpms.lock.yaml").as_deref(), Some("same\n"));
    }

    #[cfg(unix)]
    #[test]
    fn temp_output_dry_run_keeps_lockfile() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("rpms.in.yaml"), "packages: [bash]\n").unwrap();
        std::fs::write(temp.path().join("rpms.lock.yaml"), "Current\n").unwrap();
        fake_caching_tool(temp.path(), "echo New > \"$3\"");

        rpmlock(temp.path())
            .args(["update", "--dry-run"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Would update"));

        assert_eq!(read(temp.path(), "rpms.lock.yaml").as_deref(), Some("Current\n"));
        assert_eq!(read(temp.path(), "rpms.lock.tmp.yaml").as_deref(), Some("New\n"));
    }

    #[cfg(unix)]
    #[test]
    fn temp_output_failure_keeps_lockfile() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("rpms.in.yaml"), "packages: [nope]\n").unwrap();
        std::fs::write(temp.path().join("rpms.lock.yaml"), "Current\n").unwrap();
        std::fs::write(temp.path().join("rpms.lock.tmp.yaml"), "Stale\n").unwrap();
        fake_caching_tool(temp.path(), "echo 'No match for nope' >&2; exit 1");

        rpmlock(temp.path())
            .arg("update")
            .assert()
            .failure()
            .stderr(predicate::str::contains("No match for nope"))
            .stderr(predicate::str::contains("Failed to update rpms.lock.yaml"));

        assert_eq!(read(temp.path(), "rpms.lock.yaml").as_deref(), Some("Current\n"));
        // Stale output from an earlier run is cleared before the generator runs
        assert!(read(temp.path(), "rpms.lock.tmp.yaml").is_none());
    }

    #[cfg(unix)]
    #[test]
    fn temp_output_missing_tool_keeps_lockfile() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("rpms.in.yaml"), "packages: [bash]\n").unwrap();
        std::fs::write(temp.path().join("rpms.lock.yaml"), "Current\n").unwrap();
        std::fs::write(
            temp.path().join("config.toml"),
            "[lockfile]\ncaching_tool = \"/nonexistent/caching-rpm-lockfile-prototype\"\n",
        )
        .unwrap();

        rpmlock(temp.path()).arg("update").assert().failure();

        assert_eq!(read(temp.path(), "rpms.lock.yaml").as_deref(), Some("Current\n"));
    }
}
