use assert_cmd::Command;

pub fn timelog_cmd() -> Command {
    let mut cmd = Command::cargo_bin("timelog").unwrap();
    cmd.env_remove("TIMELOG_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

pub const SAMPLE_LOG: &str = "\
2024.1.15 Mon.
工作 1.30 # A
工作 30min # B
运动 45min # running

2024.1.16 Tues.
工作 2 # A
";
