use std::process::{Command, Output};

fn cross_check(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cross-check"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .unwrap()
}

#[test]
fn sweep_prints_one_agreeing_record_per_instance() {
    let out = cross_check(&["--instances", "12", "--max-vertices", "5", "--seed", "3"]);
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).unwrap();
    let records: Vec<serde_json::Value> = stdout
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(records.len(), 12);
    for record in &records {
        let n = record["num_vertices"].as_u64().unwrap();
        assert!((1..=5).contains(&n));
        assert_eq!(record["backtracking"], record["brute_force"]);
        assert_eq!(record["bounded_recursive"], record["brute_force"]);
    }
}

#[test]
fn same_seed_same_output() {
    let args = ["--instances", "5", "--seed", "11"];
    assert_eq!(cross_check(&args).stdout, cross_check(&args).stdout);
}

#[test]
fn help_describes_the_options() {
    let out = cross_check(&["--help"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    for flag in ["--instances", "--max-vertices", "--seed"] {
        assert!(stdout.contains(flag), "{stdout}");
    }
}

#[test]
fn bad_arguments_are_rejected() {
    assert!(!cross_check(&["--instances", "many"]).status.success());
    assert!(!cross_check(&["--max-vertices", "0"]).status.success());
}
