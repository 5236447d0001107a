use clap::Parser;

use crate::config::{DemoConfig, DEFAULT_COUNT};
use crate::demo;

fn run_demo(config: &DemoConfig) -> Vec<String> {
    let mut out = Vec::new();
    demo::run(&mut out, config).unwrap();
    String::from_utf8(out).unwrap().lines().map(String::from).collect()
}

#[test]
fn test1_fixed_scenario() {
    let lines = run_demo(&DemoConfig { count: 20, seed: Some(5) });
    let expected = [
        "after init: length = 0",
        "inserted 1..=5 at the head: 5 4 3 2 1",
        "length = 5",
        "is empty: false",
        "after clear: length = 0",
        "is empty: true",
        "inserted 1..=10 at the tail: 1 2 3 4 5 6 7 8 9 10",
        "length = 10",
        "inserted 0 at the head: 0 1 2 3 4 5 6 7 8 9 10",
        "length = 11",
        "element 5 is 4",
        "value 3 is element 4",
        "value 4 is element 5",
        "deleting element 12 failed: position 12 is out of range for a list of length 11",
        "deleted element 11: 10",
        "elements: 0 1 2 3 4 5 6 7 8 9",
        "deleted element 5: 4",
        "elements: 0 1 2 3 5 6 7 8 9",
        "",
        "after clear: length = 0",
    ];
    assert_eq!(expected.to_vec(), lines[..expected.len()].to_vec());
    assert_eq!(24, lines.len());
    assert!(lines[20].starts_with("built by head insertion: "));
    assert_eq!("", lines[21]);
    assert_eq!("after clear: length = 0", lines[22]);
    assert!(lines[23].starts_with("built by tail insertion: "));
}

#[test]
fn test2_bulk_builds_mirror_each_other() {
    let lines = run_demo(&DemoConfig { count: 20, seed: Some(99) });
    let head = lines[20].strip_prefix("built by head insertion: ").unwrap();
    let tail = lines[23].strip_prefix("built by tail insertion: ").unwrap();

    let mut head: Vec<i32> = head.split(' ').map(|x| x.parse().unwrap()).collect();
    let tail: Vec<i32> = tail.split(' ').map(|x| x.parse().unwrap()).collect();
    assert_eq!(20, head.len());
    head.reverse();
    assert_eq!(head, tail);
}

#[test]
fn test3_seeded_runs_repeat() {
    let config = DemoConfig { count: 8, seed: Some(3) };
    assert_eq!(run_demo(&config), run_demo(&config));
}

#[test]
fn test4_config_from_args() {
    let config = DemoConfig::try_parse_from(["link_list"]).unwrap();
    assert_eq!(DemoConfig::default(), config);
    assert_eq!(DEFAULT_COUNT, config.count);

    let config = DemoConfig::try_parse_from(["link_list", "--count", "5", "--seed", "11"]).unwrap();
    assert_eq!(DemoConfig { count: 5, seed: Some(11) }, config);
    assert_eq!(11, config.resolve_seed());

    assert!(DemoConfig::try_parse_from(["link_list", "--count", "many"]).is_err());
}
