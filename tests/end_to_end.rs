use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;

use u_roster::io::{load_config, load_prior, save_table, Orientation};
use u_roster::scheduler::{RosterKpi, UnfilledReason};

fn write_config(dir: &Path) -> std::path::PathBuf {
    let doc = json!({
        "week": ["Mon", "Tue", "Wed"],
        "people": [
            {"name": "Ana", "skills": ["first-aid"]},
            {"name": "Ben"},
            {"name": "Cho"}
        ],
        "tasks": [
            {"name": "Medic", "requires": ["first-aid"], "rule": "same-person-all-period"},
            {"name": "Dishes"}
        ]
    });
    let path = dir.join("info.json");
    std::fs::write(&path, doc.to_string()).unwrap();
    path
}

#[test]
fn test_two_periods_rotate_through_history() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config(&write_config(dir.path())).unwrap();
    let request = config.request();
    let roster = dir.path().join("weekly_schedule.csv");

    let err = load_prior(&roster).unwrap_err();
    assert!(err.is_missing_history());

    let mut rng = StdRng::seed_from_u64(7);
    let first = config.scheduler().schedule(&request, None, &mut rng);
    assert!(first.is_complete());
    for day in ["Mon", "Tue", "Wed"] {
        assert_eq!(first.table.lookup(day, "Medic"), Some("Ana"));
    }
    save_table(&first.table, config.output.orientation, &roster).unwrap();

    let prior = load_prior(&roster).unwrap();
    assert_eq!(prior.table.as_ref(), Some(&first.table));

    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let second = config.scheduler().schedule(&request, Some(&prior), &mut rng);
        assert!(second.is_complete());
        assert!(second.relaxed.is_empty());
        for day in ["Mon", "Tue", "Wed"] {
            assert_ne!(
                second.table.lookup(day, "Dishes"),
                first.table.lookup(day, "Dishes")
            );
        }
        let kpi = RosterKpi::calculate(&second, &request);
        assert_eq!(kpi.filled_slots, 6);
        assert!((kpi.fill_rate - 1.0).abs() < 1e-10);
    }
}

#[test]
fn test_task_rows_output_reads_back() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config(&write_config(dir.path())).unwrap();
    let request = config.request();
    let roster = dir.path().join("by_task.csv");

    let mut rng = StdRng::seed_from_u64(3);
    let outcome = config.scheduler().schedule(&request, None, &mut rng);
    save_table(&outcome.table, Orientation::TaskRows, &roster).unwrap();

    let text = std::fs::read_to_string(&roster).unwrap();
    assert!(text.starts_with("Task,Mon,Tue,Wed\n"));

    let prior = load_prior(&roster).unwrap();
    assert_eq!(prior.count("Ana"), outcome.table.count_for("Ana"));
    assert_eq!(prior.table.unwrap().filled_count(), 6);
}

#[test]
fn test_unstaffable_whole_period_task_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("info.json");
    let doc = json!({
        "week": ["Mon", "Tue"],
        "people": [{"name": "Solo", "skills": ["driving"]}],
        "tasks": [{"name": "Keys", "requires": ["locksmith"], "rule": "same-person-all-period"}]
    });
    std::fs::write(&path, doc.to_string()).unwrap();

    let config = load_config(&path).unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    let outcome = config.scheduler().schedule(&config.request(), None, &mut rng);

    assert_eq!(outcome.table.filled_count(), 0);
    assert_eq!(outcome.unfilled.len(), 2);
    assert!(outcome
        .unfilled
        .iter()
        .all(|u| u.reason == UnfilledReason::NoQualifiedForPeriod));
}
