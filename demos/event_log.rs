//! Events keyed by timestamp. Several events may share a timestamp, and
//! `insert_after` keeps them in arrival order within it.

use ordered_array::OrderedArray;

#[derive(Debug, Clone)]
struct Event {
    at: u64,
    message: String,
}

fn main() {
    env_logger::init();

    let by_time = OrderedArray::new(|e: &Event| e.at);
    let mut log = Vec::new();

    let arrivals = [
        (20, "disk full"),
        (10, "boot"),
        (20, "retry write"),
        (15, "mount /data"),
        (20, "write failed"),
        (10, "network up"),
    ];

    for (at, message) in arrivals {
        by_time.insert_after(
            &mut log,
            Event {
                at,
                message: message.to_string(),
            },
        );
    }

    for e in &log {
        println!("{:>4} {}", e.at, e.message);
    }

    let run = by_time.equal_range(&log, &20);
    let messages = log[run]
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>();
    assert_eq!(messages, vec!["disk full", "retry write", "write failed"]);

    // newest first within a timestamp
    let mut recent_first = Vec::new();
    for e in log.iter().cloned() {
        by_time.insert_before(&mut recent_first, e);
    }
    let run = by_time.equal_range(&recent_first, &20);
    assert_eq!(recent_first[run.start].message, "write failed");
}
