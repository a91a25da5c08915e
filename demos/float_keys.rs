//! `f64` has no total `Ord`, so the comparator is supplied explicitly.

use ordered_array::{OrderedArray, SearchResult};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Sample {
    key: f64,
    value: f64,
}

fn main() {
    env_logger::init();

    let by_key = OrderedArray::with_comparator(|s: &Sample| s.key, f64::total_cmp);
    let mut samples = (0..5)
        .map(|i| Sample {
            key: i as f64,
            value: i as f64,
        })
        .collect::<Vec<_>>();

    assert_eq!(by_key.search(&samples, &2.0), SearchResult::Found(2));
    assert_eq!(by_key.search(&samples, &2.5), SearchResult::Closest(3));

    by_key.insert(
        &mut samples,
        Sample {
            key: 2.5,
            value: 2.5,
        },
    );
    by_key.remove(&mut samples, &3.0);

    by_key
        .update(&mut samples, &1.0, |s| {
            s.map(|s| Sample {
                value: s.value * 2.0,
                ..*s
            })
        })
        .unwrap();

    // a callback that moves the element to another key is refused
    let err = by_key
        .update(&mut samples, &4.0, |s| s.map(|s| Sample { key: 9.0, ..*s }))
        .unwrap_err();
    println!("refused: {err}");

    for s in &samples {
        println!("{:>4} -> {}", s.key, s.value);
    }
}
