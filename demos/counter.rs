//! Word counts kept sorted by word, maintained with `update` as an upsert.

use ordered_array::OrderedArray;

type Count = (&'static str, usize);

fn word(e: &Count) -> &'static str {
    e.0
}

fn bump(counts: &mut Vec<Count>, w: &'static str) {
    OrderedArray::new(word)
        .update(counts, &w, |e| match e {
            Some(&(w, n)) => Some((w, n + 1)),
            None => Some((w, 1)),
        })
        .unwrap();
}

fn drop_one(counts: &mut Vec<Count>, w: &'static str) {
    OrderedArray::new(word)
        .update(counts, &w, |e| match e {
            Some(&(w, n)) if n > 1 => Some((w, n - 1)),
            _ => None,
        })
        .unwrap();
}

fn main() {
    env_logger::init();

    let mut counts = Vec::new();

    let text = "the quick brown fox jumps over the lazy dog the end";
    for w in text.split_whitespace() {
        bump(&mut counts, w);
    }

    let by_word = OrderedArray::new(word);
    assert_eq!(by_word.get(&counts, &"the").map(|e| e.1), Some(3));

    drop_one(&mut counts, "the");
    drop_one(&mut counts, "fox");
    assert!(!by_word.contains_key(&counts, &"fox"));
    assert_eq!(by_word.get(&counts, &"the").map(|e| e.1), Some(2));

    for (w, n) in &counts {
        println!("{w:>6} {n}");
    }
}
