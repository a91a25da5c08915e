use ordered_array::{search_first, search_last, OrderedArray, SearchResult};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Item {
    key: f64,
    value: f64,
}

fn item(key: f64, value: f64) -> Item {
    Item { key, value }
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn works() {
    init_logger();

    let by_key = OrderedArray::with_comparator(|i: &Item| i.key, f64::total_cmp);
    let mut array = (0..5).map(|i| item(i as f64, i as f64)).collect::<Vec<_>>();

    assert_eq!(by_key.search(&array, &2.0), SearchResult::Found(2));
    assert_eq!(by_key.search(&array, &2.5), SearchResult::Closest(3));

    by_key.insert(&mut array, item(2.5, 2.5));
    assert_eq!(
        array,
        vec![
            item(0., 0.),
            item(1., 1.),
            item(2., 2.),
            item(2.5, 2.5),
            item(3., 3.),
            item(4., 4.),
        ]
    );

    by_key.remove(&mut array, &3.0);
    assert_eq!(
        array,
        vec![
            item(0., 0.),
            item(1., 1.),
            item(2., 2.),
            item(2.5, 2.5),
            item(4., 4.),
        ]
    );

    // update-replace
    by_key
        .update(&mut array, &1.0, |i| {
            let i = i.expect("key 1.0 is present");
            Some(item(i.key, i.value * 2.))
        })
        .unwrap();
    assert_eq!(array[1], item(1., 2.));

    // update-insert
    by_key
        .update(&mut array, &1.5, |i| {
            assert!(i.is_none());
            Some(item(1.5, 3.))
        })
        .unwrap();
    by_key
        .update(&mut array, &0.5, |i| {
            assert!(i.is_none());
            Some(item(0.5, 1.))
        })
        .unwrap();
    assert_eq!(
        array,
        vec![
            item(0., 0.),
            item(0.5, 1.),
            item(1., 2.),
            item(1.5, 3.),
            item(2., 2.),
            item(2.5, 2.5),
            item(4., 4.),
        ]
    );

    // update-only-if-exists, present then absent
    by_key
        .update(&mut array, &0.5, |i| i.map(|i| item(i.key, i.value * 2.)))
        .unwrap();
    assert_eq!(array[1], item(0.5, 2.));

    let before = array.clone();
    let prev = by_key
        .update(&mut array, &0.25, |i| i.map(|i| item(i.key, i.value * 2.)))
        .unwrap();
    assert!(prev.is_none());
    assert_eq!(array, before);
}

fn test_log() -> Vec<(u32, u32)> {
    vec![(1, 1), (2, 1), (3, 1)]
}

#[test]
fn search_last_then_splice() {
    init_logger();

    let mut log = test_log();
    for (k, v) in [(2, 2), (2, 3), (3, 2)] {
        let idx = search_last(&log, &k, |e| e.0, Ord::cmp).found().unwrap();
        log.insert(idx + 1, (k, v));
    }

    assert_eq!(log, vec![(1, 1), (2, 1), (2, 2), (2, 3), (3, 1), (3, 2)]);
}

#[test]
fn search_first_then_splice() {
    init_logger();

    let mut log = test_log();
    for (k, v) in [(2, 2), (2, 3), (3, 2)] {
        let idx = search_first(&log, &k, |e| e.0, Ord::cmp).found().unwrap();
        log.insert(idx, (k, v));
    }

    assert_eq!(log, vec![(1, 1), (2, 3), (2, 2), (2, 1), (3, 2), (3, 1)]);
}

#[test]
fn insert_after_and_before() {
    init_logger();

    let by_key = OrderedArray::new(|e: &(u32, u32)| e.0);

    let mut after = test_log();
    let mut before = test_log();
    for e in [(2, 2), (2, 3), (3, 2)] {
        by_key.insert_after(&mut after, e);
        by_key.insert_before(&mut before, e);
    }

    assert_eq!(
        after,
        vec![(1, 1), (2, 1), (2, 2), (2, 3), (3, 1), (3, 2)]
    );
    assert_eq!(
        before,
        vec![(1, 1), (2, 3), (2, 2), (2, 1), (3, 2), (3, 1)]
    );
}

/// One binding works for elements that only share the key field's type.
#[test]
fn generic_element_types() {
    trait Keyed {
        fn key(&self) -> u32;
    }

    #[derive(Debug, PartialEq)]
    struct Named {
        key: u32,
        value: String,
    }

    #[derive(Debug, PartialEq)]
    struct Tagged {
        key: u32,
        id: String,
        value: u32,
    }

    impl Keyed for Named {
        fn key(&self) -> u32 {
            self.key
        }
    }

    impl Keyed for Tagged {
        fn key(&self) -> u32 {
            self.key
        }
    }

    fn binding<T: Keyed>() -> OrderedArray<T, u32, fn(&T) -> u32> {
        OrderedArray::new(T::key as fn(&T) -> u32)
    }

    let mut list_1 = vec![];
    let mut list_2 = vec![];
    binding::<Named>().insert(
        &mut list_1,
        Named {
            key: 1,
            value: String::new(),
        },
    );
    binding::<Tagged>().insert(
        &mut list_2,
        Tagged {
            key: 1,
            id: String::new(),
            value: 2,
        },
    );

    assert_eq!(list_1.len(), 1);
    assert_eq!(list_2[0].value, 2);
    assert!(list_2[0].id.is_empty());
    assert!(list_1[0].value.is_empty());
}
