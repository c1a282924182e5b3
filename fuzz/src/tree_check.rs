#![no_main]

use std::collections::BTreeMap;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use bart::AdaptiveRadixTree;

#[derive(Arbitrary, Debug)]
enum MapMethod {
    Get { key: Vec<u8> },
    Insert { key: Vec<u8>, val: u64 },
    Update { key: Vec<u8>, val: u64 },
    Delete { key: Vec<u8> },
}

fuzz_target!(|methods: Vec<MapMethod>| {
    let mut art = AdaptiveRadixTree::<u64>::new();
    let mut bt_map = BTreeMap::<Vec<u8>, u64>::new();

    for m in &methods {
        match m {
            MapMethod::Get { key } => {
                assert_eq!(art.get(key), bt_map.get(key));
            }
            MapMethod::Insert { key, val } => {
                let a_insert = art.insert(key, *val);
                let bt_insert = bt_map.insert(key.clone(), *val);
                assert_eq!(a_insert, bt_insert);
            }
            MapMethod::Update { key, val } => {
                let old_art = art.get_mut(key);
                let old_bt = bt_map.get_mut(key);
                assert_eq!(old_art.as_deref(), old_bt.as_deref());
                if let (Some(old_art), Some(old_bt)) = (old_art, old_bt) {
                    *old_art = *val;
                    *old_bt = *val;
                }
            }
            MapMethod::Delete { key } => {
                assert_eq!(art.remove(key), bt_map.remove(key));
            }
        }
        assert_eq!(art.len(), bt_map.len());
    }

    let mut art_iter = art.iter();
    for (k, expected_value) in bt_map.iter() {
        let entry = art_iter.next().expect("iteration ended early");
        assert_eq!(&entry.0, k);
        assert_eq!(entry.1, expected_value);
    }
    assert!(art_iter.next().is_none());
});
