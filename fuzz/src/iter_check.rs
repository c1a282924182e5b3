#![no_main]

use std::collections::BTreeMap;

use libfuzzer_sys::fuzz_target;

use bart::AdaptiveRadixTree;

// Lower-bound iteration must agree with BTreeMap's range at every probe.
fuzz_target!(|input: (Vec<Vec<u8>>, Vec<Vec<u8>>)| {
    let (keys, probes) = input;

    let mut art = AdaptiveRadixTree::<usize>::new();
    let mut bt_map = BTreeMap::<Vec<u8>, usize>::new();
    for (i, key) in keys.into_iter().enumerate() {
        art.insert(&key, i);
        bt_map.insert(key, i);
    }

    let art_all: Vec<_> = art.iter().map(|(k, v)| (k, *v)).collect();
    let bt_all: Vec<_> = bt_map.iter().map(|(k, v)| (k.clone(), *v)).collect();
    assert_eq!(art_all, bt_all);

    for probe in probes {
        let art_suffix: Vec<_> = art.iter_from(&probe).map(|(k, v)| (k, *v)).collect();
        let bt_suffix: Vec<_> = bt_map
            .range(probe.clone()..)
            .map(|(k, v)| (k.clone(), *v))
            .collect();
        assert_eq!(art_suffix, bt_suffix, "mismatch from probe {probe:?}");
    }
});
