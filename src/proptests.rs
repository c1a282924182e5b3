use std::collections::BTreeMap;

use proptest::prelude::*;
use proptest_derive::Arbitrary;

use crate::AdaptiveRadixTree;

/// Key generation biased toward the shapes that stress an ART: empty keys,
/// dense single bytes (wide fan-out), delimited strings and shared prefixes
/// (path compression splits and merges).
#[derive(Debug, Clone)]
struct Key(Vec<u8>);

impl Arbitrary for Key {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            Just(Key(vec![])),
            any::<u8>().prop_map(|b| Key(vec![b])),
            prop::collection::vec(any::<u8>(), 1..4).prop_map(Key),
            prop::collection::vec(any::<u8>(), 4..48).prop_map(Key),
            "[a-d]{1,6}/[a-d]{1,6}".prop_map(|s| Key(s.into_bytes())),
            "[a-d]{2,8}".prop_map(|prefix| {
                let mut key = prefix.into_bytes();
                key.extend_from_slice(b"/suffix");
                Key(key)
            }),
        ]
        .boxed()
    }
}

#[derive(Arbitrary, Debug, Clone)]
enum Action {
    Insert(Key, u64),
    Get(Key),
    Remove(Key),
}

#[derive(Default)]
struct Harness {
    tree: AdaptiveRadixTree<u64>,
    model: BTreeMap<Vec<u8>, u64>,
}

impl Harness {
    fn execute(&mut self, action: Action) {
        match action {
            Action::Insert(key, value) => {
                assert_eq!(
                    self.tree.insert(&key.0, value),
                    self.model.insert(key.0.clone(), value),
                    "insert mismatch for key {:?}",
                    key.0
                );
            }
            Action::Get(key) => {
                assert_eq!(
                    self.tree.get(&key.0),
                    self.model.get(&key.0),
                    "get mismatch for key {:?}",
                    key.0
                );
            }
            Action::Remove(key) => {
                assert_eq!(
                    self.tree.remove(&key.0),
                    self.model.remove(&key.0),
                    "remove mismatch for key {:?}",
                    key.0
                );
            }
        }
        assert_eq!(self.tree.len(), self.model.len());
        assert_eq!(self.tree.is_empty(), self.model.is_empty());
    }

    fn assert_same_entries(&self) {
        let tree: Vec<_> = self.tree.iter().map(|(k, v)| (k, *v)).collect();
        let model: Vec<_> = self.model.iter().map(|(k, v)| (k.clone(), *v)).collect();
        assert_eq!(tree, model);
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        failure_persistence: None,
        ..ProptestConfig::default()
    })]

    #[test]
    fn ops_match_btreemap(actions in prop::collection::vec(any::<Action>(), 1..128)) {
        let mut harness = Harness::default();
        for action in actions {
            harness.execute(action);
        }
        harness.assert_same_entries();
    }

    #[test]
    fn lower_bound_matches_btreemap(
        keys in prop::collection::vec(any::<Key>(), 1..64),
        probes in prop::collection::vec(any::<Key>(), 1..16),
    ) {
        let mut harness = Harness::default();
        for (i, key) in keys.into_iter().enumerate() {
            harness.execute(Action::Insert(key, i as u64));
        }
        for probe in probes {
            let tree: Vec<_> = harness.tree.iter_from(&probe.0).map(|(k, v)| (k, *v)).collect();
            let model: Vec<_> = harness
                .model
                .range(probe.0.clone()..)
                .map(|(k, v)| (k.clone(), *v))
                .collect();
            prop_assert_eq!(tree, model, "lower bound mismatch at {:?}", probe.0);
        }
    }

    #[test]
    fn drain_in_any_order_empties_the_tree(
        keys in prop::collection::vec(any::<Key>(), 1..64),
    ) {
        let mut harness = Harness::default();
        for (i, key) in keys.iter().enumerate() {
            harness.execute(Action::Insert(key.clone(), i as u64));
        }
        // Remove in reverse insertion order, which differs from key order.
        for key in keys.iter().rev() {
            harness.execute(Action::Remove(key.clone()));
        }
        prop_assert!(harness.tree.is_empty());
        prop_assert!(harness.tree.iter().next().is_none());
    }
}
