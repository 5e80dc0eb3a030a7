use std::collections::BTreeMap;

use itertools::Itertools;
use proptest::prelude::*;
use rstest::rstest;

use super::*;

fn trie_of(keys: &[&str]) -> Trie<String, usize> {
    let mut trie = Trie::new();
    for (index, &key) in keys.iter().enumerate() {
        trie.define(key.to_owned(), index).unwrap();
    }
    trie
}

/// Every leaf holds a value and no node is dead.
fn assert_pruned<K, V>(trie: &Trie<K, V>) {
    let stats = trie.stats();
    assert_eq!(stats.dead, 0, "{stats:?}");
    assert_eq!(stats.keys, trie.len(), "{stats:?}");
    assert!(stats.leaves <= stats.keys, "{stats:?}");
}

#[test]
fn single() {
    let mut trie = Trie::new();
    let key = "abcde".to_owned();
    let value = 42;
    trie.define(key.to_owned(), value).unwrap();
    assert!(trie.contains(&key));
    assert_eq!(trie.get(&key), Some(&value));
    assert_eq!(trie.len(), 1);
}

#[test]
fn multiple_unique() {
    let keys = vec!["abc", "def", "ghi"];
    let trie = trie_of(&keys);

    for (index, key) in keys.iter().enumerate() {
        assert_eq!(trie.get(*key), Some(&index));
    }
    assert_eq!(trie.len(), keys.len());
}

#[test]
fn multiple_overlapping() {
    let keys = vec!["abc", "abcd", "abcde"];
    let trie = trie_of(&keys);

    for (index, key) in keys.iter().enumerate() {
        assert_eq!(trie.get(*key), Some(&index));
    }
    assert!(!trie.contains("ab"));
    assert!(!trie.contains("abcdef"));
}

#[test]
fn card_scenario() {
    let mut trie = Trie::new();
    trie.define("cat".to_owned(), 1).unwrap();
    trie.define("car".to_owned(), 2).unwrap();
    trie.define("card".to_owned(), 3).unwrap();
    assert_eq!(trie.keys(), vec!["car", "card", "cat"]);
    assert_eq!(trie.len(), 3);

    assert_eq!(trie.delete("car"), Ok(Some(2)));
    assert!(!trie.contains("car"));
    assert!(trie.contains("card"));
    assert_eq!(trie.len(), 2);
    assert_pruned(&trie);

    assert_eq!(trie.delete("card"), Ok(Some(3)));
    assert!(trie.contains("cat"));
    assert_eq!(trie.keys(), vec!["cat"]);
    // "c" -> "a" -> "t" is all that is left
    assert_eq!(trie.stats().nodes, 3);
    assert_pruned(&trie);
}

#[test]
fn delete_last_key_empties_root() {
    let mut trie = trie_of(&["deep", "deeper", "deepest"]);
    for key in ["deepest", "deep", "deeper"] {
        trie.delete(key).unwrap();
        assert_pruned(&trie);
    }
    assert!(trie.is_empty());
    assert_eq!(trie.stats(), Stats::default());
    assert_eq!(trie, Trie::new());
}

#[test]
fn delete_keeps_prefix_with_value() {
    let mut trie = trie_of(&["in", "inn", "inner"]);
    trie.delete("inner").unwrap();
    assert_eq!(trie.keys(), vec!["in", "inn"]);
    assert_eq!(trie.stats().nodes, 3);
    assert_pruned(&trie);
}

#[rstest]
#[case::absent("dog")]
#[case::prefix_only("ca")]
#[case::past_end("cats")]
fn delete_undefined(#[case] key: &str) {
    let mut trie = trie_of(&["cat", "car"]);
    let before = trie.clone();
    assert_eq!(trie.delete(key), Err(Error::Undefined(key.as_bytes().to_vec())));
    assert_eq!(trie, before);
}

#[test]
fn delete_empty_key_is_ignored() {
    let mut trie = trie_of(&["a", "ab"]);
    let before = trie.clone();
    assert_eq!(trie.delete(""), Ok(None));
    assert_eq!(trie.len(), 2);
    assert_eq!(trie.stats(), before.stats());
    assert_eq!(trie, before);
}

#[test]
fn long_key_does_not_recurse() {
    let key = vec![b'a'; 30_000];
    let prefix = key[..15_000].to_vec();
    let mut trie: Trie<Vec<u8>, usize> = Trie::new();
    trie.define(key.clone(), 1).unwrap();
    trie.define(prefix.clone(), 2).unwrap();
    assert_eq!(trie.stats().depth, key.len());

    let copy = trie.clone();
    assert_eq!(copy, trie);
    assert_eq!(trie.keys(), vec![prefix.clone(), key.clone()]);
    assert_eq!(trie.values(), vec![&2, &1]);

    assert_eq!(trie.delete(&key), Ok(Some(1)));
    assert_eq!(trie.stats().nodes, prefix.len());
    assert_pruned(&trie);
    assert_ne!(copy, trie);
    drop(copy);
    drop(trie);
}

#[test]
fn define_twice_is_rejected() {
    let mut trie = trie_of(&["key"]);
    let err = trie.define("key".to_owned(), 7).unwrap_err();
    assert_eq!(err, Error::AlreadyDefined(b"key".to_vec()));
    assert_eq!(err.key(), b"key");
    assert_eq!(err.to_string(), "The key 'key' is already defined");
    assert_eq!(trie.get("key"), Some(&0));
    assert_eq!(trie.len(), 1);
}

#[test]
fn empty_key_is_ignored() {
    let mut trie = trie_of(&["a"]);
    assert_eq!(trie.define(String::new(), 9), Ok(()));
    assert_eq!(trie.insert(String::new(), 9), None);
    assert_eq!(trie.len(), 1);
    assert!(!trie.contains(""));
    assert_eq!(trie.get(""), None);
    assert!(trie.modify("", |value| value + 1).is_err());
}

#[test]
fn modify_applies_function() {
    let mut trie = trie_of(&["x", "xy"]);
    trie.modify("xy", |value| value * 10 + 5).unwrap();
    assert_eq!(trie["xy"], 15);
    assert_eq!(trie["x"], 0);
}

#[test]
fn modify_undefined_skips_function() {
    let mut trie = trie_of(&["xy"]);
    let mut called = false;
    let result = trie.modify("x", |value| {
        called = true;
        value
    });
    assert_eq!(result, Err(Error::Undefined(b"x".to_vec())));
    assert!(!called);
}

#[test]
fn modify_panic_drops_key() {
    let mut trie = trie_of(&["ab", "abcd", "b"]);
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        trie.modify("abcd", |_| panic!("update failed"))
    }));
    assert!(result.is_err());
    assert!(!trie.contains("abcd"));
    assert_eq!(trie.len(), 2);
    assert_eq!(trie.keys(), vec!["ab", "b"]);
    // "a" -> "b" and "b"
    assert_eq!(trie.stats().nodes, 3);
    assert_pruned(&trie);
}

#[test]
#[should_panic(expected = "The key 'nope' is not defined")]
fn index_undefined_panics() {
    let trie = trie_of(&["yes"]);
    let _value: usize = trie["nope"];
}

#[test]
fn insert_replaces() {
    let mut trie = Trie::new();
    assert_eq!(trie.insert("k".to_owned(), 1), None);
    assert_eq!(trie.insert("k".to_owned(), 2), Some(1));
    assert_eq!(trie.len(), 1);
    *trie.get_mut("k").unwrap() += 1;
    assert_eq!(trie["k"], 3);
}

#[test]
fn byte_keys_cover_whole_alphabet() {
    let keys = (0..=u8::MAX).map(|byte| vec![byte, u8::MAX - byte]).collect_vec();
    let trie: Trie<Vec<u8>, u8> = keys.iter().cloned().map(|key| (key.clone(), key[0])).collect();
    assert_eq!(trie.len(), 256);
    assert_eq!(trie.keys(), keys);
    assert_eq!(trie.values().into_iter().copied().collect_vec(), (0..=u8::MAX).collect_vec());
    assert!(trie.contains(&[0u8, 255][..]));
}

#[test]
fn iter_matches_keys_and_values() {
    let trie = trie_of(&["b", "a", "ab", "ba", "aa"]);
    let (keys, values): (Vec<String>, Vec<&usize>) = trie.iter().unzip();
    assert_eq!(keys, trie.keys());
    assert_eq!(values, trie.values());
    assert_eq!(keys, vec!["a", "aa", "ab", "b", "ba"]);
    assert_eq!(trie.iter().len(), 5);
}

#[test]
fn debug_lists_entries() {
    let trie = trie_of(&["b", "a"]);
    let debug = format!("{trie:?}");
    assert!(debug.ends_with(r#"{"a": 1, "b": 0}"#), "{debug}");
}

fn key_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(b"abc\x00\xff".to_vec()), 0..6)
}

proptest! {
    #[test]
    fn prop_define_then_get(key in key_strategy(), value: u32) {
        let mut trie: Trie<Vec<u8>, u32> = Trie::new();
        trie.define(key.clone(), value).unwrap();
        if key.is_empty() {
            prop_assert!(!trie.contains(&key));
            prop_assert_eq!(trie.len(), 0);
        } else {
            prop_assert!(trie.contains(&key));
            prop_assert_eq!(trie.get(&key), Some(&value));
        }
    }

    #[test]
    fn prop_matches_btreemap(ops in prop::collection::vec((any::<bool>(), key_strategy()), 0..64)) {
        let mut trie: Trie<Vec<u8>, usize> = Trie::new();
        let mut model = BTreeMap::new();

        for (index, (define, key)) in ops.into_iter().enumerate() {
            if define {
                if key.is_empty() || model.contains_key(&key) {
                    continue;
                }
                trie.define(key.clone(), index).unwrap();
                model.insert(key, index);
            } else if let Some(expected) = model.remove(&key) {
                prop_assert_eq!(trie.delete(&key), Ok(Some(expected)));
                prop_assert!(!trie.contains(&key));
            } else if key.is_empty() {
                prop_assert_eq!(trie.delete(&key), Ok(None));
            } else {
                prop_assert!(trie.delete(&key).is_err());
            }

            prop_assert_eq!(trie.len(), model.len());
            let stats = trie.stats();
            prop_assert_eq!(stats.dead, 0);
            prop_assert_eq!(stats.keys, model.len());
        }

        prop_assert_eq!(trie.keys(), model.keys().cloned().collect_vec());
        prop_assert_eq!(trie.values(), model.values().collect_vec());
        for key in model.keys() {
            prop_assert!(trie.contains(key));
        }
    }

    #[test]
    fn prop_keys_strictly_ascending(keys in prop::collection::vec(key_strategy(), 0..32)) {
        let trie: Trie<Vec<u8>, ()> = keys.into_iter().map(|key| (key, ())).collect();
        let keys = trie.keys();
        prop_assert_eq!(keys.len(), trie.len());
        prop_assert!(keys.iter().tuple_windows().all(|(a, b)| a < b));
    }
}
