use srcontainers::{logging::init_logging_stderr, *};
use std::collections::{HashMap, VecDeque};

// Effects are single-expression callbacks that get a value and return the new one.
fn run_effects<T>(t: T, slcfn_effect: &[fn(T) -> T]) -> T {
    slcfn_effect.iter().fold(t, |t, fn_effect| fn_effect(t))
}

#[test]
fn test_logging_and_failures() {
    assert!(init_logging_stderr().is_ok());
    assert!(init_logging_stderr().is_err()); // logger can only be installed once
    assert_eq!(SRDeque::<u8>::new().pop_left(), Err(VContainerError::EmptyContainer));
    assert!(SRDeque::with_maxlen(1).append(1).append(2).get(0).is_ok_and(|n| *n==2));
}

#[test]
fn test_effects_on_all_containers() {
    let list = run_effects(SRList::new(), &[
        |list| list.mutated(|list| list.append(1).append(2)),
        |list| list.mutated(|list| list.extend([5, 3]).sort_reverse()),
    ]);
    assert_eq!(list.into_inner(), vec![5, 3, 2, 1]);

    let deque = run_effects(SRDeque::with_maxlen(3), &[
        |deque| deque.mutated(|deque| deque.extend("abcd".chars())),
        |deque| deque.mutated(|deque| deque.rotate(1).append_left('z')),
    ]);
    assert_eq!(deque.into_inner(), VecDeque::from(['z', 'd', 'b']));

    let dict = run_effects(SRDict::new(), &[
        |dict| dict.mutated(|dict| dict.update([("k".to_owned(), 1)])),
        |dict| dict.mutated(|dict| sr_set!(dict, m=2)),
    ]);
    assert_eq!(dict.into_inner(), HashMap::from([("k".to_owned(), 1), ("m".to_owned(), 2)]));
}

#[test]
fn test_fold_into_containers() {
    let dict = "hello world".chars()
        .filter(|chr| chr.is_alphabetic())
        .fold(SRDict::new(), mutate_return!(|dict: &mut SRDict<char, usize>, chr| {
            *dict.set_default(chr, 0) += 1;
        }));
    assert_eq!(dict.get(&'l'), Ok(&3));
    assert_eq!(dict.get(&'o'), Ok(&2));
    assert_eq!(dict.get(&' '), Err(VContainerError::KeyNotFound));

    let deque = (0..10).fold(SRDeque::with_maxlen(4), mutate_return!(|deque: &mut SRDeque<i32>, n| {
        deque.append(n);
    }));
    assert_eq!(deque.to_string(), "deque([6, 7, 8, 9], maxlen=4)");
}

#[test]
fn test_substitutes_for_plain_containers() {
    fn sum(slcn: &[i32]) -> i32 {
        slcn.iter().sum()
    }
    let mut list = SRList::from(vec![1, 2, 3]);
    assert_eq!(sum(&list), 6); // deref to Vec, then to slice
    assert_eq!(sum(list.set(0, 10).unwrap()), 15);
    assert_eq!((&list).into_iter().copied().max(), Some(10));
    let mut deque = SRDeque::from(VecDeque::from([1, 2]));
    assert!(deque.append(3).contains(&3));
    assert_eq!(deque.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
}
