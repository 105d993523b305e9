// By-value counterpart of the self-returning containers: works for any type and hands back an owned value,
// which is what callbacks like `Iterator::fold` expect.

#[macro_export]
macro_rules! mutate_return {
    ($f: expr) => {
        |t, a0| $crate::TMutateReturnSelf::mutate_return(t, $f, a0)
    };
}

pub trait TMutateReturnSelf: Sized {
    fn mutate_return<A0, F: FnMut(&mut Self, A0)>(mut self, mut f: F, a0: A0) -> Self {
        f(&mut self, a0);
        self
    }
    /// Runs `f` (typically a chain of self-returning calls) on `self` and returns `self`.
    fn mutated(mut self, f: impl FnOnce(&mut Self) -> &mut Self) -> Self {
        f(&mut self);
        self
    }
}
impl<T: Sized> TMutateReturnSelf for T {}

#[test]
fn test_mutate_return() {
    let vecn = [1, 2, 3].into_iter()
        .fold(Vec::new(), mutate_return!(|vecn: &mut Vec<i32>, n| vecn.push(n*10)));
    assert_eq!(vecn, vec![10, 20, 30]);
    let str_greeting = String::from("hello").mutate_return(String::push_str, " world");
    assert_eq!(str_greeting, "hello world");
}

#[test]
fn test_mutated() {
    let list = crate::SRList::new().mutated(|list| list.append(1).append(2).reverse());
    assert_eq!(list.into_inner(), vec![2, 1]);
}
