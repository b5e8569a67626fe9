//! Delegate dispatch.

/// A member of an [`Aggregate`].
///
/// `R` and `S` are the retrieval and storage capability traits of a
/// generated metadata module (usually `dyn MetadataRetrieve` and
/// `dyn MetadataStore`). A delegate may expose either view, both, or
/// neither.
pub trait Delegate<R: ?Sized, S: ?Sized> {
    /// The retrieval view, if this delegate can answer reads.
    fn as_retrieve(&self) -> Option<&R> {
        None
    }

    /// The storage view, if this delegate accepts writes.
    fn as_store(&mut self) -> Option<&mut S> {
        None
    }
}

/// An ordered, construction-time-fixed list of delegates.
///
/// Reads go to the first delegate that answers; writes go to every
/// delegate that accepts them, in registration order.
pub struct Aggregate<R: ?Sized, S: ?Sized> {
    delegates: Vec<Box<dyn Delegate<R, S>>>,
}

impl<R: ?Sized, S: ?Sized> Aggregate<R, S> {
    pub fn new(delegates: Vec<Box<dyn Delegate<R, S>>>) -> Self {
        Self { delegates }
    }

    pub fn len(&self) -> usize {
        self.delegates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.delegates.is_empty()
    }

    /// The delegate registered at `index`.
    pub fn get(&self, index: usize) -> Option<&dyn Delegate<R, S>> {
        self.delegates.get(index).map(|d| d.as_ref())
    }

    /// Number of delegates with a retrieval view.
    pub fn retrieve_count(&self) -> usize {
        self.delegates
            .iter()
            .filter(|d| d.as_retrieve().is_some())
            .count()
    }

    /// Ask each retrieval-capable delegate in order and return the first
    /// present answer.
    pub fn first<T>(&self, mut read: impl FnMut(&R) -> Option<T>) -> Option<T> {
        self.delegates
            .iter()
            .filter_map(|d| d.as_retrieve())
            .find_map(|r| read(r))
    }

    /// Apply a write to every storage-capable delegate in order.
    pub fn broadcast(&mut self, mut write: impl FnMut(&mut S)) {
        let mut reached = 0usize;
        for delegate in &mut self.delegates {
            if let Some(store) = delegate.as_store() {
                write(store);
                reached += 1;
            }
        }
        tracing::trace!(reached, total = self.delegates.len(), "broadcast write");
    }
}

impl<R: ?Sized, S: ?Sized> Default for Aggregate<R, S> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<R: ?Sized, S: ?Sized> std::fmt::Debug for Aggregate<R, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Aggregate")
            .field("delegates", &self.delegates.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    trait Read {
        fn value(&self) -> Option<i32>;
    }

    trait Write {
        fn put(&mut self, value: i32);
    }

    /// Test delegate with configurable roles.
    struct Node {
        name: &'static str,
        answer: Option<i32>,
        readable: bool,
        writable: bool,
        log: Rc<RefCell<Vec<(&'static str, i32)>>>,
    }

    impl Read for Node {
        fn value(&self) -> Option<i32> {
            self.answer
        }
    }

    impl Write for Node {
        fn put(&mut self, value: i32) {
            self.log.borrow_mut().push((self.name, value));
        }
    }

    impl Delegate<dyn Read, dyn Write> for Node {
        fn as_retrieve(&self) -> Option<&(dyn Read + 'static)> {
            if self.readable { Some(self) } else { None }
        }

        fn as_store(&mut self) -> Option<&mut (dyn Write + 'static)> {
            if self.writable { Some(self) } else { None }
        }
    }

    struct Inert;

    impl Delegate<dyn Read, dyn Write> for Inert {}

    fn node(
        name: &'static str,
        answer: Option<i32>,
        readable: bool,
        writable: bool,
        log: &Rc<RefCell<Vec<(&'static str, i32)>>>,
    ) -> Box<dyn Delegate<dyn Read, dyn Write>> {
        Box::new(Node {
            name,
            answer,
            readable,
            writable,
            log: Rc::clone(log),
        })
    }

    #[test]
    fn test_first_present_answer_wins() {
        let log = Rc::default();
        let aggregate = Aggregate::new(vec![
            node("a", None, true, true, &log),
            node("b", Some(2), true, true, &log),
            node("c", Some(3), true, true, &log),
        ]);
        assert_eq!(aggregate.first(|r| r.value()), Some(2));
    }

    #[test]
    fn test_zero_is_an_answer() {
        let log = Rc::default();
        let aggregate = Aggregate::new(vec![
            node("a", Some(0), true, true, &log),
            node("b", Some(5), true, true, &log),
        ]);
        assert_eq!(aggregate.first(|r| r.value()), Some(0));
    }

    #[test]
    fn test_first_skips_delegates_without_retrieval() {
        let log = Rc::default();
        let aggregate = Aggregate::new(vec![
            node("a", Some(1), false, true, &log),
            Box::new(Inert),
            node("c", Some(3), true, false, &log),
        ]);
        assert_eq!(aggregate.first(|r| r.value()), Some(3));
        assert_eq!(aggregate.retrieve_count(), 1);
    }

    #[test]
    fn test_first_absent_when_nothing_answers() {
        let log = Rc::default();
        let aggregate = Aggregate::new(vec![node("a", None, true, true, &log)]);
        assert_eq!(aggregate.first(|r| r.value()), None);

        let empty: Aggregate<dyn Read, dyn Write> = Aggregate::default();
        assert!(empty.is_empty());
        assert_eq!(empty.first(|r| r.value()), None);
    }

    #[test]
    fn test_broadcast_reaches_every_store_in_order() {
        let log = Rc::default();
        let mut aggregate = Aggregate::new(vec![
            node("a", None, true, true, &log),
            node("b", None, false, true, &log),
            node("skip", None, true, false, &log),
            node("c", None, true, true, &log),
        ]);
        aggregate.broadcast(|s| s.put(7));
        assert_eq!(*log.borrow(), [("a", 7), ("b", 7), ("c", 7)]);
    }

    #[test]
    fn test_get_exposes_registered_views() {
        let log = Rc::default();
        let aggregate = Aggregate::new(vec![
            node("a", Some(1), false, true, &log),
            node("b", Some(2), true, true, &log),
        ]);
        assert!(aggregate.get(0).is_some_and(|d| d.as_retrieve().is_none()));
        let second = aggregate.get(1).and_then(|d| d.as_retrieve());
        assert_eq!(second.and_then(|r| r.value()), Some(2));
        assert!(aggregate.get(2).is_none());
    }
}
