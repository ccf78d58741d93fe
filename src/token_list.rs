//! A doubly linked deque written without `unsafe`, as a proving ground
//! for the pointer-based containers' link discipline.
//!
//! Aliased mutability goes through branded cells ([`GhostCell`]), and
//! each node is kept alive by fractional ownership ([`StaticRc`]): its
//! two halves are held by whichever links point at it, a neighbour on
//! each side or the list's own end holders. Unlinking a node collects
//! both halves, joins them and recovers the box, so every ownership
//! transfer is checked at compile time.
//!
//! The list must be drained before it is dropped; the halves of any
//! remaining node leak otherwise.

use ghost_cell::{GhostCell, GhostToken};
use static_rc::StaticRc;
use std::ops::Deref;

type Half<T> = StaticRc<T, 1, 2>;
type Full<T> = StaticRc<T, 2, 2>;

type NodePtr<'id, T> = Half<GhostCell<'id, Node<'id, T>>>;

const FRONT: usize = 0;
const BACK: usize = 1;

// A node's slot 0 links away from the front (to its successor), slot 1
// away from the back (to its predecessor); the indices line up with the
// end that a freshly pushed node is attached at.
const NEXT: usize = 0;

struct Node<'id, T> {
    links: [Option<NodePtr<'id, T>>; 2],
    element: T,
}

impl<'id, T> Node<'id, T> {
    fn new(element: T) -> Self {
        Node {
            links: [None, None],
            element,
        }
    }
}

pub struct TokenList<'id, T> {
    ends: [Option<NodePtr<'id, T>>; 2],
}

impl<'id, T> Default for TokenList<'id, T> {
    fn default() -> Self {
        TokenList { ends: [None, None] }
    }
}

impl<'id, T> TokenList<'id, T> {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn is_empty(&self) -> bool {
        self.ends[FRONT].is_none()
    }

    pub fn push_front(&mut self, element: T, token: &mut GhostToken<'id>) {
        self.push_end(FRONT, element, token);
    }

    pub fn push_back(&mut self, element: T, token: &mut GhostToken<'id>) {
        self.push_end(BACK, element, token);
    }

    pub fn pop_front(&mut self, token: &mut GhostToken<'id>) -> Option<T> {
        self.pop_end(FRONT, token)
    }

    pub fn pop_back(&mut self, token: &mut GhostToken<'id>) -> Option<T> {
        self.pop_end(BACK, token)
    }

    /// Number of elements, counted by walking the forward links.
    pub fn len(&self, token: &GhostToken<'id>) -> usize {
        let mut count = 0;
        let mut current = self.ends[FRONT].as_ref();
        while let Some(node) = current {
            count += 1;
            current = node.deref().borrow(token).links[NEXT].as_ref();
        }
        count
    }

    /// Whether any element equals `value`, front-to-back walk.
    pub fn contains(&self, value: &T, token: &GhostToken<'id>) -> bool
    where
        T: PartialEq,
    {
        let mut current = self.ends[FRONT].as_ref();
        while let Some(node) = current {
            let node = node.deref().borrow(token);
            if node.element == *value {
                return true;
            }
            current = node.links[NEXT].as_ref();
        }
        false
    }

    /// Removes the first element equal to `value`, or returns `None`
    /// and leaves the list unchanged.
    ///
    /// Elements in front of the match are rotated out through the front
    /// and pushed back afterwards, so the removal costs O(n) element
    /// moves but never touches a link by hand.
    pub fn remove(&mut self, value: &T, token: &mut GhostToken<'id>) -> Option<T>
    where
        T: PartialEq,
    {
        let mut skipped = Vec::new();
        let mut removed = None;
        while let Some(element) = self.pop_front(token) {
            if element == *value {
                removed = Some(element);
                break;
            }
            skipped.push(element);
        }
        while let Some(element) = skipped.pop() {
            self.push_front(element, token);
        }
        removed
    }

    fn push_end(&mut self, end: usize, element: T, token: &mut GhostToken<'id>) {
        let other = 1 - end;
        let (kept, given) = Full::split(Full::new(GhostCell::new(Node::new(element))));
        match self.ends[end].take() {
            Some(neighbour) => {
                neighbour.deref().borrow_mut(token).links[other] = Some(given);
                kept.deref().borrow_mut(token).links[end] = Some(neighbour);
            }
            None => self.ends[other] = Some(given),
        }
        self.ends[end] = Some(kept);
    }

    fn pop_end(&mut self, end: usize, token: &mut GhostToken<'id>) -> Option<T> {
        let other = 1 - end;
        let kept = self.ends[end].take()?;
        let given = match kept.deref().borrow_mut(token).links[end].take() {
            Some(neighbour) => {
                let given = neighbour.deref().borrow_mut(token).links[other]
                    .take()
                    .unwrap();
                self.ends[end] = Some(neighbour);
                given
            }
            None => self.ends[other].take().unwrap(),
        };
        Some(Full::into_box(Full::join(kept, given)).into_inner().element)
    }
}

#[cfg(test)]
mod tests {
    use super::TokenList;
    use ghost_cell::GhostToken;

    #[test]
    fn push_and_pop_both_ends() {
        GhostToken::new(|mut token| {
            let mut list = TokenList::new();
            assert!(list.is_empty());
            list.push_back(1, &mut token);
            list.push_front(2, &mut token);
            assert!(!list.is_empty());
            assert_eq!(list.len(&token), 2);
            assert_eq!(list.pop_back(&mut token), Some(1));
            assert_eq!(list.pop_front(&mut token), Some(2));
            assert!(list.is_empty());
        })
    }

    #[test]
    fn preserves_order_front_to_back() {
        GhostToken::new(|mut token| {
            let mut list = TokenList::new();
            for value in 1..=4 {
                list.push_back(value, &mut token);
            }
            for expected in 1..=4 {
                assert_eq!(list.pop_front(&mut token), Some(expected));
            }
            assert_eq!(list.pop_front(&mut token), None);
        })
    }

    #[test]
    fn remove_first_match_keeps_order() {
        GhostToken::new(|mut token| {
            let mut list = TokenList::new();
            for value in 1..=4 {
                list.push_back(value, &mut token);
            }
            assert_eq!(list.remove(&3, &mut token), Some(3));
            assert_eq!(list.len(&token), 3);
            for expected in &[1, 2, 4] {
                assert_eq!(list.pop_front(&mut token), Some(*expected));
            }
        })
    }

    #[test]
    fn remove_missing_keeps_the_list_intact() {
        GhostToken::new(|mut token| {
            let mut list = TokenList::new();
            list.push_back(1, &mut token);
            list.push_back(2, &mut token);
            assert_eq!(list.remove(&9, &mut token), None);
            assert_eq!(list.len(&token), 2);
            assert_eq!(list.pop_front(&mut token), Some(1));
            assert_eq!(list.pop_front(&mut token), Some(2));
        })
    }

    #[test]
    fn contains_walks_the_whole_list() {
        GhostToken::new(|mut token| {
            let mut list = TokenList::new();
            for value in 1..=3 {
                list.push_back(value, &mut token);
            }
            assert!(list.contains(&1, &token));
            assert!(list.contains(&3, &token));
            assert!(!list.contains(&7, &token));
            while list.pop_front(&mut token).is_some() {}
        })
    }
}
