use std::ptr::NonNull;

/// A list node exposing its forward pointer, so chain-walking
/// algorithms can run over any of the node flavours.
pub(crate) trait ForwardLink: Sized {
    /// The successor of this node, or `None` at the end of the chain.
    fn forward(&self) -> Option<NonNull<Self>>;
}

/// Floyd's tortoise-and-hare cycle detection over a forward chain.
///
/// Two cursors start at `head`; one advances one node per step, the
/// other two. The chain is cyclic exactly when the cursors meet on the
/// same node, and acyclic when the fast cursor (or its immediate
/// successor) runs off the end. Either way the walk finishes in a
/// bounded number of steps: a self-loop on the very first node is
/// caught on the first iteration.
///
/// # Safety
///
/// `head` and every node reachable from it through [`ForwardLink`] must
/// stay valid to read for the duration of the call.
pub(crate) unsafe fn detect_cycle<N: ForwardLink>(head: Option<NonNull<N>>) -> bool {
    let start = match head {
        Some(start) => start,
        None => return false,
    };
    let mut slow = start;
    let mut fast = start;
    loop {
        let step = match fast.as_ref().forward() {
            Some(step) => step,
            None => return false,
        };
        fast = match step.as_ref().forward() {
            Some(next) => next,
            None => return false,
        };
        slow = match slow.as_ref().forward() {
            // The slow cursor trails the fast one and cannot fall off
            // the chain first.
            Some(next) => next,
            None => return false,
        };
        if slow == fast {
            return true;
        }
    }
}
