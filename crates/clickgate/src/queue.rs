use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// A unit of work deferred to a later turn of the UI thread.
pub type Task = Box<dyn FnOnce()>;

/// The host toolkit's "run this on the UI thread later" primitive.
pub trait UiQueue {
    fn post(&self, task: Task);
}

impl<T: UiQueue + ?Sized> UiQueue for Rc<T> {
    fn post(&self, task: Task) {
        (**self).post(task)
    }
}

/// A FIFO of deferred tasks, drained once per frame by whoever owns the
/// event loop.
#[derive(Default)]
pub struct FrameQueue {
    pending: RefCell<VecDeque<Task>>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run every task that was queued before this call. Tasks posted while
    /// draining are left for the next call. Returns the number of tasks run.
    pub fn run_pending(&self) -> usize {
        let batch = std::mem::take(&mut *self.pending.borrow_mut());
        let count = batch.len();
        for task in batch {
            task();
        }
        count
    }

    pub fn len(&self) -> usize {
        self.pending.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.borrow().is_empty()
    }
}

impl UiQueue for FrameQueue {
    fn post(&self, task: Task) {
        self.pending.borrow_mut().push_back(task);
    }
}

impl std::fmt::Debug for FrameQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameQueue")
            .field("pending", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn runs_in_fifo_order() {
        let queue = FrameQueue::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        for i in 0..3 {
            let order = order.clone();
            queue.post(Box::new(move || order.borrow_mut().push(i)));
        }

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.run_pending(), 3);
        assert!(queue.is_empty());
        assert_eq!(*order.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn tasks_posted_while_draining_wait_a_turn() {
        let queue = Rc::new(FrameQueue::new());
        let ran = Rc::new(Cell::new(0));

        {
            let inner_queue = queue.clone();
            let ran = ran.clone();
            queue.post(Box::new(move || {
                ran.set(ran.get() + 1);
                let ran = ran.clone();
                inner_queue.post(Box::new(move || ran.set(ran.get() + 10)));
            }));
        }

        assert_eq!(queue.run_pending(), 1);
        assert_eq!(ran.get(), 1);
        assert_eq!(queue.len(), 1);

        assert_eq!(queue.run_pending(), 1);
        assert_eq!(ran.get(), 11);
        assert_eq!(queue.run_pending(), 0);
    }
}
