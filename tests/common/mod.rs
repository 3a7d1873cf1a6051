//! Deferred event loop for driving adapters the way an asynchronous API
//! would: completions are queued and run later, one at a time.

#![allow(dead_code)]

use std::{cell::RefCell, collections::VecDeque, rc::Rc};

type Task = Box<dyn FnOnce()>;

#[derive(Clone, Default)]
pub struct EventLoop {
    queue: Rc<RefCell<VecDeque<Task>>>,
}

impl EventLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `task` to run on a later turn of the loop.
    pub fn defer<F: FnOnce() + 'static>(&self, task: F) {
        self.queue.borrow_mut().push_back(Box::new(task));
    }

    /// Complete with `Ok(value)` on a later turn.
    pub fn succeed<A, E, F>(&self, value: A, done: F)
    where
        A: 'static,
        E: 'static,
        F: FnOnce(Result<A, E>) + 'static,
    {
        self.defer(move || done(Ok(value)));
    }

    /// Complete with `Err(err)` on a later turn.
    pub fn fail<A, E, F>(&self, err: E, done: F)
    where
        A: 'static,
        E: 'static,
        F: FnOnce(Result<A, E>) + 'static,
    {
        self.defer(move || done(Err(err)));
    }

    /// Run queued tasks, including ones they queue, until none are left.
    /// Returns the number of tasks run.
    pub fn run(&self) -> usize {
        let mut turns = 0;
        loop {
            let Some(task) = self.queue.borrow_mut().pop_front() else {
                return turns;
            };
            task();
            turns += 1;
        }
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
