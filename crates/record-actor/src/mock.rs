//! # Mock Client
//!
//! [`MockClient<T>`] hands out a real [`RecordClient<T>`] whose requests are answered
//! from a queue of scripted expectations instead of a running [`RecordActor`](crate::RecordActor).
//! Use it to test an actor whose context holds the client of another record type,
//! or any code written against a domain client, without spawning the dependency.
//!
//! | | MockClient | Real actor |
//! |---|---|---|
//! | State | none, answers are scripted | real cache |
//! | Error injection | `return_err` | requires reaching the failing state |
//! | Use case | isolating a dependency | testing the actor itself or the whole board |
//!
//! Expectations are consumed in order. A request that does not match the next
//! expectation (wrong operation or wrong id) gets no answer, so the caller sees
//! [`FrameworkError::ActorDropped`], and the mismatch is reported by [`MockClient::verify`].
//!
//! ```rust,ignore
//! let mut products = MockClient::<Product>::new();
//! products.expect_get(ProductId::from("p-1")).return_ok(Some(burger));
//!
//! let (actor, items) = RecordActor::<OrderItem>::new(8);
//! tokio::spawn(actor.run(ProductClient::new(products.client())));
//! // ... upsert an item that references "p-1" ...
//! products.verify();
//! ```

use crate::client::RecordClient;
use crate::error::FrameworkError;
use crate::message::RecordRequest;
use crate::record::ActorRecord;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc;

/// A scripted answer to the next request.
enum Expectation<T: ActorRecord> {
    Upsert {
        response: Result<T, FrameworkError>,
    },
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Patch {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Remove {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

impl<T: ActorRecord> Expectation<T> {
    fn operation(&self) -> &'static str {
        match self {
            Expectation::Upsert { .. } => "upsert",
            Expectation::Get { .. } => "get",
            Expectation::List { .. } => "list",
            Expectation::Patch { .. } => "patch",
            Expectation::Remove { .. } => "remove",
            Expectation::Action { .. } => "action",
        }
    }
}

fn request_operation<T: ActorRecord>(request: &RecordRequest<T>) -> &'static str {
    match request {
        RecordRequest::Upsert { .. } => "upsert",
        RecordRequest::Get { .. } => "get",
        RecordRequest::List { .. } => "list",
        RecordRequest::Patch { .. } => "patch",
        RecordRequest::Remove { .. } => "remove",
        RecordRequest::Action { .. } => "action",
    }
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;
type Failures = Arc<Mutex<Vec<String>>>;

fn lock<V>(mutex: &Mutex<V>) -> MutexGuard<'_, V> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Answers with `response` when `actual` is the expected id, otherwise records a failure.
fn answer<T: ActorRecord, R>(
    failures: &Failures,
    operation: &str,
    expected: T::Id,
    actual: T::Id,
    respond_to: crate::message::Response<R>,
    response: Result<R, FrameworkError>,
) {
    if expected == actual {
        let _ = respond_to.send(response);
    } else {
        lock(failures).push(format!(
            "{operation}: expected id {expected}, got {actual}"
        ));
        drop(respond_to);
    }
}

/// A mock record client with expectation tracking.
pub struct MockClient<T: ActorRecord> {
    client: RecordClient<T>,
    expectations: Queue<T>,
    failures: Failures,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorRecord> MockClient<T> {
    /// Creates a mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<RecordRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let failures: Failures = Arc::new(Mutex::new(Vec::new()));
        let queue = expectations.clone();
        let seen = failures.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = lock(&queue).pop_front();
                match (request, expectation) {
                    (RecordRequest::Upsert { respond_to, .. }, Some(Expectation::Upsert { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (RecordRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (RecordRequest::Get { id, respond_to }, Some(Expectation::Get { id: expected, response })) => {
                        answer::<T, _>(&seen, "get", expected, id, respond_to, response);
                    }
                    (RecordRequest::Patch { id, respond_to, .. }, Some(Expectation::Patch { id: expected, response })) => {
                        answer::<T, _>(&seen, "patch", expected, id, respond_to, response);
                    }
                    (RecordRequest::Remove { id, respond_to }, Some(Expectation::Remove { id: expected, response })) => {
                        answer::<T, _>(&seen, "remove", expected, id, respond_to, response);
                    }
                    (RecordRequest::Action { id, respond_to, .. }, Some(Expectation::Action { id: expected, response })) => {
                        answer::<T, _>(&seen, "action", expected, id, respond_to, response);
                    }
                    (request, expectation) => {
                        let wanted = expectation.map_or("nothing", |e| e.operation());
                        lock(&seen).push(format!(
                            "unexpected {} request, expected {wanted}",
                            request_operation(&request)
                        ));
                    }
                }
            }
        });

        Self {
            client: RecordClient::new(sender),
            expectations,
            failures,
            _handle: handle,
        }
    }

    /// The client to hand to the code under test.
    pub fn client(&self) -> RecordClient<T> {
        self.client.clone()
    }

    pub fn expect_upsert(&mut self) -> UpsertExpectationBuilder<T> {
        UpsertExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    pub fn expect_list(&mut self) -> ListExpectationBuilder<T> {
        ListExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    pub fn expect_get(&mut self, id: T::Id) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    pub fn expect_patch(&mut self, id: T::Id) -> PatchExpectationBuilder<T> {
        PatchExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    pub fn expect_remove(&mut self, id: T::Id) -> RemoveExpectationBuilder<T> {
        RemoveExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    pub fn expect_action(&mut self, id: T::Id) -> ActionExpectationBuilder<T> {
        ActionExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Panics if a request did not match or an expectation was never consumed.
    pub fn verify(&self) {
        let failures = lock(&self.failures);
        if !failures.is_empty() {
            panic!("Mock received mismatched requests: {}", failures.join("; "));
        }
        let remaining = lock(&self.expectations).len();
        if remaining > 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

impl<T: ActorRecord> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `upsert` expectations.
pub struct UpsertExpectationBuilder<T: ActorRecord> {
    expectations: Queue<T>,
}

impl<T: ActorRecord> UpsertExpectationBuilder<T> {
    pub fn return_ok(self, stored: T) {
        lock(&self.expectations).push_back(Expectation::Upsert { response: Ok(stored) });
    }

    pub fn return_err(self, error: FrameworkError) {
        lock(&self.expectations).push_back(Expectation::Upsert { response: Err(error) });
    }
}

/// Builder for `list` expectations.
pub struct ListExpectationBuilder<T: ActorRecord> {
    expectations: Queue<T>,
}

impl<T: ActorRecord> ListExpectationBuilder<T> {
    pub fn return_ok(self, records: Vec<T>) {
        lock(&self.expectations).push_back(Expectation::List { response: Ok(records) });
    }

    pub fn return_err(self, error: FrameworkError) {
        lock(&self.expectations).push_back(Expectation::List { response: Err(error) });
    }
}

macro_rules! keyed_expectation_builder {
    ($(#[$doc:meta])* $builder:ident, $variant:ident, $ok:ty) => {
        $(#[$doc])*
        pub struct $builder<T: ActorRecord> {
            id: T::Id,
            expectations: Queue<T>,
        }

        impl<T: ActorRecord> $builder<T> {
            pub fn return_ok(self, value: $ok) {
                lock(&self.expectations).push_back(Expectation::$variant {
                    id: self.id,
                    response: Ok(value),
                });
            }

            pub fn return_err(self, error: FrameworkError) {
                lock(&self.expectations).push_back(Expectation::$variant {
                    id: self.id,
                    response: Err(error),
                });
            }
        }
    };
}

keyed_expectation_builder!(
    /// Builder for `get` expectations.
    GetExpectationBuilder, Get, Option<T>
);
keyed_expectation_builder!(
    /// Builder for `patch` expectations.
    PatchExpectationBuilder, Patch, T
);
keyed_expectation_builder!(
    /// Builder for `remove` expectations.
    RemoveExpectationBuilder, Remove, T
);
keyed_expectation_builder!(
    /// Builder for `action` expectations.
    ActionExpectationBuilder, Action, T::ActionResult
);
