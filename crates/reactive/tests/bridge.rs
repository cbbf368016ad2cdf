//! Integration tests for the stream bridge, driven through a scripted
//! client that plays the role of the underlying GraphQL client.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use rivulet_client::{CancelHandle, Client, DispatchQueue, OneShotCallback, WatchCallback};
use rivulet_core::{
    CachePolicy, Error, GraphQlError, JsonObject, Operation, Response, TransportError, Value,
};
use rivulet_reactive::ReactiveClient;

type RawOutcome = (Option<Response>, Option<TransportError>);

/// A client whose one-shot replies are scripted ahead of time. Calls with no
/// scripted reply hold their callback so the test can fire it (or never).
#[derive(Default)]
struct ScriptedClient {
    replies: RefCell<VecDeque<RawOutcome>>,
    held_one_shot: RefCell<Option<OneShotCallback>>,
    held_watch: RefCell<Option<WatchCallback>>,
    fetches: Cell<usize>,
    performs: Cell<usize>,
    last_policy: Cell<Option<CachePolicy>>,
    cancels: Rc<Cell<usize>>,
}

impl ScriptedClient {
    fn script(&self, response: Option<Response>, error: Option<TransportError>) {
        self.replies.borrow_mut().push_back((response, error));
    }

    fn cancel_handle(&self) -> CancelHandle {
        let cancels = self.cancels.clone();
        CancelHandle::new(move || cancels.set(cancels.get() + 1))
    }

    fn answer_one_shot(&self, queue: DispatchQueue, mut callback: OneShotCallback) {
        if let Some((response, error)) = self.replies.borrow_mut().pop_front() {
            queue.dispatch(move || callback(response, error));
        } else {
            *self.held_one_shot.borrow_mut() = Some(callback);
        }
    }

    fn fire_one_shot(&self, response: Option<Response>, error: Option<TransportError>) {
        let mut slot = self.held_one_shot.borrow_mut();
        let callback = slot.as_mut().expect("one-shot callback held");
        callback(response, error);
    }

    fn fire_watch(&self, response: Option<Response>, error: Option<TransportError>) {
        let mut slot = self.held_watch.borrow_mut();
        let callback = slot.as_mut().expect("watch callback held");
        callback(response, error);
    }
}

impl Client for ScriptedClient {
    fn fetch(
        &self,
        _operation: Operation,
        policy: CachePolicy,
        queue: DispatchQueue,
        callback: OneShotCallback,
    ) -> CancelHandle {
        self.fetches.set(self.fetches.get() + 1);
        self.last_policy.set(Some(policy));
        self.answer_one_shot(queue, callback);
        self.cancel_handle()
    }

    fn watch(
        &self,
        _operation: Operation,
        policy: CachePolicy,
        _queue: DispatchQueue,
        callback: WatchCallback,
    ) -> CancelHandle {
        self.last_policy.set(Some(policy));
        *self.held_watch.borrow_mut() = Some(callback);
        self.cancel_handle()
    }

    fn perform(
        &self,
        _operation: Operation,
        queue: DispatchQueue,
        callback: OneShotCallback,
    ) -> CancelHandle {
        self.performs.set(self.performs.get() + 1);
        self.answer_one_shot(queue, callback);
        self.cancel_handle()
    }
}

fn object(fields: &[(&str, Value)]) -> Value {
    let mut obj = JsonObject::new();
    for (key, value) in fields {
        obj.insert(*key, value.clone());
    }
    Value::Object(obj)
}

fn hero_query() -> Operation {
    Operation::query("Hero", "query Hero { hero { name } }")
}

#[test]
fn fetch_resolves_once_with_network_data() {
    // Cache empty under cache-else-fetch; the network round succeeds.
    let client = ScriptedClient::default();
    client.script(
        Some(Response::with_data(object(&[("name", Value::from("A"))]))),
        None,
    );
    let cancels = client.cancels.clone();
    let reactive = ReactiveClient::new(client);

    let events = Rc::new(RefCell::new(Vec::new()));
    let events_clone = events.clone();
    let stream = reactive.fetch(
        hero_query(),
        CachePolicy::CacheElseFetch,
        DispatchQueue::Immediate,
        move |outcome| events_clone.borrow_mut().push(outcome),
    );

    assert!(stream.is_settled());
    assert_eq!(
        *events.borrow(),
        [Ok(Some(object(&[("name", Value::from("A"))])))]
    );
    assert_eq!(
        reactive.client().last_policy.get(),
        Some(CachePolicy::CacheElseFetch)
    );
    // The registration was released when the stream finalized, and disposal
    // of the handle afterwards does not release it again.
    assert_eq!(cancels.get(), 1);
    drop(stream);
    assert_eq!(cancels.get(), 1);
}

#[test]
fn fetch_disposed_before_resolution_cancels_and_stays_silent() {
    let client = ScriptedClient::default();
    let cancels = client.cancels.clone();
    let reactive = ReactiveClient::new(client);

    let events = Rc::new(RefCell::new(Vec::new()));
    let events_clone = events.clone();
    let stream = reactive.fetch(
        hero_query(),
        CachePolicy::FetchIgnoringCache,
        DispatchQueue::Immediate,
        move |outcome| events_clone.borrow_mut().push(outcome),
    );

    assert!(!stream.is_settled());
    stream.dispose();
    assert_eq!(cancels.get(), 1);

    // The in-flight work reports anyway; nothing reaches the observer.
    reactive
        .client()
        .fire_one_shot(Some(Response::with_data(Value::from(1))), None);
    assert!(events.borrow().is_empty());
    assert_eq!(cancels.get(), 1);
}

#[test]
fn perform_surfaces_application_errors_in_order() {
    let client = ScriptedClient::default();
    client.script(
        Some(Response {
            data: None,
            errors: vec![GraphQlError::new("E1"), GraphQlError::new("E2")],
        }),
        None,
    );
    let reactive = ReactiveClient::new(client);

    let events = Rc::new(RefCell::new(Vec::new()));
    let events_clone = events.clone();
    let _stream = reactive.perform(
        Operation::mutation("AddReview", "mutation AddReview { .. }"),
        DispatchQueue::Immediate,
        move |outcome| events_clone.borrow_mut().push(outcome),
    );

    let events = events.borrow();
    assert_eq!(events.len(), 1);
    match &events[0] {
        Err(Error::GraphQl { errors }) => {
            let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
            assert_eq!(messages, ["E1", "E2"]);
        }
        other => panic!("Expected GraphQL failure, got {:?}", other),
    }
}

#[test]
fn watch_emits_values_then_terminates_on_transport_failure() {
    let client = ScriptedClient::default();
    let cancels = client.cancels.clone();
    let reactive = ReactiveClient::new(client);

    let values = Rc::new(RefCell::new(Vec::new()));
    let failures = Rc::new(RefCell::new(Vec::new()));
    let values_clone = values.clone();
    let failures_clone = failures.clone();

    let stream = reactive.watch(
        hero_query(),
        CachePolicy::CacheElseFetch,
        DispatchQueue::Immediate,
        move |data| values_clone.borrow_mut().push(data),
        move |failure| failures_clone.borrow_mut().push(failure),
    );

    let fire_value = |v: i64| {
        reactive
            .client()
            .fire_watch(Some(Response::with_data(object(&[("v", Value::from(v))]))), None);
    };

    fire_value(1);
    fire_value(2);
    reactive
        .client()
        .fire_watch(None, Some(TransportError::new("disconnected")));
    // No fourth event: the stream is terminated.
    fire_value(3);

    assert_eq!(
        *values.borrow(),
        [
            Some(object(&[("v", Value::from(1))])),
            Some(object(&[("v", Value::from(2))])),
        ]
    );
    assert_eq!(failures.borrow().len(), 1);
    match &failures.borrow()[0] {
        Error::Transport(cause) => assert_eq!(cause.message(), "disconnected"),
        other => panic!("Expected transport failure, got {:?}", other),
    }
    assert!(stream.is_terminated());

    // Disposal releases the registration exactly once.
    drop(stream);
    assert_eq!(cancels.get(), 1);
}

#[test]
fn watch_unsubscribe_stops_emissions() {
    let client = ScriptedClient::default();
    let cancels = client.cancels.clone();
    let reactive = ReactiveClient::new(client);

    let values = Rc::new(RefCell::new(Vec::new()));
    let values_clone = values.clone();

    let stream = reactive.watch(
        hero_query(),
        CachePolicy::CacheAndFetch,
        DispatchQueue::Immediate,
        move |data| values_clone.borrow_mut().push(data),
        |failure| panic!("no failure expected, got {}", failure),
    );

    reactive
        .client()
        .fire_watch(Some(Response::with_data(Value::from(1))), None);
    stream.dispose();
    reactive
        .client()
        .fire_watch(Some(Response::with_data(Value::from(2))), None);

    assert_eq!(values.borrow().len(), 1);
    assert_eq!(cancels.get(), 1);

    stream.dispose();
    drop(stream);
    assert_eq!(cancels.get(), 1);
}

#[test]
fn cloned_facade_shares_one_client() {
    let client = ScriptedClient::default();
    client.script(Some(Response::new(None)), None);
    client.script(Some(Response::new(None)), None);
    let reactive = ReactiveClient::new(client);
    let cloned = reactive.clone();

    let _a = reactive.fetch(
        hero_query(),
        CachePolicy::default(),
        DispatchQueue::Immediate,
        |_| {},
    );
    let _b = cloned.fetch(
        hero_query(),
        CachePolicy::default(),
        DispatchQueue::Immediate,
        |_| {},
    );

    assert_eq!(reactive.client().fetches.get(), 2);
}
