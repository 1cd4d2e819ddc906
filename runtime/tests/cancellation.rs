//! Integration tests for cancellable effects
//!
//! Covers the restart-on-reissue behaviour used for debouncing and the
//! explicit `Effect::Cancel` path.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use admin_console_core::effect::{Effect, EffectId};
use admin_console_core::{SmallVec, debounce, reducer::Reducer, smallvec};
use admin_console_runtime::Store;
use std::time::Duration;

const COMMIT: EffectId = EffectId::new("commit");

#[derive(Debug, Clone, PartialEq)]
enum TestAction {
    Typed(String),
    Committed(String),
    StopTyping,
    Slow(u32),
    SlowFinished(u32),
}

#[derive(Debug, Clone, Default)]
struct TestState {
    commits: Vec<String>,
    finished: Vec<u32>,
}

#[derive(Clone)]
struct TestEnvironment;

#[derive(Clone)]
struct TestReducer;

impl Reducer for TestReducer {
    type State = TestState;
    type Action = TestAction;
    type Environment = TestEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            TestAction::Typed(text) => smallvec![debounce! {
                id: COMMIT,
                duration: Duration::from_millis(1000),
                action: TestAction::Committed(text)
            }],
            TestAction::Committed(text) => {
                state.commits.push(text);
                SmallVec::new()
            },
            TestAction::StopTyping => smallvec![Effect::Cancel(COMMIT)],
            TestAction::Slow(n) => {
                let millis = u64::from(n) * 100;
                smallvec![
                    Effect::Future(Box::pin(async move {
                        tokio::time::sleep(Duration::from_millis(millis)).await;
                        Some(TestAction::SlowFinished(n))
                    }))
                    .cancellable(COMMIT)
                ]
            },
            TestAction::SlowFinished(n) => {
                state.finished.push(n);
                SmallVec::new()
            },
        }
    }
}

fn store() -> Store<TestState, TestAction, TestEnvironment, TestReducer> {
    Store::new(TestState::default(), TestReducer, TestEnvironment)
}

#[tokio::test(start_paused = true)]
async fn reissuing_restarts_the_delay() {
    let store = store();

    store.send(TestAction::Typed("a".into())).await.unwrap();
    tokio::time::sleep(Duration::from_millis(200)).await;
    store.send(TestAction::Typed("ab".into())).await.unwrap();
    tokio::time::sleep(Duration::from_millis(200)).await;
    store.send(TestAction::Typed("abc".into())).await.unwrap();

    // t = 1399ms: the last restart has not elapsed yet
    tokio::time::sleep(Duration::from_millis(999)).await;
    assert!(store.state(|s| s.commits.is_empty()).await);

    tokio::time::sleep(Duration::from_millis(2)).await;
    assert_eq!(store.state(|s| s.commits.clone()).await, vec!["abc".to_string()]);

    // Nothing else fires later
    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(store.state(|s| s.commits.len()).await, 1);
    assert_eq!(store.running_cancellables(), 0);
}

#[tokio::test(start_paused = true)]
async fn cancel_drops_pending_delay() {
    let store = store();

    store.send(TestAction::Typed("draft".into())).await.unwrap();
    store.send(TestAction::StopTyping).await.unwrap();

    tokio::time::sleep(Duration::from_secs(3)).await;
    assert!(store.state(|s| s.commits.is_empty()).await);
    assert_eq!(store.running_cancellables(), 0);
}

#[tokio::test(start_paused = true)]
async fn superseded_future_never_reports() {
    let store = store();

    // The slow request is replaced by a faster one before it completes
    store.send(TestAction::Slow(5)).await.unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;
    let mut handle = store.send(TestAction::Slow(1)).await.unwrap();
    handle.wait().await;

    tokio::time::sleep(Duration::from_secs(2)).await;
    assert_eq!(store.state(|s| s.finished.clone()).await, vec![1]);
}

#[tokio::test(start_paused = true)]
async fn aborted_effect_releases_its_handle() {
    let store = store();

    let mut first = store.send(TestAction::Typed("x".into())).await.unwrap();
    store.send(TestAction::Typed("xy".into())).await.unwrap();

    // The aborted delay must not leave its handle pending forever
    first
        .wait_with_timeout(Duration::from_millis(10))
        .await
        .expect("aborted effect should complete its handle");
}

#[tokio::test(start_paused = true)]
async fn send_and_wait_for_observes_debounced_action() {
    let store = store();

    let action = store
        .send_and_wait_for(
            TestAction::Typed("final".into()),
            |a| matches!(a, TestAction::Committed(_)),
            Duration::from_secs(2),
        )
        .await
        .unwrap();

    assert_eq!(action, TestAction::Committed("final".into()));
}
