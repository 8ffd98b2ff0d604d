//! Integration tests for `with_resource`: release exactly once, on every exit
//! path, with body errors taking precedence over release errors.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use rstest::rstest;
use twotrack::effect::{AsyncResult, Scoped, with_resource};
use twotrack::{Error, ErrorKind};

#[derive(Default)]
struct Calls {
    acquired: AtomicUsize,
    bodies: AtomicUsize,
    released: AtomicUsize,
}

impl Calls {
    fn snapshot(&self) -> (usize, usize, usize) {
        (
            self.acquired.load(Ordering::SeqCst),
            self.bodies.load(Ordering::SeqCst),
            self.released.load(Ordering::SeqCst),
        )
    }
}

fn explode() -> Result<i32, Error> {
    panic!("body exploded")
}

/// A scope over a connection name whose stages succeed or fail on request.
fn scope(
    calls: &Arc<Calls>,
    acquire_fails: bool,
    body: Result<i32, Error>,
    release: Result<(), Error>,
) -> AsyncResult<i32, Error> {
    let on_acquire = Arc::clone(calls);
    let on_body = Arc::clone(calls);
    let on_release = Arc::clone(calls);

    with_resource(
        move || {
            on_acquire.acquired.fetch_add(1, Ordering::SeqCst);
            if acquire_fails {
                AsyncResult::err(Error::new(ErrorKind::NotFound, "no such connection"))
            } else {
                AsyncResult::ok("connection-1".to_string())
            }
        },
        move |_connection| {
            on_release.released.fetch_add(1, Ordering::SeqCst);
            AsyncResult::from_result(release.clone())
        },
        move |_scoped: Scoped<String>| {
            on_body.bodies.fetch_add(1, Ordering::SeqCst);
            AsyncResult::from_result(body.clone())
        },
    )
}

fn body_error() -> Error {
    Error::new(ErrorKind::DecodeFault, "body failed")
}

fn release_error() -> Error {
    Error::new(ErrorKind::IoFault, "release failed")
}

// =============================================================================
// Error precedence
// =============================================================================

#[rstest]
#[case::both_succeed(Ok(1), Ok(()), Ok(1))]
#[case::release_fails_after_success(Ok(1), Err(release_error()), Err(release_error()))]
#[case::body_fails(Err(body_error()), Ok(()), Err(body_error()))]
#[case::body_error_wins(Err(body_error()), Err(release_error()), Err(body_error()))]
#[tokio::test]
async fn body_and_release_outcomes_combine(
    #[case] body: Result<i32, Error>,
    #[case] release: Result<(), Error>,
    #[case] expected: Result<i32, Error>,
) {
    let calls = Arc::new(Calls::default());
    let result = scope(&calls, false, body, release).run().await;

    assert_eq!(result, expected);
    assert_eq!(calls.snapshot(), (1, 1, 1));
}

#[rstest]
#[tokio::test]
async fn failed_acquire_skips_body_and_release() {
    let calls = Arc::new(Calls::default());
    let error = scope(&calls, true, Ok(1), Ok(())).run().await.unwrap_err();

    assert_eq!(error.kind(), ErrorKind::NotFound);
    assert_eq!(calls.snapshot(), (1, 0, 0));
}

// =============================================================================
// Panics
// =============================================================================

#[rstest]
#[tokio::test]
async fn panicking_body_still_releases() {
    let released = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&released);

    let error = with_resource(
        || AsyncResult::<i32, Error>::ok(3),
        move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            AsyncResult::ok(())
        },
        |_| AsyncResult::new(|| async { explode() }),
    )
    .run()
    .await
    .unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Fault);
    assert_eq!(error.message(), "body exploded");
    assert_eq!(released.load(Ordering::SeqCst), 1);
}

#[rstest]
#[tokio::test]
async fn body_panicking_before_its_future_still_releases() {
    let released = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&released);

    let error = with_resource(
        || AsyncResult::<i32, Error>::ok(3),
        move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            AsyncResult::ok(())
        },
        |_| -> AsyncResult<i32, Error> { panic!("no body") },
    )
    .run()
    .await
    .unwrap_err();

    assert_eq!(error.message(), "no body");
    assert_eq!(released.load(Ordering::SeqCst), 1);
}

#[rstest]
#[tokio::test]
async fn panicking_release_surfaces_as_fault() {
    let error = with_resource(
        || AsyncResult::<i32, Error>::ok(3),
        |_| -> AsyncResult<(), Error> { panic!("release exploded") },
        |_| AsyncResult::ok(4),
    )
    .run()
    .await
    .unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Fault);
    assert_eq!(error.message(), "release exploded");
}

// =============================================================================
// Running
// =============================================================================

#[rstest]
#[tokio::test]
async fn each_run_gets_its_own_resource() {
    let calls = Arc::new(Calls::default());
    let scoped = scope(&calls, false, Ok(5), Ok(()));
    assert_eq!(calls.snapshot(), (0, 0, 0));

    assert_eq!(scoped.run().await, Ok(5));
    assert_eq!(scoped.run().await, Ok(5));
    assert_eq!(calls.snapshot(), (2, 2, 2));
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_runs_release_independently() {
    let calls = Arc::new(Calls::default());
    let scoped = scope(&calls, false, Ok(8), Ok(()));

    let handles: Vec<_> = (0..16).map(|_| tokio::spawn(scoped.run())).collect();
    for handle in handles {
        assert_eq!(handle.await.expect("task panicked"), Ok(8));
    }

    assert_eq!(calls.snapshot(), (16, 16, 16));
}

#[rstest]
#[tokio::test]
async fn body_sees_the_acquired_resource() {
    let greeting = with_resource(
        || AsyncResult::<String, Error>::ok("employee-7".to_string()),
        |_| AsyncResult::ok(()),
        |scoped: Scoped<String>| {
            AsyncResult::new(move || {
                let scoped = scoped.clone();
                async move { Ok(format!("hello {}", *scoped.lock().await?)) }
            })
        },
    );

    assert_eq!(greeting.run().await, Ok("hello employee-7".to_string()));
}
