//! Scoped resources: acquire, use, release exactly once.
//!
//! [`with_resource`] builds an [`AsyncResult`] that, when run, acquires a
//! resource, hands it to a body through a [`Scoped`] handle, and releases it
//! once the body's outcome is known. Release happens on every exit path of
//! the body (success, error, or panic) before the run completes, and it
//! happens exactly once. If acquisition fails, there is nothing to release.
//!
//! # Error precedence
//!
//! | body    | release | scope result               |
//! |---------|---------|----------------------------|
//! | `Ok(v)` | `Ok`    | `Ok(v)`                    |
//! | `Ok(v)` | `Err(r)`| `Err(r)`                   |
//! | `Err(b)`| `Ok`    | `Err(b)`                   |
//! | `Err(b)`| `Err(r)`| `Err(b)`, `r` is logged    |
//!
//! Panics in any stage are captured as [`ErrorKind::Fault`] and then follow
//! the same table.
//!
//! A [`Scoped`] handle that escapes the body and still holds the resource
//! locked when the body finishes keeps the resource: release is skipped and
//! the scope fails with [`ErrorKind::IoFault`]. The resource is dropped with
//! the last handle.

use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use tokio::sync::{MappedMutexGuard, Mutex, MutexGuard};

use super::AsyncResult;
use crate::error::{Error, ErrorKind};

/// The body's handle on a scoped resource.
///
/// The scope owns the resource. Once the scope releases it, every clone of
/// the handle (including one that escaped the body) reports
/// [`ErrorKind::IoFault`] instead of granting access.
pub struct Scoped<R> {
    slot: Arc<Mutex<Option<R>>>,
}

impl<R> Clone for Scoped<R> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<R> Scoped<R> {
    fn new(resource: R) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(resource))),
        }
    }

    /// Waits for exclusive access to the resource.
    ///
    /// Drop the guard before the body finishes. A guard still alive at that
    /// point makes the scope fail instead of releasing.
    ///
    /// # Errors
    ///
    /// Returns an [`ErrorKind::IoFault`] error once the resource has been
    /// released.
    pub async fn lock(&self) -> Result<MappedMutexGuard<'_, R>, Error> {
        let slot = self.slot.lock().await;
        MutexGuard::try_map(slot, Option::as_mut)
            .map_err(|_| Error::new(ErrorKind::IoFault, "resource already released"))
    }

    fn take(&self) -> Result<Option<R>, Error> {
        self.slot
            .try_lock()
            .map(|mut slot| slot.take())
            .map_err(|_| Error::new(ErrorKind::IoFault, "resource still locked at release"))
    }
}

impl<R> fmt::Debug for Scoped<R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Scoped").finish_non_exhaustive()
    }
}

/// Runs `body` against a resource that is released exactly once.
///
/// `acquire`, `release` and `body` are called once per run of the returned
/// description. See the module documentation for how body and release
/// errors combine.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use twotrack::effect::{AsyncResult, with_resource};
/// use twotrack::Error;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let releases = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&releases);
///
/// let length = with_resource(
///     || AsyncResult::<String, Error>::ok("{\"id\":\"1\"}".to_string()),
///     move |_| {
///         counter.fetch_add(1, Ordering::SeqCst);
///         AsyncResult::ok(())
///     },
///     |scoped| {
///         AsyncResult::new(move || {
///             let scoped = scoped.clone();
///             async move { Ok(scoped.lock().await?.len()) }
///         })
///     },
/// );
///
/// assert_eq!(length.run().await, Ok(10));
/// assert_eq!(releases.load(Ordering::SeqCst), 1);
/// # }
/// ```
pub fn with_resource<R, T, E, Acquire, Release, Body>(
    acquire: Acquire,
    release: Release,
    body: Body,
) -> AsyncResult<T, E>
where
    R: Send + 'static,
    T: Send + 'static,
    E: From<Error> + fmt::Display + Send + 'static,
    Acquire: Fn() -> AsyncResult<R, E> + Send + Sync + 'static,
    Release: Fn(R) -> AsyncResult<(), E> + Send + Sync + 'static,
    Body: Fn(Scoped<R>) -> AsyncResult<T, E> + Send + Sync + 'static,
{
    let stages = Arc::new((acquire, release, body));
    AsyncResult::new(move || {
        let stages = Arc::clone(&stages);
        async move {
            let (acquire, release, body) = &*stages;

            let resource = guarded(|| acquire().run()).await?;
            let scoped = Scoped::new(resource);

            let outcome = guarded(|| body(scoped.clone()).run()).await;
            let released = match scoped.take() {
                Ok(Some(resource)) => guarded(|| release(resource).run()).await,
                Ok(None) => Ok(()),
                Err(error) => Err(E::from(error)),
            };

            match (outcome, released) {
                (Ok(value), Ok(())) => Ok(value),
                (Ok(_), Err(release_error)) => Err(release_error),
                (Err(error), Ok(())) => Err(error),
                (Err(error), Err(release_error)) => {
                    tracing::warn!(
                        %release_error,
                        "resource release failed after the scope had already failed"
                    );
                    Err(error)
                }
            }
        }
    })
}

/// Starts and drives one stage, turning a panic into a fault on the error
/// track.
pub(crate) async fn guarded<T, E, F>(start: F) -> Result<T, E>
where
    F: FnOnce() -> BoxFuture<'static, Result<T, E>>,
    E: From<Error>,
{
    let running = catch_unwind(AssertUnwindSafe(start))
        .map_err(|payload| E::from(Error::from_panic(payload.as_ref())))?;
    match AssertUnwindSafe(running).catch_unwind().await {
        Ok(result) => result,
        Err(payload) => Err(E::from(Error::from_panic(payload.as_ref()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn released_handle_rejects_access() {
        let escaped = with_resource(
            || AsyncResult::<i32, Error>::ok(7),
            |_| AsyncResult::ok(()),
            |scoped| AsyncResult::ok(scoped),
        )
        .run()
        .await
        .expect("scope succeeded");

        let Err(error) = escaped.lock().await else {
            panic!("released resource was still reachable");
        };
        assert_eq!(error.kind(), ErrorKind::IoFault);
        assert_eq!(error.message(), "resource already released");
    }

    #[rstest]
    #[tokio::test]
    async fn body_can_mutate_resource() {
        let total = with_resource(
            || AsyncResult::<Vec<i32>, Error>::ok(vec![1, 2]),
            |resource| {
                assert_eq!(resource, vec![1, 2, 3]);
                AsyncResult::ok(())
            },
            |scoped| {
                AsyncResult::new(move || {
                    let scoped = scoped.clone();
                    async move {
                        let mut resource = scoped.lock().await?;
                        resource.push(3);
                        Ok(resource.iter().sum::<i32>())
                    }
                })
            },
        );
        assert_eq!(total.run().await, Ok(6));
    }

    #[rstest]
    #[tokio::test]
    async fn held_lock_fails_scope_instead_of_waiting() {
        let releases = Arc::new(std::sync::atomic::AtomicUsize::new(0));
        let counter = Arc::clone(&releases);
        let (unlock, unlocked) = tokio::sync::oneshot::channel::<()>();
        let unlocked = Arc::new(parking_lot::Mutex::new(Some(unlocked)));

        let outcome = with_resource(
            || AsyncResult::<i32, Error>::ok(7),
            move |_| {
                counter.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
                AsyncResult::ok(())
            },
            move |scoped| {
                let unlocked = Arc::clone(&unlocked);
                AsyncResult::new(move || {
                    let scoped = scoped.clone();
                    let unlocked = unlocked.lock().take();
                    async move {
                        let (locked, is_locked) = tokio::sync::oneshot::channel::<()>();
                        tokio::spawn(async move {
                            let _guard = scoped.lock().await;
                            let _ = locked.send(());
                            if let Some(unlocked) = unlocked {
                                let _ = unlocked.await;
                            }
                        });
                        let _ = is_locked.await;
                        Ok(1)
                    }
                })
            },
        )
        .run()
        .await;

        let error = outcome.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::IoFault);
        assert_eq!(error.message(), "resource still locked at release");
        assert_eq!(releases.load(std::sync::atomic::Ordering::SeqCst), 0);
        let _ = unlock.send(());
    }
}
