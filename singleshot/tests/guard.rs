use singleshot::ResumeGuard;
use singleshot::runtime::block_on;
use singleshot::suspend::begin_suspension;
use singleshot::with_guarded_continuation;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
enum FetchError {
    #[error("connection reset")]
    ConnectionReset,

    #[error("unexpected status {0}")]
    Status(u16),
}

/// Counts how many times a value was dropped.
struct Tracked {
    drops: Arc<AtomicUsize>,
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.fetch_add(1, Ordering::SeqCst);
    }
}

#[singleshot::test]
async fn test_first_success_wins() {
    let mut returns = Vec::new();

    let result = with_guarded_continuation::<&str, FetchError, _>(|guard| {
        returns.push(guard.resume_returning("first"));
        returns.push(guard.resume_returning("second"));
    })
    .await;

    assert_eq!(result, Ok("first"));
    assert_eq!(returns, vec![true, false]);
}

#[singleshot::test]
async fn test_failure_then_success_keeps_failure() {
    let mut second = None;

    let result = with_guarded_continuation::<&str, FetchError, _>(|guard| {
        assert!(guard.resume_throwing(FetchError::ConnectionReset));
        second = Some(guard.resume_returning("value"));
    })
    .await;

    assert_eq!(result, Err(FetchError::ConnectionReset));
    assert_eq!(second, Some(false));
}

#[singleshot::test]
async fn test_success_then_failure_keeps_success() {
    let result = with_guarded_continuation::<u32, FetchError, _>(|guard| {
        assert!(guard.resume_returning(200));
        assert!(!guard.resume_throwing(FetchError::Status(500)));
    })
    .await;

    assert_eq!(result, Ok(200));
}

#[singleshot::test]
async fn test_resume_with_ok_and_err() {
    let ok = with_guarded_continuation::<u32, FetchError, _>(|guard| {
        assert!(guard.resume_with(Ok(1)));
        assert!(!guard.resume_with(Err(FetchError::ConnectionReset)));
    })
    .await;

    let err = with_guarded_continuation::<u32, FetchError, _>(|guard| {
        assert!(guard.resume_with(Err(FetchError::Status(404))));
        assert!(!guard.resume_with(Ok(2)));
    })
    .await;

    assert_eq!(ok, Ok(1));
    assert_eq!(err, Err(FetchError::Status(404)));
}

#[test]
fn test_has_resumed_before_and_after() {
    let outcome = block_on(begin_suspension::<_, FetchError, _>(|continuation| {
        let guard = ResumeGuard::new(continuation);

        assert!(!guard.has_resumed());
        assert!(!guard.has_resumed(), "querying must not change state");

        assert!(guard.resume_returning(5));
        assert!(guard.has_resumed());

        assert!(!guard.resume_throwing(FetchError::ConnectionReset));
        assert!(!guard.resume_with(Ok(6)));
        assert!(guard.has_resumed());
    }));

    assert_eq!(outcome, Ok(5));
}

#[test]
fn test_redundant_value_is_dropped_immediately() {
    let drops = Arc::new(AtomicUsize::new(0));

    let suspension = begin_suspension::<Tracked, (), _>(|continuation| {
        let guard = ResumeGuard::new(continuation);

        assert!(guard.resume_returning(Tracked {
            drops: drops.clone()
        }));
        assert_eq!(drops.load(Ordering::SeqCst), 0);

        assert!(!guard.resume_returning(Tracked {
            drops: drops.clone()
        }));
        assert_eq!(
            drops.load(Ordering::SeqCst),
            1,
            "losing value should be discarded, not delivered"
        );
    });

    let delivered = block_on(suspension);
    assert_eq!(drops.load(Ordering::SeqCst), 1);

    drop(delivered);
    assert_eq!(drops.load(Ordering::SeqCst), 2);
}

#[test]
fn test_error_identity_preserved() {
    let outcome = block_on(with_guarded_continuation::<(), FetchError, _>(|guard| {
        guard.resume_throwing(FetchError::Status(503));
    }));

    assert_eq!(outcome, Err(FetchError::Status(503)));
    assert_eq!(
        outcome.unwrap_err().to_string(),
        "unexpected status 503",
        "error should arrive unchanged"
    );
}

#[test]
fn test_guard_debug_reports_state() {
    let outcome = block_on(begin_suspension::<u8, (), _>(|continuation| {
        let guard = ResumeGuard::new(continuation);
        assert_eq!(format!("{guard:?}"), "ResumeGuard { resumed: false }");

        guard.resume_returning(0);
        assert_eq!(format!("{guard:?}"), "ResumeGuard { resumed: true }");
    }));

    assert_eq!(outcome, Ok(0));
}
