//! End-to-end railway scenarios: independent fallible steps wired together
//! with the extension traits, the composition helpers and memoization, the
//! same way application code uses them.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use rstest::rstest;
use twotrack::compose::{kleisli, lift};
use twotrack::control::{Either, OptionExt, ResultExt, Try, memoize};
use twotrack::effect::AsyncResult;
use twotrack::typeclass::{Bifunctor, Foldable};
use twotrack::{Error, ErrorKind, compose, partial, pipe};

#[derive(Debug, Clone, PartialEq)]
struct Customer {
    id: String,
    name: String,
    spent: u32,
}

fn find_customer(id: &str) -> Option<Customer> {
    match id {
        "1" => Some(Customer {
            id: "1".to_string(),
            name: "Cheranga".to_string(),
            spent: 1200,
        }),
        "2" => Some(Customer {
            id: "2".to_string(),
            name: "Hatangala".to_string(),
            spent: 40,
        }),
        _ => None,
    }
}

fn require_vip(customer: Customer) -> Result<Customer, String> {
    if customer.spent >= 1000 {
        Ok(customer)
    } else {
        Err(format!("{} is not a VIP", customer.name))
    }
}

fn greeting(customer: Customer) -> String {
    format!("welcome back, {}", customer.name)
}

// =============================================================================
// Option and Result
// =============================================================================

#[rstest]
#[case::vip("1", Ok("welcome back, Cheranga".to_string()))]
#[case::regular("2", Err("Hatangala is not a VIP".to_string()))]
#[case::unknown("9", Err("customer 9 not found".to_string()))]
fn vip_greeting_uses_first_failure(#[case] id: &str, #[case] expected: Result<String, String>) {
    let greeted = find_customer(id)
        .to_result_with(|| format!("customer {id} not found"))
        .bind(require_vip)
        .map(greeting);

    assert_eq!(greeted, expected);
}

#[rstest]
fn missing_customer_never_reaches_later_steps() {
    let checks = AtomicUsize::new(0);
    let name = find_customer("404")
        .bind(|customer| {
            checks.fetch_add(1, Ordering::SeqCst);
            Some(customer.name)
        })
        .if_none("guest".to_string());

    assert_eq!(name, "guest");
    assert_eq!(checks.load(Ordering::SeqCst), 0);
}

#[rstest]
fn error_track_can_be_translated_and_recovered() {
    let recovered: Result<Customer, ErrorKind> = require_vip(find_customer("2").expect("known id"))
        .map_error(|_| ErrorKind::AccessDenied)
        .bind_error(|kind| match kind {
            ErrorKind::AccessDenied => find_customer("1").ok_or(ErrorKind::NotFound),
            other => Err(other),
        });

    assert_eq!(recovered.map(|customer| customer.id), Ok("1".to_string()));
}

#[rstest]
fn bimap_and_fold_see_both_tracks() {
    let denied = require_vip(find_customer("2").expect("known id"));
    let (code, label) = denied
        .clone()
        .bimap(|message| message.len(), |customer| customer.spent)
        .fold((0, "none"), |_, track| match track {
            Either::Left(length) => (length, "error"),
            Either::Right(spent) => (spent as usize, "value"),
        });

    assert_eq!((code, label), ("Hatangala is not a VIP".len(), "error"));
    assert!(denied.bi_exists(|_| false, |message| message.contains("VIP")));
}

// =============================================================================
// Composition
// =============================================================================

#[rstest]
fn kleisli_chains_lookup_and_vip_check() {
    let lookup = |id: String| find_customer(&id).to_result(format!("customer {id} not found"));
    let vip_lookup = kleisli(lookup, require_vip);

    assert_eq!(vip_lookup("1".to_string()).map(|customer| customer.spent), Ok(1200));
    assert_eq!(
        vip_lookup("3".to_string()),
        Err("customer 3 not found".to_string())
    );
}

#[rstest]
fn lifted_function_works_for_every_container() {
    let shout = |name: String| name.to_uppercase();

    let lifted_option = lift::<Option<String>, _, _>(shout);
    assert_eq!(lifted_option(Some("abc".to_string())), Some("ABC".to_string()));

    let lifted_try = lift::<Try<String>, _, _>(shout);
    assert_eq!(
        lifted_try(Try::pure("abc".to_string())).run(),
        Ok("ABC".to_string())
    );
}

#[rstest]
fn pipe_and_compose_build_one_pipeline() {
    let name_length = compose!(|name: String| name.len(), greeting);
    let within_limit = partial!(|limit: usize, length: usize| length <= limit, 24, __);

    let fits = pipe!(
        find_customer("1").to_result("missing".to_string()),
        =>> require_vip,
        => name_length,
        => within_limit
    );
    assert_eq!(fits, Ok(true));
}

// =============================================================================
// Try and AsyncResult
// =============================================================================

#[rstest]
fn try_turns_parse_failures_into_errors() {
    let spent = Try::new(|| "12x".parse::<u32>().map_err(|error| error.to_string()));
    let error = spent.run().unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Fault);
    assert!(spent.to_option().is_none());
}

#[rstest]
#[tokio::test]
async fn async_pipeline_runs_stages_in_order() {
    let order = Arc::new(parking_lot::Mutex::new(Vec::new()));
    let fetch_order = Arc::clone(&order);
    let check_order = Arc::clone(&order);

    let description = AsyncResult::<Customer, Error>::new(move || {
        let order = Arc::clone(&fetch_order);
        async move {
            order.lock().push("fetch");
            find_customer("1").to_result(Error::new(ErrorKind::NotFound, "missing"))
        }
    })
    .bind_result(move |customer| {
        check_order.lock().push("check");
        require_vip(customer).map_err(|message| Error::new(ErrorKind::AccessDenied, message))
    })
    .map(greeting);

    assert!(order.lock().is_empty());
    assert_eq!(
        description.run().await,
        Ok("welcome back, Cheranga".to_string())
    );
    assert_eq!(*order.lock(), vec!["fetch", "check"]);
}

#[rstest]
#[tokio::test]
async fn async_match_with_reports_access_denied() {
    let description = AsyncResult::from_result(require_vip(find_customer("2").expect("known id")))
        .map_error(|message| Error::new(ErrorKind::AccessDenied, message));

    let code = description
        .match_with(|_| 200, |error: Error| error.code())
        .await;
    assert_eq!(code, 403);
}

// =============================================================================
// Memoization
// =============================================================================

#[rstest]
fn memoized_id_generation_is_stable() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let generate_id = memoize(move |name: String| {
        counter.fetch_add(1, Ordering::SeqCst);
        let hash = name
            .bytes()
            .fold(0_u32, |hash, byte| hash.rotate_left(5) ^ u32::from(byte));
        format!("{hash:08x}")
    });

    let first = generate_id.call("Cheranga".to_string());
    let second = generate_id.call("Cheranga".to_string());
    let other = generate_id.call("Hatangala".to_string());

    assert_eq!(first, second);
    assert_ne!(first, other);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}
