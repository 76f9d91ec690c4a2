//! Integration tests for the CSV batch replay

use claims::assert_ok;
use point_wallet::{BalanceRecord, Error, Rejection, WalletConfig, process};
use rstest::rstest;

fn run(input: &str, workers: usize) -> (Vec<BalanceRecord>, Vec<Error>) {
    let config = WalletConfig {
        workers,
        ..WalletConfig::default()
    };
    let mut errors = Vec::new();
    let records = assert_ok!(process(input.as_bytes(), &config, |e| errors.push(e)));
    (records, errors)
}

#[test]
fn empty_input_produces_no_output() {
    let (records, errors) = run("type, user, amount\n", 2);

    assert!(records.is_empty(), "expected no balances");
    assert!(errors.is_empty(), "expected no errors");
}

#[rstest]
fn per_user_order_is_kept_for_any_worker_count(#[values(1, 2, 3, 8)] workers: usize) {
    let input = "\
type, user, amount
charge, 1, 500
charge, 2, 100
use, 1, 200
use, 2, 150
charge, 3, 1000
use, 1, 300
charge, 2, 50
use, 3, 1";

    let (records, errors) = run(input, workers);

    assert_eq!(
        records,
        vec![
            BalanceRecord {
                user: 1,
                balance: 0,
                transactions: 3,
            },
            BalanceRecord {
                user: 2,
                balance: 150,
                transactions: 2,
            },
            BalanceRecord {
                user: 3,
                balance: 999,
                transactions: 2,
            },
        ]
    );
    assert_eq!(errors.len(), 1, "{errors:?}");
    assert_eq!(
        errors[0].rejection(),
        Some(&Rejection::InsufficientBalance { balance: 100 })
    );
}

#[test]
fn invalid_rows_are_reported_and_skipped() {
    let input = "\
type, user, amount
charge, 1, 0
refund, 1, 10
charge, 1, ten
charge, 1, 900
charge, 1, 101";

    let (records, errors) = run(input, 2);

    assert_eq!(
        records,
        vec![BalanceRecord {
            user: 1,
            balance: 900,
            transactions: 1,
        }]
    );
    assert_eq!(errors.len(), 4, "{errors:?}");
    assert!(
        errors
            .iter()
            .any(|e| e.rejection() == Some(&Rejection::NonPositiveAmount))
    );
    assert!(
        errors
            .iter()
            .any(|e| e.rejection() == Some(&Rejection::BalanceCeilingExceeded { max_balance: 1000 }))
    );
    assert!(errors.iter().any(|e| matches!(e, Error::Input { user_id: 1, .. })));
    assert!(errors.iter().any(|e| matches!(e, Error::Csv(_))));
}

#[test]
fn ceiling_follows_the_configuration() {
    let config = WalletConfig {
        max_balance: 50,
        workers: 1,
        ..WalletConfig::default()
    };
    let input = "type, user, amount\ncharge, 1, 50\ncharge, 1, 1";

    let mut errors = Vec::new();
    let records = assert_ok!(process(input.as_bytes(), &config, |e| errors.push(e)));

    assert_eq!(records[0].balance, 50);
    assert_eq!(
        errors[0].rejection(),
        Some(&Rejection::BalanceCeilingExceeded { max_balance: 50 })
    );
}
