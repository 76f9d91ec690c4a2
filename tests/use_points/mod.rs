//! Integration tests for use transactions

use claims::assert_ok;
use point_wallet::{TransactionKind, UserId};

use crate::new_wallet;

#[test]
fn charge_then_use() {
    let wallet = new_wallet();
    let user = UserId::new(1);

    assert_ok!(wallet.charge(user, 500));
    let balance = assert_ok!(wallet.use_points(user, 200));

    assert_eq!(balance.balance(), 300);
    let kinds: Vec<_> = assert_ok!(wallet.find_history(user))
        .iter()
        .map(|r| r.kind())
        .collect();
    assert_eq!(kinds, vec![TransactionKind::Charge, TransactionKind::Use]);
}

#[test]
fn using_the_whole_balance_is_allowed() {
    let wallet = new_wallet();
    let user = UserId::new(2);

    assert_ok!(wallet.charge(user, 700));
    let balance = assert_ok!(wallet.use_points(user, 700));

    assert_eq!(balance.balance(), 0);
    assert_eq!(assert_ok!(wallet.find_history(user)).len(), 2);
}

#[test]
fn history_deltas_sum_up_to_the_balance() {
    let wallet = new_wallet();
    let user = UserId::new(3);

    assert_ok!(wallet.charge(user, 400));
    assert_ok!(wallet.use_points(user, 150));
    assert_ok!(wallet.charge(user, 600));
    assert_ok!(wallet.use_points(user, 1));

    let sum: i64 = assert_ok!(wallet.find_history(user))
        .iter()
        .map(|r| r.delta())
        .sum();
    assert_eq!(sum, 849);
    assert_eq!(assert_ok!(wallet.find_balance(user)).balance(), sum);
}
