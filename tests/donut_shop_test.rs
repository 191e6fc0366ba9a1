use uuid::Uuid;

use donut_shop::credit_card::error::CreditCardError;
use donut_shop::{buy_donuts, Donut, DonutShop, DonutShopError, Payment};

#[test]
fn buys_donuts_and_settles_the_payment() {
    let mut shop = DonutShop::new();

    let card_id = shop.open_card(50).unwrap();
    assert_eq!(shop.balance(card_id).unwrap(), 50);

    // Five donuts; building the purchase charges nothing
    let purchase = buy_donuts(5, card_id).unwrap();
    assert_eq!(purchase.donuts().len(), 5);
    assert_eq!(purchase.payment().amount(), Donut::PRICE * 5);
    assert_eq!(purchase.payment().card_id(), card_id);
    assert_eq!(shop.balance(card_id).unwrap(), 50);

    // Settling performs the charge
    let settled = shop.settle(vec![purchase.payment().clone()]).unwrap();
    assert_eq!(settled.len(), 1);
    assert_eq!(shop.balance(card_id).unwrap(), 25);
}

#[test]
fn settles_many_purchases_with_one_charge_per_card() {
    let mut shop = DonutShop::new();

    let card_a = shop.open_card(100).unwrap();
    let card_b = shop.open_card(100).unwrap();

    let payments: Vec<Payment> = vec![
        buy_donuts(2, card_a).unwrap().payment().clone(),
        buy_donuts(3, card_b).unwrap().payment().clone(),
        buy_donuts(4, card_a).unwrap().payment().clone(),
    ];

    let settled = shop.settle(payments).unwrap();

    assert_eq!(settled.len(), 2);
    assert_eq!(shop.balance(card_a).unwrap(), 100 - Donut::PRICE * 6);
    assert_eq!(shop.balance(card_b).unwrap(), 100 - Donut::PRICE * 3);
}

#[test]
fn a_charge_beyond_the_balance_is_rejected_and_changes_nothing() {
    let mut shop = DonutShop::new();

    let card_id = shop.open_card(10).unwrap();

    // Three donuts cost 15, the card only holds 10
    let purchase = buy_donuts(3, card_id).unwrap();
    let result = shop.settle(vec![purchase.payment().clone()]);

    match result {
        Err(DonutShopError::CreditCard(CreditCardError::InsufficientFunds { required, available })) => {
            assert_eq!(required, 15);
            assert_eq!(available, 10);
        }
        other => panic!("expected insufficient funds, got {:?}", other),
    }

    assert_eq!(shop.balance(card_id).unwrap(), 10);
}

#[test]
fn settling_against_an_unknown_card_is_rejected() {
    let mut shop = DonutShop::new();
    let stranger = Uuid::new_v4();

    let result = shop.settle(vec![Payment::new(stranger, 5)]);

    match result {
        Err(DonutShopError::UnknownCard(card_id)) => assert_eq!(card_id, stranger),
        other => panic!("expected an unknown card, got {:?}", other),
    }

    assert!(matches!(shop.balance(stranger), Err(DonutShopError::UnknownCard(_))));
}

#[test]
fn a_card_cannot_be_opened_with_a_negative_balance() {
    let mut shop = DonutShop::new();

    let result = shop.open_card(-50);

    assert!(matches!(
        result,
        Err(DonutShopError::CreditCard(CreditCardError::NegativeAmount))
    ));
}
