use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::thread_rng;
use uuid::Uuid;

use donut_shop::{DonutShopError, Payment};

fn totals_by_card(payments: &[Payment]) -> HashMap<Uuid, i32> {
    payments
        .iter()
        .map(|payment| (payment.card_id(), payment.amount()))
        .collect()
}

#[test]
fn combines_payments_against_the_same_card() {
    let card_id = Uuid::new_v4();

    let combined = Payment::new(card_id, 10).combine(Payment::new(card_id, 15)).unwrap();

    assert_eq!(combined.card_id(), card_id);
    assert_eq!(combined.amount(), 25);
}

#[test]
fn refuses_to_combine_payments_against_different_cards() {
    let card_a = Uuid::new_v4();
    let card_b = Uuid::new_v4();

    let result = Payment::new(card_a, 10).combine(Payment::new(card_b, 15));

    match result {
        Err(DonutShopError::IncompatibleCard { expected, found }) => {
            assert_eq!(expected, card_a);
            assert_eq!(found, card_b);
        }
        other => panic!("expected incompatible cards, got {:?}", other),
    }
}

#[test]
fn groups_payments_by_card() {
    let card_a = Uuid::new_v4();
    let card_b = Uuid::new_v4();

    let grouped = Payment::group_by_card(vec![
        Payment::new(card_a, 5),
        Payment::new(card_b, 3),
        Payment::new(card_a, 2),
    ])
    .unwrap();

    assert_eq!(grouped.len(), 2);

    let totals = totals_by_card(&grouped);
    assert_eq!(totals[&card_a], 7);
    assert_eq!(totals[&card_b], 3);
}

#[test]
fn grouping_does_not_depend_on_the_order_of_payments() {
    let cards: Vec<Uuid> = (0..4).map(|_| Uuid::new_v4()).collect();
    let mut payments: Vec<Payment> = (0..20)
        .map(|amount| Payment::new(cards[amount as usize % cards.len()], amount))
        .collect();

    let reference = totals_by_card(&Payment::group_by_card(payments.clone()).unwrap());

    let mut rng = thread_rng();
    for _ in 0..10 {
        payments.shuffle(&mut rng);

        let grouped = Payment::group_by_card(payments.clone()).unwrap();
        assert_eq!(totals_by_card(&grouped), reference);
    }
}

#[test]
fn grouping_an_already_grouped_list_changes_nothing() {
    let card_a = Uuid::new_v4();
    let card_b = Uuid::new_v4();

    let grouped = Payment::group_by_card(vec![
        Payment::new(card_a, 5),
        Payment::new(card_b, 3),
        Payment::new(card_a, 2),
        Payment::new(card_b, 11),
    ])
    .unwrap();

    let regrouped = Payment::group_by_card(grouped.clone()).unwrap();

    assert_eq!(regrouped.len(), grouped.len());
    assert_eq!(totals_by_card(&regrouped), totals_by_card(&grouped));
}
