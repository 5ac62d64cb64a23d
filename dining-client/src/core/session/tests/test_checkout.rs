use super::*;

fn payment() -> PaymentDetails {
    PaymentDetails {
        card_name: "Ada Lovelace".into(),
        card_number: "4111 1111 1111 1111".into(),
        expiry: "12/30".into(),
        cvv: "123".into(),
    }
}

#[test]
fn test_rejected_checkout_publishes_nothing() {
    let mut h = harness();
    h.session.select_mode(OrderMode::DineIn);
    h.recorder.clear();

    let result = h.session.proceed_to_checkout();

    assert!(matches!(result, Err(AppError::Checkout(CheckoutError::EmptyCart))));
    assert!(result.as_ref().is_err_and(|e| e.is_blocking()));
    assert!(h.recorder.events().is_empty());
    assert_eq!(h.issuer.issued.get(), 0);
}

#[test]
fn test_no_mode_message() {
    let mut h = harness();
    h.session.add_to_cart("Coffee", price(250)).unwrap();

    let err = h.session.proceed_to_checkout().unwrap_err();

    assert_eq!(err.to_string(), "Please select Dine In or Pickup first.");
    assert_eq!(h.session.checkout_flow().phase(), CheckoutPhase::Idle);
}

#[test]
fn test_dine_in_ticket_total() {
    let mut h = harness();
    h.session.add_to_cart("Coffee", price(250)).unwrap();
    h.session.adjust_quantity("Coffee", 1).unwrap();
    h.session.select_mode(OrderMode::DineIn);

    let phase = h.session.proceed_to_checkout().unwrap();

    assert_eq!(phase, CheckoutPhase::Ticketed);
    let ticket = h.session.checkout_flow().ticket().unwrap();
    assert!(ticket.code.starts_with('D'));
    assert_eq!(ticket.total, price(500));
    assert_eq!(h.issuer.issued.get(), 1);
}

#[test]
fn test_pickup_pay_twice_returns_same_ticket() {
    let mut h = harness();
    h.session.add_to_cart("Wrap", price(650)).unwrap();
    h.session.select_mode(OrderMode::Pickup);

    assert_eq!(
        h.session.proceed_to_checkout().unwrap(),
        CheckoutPhase::AwaitingPayment
    );
    assert!(h.session.checkout_flow().ticket().is_none());

    let first = h.session.submit_payment(&payment()).unwrap();
    let second = h.session.submit_payment(&payment()).unwrap();

    assert_eq!(first, second);
    assert!(first.code.starts_with('P'));
    assert_eq!(h.issuer.issued.get(), 1);
}

#[test]
fn test_payment_before_checkout_rejected() {
    let mut h = harness();
    h.session.add_to_cart("Wrap", price(650)).unwrap();
    h.session.select_mode(OrderMode::Pickup);

    let result = h.session.submit_payment(&payment());

    assert!(matches!(
        result,
        Err(AppError::Checkout(CheckoutError::PaymentNotExpected(
            CheckoutPhase::Idle
        )))
    ));
}

#[test]
fn test_cart_change_after_paid_resets_to_idle_keeping_mode() {
    let mut h = harness();
    h.session.add_to_cart("Wrap", price(650)).unwrap();
    h.session.select_mode(OrderMode::Pickup);
    h.session.proceed_to_checkout().unwrap();
    h.session.submit_payment(&payment()).unwrap();
    h.recorder.clear();

    h.session.add_to_cart("Soda", price(150)).unwrap();

    let flow = h.session.checkout_flow();
    assert_eq!(flow.phase(), CheckoutPhase::Idle);
    assert!(flow.ticket().is_none());
    assert_eq!(flow.mode(), Some(OrderMode::Pickup));
    assert_eq!(
        h.recorder.events(),
        vec![SessionEvent::CartChanged, SessionEvent::CheckoutChanged]
    );
}

#[test]
fn test_mode_change_clears_ticket() {
    let mut h = harness();
    h.session.add_to_cart("Coffee", price(250)).unwrap();
    h.session.select_mode(OrderMode::DineIn);
    h.session.proceed_to_checkout().unwrap();

    h.session.select_mode(OrderMode::Pickup);

    assert_eq!(h.session.checkout_flow().phase(), CheckoutPhase::Idle);
    assert!(h.session.checkout_flow().ticket().is_none());
}

#[test]
fn test_repeat_checkout_keeps_ticket() {
    let mut h = harness();
    h.session.add_to_cart("Coffee", price(250)).unwrap();
    h.session.select_mode(OrderMode::DineIn);
    h.session.proceed_to_checkout().unwrap();
    let code = h.session.checkout_flow().ticket().unwrap().code.clone();

    h.session.proceed_to_checkout().unwrap();

    assert_eq!(h.session.checkout_flow().ticket().unwrap().code, code);
    assert_eq!(h.issuer.issued.get(), 1);
}

#[test]
fn test_adjust_unknown_item_keeps_ticket() {
    let mut h = harness();
    h.session.add_to_cart("Coffee", price(250)).unwrap();
    h.session.select_mode(OrderMode::DineIn);
    h.session.proceed_to_checkout().unwrap();
    h.recorder.clear();
    // Any write would fail; the adjust must not reach the store
    h.store.fail_writes.set(true);

    h.session.adjust_quantity("Ghost", -1).unwrap();

    let flow = h.session.checkout_flow();
    assert_eq!(flow.phase(), CheckoutPhase::Ticketed);
    assert_eq!(flow.ticket().map(|t| t.code.as_str()), Some("D000142"));
    assert_eq!(h.session.cart_count(), 1);
    assert!(h.recorder.events().is_empty());
}
