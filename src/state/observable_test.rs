use super::*;

#[test]
fn default_holds_type_default() {
    let cell: Observable<bool> = Observable::default();
    assert!(!cell.get());
}

#[test]
fn set_without_subscribers_sticks() {
    let cell = Observable::new(1);
    cell.set(2);
    assert_eq!(cell.get(), 2);
}

#[test]
fn clones_share_value() {
    let a = Observable::new(String::from("x"));
    let b = a.clone();
    b.set("y".into());
    assert_eq!(a.get(), "y");
}

#[test]
fn update_mutates_in_place() {
    let cell = Observable::new(vec![1]);
    cell.update(|v| v.push(2));
    assert_eq!(cell.with(Vec::len), 2);
}

#[tokio::test]
async fn subscriber_sees_last_write() {
    let cell = Observable::new(0);
    let mut rx = cell.subscribe();

    cell.set(1);
    cell.set(2);

    rx.changed().await.unwrap();
    assert_eq!(*rx.borrow_and_update(), 2);
    assert!(!rx.has_changed().unwrap());
}
