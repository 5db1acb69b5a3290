use super::*;

#[test]
fn menu_starts_closed() {
    assert!(!MenuState::default().open);
}

#[test]
fn open_then_close() {
    let mut menu = MenuState::default();
    menu.open();
    assert!(menu.open);
    menu.close();
    assert!(!menu.open);
}

#[test]
fn close_is_idempotent() {
    let mut menu = MenuState::default();
    menu.close();
    menu.close();
    assert!(!menu.open);

    menu.open();
    menu.close();
    menu.close();
    assert!(!menu.open);
}

#[test]
fn toggle_alternates() {
    let mut menu = MenuState::default();
    menu.toggle();
    assert!(menu.open);
    menu.toggle();
    assert!(!menu.open);
}
