use super::*;

#[test]
fn all_items_start_closed() {
    let faq = FaqState::default();
    for index in 0..8 {
        assert!(!faq.is_open(index));
    }
}

#[test]
fn toggling_a_closed_item_opens_it() {
    let mut faq = FaqState::default();
    faq.toggle(2);
    assert!(faq.is_open(2));
}

#[test]
fn toggling_the_open_item_closes_it() {
    let mut faq = FaqState::default();
    faq.toggle(2);
    faq.toggle(2);
    assert_eq!(faq.open, None);
}

#[test]
fn opening_an_item_closes_any_other() {
    for j in 0..5 {
        for i in 0..5 {
            if i == j {
                continue;
            }
            let mut faq = FaqState::default();
            faq.toggle(j);
            faq.toggle(i);
            assert!(faq.is_open(i));
            assert!(!faq.is_open(j));
            assert_eq!(faq.open, Some(i));
        }
    }
}
