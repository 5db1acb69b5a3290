use super::*;

#[test]
fn closed_items_collapse_to_zero_height() {
    assert_eq!(content_max_height(false, 480), "max-height: 0px");
}

#[test]
fn open_items_expand_to_their_measured_height() {
    assert_eq!(content_max_height(true, 480), "max-height: 480px");
}

#[test]
fn indicator_rotates_only_when_open() {
    assert_eq!(icon_rotation(true), "transform: rotate(180deg)");
    assert_eq!(icon_rotation(false), "transform: rotate(0deg)");
}

#[test]
fn every_entry_has_question_and_answer_text() {
    assert!(!FAQ_ENTRIES.is_empty());
    for entry in FAQ_ENTRIES {
        assert!(!entry.question.is_empty());
        assert!(!entry.answer.is_empty());
    }
}
