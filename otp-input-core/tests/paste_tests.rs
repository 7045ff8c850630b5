#![allow(missing_docs)]
use otp_input_core::{
    BoxHandle, BoxId, DefaultAction, FocusTracker, MemoryBox, OtpEvent, PasteHandler,
    ValidationPattern,
};
use std::cell::RefCell;
use std::rc::Rc;

fn setup(len: usize) -> (
    Vec<MemoryBox>,
    FocusTracker,
    PasteHandler<MemoryBox>,
    Rc<RefCell<Vec<OtpEvent>>>,
) {
    let (boxes, tracker) = MemoryBox::group(len);
    let pattern = ValidationPattern::new(ValidationPattern::DIGITS).unwrap();
    let mut handler = PasteHandler::new(pattern);
    handler.initialize(boxes.clone());
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    handler.subscribe(move |e: &OtpEvent| sink.borrow_mut().push(e.clone()));
    (boxes, tracker, handler, events)
}

fn displayed(boxes: &[MemoryBox]) -> Vec<String> {
    boxes.iter().map(BoxHandle::value).collect()
}

fn chars(text: &str) -> Vec<String> {
    text.chars().map(String::from).collect()
}

#[test]
fn test_full_paste_fills_every_box() {
    let (boxes, tracker, mut handler, events) = setup(6);
    let action = handler.on_paste(Some("123456"));
    assert_eq!(action, DefaultAction::Prevent);
    assert_eq!(displayed(&boxes), ["1", "2", "3", "4", "5", "6"]);
    assert_eq!(*events.borrow(), [OtpEvent::Paste { values: chars("123456") }]);
    assert_eq!(tracker.focused(), Some(BoxId::new(5)));
}

#[test]
fn test_short_paste_leaves_remaining_boxes_untouched() {
    let (boxes, tracker, mut handler, events) = setup(6);
    boxes[3].set_value("8");
    let _ = handler.on_paste(Some("12"));
    assert_eq!(displayed(&boxes), ["1", "2", "", "8", "", ""]);
    assert_eq!(*events.borrow(), [OtpEvent::Paste { values: chars("12") }]);
    assert_eq!(tracker.focused(), Some(BoxId::new(2)));
}

#[test]
fn test_long_paste_drops_the_remainder() {
    let (boxes, tracker, mut handler, events) = setup(4);
    let _ = handler.on_paste(Some("12345678"));
    assert_eq!(displayed(&boxes), ["1", "2", "3", "4"]);
    assert_eq!(*events.borrow(), [OtpEvent::Paste { values: chars("12345678") }]);
    assert_eq!(tracker.focused(), Some(BoxId::new(3)));
}

#[test]
fn test_rejected_paste_changes_nothing() {
    let (boxes, tracker, mut handler, events) = setup(6);
    boxes[1].focus();
    let action = handler.on_paste(Some("12ab"));
    assert!(action.is_prevented());
    assert!(displayed(&boxes).iter().all(String::is_empty));
    assert!(events.borrow().is_empty());
    assert_eq!(tracker.focused(), Some(BoxId::new(1)));
}

#[test]
fn test_missing_or_empty_clipboard_is_ignored() {
    let (boxes, _, mut handler, events) = setup(6);
    assert_eq!(handler.on_paste(None), DefaultAction::Prevent);
    assert_eq!(handler.on_paste(Some("")), DefaultAction::Prevent);
    assert!(displayed(&boxes).iter().all(String::is_empty));
    assert!(events.borrow().is_empty());
}

#[test]
fn test_custom_pattern_accepts_letters() {
    let (boxes, _) = MemoryBox::group(3);
    let pattern = ValidationPattern::new("^[A-Za-z0-9]+$").unwrap();
    let mut handler = PasteHandler::new(pattern);
    handler.initialize(boxes.clone());
    let _ = handler.on_paste(Some("aB3"));
    assert_eq!(displayed(&boxes), ["a", "B", "3"]);
}

#[test]
fn test_paste_before_initialize_emits_nothing() {
    let pattern = ValidationPattern::new(ValidationPattern::DIGITS).unwrap();
    let mut handler: PasteHandler<MemoryBox> = PasteHandler::new(pattern);
    let events = Rc::new(RefCell::new(0));
    let count = Rc::clone(&events);
    handler.subscribe(move |_: &OtpEvent| *count.borrow_mut() += 1);
    assert_eq!(handler.on_paste(Some("123")), DefaultAction::Prevent);
    assert_eq!(*events.borrow(), 0);
}
