use std::cell::RefCell;
use std::rc::Rc;
use todolist_core::{ItemListProvider, ItemStore, Section, StoreError, ToDoItem, SECTION_COUNT};

fn item(title: &str) -> ToDoItem {
    ToDoItem::new(title).unwrap()
}

fn provider_with(titles: &[&str]) -> ItemListProvider {
    let mut store = ItemStore::new();
    for title in titles {
        store.add(item(title));
    }
    ItemListProvider::new(store)
}

#[test]
fn number_of_sections_is_two() {
    let provider = provider_with(&[]);
    assert_eq!(provider.section_count(), SECTION_COUNT);
    assert_eq!(ItemListProvider::section_at(0), Some(Section::ToDo));
    assert_eq!(ItemListProvider::section_at(1), Some(Section::Done));
    assert_eq!(ItemListProvider::section_at(2), None);
}

#[test]
fn first_section_rows_track_open_count() {
    let mut provider = provider_with(&["Foo"]);
    assert_eq!(provider.rows_in(Section::ToDo), 1);

    provider.store_mut().add(item("Bar"));
    assert_eq!(provider.rows_in(Section::ToDo), 2);
}

#[test]
fn second_section_rows_track_done_count() {
    let mut provider = provider_with(&["Foo", "Bar"]);
    provider.store_mut().check_item(0).unwrap();
    assert_eq!(provider.rows_in(Section::Done), 1);

    provider.store_mut().check_item(0).unwrap();
    assert_eq!(provider.rows_in(Section::Done), 2);
}

#[test]
fn item_at_reads_the_addressed_section() {
    let mut provider = provider_with(&["Foo", "Bar"]);
    provider.store_mut().check_item(1).unwrap();

    assert_eq!(provider.item_at(Section::ToDo, 0), Some(&item("Foo")));
    assert_eq!(provider.item_at(Section::Done, 0), Some(&item("Bar")));
    assert_eq!(provider.item_at(Section::ToDo, 1), None);
}

#[test]
fn toggle_action_titles_match_section() {
    assert_eq!(ItemListProvider::toggle_action_title(Section::ToDo), "Check");
    assert_eq!(
        ItemListProvider::toggle_action_title(Section::Done),
        "Uncheck"
    );
}

#[test]
fn committing_toggle_in_first_section_checks_the_item() {
    let mut provider = provider_with(&["Foo"]);

    provider.commit_toggle(Section::ToDo, 0).unwrap();

    assert_eq!(provider.store().to_do_count(), 0);
    assert_eq!(provider.store().done_count(), 1);
    assert_eq!(provider.rows_in(Section::ToDo), 0);
    assert_eq!(provider.rows_in(Section::Done), 1);
}

#[test]
fn committing_toggle_in_second_section_unchecks_the_item() {
    let mut provider = provider_with(&["First"]);
    provider.store_mut().check_item(0).unwrap();

    provider.commit_toggle(Section::Done, 0).unwrap();

    assert_eq!(provider.store().to_do_count(), 1);
    assert_eq!(provider.store().done_count(), 0);
    assert_eq!(provider.rows_in(Section::ToDo), 1);
    assert_eq!(provider.rows_in(Section::Done), 0);
}

#[test]
fn commit_toggle_propagates_range_errors() {
    let mut provider = provider_with(&[]);

    let err = provider.commit_toggle(Section::ToDo, 0).unwrap_err();
    assert!(matches!(err, StoreError::OutOfRange { .. }));
}

#[test]
fn selecting_a_row_invokes_the_registered_handler() {
    let mut provider = provider_with(&["First"]);

    let seen: Rc<RefCell<Vec<(Section, usize, ToDoItem)>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    provider.set_selection_handler(move |section, row, selected| {
        sink.borrow_mut().push((section, row, selected.clone()));
    });

    provider.select_row(Section::ToDo, 0).unwrap();

    let calls = seen.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0], (Section::ToDo, 0, item("First")));
}

#[test]
fn selecting_out_of_range_row_fails_without_invoking_handler() {
    let mut provider = provider_with(&["First"]);

    let called = Rc::new(RefCell::new(false));
    let flag = Rc::clone(&called);
    provider.set_selection_handler(move |_, _, _| {
        *flag.borrow_mut() = true;
    });

    let err = provider.select_row(Section::ToDo, 1).unwrap_err();
    assert!(matches!(
        err,
        StoreError::OutOfRange {
            section: Section::ToDo,
            index: 1,
            len: 1,
        }
    ));
    assert!(!*called.borrow());
}

#[test]
fn select_row_without_handler_is_a_valid_no_op() {
    let mut provider = provider_with(&["First"]);
    provider.select_row(Section::ToDo, 0).unwrap();
}
