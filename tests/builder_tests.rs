use namewise::{Config, NameBuilder, NameError, NameOrder, parser};
use tokio::sync::broadcast::error::TryRecvError;

fn builder_over(text: &str, config_name: &str) -> NameBuilder {
    NameBuilder::from_text(text, &Config::get(config_name)).unwrap()
}

/// The spec's reference editing session: shorten, uppercase, roll the
/// uppercase back, finalize, then hit the closed-builder wall.
#[test]
fn test_reference_editing_session() {
    let mut builder = builder_over("Jane Ann Doe", "bld_session");

    assert_eq!(builder.shorten().unwrap().longest().unwrap(), "Jane Doe");
    assert_eq!(builder.uppercase().unwrap().longest().unwrap(), "JANE DOE");
    assert_eq!(builder.rollback().unwrap().longest().unwrap(), "Jane Doe");

    let final_name = builder.finalize().unwrap();
    assert_eq!(final_name.longest().unwrap(), "Jane Doe");

    let error = builder.shorten().unwrap_err();
    assert_eq!(
        error.to_string(),
        "operation 'shorten' is not allowed: builder is closed"
    );
}

#[test]
fn test_open_and_closed_are_complementary() {
    let mut builder = builder_over("Jane Doe", "bld_states");
    assert!(builder.is_open());
    assert!(!builder.is_closed());

    builder.close().unwrap();
    assert!(!builder.is_open());
    assert!(builder.is_closed());

    // Nothing leaves the closed state.
    assert!(builder.close().is_err());
    assert!(builder.finalize().is_err());
    assert!(builder.uppercase().is_err());
    assert!(builder.rollback().is_err());
}

#[test]
fn test_subscribers_receive_each_edit() {
    let mut builder = builder_over("Jane Ann Doe", "bld_subs");
    let mut first_rx = builder.subscribe().unwrap();
    let mut second_rx = builder.subscribe().unwrap();

    builder.shorten().unwrap();
    builder.lowercase().unwrap();

    for rx in [&mut first_rx, &mut second_rx] {
        assert_eq!(rx.try_recv().unwrap().longest().unwrap(), "Jane Doe");
        assert_eq!(rx.try_recv().unwrap().longest().unwrap(), "jane doe");
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    }
}

#[test]
fn test_closing_closes_the_channel_for_subscribers() {
    let mut builder = builder_over("Jane Doe", "bld_channel");
    let mut rx = builder.subscribe().unwrap();
    builder.finalize().unwrap();

    assert!(matches!(rx.try_recv(), Err(TryRecvError::Closed)));
    assert!(matches!(
        builder.subscribe(),
        Err(NameError::NotAllowed { .. })
    ));
}

#[test]
fn test_rollback_never_empties_history() {
    let mut builder = builder_over("Jane Ann Doe", "bld_floor");
    builder.shorten().unwrap();

    builder.rollback().unwrap();
    assert_eq!(builder.current().longest().unwrap(), "Jane Ann Doe");

    // Past the first entry, rollback keeps republishing the initial state.
    let mut rx = builder.subscribe().unwrap();
    builder.rollback().unwrap();
    builder.rollback().unwrap();
    assert_eq!(builder.history().len(), 1);
    assert_eq!(rx.try_recv().unwrap().longest().unwrap(), "Jane Ann Doe");
    assert_eq!(rx.try_recv().unwrap().longest().unwrap(), "Jane Ann Doe");
}

#[test]
fn test_edits_derive_from_current_state_not_history() {
    let mut builder = builder_over("Jane Ann Doe", "bld_chain");
    builder.uppercase().unwrap();
    // Shorten must act on the uppercased state, not on the original parse.
    assert_eq!(builder.shorten().unwrap().longest().unwrap(), "JANE DOE");
}

#[test]
fn test_flip_toggles_shared_order_and_reorder_does_not() {
    let config = Config::get("bld_flip");
    let mut builder = NameBuilder::new(parser::from_text("Jane Doe", &config).unwrap());

    builder.flip().unwrap();
    assert_eq!(config.order(), NameOrder::LastName);
    assert_eq!(builder.current().longest().unwrap(), "Doe Jane");

    builder.flip().unwrap();
    assert_eq!(config.order(), NameOrder::FirstName);

    builder.reorder(NameOrder::LastName).unwrap();
    assert_eq!(builder.current().longest().unwrap(), "Doe Jane");
    assert_eq!(config.order(), NameOrder::FirstName);
}

/// Flipping toggles the stored order for names parsed afterwards; names
/// built earlier keep the order they captured at construction.
#[test]
fn test_flip_affects_later_parses_not_existing_names() {
    let config = Config::get("bld_flip_siblings");
    let sibling = parser::from_text("John Smith", &config).unwrap();
    let mut builder = NameBuilder::new(parser::from_text("Jane Doe", &config).unwrap());

    builder.flip().unwrap();
    assert_eq!(config.order(), NameOrder::LastName);
    assert_eq!(sibling.longest().unwrap(), "John Smith");

    let newcomer = parser::from_text("Ada Lovelace", &config).unwrap();
    assert_eq!(newcomer.longest().unwrap(), "Lovelace Ada");
}

#[test]
fn test_history_is_per_builder() {
    let mut left = builder_over("Jane Doe", "bld_iso_left");
    let mut right = builder_over("John Smith", "bld_iso_right");

    left.uppercase().unwrap();
    left.lowercase().unwrap();
    right.uppercase().unwrap();

    assert_eq!(left.history().len(), 3);
    assert_eq!(right.history().len(), 2);
}
