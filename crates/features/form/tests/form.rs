use pgen_event_bus::{EventBus, EventReceiverExt};
use pgen_form::{FormSnapshot, PasswordForm, RegenerationReason};
use pgen_generator::{Alphabet, GeneratorConfig, PasswordGenerator};

fn seeded_form(bus: &EventBus, seed: u64) -> PasswordForm {
    let generator = PasswordGenerator::seeded(seed);
    PasswordForm::with_generator(bus.clone(), GeneratorConfig::default(), generator)
        .expect("form should initialize")
}

#[test]
fn initial_state_matches_defaults() {
    let bus = EventBus::new();
    let form = seeded_form(&bus, 1);

    let snapshot = form.snapshot();
    assert_eq!(snapshot.revision, 0);
    assert_eq!(snapshot.reason, RegenerationReason::Initial);
    assert_eq!(snapshot.config, GeneratorConfig::default());
    assert_eq!(snapshot.password.len(), 8);
    assert!(snapshot.password.as_str().chars().all(|c| c.is_ascii_alphabetic()));

    let latest = bus.latest::<FormSnapshot>().expect("initial snapshot is published");
    assert_eq!(*latest, snapshot);
}

#[test]
fn each_watched_change_regenerates_once() {
    let bus = EventBus::new();
    let mut form = seeded_form(&bus, 2);

    assert!(form.set_length(16).unwrap());
    assert_eq!(form.password().len(), 16);
    assert_eq!(form.snapshot().reason, RegenerationReason::LengthChanged);

    assert!(form.toggle_digits().unwrap());
    assert!(form.config().include_digits());
    assert_eq!(form.snapshot().reason, RegenerationReason::DigitsToggled);

    assert!(form.set_include_symbols(true).unwrap());
    assert_eq!(form.snapshot().reason, RegenerationReason::SymbolsToggled);
    assert_eq!(form.password().len(), 16, "enabling symbols keeps the length");

    let alphabet = Alphabet::for_config(form.config());
    assert!(form.password().as_str().chars().all(|c| alphabet.contains(c)));

    assert!(!form.set_include_symbols(true).unwrap());
    assert_eq!(form.revision(), 3);

    form.regenerate().unwrap();
    assert_eq!(form.revision(), 4);
    assert_eq!(form.snapshot().reason, RegenerationReason::Requested);
}

#[test]
fn apply_replaces_whole_config() {
    let bus = EventBus::new();
    let mut form = seeded_form(&bus, 3);

    let next = GeneratorConfig::new(12, true, true);
    assert!(form.apply(next).unwrap());
    assert_eq!(form.config(), &next);
    assert_eq!(form.snapshot().reason, RegenerationReason::ConfigReplaced);
    assert!(!form.apply(next).unwrap());
    assert_eq!(form.revision(), 1);
}

#[test]
fn seeded_forms_produce_the_same_sequence() {
    let mut first = seeded_form(&EventBus::new(), 77);
    let mut second = seeded_form(&EventBus::new(), 77);

    assert_eq!(first.password(), second.password());
    first.set_length(20).unwrap();
    second.set_length(20).unwrap();
    assert_eq!(first.password(), second.password());
}

#[tokio::test]
async fn observers_see_every_regeneration() {
    let bus = EventBus::new();
    let mut form = seeded_form(&bus, 4);
    let mut rx = form.subscribe().unwrap();

    assert!(!rx.has_changed().unwrap(), "current snapshot counts as seen");

    form.set_length(10).unwrap();
    let snapshot = rx.recv_event().await.expect("bus is open");
    assert_eq!(snapshot.revision, 1);
    assert_eq!(snapshot.password.len(), 10);
    assert_eq!(&snapshot.password, form.password());

    form.set_length(10).unwrap();
    assert!(!rx.has_changed().unwrap(), "no-op set must not notify");

    form.toggle_symbols().unwrap();
    let snapshot = rx.recv_event().await.expect("bus is open");
    assert_eq!(snapshot.revision, 2);
    assert!(snapshot.config.include_symbols());
}

#[test]
fn highlight_covers_at_most_twenty_chars() {
    let bus = EventBus::new();
    let mut form = seeded_form(&bus, 5);

    let (selected, rest) = form.highlight();
    assert_eq!(selected.len(), 8);
    assert!(rest.is_empty());

    form.set_length(30).unwrap();
    let (selected, rest) = form.highlight();
    assert_eq!(selected.len(), 20);
    assert_eq!(rest.len(), 10);
    assert_eq!(format!("{selected}{rest}"), form.password().as_str());
}
