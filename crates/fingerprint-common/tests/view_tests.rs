use fingerprint_common::view::*;

const TABS: &[Tab] = &[
    Tab {
        id: "generator",
        label: "Generator",
    },
    Tab {
        id: "experiments",
        label: "Experiments",
    },
    Tab {
        id: "about",
        label: "About",
    },
];

#[test]
fn first_tab_starts_active() {
    let tabs = TabSet::new(TABS);
    assert_eq!(tabs.active_id(), Some("generator"));
}

#[test]
fn clicking_a_tab_activates_only_its_pane() {
    let mut tabs = TabSet::new(TABS);
    assert!(tabs.activate("experiments"));
    let active: Vec<&str> = tabs
        .tabs()
        .iter()
        .filter(|t| tabs.is_active(t.id))
        .map(|t| t.id)
        .collect();
    assert_eq!(active, vec!["experiments"]);
}

#[test]
fn unknown_target_keeps_selection() {
    let mut tabs = TabSet::new(TABS);
    tabs.activate("about");
    assert!(!tabs.activate("missing"));
    assert_eq!(tabs.active_id(), Some("about"));
}

#[test]
fn empty_tab_set_has_no_active_tab() {
    let tabs = TabSet::new(&[]);
    assert_eq!(tabs.active_id(), None);
    assert!(!tabs.is_active("generator"));
}

#[test]
fn salt_slider_gets_percent_suffix() {
    assert_eq!(slider_display("salt-level", 50), "50%");
    assert_eq!(slider_display(SALT_SLIDER_ID, "0"), "0%");
}

#[test]
fn other_sliders_echo_bare_value() {
    assert_eq!(slider_display("smooth-radius", 3), "3");
    assert_eq!(slider_display("map-size", "128"), "128");
}
