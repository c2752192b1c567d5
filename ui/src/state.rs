#![allow(non_snake_case)]

use dioxus::prelude::*;
use fingerprint_common::config::ServiceConfig;
use fingerprint_common::params::FingerprintParams;
use fingerprint_common::phase::RequestPhase;
use fingerprint_common::response::{ExperimentResult, FingerprintResult};
use fingerprint_common::view::{Tab, TabSet};

pub const TAB_GENERATOR: &str = "generator";
pub const TAB_EXPERIMENTS: &str = "experiments";
pub const TAB_SETTINGS: &str = "settings";

pub const TABS: &[Tab] = &[
    Tab {
        id: TAB_GENERATOR,
        label: "Fingerprint",
    },
    Tab {
        id: TAB_EXPERIMENTS,
        label: "Experiments",
    },
    Tab {
        id: TAB_SETTINGS,
        label: "Settings",
    },
];

// --- Global signals ---

/// Which tab and pane are showing
pub static ACTIVE_TAB: GlobalSignal<TabSet> = Global::new(|| TabSet::new(TABS));

/// Raw contents of the text area
pub static TEXT_INPUT: GlobalSignal<String> = Global::new(String::new);

/// Size, hash function, salt and smoothing as set on the controls
pub static PARAMS: GlobalSignal<FingerprintParams> = Global::new(FingerprintParams::default);

/// Generation panel lifecycle
pub static GENERATION: GlobalSignal<RequestPhase<FingerprintResult>> =
    Global::new(RequestPhase::default);

/// Experiment panel lifecycle, shared by all experiment buttons
pub static EXPERIMENT: GlobalSignal<RequestPhase<ExperimentResult>> =
    Global::new(RequestPhase::default);

/// Where the fingerprint service lives
pub static SERVICE_CONFIG: GlobalSignal<ServiceConfig> = Global::new(ServiceConfig::default);
