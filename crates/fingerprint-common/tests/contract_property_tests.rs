mod fixtures;

use fingerprint_common::error::ServiceError;
use fingerprint_common::experiment::{self, ExperimentKind};
use fingerprint_common::params::FingerprintParams;
use fingerprint_common::request::FingerprintRequest;
use fingerprint_common::response::{decode_experiment_response, decode_fingerprint_response};
use fingerprint_common::view::{self, Tab, TabSet};
use proptest::prelude::*;

const TABS: &[Tab] = &[
    Tab { id: "a", label: "A" },
    Tab { id: "b", label: "B" },
    Tab { id: "c", label: "C" },
    Tab { id: "d", label: "D" },
];

proptest! {
    #[test]
    fn exactly_one_tab_active_after_clicks(clicks in proptest::collection::vec(0usize..6, 0..20)) {
        let mut tabs = TabSet::new(TABS);
        let ids = ["a", "b", "c", "d", "x", "y"];
        let mut expected = "a";
        for i in clicks {
            if tabs.activate(ids[i]) {
                expected = ids[i];
            }
            let active = TABS.iter().filter(|t| tabs.is_active(t.id)).count();
            prop_assert_eq!(active, 1);
            prop_assert_eq!(tabs.active_id(), Some(expected));
        }
    }

    #[test]
    fn slider_echo_suffix_only_for_salt(id in "[a-z-]{1,20}", value in 0u32..1000) {
        let shown = view::slider_display(&id, value);
        if id == view::SALT_SLIDER_ID {
            prop_assert_eq!(shown, format!("{}%", value));
        } else {
            prop_assert_eq!(shown, value.to_string());
        }
    }

    #[test]
    fn blank_text_never_builds_a_request(text in "[ \t\n\r]{0,30}") {
        prop_assert!(FingerprintRequest::new(&text, FingerprintParams::default()).is_err());
    }

    #[test]
    fn salt_field_is_percent_over_hundred(percent in 0u32..=100) {
        let params = FingerprintParams { salt_percent: percent, ..FingerprintParams::default() };
        let req = FingerprintRequest::new("text", params).unwrap();
        let salt = req
            .form_fields()
            .into_iter()
            .find(|(n, _)| *n == "saltLevel")
            .map(|(_, v)| v)
            .unwrap();
        let parsed: f64 = salt.parse().unwrap();
        prop_assert!((0.0..=1.0).contains(&parsed));
        prop_assert_eq!(parsed, percent as f64 / 100.0);
    }

    #[test]
    fn any_error_message_fails_both_endpoints(msg in "[a-zA-Z0-9 ]{1,40}") {
        let body = serde_json::json!({ "error": msg }).to_string();
        prop_assert_eq!(
            decode_fingerprint_response(&body).unwrap_err(),
            ServiceError::Service(msg.clone())
        );
        prop_assert_eq!(
            decode_experiment_response("collision", &body).unwrap_err(),
            ServiceError::Service(msg)
        );
    }

    #[test]
    fn stats_within_contract_decode(total in 0u64..1_000_000, unique_frac in 0u64..=100, c in 0u64..1000, m in 0u64..100) {
        let unique = total * unique_frac / 100;
        let result = decode_fingerprint_response(&fixtures::fingerprint_body(total, unique, c, m)).unwrap();
        let values: Vec<u64> = result.stats.entries().iter().map(|e| e.value).collect();
        prop_assert_eq!(values, vec![total, unique, c, m]);
    }

    #[test]
    fn unknown_types_use_generic_text(kind in "[a-z]{0,15}") {
        prop_assume!(kind.parse::<ExperimentKind>().is_err());
        prop_assert_eq!(experiment::title_for(&kind), experiment::GENERIC_TITLE);
        prop_assert_eq!(experiment::description_for(&kind), experiment::GENERIC_DESCRIPTION);
    }
}
