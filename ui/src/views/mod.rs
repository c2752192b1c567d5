pub mod experiments;
pub mod fingerprint_results;
pub mod generator;
pub mod param_slider;
pub mod settings;
pub mod tabs;

/// `base`, plus `hidden` when the element should not show.
pub fn visibility_class(base: &str, visible: bool) -> String {
    if visible {
        base.to_string()
    } else {
        format!("{} hidden", base)
    }
}
