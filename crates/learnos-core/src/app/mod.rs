//! App catalogue: descriptors, icons and the built-in default dock.

mod descriptor;
mod icon;

pub use descriptor::AppDescriptor;
pub use icon::Icon;

/// Id of the Number Play sandbox.
pub const NUMBER_PLAY_ID: &str = "NumberPlay";
/// Id of the Pattern Garden sandbox.
pub const PATTERN_GARDEN_ID: &str = "PatternGarden";
/// Id of the Forces sandbox.
pub const FORCES_ID: &str = "Forces";

/// The static dock shown before (or without) any backend personalization.
pub fn default_apps() -> Vec<AppDescriptor> {
    vec![
        AppDescriptor::new(NUMBER_PLAY_ID, "Number Play", "Calculator")
            .with_hint("Try making the same total in many ways"),
        AppDescriptor::new(PATTERN_GARDEN_ID, "Pattern Garden", "Grid")
            .with_hint("Paint symmetry and repetition"),
        AppDescriptor::new(FORCES_ID, "Forces Sandbox", "Orbit").with_hint("Find equilibrium"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_apps_order_and_icons() {
        let apps = default_apps();
        let ids: Vec<&str> = apps.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec![NUMBER_PLAY_ID, PATTERN_GARDEN_ID, FORCES_ID]);
        assert!(apps.iter().all(|a| a.resolved_icon() != Icon::Application));
        assert!(apps.iter().all(|a| a.hint.is_some()));
    }
}
