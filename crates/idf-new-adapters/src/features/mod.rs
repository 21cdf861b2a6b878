//! Built-in optional features.
//!
//! Every feature that ships with idf-new is listed in [`builtin_registry`].
//! Adding one means writing the handler and adding a line there.

mod gps;

use std::path::Path;

use idf_new_core::{application::FeatureRegistry, error::IdfNewResult};

pub use gps::GpsFeature;

/// Registry with every built-in feature, assets resolved under
/// `features_root/<flag>/`.
pub fn builtin_registry(features_root: &Path) -> IdfNewResult<FeatureRegistry> {
    FeatureRegistry::new().with(Box::new(GpsFeature::new(features_root.join(GpsFeature::FLAG))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registry_lists_gps() {
        let registry = builtin_registry(Path::new("/res/features")).unwrap();
        let flags: Vec<_> = registry.list().map(|f| f.flag().to_string()).collect();
        assert_eq!(flags, vec!["gps"]);
        assert_eq!(registry.get("gps").unwrap().name(), "GPS support");
    }
}
