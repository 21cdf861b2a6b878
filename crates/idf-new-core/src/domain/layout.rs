//! Well-known file names and literals of the ESP-IDF project layout.

/// Board implementation source every board directory must contain.
pub const BOARD_IMPL: &str = "board_impl.c";

/// Optional per-board metadata file.
pub const BOARD_META_FILE: &str = "board.json";

/// Optional component manifest copied next to the board source.
pub const COMPONENT_MANIFEST: &str = "idf_component.yml";

pub const CMAKE_LISTS: &str = "CMakeLists.txt";

/// Component directory holding application sources.
pub const MAIN_DIR: &str = "main";

/// Placeholder in the template's top-level `CMakeLists.txt`.
pub const PROJECT_PLACEHOLDER: &str = "project(base_project)";

pub const KCONFIG_PROJBUILD: &str = "Kconfig.projbuild";

/// Kconfig fragment shipped with a feature.
pub const KCONFIG_SNIPPET: &str = "Kconfig";

/// `project(<name>)` line for the top-level build descriptor.
pub fn project_declaration(name: &str) -> String {
    format!("project({name})")
}
