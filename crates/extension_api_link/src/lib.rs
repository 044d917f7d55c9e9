//! Extension that links the `:api` project into application projects.
//!
//! When a project applies the Android application marker plugin, this
//! extension adds the workspace's `:api` project as an `implementation`
//! dependency of that project, so application projects never have to declare
//! the link by hand. A workspace without an `:api` project fails the
//! configuration pass outright - the link is required, not best-effort.
//!
//! Projects that never apply the marker plugin are left untouched: no
//! dependency, no error, no trace.

use krane_extension_protocol::{
    BuildExtension, BuildUnit, Configuration, ExtensionError, ExtensionResult, PluginId,
    ProjectPath,
};
use serde_json::{json, Value as JsonValue};

/// Marker plugin id identifying an Android application project.
///
/// Treated as an opaque constant; the extension never parses or validates
/// what the host means by it.
pub const ANDROID_APPLICATION_PLUGIN_ID: &str = "com.android.application";

/// Path of the project this extension links. Fixed by convention, not
/// configurable.
pub const API_PROJECT_PATH: &str = ":api";

fn marker_id() -> PluginId {
    PluginId::new(ANDROID_APPLICATION_PLUGIN_ID).expect("marker plugin id is a valid constant")
}

fn api_path() -> ProjectPath {
    ProjectPath::new(API_PROJECT_PATH).expect("api project path is a valid constant")
}

/// The conditional dependency linker.
pub struct ApiLinkExtension;

impl ApiLinkExtension {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for ApiLinkExtension {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildExtension for ApiLinkExtension {
    fn name(&self) -> &str {
        "API Link Extension"
    }

    fn key(&self) -> &str {
        "api-link"
    }

    fn apply(&self, unit: &mut dyn BuildUnit) -> ExtensionResult<()> {
        unit.when_plugin_applied(
            marker_id(),
            Box::new(|unit| {
                let Some(api) = unit.find_project(&api_path()) else {
                    return Err(ExtensionError::MissingDependencyTarget(
                        "the api-link extension requires a project named ':api' in the workspace"
                            .to_string(),
                    ));
                };
                unit.add_dependency(Configuration::Implementation, &api);
                unit.log_info(&format!(
                    "api-link applied: added ':api' dependency to {}",
                    unit.path()
                ));
                Ok(())
            }),
        )
    }

    fn configuration_options(&self) -> Option<JsonValue> {
        // The linked project path is fixed by convention.
        Some(json!({
            "type": "object",
            "description": "The api-link extension takes no options",
            "properties": {},
            "additionalProperties": false
        }))
    }
}
