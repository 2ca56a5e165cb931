//! Closed set of actions a menu entry can forward to a module.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Action forwarded to one optional host module when its entry is triggered.
///
/// The set is closed so catalogs are validated when they are built instead
/// of resolving free-form action names at click time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleAction {
    /// Open the module's primary view window.
    ShowPrimaryView,
    /// Open the module's secondary view window.
    ShowSecondaryView,
    /// Open the module's interactive console.
    ShowConsole,
}

impl ModuleAction {
    /// Stable string id used in catalog declarations and diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ShowPrimaryView => MODULE_ACTION_SHOW_PRIMARY_VIEW,
            Self::ShowSecondaryView => MODULE_ACTION_SHOW_SECONDARY_VIEW,
            Self::ShowConsole => MODULE_ACTION_SHOW_CONSOLE,
        }
    }
}

/// Catalog string value for the primary-view action.
pub const MODULE_ACTION_SHOW_PRIMARY_VIEW: &str = "show_primary_view";
/// Catalog string value for the secondary-view action.
pub const MODULE_ACTION_SHOW_SECONDARY_VIEW: &str = "show_secondary_view";
/// Catalog string value for the console action.
pub const MODULE_ACTION_SHOW_CONSOLE: &str = "show_console";

const SUPPORTED_MODULE_ACTION_STRINGS: &[&str] = &[
    MODULE_ACTION_SHOW_PRIMARY_VIEW,
    MODULE_ACTION_SHOW_SECONDARY_VIEW,
    MODULE_ACTION_SHOW_CONSOLE,
];

/// Returns supported action declaration strings.
pub fn supported_module_action_strings() -> &'static [&'static str] {
    SUPPORTED_MODULE_ACTION_STRINGS
}

/// Parses one module action from a catalog declaration string.
pub fn parse_module_action(value: &str) -> Result<ModuleAction, ModuleActionError> {
    let normalized = value.trim();
    if normalized.is_empty() {
        return Err(ModuleActionError::EmptyAction);
    }

    match normalized {
        MODULE_ACTION_SHOW_PRIMARY_VIEW => Ok(ModuleAction::ShowPrimaryView),
        MODULE_ACTION_SHOW_SECONDARY_VIEW => Ok(ModuleAction::ShowSecondaryView),
        MODULE_ACTION_SHOW_CONSOLE => Ok(ModuleAction::ShowConsole),
        other => Err(ModuleActionError::UnsupportedAction(other.to_string())),
    }
}

/// Module action parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleActionError {
    EmptyAction,
    UnsupportedAction(String),
}

impl Display for ModuleActionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyAction => write!(f, "module action value must not be empty"),
            Self::UnsupportedAction(value) => {
                write!(f, "module action is unsupported: {value}")
            }
        }
    }
}

impl Error for ModuleActionError {}

#[cfg(test)]
mod tests {
    use super::{
        parse_module_action, supported_module_action_strings, ModuleAction, ModuleActionError,
    };

    #[test]
    fn parses_all_supported_module_actions() {
        assert_eq!(
            parse_module_action("show_primary_view").expect("primary parse"),
            ModuleAction::ShowPrimaryView
        );
        assert_eq!(
            parse_module_action("show_secondary_view").expect("secondary parse"),
            ModuleAction::ShowSecondaryView
        );
        assert_eq!(
            parse_module_action("show_console").expect("console parse"),
            ModuleAction::ShowConsole
        );
    }

    #[test]
    fn rejects_empty_module_action() {
        let err = parse_module_action("  ").expect_err("empty action must fail");
        assert_eq!(err, ModuleActionError::EmptyAction);
    }

    #[test]
    fn rejects_unsupported_module_action() {
        let err = parse_module_action("show_settings").expect_err("unsupported action must fail");
        assert_eq!(
            err,
            ModuleActionError::UnsupportedAction("show_settings".to_string())
        );
    }

    #[test]
    fn action_ids_round_trip_through_parse() {
        for value in supported_module_action_strings() {
            let action = parse_module_action(value).expect("supported action should parse");
            assert_eq!(action.as_str(), *value);
        }
    }
}
