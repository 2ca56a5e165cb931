//! Addon-menu catalog declaration and validation.

use crate::menu::action::ModuleAction;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One clickable entry contributed by a module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntrySpec {
    /// User-visible entry label, unique across the catalog.
    pub label: String,
    /// Action forwarded to the module when the entry is triggered.
    pub action: ModuleAction,
}

/// Menu entries contributed by one optional module.
///
/// A module may contribute several entries; the declaration order is the
/// order entries appear in the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuExtensionSpec {
    /// Module name as registered with the host, e.g. `CAVEStereo`.
    pub capability: String,
    /// Ordered entries this module contributes.
    pub entries: Vec<MenuEntrySpec>,
}

/// Validated, ordered catalog of module menu contributions.
///
/// Deserialization goes through the same validation as [`MenuCatalog::new`],
/// so a catalog cannot enter the process unvalidated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CatalogDeclaration")]
pub struct MenuCatalog {
    extensions: Vec<MenuExtensionSpec>,
}

/// Raw declaration shape accepted from host configuration.
#[derive(Deserialize)]
struct CatalogDeclaration {
    extensions: Vec<MenuExtensionSpec>,
}

impl TryFrom<CatalogDeclaration> for MenuCatalog {
    type Error = CatalogValidationError;

    fn try_from(declaration: CatalogDeclaration) -> Result<Self, Self::Error> {
        Self::new(declaration.extensions)
    }
}

impl MenuCatalog {
    /// Builds a catalog after declaration validation.
    pub fn new(extensions: Vec<MenuExtensionSpec>) -> Result<Self, CatalogValidationError> {
        let mut capability_dedup = BTreeSet::<String>::new();
        let mut label_dedup = BTreeSet::<String>::new();

        for extension in &extensions {
            let capability = extension.capability.trim();
            if capability.is_empty() {
                return Err(CatalogValidationError::EmptyCapability);
            }
            if !is_valid_capability_name(capability) {
                return Err(CatalogValidationError::InvalidCapability(
                    extension.capability.clone(),
                ));
            }
            if !capability_dedup.insert(capability.to_string()) {
                return Err(CatalogValidationError::DuplicateCapability(
                    capability.to_string(),
                ));
            }

            if extension.entries.is_empty() {
                return Err(CatalogValidationError::MissingEntries(
                    capability.to_string(),
                ));
            }
            for entry in &extension.entries {
                let label = entry.label.trim();
                if label.is_empty() {
                    return Err(CatalogValidationError::EmptyLabel(capability.to_string()));
                }
                if !label_dedup.insert(label.to_string()) {
                    return Err(CatalogValidationError::DuplicateLabel(label.to_string()));
                }
            }
        }

        Ok(Self { extensions })
    }

    /// Returns the stock view-menu catalog shipped with the host.
    ///
    /// The content is fixed at compile time and kept in sync with the
    /// validation rules by test coverage, so no runtime validation runs.
    pub fn view_menu_defaults() -> Self {
        let extensions = vec![
            MenuExtensionSpec {
                capability: "CAVEStereo".to_string(),
                entries: vec![
                    MenuEntrySpec {
                        label: "Cave".to_string(),
                        action: ModuleAction::ShowPrimaryView,
                    },
                    MenuEntrySpec {
                        label: "Stereoscopy".to_string(),
                        action: ModuleAction::ShowSecondaryView,
                    },
                ],
            },
            MenuExtensionSpec {
                capability: "PythonScript".to_string(),
                entries: vec![MenuEntrySpec {
                    label: "Python Console".to_string(),
                    action: ModuleAction::ShowConsole,
                }],
            },
        ];
        Self { extensions }
    }

    /// Returns extensions in declaration order.
    pub fn extensions(&self) -> &[MenuExtensionSpec] {
        &self.extensions
    }

    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }
}

fn is_valid_capability_name(value: &str) -> bool {
    let mut chars = value.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return false,
    };
    if !first.is_ascii_alphabetic() {
        return false;
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Catalog declaration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogValidationError {
    EmptyCapability,
    InvalidCapability(String),
    DuplicateCapability(String),
    MissingEntries(String),
    EmptyLabel(String),
    DuplicateLabel(String),
}

impl Display for CatalogValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCapability => write!(f, "catalog capability name must not be empty"),
            Self::InvalidCapability(value) => {
                write!(f, "catalog capability name is invalid: {value}")
            }
            Self::DuplicateCapability(value) => {
                write!(f, "catalog capability is duplicated: {value}")
            }
            Self::MissingEntries(value) => {
                write!(f, "catalog extension declares no entries: {value}")
            }
            Self::EmptyLabel(value) => {
                write!(f, "catalog extension has an empty entry label: {value}")
            }
            Self::DuplicateLabel(value) => {
                write!(f, "catalog entry label is duplicated: {value}")
            }
        }
    }
}

impl Error for CatalogValidationError {}
