//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `addonbar_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use addonbar_core::{supported_run_mode_strings, MenuCatalog};

fn main() {
    println!("addonbar_core ping={}", addonbar_core::ping());
    println!("addonbar_core version={}", addonbar_core::core_version());
    println!("run_modes={}", supported_run_mode_strings().join("|"));

    let catalog = MenuCatalog::view_menu_defaults();
    for extension in catalog.extensions() {
        for entry in &extension.entries {
            println!(
                "catalog capability={} label={} action={}",
                extension.capability,
                entry.label,
                entry.action.as_str()
            );
        }
    }
}
