//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for form shortcuts
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Show/hide password shortcut display
/// Ctrl+R works on all platforms (Cmd+R also works on macOS)
pub const REVEAL_SHORTCUT: &str = "Ctrl+R";

/// Switch between the login and registration forms
/// - macOS: "Cmd+N"
/// - Linux/Windows: "Ctrl+N"
#[cfg(target_os = "macos")]
pub const SWITCH_FORM_SHORTCUT: &str = "Cmd+N";

#[cfg(not(target_os = "macos"))]
pub const SWITCH_FORM_SHORTCUT: &str = "Ctrl+N";

/// Returns true if the key carries Ctrl or the platform shortcut modifier
pub fn is_shortcut(modifiers: KeyModifiers) -> bool {
    modifiers.intersects(KeyModifiers::CONTROL | SHORTCUT_MODIFIER)
}
