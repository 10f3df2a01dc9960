use crate::LiteralPatch;

/// Dashboard page, relative to the web repository root.
pub const DEFAULT_TARGET: &str = "apps/web/src/app/dashboard/page.tsx";

const HEADER_BUTTONS: &str = r#"            <div className="flex items-center gap-3">
              <button
                onClick={() => loadAllData()}
                className="px-4 py-2 bg-gradient-to-r from-blue-900 to-cyan-600 text-white rounded-lg hover:from-blue-800 hover:to-cyan-500 flex items-center gap-2 shadow-md transition-all"
              >
                🔄 Atualizar
              </button>
              <button
                onClick={handleLogout}
                className="px-4 py-2 border border-red-500 text-red-600 rounded-lg hover:bg-red-50 flex items-center gap-2 transition-all"
              >
                🚪 Sair
              </button>
            </div>"#;

const HEADER_BUTTONS_WITH_PROFILE: &str = r#"            <div className="flex items-center gap-3">
              <button
                onClick={() => loadAllData()}
                className="px-4 py-2 bg-gradient-to-r from-blue-900 to-cyan-600 text-white rounded-lg hover:from-blue-800 hover:to-cyan-500 flex items-center gap-2 shadow-md transition-all"
              >
                🔄 Atualizar
              </button>
              <button
                onClick={() => window.location.href = '/profile'}
                className="px-4 py-2 bg-blue-500 text-white rounded-lg hover:bg-blue-600 flex items-center gap-2 shadow-md transition-all"
              >
                <User className="w-4 h-4" />
                Perfil
              </button>
              <button
                onClick={handleLogout}
                className="px-4 py-2 border border-red-500 text-red-600 rounded-lg hover:bg-red-50 flex items-center gap-2 transition-all"
              >
                <LogOut className="w-4 h-4" />
                Sair
              </button>
            </div>"#;

/// Adds a Profile button to the dashboard header and swaps the emoji on the
/// logout button for `User`/`LogOut` icon components.
pub const DASHBOARD_PATCH: LiteralPatch<'static> =
    LiteralPatch::new(HEADER_BUTTONS, HEADER_BUTTONS_WITH_PROFILE);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocks_differ() {
        assert_ne!(DASHBOARD_PATCH.old, DASHBOARD_PATCH.new);
        assert!(!DASHBOARD_PATCH.new.contains(DASHBOARD_PATCH.old));
    }

    #[test]
    fn test_new_block_adds_profile_button() {
        assert!(DASHBOARD_PATCH.new.contains("window.location.href = '/profile'"));
        assert!(DASHBOARD_PATCH.new.contains("<User className=\"w-4 h-4\" />"));
        assert!(DASHBOARD_PATCH.new.contains("<LogOut className=\"w-4 h-4\" />"));
        assert!(!DASHBOARD_PATCH.old.contains("Perfil"));
    }

    #[test]
    fn test_blocks_keep_indentation() {
        for block in [DASHBOARD_PATCH.old, DASHBOARD_PATCH.new] {
            assert!(block.starts_with("            <div className=\"flex items-center gap-3\">"));
            assert!(block.ends_with("            </div>"));
        }
    }
}
