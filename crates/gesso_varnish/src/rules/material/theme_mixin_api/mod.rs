//! material/theme-mixin-api
//!
//! Enforce a consistent API for component theme mixins.
//!
//! Applies to theme files (`_<component>-theme.scss`) and checks that:
//!
//! 1. Theme mixin arguments are named consistently: `$theme-or-color-config`
//!    for `theme`, `$config-or-theme` for `density`, `color` and `typography`.
//! 2. The scoped mixins extract their configuration, since consumers may pass
//!    a whole theme object to them.
//! 3. `theme` mixins retrieve the theme through the legacy color API and nest
//!    all styles inside the duplicate styles check, so duplicated theme output
//!    can be detected.
//!
//! Mixins whose name starts with `_` or `private-` are internal and skipped.
//!
//! ## Fixes
//!
//! Argument names, a missing legacy extraction, a missing duplicate styles
//! check and a missing configuration extraction are repaired in fix mode.
//! Argument counts, misnamed variables and misplaced statements are always
//! reported.

mod component;
mod locator;
mod system;
mod theme;

use compact_str::CompactString;
use gesso_relief::ast::SourceLocation;
use gesso_relief::NodePath;
use tracing::{debug, trace};

use crate::context::LintContext;
use crate::diagnostic::{LintDiagnostic, Severity};
use crate::rule::{Rule, RuleMeta};

pub use component::component_name_from_path;
pub use locator::{locate_mixins, LocatedMixin, MixinKind};

static META: RuleMeta = RuleMeta {
    name: "material/theme-mixin-api",
    description: "Enforce a consistent API for component theme mixins",
    fixable: true,
    default_severity: Severity::Error,
};

/// Theme mixin API rule
pub struct ThemeMixinApi;

impl Rule for ThemeMixinApi {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn check(&self, ctx: &mut LintContext<'_>) {
        let Some(component) = component_name_from_path(ctx.filename) else {
            debug!(file = ctx.filename, "not a theme file, skipping");
            return;
        };

        for mixin in locate_mixins(ctx.sheet) {
            trace!(
                path = %mixin.path,
                kind = mixin.kind.as_str(),
                args = mixin.args.len(),
                "validating theme mixin"
            );
            let findings = match mixin.kind {
                MixinKind::Theme => theme::validate(&mixin, &component),
                MixinKind::Density | MixinKind::Color | MixinKind::Typography => {
                    system::validate(&mixin)
                }
            };
            ctx.report_all(&mixin.path, findings);
        }
    }
}

fn diagnostic(
    message: impl Into<CompactString>,
    node: NodePath,
    source: &SourceLocation,
) -> LintDiagnostic {
    LintDiagnostic::new(META.name, message, node, source)
}
