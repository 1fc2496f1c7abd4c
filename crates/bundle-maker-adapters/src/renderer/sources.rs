//! Text sources rendered from the built-in templates.

use bundle_maker_core::domain::RenderContext;

use crate::builtin_templates::{BUNDLE_CLASS, EXTENSION_CLASS, INDEX_TWIG, ROUTES_YAML};

/// Bundle class, `src/<Bundle>Bundle.php`.
pub fn bundle_class(ctx: &RenderContext) -> String {
    ctx.render(BUNDLE_CLASS)
}

/// Container extension, `src/DependencyInjection/<Bundle>Extension.php`.
pub fn extension_class(ctx: &RenderContext) -> String {
    ctx.render(EXTENSION_CLASS)
}

pub fn routes_config(ctx: &RenderContext) -> String {
    ctx.render(ROUTES_YAML)
}

pub fn index_template(ctx: &RenderContext) -> String {
    ctx.render(INDEX_TWIG)
}
