//! Page templates compiled into the binary.

use common::AppResult;
use domain::{GuardBinding, MAX_PASSWORD_LENGTH};
use tera::{Context, Tera};

/// Page names served by the site
pub const INDEX_PAGE: &str = "index.html";
pub const ANALYSER_PAGE: &str = "analyser.html";
pub const SIMULATOR_PAGE: &str = "simulator.html";

/// Build the template set.
pub fn load_templates() -> AppResult<Tera> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("base.html", include_str!("../templates/base.html")),
        (INDEX_PAGE, include_str!("../templates/index.html")),
        (ANALYSER_PAGE, include_str!("../templates/analyser.html")),
        (SIMULATOR_PAGE, include_str!("../templates/simulator.html")),
    ])?;
    Ok(tera)
}

/// Context shared by every page.
pub fn page_context(binding: &GuardBinding) -> Context {
    let mut ctx = Context::new();
    ctx.insert("binding", binding);
    ctx.insert("max_length", &MAX_PASSWORD_LENGTH);
    ctx
}
