//! Then steps for revision blurb BDD scenarios.

use super::world::BlurbWorld;
use drawer::blurb::domain::RevisionBlurb;
use rstest_bdd_macros::then;

fn bound_blurb(world: &BlurbWorld) -> Result<&RevisionBlurb, eyre::Report> {
    world
        .blurb
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no blurb bound in scenario world"))
}

fn rendered_markup(world: &BlurbWorld) -> Result<&str, eyre::Report> {
    world
        .markup
        .as_deref()
        .ok_or_else(|| eyre::eyre!("no markup rendered in scenario world"))
}

#[then(r#"the blurb href is "{href}""#)]
fn blurb_href_is(world: &BlurbWorld, href: String) -> Result<(), eyre::Report> {
    let blurb = bound_blurb(world)?;
    if blurb.href() != href {
        return Err(eyre::eyre!("expected href {href}, found {}", blurb.href()));
    }
    Ok(())
}

#[then("the status indicator is enabled")]
fn status_indicator_enabled(world: &BlurbWorld) -> Result<(), eyre::Report> {
    if !bound_blurb(world)?.show_status() {
        return Err(eyre::eyre!("expected the status indicator to be enabled"));
    }
    Ok(())
}

#[then("the status indicator is disabled")]
fn status_indicator_disabled(world: &BlurbWorld) -> Result<(), eyre::Report> {
    if bound_blurb(world)?.show_status() {
        return Err(eyre::eyre!("expected the status indicator to be disabled"));
    }
    Ok(())
}

#[then(r#"the execution status is "{status}""#)]
fn execution_status_is(world: &BlurbWorld, status: String) -> Result<(), eyre::Report> {
    let blurb = bound_blurb(world)?;
    if blurb.exec().status != status {
        return Err(eyre::eyre!(
            "expected execution status {status}, found {}",
            blurb.exec().status
        ));
    }
    Ok(())
}

#[then(r#"the markup links to "{href}""#)]
fn markup_links_to(world: &BlurbWorld, href: String) -> Result<(), eyre::Report> {
    let markup = rendered_markup(world)?;
    let anchor = format!(r#"href="{href}""#);
    if !markup.contains(&anchor) {
        return Err(eyre::eyre!("expected markup to contain {anchor}: {markup}"));
    }
    Ok(())
}

#[then(r#"the markup shows the execution status "{status}""#)]
fn markup_shows_status(world: &BlurbWorld, status: String) -> Result<(), eyre::Report> {
    let markup = rendered_markup(world)?;
    if !markup.contains(&format!("exec-status-{status}")) {
        return Err(eyre::eyre!(
            "expected markup to show execution status {status}: {markup}"
        ));
    }
    Ok(())
}
