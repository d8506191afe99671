use encoders_core_site_contracts::{SitePageError, SiteService};

use crate::{environment::Environment, render};

/// Prints the page served at `path`, or the 404 page.
pub fn show(environment: &Environment, path: &str) -> anyhow::Result<()> {
    let site = environment.site();
    let mut out = std::io::stdout().lock();

    match site.page(path) {
        Ok(page) => render::page(&mut out, site, page)?,
        Err(SitePageError::NotFound(path)) => render::not_found(&mut out, site, &path)?,
    }

    Ok(())
}
