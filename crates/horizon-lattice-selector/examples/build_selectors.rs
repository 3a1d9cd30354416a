//! Builds a few selectors and prints them, with builder tracing enabled.
//!
//! Run with: cargo run -p horizon-lattice-selector --example build_selectors

use horizon_lattice_selector::prelude::*;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("{}", id("main")?.class("container")?.class("editable")?.render());
    println!(
        "{}",
        element("a")?
            .attr(r#"href$=".png""#)?
            .pseudo_class("focus")?
            .render()
    );

    let mut rows = descendant(
        element("tr")?.pseudo_class("nth-of-type(even)")?,
        element("td")?.pseudo_class("nth-of-type(even)")?,
    );
    println!(
        "{}",
        subsequent_sibling(&mut rows, element("table")?.id("data")?).render()
    );

    // Rejected chains reset and report why.
    let mut expr = class("a")?;
    if let Err(err) = expr.element("div") {
        println!("error: {err}");
    }
    let mut expr = element("div")?;
    expr.id("main")?.pseudo_element("before")?;
    if let Err(err) = expr.pseudo_element("after") {
        println!("error: {err}");
    }

    Ok(())
}
