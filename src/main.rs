use clap::Parser;
use htmlgen::prelude::*;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Writes a showcase page: a navbar, a heading, a table and a chart.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Output file. Writes to stdout when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Inline third-party CSS and JS instead of linking the CDN
    #[arg(long, default_value_t = false)]
    embedded: bool,

    /// Directory holding the files to inline in embedded mode
    #[arg(long)]
    resources: Option<PathBuf>,

    /// JSON page configuration
    #[arg(long)]
    config: Option<PathBuf>,
}

fn showcase(mut page: Page) -> Result<Page, HtmlGenError> {
    page.require(Dependency::BootstrapBundle);
    page.add_style("body { padding: 2rem; }");
    page.add_on_ready(
        "document.querySelectorAll('[data-bs-toggle=\"tooltip\"]').forEach(el => new bootstrap.Tooltip(el));",
        "tooltips",
    );

    let quarters = [("Q1", 12.4), ("Q2", 15.1), ("Q3", 9.8), ("Q4", 17.3)];

    let mut table = Table::new()
        .class("table table-striped")
        .with_caption("Revenue by quarter")
        .header_row(header_row(["Quarter", "Revenue (M)"]));
    let mut chart = BarChart::new().id("revenue").name("Revenue");
    for (quarter, revenue) in quarters {
        let amount = format!("{revenue:.1}");
        table = table.body_row(row([quarter, amount.as_str()]));
        chart.add(quarter, revenue);
    }

    let mut nav = bootstrap::Navbar::new();
    nav.add_brand(anchor("#", "htmlgen"))?
        .add_active_entry(anchor("#revenue", "Revenue"), "nav-revenue")?;

    let content = bootstrap::container()
        .child(h1("htmlgen showcase"))
        .child(p("A page assembled from typed elements.").title("Generated"))
        .child(table)
        .child(chart.node()?);

    page.add(nav)?;
    page.add(content)?;
    Ok(page)
}

fn main() -> Result<(), HtmlGenError> {
    if env::var("RUST_LOG").is_err() {
        unsafe {
            env::set_var("RUST_LOG", "htmlgen=info");
        }
    }
    env_logger::init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => PageConfig::from_file(path)?,
        None => PageConfig::default(),
    };
    if args.embedded {
        config.delivery_mode = DeliveryMode::Embedded;
    }
    if let Some(dir) = &args.resources {
        config.resource_dir = Some(dir.clone());
    }

    let page = config.build_page().title("htmlgen showcase");
    if let Some(dir) = &config.resource_dir {
        log::info!("Reading embedded resources from {}", dir.display());
    }

    let page = showcase(page)?;
    let html = page.html();

    match &args.output {
        Some(path) => {
            fs::write(path, &html)?;
            log::info!("Wrote {} bytes to {}", html.len(), path.display());
        }
        None => print!("{html}"),
    }
    Ok(())
}
