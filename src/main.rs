#![warn(clippy::perf, clippy::style, warnings)]

mod common;
mod prelude;
mod render;
mod serve;

use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use common::{Command, Context, InnerContext};
use prelude::*;
use render::TemplateKind;

fn main() -> Result<()> {
    install_diagnostics()?;

    let ctx = InnerContext::init()?;

    match &ctx.args.command {
        Command::Serve { address, port } => {
            serve::serve(Arc::clone(&ctx), address.clone(), *port)
        }
        Command::Convert { input, output } => convert_file(&ctx, input, output.as_deref()),
    }
}

/// Installs the color-eyre hooks and the tracing subscriber stack.
fn install_diagnostics() -> Result<()> {
    color_eyre::install()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("mdpress=info,tower_http=warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_error::ErrorLayer::default())
        .init();

    Ok(())
}

/// One-shot mode: renders a Markdown file through the document pipeline and
/// writes the PDF next to it (or to the given destination).
fn convert_file(ctx: &Context, input: &Path, output: Option<&Path>) -> Result<()> {
    let source = std::fs::read_to_string(input)
        .wrap_err_with(|| format!("Could not read {}.", input.display()))
        .suggestion("Check that the input path exists and is readable.")?;

    let fragment = render::pulldown::to_html(&source, &ctx.config.render);

    let bytes = render::render(
        TemplateKind::Document,
        minijinja::context! { content => fragment },
    )?;

    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| input.with_extension("pdf"));

    std::fs::write(&output, &bytes)
        .wrap_err_with(|| format!("Could not write {}.", output.display()))?;

    info!("Wrote {} ({} bytes).", output.display(), bytes.len());

    Ok(())
}
