use std::fs;
use std::io::Write;
use std::path::Path;

use log::{debug, info};

use crate::chart::Chart;
use crate::cli::{Cli, RenderArgs};
use crate::config::Config;
use crate::document::Document;
use crate::output::{HtmlFormatter, JsonFormatter, OutputFormat, to_config};
use crate::{ChartError, EXIT_ERROR, EXIT_SUCCESS, EXIT_VALIDATION_FAILED, Result};

use super::load_config;
use super::validate::validate_document;

#[must_use]
pub fn run_render(args: &RenderArgs, cli: &Cli) -> i32 {
    match run_render_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_ERROR
        }
    }
}

/// Renders a chart description to HTML or JSON.
///
/// Charts are validated first; nothing is written if any chart fails.
///
/// # Errors
/// Returns an error if configuration, the document or the template cannot be
/// loaded, or if the output cannot be written.
pub fn run_render_impl(args: &RenderArgs, cli: &Cli) -> Result<i32> {
    let mut config = load_config(cli.config.as_deref(), cli.no_config)?;
    apply_cli_overrides(&mut config, args);

    let document = Document::load(&args.input)?;
    let report = validate_document(&document);
    if !report.is_ok() {
        for problem in &report.problems {
            eprintln!("Invalid {problem}");
        }
        return Ok(EXIT_VALIDATION_FAILED);
    }

    let charts = document.build()?;
    let format = args.effective_format();
    info!(charts = charts.len(), format:? = format; "Rendering document");

    match format {
        OutputFormat::Html => {
            let formatter = html_formatter(&config, &document, args.title.as_deref())?;
            let refs: Vec<&Chart<'_>> = charts.iter().collect();
            match args.output.as_deref() {
                Some(path) => formatter.save(&refs, path)?,
                None => formatter.write_to(&refs, std::io::stdout().lock())?,
            }
        }
        OutputFormat::Json => {
            let content = render_json(&charts, config.json.pretty)?;
            write_output(args.output.as_deref(), &content)?;
        }
    }

    if let Some(path) = &args.output {
        println!("Wrote {}", path.display());
    }
    Ok(EXIT_SUCCESS)
}

/// Applies CLI flags on top of loaded configuration.
pub fn apply_cli_overrides(config: &mut Config, args: &RenderArgs) {
    if let Some(template) = &args.template {
        config.html.template = Some(template.clone());
    }
    if let Some(url) = &args.library_url {
        config.html.library_url.clone_from(url);
    }
    if args.pretty {
        config.json.pretty = true;
    }
}

/// Title precedence: `--title`, then the document's title, then configuration.
///
/// # Errors
/// Returns `ChartError::FileRead` if the configured template cannot be read.
pub fn html_formatter(
    config: &Config,
    document: &Document,
    title: Option<&str>,
) -> Result<HtmlFormatter> {
    let title = title
        .or(document.title.as_deref())
        .unwrap_or(config.html.title.as_str());

    let mut formatter = HtmlFormatter::new()
        .with_title(title)
        .with_library_url(config.html.library_url.as_str())
        .with_size(config.html.width, config.html.height);

    if let Some(path) = &config.html.template {
        debug!(template:? = path; "Loading HTML template");
        let template = fs::read_to_string(path).map_err(|source| ChartError::FileRead {
            path: path.clone(),
            source,
        })?;
        formatter = formatter.with_template(template);
    }

    Ok(formatter)
}

/// One chart encodes as an object, several as an array.
///
/// # Errors
/// Returns an encoding error from any chart.
pub fn render_json(charts: &[Chart<'_>], pretty: bool) -> Result<String> {
    let formatter = JsonFormatter::new().pretty(pretty);
    let mut content = if let [chart] = charts {
        formatter.encode(&to_config(chart)?)?
    } else {
        let configs = charts.iter().map(to_config).collect::<Result<Vec<_>>>()?;
        formatter.encode(&configs)?
    };
    content.push('\n');
    Ok(content)
}

fn write_output(output_path: Option<&Path>, content: &str) -> Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content).map_err(|source| ChartError::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;
    } else {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(content.as_bytes())?;
        stdout.flush()?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
