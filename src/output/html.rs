use std::fmt::Write as _;
use std::fs::{self, Permissions};
use std::io::Write;
use std::path::Path;

use log::debug;
use tempfile::NamedTempFile;

use crate::chart::Chart;
use crate::error::{ChartError, Result};

use super::html_template::{
    CHART_BLOCK, DEFAULT_HEIGHT, DEFAULT_LIBRARY_URL, DEFAULT_TEMPLATE, DEFAULT_TITLE,
    DEFAULT_WIDTH,
};
use super::{ChartFormatter, JsonFormatter};

/// HTML formatter producing a standalone page that renders charts with Chart.js.
#[derive(Debug, Clone)]
pub struct HtmlFormatter {
    title: String,
    library_url: String,
    width: u32,
    height: u32,
    template: Option<String>,
}

impl Default for HtmlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlFormatter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            library_url: DEFAULT_LIBRARY_URL.to_string(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            template: None,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Where the page loads Chart.js from.
    #[must_use]
    pub fn with_library_url(mut self, url: impl Into<String>) -> Self {
        self.library_url = url.into();
        self
    }

    /// Canvas size in pixels.
    #[must_use]
    pub const fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Replaces the built-in page. The template is used verbatim apart from
    /// its `{{...}}` placeholders and must contain `{{chart}}` or `{{charts}}`.
    #[must_use]
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Renders one page holding every chart in `charts`, in order.
    ///
    /// # Errors
    /// Returns an encoding error from any chart, or a template error if a
    /// custom template has no insertion point or there is nothing to render.
    pub fn render(&self, charts: &[&Chart<'_>]) -> Result<String> {
        if charts.is_empty() {
            return Err(ChartError::Template("no charts to render".to_string()));
        }

        let template = self.template.as_deref().unwrap_or(DEFAULT_TEMPLATE);
        let has_charts = template.contains("{{charts}}");
        if !has_charts && !template.contains("{{chart}}") {
            return Err(ChartError::Template(
                "template must contain {{chart}} or {{charts}}".to_string(),
            ));
        }
        if !has_charts && charts.len() > 1 {
            return Err(ChartError::Template(format!(
                "template only has {{{{chart}}}}, which holds one chart, but {} were given; use {{{{charts}}}}",
                charts.len()
            )));
        }

        let configs = charts
            .iter()
            .map(|chart| JsonFormatter::new().format(chart).map(|json| script_escape(&json)))
            .collect::<Result<Vec<_>>>()?;

        let mut blocks = String::new();
        for (index, (chart, config)) in charts.iter().zip(&configs).enumerate() {
            blocks.push_str(&self.chart_block(index, chart, config));
        }

        let title = html_escape(&self.title);
        let library_url = html_escape(&self.library_url);
        let width = self.width.to_string();
        let height = self.height.to_string();
        let page = fill_template(template, |name| match name {
            "title" => Some(title.as_str()),
            "library_url" => Some(library_url.as_str()),
            "width" => Some(width.as_str()),
            "height" => Some(height.as_str()),
            "charts" => Some(blocks.as_str()),
            "chart" => Some(configs[0].as_str()),
            _ => None,
        });

        debug!("Rendered HTML page with {} chart(s)", charts.len());
        Ok(page)
    }

    fn chart_block(&self, index: usize, chart: &Chart<'_>, config: &str) -> String {
        let id = format!("chart-{index}");
        let label = html_escape(chart.label.as_deref().unwrap_or(id.as_str()));
        let heading = chart.label.as_ref().map_or_else(String::new, |_| {
            format!("            <h2>{label}</h2>\n")
        });
        let width = self.width.to_string();
        let height = self.height.to_string();
        fill_template(CHART_BLOCK, |name| match name {
            "id" => Some(id.as_str()),
            "label" => Some(label.as_str()),
            "heading" => Some(heading.as_str()),
            "width" => Some(width.as_str()),
            "height" => Some(height.as_str()),
            "config" => Some(config),
            _ => None,
        })
    }

    /// Renders the page into memory, then hands it to `writer` in one write.
    ///
    /// # Errors
    /// Rendering errors are returned before anything is written; writer
    /// failures surface as `ChartError::Io`.
    pub fn write_to<W: Write>(&self, charts: &[&Chart<'_>], mut writer: W) -> Result<()> {
        let page = self.render(charts)?;
        writer.write_all(page.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Writes the page to `path` through a temporary file in the same
    /// directory, so the destination is either replaced whole or untouched.
    ///
    /// An existing destination keeps its permissions; a new one is created
    /// world-readable (`0644` on Unix).
    ///
    /// # Errors
    /// Returns rendering errors, or `ChartError::FileWrite` if the file cannot
    /// be written or moved into place.
    pub fn save(&self, charts: &[&Chart<'_>], path: &Path) -> Result<()> {
        let page = self.render(charts)?;
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let write_error = |source: std::io::Error| ChartError::FileWrite {
            path: path.to_path_buf(),
            source,
        };

        let mut file = NamedTempFile::new_in(dir).map_err(write_error)?;
        if let Some(permissions) = page_permissions(path) {
            file.as_file()
                .set_permissions(permissions)
                .map_err(write_error)?;
        }
        file.write_all(page.as_bytes()).map_err(write_error)?;
        file.persist(path).map_err(|e| write_error(e.error))?;

        debug!("Saved chart page to {}", path.display());
        Ok(())
    }
}

impl ChartFormatter for HtmlFormatter {
    fn format(&self, chart: &Chart<'_>) -> Result<String> {
        self.render(&[chart])
    }
}

/// Temp files are created owner-only; the saved page should not be.
fn page_permissions(path: &Path) -> Option<Permissions> {
    fs::metadata(path)
        .map(|metadata| metadata.permissions())
        .ok()
        .or_else(default_permissions)
}

#[cfg(unix)]
fn default_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
const fn default_permissions() -> Option<Permissions> {
    None
}

/// Substitutes `{{name}}` placeholders in one left-to-right pass.
///
/// Unknown placeholders are kept as written; substituted text is never rescanned.
fn fill_template<'v>(template: &str, lookup: impl Fn(&str) -> Option<&'v str>) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        output.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                let name = &after[..end];
                match lookup(name.trim()) {
                    Some(value) => output.push_str(value),
                    None => {
                        let _ = write!(output, "{{{{{name}}}}}");
                    }
                }
                rest = &after[end + 2..];
            }
            None => {
                output.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    output.push_str(rest);
    output
}

/// Keeps JSON inert inside `<script>`: no `</script>`, `<!--` or `<script`
/// can appear once every `<` is a JSON escape.
fn script_escape(json: &str) -> String {
    json.replace('<', "\\u003c")
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod tests;
