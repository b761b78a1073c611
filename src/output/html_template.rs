//! HTML template constants for the `HtmlFormatter`.
//!
//! Placeholders are written as `{{name}}` and filled in a single pass:
//! `title`, `library_url`, `width`, `height`, `charts` (one canvas and script
//! per chart) and `chart` (the raw JSON of the chart, for single-chart pages).

/// Chart.js 2.x, whose `scales.xAxes`/`scales.yAxes` layout the encoder targets.
pub const DEFAULT_LIBRARY_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/Chart.js/2.9.4/Chart.min.js";

pub const DEFAULT_TITLE: &str = "Chart";

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 400;

/// Full page used when no custom template is supplied.
pub const DEFAULT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{title}}</title>
    <script src="{{library_url}}"></script>
    <style>
        :root {
            --color-bg: #f8fafc;
            --color-card: #ffffff;
            --color-border: #e2e8f0;
            --color-text: #1e293b;
        }
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
            background: var(--color-bg);
            color: var(--color-text);
            line-height: 1.6;
            padding: 2rem;
        }
        .container { max-width: 1200px; margin: 0 auto; }
        h1 { font-size: 1.875rem; font-weight: 700; margin-bottom: 1.5rem; }
        .chart-container { background: var(--color-card); border-radius: 0.5rem; padding: 1.25rem; border: 1px solid var(--color-border); margin-bottom: 1rem; }
        .chart-container h2 { font-size: 1rem; font-weight: 600; margin-bottom: 1rem; }
    </style>
</head>
<body>
    <div class="container">
        <h1>{{title}}</h1>
{{charts}}
    </div>
</body>
</html>
"#;

/// Per-chart block substituted for `{{charts}}`.
///
/// Filled by the formatter with `id`, `label`, `heading`, `width`, `height`
/// and `config`.
pub const CHART_BLOCK: &str = r#"        <div class="chart-container">
{{heading}}            <canvas id="{{id}}" width="{{width}}" height="{{height}}" role="img" aria-label="{{label}}"></canvas>
        </div>
        <script>
            new Chart(document.getElementById("{{id}}").getContext("2d"), {{config}});
        </script>
"#;
