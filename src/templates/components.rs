//! Page template and the script that boots the Plotly chart.

use super::styles::STYLE;

pub const CHART_ELEMENT_ID: &str = "influence-chart";

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Make serialized JSON safe to inline in a `<script>` block. Titles and
/// notes are free text and may contain `</script>`.
pub fn script_safe_json(json: &str) -> String {
    json.replace("</", "<\\/")
}

/// Inline script that draws `figure_json` (a serialized `{data, layout}`).
pub fn chart_script(figure_json: &str) -> String {
    format!(
        r#"<script>
    (function() {{
        const figure = {figure};
        Plotly.newPlot('{id}', figure.data, figure.layout, {{ responsive: true }});
    }})();
    </script>"#,
        figure = script_safe_json(figure_json),
        id = CHART_ELEMENT_ID,
    )
}

// ============================================================================
// Base HTML Template
// ============================================================================

/// Full document. The plotting runtime comes from `runtime_url` rather than
/// being bundled, so the page needs network access when opened.
pub fn base_html(title: &str, runtime_url: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{style}</style>
    <script src="{runtime}" charset="utf-8"></script>
</head>
<body>
    <div class="container">
        {content}
    </div>
</body>
</html>
"#,
        title = html_escape(title),
        style = STYLE,
        runtime = html_escape(runtime_url),
        content = content,
    )
}
