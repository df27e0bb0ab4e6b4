//! Figure assembly and HTML output.

use crate::error::{PipelineError, Result};
use crate::models::{Axis, Figure, Layout, Margin, Title, UpdateMenu};
use crate::templates::{base_html, chart_script, CHART_ELEMENT_ID};
use crate::traces::TraceSet;
use std::fs;
use std::path::Path;
use tracing::info;

pub fn build_layout(title: &str, menu: UpdateMenu) -> Layout {
    Layout {
        title: Title {
            text: title.to_string(),
        },
        xaxis: Axis {
            title: Some(Title {
                text: "Approximate Year".to_string(),
            }),
            showgrid: Some(true),
            zeroline: Some(false),
            visible: None,
        },
        yaxis: Axis {
            visible: Some(false),
            ..Axis::default()
        },
        hovermode: "closest",
        showlegend: false,
        margin: Margin {
            l: 40,
            r: 40,
            t: 60,
            b: 40,
        },
        updatemenus: vec![menu],
    }
}

pub fn build_figure(title: &str, traces: TraceSet, menu: UpdateMenu) -> Figure {
    Figure {
        data: traces.into_traces(),
        layout: build_layout(title, menu),
    }
}

pub fn render_document(figure: &Figure, runtime_url: &str) -> Result<String> {
    let figure_json = serde_json::to_string(figure)?;
    let content = format!(
        r#"<div id="{id}" class="chart"></div>
        <noscript>This chart needs JavaScript and network access to load Plotly.</noscript>
        {script}"#,
        id = CHART_ELEMENT_ID,
        script = chart_script(&figure_json),
    );
    Ok(base_html(&figure.layout.title.text, runtime_url, &content))
}

/// Single write of the finished document.
pub fn write_document(path: &Path, html: &str) -> Result<()> {
    fs::write(path, html).map_err(|source| PipelineError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = html.len(), "wrote chart document");
    Ok(())
}
