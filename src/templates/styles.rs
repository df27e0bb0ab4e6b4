//! CSS for the chart page.

// ============================================================================
// CSS Styles
// ============================================================================

pub const STYLE: &str = r#"
/* Solarized Light Theme */
:root {
    --base01: #586e75;
    --base00: #657b83;
    --base1: #93a1a1;
    --base2: #eee8d5;
    --base3: #fdf6e3;

    --bg: var(--base3);
    --fg: var(--base00);
    --muted: var(--base1);
    --border: var(--base2);
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
    line-height: 1.6;
    color: var(--fg);
    background: var(--bg);
}

.container {
    max-width: 1400px;
    margin: 0 auto;
    padding: 1rem;
}

.chart {
    width: 100%;
    height: calc(100vh - 2rem);
    min-height: 500px;
    border: 1px solid var(--border);
    border-radius: 4px;
    background: #fff;
}

noscript {
    display: block;
    color: var(--muted);
    padding: 1rem;
}
"#;
