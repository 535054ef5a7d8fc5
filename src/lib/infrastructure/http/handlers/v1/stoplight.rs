//! Browsable docs for the relay API, rendered by Stoplight Elements from
//! `openapi.json`.

use axum::response::Html;

const DOCS_PAGE: &str = r#"<!doctype html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Contact Relay API</title>
    <script src="https://unpkg.com/@stoplight/elements/web-components.min.js"></script>
    <link rel="stylesheet" href="https://unpkg.com/@stoplight/elements/styles.min.css">
</head>
<body>
    <elements-api apiDescriptionUrl="/api/v1/openapi.json" router="hash" layout="stacked" hideSchemas="true" />
</body>
</html>
"#;

/// Serves the docs page
pub async fn handler() -> Html<&'static str> {
    Html(DOCS_PAGE)
}
