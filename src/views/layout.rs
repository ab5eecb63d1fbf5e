use super::escape_html;

const STYLE: &str = r#"
    body { font-family: Arial, sans-serif; line-height: 1.6; color: #333; margin: 0; }
    .container { max-width: 760px; margin: 0 auto; padding: 24px; }
    h1 { font-size: 1.6em; }
    .form-item { margin-bottom: 16px; }
    .form-item label { display: block; font-weight: bold; margin-bottom: 4px; }
    .form-item input, .form-item select { width: 100%; max-width: 400px; padding: 6px; box-sizing: border-box; }
    .form-item input.error, .form-item select.error { border-color: #c0392b; }
    .form-item .description { font-size: 0.85em; color: #666; margin-top: 4px; }
    .field-error { color: #c0392b; font-size: 0.9em; margin-top: 4px; }
    .required-marker { color: #c0392b; }
    .message { padding: 10px 14px; margin-bottom: 12px; border-radius: 3px; }
    .message-status { background: #eaf7ea; border: 1px solid #77b259; }
    .message-warning { background: #fdf8ed; border: 1px solid #e09600; }
    .message-error { background: #fbeaea; border: 1px solid #c0392b; }
    button { padding: 8px 18px; cursor: pointer; }
    table { border-collapse: collapse; width: 100%; margin-top: 12px; }
    th, td { border: 1px solid #ccc; padding: 6px 10px; text-align: left; }
    th { background: #f2f2f2; }
    .filters { display: flex; gap: 16px; align-items: flex-end; flex-wrap: wrap; }
    .total-participants { margin-top: 12px; font-weight: bold; }
    .export-link { display: inline-block; margin-bottom: 16px; }
"#;

pub fn page(title: &str, body: &str) -> String {
    render(title, body, None)
}

pub fn page_with_script(title: &str, body: &str, script_src: &str) -> String {
    render(title, body, Some(script_src))
}

fn render(title: &str, body: &str, script_src: Option<&str>) -> String {
    let script = match script_src {
        Some(src) => format!("\n  <script src=\"{src}\" defer></script>"),
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
  <style>{STYLE}</style>{script}
</head>
<body>
  <main class="container">
{body}
  </main>
</body>
</html>"#,
        title = escape_html(title),
    )
}
