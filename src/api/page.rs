//! Query page
//!
//! One HTML page with a single text input. The background image and
//! opacity come from configuration and are purely cosmetic. Results
//! are fetched from the ask API and colored by confidence band.

use super::handlers::AppState;
use axum::{extract::State, response::Html};

/// Serve the query page
///
/// GET /
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_page(
        &state.page.title,
        state.page.background_url.as_deref(),
        state.page.background_opacity,
    ))
}

fn render_page(title: &str, background_url: Option<&str>, opacity: f32) -> String {
    let background_css = match background_url {
        Some(url) => format!(
            "body {{ background: url('{}') no-repeat center center fixed; \
             background-size: cover; opacity: {}; }}",
            url, opacity
        ),
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
{background_css}
main {{ max-width: 720px; margin: 2rem auto; font-family: sans-serif; }}
input {{ width: 100%; padding: 0.5rem; font-size: 1rem; }}
.result {{ padding: 0.75rem; margin: 0.5rem 0; border-radius: 4px; }}
.high {{ background: #d4edda; }}
.medium {{ background: #fff3cd; }}
.low {{ background: #f8d7da; }}
.weak {{ background: #d1ecf1; }}
.links {{ background: #e2e3e5; }}
</style>
</head>
<body>
<main>
<h1>{title}</h1>
<input id="query" placeholder="Ask your question here:" autofocus>
<div id="results"></div>
</main>
<script>
const input = document.getElementById('query');
const results = document.getElementById('results');
input.addEventListener('keydown', async (event) => {{
  if (event.key !== 'Enter') return;
  const response = await fetch('/api/v1/ask?q=' + encodeURIComponent(input.value));
  const body = await response.json();
  results.innerHTML = '';
  if (body.outcome === 'matches') {{
    for (const m of body.matches) {{
      const div = document.createElement('div');
      div.className = 'result ' + m.confidence;
      div.innerHTML = '<strong>Question:</strong> ' + m.question +
        '<br><strong>Answer:</strong> ' + m.answer;
      results.appendChild(div);
    }}
  }} else if (body.outcome === 'syllabus') {{
    const div = document.createElement('div');
    div.className = 'result links';
    div.innerHTML = '<strong>Relevant syllabus files</strong><br>' +
      body.syllabus.map(s => '<a href="' + s.file_reference + '">' +
        s.file_reference + '</a>').join('<br>');
    results.appendChild(div);
  }} else {{
    const div = document.createElement('div');
    div.className = 'result weak';
    div.textContent = body.message;
    results.appendChild(div);
  }}
}});
</script>
</body>
</html>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_includes_background_when_configured() {
        let page = render_page("Campus Answers", Some("https://example.com/bg.png"), 0.8);
        assert!(page.contains("https://example.com/bg.png"));
        assert!(page.contains("opacity: 0.8"));
        assert!(page.contains("Campus Answers"));
    }

    #[test]
    fn test_page_omits_background_when_absent() {
        let page = render_page("Campus Answers", None, 0.8);
        assert!(!page.contains("background: url"));
        assert!(page.contains("<input"));
    }
}
