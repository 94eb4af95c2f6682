use std::path::Path;

use tera::{Context, Tera};

use crate::error::WebError;
use crate::models::Status;

pub const TEMPLATE_NAME: &str = "index.html";

/// Load and parse the page template. Called once at startup so a broken
/// template is fatal before the server binds.
pub fn load_template(path: &Path) -> Result<Tera, WebError> {
    let mut tera = Tera::default();
    tera.add_template_file(path, Some(TEMPLATE_NAME))?;
    Ok(tera)
}

/// Render the page with the status as its data context. The timestamp is
/// interpolated as RFC3339 text.
pub fn render_status(tera: &Tera, status: &Status) -> Result<String, WebError> {
    let mut context = Context::new();
    context.insert("message", &status.message);
    context.insert("timestamp", &status.timestamp.to_rfc3339());
    Ok(tera.render(TEMPLATE_NAME, &context)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Status;

    fn template_from(source: &str) -> Tera {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, source).unwrap();
        tera
    }

    #[test]
    fn renders_message_and_timestamp() {
        let tera = template_from("<h1>{{ message }}</h1><p>{{ timestamp }}</p>");
        let status = Status {
            message: "Hello, world!".to_string(),
            timestamp: "2026-08-31T01:02:03Z".parse().unwrap(),
        };

        let html = render_status(&tera, &status).unwrap();

        assert!(html.contains("Hello, world!"));
        assert!(html.contains("2026-08-31T01:02:03"));
    }

    #[test]
    fn render_failure_surfaces_as_template_error() {
        let tera = template_from("{{ message | no_such_filter }}");
        let status = Status {
            message: "Hello, world!".to_string(),
            timestamp: "2026-08-31T01:02:03Z".parse().unwrap(),
        };

        let err = render_status(&tera, &status).unwrap_err();
        assert!(matches!(err, WebError::Template(_)));
    }

    #[test]
    fn shipped_template_parses_and_renders() {
        let tera = load_template(Path::new("index.html")).unwrap();
        let status = Status {
            message: "Hello, world!".to_string(),
            timestamp: "2026-08-31T01:02:03Z".parse().unwrap(),
        };

        let html = render_status(&tera, &status).unwrap();
        assert!(html.contains("Hello, world!"));
    }
}
