use axum::response::Html;
use tera::{Context, Tera};

/// Templates are compiled into the binary so it runs from any working directory.
pub fn load_templates() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("base.html", include_str!("../../templates/base.html")),
        ("quiz.html", include_str!("../../templates/quiz.html")),
        ("vocabulary.html", include_str!("../../templates/vocabulary.html")),
    ])?;
    Ok(tera)
}

pub fn render_template(tera: &Tera, template_name: &str, context: Context) -> Html<String> {
    match tera.render(template_name, &context) {
        Ok(html) => Html(html),
        Err(e) => {
            log::error!("Failed to render {}: {:?}", template_name, e);
            Html(format!("Error rendering template: {}", template_name))
        }
    }
}
