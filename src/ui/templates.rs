//! Embedded HTML templates

use minijinja::Environment;
use rust_embed::RustEmbed;
use serde::Serialize;

use crate::error::{Error, Result};

#[derive(RustEmbed)]
#[folder = "templates/"]
struct Assets;

/// Template environment built once at startup from the embedded files
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    pub fn load() -> Result<Self> {
        let mut env = Environment::new();
        let mut loaded = 0;

        for name in Assets::iter() {
            let file = Assets::get(&name).ok_or_else(|| Error::TemplateNotFound(name.to_string()))?;
            let source = String::from_utf8_lossy(&file.data).into_owned();
            env.add_template_owned(name.to_string(), source)?;
            loaded += 1;
        }

        tracing::debug!("Loaded {} templates", loaded);
        Ok(Self { env })
    }

    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String> {
        let template = self
            .env
            .get_template(name)
            .map_err(|_| Error::TemplateNotFound(name.to_string()))?;
        Ok(template.render(ctx)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    #[test]
    fn test_every_page_template_is_embedded() {
        let templates = Templates::load().expect("templates should load");
        for view in crate::api::View::ALL {
            assert!(
                templates.env.get_template(view.template()).is_ok(),
                "missing {}",
                view.template()
            );
        }
    }

    #[test]
    fn test_unknown_template() {
        let templates = Templates::load().unwrap();
        assert!(matches!(
            templates.render("nope.html", context! {}),
            Err(Error::TemplateNotFound(_))
        ));
    }
}
