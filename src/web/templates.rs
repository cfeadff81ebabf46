//! Template rendering with Tera

use anyhow::Result;
use tera::{Context, Tera};

/// Template renderer with embedded templates
pub struct Templates {
    tera: Tera,
}

impl Templates {
    /// Create a new template renderer
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        tera.add_raw_template("base.html", include_str!("../templates/base.html"))?;
        tera.add_raw_template("index.html", include_str!("../templates/index.html"))?;

        Ok(Self { tera })
    }

    /// Render a template with a Tera Context
    pub fn render_with_context(&self, template: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template, context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_compile() {
        assert!(Templates::new().is_ok());
    }
}
