//! Result rendering

use crate::SessionError;
use askama::Template;
use chemistry::{Fragment, Warning};
use std::fmt;

/// Rendered view of one evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    warnings: Vec<Warning>,
}

#[derive(Template)]
#[template(
    source = r#"{% if items.is_empty() -%}
<p>No problems detected</p>
{%- else -%}
<h3>Problems</h3>
<ul>
{%- for item in items %}
  <li>{% for fragment in item %}{% if fragment.emphasized %}<b>{{ fragment.text }}</b>{% else %}{{ fragment.text }}{% endif %}{% endfor %}</li>
{%- endfor %}
</ul>
{%- endif %}"#,
    ext = "html"
)]
struct ReportTemplate {
    items: Vec<Vec<Fragment>>,
}

impl Report {
    pub fn new(warnings: Vec<Warning>) -> Self {
        Self { warnings }
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// True when no rule fired
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// HTML fragment; all text is escaped and only computed values are bold
    pub fn to_html(&self) -> Result<String, SessionError> {
        let template = ReportTemplate {
            items: self.warnings.iter().map(Warning::fragments).collect(),
        };
        Ok(template.render()?)
    }

    pub fn to_markdown(&self) -> String {
        if self.is_clean() {
            return "No problems detected\n".to_string();
        }

        let mut out = String::from("### Problems\n\n");
        for warning in &self.warnings {
            out.push_str("- ");
            for fragment in warning.fragments() {
                if fragment.emphasized {
                    out.push_str("**");
                    out.push_str(&fragment.text);
                    out.push_str("**");
                } else {
                    out.push_str(&fragment.text);
                }
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_clean() {
            return writeln!(f, "No problems detected");
        }

        writeln!(f, "Problems")?;
        for warning in &self.warnings {
            writeln!(f, "- {warning}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chemistry::{Ion, Remedy};

    fn low_magnesium() -> Report {
        Report::new(vec![
            Warning::RatioImbalance {
                first: Ion::Calcium,
                second: Ion::Magnesium,
                remedy: Remedy::LowerFirstRaiseSecond,
                ideal_first: 2.5,
                ideal_second: 5.0,
            },
            Warning::ThresholdExceeded {
                ion: Ion::OrthoPhosphate,
                limit: 0.03,
            },
        ])
    }

    #[test]
    fn test_clean_html() {
        let html = Report::new(Vec::new()).to_html().unwrap();
        assert_eq!(html, "<p>No problems detected</p>");
    }

    #[test]
    fn test_html_emphasizes_values() {
        let html = low_magnesium().to_html().unwrap();

        assert!(html.starts_with("<h3>Problems</h3>"));
        assert_eq!(html.matches("<li>").count(), 2);
        assert!(html.contains("<li>lower calcium to <b>2.5 mg"));
        assert!(html.contains("ortho-phosphate should not exceed <b>0.03 mg"));
        assert_eq!(html.matches("<b>").count(), 3);
    }

    #[test]
    fn test_markdown() {
        assert_eq!(
            low_magnesium().to_markdown(),
            "### Problems\n\n\
             - lower calcium to **2.5 mg/l**, or raise magnesium to **5 mg/l**.\n\
             - ortho-phosphate should not exceed **0.03 mg/l**.\n"
        );
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(
            low_magnesium().to_string(),
            "Problems\n\
             - lower calcium to 2.5 mg/l, or raise magnesium to 5 mg/l.\n\
             - ortho-phosphate should not exceed 0.03 mg/l.\n"
        );
        assert_eq!(Report::new(Vec::new()).to_string(), "No problems detected\n");
    }
}
