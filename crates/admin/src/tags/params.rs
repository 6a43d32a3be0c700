//! Dynamic settings-form field rendering.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::helpers::html_escape;
use crate::models::User;
use crate::state::AppState;

/// A settings field definition, as declared by an application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Param {
    /// Field name, unique within the owning application.
    pub name: String,

    /// Control kind with kind-specific configuration.
    #[serde(flatten)]
    pub kind: ParamKind,

    /// Default value, used when no stored value exists.
    #[serde(rename = "deflt")]
    pub default: String,

    /// Stored value, when one exists.
    #[serde(default)]
    pub value: Option<String>,

    /// Label key; the raw name is shown when absent.
    #[serde(default)]
    pub label: Option<String>,

    /// Help caption key.
    #[serde(default)]
    pub help: Option<String>,
}

impl Param {
    /// Create a field definition.
    pub fn new(name: impl Into<String>, kind: ParamKind, default: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            default: default.into(),
            value: None,
            label: None,
            help: None,
        }
    }

    /// Set the stored value.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the label key.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the help caption key.
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Control kinds for settings fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ParamKind {
    /// Single-line text input.
    String,

    /// Single-line text input holding an integer.
    Int,

    /// Multi-line text input.
    Text,

    /// Mutually exclusive Yes/No radios.
    ListYesno,

    /// Drop-down over declared values.
    List {
        /// (value, display text) pairs; an empty list yields an empty select.
        #[serde(default)]
        values: Vec<(String, String)>,
    },

    /// Kinds this release does not recognize render no control, only the
    /// label wrapper. Legacy behavior, kept on purpose.
    #[serde(other)]
    Unknown,
}

/// Render one settings field.
///
/// The owning application name namespaces the control name. The effective
/// value is the stored value when present, else the default.
pub fn render_param(state: &AppState, app: &str, param: &Param, user: &User) -> String {
    let name = html_escape(&format!("{app}.{}", param.name));
    let value = param.value.as_deref().unwrap_or(&param.default);
    let label = match &param.label {
        Some(label) => state.translate(label, user),
        None => param.name.clone(),
    };
    let label = html_escape(&label);

    let mut out = format!(
        "<div class='control-group'>\n  <label class=\"param-label\" for=\"{name}\">{label}</label>\n  <div class=\"param-controls\">\n"
    );

    match &param.kind {
        ParamKind::String | ParamKind::Int => {
            let value = html_escape(value);
            out.push_str(&format!(
                "  <input type='text' name='{name}' id='{name}' value='{value}' />\n"
            ));
        }

        ParamKind::Text => {
            let value = html_escape(value);
            out.push_str(&format!(
                "  <textarea name='{name}' id='{name}'>{value}</textarea>\n"
            ));
        }

        ParamKind::ListYesno => {
            let choices = [
                ("yes", state.translate("Yes", user)),
                ("no", state.translate("No", user)),
            ];
            for (idx, (choice, text)) in choices.iter().enumerate() {
                let checked = if value == *choice { " checked" } else { "" };
                let text = html_escape(text);
                out.push_str(&format!(
                    "  <label for=\"{name}_{idx}\" class=\"radio inline\">{text}<input type=\"radio\" name=\"{name}\" id=\"{name}_{idx}\" value=\"{choice}\"{checked} /></label>\n"
                ));
            }
        }

        ParamKind::List { values } => {
            out.push_str(&format!("  <select name='{name}' id='{name}'>\n"));
            for (choice, text) in values {
                let selected = if value == choice.as_str() { " selected='selected'" } else { "" };
                let choice = html_escape(choice);
                let text = html_escape(text);
                out.push_str(&format!(
                    "    <option value='{choice}'{selected}>{text}</option>\n"
                ));
            }
            out.push_str("  </select>\n");
        }

        ParamKind::Unknown => {
            warn!(field = %name, "unrecognized parameter type, rendering label only");
        }
    }

    if let Some(help) = &param.help {
        let help = html_escape(&state.translate(help, user));
        out.push_str(&format!("  <p class=\"help-block\">{help}</p>\n"));
    }

    out.push_str("  </div>\n</div>\n");
    out
}
