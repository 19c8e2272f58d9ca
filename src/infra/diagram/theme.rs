use serde::{Deserialize, Serialize};

/// Mermaid configuration applied before rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeOptions {
    pub start_on_load: bool,
    pub theme: String,
    pub theme_variables: ThemeVariables,
    pub security_level: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeVariables {
    pub font_family: String,
    pub primary_color: String,
    pub primary_border_color: String,
    pub primary_text_color: String,
    pub line_color: String,
    pub secondary_color: String,
    pub tertiary_color: String,
}

impl Default for ThemeOptions {
    fn default() -> Self {
        Self {
            start_on_load: false,
            theme: "base".to_string(),
            theme_variables: ThemeVariables::default(),
            security_level: "loose".to_string(),
        }
    }
}

impl Default for ThemeVariables {
    /// Indigo on slate.
    fn default() -> Self {
        Self {
            font_family: "ui-sans-serif, system-ui, sans-serif".to_string(),
            primary_color: "#e0e7ff".to_string(),
            primary_border_color: "#4338ca".to_string(),
            primary_text_color: "#1e1b4b".to_string(),
            line_color: "#64748b".to_string(),
            secondary_color: "#f1f5f9".to_string(),
            tertiary_color: "#ffffff".to_string(),
        }
    }
}

impl ThemeOptions {
    /// Serializes to the JSON accepted by `mmdc --configFile`.
    pub fn to_config_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_json_uses_mermaid_keys() {
        let json = ThemeOptions::default().to_config_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["theme"], "base");
        assert_eq!(value["startOnLoad"], false);
        assert_eq!(value["securityLevel"], "loose");
        assert_eq!(value["themeVariables"]["primaryBorderColor"], "#4338ca");
        assert_eq!(value["themeVariables"]["lineColor"], "#64748b");
    }
}
