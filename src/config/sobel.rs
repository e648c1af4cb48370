use crate::filter::SobelParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// JSON configuration for the `sobel_edges` tool.
#[derive(Debug, Deserialize)]
pub struct SobelToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub filter: SobelParams,
    pub output: SobelOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct SobelOutputConfig {
    #[serde(rename = "image")]
    pub image: PathBuf,
    /// Optional JSON dump of the run report.
    #[serde(default, rename = "report_json")]
    pub report_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<SobelToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub fn parse_config(json: &str) -> Result<SobelToolConfig, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let cfg = parse_config(
            r#"{
                "input": "in.pgm",
                "filter": { "workers": 4, "clamp_workers": true },
                "output": { "image": "out/edges.pgm", "report_json": "out/report.json" }
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.input, PathBuf::from("in.pgm"));
        assert_eq!(cfg.filter, SobelParams::new(4).with_clamp_workers(true));
        assert_eq!(cfg.output.image, PathBuf::from("out/edges.pgm"));
        assert_eq!(
            cfg.output.report_json.as_deref(),
            Some(Path::new("out/report.json"))
        );
    }

    #[test]
    fn filter_section_is_optional() {
        let cfg = parse_config(r#"{ "input": "a.pgm", "output": { "image": "b.pgm" } }"#).unwrap();
        assert_eq!(cfg.filter, SobelParams::default());
        assert!(cfg.output.report_json.is_none());
    }

    #[test]
    fn missing_output_is_an_error() {
        assert!(parse_config(r#"{ "input": "a.pgm" }"#).is_err());
    }
}
