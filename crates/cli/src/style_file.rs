use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use trajplot::{Rgb, Style};

/// JSON style overrides; absent fields keep the defaults. Colors are `[r, g, b]`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleFile {
    pub ball_radius: Option<f64>,
    pub line_width: Option<f64>,
    pub line_color: Option<[f32; 3]>,
    pub a_color: Option<[f32; 3]>,
    pub b_color: Option<[f32; 3]>,
    pub background: Option<[f32; 3]>,
}

impl StyleFile {
    pub fn apply(&self, base: Style) -> Style {
        Style {
            ball_radius: self.ball_radius.unwrap_or(base.ball_radius),
            line_width: self.line_width.unwrap_or(base.line_width),
            line_color: self.line_color.map(Rgb::from).unwrap_or(base.line_color),
            a_color: self.a_color.map(Rgb::from).unwrap_or(base.a_color),
            b_color: self.b_color.map(Rgb::from).unwrap_or(base.b_color),
            background: self.background.map(Rgb::from).unwrap_or(base.background),
        }
    }
}

/// Read overrides from `path` on top of `Style::default()` and validate.
pub fn load_style(path: &Path) -> Result<Style> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let file: StyleFile = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing style {}", path.display()))?;
    let style = file.apply(Style::default());
    style
        .validate()
        .with_context(|| format!("style {}", path.display()))?;
    Ok(style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn partial_override_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("style.json");
        fs::write(&path, r#"{"ball_radius": 8, "a_color": [0, 0.5, 0]}"#).unwrap();
        let style = load_style(&path).unwrap();
        assert_eq!(style.ball_radius, 8.0);
        assert_eq!(style.a_color, Rgb::new(0.0, 0.5, 0.0));
        assert_eq!(style.b_color, Style::default().b_color);
        assert_eq!(style.line_width, 1.0);
    }

    #[test]
    fn unknown_fields_and_bad_colors_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("style.json");
        fs::write(&path, r#"{"radius": 8}"#).unwrap();
        assert!(load_style(&path).is_err());
        fs::write(&path, r#"{"line_color": [2, 0, 0]}"#).unwrap();
        let err = format!("{:#}", load_style(&path).unwrap_err());
        assert!(err.contains("line_color"), "{err}");
    }
}
