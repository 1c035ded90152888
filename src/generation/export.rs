//! JSON export documents
//!
//! Two shapes are supported:
//! - [`PaletteExport`]: one palette with its title, type and timestamp
//! - [`CombinedExport`]: both palette flavours for the same colors
//!
//! Timestamps are UTC with millisecond precision and a `Z` suffix.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use std::path::{Path, PathBuf};

use super::builder::{ColorRecord, PaletteBuilder, PaletteKind};
use crate::error::{PaletteError, Result};

/// File name used for [`CombinedExport`]
pub const COMBINED_FILE_NAME: &str = "complete-color-palettes.json";

fn serialize_timestamp<S>(timestamp: &DateTime<Utc>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&timestamp.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Lowercase a title and replace each whitespace run with `-`
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut in_whitespace = false;
    for c in title.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
        } else {
            slug.extend(c.to_lowercase());
            in_whitespace = false;
        }
    }
    slug
}

fn write_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json)
        .map_err(|e| PaletteError::io(format!("Failed to write {}", path.display()), e))?;
    log::info!("Exported palette to {}", path.display());
    Ok(())
}

/// A single exported palette
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteExport {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: PaletteKind,
    pub colors: Vec<ColorRecord>,
    #[serde(serialize_with = "serialize_timestamp")]
    pub generated_at: DateTime<Utc>,
}

impl PaletteExport {
    /// Export `colors` under the kind's default title, stamped now
    pub fn new(kind: PaletteKind, colors: Vec<ColorRecord>) -> Self {
        Self::at(kind, colors, Utc::now())
    }

    pub fn at(kind: PaletteKind, colors: Vec<ColorRecord>, generated_at: DateTime<Utc>) -> Self {
        Self {
            title: kind.title().to_string(),
            kind,
            colors,
            generated_at,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// e.g. `tailwind-css-palette-palette.json`
    pub fn file_name(&self) -> String {
        format!("{}-palette.json", slugify(&self.title))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write to `path`
    pub fn write_to(&self, path: &Path) -> Result<()> {
        write_json(self, path)
    }

    /// Write into `dir` under [`Self::file_name`] and return the full path
    pub fn write_to_dir(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(self.file_name());
        write_json(self, &path)?;
        Ok(path)
    }
}

/// Where a set of colors came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PaletteSource {
    #[serde(rename = "Image Upload")]
    ImageUpload,
    #[serde(rename = "Random Generation")]
    RandomGeneration,
}

/// Titled colors inside a [`CombinedExport`]
#[derive(Debug, Clone, Serialize)]
pub struct ExportSection {
    pub title: String,
    pub colors: Vec<ColorRecord>,
}

impl ExportSection {
    fn build<S: AsRef<str>>(builder: &PaletteBuilder, kind: PaletteKind, hex_list: &[S]) -> Self {
        Self {
            title: kind.title().to_string(),
            colors: builder.build(kind, hex_list),
        }
    }
}

/// Both palette flavours of the same colors in one document
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedExport {
    pub material_design: ExportSection,
    #[serde(rename = "tailwindCSS")]
    pub tailwind_css: ExportSection,
    #[serde(serialize_with = "serialize_timestamp")]
    pub generated_at: DateTime<Utc>,
    pub source: PaletteSource,
}

impl CombinedExport {
    /// Describe `hex_list` as both palette kinds, stamped now
    pub fn from_colors<S: AsRef<str>>(builder: &PaletteBuilder, hex_list: &[S], source: PaletteSource) -> Self {
        Self {
            material_design: ExportSection::build(builder, PaletteKind::Material, hex_list),
            tailwind_css: ExportSection::build(builder, PaletteKind::Tailwind, hex_list),
            generated_at: Utc::now(),
            source,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write into `dir` as [`COMBINED_FILE_NAME`] and return the full path
    pub fn write_to_dir(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(COMBINED_FILE_NAME);
        write_json(self, &path)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::Value;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 9, 14, 30, 5).unwrap()
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Material Design Palette"), "material-design-palette");
        assert_eq!(slugify("Tailwind  CSS\tPalette"), "tailwind-css-palette");
        assert_eq!(slugify(" Ocean "), "-ocean-");
    }

    #[test]
    fn test_file_name() {
        let export = PaletteExport::at(PaletteKind::Material, Vec::new(), fixed_time());
        assert_eq!(export.file_name(), "material-design-palette-palette.json");
        assert_eq!(export.with_title("My Sunset").file_name(), "my-sunset-palette.json");
    }

    #[test]
    fn test_export_json_shape() {
        let colors = PaletteBuilder::new().build(PaletteKind::Tailwind, &["#ef4444"]);
        let export = PaletteExport::at(PaletteKind::Tailwind, colors, fixed_time());
        let value: Value = serde_json::from_str(&export.to_json().unwrap()).unwrap();

        assert_eq!(value["title"], "Tailwind CSS Palette");
        assert_eq!(value["type"], "tailwind");
        assert_eq!(value["generatedAt"], "2024-03-09T14:30:05.000Z");
        assert_eq!(value["colors"][0]["hex"], "#ef4444");
        assert_eq!(value["colors"][0]["tailwindClass"], "bg-red-500");
    }

    #[test]
    fn test_combined_export_shape() {
        let export = CombinedExport::from_colors(
            &PaletteBuilder::new(),
            &["#2563eb", "#dc2626"],
            PaletteSource::RandomGeneration,
        );
        let value: Value = serde_json::from_str(&export.to_json().unwrap()).unwrap();

        assert_eq!(value["materialDesign"]["title"], "Material Design Palette");
        assert_eq!(value["tailwindCSS"]["title"], "Tailwind CSS Palette");
        assert_eq!(value["source"], "Random Generation");
        assert!(value["materialDesign"]["colors"][0].get("tailwindClass").is_none());
        assert_eq!(value["tailwindCSS"]["colors"][1]["tailwindClass"], "bg-red-500");
        assert!(value["generatedAt"].as_str().unwrap().ends_with('Z'));
    }

    #[test]
    fn test_write_to_dir() {
        let dir = tempfile::tempdir().unwrap();
        let colors = PaletteBuilder::new().build(PaletteKind::Material, &["#059669"]);
        let path = PaletteExport::at(PaletteKind::Material, colors, fixed_time())
            .write_to_dir(dir.path())
            .unwrap();

        assert_eq!(path.file_name().unwrap(), "material-design-palette-palette.json");
        let value: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["colors"][0]["name"], "Ocean Blue");
    }

    #[test]
    fn test_write_to_missing_dir_fails() {
        let export = PaletteExport::new(PaletteKind::Material, Vec::new());
        let err = export.write_to_dir(Path::new("/nonexistent/dir/for/export")).unwrap_err();
        assert!(matches!(err, PaletteError::IoError { .. }));
    }
}
