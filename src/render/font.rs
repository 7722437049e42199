use std::path::{Path, PathBuf};
use std::sync::Arc;

use usvg::fontdb;

use crate::foundation::error::{DemoError, DemoResult};

/// Monospace font tried before falling back to system fonts.
pub const PREFERRED_FONT_PATH: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf";

/// Where the faces in a [`FontSet`] came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FontSource {
    /// The requested font file loaded successfully.
    Preferred(PathBuf),
    /// The requested file was unavailable; system fonts were loaded instead.
    SystemFallback,
}

/// Font database handed to the SVG rasterizer, plus the family text is drawn with.
#[derive(Clone)]
pub struct FontSet {
    db: Arc<fontdb::Database>,
    family: Option<String>,
    source: FontSource,
}

impl std::fmt::Debug for FontSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontSet")
            .field("faces", &self.db.len())
            .field("family", &self.family)
            .field("source", &self.source)
            .finish()
    }
}

impl FontSet {
    /// Load `preferred`, or the system fonts if it cannot be read.
    ///
    /// Never fails: with no usable face at all, text is simply not drawn.
    pub fn load(preferred: &Path) -> Self {
        let mut db = fontdb::Database::new();
        match db.load_font_file(preferred) {
            Ok(()) if db.len() > 0 => {
                let family = first_family(&db, None);
                if let Some(name) = family.as_deref() {
                    db.set_monospace_family(name);
                }
                tracing::debug!(path = %preferred.display(), ?family, "loaded preferred font");
                return Self {
                    db: Arc::new(db),
                    family,
                    source: FontSource::Preferred(preferred.to_path_buf()),
                };
            }
            Ok(()) => {
                tracing::warn!(path = %preferred.display(), "font file has no usable faces, using system fonts");
            }
            Err(err) => {
                tracing::warn!(path = %preferred.display(), %err, "font unavailable, using system fonts");
            }
        }

        db.load_system_fonts();
        let family = first_family(&db, Some(fontdb::Family::Monospace));
        if family.is_none() {
            tracing::error!("no system fonts found; text cannot be drawn");
        }
        Self {
            db: Arc::new(db),
            family,
            source: FontSource::SystemFallback,
        }
    }

    /// Load [`PREFERRED_FONT_PATH`] with fallback.
    pub fn load_default() -> Self {
        Self::load(Path::new(PREFERRED_FONT_PATH))
    }

    /// Family name text is drawn with, if any face is available.
    pub fn family(&self) -> Option<&str> {
        self.family.as_deref()
    }

    /// Family name, or a render error when no face is available to draw text with.
    pub fn require_family(&self) -> DemoResult<&str> {
        self.family().ok_or_else(|| {
            DemoError::render(format!(
                "no usable font: '{}' is unavailable and no system fonts were found",
                PREFERRED_FONT_PATH
            ))
        })
    }

    /// Where the faces came from.
    pub fn source(&self) -> &FontSource {
        &self.source
    }

    /// `true` when the preferred font could not be used.
    pub fn is_fallback(&self) -> bool {
        self.source == FontSource::SystemFallback
    }

    #[cfg(test)]
    pub(crate) fn without_faces() -> Self {
        Self {
            db: Arc::new(fontdb::Database::new()),
            family: None,
            source: FontSource::SystemFallback,
        }
    }

    pub(crate) fn fontdb(&self) -> Arc<fontdb::Database> {
        Arc::clone(&self.db)
    }
}

fn first_family(db: &fontdb::Database, generic: Option<fontdb::Family<'_>>) -> Option<String> {
    let by_query = generic.and_then(|family| {
        db.query(&fontdb::Query {
            families: &[family],
            ..fontdb::Query::default()
        })
    });
    let id = by_query.or_else(|| db.faces().next().map(|f| f.id))?;
    db.face(id)
        .and_then(|face| face.families.first())
        .map(|(name, _)| name.clone())
}

#[cfg(test)]
#[path = "../../tests/unit/render/font.rs"]
mod tests;
