//! Itinerary export and share codes.
//!
//! Two services sit behind traits so the rest of the crate never depends on
//! how a document or a barcode is actually produced:
//!
//! | Trait              | Implementations                                    |
//! |--------------------|----------------------------------------------------|
//! | [`ExportService`]  | [`PrintableHtmlExport`], `ChromePdfExport` (`pdf`)  |
//! | [`BarcodeService`] | [`PngBarcode`]                                      |
//!
//! Both are called through [`export_itinerary`] and [`share_code`], which
//! contain every failure: the error is logged, a one-shot [`Notice`] is
//! raised for the view, and the caller gets `None`. Journey state is never
//! touched.

use crate::config::{ExportConfig, PageSize};
use std::fs;
use std::io;
use image::Luma;
use qrcode::{EcLevel, QrCode};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Rendering failed: {0}")]
    Render(String),
}

#[derive(Error, Debug)]
pub enum BarcodeError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Encoder failed: {0}")]
    EncodeFailed(String),
    #[error("Could not read generated image: {0}")]
    Image(#[from] image::ImageError),
}

/// Turns a printable itinerary document into a file.
pub trait ExportService {
    /// Write `document` (a complete printable HTML page) to
    /// `dest_dir/{filename}.{ext}` and return the path.
    fn export(&self, document: &str, filename: &str, dest_dir: &Path)
    -> Result<PathBuf, ExportError>;
}

/// Error-correction level of a QR code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCorrection {
    Low,
    /// Survives moderate damage. Good enough for a phone camera at an angle.
    Medium,
    Quartile,
    High,
}

impl From<ErrorCorrection> for EcLevel {
    fn from(level: ErrorCorrection) -> Self {
        match level {
            ErrorCorrection::Low => EcLevel::L,
            ErrorCorrection::Medium => EcLevel::M,
            ErrorCorrection::Quartile => EcLevel::Q,
            ErrorCorrection::High => EcLevel::H,
        }
    }
}

/// A generated share code on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarcodeImage {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Encodes a fully-qualified URL into a scannable image.
pub trait BarcodeService {
    fn encode(&self, url: &Url, dest: &Path) -> Result<BarcodeImage, BarcodeError>;
}

// =============================================================================
// Notices and containment
// =============================================================================

/// A message shown once. Reading it clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notice(Option<String>);

impl Notice {
    pub fn raise(&mut self, message: impl Into<String>) {
        self.0 = Some(message.into());
    }

    pub fn take(&mut self) -> Option<String> {
        self.0.take()
    }

    pub fn is_raised(&self) -> bool {
        self.0.is_some()
    }
}

/// File stem for an exported itinerary, derived from the traveller's name.
///
/// `"Amal Al-Busaidi"` becomes `oman-journey-amal-al-busaidi`. Names with no
/// usable characters fall back to `oman-journey`.
pub fn export_filename(traveller: &str) -> String {
    let mut slug = String::new();
    for c in traveller.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');
    if slug.is_empty() {
        "oman-journey".to_string()
    } else {
        format!("oman-journey-{slug}")
    }
}

/// Export the itinerary, containing any failure.
pub fn export_itinerary(
    service: &dyn ExportService,
    document: &str,
    traveller: &str,
    dest_dir: &Path,
    notice: &mut Notice,
) -> Option<PathBuf> {
    match service.export(document, &export_filename(traveller), dest_dir) {
        Ok(path) => {
            debug!(path = %path.display(), "itinerary exported");
            Some(path)
        }
        Err(e) => {
            warn!(error = %e, "itinerary export failed");
            notice.raise(format!("Sorry, we couldn't create your itinerary: {e}"));
            None
        }
    }
}

/// Generate a share code for `url`, containing any failure.
pub fn share_code(
    service: &dyn BarcodeService,
    url: &Url,
    dest: &Path,
    notice: &mut Notice,
) -> Option<BarcodeImage> {
    match service.encode(url, dest) {
        Ok(image) => {
            debug!(path = %image.path.display(), width = image.width, "share code generated");
            Some(image)
        }
        Err(e) => {
            warn!(error = %e, "share code generation failed");
            notice.raise("Sorry, we couldn't create a QR code for this journey.");
            None
        }
    }
}

// =============================================================================
// Printable HTML
// =============================================================================

/// Writes the document as-is. Its `@page` rules give the browser's print
/// dialog the page size and margins.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintableHtmlExport;

impl ExportService for PrintableHtmlExport {
    fn export(
        &self,
        document: &str,
        filename: &str,
        dest_dir: &Path,
    ) -> Result<PathBuf, ExportError> {
        fs::create_dir_all(dest_dir)?;
        let path = dest_dir.join(format!("{filename}.html"));
        fs::write(&path, document)?;
        Ok(path)
    }
}

// =============================================================================
// PDF through headless Chrome
// =============================================================================

const MM_PER_INCH: f64 = 25.4;

/// Paper size and margins in inches, as Chrome's print API wants them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaperInches {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

impl PaperInches {
    pub fn new(page_size: PageSize, margin_mm: u32) -> Self {
        let (width, height) = page_size.dimensions_mm();
        Self {
            width: width / MM_PER_INCH,
            height: height / MM_PER_INCH,
            margin: f64::from(margin_mm) / MM_PER_INCH,
        }
    }
}

impl From<&ExportConfig> for PaperInches {
    fn from(config: &ExportConfig) -> Self {
        Self::new(config.page_size, config.margin_mm)
    }
}

#[cfg(feature = "pdf")]
pub use chrome::ChromePdfExport;

#[cfg(feature = "pdf")]
mod chrome {
    use super::{ExportError, ExportService, PaperInches};
    use headless_chrome::types::PrintToPdfOptions;
    use headless_chrome::{Browser, LaunchOptions};
    use std::fs;
    use std::path::{Path, PathBuf};

    /// Prints the document to PDF in a headless Chrome instance.
    #[derive(Debug, Clone, Copy)]
    pub struct ChromePdfExport {
        pub paper: PaperInches,
    }

    impl ChromePdfExport {
        pub fn new(paper: PaperInches) -> Self {
            Self { paper }
        }

        fn print(&self, page: &Path) -> Result<Vec<u8>, ExportError> {
            let browser = Browser::new(LaunchOptions::default()).map_err(render)?;
            let tab = browser.new_tab().map_err(render)?;
            tab.navigate_to(&format!("file://{}", page.display()))
                .map_err(render)?
                .wait_until_navigated()
                .map_err(render)?;
            let paper = self.paper;
            tab.print_to_pdf(Some(PrintToPdfOptions {
                paper_width: Some(paper.width),
                paper_height: Some(paper.height),
                margin_top: Some(paper.margin),
                margin_bottom: Some(paper.margin),
                margin_left: Some(paper.margin),
                margin_right: Some(paper.margin),
                print_background: Some(true),
                prefer_css_page_size: Some(true),
                ..Default::default()
            }))
            .map_err(render)
        }
    }

    impl ExportService for ChromePdfExport {
        fn export(
            &self,
            document: &str,
            filename: &str,
            dest_dir: &Path,
        ) -> Result<PathBuf, ExportError> {
            fs::create_dir_all(dest_dir)?;
            let staging = dest_dir.join(format!(".{filename}.print.html"));
            fs::write(&staging, document)?;
            let printed = self.print(&staging);
            fs::remove_file(&staging)?;
            let path = dest_dir.join(format!("{filename}.pdf"));
            fs::write(&path, printed?)?;
            Ok(path)
        }
    }

    fn render(e: impl std::fmt::Display) -> ExportError {
        ExportError::Render(e.to_string())
    }
}

// =============================================================================
// QR codes
// =============================================================================

/// Encodes the link in-process and writes a grayscale PNG.
#[derive(Debug, Clone)]
pub struct PngBarcode {
    pub level: ErrorCorrection,
    /// Pixels per module.
    pub module_size: u32,
}

impl Default for PngBarcode {
    fn default() -> Self {
        Self {
            level: ErrorCorrection::Medium,
            module_size: 8,
        }
    }
}

impl PngBarcode {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BarcodeService for PngBarcode {
    fn encode(&self, url: &Url, dest: &Path) -> Result<BarcodeImage, BarcodeError> {
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        let code = QrCode::with_error_correction_level(url.as_str(), self.level.into())
            .map_err(|e| BarcodeError::EncodeFailed(e.to_string()))?;
        debug!(modules = code.width(), dest = %dest.display(), "writing QR code");
        code.render::<Luma<u8>>()
            .module_dimensions(self.module_size, self.module_size)
            .build()
            .save(dest)?;
        read_barcode(dest)
    }
}

/// Confirm a generated code is a readable image and record its size.
pub fn read_barcode(path: &Path) -> Result<BarcodeImage, BarcodeError> {
    let (width, height) = image::image_dimensions(path)?;
    Ok(BarcodeImage {
        path: path.to_path_buf(),
        width,
        height,
    })
}
