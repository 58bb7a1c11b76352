//! # Certificate Service Module
//!
//! Composes the one-off recognition certificate an administrator downloads
//! for a top contributor: a single A4 landscape PDF with the institutional
//! framing, the contributor's name and totals, a signature block with the
//! official seal, and a unique certificate number.
//!
//! ## Sub-modules:
//! - `layout`: the absolutely positioned page element (frames, headings,
//!   underline, narrative, signature block).
//! - `wrap`: word-boundary text wrapping against a width measure.
//! - `seal`: raster pipeline that fades the seal image over white and
//!   writes the temporary PNG genpdf embeds.
//!
//! Composition performs no network or persistence I/O. The certificate
//! number embeds a random serial, so two calls with identical inputs
//! produce different bytes; that is intentional (uniqueness, not
//! reproducibility).

mod layout;
mod seal;
mod wrap;

use chrono::{Datelike, NaiveDate};
use genpdf::fonts::{self, FontData, FontFamily};
use genpdf::{Document, Size};
use log::warn;
use std::error::Error;
use std::path::Path;
use tempfile::NamedTempFile;

use common::model::rollup::ContributorRollup;
use layout::CertificatePage;

/// Fixed institutional strings printed on every certificate.
#[derive(Debug, Clone)]
pub struct CertificateTemplate {
    /// Header line, centered at the top of the page.
    pub authority: String,
    /// Name printed above the signature line.
    pub signatory: String,
    /// Title printed under the signatory's name.
    pub signatory_title: String,
}

impl Default for CertificateTemplate {
    fn default() -> Self {
        CertificateTemplate {
            authority: "Rwanda Environment Management Authority".to_string(),
            signatory: "Juliet Kabera".to_string(),
            signatory_title: "Director General, REMA".to_string(),
        }
    }
}

/// Pre-loaded resources the composer needs. The host shell loads these
/// once and reuses them across certificates.
pub struct CertificateAssets {
    pub fonts: FontFamily<FontData>,
    /// Raw bytes of the seal/crest image. `None`, or bytes that fail to
    /// decode, mean the certificate renders without a seal.
    pub seal_png: Option<Vec<u8>>,
    pub template: CertificateTemplate,
}

/// A composed certificate, ready to hand to the host environment as a
/// downloadable file. Not retained anywhere by this crate.
pub struct Certificate {
    /// The rendered PDF.
    pub bytes: Vec<u8>,
    /// `ECI-<year>-<4-digit serial>`.
    pub certificate_number: String,
    /// Suggested download name, e.g. `Alice_Mukamana_Certificate_2024-03-15.pdf`.
    pub file_name: String,
}

/// Load the certificate font family from `dir` (Arial if the family TTFs
/// are present, falling back to LiberationSans in the same directory).
pub fn load_font_family(dir: &Path) -> Result<FontFamily<FontData>, Box<dyn Error>> {
    if let Ok(family) = fonts::from_files(dir, "Arial", None) {
        return Ok(family);
    }
    fonts::from_files(dir, "LiberationSans", None).map_err(Into::into)
}

/// Composes a certificate with a freshly drawn random serial.
pub fn compose_certificate(
    rollup: &ContributorRollup,
    issued_on: NaiveDate,
    assets: &CertificateAssets,
) -> Result<Certificate, Box<dyn Error>> {
    compose_certificate_with_serial(rollup, issued_on, assets, random_serial())
}

/// Composes a certificate with an explicit serial. Production callers use
/// `compose_certificate`; taking the serial here keeps the document
/// deterministic for tests.
pub fn compose_certificate_with_serial(
    rollup: &ContributorRollup,
    issued_on: NaiveDate,
    assets: &CertificateAssets,
    serial: u32,
) -> Result<Certificate, Box<dyn Error>> {
    let certificate_number = certificate_number(issued_on.year(), serial);

    // The temp file must outlive rendering; genpdf reads it back then.
    let mut seal_file: Option<NamedTempFile> = None;
    if let Some(bytes) = assets.seal_png.as_deref() {
        match seal::prepare_seal(bytes) {
            Ok(tmp) => seal_file = Some(tmp),
            Err(e) => warn!("could not prepare seal image, rendering without it: {}", e),
        }
    }
    let seal_path = seal_file.as_ref().map(|tmp| tmp.path().to_path_buf());

    let mut doc = Document::new(assets.fonts.clone());
    doc.set_title("Certificate of Achievement");
    doc.set_paper_size(Size::new(layout::PAGE_WIDTH_MM, layout::PAGE_HEIGHT_MM));
    doc.push(CertificatePage::new(
        rollup,
        issued_on,
        &assets.template,
        certificate_number.clone(),
        seal_path,
    ));

    let mut bytes = Vec::new();
    doc.render(&mut bytes)?;

    Ok(Certificate {
        bytes,
        certificate_number,
        file_name: file_name(&rollup.name, issued_on),
    })
}

/// Four decimal digits of entropy, drawn from a v4 UUID.
fn random_serial() -> u32 {
    (uuid::Uuid::new_v4().as_u128() % 10_000) as u32
}

fn certificate_number(year: i32, serial: u32) -> String {
    format!("ECI-{}-{:04}", year, serial % 10_000)
}

/// Collapses whitespace runs to single underscores and strips everything
/// that is not alphanumeric or an underscore.
fn sanitized_recipient(name: &str) -> String {
    let collapsed = name.split_whitespace().collect::<Vec<_>>().join("_");
    collapsed
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

fn file_name(recipient: &str, issued_on: NaiveDate) -> String {
    format!(
        "{}_Certificate_{}.pdf",
        sanitized_recipient(recipient),
        issued_on.format("%Y-%m-%d")
    )
}
