use chrono::NaiveDate;
use genpdf::error::Error;
use genpdf::render::Area;
use genpdf::style::{Color, LineStyle, Style};
use genpdf::{Context, Element, Mm, Position, RenderResult};
use log::warn;
use std::path::PathBuf;

use common::model::display::format_long_date;
use common::model::rollup::ContributorRollup;

use super::seal::SEAL_DPI;
use super::wrap::wrap_words;
use super::CertificateTemplate;

/// A4 landscape.
pub(crate) const PAGE_WIDTH_MM: f64 = 297.0;
pub(crate) const PAGE_HEIGHT_MM: f64 = 210.0;

// 1 pt = 1/72 inch.
const PT_TO_MM: f64 = 25.4 / 72.0;

const OUTER_FRAME_INSET_MM: f64 = 15.0;
const INNER_FRAME_INSET_MM: f64 = 20.0;
// The narrative wraps to the page width minus 40 mm on each side.
const NARRATIVE_SIDE_MARGIN_MM: f64 = 40.0;
const NARRATIVE_TOP_MM: f64 = 145.0;
const NARRATIVE_LINE_STEP_MM: f64 = 8.0;

const SIGNATURE_X_MM: f64 = PAGE_WIDTH_MM - 120.0;
const SIGNATURE_Y_MM: f64 = PAGE_HEIGHT_MM - 39.0;
const SIGNATURE_LINE_LEN_MM: f64 = 80.0;
const SEAL_X_MM: f64 = SIGNATURE_X_MM - 35.0;
const SEAL_Y_MM: f64 = SIGNATURE_Y_MM - 5.0;

const DARK_GREEN: Color = Color::Rgb(27, 94, 32);
const GOLD: Color = Color::Rgb(184, 134, 11);
const BODY_GREY: Color = Color::Rgb(80, 80, 80);
const NARRATIVE_GREY: Color = Color::Rgb(60, 60, 60);
const SIGNATURE_GREY: Color = Color::Rgb(100, 100, 100);
const FAINT_GREY: Color = Color::Rgb(120, 120, 120);

/// The achievement paragraph interpolating the contributor's totals.
pub(crate) fn narrative(rollup: &ContributorRollup) -> String {
    format!(
        "has demonstrated exceptional commitment to environmental conservation through \
         {} meaningful contributions, successfully facilitating the growth of {} trees, \
         making a significant positive impact for our planet's sustainable future.",
        rollup.total_contributions, rollup.total_trees
    )
}

/// Single-page, absolutely positioned certificate layout.
///
/// Coordinates are millimetres from the page's top-left corner; the
/// document carries no page decorator so the element sees the full page.
pub(crate) struct CertificatePage {
    recipient: String,
    narrative: String,
    awarded_line: String,
    certificate_number: String,
    template: CertificateTemplate,
    seal: Option<PathBuf>,
}

impl CertificatePage {
    pub(crate) fn new(
        rollup: &ContributorRollup,
        issued_on: NaiveDate,
        template: &CertificateTemplate,
        certificate_number: String,
        seal: Option<PathBuf>,
    ) -> Self {
        CertificatePage {
            recipient: rollup.name.clone(),
            narrative: narrative(rollup),
            awarded_line: format!("Awarded this {}", format_long_date(issued_on)),
            certificate_number,
            template: template.clone(),
            seal,
        }
    }

    fn render_signature(&self, context: &Context, area: &Area<'_>) -> Result<(), Error> {
        area.draw_line(
            vec![
                Position::new(SIGNATURE_X_MM, SIGNATURE_Y_MM),
                Position::new(SIGNATURE_X_MM + SIGNATURE_LINE_LEN_MM, SIGNATURE_Y_MM),
            ],
            LineStyle::new()
                .with_thickness(PT_TO_MM)
                .with_color(SIGNATURE_GREY),
        );

        let center_x = SIGNATURE_X_MM + SIGNATURE_LINE_LEN_MM / 2.0;
        print_centered(
            context,
            area,
            &self.template.signatory,
            center_x,
            SIGNATURE_Y_MM + 8.0,
            Style::new().with_font_size(12).bold().with_color(DARK_GREEN),
        )?;
        print_centered(
            context,
            area,
            &self.template.signatory_title,
            center_x,
            SIGNATURE_Y_MM + 16.0,
            Style::new().with_font_size(10).with_color(BODY_GREY),
        )?;
        Ok(())
    }

    /// Seal omission is non-fatal: any failure here is logged and the rest
    /// of the document still renders.
    fn render_seal(&self, context: &Context, area: &Area<'_>) {
        let Some(path) = &self.seal else {
            return;
        };
        match genpdf::elements::Image::from_path(path) {
            Ok(mut seal) => {
                seal.set_dpi(SEAL_DPI);
                let mut seal_area = area.clone();
                seal_area.add_offset(Position::new(SEAL_X_MM, SEAL_Y_MM));
                if let Err(e) = seal.render(context, seal_area, Style::new()) {
                    warn!("could not draw seal image: {}", e);
                }
            }
            Err(e) => warn!("could not load seal image: {}", e),
        }
    }
}

impl Element for CertificatePage {
    fn render(
        &mut self,
        context: &Context,
        area: Area<'_>,
        _style: Style,
    ) -> Result<RenderResult, Error> {
        let center = PAGE_WIDTH_MM / 2.0;

        draw_frame(&area, OUTER_FRAME_INSET_MM, 2.0, DARK_GREEN);
        draw_frame(&area, INNER_FRAME_INSET_MM, 0.5, GOLD);

        // Issuing-authority header with its divider.
        print_centered(
            context,
            &area,
            &self.template.authority,
            center,
            35.0,
            Style::new().with_font_size(16).with_color(DARK_GREEN),
        )?;
        area.draw_line(
            vec![
                Position::new(center - 80.0, 40.0),
                Position::new(center + 80.0, 40.0),
            ],
            LineStyle::new().with_thickness(PT_TO_MM).with_color(GOLD),
        );

        // Title block.
        print_centered(
            context,
            &area,
            "CERTIFICATE",
            center,
            65.0,
            Style::new().with_font_size(42).bold().with_color(DARK_GREEN),
        )?;
        print_centered(
            context,
            &area,
            "OF ACHIEVEMENT",
            center,
            78.0,
            Style::new().with_font_size(28).with_color(DARK_GREEN),
        )?;
        print_centered(
            context,
            &area,
            "This is to certify that",
            center,
            100.0,
            Style::new().with_font_size(16).with_color(BODY_GREY),
        )?;

        // Recipient name with an underline sized to the measured text.
        let name_style = Style::new().with_font_size(32).bold().with_color(DARK_GREEN);
        print_centered(context, &area, &self.recipient, center, 120.0, name_style)?;
        let half_underline =
            f64::from(name_style.str_width(&context.font_cache, &self.recipient)) / 2.0 + 10.0;
        area.draw_line(
            vec![
                Position::new(center - half_underline, 128.0),
                Position::new(center + half_underline, 128.0),
            ],
            LineStyle::new()
                .with_thickness(1.5 * PT_TO_MM)
                .with_color(GOLD),
        );

        // Narrative, wrapped to the content width and centered line by line.
        let narrative_style = Style::new().with_font_size(14).with_color(NARRATIVE_GREY);
        let max_width = Mm::from(PAGE_WIDTH_MM - 2.0 * NARRATIVE_SIDE_MARGIN_MM);
        let lines = wrap_words(&self.narrative, max_width, |s| {
            narrative_style.str_width(&context.font_cache, s)
        });
        let mut y = NARRATIVE_TOP_MM;
        for line in &lines {
            print_centered(context, &area, line, center, y, narrative_style)?;
            y += NARRATIVE_LINE_STEP_MM;
        }

        print_centered(
            context,
            &area,
            &self.awarded_line,
            center,
            y + 15.0,
            Style::new().with_font_size(12).italic().with_color(BODY_GREY),
        )?;

        self.render_signature(context, &area)?;
        self.render_seal(context, &area);

        // Certificate number, bottom-left corner.
        area.print_str(
            &context.font_cache,
            Position::new(25.0, PAGE_HEIGHT_MM - 25.0),
            Style::new().with_font_size(8).with_color(FAINT_GREY),
            format!("Certificate No: {}", self.certificate_number),
        )?;

        let mut result = RenderResult::default();
        result.size = area.size();
        Ok(result)
    }
}

fn draw_frame(area: &Area<'_>, inset_mm: f64, thickness_pt: f64, color: Color) {
    area.draw_line(
        vec![
            Position::new(inset_mm, inset_mm),
            Position::new(PAGE_WIDTH_MM - inset_mm, inset_mm),
            Position::new(PAGE_WIDTH_MM - inset_mm, PAGE_HEIGHT_MM - inset_mm),
            Position::new(inset_mm, PAGE_HEIGHT_MM - inset_mm),
            Position::new(inset_mm, inset_mm),
        ],
        LineStyle::new()
            .with_thickness(thickness_pt * PT_TO_MM)
            .with_color(color),
    );
}

/// Prints a single line with its midpoint at `center_x_mm`.
fn print_centered(
    context: &Context,
    area: &Area<'_>,
    text: &str,
    center_x_mm: f64,
    y_mm: f64,
    style: Style,
) -> Result<(), Error> {
    let width = f64::from(style.str_width(&context.font_cache, text));
    area.print_str(
        &context.font_cache,
        Position::new(center_x_mm - width / 2.0, y_mm),
        style,
        text,
    )?;
    Ok(())
}
