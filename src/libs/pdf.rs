//! PDF rendering of a client report.
//!
//! Produces A4 portrait pages with the logo top-left, company name and title
//! line beside it, and a four-column table (Description / Task / Date /
//! Duration). The table header repeats on every page, long texts wrap within
//! their column, and the last page ends with the totals row.
//!
//! Layout happens in two passes: row heights are planned onto pages first so
//! the footer can print "Page i / n", then everything is drawn.

use crate::libs::{
    dates::DateRange,
    entry::TimeEntry,
    error::ReportError,
    formatter::format_hours,
};
use printpdf::image_crate::GenericImageView;
use printpdf::{
    BuiltinFont, Color, Image, ImageTransform, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Rgb,
};
use serde::Serialize;
use std::path::{Path, PathBuf};

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 15.0;
const FOOTER_Y: f32 = 10.0;
const TABLE_BOTTOM: f32 = 20.0;
/// Table start on the first page, below logo and title.
const FIRST_PAGE_TOP: f32 = 245.0;
const PAGE_TOP: f32 = PAGE_HEIGHT - MARGIN;

const LOGO_MAX_WIDTH: f32 = 40.0;
const LOGO_MAX_HEIGHT: f32 = 25.0;
const LOGO_DPI: f32 = 300.0;

const TITLE_SIZE: f32 = 14.0;
const SUBTITLE_SIZE: f32 = 11.0;
const BODY_SIZE: f32 = 9.0;
const LINE_HEIGHT: f32 = 4.2;
const ROW_PADDING: f32 = 2.0;
const HEADER_HEIGHT: f32 = LINE_HEIGHT + 2.0 * ROW_PADDING;

/// Average Helvetica glyph advance at BODY_SIZE, in mm.
const CHAR_WIDTH: f32 = BODY_SIZE * 0.5 * 0.3528;
/// Helvetica digit advance at BODY_SIZE, in mm.
const DIGIT_WIDTH: f32 = BODY_SIZE * 0.556 * 0.3528;

struct Column {
    title: &'static str,
    x: f32,
    width: f32,
}

const COLUMNS: [Column; 4] = [
    Column {
        title: "Description",
        x: MARGIN,
        width: 88.0,
    },
    Column {
        title: "Task",
        x: MARGIN + 90.0,
        width: 45.0,
    },
    Column {
        title: "Date",
        x: MARGIN + 137.0,
        width: 22.0,
    },
    Column {
        title: "Duration",
        x: MARGIN + 160.0,
        width: 20.0,
    },
];

/// One printed table line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub description: String,
    pub task: String,
    pub date: String,
    pub hours: f64,
}

impl From<&TimeEntry> for ReportRow {
    fn from(entry: &TimeEntry) -> Self {
        Self {
            description: entry.description.clone(),
            task: entry.task_name.clone(),
            date: entry.formatted_date(),
            hours: entry.duration_hours,
        }
    }
}

/// Extra line printed after the entries. It is not part of the total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManualRow {
    pub description: String,
    pub hours: f64,
}

/// Everything besides the rows that ends up on the page.
#[derive(Debug, Clone)]
pub struct ReportLayout {
    pub title: String,
    pub company_name: String,
    pub logo_path: Option<PathBuf>,
    pub manual_row: Option<ManualRow>,
    pub decimal_separator: char,
}

pub fn total_hours(rows: &[ReportRow]) -> f64 {
    rows.iter().map(|r| r.hours).sum()
}

enum Item<'a> {
    Entry(&'a ReportRow),
    Manual(&'a ManualRow),
    Total(f64),
}

struct PlacedItem<'a> {
    item: Item<'a>,
    description: Vec<String>,
    task: Vec<String>,
    height: f32,
}

fn chars_for(width: f32) -> usize {
    ((width - 1.0) / CHAR_WIDTH).floor().max(1.0) as usize
}

/// Greedy word wrap on character count. Words longer than a line are split.
pub(crate) fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > max_chars {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let rest = word.split_off(max_chars);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let word: String = word.into_iter().collect();
        let needed = if current.is_empty() { word.chars().count() } else { current.chars().count() + 1 + word.chars().count() };
        if needed > max_chars && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Splits item heights onto pages. Returns item indices per page.
///
/// Every page reserves room for the table header. An item taller than a page
/// gets a page of its own.
pub(crate) fn plan_pages(heights: &[f32], first_top: f32, top: f32, bottom: f32) -> Vec<Vec<usize>> {
    let mut pages: Vec<Vec<usize>> = vec![Vec::new()];
    let mut cursor = first_top - HEADER_HEIGHT;

    for (index, &height) in heights.iter().enumerate() {
        let page_has_items = pages.last().is_some_and(|p| !p.is_empty());
        if cursor - height < bottom && page_has_items {
            pages.push(Vec::new());
            cursor = top - HEADER_HEIGHT;
        }
        if let Some(page) = pages.last_mut() {
            page.push(index);
        }
        cursor -= height;
    }

    pages
}

fn pdf_error<E: std::fmt::Debug>(error: E) -> ReportError {
    ReportError::Pdf(format!("{:?}", error))
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

/// Renders the report and returns the PDF bytes.
pub fn render(rows: &[ReportRow], layout: &ReportLayout) -> Result<Vec<u8>, ReportError> {
    let desc_chars = chars_for(COLUMNS[0].width);
    let task_chars = chars_for(COLUMNS[1].width);

    let mut items: Vec<Item> = rows.iter().map(Item::Entry).collect();
    if let Some(manual) = &layout.manual_row {
        items.push(Item::Manual(manual));
    }
    items.push(Item::Total(total_hours(rows)));

    let placed: Vec<PlacedItem> = items
        .into_iter()
        .map(|item| {
            let (description, task) = match &item {
                Item::Entry(row) => (wrap_text(&row.description, desc_chars), wrap_text(&row.task, task_chars)),
                Item::Manual(manual) => (wrap_text(&manual.description, desc_chars), vec![String::new()]),
                Item::Total(_) => (vec!["Total".to_string()], vec![String::new()]),
            };
            let lines = description.len().max(task.len()) as f32;
            PlacedItem {
                item,
                description,
                task,
                height: lines * LINE_HEIGHT + 2.0 * ROW_PADDING,
            }
        })
        .collect();

    let heights: Vec<f32> = placed.iter().map(|p| p.height).collect();
    let pages = plan_pages(&heights, FIRST_PAGE_TOP, PAGE_TOP, TABLE_BOTTOM);
    let page_count = pages.len();

    let (doc, first_page, first_layer) = PdfDocument::new(layout.title.as_str(), Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Report");
    let fonts = Fonts {
        regular: doc.add_builtin_font(BuiltinFont::Helvetica).map_err(pdf_error)?,
        bold: doc.add_builtin_font(BuiltinFont::HelveticaBold).map_err(pdf_error)?,
    };

    for (page_index, page_items) in pages.iter().enumerate() {
        let layer = if page_index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page, layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Report");
            doc.get_page(page).get_layer(layer)
        };
        layer.set_fill_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
        layer.set_outline_color(Color::Rgb(Rgb::new(0.6, 0.6, 0.6, None)));
        layer.set_outline_thickness(0.4);

        let top = if page_index == 0 {
            draw_page_header(&layer, &fonts, layout);
            FIRST_PAGE_TOP
        } else {
            PAGE_TOP
        };

        let mut cursor = draw_table_header(&layer, &fonts, top);
        for &index in page_items {
            cursor = draw_item(&layer, &fonts, &placed[index], cursor, layout.decimal_separator);
        }

        let footer = format!("Page {} / {}", page_index + 1, page_count);
        layer.use_text(footer, BODY_SIZE, Mm(PAGE_WIDTH - MARGIN - 20.0), Mm(FOOTER_Y), &fonts.regular);
    }

    doc.save_to_bytes().map_err(pdf_error)
}

fn draw_page_header(layer: &PdfLayerReference, fonts: &Fonts, layout: &ReportLayout) {
    let mut text_x = MARGIN;
    if let Some(path) = &layout.logo_path {
        match draw_logo(layer, path) {
            Ok(width) => text_x = MARGIN + width + 8.0,
            Err(e) => tracing::warn!(logo = %path.display(), error = %e, "logo skipped"),
        }
    }

    if !layout.company_name.is_empty() {
        layer.use_text(layout.company_name.clone(), TITLE_SIZE, Mm(text_x), Mm(PAGE_TOP - 8.0), &fonts.bold);
    }
    layer.use_text(format!("Report {}", layout.title), SUBTITLE_SIZE, Mm(text_x), Mm(PAGE_TOP - 16.0), &fonts.regular);
}

/// Places the logo top-left and returns its printed width in mm.
fn draw_logo(layer: &PdfLayerReference, path: &Path) -> Result<f32, ReportError> {
    let image = printpdf::image_crate::open(path).map_err(|e| ReportError::Pdf(format!("logo {}: {}", path.display(), e)))?;
    let (width_px, height_px) = image.dimensions();
    if width_px == 0 || height_px == 0 {
        return Err(ReportError::Pdf(format!("logo {} is empty", path.display())));
    }

    let natural_width = width_px as f32 / LOGO_DPI * 25.4;
    let natural_height = height_px as f32 / LOGO_DPI * 25.4;
    let scale = (LOGO_MAX_WIDTH / natural_width).min(LOGO_MAX_HEIGHT / natural_height);
    let printed_height = natural_height * scale;

    Image::from_dynamic_image(&image).add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(Mm(MARGIN)),
            translate_y: Some(Mm(PAGE_TOP - printed_height)),
            scale_x: Some(scale),
            scale_y: Some(scale),
            dpi: Some(LOGO_DPI),
            ..Default::default()
        },
    );

    Ok(natural_width * scale)
}

fn rule(layer: &PdfLayerReference, y: f32) {
    layer.add_line(Line {
        points: vec![
            (Point::new(Mm(MARGIN), Mm(y)), false),
            (Point::new(Mm(PAGE_WIDTH - MARGIN), Mm(y)), false),
        ],
        is_closed: false,
    });
}

fn baseline(top: f32, line: usize) -> f32 {
    top - ROW_PADDING - LINE_HEIGHT * (line as f32 + 1.0) + 1.0
}

fn right_aligned_x(column: &Column, text: &str) -> f32 {
    column.x + column.width - text.chars().count() as f32 * DIGIT_WIDTH
}

fn draw_table_header(layer: &PdfLayerReference, fonts: &Fonts, top: f32) -> f32 {
    for column in &COLUMNS {
        let x = if column.title == "Duration" { right_aligned_x(column, column.title) } else { column.x };
        layer.use_text(column.title, BODY_SIZE, Mm(x), Mm(baseline(top, 0)), &fonts.bold);
    }
    let bottom = top - HEADER_HEIGHT;
    rule(layer, bottom);
    bottom
}

fn draw_item(layer: &PdfLayerReference, fonts: &Fonts, placed: &PlacedItem, top: f32, separator: char) -> f32 {
    let (date, hours, font) = match &placed.item {
        Item::Entry(row) => (row.date.as_str(), format_hours(row.hours, separator), &fonts.regular),
        Item::Manual(manual) => ("", format_hours(manual.hours, separator), &fonts.regular),
        Item::Total(total) => {
            rule(layer, top);
            ("", format_hours(*total, separator), &fonts.bold)
        }
    };

    for (i, line) in placed.description.iter().enumerate() {
        layer.use_text(line.clone(), BODY_SIZE, Mm(COLUMNS[0].x), Mm(baseline(top, i)), font);
    }
    for (i, line) in placed.task.iter().enumerate() {
        layer.use_text(line.clone(), BODY_SIZE, Mm(COLUMNS[1].x), Mm(baseline(top, i)), font);
    }
    layer.use_text(date, BODY_SIZE, Mm(COLUMNS[2].x), Mm(baseline(top, 0)), font);
    layer.use_text(hours.clone(), BODY_SIZE, Mm(right_aligned_x(&COLUMNS[3], &hours)), Mm(baseline(top, 0)), font);

    top - placed.height
}

fn file_part(text: &str) -> String {
    let cleaned: String = text
        .trim()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' { c } else { '_' })
        .collect();
    let parts: Vec<&str> = cleaned.split('_').filter(|p| !p.is_empty()).collect();
    parts.join("_")
}

/// Default output name, e.g. `Acme_Website_2024-01.pdf` or `Acme_All_2024-01_2024-03.pdf`.
pub fn report_file_name(client: &str, projects: &[String], range: &DateRange, all_projects: bool) -> String {
    let projects = if all_projects || projects.is_empty() {
        "All".to_string()
    } else {
        projects.iter().map(|p| file_part(p)).collect::<Vec<_>>().join("-")
    };

    let first = range.start_date().format("%Y-%m").to_string();
    let last = range.end_date().format("%Y-%m").to_string();
    let period = if first == last { first } else { format!("{}_{}", first, last) };

    format!("{}_{}_{}.pdf", file_part(client), projects, period)
}
