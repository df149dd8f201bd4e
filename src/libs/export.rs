//! Writes a finished report to disk.
//!
//! The same rows and layout can go out as the customer-facing PDF or as CSV,
//! JSON or an Excel sheet for further processing. Every format carries the
//! optional manual row and the total, and in every format the manual row is
//! left out of the total.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use clockrep::libs::export::{ExportFormat, Exporter};
//! use clockrep::libs::pdf::ReportLayout;
//! use std::path::PathBuf;
//!
//! # fn run(rows: Vec<clockrep::libs::pdf::ReportRow>, layout: ReportLayout) -> anyhow::Result<()> {
//! let exporter = Exporter::new(ExportFormat::Csv, PathBuf::from("Acme_All_2024-01.csv"));
//! exporter.export(&rows, &layout)?;
//! # Ok(())
//! # }
//! ```

use crate::{
    libs::{
        formatter::format_hours,
        messages::Message,
        pdf::{self, ManualRow, ReportLayout, ReportRow},
    },
    msg_success,
};
use anyhow::Result;
use rust_xlsxwriter::{Format, Workbook};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Output format of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ExportFormat {
    /// Paginated A4 document with logo and totals.
    #[default]
    Pdf,
    /// Comma-separated rows followed by the manual row and total.
    Csv,
    /// Pretty-printed object with title, rows, manual row and total.
    Json,
    /// Single worksheet with a bold header line.
    Excel,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ExportReport<'a> {
    pub title: &'a str,
    pub rows: &'a [ReportRow],
    pub manual_row: Option<&'a ManualRow>,
    pub total_hours: f64,
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    pub fn new(format: ExportFormat, output_path: PathBuf) -> Self {
        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn export(&self, rows: &[ReportRow], layout: &ReportLayout) -> Result<()> {
        match self.format {
            ExportFormat::Pdf => self.export_pdf(rows, layout)?,
            ExportFormat::Csv => self.export_csv(rows, layout)?,
            ExportFormat::Json => self.export_json(rows, layout)?,
            ExportFormat::Excel => self.export_excel(rows, layout)?,
        }

        tracing::info!(path = %self.output_path.display(), format = ?self.format, rows = rows.len(), "report written");
        msg_success!(Message::ReportSaved(self.output_path.display().to_string()));
        Ok(())
    }

    fn export_pdf(&self, rows: &[ReportRow], layout: &ReportLayout) -> Result<()> {
        let bytes = pdf::render(rows, layout)?;
        File::create(&self.output_path)?.write_all(&bytes)?;
        Ok(())
    }

    fn export_csv(&self, rows: &[ReportRow], layout: &ReportLayout) -> Result<()> {
        let separator = layout.decimal_separator;
        let mut wtr = csv::Writer::from_path(&self.output_path)?;

        wtr.write_record(["Description", "Task", "Date", "Duration"])?;
        for row in rows {
            let hours = format_hours(row.hours, separator);
            wtr.write_record([row.description.as_str(), row.task.as_str(), row.date.as_str(), hours.as_str()])?;
        }

        if let Some(manual) = &layout.manual_row {
            let hours = format_hours(manual.hours, separator);
            wtr.write_record([manual.description.as_str(), "", "", hours.as_str()])?;
        }
        let total = format_hours(pdf::total_hours(rows), separator);
        wtr.write_record(["Total", "", "", total.as_str()])?;

        wtr.flush()?;
        Ok(())
    }

    fn export_json(&self, rows: &[ReportRow], layout: &ReportLayout) -> Result<()> {
        let report = ExportReport {
            title: &layout.title,
            rows,
            manual_row: layout.manual_row.as_ref(),
            total_hours: pdf::total_hours(rows),
        };
        let json = serde_json::to_string_pretty(&report)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }

    fn export_excel(&self, rows: &[ReportRow], layout: &ReportLayout) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);
        let title_format = Format::new().set_bold().set_font_size(14.0);
        let hours_format = Format::new().set_num_format("0.00");
        let total_format = Format::new().set_bold().set_num_format("0.00");

        worksheet.write_string_with_format(0, 0, &layout.title, &title_format)?;
        if !layout.company_name.is_empty() {
            worksheet.write_string(1, 0, &layout.company_name)?;
        }

        for (col, title) in ["Description", "Task", "Date", "Duration"].iter().enumerate() {
            worksheet.write_string_with_format(3, col as u16, *title, &header_format)?;
        }

        let mut row = 4;
        for entry in rows {
            worksheet.write_string(row, 0, &entry.description)?;
            worksheet.write_string(row, 1, &entry.task)?;
            worksheet.write_string(row, 2, &entry.date)?;
            worksheet.write_number_with_format(row, 3, entry.hours, &hours_format)?;
            row += 1;
        }

        if let Some(manual) = &layout.manual_row {
            worksheet.write_string(row, 0, &manual.description)?;
            worksheet.write_number_with_format(row, 3, manual.hours, &hours_format)?;
            row += 1;
        }

        worksheet.write_string_with_format(row, 0, "Total", &header_format)?;
        worksheet.write_number_with_format(row, 3, pdf::total_hours(rows), &total_format)?;

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }
}
