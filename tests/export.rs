#[cfg(test)]
mod tests {
    use clockrep::libs::export::{ExportFormat, Exporter};
    use clockrep::libs::pdf::{ManualRow, ReportLayout, ReportRow};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
        rows: Vec<ReportRow>,
        layout: ReportLayout,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            ExportTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
                rows: vec![
                    ReportRow {
                        description: "Landing page".to_string(),
                        task: "Design".to_string(),
                        date: "03.01.2024".to_string(),
                        hours: 2.0,
                    },
                    ReportRow {
                        description: "Footer, links".to_string(),
                        task: String::new(),
                        date: "04.01.2024".to_string(),
                        hours: 0.75,
                    },
                ],
                layout: ReportLayout {
                    title: "January 2024".to_string(),
                    company_name: "Example GmbH".to_string(),
                    logo_path: None,
                    manual_row: Some(ManualRow {
                        description: "Project management".to_string(),
                        hours: 1.5,
                    }),
                    decimal_separator: ',',
                },
            }
        }
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_csv(ctx: &mut ExportTestContext) {
        let output_path = ctx.temp_dir.path().join("report.csv");
        Exporter::new(ExportFormat::Csv, output_path.clone()).export(&ctx.rows, &ctx.layout).unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "Description,Task,Date,Duration");
        assert_eq!(lines[1], "Landing page,Design,03.01.2024,\"2,00\"");
        assert_eq!(lines[2], "\"Footer, links\",,04.01.2024,\"0,75\"");
        assert_eq!(lines[3], "Project management,,,\"1,50\"");
        assert_eq!(lines[4], "Total,,,\"2,75\"");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_json(ctx: &mut ExportTestContext) {
        let output_path = ctx.temp_dir.path().join("report.json");
        Exporter::new(ExportFormat::Json, output_path.clone()).export(&ctx.rows, &ctx.layout).unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(json["title"], "January 2024");
        assert_eq!(json["rows"].as_array().unwrap().len(), 2);
        assert_eq!(json["manual_row"]["hours"], 1.5);
        assert_eq!(json["total_hours"], 2.75);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_json_without_manual_row(ctx: &mut ExportTestContext) {
        ctx.layout.manual_row = None;
        let output_path = ctx.temp_dir.path().join("report.json");
        Exporter::new(ExportFormat::Json, output_path.clone()).export(&ctx.rows, &ctx.layout).unwrap();

        let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&output_path).unwrap()).unwrap();
        assert!(json["manual_row"].is_null());
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_excel(ctx: &mut ExportTestContext) {
        let output_path = ctx.temp_dir.path().join("report.xlsx");
        Exporter::new(ExportFormat::Excel, output_path.clone()).export(&ctx.rows, &ctx.layout).unwrap();

        let bytes = std::fs::read(&output_path).unwrap();
        // xlsx is a zip container
        assert!(bytes.starts_with(b"PK"));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_pdf(ctx: &mut ExportTestContext) {
        let output_path = ctx.temp_dir.path().join("report.pdf");
        let exporter = Exporter::new(ExportFormat::Pdf, output_path.clone());
        exporter.export(&ctx.rows, &ctx.layout).unwrap();

        assert_eq!(exporter.output_path(), output_path.as_path());
        assert!(std::fs::read(&output_path).unwrap().starts_with(b"%PDF"));
    }

    #[test]
    fn test_extensions() {
        assert_eq!(ExportFormat::Pdf.extension(), "pdf");
        assert_eq!(ExportFormat::Excel.extension(), "xlsx");
        assert_eq!(ExportFormat::default(), ExportFormat::Pdf);
    }
}
