#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use clockrep::libs::entry::{ReportDataset, TimeEntry};
    use clockrep::libs::error::ReportError;
    use clockrep::libs::filter::{
        distinct_clients, filter_by_client, filter_by_client_interactive, select_projects, MAX_SELECTION_ATTEMPTS,
    };
    use clockrep::libs::selector::{ClientOption, ScriptedSelector, Selector};
    use test_context::{test_context, TestContext};

    struct FilterContext {
        dataset: ReportDataset,
    }

    fn entry(client_id: &str, client_name: &str, project: &str, day: u32, hours: f64) -> TimeEntry {
        TimeEntry {
            description: format!("{} work", project),
            user_id: "u1".to_string(),
            user_name: "Anna".to_string(),
            client_id: client_id.to_string(),
            client_name: client_name.to_string(),
            project_id: format!("{}-{}", client_id, project),
            project_name: project.to_string(),
            task_name: String::new(),
            start: Utc.with_ymd_and_hms(2024, 1, day, 9, 0, 0).unwrap(),
            duration_hours: hours,
        }
    }

    impl TestContext for FilterContext {
        fn setup() -> Self {
            FilterContext {
                dataset: ReportDataset::new(vec![
                    entry("c1", "Acme", "Website", 3, 2.0),
                    entry("c2", "Globex", "Intranet", 4, 1.5),
                    entry("c1", "Acme", "Shop", 5, 0.75),
                    entry("c3", "Acme", "Legacy", 6, 4.0),
                    entry("c4", "Initech", "Printers", 7, 1.0),
                    entry("", "", "", 8, 0.25),
                ]),
            }
        }
    }

    /// Counts prompts so retry limits can be observed.
    struct CountingSelector {
        answer: Option<String>,
        asked: usize,
    }

    impl Selector for CountingSelector {
        fn choose_client(&mut self, _options: &[ClientOption]) -> Result<Option<String>, ReportError> {
            self.asked += 1;
            Ok(self.answer.clone())
        }

        fn disambiguate_client(&mut self, _name: &str, _ids: &[String]) -> Result<Option<String>, ReportError> {
            Ok(None)
        }

        fn choose_projects(&mut self, _projects: &[String]) -> Result<Vec<String>, ReportError> {
            Ok(Vec::new())
        }
    }

    #[test_context(FilterContext)]
    #[test]
    fn test_client_match_ignores_case(ctx: &mut FilterContext) {
        let lower = filter_by_client(&ctx.dataset, "acme");
        let upper = filter_by_client(&ctx.dataset, "ACME");
        assert_eq!(lower, upper);
        assert_eq!(lower.len(), 3);
    }

    #[test_context(FilterContext)]
    #[test]
    fn test_filter_preserves_order_and_rows(ctx: &mut FilterContext) {
        let filtered = filter_by_client(&ctx.dataset, "Acme");
        let projects: Vec<&str> = filtered.iter().map(|e| e.project_name.as_str()).collect();
        assert_eq!(projects, vec!["Website", "Shop", "Legacy"]);
        assert!(filtered.iter().all(|e| ctx.dataset.entries().contains(e)));
    }

    #[test_context(FilterContext)]
    #[test]
    fn test_hours_after_id_filter_match_unfiltered_sum(ctx: &mut FilterContext) {
        let mut selector = ScriptedSelector::new("Globex");
        let (filtered, option) = filter_by_client_interactive(&ctx.dataset, &mut selector).unwrap();

        let expected: f64 = ctx.dataset.iter().filter(|e| e.client_id == option.id).map(|e| e.duration_hours).sum();
        assert_eq!(filtered.total_hours(), expected);
        assert_eq!(option.id, "c2");
    }

    #[test_context(FilterContext)]
    #[test]
    fn test_distinct_clients_skip_unassigned_rows(ctx: &mut FilterContext) {
        let clients = distinct_clients(&ctx.dataset);
        let ids: Vec<&str> = clients.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["c1", "c3", "c2", "c4"]);
    }

    #[test_context(FilterContext)]
    #[test]
    fn test_ordinal_answer_picks_listed_client(ctx: &mut FilterContext) {
        // list order: Acme(c1), Acme(c3), Globex, Initech
        let (filtered, option) = filter_by_client_interactive(&ctx.dataset, &mut ScriptedSelector::new("4")).unwrap();
        assert_eq!(option.name, "Initech");
        assert_eq!(filtered.len(), 1);
    }

    #[test_context(FilterContext)]
    #[test]
    fn test_shared_name_is_disambiguated_by_id(ctx: &mut FilterContext) {
        let mut selector = ScriptedSelector::new("acme").then("c3");
        let (filtered, option) = filter_by_client_interactive(&ctx.dataset, &mut selector).unwrap();

        assert_eq!(option.id, "c3");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.total_hours(), 4.0);
    }

    #[test_context(FilterContext)]
    #[test]
    fn test_shared_name_without_choice_is_ambiguous(ctx: &mut FilterContext) {
        let result = filter_by_client_interactive(&ctx.dataset, &mut ScriptedSelector::new("Acme"));
        assert!(matches!(result, Err(ReportError::AmbiguousSelection(_))));
    }

    #[test_context(FilterContext)]
    #[test]
    fn test_shared_name_with_foreign_id_is_ambiguous(ctx: &mut FilterContext) {
        let mut selector = ScriptedSelector::new("Acme").then("c2");
        let result = filter_by_client_interactive(&ctx.dataset, &mut selector);
        assert!(matches!(result, Err(ReportError::AmbiguousSelection(_))));
    }

    #[test_context(FilterContext)]
    #[test]
    fn test_unknown_answer_is_asked_again_then_rejected(ctx: &mut FilterContext) {
        let mut selector = CountingSelector {
            answer: Some("Umbrella".to_string()),
            asked: 0,
        };
        let result = filter_by_client_interactive(&ctx.dataset, &mut selector);

        assert!(matches!(result, Err(ReportError::AmbiguousSelection(_))));
        assert_eq!(selector.asked, MAX_SELECTION_ATTEMPTS);
    }

    #[test_context(FilterContext)]
    #[test]
    fn test_second_answer_is_used_after_a_miss(ctx: &mut FilterContext) {
        let mut selector = ScriptedSelector::new("99").then("Globex");
        let (_, option) = filter_by_client_interactive(&ctx.dataset, &mut selector).unwrap();
        assert_eq!(option.name, "Globex");
    }

    #[test_context(FilterContext)]
    #[test]
    fn test_single_project_is_selected_without_asking(ctx: &mut FilterContext) {
        let globex = filter_by_client(&ctx.dataset, "Globex");
        let selection = select_projects(&globex, &mut ScriptedSelector::default().with_projects(vec!["Nope".into()])).unwrap();

        assert_eq!(selection.projects, vec!["Intranet".to_string()]);
        assert!(selection.all);
    }

    #[test_context(FilterContext)]
    #[test]
    fn test_empty_project_answer_means_all(ctx: &mut FilterContext) {
        let (acme, _) = filter_by_client_interactive(&ctx.dataset, &mut ScriptedSelector::new("1")).unwrap();
        let selection = select_projects(&acme, &mut ScriptedSelector::default()).unwrap();

        assert!(selection.all);
        assert_eq!(selection.projects, vec!["Shop".to_string(), "Website".to_string()]);
        assert_eq!(selection.dataset.len(), 2);
    }

    #[test_context(FilterContext)]
    #[test]
    fn test_chosen_projects_narrow_rows(ctx: &mut FilterContext) {
        let (acme, _) = filter_by_client_interactive(&ctx.dataset, &mut ScriptedSelector::new("1")).unwrap();
        let selection = select_projects(&acme, &mut ScriptedSelector::default().with_projects(vec!["website".into()])).unwrap();

        assert!(!selection.all);
        assert_eq!(selection.dataset.len(), 1);
        assert_eq!(selection.dataset.total_hours(), 2.0);
    }

    #[test_context(FilterContext)]
    #[test]
    fn test_unknown_project_is_rejected(ctx: &mut FilterContext) {
        let (acme, _) = filter_by_client_interactive(&ctx.dataset, &mut ScriptedSelector::new("1")).unwrap();
        let result = select_projects(&acme, &mut ScriptedSelector::default().with_projects(vec!["Intranet".into()]));
        assert!(matches!(result, Err(ReportError::AmbiguousSelection(_))));
    }

    #[test]
    fn test_numeric_client_name_is_matched_by_name() {
        let dataset = ReportDataset::new(vec![entry("c1", "Acme", "Website", 3, 2.0), entry("c2", "1337", "Portal", 4, 1.0)]);

        let (filtered, option) = filter_by_client_interactive(&dataset, &mut ScriptedSelector::new("1337")).unwrap();
        assert_eq!(option.id, "c2");
        assert_eq!(filtered.total_hours(), 1.0);

        // an in-range number still means the list position
        let (_, option) = filter_by_client_interactive(&dataset, &mut ScriptedSelector::new("1")).unwrap();
        assert_eq!(option.id, "c2");
    }

    #[test_context(FilterContext)]
    #[test]
    fn test_unknown_client_flag_names_answer_and_choices(ctx: &mut FilterContext) {
        let result = filter_by_client_interactive(&ctx.dataset, &mut ScriptedSelector::new("Umbrella"));

        match result {
            Err(ReportError::AmbiguousSelection(reason)) => {
                assert!(reason.contains("'Umbrella' not found"), "{}", reason);
                assert!(reason.contains("Acme, Acme, Globex, Initech"), "{}", reason);
            }
            other => panic!("unexpected result: {:?}", other.map(|(_, option)| option)),
        }
    }
}
