//! Client and project narrowing of a [`ReportDataset`].
//!
//! Filtering is a pure projection: rows are kept or dropped, never changed,
//! and their order is preserved.
//!
//! ## Client choice
//!
//! [`filter_by_client_interactive`] lists the distinct `(id, name)` pairs and
//! accepts either a 1-based ordinal or a name. Names compare
//! case-insensitively. When one name belongs to several client ids the
//! [`Selector`] is asked to pick one of the candidate ids.

use crate::libs::{
    entry::ReportDataset,
    error::ReportError,
    selector::{ClientOption, Selector},
};
use std::collections::BTreeSet;

/// Unresolvable client answers tolerated before giving up.
pub const MAX_SELECTION_ATTEMPTS: usize = 3;

fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Rows whose client name equals `exact_name`, ignoring case and surrounding whitespace.
pub fn filter_by_client(dataset: &ReportDataset, exact_name: &str) -> ReportDataset {
    let key = normalize_name(exact_name);
    dataset.retain_where(|e| normalize_name(&e.client_name) == key)
}

pub fn filter_by_client_id(dataset: &ReportDataset, client_id: &str) -> ReportDataset {
    dataset.retain_where(|e| e.client_id == client_id)
}

/// Distinct clients in the dataset, sorted by name then id. Rows without a client are skipped.
pub fn distinct_clients(dataset: &ReportDataset) -> Vec<ClientOption> {
    let pairs: BTreeSet<(String, String, String)> = dataset
        .iter()
        .filter(|e| !e.client_id.is_empty())
        .map(|e| (normalize_name(&e.client_name), e.client_id.clone(), e.client_name.clone()))
        .collect();

    pairs.into_iter().map(|(_, id, name)| ClientOption { id, name }).collect()
}

enum Resolution<'a> {
    One(&'a ClientOption),
    Many(Vec<&'a ClientOption>),
    Unmatched,
}

fn resolve_answer<'a>(options: &'a [ClientOption], answer: &str) -> Resolution<'a> {
    // numeric client names are still reachable when the ordinal is out of range
    if let Some(option) = answer.parse::<usize>().ok().and_then(|n| n.checked_sub(1)).and_then(|i| options.get(i)) {
        return Resolution::One(option);
    }

    let key = normalize_name(answer);
    let mut matches: Vec<&ClientOption> = options.iter().filter(|o| normalize_name(&o.name) == key).collect();
    match matches.len() {
        0 => Resolution::Unmatched,
        1 => Resolution::One(matches.remove(0)),
        _ => Resolution::Many(matches),
    }
}

/// Lets `selector` pick one client and returns its rows together with the choice.
///
/// # Errors
///
/// [`ReportError::AmbiguousSelection`] when the dataset has no clients, no
/// answer is given, disambiguation is absent or names an id outside the
/// candidates, or no answer matched after [`MAX_SELECTION_ATTEMPTS`]. An
/// unmatched answer is named in the error together with the available clients.
pub fn filter_by_client_interactive<S>(dataset: &ReportDataset, selector: &mut S) -> Result<(ReportDataset, ClientOption), ReportError>
where
    S: Selector + ?Sized,
{
    let options = distinct_clients(dataset);
    if options.is_empty() {
        return Err(ReportError::AmbiguousSelection("no clients in the selected period".to_string()));
    }

    let mut last_miss: Option<String> = None;
    for attempt in 1..=MAX_SELECTION_ATTEMPTS {
        let answer = match selector.choose_client(&options)?.map(|a| a.trim().to_string()).filter(|a| !a.is_empty()) {
            Some(answer) => answer,
            None => {
                return Err(match &last_miss {
                    Some(miss) => client_not_found(miss, &options),
                    None => ReportError::AmbiguousSelection("no client selected".to_string()),
                })
            }
        };

        match resolve_answer(&options, &answer) {
            Resolution::One(option) => return Ok((filter_by_client_id(dataset, &option.id), option.clone())),
            Resolution::Many(candidates) => {
                let ids: Vec<String> = candidates.iter().map(|c| c.id.clone()).collect();
                let picked = selector.disambiguate_client(&answer, &ids)?.map(|id| id.trim().to_string());

                return match picked.and_then(|id| candidates.into_iter().find(|c| c.id == id)) {
                    Some(option) => Ok((filter_by_client_id(dataset, &option.id), option.clone())),
                    None => Err(ReportError::AmbiguousSelection(format!(
                        "'{}' matches clients {}, none of them was chosen",
                        answer,
                        ids.join(", ")
                    ))),
                };
            }
            Resolution::Unmatched => {
                tracing::warn!(answer = %answer, attempt, "client answer did not match");
                last_miss = Some(answer);
            }
        }
    }

    Err(match &last_miss {
        Some(miss) => client_not_found(miss, &options),
        None => ReportError::AmbiguousSelection(format!("no client matched after {} attempts", MAX_SELECTION_ATTEMPTS)),
    })
}

fn client_not_found(answer: &str, options: &[ClientOption]) -> ReportError {
    let names: Vec<&str> = options.iter().map(|o| o.name.as_str()).collect();
    ReportError::AmbiguousSelection(format!("client '{}' not found, available: {}", answer, names.join(", ")))
}

/// Distinct non-blank project names, sorted case-insensitively.
pub fn distinct_projects(dataset: &ReportDataset) -> Vec<String> {
    let names: BTreeSet<(String, String)> = dataset
        .iter()
        .filter(|e| !e.project_name.trim().is_empty())
        .map(|e| (normalize_name(&e.project_name), e.project_name.clone()))
        .collect();

    let mut seen = BTreeSet::new();
    names.into_iter().filter(|(key, _)| seen.insert(key.clone())).map(|(_, name)| name).collect()
}

/// Rows whose project name is one of `names`, ignoring case.
pub fn filter_by_projects(dataset: &ReportDataset, names: &[String]) -> ReportDataset {
    let keys: BTreeSet<String> = names.iter().map(|n| normalize_name(n)).collect();
    dataset.retain_where(|e| keys.contains(&normalize_name(&e.project_name)))
}

/// Outcome of the project step.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectSelection {
    pub dataset: ReportDataset,
    pub projects: Vec<String>,
    /// Every project of the client was included.
    pub all: bool,
}

/// Narrows a client's rows to the projects picked through `selector`.
///
/// A single project is chosen without asking. An empty answer keeps every
/// project. Names that are not present are rejected.
pub fn select_projects<S>(dataset: &ReportDataset, selector: &mut S) -> Result<ProjectSelection, ReportError>
where
    S: Selector + ?Sized,
{
    let available = distinct_projects(dataset);
    if available.is_empty() {
        return Err(ReportError::AmbiguousSelection("no projects for this client".to_string()));
    }

    let chosen = if available.len() == 1 {
        available.clone()
    } else {
        selector.choose_projects(&available)?
    };

    if chosen.is_empty() {
        return Ok(ProjectSelection {
            dataset: filter_by_projects(dataset, &available),
            projects: available,
            all: true,
        });
    }

    let available_keys: BTreeSet<String> = available.iter().map(|p| normalize_name(p)).collect();
    if let Some(unknown) = chosen.iter().find(|p| !available_keys.contains(&normalize_name(p))) {
        return Err(ReportError::AmbiguousSelection(format!(
            "project '{}' not found, available: {}",
            unknown,
            available.join(", ")
        )));
    }

    let chosen_keys: BTreeSet<String> = chosen.iter().map(|p| normalize_name(p)).collect();
    Ok(ProjectSelection {
        dataset: filter_by_projects(dataset, &chosen),
        all: chosen_keys == available_keys,
        projects: chosen,
    })
}
