//! Selection capability used by the client and project filters.
//!
//! The filters never talk to a terminal themselves. They ask a [`Selector`],
//! which is either scripted from command-line flags ([`ScriptedSelector`]) or
//! prompts the user ([`PromptSelector`]).

use crate::libs::{error::ReportError, messages::Message};
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};
use std::collections::VecDeque;

/// A distinct client present in a dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOption {
    pub id: String,
    pub name: String,
}

pub trait Selector {
    /// Returns the raw answer to "which client": a 1-based ordinal or a name.
    /// `None` means no answer was given.
    fn choose_client(&mut self, options: &[ClientOption]) -> Result<Option<String>, ReportError>;

    /// Picks one id when `name` belongs to several clients.
    fn disambiguate_client(&mut self, name: &str, ids: &[String]) -> Result<Option<String>, ReportError>;

    /// Picks project names out of `projects`. An empty answer selects all of them.
    fn choose_projects(&mut self, projects: &[String]) -> Result<Vec<String>, ReportError>;
}

/// Answers taken from flags or test fixtures, consumed in order.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSelector {
    answers: VecDeque<String>,
    projects: Vec<String>,
}

impl ScriptedSelector {
    pub fn new(client: impl Into<String>) -> Self {
        Self {
            answers: VecDeque::from([client.into()]),
            projects: Vec::new(),
        }
    }

    /// Queues a further answer, e.g. the client id used for disambiguation.
    pub fn then(mut self, answer: impl Into<String>) -> Self {
        self.answers.push_back(answer.into());
        self
    }

    pub fn with_projects(mut self, projects: Vec<String>) -> Self {
        self.projects = projects;
        self
    }
}

impl Selector for ScriptedSelector {
    fn choose_client(&mut self, _options: &[ClientOption]) -> Result<Option<String>, ReportError> {
        Ok(self.answers.pop_front())
    }

    fn disambiguate_client(&mut self, _name: &str, _ids: &[String]) -> Result<Option<String>, ReportError> {
        Ok(self.answers.pop_front())
    }

    fn choose_projects(&mut self, _projects: &[String]) -> Result<Vec<String>, ReportError> {
        Ok(self.projects.clone())
    }
}

/// Terminal prompts through dialoguer.
#[derive(Debug, Default)]
pub struct PromptSelector;

impl Selector for PromptSelector {
    fn choose_client(&mut self, options: &[ClientOption]) -> Result<Option<String>, ReportError> {
        println!("{}", Message::ClientsHeader);
        for (i, option) in options.iter().enumerate() {
            println!("  {:>2}. {}", i + 1, option.name);
        }

        let answer: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptClient.to_string())
            .allow_empty(true)
            .interact_text()?;

        Ok(Some(answer.trim().to_string()).filter(|a| !a.is_empty()))
    }

    fn disambiguate_client(&mut self, name: &str, ids: &[String]) -> Result<Option<String>, ReportError> {
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptClientId(name.to_string()).to_string())
            .items(ids)
            .interact_opt()?;

        Ok(selection.map(|i| ids[i].clone()))
    }

    fn choose_projects(&mut self, projects: &[String]) -> Result<Vec<String>, ReportError> {
        let selection = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptProjects.to_string())
            .items(projects)
            .interact()?;

        Ok(selection.into_iter().map(|i| projects[i].clone()).collect())
    }
}
