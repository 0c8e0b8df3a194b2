use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

pub static GLOBAL_CONTENT: LazyLock<Result<ContentTables, ContentError>> =
    LazyLock::new(ContentTables::load);

pub const PROFILE_FILE: &str = "profile.json";
pub const SKILLS_FILE: &str = "skills.json";
pub const COMPETENCIES_FILE: &str = "competencies.json";
pub const PROJECTS_FILE: &str = "projects.json";
pub const CERTIFICATES_FILE: &str = "certificates.json";

#[derive(Embed)]
#[folder = "content"]
pub struct ContentFiles;

/// A skill label. Rendered in declaration order, duplicates included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillTag(pub String);

impl SkillTag {
    pub fn label(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competency {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStudy {
    pub problem: String,
    /// Steps in the order they happened.
    pub process: Vec<String>,
    pub results: String,
}

/// A static file offered for download from a project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Download {
    pub label: String,
    pub href: String,
}

/// A project card. Identity is its position in the projects table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tools: String,
    #[serde(default)]
    pub github_link: Option<String>,
    #[serde(default)]
    pub live_link: Option<String>,
    #[serde(default)]
    pub downloads: Vec<Download>,
    #[serde(default)]
    pub case_study: Option<CaseStudy>,
}

impl Project {
    pub fn has_case_study(&self) -> bool {
        self.case_study.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    pub title: String,
    pub platform: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSpan {
    pub text: String,
    #[serde(default)]
    pub highlight: bool,
}

pub type Paragraph = Vec<TextSpan>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub href: String,
    /// Open in a new browsing context.
    #[serde(default)]
    pub new_tab: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub brand: String,
    pub headline: String,
    pub tagline: String,
    pub resume: String,
    pub copyright_holder: String,
    #[serde(default)]
    pub about: Vec<Paragraph>,
    #[serde(default)]
    pub contacts: Vec<ContactLink>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Content file {0} not found")]
    Missing(&'static str),
    #[error("Couldn't parse {file}: {message}")]
    Parse {
        file: &'static str,
        message: String,
    },
    #[error("{kind} #{index} has an empty {field}")]
    EmptyField {
        kind: &'static str,
        index: usize,
        field: &'static str,
    },
    #[error("Case study of project #{index} has no process steps")]
    EmptyProcess { index: usize },
}

/// Every table the page renders. Built once, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentTables {
    pub profile: Profile,
    pub skills: Vec<SkillTag>,
    pub competencies: Vec<Competency>,
    pub projects: Vec<Project>,
    pub certificates: Vec<Certificate>,
}

/// The process-wide tables, parsed and validated on first access.
pub fn tables() -> Result<&'static ContentTables, ContentError> {
    GLOBAL_CONTENT.as_ref().map_err(Clone::clone)
}

impl ContentTables {
    fn load() -> Result<Self, ContentError> {
        Self::from_files(|name| ContentFiles::get(name).map(|f| f.data.into_owned()))
    }

    /// Parses and validates all tables, reading each file through `read`.
    pub fn from_files<F>(read: F) -> Result<Self, ContentError>
    where
        F: Fn(&str) -> Option<Vec<u8>>,
    {
        let tables = Self {
            profile: parse_file(&read, PROFILE_FILE)?,
            skills: parse_file(&read, SKILLS_FILE)?,
            competencies: parse_file(&read, COMPETENCIES_FILE)?,
            projects: parse_file(&read, PROJECTS_FILE)?,
            certificates: parse_file(&read, CERTIFICATES_FILE)?,
        };
        tables.validate()?;
        for (i, p) in tables.projects.iter().enumerate() {
            if !p.has_case_study() {
                log::warn!("project #{i} ({}) has no case study", p.title);
            }
        }
        Ok(tables)
    }

    pub fn project(&self, index: usize) -> Option<&Project> {
        self.projects.get(index)
    }

    fn validate(&self) -> Result<(), ContentError> {
        let profile = &self.profile;
        require("profile", 0, "name", &profile.name)?;
        require("profile", 0, "brand", &profile.brand)?;
        require("profile", 0, "headline", &profile.headline)?;
        require("profile", 0, "resume", &profile.resume)?;
        for (i, c) in profile.contacts.iter().enumerate() {
            require("contact", i, "label", &c.label)?;
            require("contact", i, "href", &c.href)?;
        }
        for (i, s) in self.skills.iter().enumerate() {
            require("skill", i, "label", s.label())?;
        }
        for (i, c) in self.competencies.iter().enumerate() {
            require("competency", i, "title", &c.title)?;
            require("competency", i, "description", &c.description)?;
        }
        for (i, p) in self.projects.iter().enumerate() {
            validate_project(i, p)?;
        }
        for (i, c) in self.certificates.iter().enumerate() {
            require("certificate", i, "title", &c.title)?;
            require("certificate", i, "platform", &c.platform)?;
            require("certificate", i, "link", &c.link)?;
        }
        Ok(())
    }
}

fn parse_file<F, T>(read: &F, file: &'static str) -> Result<T, ContentError>
where
    F: Fn(&str) -> Option<Vec<u8>>,
    T: DeserializeOwned,
{
    let data = read(file).ok_or(ContentError::Missing(file))?;
    serde_json::from_slice(&data).map_err(|e| ContentError::Parse {
        file,
        message: e.to_string(),
    })
}

fn require(
    kind: &'static str,
    index: usize,
    field: &'static str,
    value: &str,
) -> Result<(), ContentError> {
    if value.trim().is_empty() {
        return Err(ContentError::EmptyField { kind, index, field });
    }
    Ok(())
}

fn validate_project(index: usize, p: &Project) -> Result<(), ContentError> {
    require("project", index, "title", &p.title)?;
    require("project", index, "description", &p.description)?;
    // links are surfaced as-is, but a present link must not be blank
    if let Some(link) = &p.github_link {
        require("project", index, "github_link", link)?;
    }
    if let Some(link) = &p.live_link {
        require("project", index, "live_link", link)?;
    }
    for d in &p.downloads {
        require("project", index, "download href", &d.href)?;
        require("project", index, "download label", &d.label)?;
    }
    if let Some(cs) = &p.case_study {
        require("project", index, "case study problem", &cs.problem)?;
        require("project", index, "case study results", &cs.results)?;
        if cs.process.is_empty() {
            return Err(ContentError::EmptyProcess { index });
        }
        for step in &cs.process {
            require("project", index, "case study step", step)?;
        }
    }
    Ok(())
}
