//! Content of the portfolio page.
//!
//! Every type is generic over the representation of translatable text: the
//! stored content uses [`Localized<String>`], the content shown to a visitor
//! uses plain [`String`]s in their language.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::{
    email_address::EmailAddress,
    l10n::{Language, Localized},
};

pub type Portfolio = PortfolioContent<Localized<String>>;
pub type PortfolioView = PortfolioContent<String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioContent<T> {
    pub profile: Profile<T>,
    pub sections: Sections<T>,
    #[serde(default = "Vec::new")]
    pub projects: Vec<Project<T>>,
    #[serde(default = "Vec::new")]
    pub experience: Vec<Experience<T>>,
    #[serde(default = "Vec::new")]
    pub skills: Vec<SkillCategory<T>>,
    #[serde(default)]
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile<T> {
    pub name: T,
    /// Short handle shown in the navigation bar.
    pub brand: String,
    pub headline: T,
    pub role: T,
    pub location: T,
    pub availability: T,
    pub email: EmailAddress,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sections<T> {
    pub about: Section<T>,
    pub projects: Section<T>,
    pub experience: Section<T>,
    pub skills: Section<T>,
    pub contact: Section<T>,
    pub contact_form: Section<T>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section<T> {
    pub title: T,
    pub subtitle: T,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project<T> {
    pub title: T,
    pub description: T,
    pub image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub source_url: Url,
    pub demo_url: Url,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience<T> {
    pub role: T,
    pub organization: String,
    pub period: T,
    pub description: T,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory<T> {
    pub title: T,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: Url,
}

impl Portfolio {
    pub fn localize(&self, language: Language) -> PortfolioView {
        self.map(&mut |text| text.get(language).clone())
    }
}

impl<T> PortfolioContent<T> {
    fn map<U>(&self, f: &mut impl FnMut(&T) -> U) -> PortfolioContent<U> {
        PortfolioContent {
            profile: Profile {
                name: f(&self.profile.name),
                brand: self.profile.brand.clone(),
                headline: f(&self.profile.headline),
                role: f(&self.profile.role),
                location: f(&self.profile.location),
                availability: f(&self.profile.availability),
                email: self.profile.email.clone(),
            },
            sections: Sections {
                about: self.sections.about.map(f),
                projects: self.sections.projects.map(f),
                experience: self.sections.experience.map(f),
                skills: self.sections.skills.map(f),
                contact: self.sections.contact.map(f),
                contact_form: self.sections.contact_form.map(f),
            },
            projects: self
                .projects
                .iter()
                .map(|project| Project {
                    title: f(&project.title),
                    description: f(&project.description),
                    image: project.image.clone(),
                    tags: project.tags.clone(),
                    source_url: project.source_url.clone(),
                    demo_url: project.demo_url.clone(),
                })
                .collect(),
            experience: self
                .experience
                .iter()
                .map(|experience| Experience {
                    role: f(&experience.role),
                    organization: experience.organization.clone(),
                    period: f(&experience.period),
                    description: f(&experience.description),
                    skills: experience.skills.clone(),
                })
                .collect(),
            skills: self
                .skills
                .iter()
                .map(|category| SkillCategory {
                    title: f(&category.title),
                    skills: category.skills.clone(),
                })
                .collect(),
            links: self.links.clone(),
        }
    }
}

impl<T> Section<T> {
    fn map<U>(&self, f: &mut impl FnMut(&T) -> U) -> Section<U> {
        Section {
            title: f(&self.title),
            subtitle: f(&self.subtitle),
        }
    }
}
