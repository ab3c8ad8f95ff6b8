// src/catalog/mod.rs

//! The immutable catalog of departments, services, news and guide steps.
//!
//! A catalog is built once per session, either from the compiled-in faculty
//! data ([`Catalog::builtin`]) or from a file through a
//! [`CatalogSource`](crate::storage::CatalogSource), and is never mutated
//! afterwards. Every list is kept in authoring order.

mod builtin;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::{
    Department, GuideStep, NewsItem, Program, ProgramInfo, ResultKind, Selection, Service,
};

/// Static collections backing the hub.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    departments: Vec<Department>,

    #[serde(default)]
    services: Vec<Service>,

    #[serde(default)]
    news: Vec<NewsItem>,

    #[serde(default)]
    programs: Vec<Program>,

    #[serde(default)]
    guide: Vec<GuideStep>,
}

/// A catalog entry a selection resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry<'a> {
    Department(&'a Department),
    Service(&'a Service),
}

impl Catalog {
    /// Build a catalog from its collections.
    pub fn new(
        departments: Vec<Department>,
        services: Vec<Service>,
        news: Vec<NewsItem>,
    ) -> Self {
        Self {
            departments,
            services,
            news,
            programs: Vec::new(),
            guide: Vec::new(),
        }
    }

    /// Attach program descriptions.
    pub fn with_programs(mut self, programs: Vec<Program>) -> Self {
        self.programs = programs;
        self
    }

    /// Attach user guide steps.
    pub fn with_guide(mut self, guide: Vec<GuideStep>) -> Self {
        self.guide = guide;
        self
    }

    /// The compiled-in faculty catalog.
    pub fn builtin() -> Self {
        Self::new(
            builtin::departments(),
            builtin::services(),
            builtin::news(),
        )
        .with_programs(builtin::programs())
        .with_guide(builtin::guide())
    }

    /// All departments in declaration order.
    pub fn list_departments(&self) -> &[Department] {
        &self.departments
    }

    /// All services in declaration order.
    pub fn list_services(&self) -> &[Service] {
        &self.services
    }

    /// All news items in authoring order (not sorted by date).
    pub fn list_news(&self) -> &[NewsItem] {
        &self.news
    }

    /// Urgent news items, authoring order preserved.
    pub fn urgent_news(&self) -> Vec<&NewsItem> {
        self.news.iter().filter(|n| n.is_urgent).collect()
    }

    /// User guide steps in order.
    pub fn guide(&self) -> &[GuideStep] {
        &self.guide
    }

    pub fn department(&self, id: &str) -> Option<&Department> {
        self.departments.iter().find(|d| d.id == id)
    }

    pub fn service(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }

    /// Resolve a selection back to its catalog entry.
    pub fn resolve(&self, selection: &Selection) -> Option<Entry<'_>> {
        match selection.kind {
            ResultKind::Department => self.department(&selection.id).map(Entry::Department),
            ResultKind::Service => self.service(&selection.id).map(Entry::Service),
        }
    }

    /// Program details for a code, with fallbacks for unknown codes.
    pub fn program<'a>(&'a self, code: &'a str) -> ProgramInfo<'a> {
        self.programs
            .iter()
            .find(|p| p.code == code)
            .map(ProgramInfo::from)
            .unwrap_or_else(|| ProgramInfo::unknown(code))
    }

    /// Program details for every code of a department, in code order.
    pub fn programs_for<'a>(&'a self, department: &'a Department) -> Vec<ProgramInfo<'a>> {
        department
            .codes
            .iter()
            .map(|code| self.program(code))
            .collect()
    }

    /// Check the id uniqueness that search selection depends on.
    pub fn validate(&self) -> Result<()> {
        ensure_unique("department", self.departments.iter().map(|d| d.id.as_str()))?;
        ensure_unique("service", self.services.iter().map(|s| s.id.as_str()))?;
        ensure_unique("news item", self.news.iter().map(|n| n.id.as_str()))?;

        for dept in &self.departments {
            ensure_unique(
                &format!("program code in department '{}'", dept.id),
                dept.codes.iter().map(String::as_str),
            )?;
        }
        Ok(())
    }
}

fn ensure_unique<'a>(what: &str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(AppError::validation(format!("duplicate {what} id '{id}'")));
        }
    }
    Ok(())
}
