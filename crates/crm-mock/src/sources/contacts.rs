//! The contact pool that drives every generated record.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{MockDataError, Result};

/// A reference contact: who they are, where they work, and their title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub company: String,
    pub title: String,
}

impl Contact {
    pub fn new(
        name: impl Into<String>,
        company: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            company: company.into(),
            title: title.into(),
        }
    }

    /// First whitespace-separated token of the name.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

/// Built-in executive directory used when no other pool is configured.
const EXECUTIVES: &[(&str, &str, &str)] = &[
    ("James Quincey", "The Coca-Cola Company", "Chief Executive Officer"),
    ("Nancy Quan", "The Coca-Cola Company", "Chief Technical Officer"),
    ("Ramon Laguarta", "PepsiCo", "Chairman and CEO"),
    ("Jane Wakely", "PepsiCo", "Chief Consumer and Marketing Officer"),
    ("Andy Jassy", "Amazon", "President and CEO"),
    ("Alicia Boler Davis", "Amazon", "SVP Global Customer Fulfillment"),
    ("Satya Nadella", "Microsoft", "Chairman and CEO"),
    ("Amy Hood", "Microsoft", "Executive Vice President and CFO"),
    ("Sundar Pichai", "Alphabet", "Chief Executive Officer"),
    ("Ruth Porat", "Alphabet", "President and Chief Investment Officer"),
    ("Tim Cook", "Apple", "Chief Executive Officer"),
    ("Katherine Adams", "Apple", "Senior Vice President and General Counsel"),
    ("Mike Sievert", "T-Mobile US", "President and CEO"),
    ("Callie Field", "T-Mobile US", "President Business Group"),
    ("Elon Musk", "Tesla", "Technoking"),
    ("Vaibhav Taneja", "Tesla", "Chief Financial Officer"),
    ("Reed Hastings", "Netflix", "Executive Chairman"),
    ("Greg Peters", "Netflix", "Co-CEO"),
    ("Han Jong-hee", "Samsung Electronics", "Vice Chairman and CEO"),
    ("Park Hark-kyu", "Samsung Electronics", "President and CFO"),
];

/// Read-only, ordered set of contacts for one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactPool {
    contacts: Vec<Contact>,
}

impl ContactPool {
    pub fn new(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }

    /// Builds a pool from `(name, company, title)` tuples.
    pub fn from_tuples<I, N, C, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = (N, C, T)>,
        N: Into<String>,
        C: Into<String>,
        T: Into<String>,
    {
        Self::new(
            entries
                .into_iter()
                .map(|(name, company, title)| Contact::new(name, company, title))
                .collect(),
        )
    }

    /// The built-in directory of 20 executives across 10 companies.
    pub fn builtin() -> Self {
        Self::from_tuples(EXECUTIVES.iter().copied())
    }

    /// Loads a pool from a JSON array of `{"name", "company", "title"}` objects.
    pub fn from_json_reader(reader: impl Read) -> Result<Self> {
        let contacts: Vec<Contact> = serde_json::from_reader(reader)?;
        Ok(Self::new(contacts))
    }

    /// Loads a pool from a JSON fixture file.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| MockDataError::io(path, e))?;
        let pool = Self::from_json_reader(std::io::BufReader::new(file))?;
        debug!("Loaded {} contacts from {}", pool.len(), path.display());
        Ok(pool)
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Distinct company names, in order of first appearance.
    pub fn company_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut names = Vec::new();
        for contact in &self.contacts {
            if seen.insert(contact.company.as_str()) {
                names.push(contact.company.as_str());
            }
        }
        names
    }

    /// All contacts working at `company`.
    pub fn company_contacts(&self, company: &str) -> Vec<&Contact> {
        self.contacts
            .iter()
            .filter(|c| c.company == company)
            .collect()
    }

    /// Contacts at `company` other than the one called `name`.
    pub fn teammates_of(&self, name: &str, company: &str) -> Vec<&Contact> {
        self.contacts
            .iter()
            .filter(|c| c.company == company && c.name != name)
            .collect()
    }

    /// Picks a contact uniformly from the whole pool.
    pub fn choose(&self, rng: &mut impl Rng) -> Option<&Contact> {
        self.contacts.choose(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_pool() {
        let pool = ContactPool::builtin();
        assert_eq!(pool.len(), 20);
        assert_eq!(pool.company_names().len(), 10);
        for company in pool.company_names() {
            assert_eq!(pool.company_contacts(company).len(), 2);
        }
    }

    #[test]
    fn test_company_names_first_appearance_order() {
        let pool = ContactPool::from_tuples([
            ("A One", "Beta", "CEO"),
            ("B Two", "Alpha", "CFO"),
            ("C Three", "Beta", "CTO"),
        ]);
        assert_eq!(pool.company_names(), vec!["Beta", "Alpha"]);
    }

    #[test]
    fn test_company_names_large_pool() {
        let contacts: Vec<Contact> = (0..5_000)
            .map(|i| Contact::new(format!("Person {i}"), format!("Company {}", i % 50), "Analyst"))
            .collect();
        let pool = ContactPool::new(contacts);

        let names = pool.company_names();
        assert_eq!(names.len(), 50);
        assert_eq!(names[0], "Company 0");
        assert_eq!(names[49], "Company 49");
    }

    #[test]
    fn test_teammates_exclude_self_and_other_companies() {
        let pool = ContactPool::builtin();
        let mates = pool.teammates_of("Tim Cook", "Apple");
        assert_eq!(mates.len(), 1);
        assert_eq!(mates[0].name, "Katherine Adams");
    }

    #[test]
    fn test_first_name() {
        assert_eq!(Contact::new("Alicia Boler Davis", "Amazon", "SVP").first_name(), "Alicia");
        assert_eq!(Contact::new("Technoking", "Tesla", "X").first_name(), "Technoking");
    }

    #[test]
    fn test_from_json_reader() {
        let json = r#"[{"name": "Sofía Ramírez", "company": "Innovar Group", "title": "Gerente de Compras"}]"#;
        let pool = ContactPool::from_json_reader(json.as_bytes()).unwrap();
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.contacts()[0].name, "Sofía Ramírez");
    }

    #[test]
    fn test_from_json_reader_rejects_malformed() {
        let result = ContactPool::from_json_reader(&b"[{\"name\": 3}]"[..]);
        assert!(matches!(result, Err(MockDataError::Json(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = ContactPool::load_json("/nonexistent/contacts.json");
        assert!(matches!(result, Err(MockDataError::Io { .. })));
    }

    #[test]
    fn test_choose_empty_pool() {
        let pool = ContactPool::default();
        let mut rng = rand::thread_rng();
        assert!(pool.choose(&mut rng).is_none());
    }
}
