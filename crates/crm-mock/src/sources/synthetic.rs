//! Synthetic contact pools built from fake company and person names.

use std::collections::HashSet;

use fake::{
    Fake,
    faker::{company::en::CompanyName, job::en::Title, name::en::Name},
};
use rand::Rng;
use rand_distr::{Distribution, Poisson};

use super::contacts::{Contact, ContactPool};

/// Attempts per unique name before giving up on a slot.
const MAX_NAME_ATTEMPTS: usize = 16;

/// Generates a pool of invented companies and their staff.
#[derive(Debug, Clone, Copy)]
pub struct SyntheticContacts {
    /// Number of distinct companies.
    pub company_count: usize,
    /// Mean contacts per company (Poisson, at least one each).
    pub avg_contacts_per_company: f64,
}

impl Default for SyntheticContacts {
    fn default() -> Self {
        Self {
            company_count: 10,
            avg_contacts_per_company: 3.0,
        }
    }
}

impl SyntheticContacts {
    pub fn new(company_count: usize) -> Self {
        Self {
            company_count,
            ..Default::default()
        }
    }

    /// Generates the pool.
    ///
    /// Company names are unique across the pool and person names are unique
    /// within a company, since names are the only link between records.
    pub fn generate(&self, rng: &mut impl Rng) -> ContactPool {
        let poisson = Poisson::new(self.avg_contacts_per_company.max(f64::MIN_POSITIVE)).ok();
        let mut companies = HashSet::new();
        let mut contacts = Vec::new();

        for _ in 0..self.company_count {
            let Some(company) = unique_fake(&mut companies, rng, |rng| {
                CompanyName().fake_with_rng::<String, _>(rng)
            }) else {
                continue;
            };

            let staff = poisson
                .as_ref()
                .map(|p| p.sample(rng) as usize)
                .unwrap_or(1)
                .max(1);

            let mut names = HashSet::new();
            for _ in 0..staff {
                let Some(name) =
                    unique_fake(&mut names, rng, |rng| Name().fake_with_rng::<String, _>(rng))
                else {
                    continue;
                };
                let title: String = Title().fake_with_rng(rng);
                contacts.push(Contact::new(name, company.clone(), title));
            }
        }

        ContactPool::new(contacts)
    }
}

/// Draws fake values until one is not yet in `seen`.
fn unique_fake<R: Rng>(
    seen: &mut HashSet<String>,
    rng: &mut R,
    mut draw: impl FnMut(&mut R) -> String,
) -> Option<String> {
    for _ in 0..MAX_NAME_ATTEMPTS {
        let value = draw(rng);
        if seen.insert(value.clone()) {
            return Some(value);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_generate_pool() {
        let mut rng = rand::thread_rng();
        let pool = SyntheticContacts::new(8).generate(&mut rng);

        let companies = pool.company_names();
        assert!(companies.len() <= 8);
        assert!(!companies.is_empty());
        for company in companies {
            let staff = pool.company_contacts(company);
            assert!(!staff.is_empty());
            let names: HashSet<_> = staff.iter().map(|c| c.name.as_str()).collect();
            assert_eq!(names.len(), staff.len(), "Duplicate name at {company}");
        }
    }

    #[test]
    fn test_zero_companies() {
        let mut rng = rand::thread_rng();
        let pool = SyntheticContacts::new(0).generate(&mut rng);
        assert!(pool.is_empty());
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let source = SyntheticContacts::new(5);
        let a = source.generate(&mut StdRng::seed_from_u64(99));
        let b = source.generate(&mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
