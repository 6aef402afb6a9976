//! Employee collection load/save over a key-value store

use std::collections::HashSet;
use std::future::Future;

use super::store::KeyValueStore;
use crate::error::{PortalError, Result};
use crate::model::Employee;

/// Reads and writes the whole employee collection as one JSON array
#[derive(Debug)]
pub struct EmployeeRepository<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> EmployeeRepository<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Persisted collection, or `None` if nothing has been stored yet
    pub fn load(&self) -> Result<Option<Vec<Employee>>> {
        match self.store.get_item(&self.key)? {
            Some(json) => {
                let employees = parse_collection(&json)?;
                log::info!("Loaded {} employees", employees.len());
                Ok(Some(employees))
            }
            None => Ok(None),
        }
    }

    /// Persisted collection, treating an absent key as empty
    pub fn load_or_empty(&self) -> Result<Vec<Employee>> {
        Ok(self.load()?.unwrap_or_default())
    }

    /// Overwrite the stored blob with the full collection
    pub fn save(&self, employees: &[Employee]) -> Result<()> {
        let json = serde_json::to_string(employees)?;
        self.store.set_item(&self.key, &json)?;
        log::info!("Employees saved ({} entries)", employees.len());
        Ok(())
    }

    /// Parse a seed document and persist it as the initial collection
    pub fn install_seed(&self, seed_json: &str) -> Result<Vec<Employee>> {
        let employees = parse_collection(seed_json)?;
        self.save(&employees)?;
        log::info!("Seeded {} employees", employees.len());
        Ok(employees)
    }

    /// Load the collection, fetching and persisting the seed on first run
    pub async fn load_or_seed<F, Fut>(&self, fetch_seed: F) -> Result<Vec<Employee>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<String>>,
    {
        if let Some(employees) = self.load()? {
            return Ok(employees);
        }
        log::info!("No stored employees, fetching seed");
        let seed_json = fetch_seed().await?;
        self.install_seed(&seed_json)
    }
}

/// Deserialize an employee array, rejecting repeated ids
fn parse_collection(json: &str) -> Result<Vec<Employee>> {
    let employees: Vec<Employee> = serde_json::from_str(json)?;
    let mut seen = HashSet::with_capacity(employees.len());
    if let Some(dup) = employees.iter().find(|e| !seen.insert(e.id)) {
        return Err(PortalError::DuplicateId { id: dup.id });
    }
    Ok(employees)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use crate::test_support::sample_employees;

    const SEED: &str = r#"[
        {"id":1,"firstName":"Ahmet","lastName":"Sourtimes","dateOfBirth":"1990-02-11","employmentDate":"2022-09-23","phone":"+(90) 532 123 45 67","email":"ahmet@sourtimes.org","department":"Analytics","position":"Junior"},
        {"id":2,"firstName":"Ayse","lastName":"Yilmaz","dateOfBirth":"1988-06-30","employmentDate":"2019-03-01","department":"Tech","position":"Senior"},
        {"id":3,"firstName":"Mehmet","lastName":"Kaya","dateOfBirth":"1995-11-05","employmentDate":"2021-07-15","email":"mehmet@example.com","department":"Tech","position":"Medior"}
    ]"#;

    #[tokio::test]
    async fn test_empty_store_fetches_and_persists_seed() {
        let store = MemoryStore::new();
        let repo = EmployeeRepository::new(&store, "employees");

        let loaded = repo
            .load_or_seed(|| async {
                tokio::task::yield_now().await;
                Ok(SEED.to_string())
            })
            .await
            .unwrap();
        let ids: Vec<u64> = loaded.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        let persisted = repo.load().unwrap().unwrap();
        assert_eq!(persisted, loaded);
    }

    #[tokio::test]
    async fn test_existing_store_skips_seed_fetch() {
        let store = MemoryStore::new();
        let repo = EmployeeRepository::new(&store, "employees");
        repo.save(&sample_employees(2)).unwrap();

        let loaded = repo
            .load_or_seed(|| async {
                Err(PortalError::SeedFetch {
                    url: "/employees.json".into(),
                    reason: "should not be called".into(),
                })
            })
            .await
            .unwrap();
        assert_eq!(loaded.len(), 2);
    }

    #[tokio::test]
    async fn test_seed_fetch_failure_leaves_store_empty() {
        let store = MemoryStore::new();
        let repo = EmployeeRepository::new(&store, "employees");

        let result = repo
            .load_or_seed(|| async {
                Err(PortalError::SeedFetch {
                    url: "/employees.json".into(),
                    reason: "404".into(),
                })
            })
            .await;
        assert!(matches!(result, Err(PortalError::SeedFetch { .. })));
        assert!(store.is_empty());
    }

    #[test]
    fn test_corrupted_blob_is_parse_error() {
        let store = MemoryStore::with_item("employees", "{not json");
        let repo = EmployeeRepository::new(&store, "employees");
        assert!(matches!(repo.load(), Err(PortalError::Parse(_))));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let twin = r#"{"id":7,"firstName":"A","lastName":"B","dateOfBirth":"2000-01-01","employmentDate":"2020-01-01","department":"Tech","position":"Junior"}"#;
        let blob = format!("[{twin},{twin}]");

        let store = MemoryStore::with_item("employees", &blob);
        let repo = EmployeeRepository::new(&store, "employees");
        assert!(matches!(repo.load(), Err(PortalError::DuplicateId { id: 7 })));

        let empty = MemoryStore::new();
        let repo = EmployeeRepository::new(&empty, "employees");
        assert!(matches!(
            repo.install_seed(&blob),
            Err(PortalError::DuplicateId { id: 7 })
        ));
        assert!(empty.is_empty());
    }

    #[test]
    fn test_save_of_fresh_load_is_byte_identical() {
        let store = MemoryStore::new();
        let repo = EmployeeRepository::new(&store, "employees");
        repo.install_seed(SEED).unwrap();
        let before = store.get_item("employees").unwrap().unwrap();

        let loaded = repo.load().unwrap().unwrap();
        repo.save(&loaded).unwrap();
        let after = store.get_item("employees").unwrap().unwrap();
        assert_eq!(before, after);
    }
}
