//! Employee directory data and the HR backend client.

use serde::Deserialize;

use veneer::table::Row;

/// One employee in the directory.
#[derive(Debug, Clone, Deserialize)]
pub struct Employee {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub leaves_taken: u32,
}

#[derive(Debug, Deserialize)]
struct SearchResults {
    results: Vec<Employee>,
}

/// Thin client for the HR backend's JSON endpoints.
#[derive(Debug, Clone)]
pub struct HrClient {
    http: reqwest::Client,
    base: String,
}

impl HrClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: base.into(),
        }
    }

    /// Query the employee search endpoint.
    pub async fn search(&self, query: &str) -> Result<Vec<Employee>, reqwest::Error> {
        let url = format!("{}/api/employees/search/", self.base);
        let results: SearchResults = self
            .http
            .get(&url)
            .query(&[("q", query)])
            .header("X-Requested-With", "XMLHttpRequest")
            .send()
            .await?
            .json()
            .await?;
        Ok(results.results)
    }
}

/// Directory contents shown before the backend answers a search.
pub fn seed_employees() -> Vec<Employee> {
    vec![
        Employee {
            id: 1,
            name: "Amara Okafor".into(),
            department: "Engineering".into(),
            leaves_taken: 4,
        },
        Employee {
            id: 2,
            name: "Jonas Berg".into(),
            department: "Sales".into(),
            leaves_taken: 11,
        },
        Employee {
            id: 3,
            name: "Priya Nair".into(),
            department: "Engineering".into(),
            leaves_taken: 2,
        },
        Employee {
            id: 4,
            name: "Miguel Santos".into(),
            department: "Human Resources".into(),
            leaves_taken: 7,
        },
        Employee {
            id: 5,
            name: "Lena Fischer".into(),
            department: "Sales".into(),
            leaves_taken: 0,
        },
    ]
}

/// Convert employees into table rows (Name, Department, Leaves).
pub fn to_rows(employees: &[Employee]) -> Vec<Row> {
    employees
        .iter()
        .map(|e| {
            Row::new(
                e.id.to_string(),
                vec![
                    e.name.clone(),
                    e.department.clone(),
                    e.leaves_taken.to_string(),
                ],
            )
        })
        .collect()
}
