use crate::core::collation::locale_compare;
use crate::core::{Storage, Student};
use crate::utils::error::Result;

/// Students kept in insertion order.
///
/// Lookups and removals are linear scans keyed by exact email. Duplicate
/// emails are accepted by [`Roster::add`]; only the earliest entry is
/// reachable through [`Roster::find`] and [`Roster::remove`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, student: Student) {
        if self.find(&student.email).is_some() {
            tracing::warn!(
                "Duplicate email {} added; only the first entry is addressable",
                student.email
            );
        }
        tracing::debug!("Adding student {} <{}>", student.name, student.email);
        self.students.push(student);
    }

    pub fn remove(&mut self, email: &str) -> Option<Student> {
        let index = self.students.iter().position(|s| s.email == email)?;
        let removed = self.students.remove(index);
        tracing::debug!("Removed student {} <{}>", removed.name, removed.email);
        Some(removed)
    }

    pub fn find(&self, email: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.email == email)
    }

    pub fn display_names(&self) -> String {
        self.students
            .iter()
            .map(|s| s.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn clear(&mut self) {
        tracing::debug!("Clearing {} students", self.students.len());
        self.students.clear();
    }

    pub fn filter_by_specialization(&self, specialization: &str) -> Vec<&Student> {
        self.sorted_by_name(|s| s.specialization == specialization)
    }

    pub fn filter_by_min_year(&self, min_year: i64) -> Vec<&Student> {
        self.sorted_by_name(|s| s.year >= min_year)
    }

    fn sorted_by_name(&self, predicate: impl Fn(&Student) -> bool) -> Vec<&Student> {
        let mut matches: Vec<&Student> = self.students.iter().filter(|s| predicate(s)).collect();
        matches.sort_by(|a, b| locale_compare(&a.name, &b.name));
        matches
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Student> {
        self.students.iter()
    }

    /// Pretty JSON array, two-space indented, in insertion order.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.students)?)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Self::from_slice(content.as_bytes())
    }

    /// Parses raw file bytes; invalid UTF-8 is a parse error.
    pub fn from_slice(data: &[u8]) -> Result<Self> {
        let students: Vec<Student> = serde_json::from_slice(data)?;
        Ok(Self { students })
    }

    pub async fn save<S: Storage + ?Sized>(&self, storage: &S, path: &str) -> Result<()> {
        let json = self.to_json()?;
        storage.write_file(path, json.as_bytes()).await?;
        tracing::info!("Saved {} students to {}", self.students.len(), path);
        Ok(())
    }

    /// Replaces the roster with the contents of `path`. The current students
    /// are kept if reading or parsing fails.
    pub async fn load<S: Storage + ?Sized>(&mut self, storage: &S, path: &str) -> Result<()> {
        let data = storage.read_file(path).await?;
        let loaded = Self::from_slice(&data)?;
        tracing::info!("Loaded {} students from {}", loaded.len(), path);
        *self = loaded;
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Student;
    type IntoIter = std::slice::Iter<'a, Student>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Student> for Roster {
    fn from_iter<I: IntoIterator<Item = Student>>(iter: I) -> Self {
        Self {
            students: iter.into_iter().collect(),
        }
    }
}
