//! Department prototypes: which job ids belong to which department.

use std::path::Path;

use crate::error::Result;
use crate::models::DepartmentPrototype;

/// Read-only view of the department prototypes known to the host.
///
/// Enumeration order matters only as a tie-break: departments that end up
/// unranked keep the order in which grouping first discovered them.
pub trait PrototypeRegistry {
    fn departments(&self) -> &[DepartmentPrototype];

    fn department(&self, id: &str) -> Option<&DepartmentPrototype> {
        self.departments().iter().find(|d| d.id == id)
    }
}

/// A fixed list of departments, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct DepartmentCatalog {
    departments: Vec<DepartmentPrototype>,
}

impl DepartmentCatalog {
    pub fn new(departments: Vec<DepartmentPrototype>) -> Self {
        Self { departments }
    }

    /// Load departments from a JSON array of `{ "id", "roles" }` objects.
    pub fn load(path: &Path) -> Result<Self> {
        let departments: Vec<DepartmentPrototype> = crate::error::read_json(path)?;
        tracing::debug!(
            "Loaded {} departments from {}",
            departments.len(),
            path.display()
        );
        Ok(Self::new(departments))
    }

    /// The stock station departments, used when no prototype file is configured.
    pub fn builtin() -> Self {
        Self::new(vec![
            DepartmentPrototype::new(
                "Command",
                [
                    "Captain",
                    "HeadOfPersonnel",
                    "HeadOfSecurity",
                    "ChiefEngineer",
                    "ChiefMedicalOfficer",
                    "ResearchDirector",
                    "Quartermaster",
                ],
            ),
            DepartmentPrototype::new(
                "Security",
                ["HeadOfSecurity", "Warden", "SecurityOfficer", "Detective", "SecurityCadet"],
            ),
            DepartmentPrototype::new(
                "Science",
                ["ResearchDirector", "Scientist", "ResearchAssistant"],
            ),
            DepartmentPrototype::new(
                "Medical",
                [
                    "ChiefMedicalOfficer",
                    "MedicalDoctor",
                    "Chemist",
                    "Paramedic",
                    "MedicalIntern",
                ],
            ),
            DepartmentPrototype::new(
                "Engineering",
                [
                    "ChiefEngineer",
                    "StationEngineer",
                    "AtmosphericTechnician",
                    "TechnicalAssistant",
                ],
            ),
            DepartmentPrototype::new(
                "Cargo",
                ["Quartermaster", "CargoTechnician", "SalvageSpecialist"],
            ),
            DepartmentPrototype::new(
                "Civilian",
                [
                    "HeadOfPersonnel",
                    "Bartender",
                    "Botanist",
                    "Chef",
                    "Janitor",
                    "Clown",
                    "Mime",
                    "Chaplain",
                    "Librarian",
                    "Lawyer",
                    "Musician",
                    "Passenger",
                    "ServiceWorker",
                ],
            ),
            DepartmentPrototype::new("Silicon", ["Borg", "StationAi"]),
        ])
    }

    pub fn len(&self) -> usize {
        self.departments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.departments.is_empty()
    }
}

impl PrototypeRegistry for DepartmentCatalog {
    fn departments(&self) -> &[DepartmentPrototype] {
        &self.departments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_json() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r##"[{{"id": "Command", "roles": ["Captain"]}}, {{"id": "Civilian", "roles": ["Clown", "Mime"], "color": "#9FED58"}}]"##
        )
        .expect("write");

        let catalog = DepartmentCatalog::load(file.path()).expect("load");
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.departments()[0].id, "Command");
        assert!(catalog.department("Civilian").unwrap().contains_role("Mime"));
        assert_eq!(
            catalog.department("Civilian").unwrap().color.as_deref(),
            Some("#9FED58")
        );
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "not json").expect("write");

        let err = DepartmentCatalog::load(file.path()).unwrap_err();
        assert!(matches!(err, crate::error::ManifestError::Json { .. }));
    }

    #[test]
    fn test_builtin_puts_heads_in_command() {
        let catalog = DepartmentCatalog::builtin();
        let command = catalog.department("Command").unwrap();
        assert!(command.contains_role("Captain"));
        assert!(command.contains_role("ChiefEngineer"));
        assert!(catalog.department("Engineering").unwrap().contains_role("ChiefEngineer"));
    }
}
