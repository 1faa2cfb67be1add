use std::cmp::Ordering;
use std::collections::HashMap;

use crate::config::DepartmentOrdering;
use crate::models::CrewManifestEntry;
use crate::prototypes::PrototypeRegistry;

/// Entries that belong to one department, in roster order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentGroup<'a> {
    pub department: &'a str,
    pub entries: Vec<&'a CrewManifestEntry>,
}

/// Bucket entries by department.
///
/// An entry lands in every department whose roles include its job prototype,
/// so overlapping departments show it more than once. Entries whose job is in
/// no department are dropped. Groups come out in the order they were first
/// filled.
pub fn group_by_department<'a, 'e: 'a, I>(
    entries: I,
    registry: &'a dyn PrototypeRegistry,
) -> Vec<DepartmentGroup<'a>>
where
    I: IntoIterator<Item = &'e CrewManifestEntry>,
{
    // job prototype id -> departments containing it, in registry order
    let mut by_job: HashMap<&str, Vec<&str>> = HashMap::new();
    for department in registry.departments() {
        for role in &department.roles {
            by_job.entry(role.as_str()).or_default().push(department.id.as_str());
        }
    }

    let mut groups: Vec<DepartmentGroup<'a>> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();

    for entry in entries {
        let Some(departments) = by_job.get(entry.job_prototype.as_str()) else {
            continue;
        };
        for &department in departments {
            let slot = *slots.entry(department).or_insert_with(|| {
                groups.push(DepartmentGroup {
                    department,
                    entries: Vec::new(),
                });
                groups.len() - 1
            });
            groups[slot].entries.push(entry);
        }
    }

    groups
}

/// Compare two departments by their position in `ordering`.
///
/// Unranked departments sort before ranked ones and tie with each other.
pub fn compare_departments(ordering: &DepartmentOrdering, a: &str, b: &str) -> Ordering {
    match (ordering.rank(a), ordering.rank(b)) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(ai), Some(bi)) => ai.cmp(&bi),
    }
}

/// Order groups for display. The sort is stable, so unranked departments keep
/// their grouping order.
pub fn sort_departments(groups: &mut [DepartmentGroup<'_>], ordering: &DepartmentOrdering) {
    groups.sort_by(|a, b| compare_departments(ordering, a.department, b.department));
}

/// Group then sort.
pub fn group_and_sort<'a, 'e: 'a, I>(
    entries: I,
    registry: &'a dyn PrototypeRegistry,
    ordering: &DepartmentOrdering,
) -> Vec<DepartmentGroup<'a>>
where
    I: IntoIterator<Item = &'e CrewManifestEntry>,
{
    let mut groups = group_by_department(entries, registry);
    sort_departments(&mut groups, ordering);
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DepartmentPrototype;
    use crate::prototypes::DepartmentCatalog;

    fn entry(name: &str, job: &str) -> CrewManifestEntry {
        CrewManifestEntry::new(name, job, job, job)
    }

    fn names<'a>(group: &DepartmentGroup<'a>) -> Vec<&'a str> {
        group.entries.iter().map(|e| e.name.as_str()).collect()
    }

    fn departments<'a>(groups: &[DepartmentGroup<'a>]) -> Vec<&'a str> {
        groups.iter().map(|g| g.department).collect()
    }

    #[test]
    fn test_groups_by_role_membership() {
        let catalog = DepartmentCatalog::new(vec![
            DepartmentPrototype::new("Command", ["Captain"]),
            DepartmentPrototype::new("Civilian", ["Clown", "Mime"]),
        ]);
        let entries = vec![entry("Jane", "Captain"), entry("Bob", "Clown"), entry("Eve", "Mime")];

        let groups = group_by_department(&entries, &catalog);
        assert_eq!(departments(&groups), ["Command", "Civilian"]);
        assert_eq!(names(&groups[0]), ["Jane"]);
        assert_eq!(names(&groups[1]), ["Bob", "Eve"]);
    }

    #[test]
    fn test_entry_without_department_is_dropped() {
        let catalog =
            DepartmentCatalog::new(vec![DepartmentPrototype::new("Command", ["Captain"])]);
        let entries = vec![entry("Zed", "Passenger")];
        assert!(group_by_department(&entries, &catalog).is_empty());
    }

    #[test]
    fn test_overlapping_departments_duplicate_entry() {
        let catalog = DepartmentCatalog::new(vec![
            DepartmentPrototype::new("Command", ["Captain", "ChiefEngineer"]),
            DepartmentPrototype::new("Engineering", ["ChiefEngineer"]),
        ]);
        let entries = vec![entry("Cee", "ChiefEngineer")];

        let groups = group_by_department(&entries, &catalog);
        assert_eq!(departments(&groups), ["Command", "Engineering"]);
        assert_eq!(names(&groups[0]), ["Cee"]);
        assert_eq!(names(&groups[1]), ["Cee"]);
    }

    #[test]
    fn test_groups_appear_in_first_seen_order() {
        let catalog = DepartmentCatalog::new(vec![
            DepartmentPrototype::new("Command", ["Captain"]),
            DepartmentPrototype::new("Civilian", ["Clown"]),
        ]);
        let entries = vec![entry("Bob", "Clown"), entry("Jane", "Captain")];
        assert_eq!(departments(&group_by_department(&entries, &catalog)), ["Civilian", "Command"]);
    }

    #[test]
    fn test_unranked_sort_first_then_by_rank() {
        let catalog = DepartmentCatalog::new(vec![
            DepartmentPrototype::new("A", ["a"]),
            DepartmentPrototype::new("B", ["b"]),
            DepartmentPrototype::new("C", ["c"]),
        ]);
        let entries = vec![entry("1", "a"), entry("2", "b"), entry("3", "c")];

        let ab = group_and_sort(&entries, &catalog, &DepartmentOrdering::new(["A", "B"]));
        assert_eq!(departments(&ab), ["C", "A", "B"]);

        let ba = group_and_sort(&entries, &catalog, &DepartmentOrdering::new(["B", "A"]));
        assert_eq!(departments(&ba), ["C", "B", "A"]);
    }

    #[test]
    fn test_unranked_keep_grouping_order() {
        let catalog = DepartmentCatalog::new(vec![
            DepartmentPrototype::new("X", ["x"]),
            DepartmentPrototype::new("Y", ["y"]),
            DepartmentPrototype::new("Ranked", ["r"]),
        ]);
        let entries = vec![entry("1", "r"), entry("2", "y"), entry("3", "x")];

        let groups = group_and_sort(&entries, &catalog, &DepartmentOrdering::new(["Ranked"]));
        assert_eq!(departments(&groups), ["Y", "X", "Ranked"]);
    }

    #[test]
    fn test_compare_departments() {
        let ordering = DepartmentOrdering::new(["A", "B"]);
        assert_eq!(compare_departments(&ordering, "X", "Y"), Ordering::Equal);
        assert_eq!(compare_departments(&ordering, "X", "A"), Ordering::Less);
        assert_eq!(compare_departments(&ordering, "A", "X"), Ordering::Greater);
        assert_eq!(compare_departments(&ordering, "B", "A"), Ordering::Greater);
        assert_eq!(compare_departments(&ordering, "A", "A"), Ordering::Equal);
    }
}
