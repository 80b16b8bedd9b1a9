use crate::entities::Project;

/// Split projects into `(featured, other)`.
///
/// Every project lands in exactly one side, chosen by its `featured` flag,
/// and each side keeps the input order.
pub fn partition_projects(projects: &[Project]) -> (Vec<&Project>, Vec<&Project>) {
    projects.iter().partition(|project| project.featured)
}
