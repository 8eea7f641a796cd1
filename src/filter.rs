use crate::content::{Project, Skill};

pub const ALL_CATEGORY: &str = "All";

fn category_matches(filter: &str, category: &str) -> bool {
    filter == ALL_CATEGORY || filter == category
}

/// Projects in `category` whose title contains `search`, ignoring case.
pub fn filter_projects<'a>(projects: &'a [Project], category: &str, search: &str) -> Vec<&'a Project> {
    let search = search.to_lowercase();
    projects
        .iter()
        .filter(|p| category_matches(category, p.category))
        .filter(|p| p.title.to_lowercase().contains(&search))
        .collect()
}

pub fn filter_skills<'a>(skills: &'a [Skill], category: &str) -> Vec<&'a Skill> {
    skills
        .iter()
        .filter(|s| category_matches(category, s.category))
        .collect()
}

/// Clicking the expanded card collapses it, clicking any other card expands that one instead.
pub fn toggle_expanded(current: Option<u32>, id: u32) -> Option<u32> {
    if current == Some(id) {
        None
    } else {
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{PROJECTS, SKILLS};

    fn titles(projects: &[&Project]) -> Vec<&'static str> {
        projects.iter().map(|p| p.title).collect()
    }

    #[test]
    fn test_filter_projects_by_category() {
        let mobile = filter_projects(&PROJECTS, "Mobile", "");
        assert!(!mobile.is_empty());
        assert!(mobile.iter().all(|p| p.category == "Mobile"));
        assert_eq!(
            mobile.len(),
            PROJECTS.iter().filter(|p| p.category == "Mobile").count()
        );

        assert_eq!(filter_projects(&PROJECTS, ALL_CATEGORY, "").len(), PROJECTS.len());
        assert!(filter_projects(&PROJECTS, "Unknown", "").is_empty());
    }

    #[test]
    fn test_filter_projects_by_search() {
        let found = filter_projects(&PROJECTS, ALL_CATEGORY, "port");
        assert_eq!(titles(&found), vec!["Portfolio Website"]);

        // Case-insensitive on both sides
        let found = filter_projects(&PROJECTS, ALL_CATEGORY, "PORT");
        assert_eq!(titles(&found), vec!["Portfolio Website"]);

        let found = filter_projects(&PROJECTS, ALL_CATEGORY, "a");
        assert!(found.iter().all(|p| p.title.to_lowercase().contains('a')));

        // Both predicates must hold
        assert!(filter_projects(&PROJECTS, "Mobile", "port").is_empty());
    }

    #[test]
    fn test_filter_skills() {
        let frontend = filter_skills(&SKILLS, "Frontend");
        let names: Vec<&str> = frontend.iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["React", "JavaScript", "TypeScript"]);
        assert_eq!(filter_skills(&SKILLS, ALL_CATEGORY).len(), SKILLS.len());
    }

    #[test]
    fn test_toggle_expanded() {
        assert_eq!(toggle_expanded(None, 3), Some(3));
        assert_eq!(toggle_expanded(Some(3), 3), None);
        assert_eq!(toggle_expanded(Some(3), 4), Some(4));
    }
}
