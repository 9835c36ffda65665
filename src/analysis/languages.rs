use crate::models::{LanguageStat, Repository};

pub const TOP_LANGUAGE_LIMIT: usize = 5;

/// Language counts in first-encountered order.
pub fn language_counts(repos: &[Repository]) -> Vec<(String, u32)> {
    repos
        .iter()
        .filter_map(|r| r.known_language())
        .fold(Vec::new(), |mut counts: Vec<(String, u32)>, lang| {
            match counts.iter_mut().find(|(name, _)| name == lang) {
                Some((_, count)) => *count += 1,
                None => counts.push((lang.to_string(), 1)),
            }
            counts
        })
}

/// Top languages by repository count.
///
/// Percentages are relative to repositories with a detected language, not to
/// every repository. Ties keep first-encountered order.
pub fn top_languages(repos: &[Repository]) -> Vec<LanguageStat> {
    let mut counts = language_counts(repos);
    let tagged: u32 = counts.iter().map(|(_, c)| c).sum();

    // sort_by is stable
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .take(TOP_LANGUAGE_LIMIT)
        .map(|(name, count)| LanguageStat {
            name,
            count,
            percentage: if tagged > 0 {
                count as f64 / tagged as f64 * 100.0
            } else {
                0.0
            },
        })
        .collect()
}

/// Stars across every repository, tagged or not.
pub fn total_stars(repos: &[Repository]) -> u64 {
    repos.iter().map(Repository::stars).sum()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn repo(name: &str, language: Option<&str>, stars: Option<u64>) -> Repository {
        Repository {
            name: name.to_string(),
            description: None,
            stargazers_count: stars,
            language: language.map(str::to_string),
            html_url: format!("https://github.com/octocat/{}", name),
            fork: false,
            created_at: None,
        }
    }

    #[test]
    fn test_untagged_repos_excluded_from_percentage() {
        let repos = vec![
            repo("a", Some("Rust"), Some(3)),
            repo("b", None, Some(10)),
            repo("c", Some("Rust"), None),
            repo("d", Some("Go"), Some(1)),
            repo("e", Some(""), Some(0)),
        ];
        let top = top_languages(&repos);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].name, "Rust");
        assert_eq!(top[0].count, 2);
        assert!((top[0].percentage - 200.0 / 3.0).abs() < 1e-9);
        assert_eq!(top[1].name, "Go");
        assert!((top[1].percentage - 100.0 / 3.0).abs() < 1e-9);
        assert_eq!(total_stars(&repos), 14);
    }

    #[test]
    fn test_ties_keep_first_encountered_order_and_cap_at_five() {
        let langs = ["Zig", "C", "Rust", "Go", "Python", "Ruby", "Rust"];
        let repos: Vec<_> = langs
            .iter()
            .enumerate()
            .map(|(i, l)| repo(&i.to_string(), Some(l), None))
            .collect();
        let top = top_languages(&repos);
        let names: Vec<_> = top.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Rust", "Zig", "C", "Go", "Python"]);

        let tagged: u32 = language_counts(&repos).iter().map(|(_, c)| c).sum();
        assert!(top.iter().map(|l| l.count).sum::<u32>() <= tagged);
        assert!(top.windows(2).all(|w| w[0].count >= w[1].count));
    }

    #[test]
    fn test_no_languages() {
        let repos = vec![repo("a", None, None)];
        assert!(top_languages(&repos).is_empty());
        assert!(top_languages(&[]).is_empty());
        assert_eq!(total_stars(&repos), 0);
    }
}
