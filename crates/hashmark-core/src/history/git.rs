//! Git-backed commit times

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use git2::{Commit, Diff, Repository, Sort};
use tracing::debug;

use super::CommitTimeSource;

/// Working-tree root of the repository containing `path`, if any
#[must_use]
pub fn discover_repository_root(path: &Path) -> Option<PathBuf> {
    let repo = Repository::discover(path).ok()?;
    let workdir = repo.workdir()?;
    Some(workdir.canonicalize().unwrap_or_else(|_| workdir.to_path_buf()))
}

/// Last-commit times for every path in a repository's history
#[derive(Debug, Clone)]
pub struct GitHistory {
    root: PathBuf,
    last_commits: HashMap<PathBuf, DateTime<Utc>>,
}

impl GitHistory {
    /// Discover the repository containing `path` and index its history.
    ///
    /// Returns `None` when `path` is not inside a non-bare repository or the
    /// history cannot be read.
    #[must_use]
    pub fn discover(path: &Path) -> Option<Self> {
        let repo = match Repository::discover(path) {
            Ok(repo) => repo,
            Err(e) => {
                debug!("No git repository at {}: {}", path.display(), e.message());
                return None;
            }
        };
        let workdir = repo.workdir()?;
        let root = workdir.canonicalize().unwrap_or_else(|_| workdir.to_path_buf());

        match index_history(&repo) {
            Ok(last_commits) => {
                debug!(
                    "Indexed git history of {} ({} paths)",
                    root.display(),
                    last_commits.len()
                );
                Some(Self { root, last_commits })
            }
            Err(e) => {
                debug!("Failed to read git history of {}: {}", root.display(), e);
                None
            }
        }
    }

    /// Repository working-tree root
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Number of paths with at least one commit
    #[must_use]
    pub fn len(&self) -> usize {
        self.last_commits.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.last_commits.is_empty()
    }

    fn repo_relative(&self, path: &Path) -> Option<PathBuf> {
        let absolute = path.canonicalize().ok()?;
        absolute.strip_prefix(&self.root).ok().map(Path::to_path_buf)
    }
}

impl CommitTimeSource for GitHistory {
    fn last_commit_time(&self, path: &Path) -> Option<DateTime<Utc>> {
        let relative = self.repo_relative(path)?;
        self.last_commits.get(&relative).copied()
    }
}

/// Walk history newest first, keeping the first commit seen for each path
fn index_history(repo: &Repository) -> Result<HashMap<PathBuf, DateTime<Utc>>, git2::Error> {
    let mut last_commits = HashMap::new();

    let mut revwalk = repo.revwalk()?;
    revwalk.set_sorting(Sort::TIME)?;
    if revwalk.push_head().is_err() {
        // Unborn HEAD: no commits yet
        return Ok(last_commits);
    }

    for oid in revwalk {
        let commit = repo.find_commit(oid?)?;
        let Some(when) = author_time(&commit) else {
            continue;
        };
        for path in changed_paths(repo, &commit)? {
            last_commits.entry(path).or_insert(when);
        }
    }

    Ok(last_commits)
}

/// Paths that differ from every parent (all paths for a root commit)
fn changed_paths(repo: &Repository, commit: &Commit<'_>) -> Result<HashSet<PathBuf>, git2::Error> {
    let tree = commit.tree()?;

    if commit.parent_count() == 0 {
        let diff = repo.diff_tree_to_tree(None, Some(&tree), None)?;
        return Ok(diff_paths(&diff));
    }

    let mut changed: Option<HashSet<PathBuf>> = None;
    for parent in commit.parents() {
        let parent_tree = parent.tree()?;
        let diff = repo.diff_tree_to_tree(Some(&parent_tree), Some(&tree), None)?;
        let paths = diff_paths(&diff);
        changed = Some(match changed {
            None => paths,
            Some(previous) => previous.intersection(&paths).cloned().collect(),
        });
    }
    Ok(changed.unwrap_or_default())
}

fn diff_paths(diff: &Diff<'_>) -> HashSet<PathBuf> {
    diff.deltas()
        .filter_map(|delta| delta.new_file().path().or_else(|| delta.old_file().path()))
        .map(Path::to_path_buf)
        .collect()
}

fn author_time(commit: &Commit<'_>) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(commit.author().when().seconds(), 0)
}
