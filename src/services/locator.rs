use crate::domain::models::{CandidateFile, Scope};
use crate::services::config::{resolve, DiscoveryConfig};
use std::path::{Path, PathBuf};

/// Finds instruction files: the global file first, then one per directory
/// from `cwd` upward, stopping after `home` or the filesystem root.
///
/// A path already collected is never added twice, so the global file is not
/// repeated when the walk reaches the home directory.
pub fn locate(home: Option<&Path>, cwd: &Path, cfg: &DiscoveryConfig) -> Vec<CandidateFile> {
    let home = home.map(canonical_or_same);
    let mut found: Vec<CandidateFile> = Vec::new();

    if let Some(global) = resolve(home.as_deref(), &cfg.global_file) {
        tracing::debug!(path = %global.display(), "probing global file");
        if global.is_file() {
            found.push(CandidateFile {
                scope: Scope::Global,
                path: global,
            });
        }
    }

    for dir in cwd.ancestors() {
        let candidate = dir.join(&cfg.instruction_file);
        tracing::debug!(path = %candidate.display(), "probing project file");
        if candidate.is_file() && !found.iter().any(|f| f.path == candidate) {
            found.push(CandidateFile {
                scope: Scope::Project,
                path: candidate,
            });
        }
        if home.as_deref() == Some(dir) {
            break;
        }
    }

    found
}

fn canonical_or_same(p: &Path) -> PathBuf {
    std::fs::canonicalize(p).unwrap_or_else(|_| p.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::locate;
    use crate::domain::models::Scope;
    use crate::services::config::DiscoveryConfig;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    struct Tree {
        _tmp: TempDir,
        root: PathBuf,
        home: PathBuf,
        project: PathBuf,
    }

    fn tree() -> Tree {
        let tmp = TempDir::new().expect("temp dir");
        let root = fs::canonicalize(tmp.path()).expect("canonical temp");
        let home = root.join("home");
        let project = home.join("work/app");
        fs::create_dir_all(&project).expect("create project");
        Tree {
            _tmp: tmp,
            root,
            home,
            project,
        }
    }

    fn touch(dir: &Path) -> PathBuf {
        let p = dir.join("CLAUDE.md");
        fs::write(&p, "- NEVER x\n").expect("write CLAUDE.md");
        p
    }

    #[test]
    fn global_comes_first_then_cwd_upward() {
        let t = tree();
        let global = touch(&t.home);
        let app = touch(&t.project);
        let work = touch(t.project.parent().expect("parent"));

        let found = locate(Some(&t.home), &t.project, &DiscoveryConfig::default());
        let paths: Vec<_> = found.iter().map(|f| f.path.clone()).collect();
        assert_eq!(paths, vec![global, app, work]);
        assert_eq!(found[0].scope, Scope::Global);
        assert!(found[1..].iter().all(|f| f.scope == Scope::Project));
    }

    #[test]
    fn walk_stops_at_home() {
        let t = tree();
        touch(&t.root);
        let found = locate(Some(&t.home), &t.project, &DiscoveryConfig::default());
        assert!(found.is_empty());
    }

    #[test]
    fn home_file_is_not_listed_twice() {
        let t = tree();
        touch(&t.home);
        let found = locate(Some(&t.home), &t.home, &DiscoveryConfig::default());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].scope, Scope::Global);
    }

    #[test]
    fn cwd_outside_home_walks_to_root() {
        let t = tree();
        let outside = t.root.join("srv/site");
        fs::create_dir_all(&outside).expect("create outside");
        let at_root = touch(&t.root);
        let found = locate(Some(&t.home), &outside, &DiscoveryConfig::default());
        assert!(found.iter().any(|f| f.path == at_root));
    }

    #[test]
    fn missing_files_yield_nothing() {
        let t = tree();
        let found = locate(Some(&t.home), &t.project, &DiscoveryConfig::default());
        assert!(found.is_empty());
    }

    #[test]
    fn directories_named_like_the_file_are_skipped() {
        let t = tree();
        fs::create_dir_all(t.project.join("CLAUDE.md")).expect("mkdir");
        let found = locate(Some(&t.home), &t.project, &DiscoveryConfig::default());
        assert!(found.is_empty());
    }

    #[test]
    fn configured_names_are_honored() {
        let t = tree();
        fs::write(t.project.join("AGENTS.md"), "ALWAYS y\n").expect("write");
        fs::create_dir_all(t.home.join(".claude")).expect("mkdir");
        fs::write(t.home.join(".claude/CLAUDE.md"), "NEVER z\n").expect("write");
        let cfg = DiscoveryConfig {
            instruction_file: "AGENTS.md".to_string(),
            global_file: PathBuf::from(".claude/CLAUDE.md"),
        };
        let found = locate(Some(&t.home), &t.project, &cfg);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].path, t.home.join(".claude/CLAUDE.md"));
        assert_eq!(found[1].path, t.project.join("AGENTS.md"));
    }
}
