//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use git2::{Oid, Repository, Signature};

use committer::{GitCommand, GitError, GitRunner};

/// A test git repository builder for integration tests.
pub struct TestRepo {
    pub dir: tempfile::TempDir,
    pub repo: Repository,
}

impl TestRepo {
    /// Create a new git repository in a temp directory with a local identity
    /// and signing disabled, so `git commit` works regardless of the user's config.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let repo = Repository::init(dir.path()).expect("Failed to init git repo");

        let mut config = repo.config().expect("Failed to open repo config");
        config
            .set_str("user.name", "Test User")
            .expect("Failed to set user.name");
        config
            .set_str("user.email", "test@example.com")
            .expect("Failed to set user.email");
        config
            .set_bool("commit.gpgsign", false)
            .expect("Failed to disable commit signing");

        Self { dir, repo }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file in the work tree without staging it.
    pub fn write_file(&self, name: &str, content: &str) {
        std::fs::write(self.dir.path().join(name), content).expect("Failed to write test file");
    }

    /// Create a commit directly through git2. Returns the commit OID.
    pub fn commit(&self, message: &str) -> Oid {
        let sig = Signature::now("Test User", "test@example.com").expect("Failed to create signature");

        self.write_file("seed.txt", message);
        let mut index = self.repo.index().expect("Failed to get index");
        index
            .add_path(Path::new("seed.txt"))
            .expect("Failed to add file");
        index.write().expect("Failed to write index");
        let tree_id = index.write_tree().expect("Failed to write tree");
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");

        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("Failed to create commit")
    }

    /// Message of the commit HEAD points to, if any.
    pub fn head_message(&self) -> Option<String> {
        let commit = self.repo.head().ok()?.peel_to_commit().ok()?;
        commit.message().map(String::from)
    }

    /// Number of commits reachable from HEAD.
    pub fn commit_count(&self) -> usize {
        let mut walk = self.repo.revwalk().expect("Failed to create revwalk");
        if walk.push_head().is_err() {
            return 0;
        }
        walk.count()
    }
}

/// Runner that records every command and fails the ones listed in `fail_on`.
#[derive(Default)]
pub struct RecordingRunner {
    pub issued: Mutex<Vec<String>>,
    pub fail_on: Vec<GitCommand>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(commands: Vec<GitCommand>) -> Self {
        Self {
            issued: Mutex::new(Vec::new()),
            fail_on: commands,
        }
    }

    pub fn issued(&self) -> Vec<String> {
        self.issued.lock().unwrap().clone()
    }
}

#[async_trait]
impl GitRunner for RecordingRunner {
    async fn run(&self, command: &GitCommand) -> Result<String, GitError> {
        self.issued.lock().unwrap().push(command.to_string());

        if self.fail_on.contains(command) {
            return Err(GitError::NonZeroExit {
                command: command.to_string(),
                code: Some(1),
                stderr: "simulated failure".to_string(),
            });
        }

        Ok("called".to_string())
    }
}

#[async_trait]
impl GitRunner for &RecordingRunner {
    async fn run(&self, command: &GitCommand) -> Result<String, GitError> {
        (**self).run(command).await
    }
}
