use crate::common::canonical;
use crate::common::file::{FileSpec, write_generated_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use derive_new::new;
use rstest::fixture;
use std::path::{Path, PathBuf};

/// A local repository with one commit, cloneable through a `file://` reference
#[derive(Debug, new)]
pub struct Origin {
    pub dir: TempDir,
    pub path: PathBuf,
    pub file: FileSpec,
}

impl Origin {
    pub fn reference(&self) -> String {
        format!("file://{}", self.path.display())
    }
}

#[fixture]
pub fn dolly_root() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn origin() -> Origin {
    create_origin("origin")
}

pub fn create_origin(name: &str) -> Origin {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = canonical(dir.path()).join(name);
    std::fs::create_dir_all(&path).expect("Failed to create origin dir");

    run_git_command(&path, &["init", "--quiet"]).assert().success();

    let file = write_generated_file(&path);
    run_git_command(&path, &["add", "."]).assert().success();
    git_commit(&path, "Initial commit").assert().success();

    Origin::new(dir, path, file)
}

pub fn run_dolly_command(root: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("git-dolly").expect("Failed to find git-dolly binary");
    cmd.env("GIT_DOLLY_PATH", root);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn run_git_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new("git");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

#[derive(Debug, Clone, new)]
struct RandomAuthor {
    name: String,
    email: String,
}

fn generate_random_author() -> RandomAuthor {
    use fake::Fake;
    use fake::faker::internet::en::FreeEmail;
    use fake::faker::name::en::Name;

    let name = Name().fake::<String>().replace(" ", "_");
    let email = FreeEmail().fake::<String>();
    RandomAuthor::new(name, email)
}

pub fn git_commit(dir: &Path, message: &str) -> Command {
    let author = generate_random_author();
    let mut cmd = run_git_command(dir, &["commit", "--quiet", "-m", message]);
    cmd.envs(vec![
        ("GIT_AUTHOR_NAME", &author.name),
        ("GIT_AUTHOR_EMAIL", &author.email),
        ("GIT_COMMITTER_NAME", &author.name),
        ("GIT_COMMITTER_EMAIL", &author.email),
    ]);
    cmd
}
