//! Project instantiation and in-place editing.
//!
//! [`ProjectFactory`] turns the base template into a fresh project and
//! installs the board source; [`ProjectEditor`] holds the two primitives
//! everything else is built from: literal replacement and copy-into-main.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{BoardId, Project, ProjectName, layout, paths},
    error::IdfNewResult,
};

/// How many occurrences [`ProjectEditor::replace_text`] may substitute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Replacements {
    #[default]
    All,
    AtMost(usize),
}

/// Scoped edits on a generated project.
pub struct ProjectEditor<'a> {
    project: &'a Project,
    fs: &'a dyn Filesystem,
}

impl<'a> ProjectEditor<'a> {
    pub fn new(project: &'a Project, fs: &'a dyn Filesystem) -> Self {
        Self { project, fs }
    }

    /// Replace `old` with `new` in `target`.
    ///
    /// Relative targets resolve against the project root. `old` must occur
    /// at least once.
    #[instrument(skip(self, new), fields(target = %target.as_ref().display()))]
    pub fn replace_text(
        &self,
        target: impl AsRef<Path>,
        old: &str,
        new: &str,
        limit: Replacements,
    ) -> IdfNewResult<()> {
        let path = self.project.resolve(target.as_ref());
        let text = self.fs.read_to_string(&path)?;

        if !text.contains(old) {
            return Err(ApplicationError::LiteralNotFound {
                literal: old.to_string(),
                path,
            }
            .into());
        }

        let patched = match limit {
            Replacements::All => text.replace(old, new),
            Replacements::AtMost(n) => text.replacen(old, new, n),
        };
        self.fs.write_file(&path, &patched)?;
        debug!("Patched {}", path.display());
        Ok(())
    }

    /// Copy `source` into `main/`, named `dest_name` or the source's own
    /// file name.
    pub fn copy_into_main(&self, source: &Path, dest_name: Option<&str>) -> IdfNewResult<PathBuf> {
        let file_name = match dest_name {
            Some(name) => name.to_string(),
            None => source
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .ok_or_else(|| ApplicationError::FilesystemError {
                    path: source.to_path_buf(),
                    reason: "source has no file name".into(),
                })?,
        };

        let destination = self.project.main_dir().join(file_name);
        self.fs.copy_file(source, &destination)?;
        debug!(
            "Copied {} -> {}",
            source.display(),
            destination.display()
        );
        Ok(destination)
    }
}

/// Creates projects from the base template.
pub struct ProjectFactory {
    fs: Arc<dyn Filesystem>,
}

impl ProjectFactory {
    pub fn new(fs: Arc<dyn Filesystem>) -> Self {
        Self { fs }
    }

    pub fn editor<'a>(&'a self, project: &'a Project) -> ProjectEditor<'a> {
        ProjectEditor::new(project, self.fs.as_ref())
    }

    /// Copy `template_dir` to the destination and name the project.
    ///
    /// The destination defaults to `cwd/<name>`; relative destinations are
    /// taken relative to `cwd`.
    #[instrument(
        skip_all,
        fields(
            project = %name,
            template = %template_dir.display()
        )
    )]
    pub fn create_project(
        &self,
        name: &ProjectName,
        template_dir: &Path,
        destination: Option<&Path>,
        cwd: &Path,
    ) -> IdfNewResult<Project> {
        if !self.fs.is_dir(template_dir) {
            return Err(ApplicationError::TemplateNotFound {
                path: template_dir.to_path_buf(),
            }
            .into());
        }

        let requested = destination.map_or_else(|| PathBuf::from(name.as_str()), Path::to_path_buf);
        let root = paths::absolutize(&requested, cwd);
        if self.fs.exists(&root) {
            return Err(ApplicationError::DestinationExists { path: root }.into());
        }

        self.fs.copy_tree(template_dir, &root)?;
        info!(root = %root.display(), "Template copied");

        let project = Project::new(name.clone(), root);
        self.editor(&project).replace_text(
            layout::CMAKE_LISTS,
            layout::PROJECT_PLACEHOLDER,
            &layout::project_declaration(name.as_str()),
            Replacements::AtMost(1),
        )?;

        Ok(project)
    }

    /// Install the board source as `main/board_<stem>.c` and point the
    /// component build at it. Returns the installed source path.
    #[instrument(skip_all, fields(board = %board_id))]
    pub fn install_board(
        &self,
        project: &Project,
        board_dir: &Path,
        board_id: &BoardId,
    ) -> IdfNewResult<PathBuf> {
        let board_impl = board_dir.join(layout::BOARD_IMPL);
        if !self.fs.is_file(&board_impl) {
            return Err(ApplicationError::BoardMissingImpl {
                board_id: board_id.to_string(),
            }
            .into());
        }

        let editor = self.editor(project);
        let installed = editor.copy_into_main(&board_impl, Some(&board_id.source_file_name()))?;
        let installed_name = installed
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        editor.replace_text(
            project.main_dir().join(layout::CMAKE_LISTS),
            layout::BOARD_IMPL,
            &installed_name,
            Replacements::AtMost(1),
        )?;

        let manifest = board_dir.join(layout::COMPONENT_MANIFEST);
        if self.fs.is_file(&manifest) {
            self.fs
                .copy_file(&manifest, &project.main_dir().join(layout::COMPONENT_MANIFEST))?;
            debug!("Installed {}", layout::COMPONENT_MANIFEST);
        }

        info!(source = %installed.display(), "Board installed");
        Ok(installed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockFilesystem;
    use crate::error::IdfNewError;

    fn project() -> Project {
        Project::new(ProjectName::parse("demo").unwrap(), "/work/demo")
    }

    #[test]
    fn replace_text_honours_limit() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_to_string()
            .withf(|path| path == Path::new("/work/demo/notes.txt"))
            .returning(|_| Ok("a a a".into()));
        fs.expect_write_file()
            .withf(|path, content| path == Path::new("/work/demo/notes.txt") && content == "b b a")
            .times(1)
            .returning(|_, _| Ok(()));

        let project = project();
        ProjectEditor::new(&project, &fs)
            .replace_text("notes.txt", "a", "b", Replacements::AtMost(2))
            .unwrap();
    }

    #[test]
    fn replace_text_requires_literal() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_to_string()
            .returning(|_| Ok("cmake_minimum_required(VERSION 3.16)".into()));
        fs.expect_write_file().times(0);

        let project = project();
        let err = ProjectEditor::new(&project, &fs)
            .replace_text("CMakeLists.txt", "project(base_project)", "project(demo)", Replacements::All)
            .unwrap_err();

        assert!(matches!(
            err,
            IdfNewError::Application(ApplicationError::LiteralNotFound { ref path, .. })
                if path == Path::new("/work/demo/CMakeLists.txt")
        ));
    }

    #[test]
    fn copy_into_main_defaults_to_source_name() {
        let mut fs = MockFilesystem::new();
        fs.expect_copy_file()
            .withf(|from, to| {
                from == Path::new("/features/gps/gps.c") && to == Path::new("/work/demo/main/gps.c")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let project = project();
        let dest = ProjectEditor::new(&project, &fs)
            .copy_into_main(Path::new("/features/gps/gps.c"), None)
            .unwrap();
        assert_eq!(dest, PathBuf::from("/work/demo/main/gps.c"));
    }

    #[test]
    fn create_project_requires_template() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().returning(|_| false);
        fs.expect_copy_tree().times(0);

        let factory = ProjectFactory::new(Arc::new(fs));
        let err = factory
            .create_project(
                &ProjectName::parse("demo").unwrap(),
                Path::new("/res/idf-templates/base_project"),
                None,
                Path::new("/work"),
            )
            .unwrap_err();

        assert!(err.to_string().starts_with("Template directory not found"));
    }

    #[test]
    fn create_project_refuses_existing_destination() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().returning(|_| true);
        fs.expect_exists()
            .withf(|path| path == Path::new("/work/out/demo"))
            .returning(|_| true);
        fs.expect_copy_tree().times(0);

        let factory = ProjectFactory::new(Arc::new(fs));
        let err = factory
            .create_project(
                &ProjectName::parse("demo").unwrap(),
                Path::new("/res/template"),
                Some(Path::new("out/./demo")),
                Path::new("/work"),
            )
            .unwrap_err();

        assert_eq!(err.to_string(), "Destination already exists: /work/out/demo");
    }

    #[test]
    fn install_board_requires_impl() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_file().returning(|_| false);
        fs.expect_copy_file().times(0);

        let factory = ProjectFactory::new(Arc::new(fs));
        let err = factory
            .install_board(
                &project(),
                Path::new("/res/boards/devkit"),
                &BoardId::parse("devkit").unwrap(),
            )
            .unwrap_err();

        assert_eq!(err.to_string(), "Board 'devkit' is missing board_impl.c");
    }

    #[test]
    fn install_board_skips_absent_manifest() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_file()
            .returning(|p| p.ends_with(layout::BOARD_IMPL));
        fs.expect_copy_file()
            .withf(|_, to| to == Path::new("/work/demo/main/board_vendor_kit.c"))
            .times(1)
            .returning(|_, _| Ok(()));
        fs.expect_read_to_string()
            .returning(|_| Ok("idf_component_register(SRCS \"main.c\" \"board_impl.c\")".into()));
        fs.expect_write_file()
            .withf(|_, content| content.contains("\"board_vendor_kit.c\""))
            .times(1)
            .returning(|_, _| Ok(()));

        let factory = ProjectFactory::new(Arc::new(fs));
        let installed = factory
            .install_board(
                &project(),
                Path::new("/res/boards/vendor/kit"),
                &BoardId::parse("vendor/kit").unwrap(),
            )
            .unwrap();

        assert_eq!(installed, PathBuf::from("/work/demo/main/board_vendor_kit.c"));
    }
}
