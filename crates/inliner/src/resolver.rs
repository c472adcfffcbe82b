//! Module resolution service
//!
//! Instead of asking a live interpreter where a module lives, the transformer
//! consults a [`ModuleIndex`] built up front by walking the search roots. The
//! roots, the target Python version and the third-party knowledge are bundled
//! in an immutable [`ResolutionContext`] value; nothing here mutates process
//! state such as `PYTHONPATH`.

use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use indexmap::IndexSet;
use log::{debug, trace, warn};
use ruff_python_stdlib::identifiers::is_identifier;
use walkdir::{DirEntry, WalkDir};

use crate::{
    config::Config,
    stdlib_detection::is_stdlib_module,
    types::{FxIndexMap, ModuleOrigin},
};

/// The contract the import transformer relies on
///
/// Failure to resolve is reported as `None`: for base modules the caller turns
/// it into [`crate::error::TransformError::ModuleNotFound`], for from-import
/// items it is the signal that the name is an object, not a submodule.
pub trait ModuleResolution {
    /// Look up a dotted module path
    fn resolve(&self, module_name: &str) -> Option<ModuleOrigin>;

    /// Full source text of a module, `None` when it has no source of its own
    fn source(&self, module_name: &str) -> Result<Option<String>>;

    /// Whether the module belongs to the Python runtime itself
    fn is_intrinsic(&self, module_name: &str) -> bool;

    /// Dotted name of the module backed by `path`, if the path is indexed
    fn module_name_for_file(&self, path: &Path) -> Option<String>;
}

/// Sets `PYTHONPATH` for as long as the guard lives, restoring the previous
/// value on drop
#[must_use = "PythonPathGuard must be held in scope to ensure cleanup"]
#[derive(Debug)]
pub struct PythonPathGuard {
    original_value: Option<String>,
}

impl PythonPathGuard {
    pub fn new(new_value: &str) -> Self {
        let original_value = std::env::var("PYTHONPATH").ok();

        // SAFETY: callers serialize environment access while the guard lives,
        // and Drop restores the previous value
        unsafe {
            std::env::set_var("PYTHONPATH", new_value);
        }

        Self { original_value }
    }
}

impl Drop for PythonPathGuard {
    fn drop(&mut self) {
        // SAFETY: This is safe as we're restoring the environment to its original state
        unsafe {
            match self.original_value.take() {
                Some(original) => std::env::set_var("PYTHONPATH", original),
                None => std::env::remove_var("PYTHONPATH"),
            }
        }
    }
}

/// Everything resolution depends on, captured once per transform
#[derive(Debug, Clone)]
pub struct ResolutionContext {
    /// Roots searched in order; the entry file's directory comes first
    pub search_roots: Vec<PathBuf>,
    /// Python 3 minor version used for stdlib classification
    pub python_version: u8,
    /// Top-level names of installed third-party distributions
    pub third_party: IndexSet<String>,
}

impl ResolutionContext {
    /// Build the context for transforming `entry_file`
    pub fn new(config: &Config, entry_file: &Path) -> Self {
        let pythonpath = std::env::var("PYTHONPATH").ok();
        Self::with_pythonpath(config, entry_file, pythonpath.as_deref())
    }

    /// Build the context with an explicit PYTHONPATH value
    pub fn with_pythonpath(config: &Config, entry_file: &Path, pythonpath: Option<&str>) -> Self {
        let mut unique_dirs = IndexSet::new();

        // 1. Entry file's directory is ALWAYS first
        if let Some(entry_dir) = entry_file.parent() {
            let entry_dir = if entry_dir.as_os_str().is_empty() {
                Path::new(".")
            } else {
                entry_dir
            };
            add_directory(&mut unique_dirs, entry_dir);
        }

        // 2. PYTHONPATH directories
        if let Some(pythonpath) = pythonpath {
            for path in std::env::split_paths(pythonpath) {
                if !path.as_os_str().is_empty() {
                    add_directory(&mut unique_dirs, &path);
                }
            }
        }

        // 3. Configured src directories
        for dir in &config.src {
            add_directory(&mut unique_dirs, dir);
        }

        let mut third_party: IndexSet<String> = config.known_third_party.iter().cloned().collect();
        for venv_path in detect_virtualenv_paths() {
            for site_packages in site_packages_directories(&venv_path) {
                scan_site_packages_directory(&site_packages, &mut third_party);
            }
        }

        Self {
            search_roots: unique_dirs.into_iter().collect(),
            python_version: config.python_version,
            third_party,
        }
    }
}

fn add_directory(unique_dirs: &mut IndexSet<PathBuf>, path: &Path) {
    if !path.is_dir() {
        debug!("Skipping missing search root {}", path.display());
        return;
    }
    match path.canonicalize() {
        Ok(canonical) => unique_dirs.insert(canonical),
        Err(_) => unique_dirs.insert(path.to_path_buf()),
    };
}

/// Virtual environments to scan: `VIRTUAL_ENV`, or common directory names
/// under the working directory
fn detect_virtualenv_paths() -> Vec<PathBuf> {
    if let Some(explicit) = std::env::var_os("VIRTUAL_ENV") {
        return vec![PathBuf::from(explicit)];
    }

    let Ok(current_dir) = std::env::current_dir() else {
        return Vec::new();
    };

    [".venv", "venv", "env", ".virtualenv", "virtualenv"]
        .iter()
        .map(|name| current_dir.join(name))
        .filter(|venv_path| {
            let has_bin = venv_path.join("bin").is_dir() || venv_path.join("Scripts").is_dir();
            has_bin || venv_path.join("lib").is_dir()
        })
        .collect()
}

fn site_packages_directories(venv_path: &Path) -> Vec<PathBuf> {
    let mut site_packages_dirs = Vec::new();

    // Unix-style virtual environment
    if let Ok(entries) = std::fs::read_dir(venv_path.join("lib")) {
        for entry in entries.flatten() {
            let site_packages = entry.path().join("site-packages");
            if site_packages.is_dir() {
                site_packages_dirs.push(site_packages);
            }
        }
    }

    // Windows-style virtual environment
    let lib_site_packages = venv_path.join("Lib").join("site-packages");
    if lib_site_packages.is_dir() {
        site_packages_dirs.push(lib_site_packages);
    }

    site_packages_dirs
}

fn scan_site_packages_directory(site_packages_dir: &Path, packages: &mut IndexSet<String>) {
    let Ok(entries) = std::fs::read_dir(site_packages_dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let Some(name) = path.file_name().and_then(OsStr::to_str) else {
            continue;
        };

        if name.starts_with('_') || name.contains("-info") {
            continue;
        }

        if path.is_dir() {
            packages.insert(name.to_owned());
        } else if let Some(package_name) = name.strip_suffix(".py") {
            packages.insert(package_name.to_owned());
        }
    }
}

/// How strongly an entry claims a dotted name within a single root:
/// `foo/__init__.py` beats `foo.py`, which beats a bare `foo/` directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Claim {
    NamespaceDir,
    ModuleFile,
    PackageInit,
}

/// Dotted module names mapped to their origin under the search roots
#[derive(Debug, Default)]
pub struct ModuleIndex {
    modules: FxIndexMap<String, ModuleOrigin>,
    files: FxIndexMap<PathBuf, String>,
}

impl ModuleIndex {
    /// Walk every search root and record the modules found
    ///
    /// Earlier roots shadow later ones, except that a namespace portion never
    /// shadows a regular module or package found in a later root.
    pub fn build(context: &ResolutionContext) -> Self {
        let mut index = Self::default();
        for root in &context.search_roots {
            for (name, origin) in index_root(root) {
                let claimable = match index.modules.get(&name) {
                    None => true,
                    Some(ModuleOrigin::Namespace(_)) => matches!(origin, ModuleOrigin::Source(_)),
                    Some(_) => false,
                };
                if claimable {
                    index.insert(name, origin);
                } else {
                    trace!("'{name}' from {} is shadowed", root.display());
                }
            }
        }
        debug!(
            "Indexed {} modules under {} search roots",
            index.modules.len(),
            context.search_roots.len()
        );
        index
    }

    fn insert(&mut self, name: String, origin: ModuleOrigin) {
        if let ModuleOrigin::Source(path) = &origin {
            self.files.insert(path.clone(), name.clone());
        }
        self.modules.insert(name, origin);
    }

    pub fn get(&self, module_name: &str) -> Option<&ModuleOrigin> {
        self.modules.get(module_name)
    }

    pub fn name_for_file(&self, path: &Path) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    /// Whether anything under the top-level name of `module_name` is indexed
    pub fn has_top_level(&self, module_name: &str) -> bool {
        self.modules.contains_key(top_level(module_name))
    }

    /// Whether the top-level name of `module_name` is a regular project
    /// module or package
    ///
    /// Every dotted path below it then belongs to the project, even when the
    /// name collides with the standard library.
    pub fn owns_top_level(&self, module_name: &str) -> bool {
        matches!(
            self.modules.get(top_level(module_name)),
            Some(ModuleOrigin::Source(_))
        )
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

fn is_indexable(entry: &DirEntry) -> bool {
    if entry.depth() == 0 {
        return true;
    }
    let Some(name) = entry.file_name().to_str() else {
        return false;
    };
    if entry.file_type().is_dir() {
        name != "__pycache__" && is_identifier(name)
    } else {
        name.ends_with(".py")
    }
}

fn top_level(module_name: &str) -> &str {
    module_name.split('.').next().unwrap_or(module_name)
}

/// Index a single root, applying the in-directory precedence rules
fn index_root(root: &Path) -> FxIndexMap<String, ModuleOrigin> {
    let mut claims: FxIndexMap<String, (Claim, ModuleOrigin)> = FxIndexMap::default();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(is_indexable);

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("Skipping unreadable entry under {}: {err}", root.display());
                continue;
            }
        };
        if entry.depth() == 0 {
            continue;
        }
        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };
        let Some((name, claim)) = dotted_name(relative, entry.file_type().is_dir()) else {
            continue;
        };
        let origin = match claim {
            Claim::NamespaceDir => ModuleOrigin::Namespace(entry.path().to_path_buf()),
            Claim::ModuleFile | Claim::PackageInit => {
                ModuleOrigin::Source(entry.path().to_path_buf())
            }
        };

        match claims.get(&name) {
            Some((existing, _)) if *existing >= claim => {}
            _ => {
                claims.insert(name, (claim, origin));
            }
        }
    }

    claims
        .into_iter()
        .map(|(name, (_, origin))| (name, origin))
        .collect()
}

/// Dotted module name for a path relative to its search root
fn dotted_name(relative: &Path, is_dir: bool) -> Option<(String, Claim)> {
    let mut parts: Vec<&str> = relative
        .components()
        .map(|component| component.as_os_str().to_str())
        .collect::<Option<_>>()?;

    let claim = if is_dir {
        Claim::NamespaceDir
    } else {
        let file_name = parts.pop()?;
        let stem = file_name.strip_suffix(".py")?;
        if stem == "__init__" {
            Claim::PackageInit
        } else if is_identifier(stem) {
            parts.push(stem);
            Claim::ModuleFile
        } else {
            return None;
        }
    };

    if parts.is_empty() || !parts.iter().all(|part| is_identifier(part)) {
        return None;
    }
    Some((parts.join("."), claim))
}

/// Index-backed [`ModuleResolution`] implementation
#[derive(Debug)]
pub struct ModuleResolver {
    context: ResolutionContext,
    index: ModuleIndex,
}

impl ModuleResolver {
    pub fn new(context: ResolutionContext) -> Self {
        let index = ModuleIndex::build(&context);
        Self { context, index }
    }

    /// Build a resolver for transforming `entry_file` with `config`
    pub fn for_entry(config: &Config, entry_file: &Path) -> Self {
        Self::new(ResolutionContext::new(config, entry_file))
    }

    pub fn context(&self) -> &ResolutionContext {
        &self.context
    }

    pub fn index(&self) -> &ModuleIndex {
        &self.index
    }

    fn is_third_party(&self, module_name: &str) -> bool {
        !self.index.has_top_level(module_name)
            && self.context.third_party.contains(top_level(module_name))
    }
}

impl ModuleResolution for ModuleResolver {
    fn resolve(&self, module_name: &str) -> Option<ModuleOrigin> {
        // Regular project modules shadow the standard library, like the entry
        // directory being first on sys.path; namespace portions never do
        if self.is_intrinsic(module_name) {
            return Some(ModuleOrigin::Intrinsic);
        }
        if let Some(origin) = self.index.get(module_name) {
            return Some(origin.clone());
        }
        // An unknown path below a project package is never a submodule
        if self.index.has_top_level(module_name) {
            return None;
        }
        if self.is_third_party(module_name) {
            return Some(ModuleOrigin::External);
        }
        None
    }

    fn source(&self, module_name: &str) -> Result<Option<String>> {
        match self.index.get(module_name) {
            Some(ModuleOrigin::Source(path)) => {
                let source = std::fs::read_to_string(path).with_context(|| {
                    format!("Failed to read source of '{module_name}' from {}", path.display())
                })?;
                Ok(Some(source))
            }
            _ => Ok(None),
        }
    }

    fn is_intrinsic(&self, module_name: &str) -> bool {
        !self.index.owns_top_level(module_name)
            && is_stdlib_module(module_name, self.context.python_version)
    }

    fn module_name_for_file(&self, path: &Path) -> Option<String> {
        let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        self.index.name_for_file(&canonical).map(str::to_owned)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use serial_test::serial;
    use tempfile::TempDir;

    use super::*;

    fn create_test_file(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }

    fn resolver_for(root: &Path) -> ModuleResolver {
        let config = Config::default();
        ModuleResolver::new(ResolutionContext::with_pythonpath(
            &config,
            &root.join("main.py"),
            None,
        ))
    }

    #[test]
    fn test_package_preferred_over_module_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path();

        create_test_file(&root.join("foo/__init__.py"), "# Package")?;
        create_test_file(&root.join("foo.py"), "# Module")?;

        let resolver = resolver_for(root);
        let expected = root.join("foo/__init__.py").canonicalize()?;
        assert_eq!(resolver.resolve("foo"), Some(ModuleOrigin::Source(expected)));
        assert_eq!(resolver.source("foo")?.as_deref(), Some("# Package"));
        Ok(())
    }

    #[test]
    fn test_nested_resolution() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path();

        create_test_file(&root.join("myapp/__init__.py"), "")?;
        create_test_file(&root.join("myapp/utils/__init__.py"), "")?;
        create_test_file(&root.join("myapp/utils/helpers.py"), "X = 1\n")?;

        let resolver = resolver_for(root);
        assert_eq!(
            resolver.resolve("myapp.utils.helpers"),
            Some(ModuleOrigin::Source(
                root.join("myapp/utils/helpers.py").canonicalize()?
            ))
        );
        assert_eq!(
            resolver.module_name_for_file(&root.join("myapp/utils/helpers.py")),
            Some("myapp.utils.helpers".to_owned())
        );
        assert_eq!(
            resolver.module_name_for_file(&root.join("myapp/utils/__init__.py")),
            Some("myapp.utils".to_owned())
        );
        assert!(resolver.resolve("myapp.utils.missing").is_none());
        Ok(())
    }

    #[test]
    fn test_namespace_package_has_no_source() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path();

        create_test_file(&root.join("namespace_pkg/subpkg/module.py"), "")?;

        let resolver = resolver_for(root);
        let origin = resolver.resolve("namespace_pkg").expect("namespace package indexed");
        assert!(matches!(origin, ModuleOrigin::Namespace(_)));
        assert!(origin.is_package());
        assert_eq!(resolver.source("namespace_pkg")?, None);
        assert!(resolver.resolve("namespace_pkg.subpkg.module").is_some());
        Ok(())
    }

    #[test]
    fn test_intrinsic_and_third_party() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path();
        create_test_file(&root.join("local.py"), "")?;

        let config = Config {
            known_third_party: IndexSet::from(["requests".to_owned()]),
            ..Config::default()
        };
        let resolver = ModuleResolver::new(ResolutionContext::with_pythonpath(
            &config,
            &root.join("main.py"),
            None,
        ));

        assert_eq!(resolver.resolve("os.path"), Some(ModuleOrigin::Intrinsic));
        assert!(resolver.is_intrinsic("itertools"));
        assert!(!resolver.is_intrinsic("local"));
        assert_eq!(resolver.resolve("requests.auth"), Some(ModuleOrigin::External));
        assert_eq!(resolver.resolve("unknown_module"), None);
        Ok(())
    }

    #[test]
    fn test_local_module_shadows_stdlib() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path();
        create_test_file(&root.join("types.py"), "SHADOW = True\n")?;

        let resolver = resolver_for(root);
        assert!(matches!(resolver.resolve("types"), Some(ModuleOrigin::Source(_))));
        assert!(!resolver.is_intrinsic("types"));
        Ok(())
    }

    #[test]
    fn test_non_identifier_entries_are_skipped() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path();
        create_test_file(&root.join("data-processor.py"), "")?;
        create_test_file(&root.join("my-dir/inner.py"), "")?;
        create_test_file(&root.join("pkg/__pycache__/cached.py"), "")?;
        create_test_file(&root.join("pkg/real.py"), "")?;

        let resolver = resolver_for(root);
        assert!(resolver.resolve("data-processor").is_none());
        assert!(resolver.resolve("inner").is_none());
        assert!(resolver.resolve("pkg.__pycache__.cached").is_none());
        assert!(resolver.resolve("pkg.real").is_some());
        Ok(())
    }

    #[test]
    fn test_earlier_root_shadows_later() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let entry_dir = temp_dir.path().join("entry");
        let src_dir = temp_dir.path().join("src");
        create_test_file(&entry_dir.join("shared.py"), "FROM = 'entry'\n")?;
        create_test_file(&src_dir.join("shared.py"), "FROM = 'src'\n")?;
        create_test_file(&src_dir.join("only_src.py"), "")?;

        let config = Config {
            src: vec![src_dir.clone()],
            ..Config::default()
        };
        let resolver = ModuleResolver::new(ResolutionContext::with_pythonpath(
            &config,
            &entry_dir.join("main.py"),
            None,
        ));

        assert_eq!(resolver.source("shared")?.as_deref(), Some("FROM = 'entry'\n"));
        assert!(resolver.resolve("only_src").is_some());
        Ok(())
    }

    #[test]
    fn test_regular_package_beats_earlier_namespace_portion() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let entry_dir = temp_dir.path().join("entry");
        let src_dir = temp_dir.path().join("src");
        create_test_file(&entry_dir.join("pkg/portion.py"), "")?;
        create_test_file(&src_dir.join("pkg/__init__.py"), "REGULAR = True\n")?;

        let config = Config {
            src: vec![src_dir.clone()],
            ..Config::default()
        };
        let resolver = ModuleResolver::new(ResolutionContext::with_pythonpath(
            &config,
            &entry_dir.join("main.py"),
            None,
        ));

        assert_eq!(resolver.source("pkg")?.as_deref(), Some("REGULAR = True\n"));
        Ok(())
    }

    #[test]
    fn test_pythonpath_roots_follow_entry_dir() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let entry_dir = temp_dir.path().join("entry");
        let extra_dir = temp_dir.path().join("extra");
        fs::create_dir_all(&entry_dir)?;
        create_test_file(&extra_dir.join("extra_mod.py"), "")?;

        let pythonpath = extra_dir.to_string_lossy().into_owned();
        let context = ResolutionContext::with_pythonpath(
            &Config::default(),
            &entry_dir.join("main.py"),
            Some(&pythonpath),
        );

        assert_eq!(
            context.search_roots,
            vec![entry_dir.canonicalize()?, extra_dir.canonicalize()?]
        );
        assert!(ModuleResolver::new(context).resolve("extra_mod").is_some());
        Ok(())
    }

    #[test]
    fn test_project_package_owns_stdlib_name() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path();
        create_test_file(&root.join("platform/__init__.py"), "def detect(): ...\n")?;
        create_test_file(&root.join("platform/sub.py"), "Y = 2\n")?;

        let resolver = resolver_for(root);
        assert!(matches!(resolver.resolve("platform"), Some(ModuleOrigin::Source(_))));
        assert!(matches!(resolver.resolve("platform.sub"), Some(ModuleOrigin::Source(_))));
        assert_eq!(resolver.resolve("platform.detect"), None);
        assert!(!resolver.is_intrinsic("platform.detect"));
        assert_eq!(resolver.resolve("os.path"), Some(ModuleOrigin::Intrinsic));
        Ok(())
    }

    #[test]
    fn test_namespace_dir_does_not_shadow_stdlib() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path();
        create_test_file(&root.join("json/fixtures.py"), "")?;

        let resolver = resolver_for(root);
        assert_eq!(resolver.resolve("json"), Some(ModuleOrigin::Intrinsic));
        assert_eq!(resolver.resolve("json.fixtures"), Some(ModuleOrigin::Intrinsic));
        Ok(())
    }

    #[test]
    fn test_project_package_owns_third_party_name() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path();
        create_test_file(&root.join("requests/__init__.py"), "def get(): ...\n")?;

        let config = Config {
            known_third_party: IndexSet::from(["requests".to_owned()]),
            ..Config::default()
        };
        let resolver = ModuleResolver::new(ResolutionContext::with_pythonpath(
            &config,
            &root.join("main.py"),
            None,
        ));

        assert!(matches!(resolver.resolve("requests"), Some(ModuleOrigin::Source(_))));
        assert_eq!(resolver.resolve("requests.get"), None);
        Ok(())
    }

    #[test]
    #[serial]
    fn test_virtualenv_site_packages_are_third_party() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let site_packages = temp_dir.path().join("venv/lib/python3.12/site-packages");
        create_test_file(&site_packages.join("vendored_pkg/__init__.py"), "")?;
        create_test_file(&site_packages.join("single_mod.py"), "")?;
        create_test_file(&site_packages.join("dist_only-1.0.dist-info/METADATA"), "")?;
        create_test_file(&site_packages.join("_private/__init__.py"), "")?;
        let entry_dir = temp_dir.path().join("app");
        fs::create_dir_all(&entry_dir)?;

        let original = std::env::var_os("VIRTUAL_ENV");
        // SAFETY: serialized test, the previous value is restored before asserting
        unsafe {
            std::env::set_var("VIRTUAL_ENV", temp_dir.path().join("venv"));
        }
        let context = ResolutionContext::with_pythonpath(
            &Config::default(),
            &entry_dir.join("main.py"),
            None,
        );
        unsafe {
            match original {
                Some(value) => std::env::set_var("VIRTUAL_ENV", value),
                None => std::env::remove_var("VIRTUAL_ENV"),
            }
        }

        assert!(context.third_party.contains("vendored_pkg"));
        assert!(context.third_party.contains("single_mod"));
        assert!(!context.third_party.iter().any(|name| name.contains("-info")));
        assert!(!context.third_party.contains("_private"));

        let resolver = ModuleResolver::new(context);
        assert_eq!(resolver.resolve("vendored_pkg.sub"), Some(ModuleOrigin::External));
        assert_eq!(resolver.resolve("single_mod"), Some(ModuleOrigin::External));
        assert_eq!(resolver.resolve("dist_only"), None);
        assert_eq!(resolver.resolve("_private"), None);
        Ok(())
    }
}
