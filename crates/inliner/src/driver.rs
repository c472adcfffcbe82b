//! Per-file orchestration: read, parse, transform, render and persist

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, anyhow};
use log::{debug, info};

use crate::{
    codegen,
    config::Config,
    import_transformer::{ImportTransformer, ModuleContext, TransformOptions},
    resolver::{ModuleResolution, ModuleResolver},
};

/// Transform one Python file
///
/// Returns the original text when no import qualified for inlining. Otherwise
/// the transformed program is written to
/// `<boundary>/<output_dir>/<output_prefix><file name>` and returned.
pub fn transform_file(path: &Path, config: &Config) -> Result<String> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let options = TransformOptions {
        boundary: config.boundary_path()?,
        echo_imports: config.echo_imports,
    };
    let resolver = ModuleResolver::for_entry(config, path);
    debug!(
        "Indexed {} modules for {}",
        resolver.index().len(),
        path.display()
    );

    let Some(transformed) = transform_source(&source, path, &resolver, &options)? else {
        info!("No in-boundary imports in {}", path.display());
        return Ok(source);
    };

    let output = output_path(path, config, &options.boundary)?;
    write_output(&output, &transformed)?;
    info!("Wrote {}", output.display());
    Ok(transformed)
}

/// Transform `source`, the contents of `path`, against an arbitrary resolver
///
/// `Ok(None)` means nothing was replaced.
pub fn transform_source(
    source: &str,
    path: &Path,
    resolver: &dyn ModuleResolution,
    options: &TransformOptions,
) -> Result<Option<String>> {
    let is_package = path.file_name().is_some_and(|name| name == "__init__.py");
    let context = ModuleContext::new(resolver.module_name_for_file(path), is_package);

    let (mut module, stylist) = codegen::parse(source, &path.display().to_string())?;
    let mut transformer = ImportTransformer::new(resolver, &stylist, options, context);
    transformer.transform_module(&mut module)?;

    Ok(transformer
        .is_modified()
        .then(|| codegen::render_module(&module, &stylist)))
}

/// Where the transformed version of `input` is written
pub fn output_path(input: &Path, config: &Config, boundary: &Path) -> Result<PathBuf> {
    let file_name = input
        .file_name()
        .ok_or_else(|| anyhow!("{} does not name a file", input.display()))?;
    Ok(boundary.join(&config.output_dir).join(format!(
        "{}{}",
        config.output_prefix,
        file_name.to_string_lossy()
    )))
}

fn write_output(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_output_path_defaults() -> Result<()> {
        let config = Config::default();
        let output = output_path(Path::new("/work/app/main.py"), &config, Path::new("/work"))?;
        assert_eq!(output, PathBuf::from("/work/tmp/transformed_imports_main.py"));
        Ok(())
    }

    #[test]
    fn test_output_path_uses_configured_names() -> Result<()> {
        let config = Config {
            output_dir: "build".to_owned(),
            output_prefix: "inlined_".to_owned(),
            ..Config::default()
        };
        let output = output_path(Path::new("script.py"), &config, Path::new("/"))?;
        assert_eq!(output, PathBuf::from("/build/inlined_script.py"));
        Ok(())
    }

    #[test]
    fn test_output_path_requires_file_name() {
        assert!(output_path(Path::new("/"), &Config::default(), Path::new("/")).is_err());
    }

    #[test]
    fn test_write_output_creates_directory() -> Result<()> {
        let temp = TempDir::new()?;
        let target = temp.path().join("tmp").join("out.py");
        write_output(&target, "x = 1\n")?;
        assert_eq!(fs::read_to_string(&target)?, "x = 1\n");
        Ok(())
    }
}
