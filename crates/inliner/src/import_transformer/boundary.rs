//! Decides which import statements are rewritten

use std::path::Path;

use anyhow::Result;
use log::debug;

use super::statement::ImportStatement;
use crate::{error::TransformError, resolver::ModuleResolution, types::ModuleOrigin};

/// Whether a resolved module lives under the boundary directory
pub fn is_within(origin: &ModuleOrigin, boundary: &Path) -> bool {
    !origin.is_intrinsic() && origin.location().is_some_and(|path| path.starts_with(boundary))
}

/// Whether `statement` should be replaced by inlined initialization code
///
/// The base module must resolve: an unknown base is a fatal
/// [`TransformError::ModuleNotFound`].
pub fn should_transform(
    statement: &ImportStatement,
    resolver: &dyn ModuleResolution,
    boundary: &Path,
) -> Result<bool> {
    let base = statement.base_module();
    let origin = resolver
        .resolve(base)
        .ok_or_else(|| TransformError::ModuleNotFound(base.to_owned()))?;

    let transform = !resolver.is_intrinsic(base) && is_within(&origin, boundary);
    debug!("Import of '{base}' ({origin}): transform={transform}");
    Ok(transform)
}
