//! Recursive source embedding
//!
//! A dependency is embedded with its own imports already rewritten: its
//! source is parsed and run through a child [`ImportTransformer`] with a
//! fresh tracking state. The chain of modules currently being embedded is
//! handed down so that a cycle fails fast instead of recursing forever.

use anyhow::Result;
use log::debug;

use super::{ImportTransformer, statement::ModuleContext};
use crate::{codegen, error::TransformError};

impl ImportTransformer<'_> {
    /// Source of `module_name` ready to be executed by the generated program,
    /// or `None` when the module has no source of its own
    pub(super) fn embed(&self, module_name: &str) -> Result<Option<String>> {
        let Some(source) = self.resolver.source(module_name)? else {
            debug!("'{module_name}' has no source, nothing to embed");
            return Ok(None);
        };

        if self.embedding_chain.iter().any(|embedding| embedding == module_name) {
            let mut chain = self.embedding_chain.clone();
            chain.push(module_name.to_owned());
            return Err(TransformError::CircularDependency { chain }.into());
        }

        let is_package = self
            .resolver
            .resolve(module_name)
            .is_some_and(|origin| origin.is_package());
        let context = ModuleContext::new(Some(module_name.to_owned()), is_package);

        let mut chain = self.embedding_chain.clone();
        chain.push(module_name.to_owned());

        let rewritten = {
            let (mut module, stylist) =
                codegen::parse(&source, &format!("module '{module_name}'"))?;
            let mut child =
                ImportTransformer::with_chain(self.resolver, &stylist, self.options, context, chain);
            child.transform_module(&mut module)?;
            child
                .is_modified()
                .then(|| codegen::render_module(&module, &stylist))
        };

        match rewritten {
            Some(rewritten) => {
                debug!("Embedding '{module_name}' with rewritten imports");
                Ok(Some(rewritten))
            }
            None => Ok(Some(source)),
        }
    }
}
