use crate::composition::Composition;
use crate::composition::intro::{INTRO_BUMPER_FPS, IntroBumper};
use crate::config::BumperConfig;
use crate::foundation::core::Fps;
use crate::foundation::error::{BumperError, BumperResult};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Compositions keyed by id, iterated in id order.
#[derive(Clone, Default)]
pub struct Registry {
    entries: BTreeMap<String, Arc<dyn Composition>>,
}

impl Registry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a composition; ids must be unique.
    pub fn register(&mut self, comp: impl Composition + 'static) -> BumperResult<()> {
        let spec = comp.spec();
        spec.validate()?;
        if self.entries.contains_key(&spec.id) {
            return Err(BumperError::validation(format!(
                "composition '{}' is already registered",
                spec.id
            )));
        }
        tracing::debug!(id = %spec.id, "registered composition");
        self.entries.insert(spec.id.clone(), Arc::new(comp));
        Ok(())
    }

    /// Look up a composition by id.
    pub fn get(&self, id: &str) -> Option<Arc<dyn Composition>> {
        self.entries.get(id).cloned()
    }

    /// Registered ids in order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Registered compositions in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Composition>> {
        self.entries.values()
    }

    /// Number of registered compositions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("ids", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// The project's compositions at their native frame rate.
pub fn root(config: BumperConfig) -> BumperResult<Registry> {
    root_at(config, INTRO_BUMPER_FPS)
}

/// The project's compositions retimed to `fps`.
pub fn root_at(config: BumperConfig, fps: Fps) -> BumperResult<Registry> {
    let mut registry = Registry::new();
    registry.register(IntroBumper::new(config)?.with_fps(fps)?)?;
    Ok(registry)
}

#[cfg(test)]
#[path = "../../tests/unit/composition/registry.rs"]
mod tests;
