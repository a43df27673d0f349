//! Service container for dependency injection
//!
//! Wires up the scenario service with its renderer and filesystem.

use std::sync::Arc;

use crate::application::services::ScenarioService;
use crate::config::Settings;
use crate::infrastructure::render::DotRenderer;
use crate::infrastructure::traits::{FileSystem, RealFileSystem, Renderer};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    /// Tree exporter
    pub renderer: Arc<dyn Renderer>,

    scenarios: ScenarioService,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        let fs: Arc<dyn FileSystem> = Arc::new(RealFileSystem);
        let renderer = Arc::new(DotRenderer::new(fs.clone(), settings.layout_params()));
        Self::with_deps(settings, fs, renderer)
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        fs: Arc<dyn FileSystem>,
        renderer: Arc<dyn Renderer>,
    ) -> Self {
        let settings = Arc::new(settings);
        let scenarios = ScenarioService::new(settings.clone(), renderer.clone());

        Self {
            settings,
            fs,
            renderer,
            scenarios,
        }
    }

    pub fn scenarios(&self) -> &ScenarioService {
        &self.scenarios
    }
}
