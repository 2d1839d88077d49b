//! Navigation dispatch with an environment-selected history strategy.

use std::sync::Arc;

use crate::ports::{HostEnvironment, RouteHistory};
use crate::services::classifier::is_cordova;

/// Pushes routes through the history mechanism appropriate for the host.
///
/// Packaged shells serve the UI from the bundle filesystem and need
/// fragment-based history; the open web uses path-based history. The choice
/// is made once at construction rather than per push.
pub struct Navigator {
    history: Arc<dyn RouteHistory>,
}

impl Navigator {
    /// Select the history strategy for `env`.
    #[must_use]
    pub fn select(
        env: &dyn HostEnvironment,
        fragment_history: Arc<dyn RouteHistory>,
        path_history: Arc<dyn RouteHistory>,
    ) -> Self {
        let history = if is_cordova(env) {
            fragment_history
        } else {
            path_history
        };
        Self { history }
    }

    /// Push `route` onto the selected history.
    pub fn push(&self, route: &str) {
        tracing::debug!("history push: {route}");
        self.history.push(route);
    }
}

/// Adapt an absolute asset path to the host's base.
///
/// Packaged shells resolve assets relative to the bundle root, so
/// `/img/x.png` becomes `./img/x.png`; on the web the path is returned
/// untouched.
#[must_use]
pub fn asset_path(env: &dyn HostEnvironment, path: &str) -> String {
    if is_cordova(env) {
        format!(".{path}")
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Platform;
    use crate::ports::StaticEnvironment;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingHistory {
        routes: Mutex<Vec<String>>,
    }

    impl RouteHistory for RecordingHistory {
        fn push(&self, route: &str) {
            self.routes.lock().unwrap().push(route.to_string());
        }
    }

    #[test]
    fn test_packaged_host_uses_fragment_history() {
        let fragment = Arc::new(RecordingHistory::default());
        let path = Arc::new(RecordingHistory::default());
        let env = StaticEnvironment::packaged(Platform::Ios, 375, 812, 3.0);

        let navigator = Navigator::select(&env, fragment.clone(), path.clone());
        navigator.push("/ballot");

        assert_eq!(*fragment.routes.lock().unwrap(), vec!["/ballot"]);
        assert!(path.routes.lock().unwrap().is_empty());
    }

    #[test]
    fn test_web_host_uses_path_history() {
        let fragment = Arc::new(RecordingHistory::default());
        let path = Arc::new(RecordingHistory::default());
        let env = StaticEnvironment::web(1440, 900);

        let navigator = Navigator::select(&env, fragment.clone(), path.clone());
        navigator.push("/voterguide/org123");
        navigator.push("/ballot");

        assert!(fragment.routes.lock().unwrap().is_empty());
        assert_eq!(
            *path.routes.lock().unwrap(),
            vec!["/voterguide/org123", "/ballot"]
        );
    }

    #[test]
    fn test_asset_path_prefixes_only_when_packaged() {
        let packaged = StaticEnvironment::packaged(Platform::Android, 1080, 1920, 1.0);
        let web = StaticEnvironment::web(1440, 900);

        assert_eq!(asset_path(&packaged, "/assets/x.png"), "./assets/x.png");
        assert_eq!(asset_path(&web, "/assets/x.png"), "/assets/x.png");
    }
}
