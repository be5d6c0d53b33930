//! Top-bar loader context with manual and simulated progress.

use dioxus::prelude::*;

/// Loader UI state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoaderState {
    pub is_loading: bool,
    /// 0..=100.
    pub progress: u8,
}

impl LoaderState {
    pub fn started() -> Self {
        Self {
            is_loading: true,
            progress: 0,
        }
    }

    pub fn updated(self, progress: u8) -> Self {
        Self {
            is_loading: self.is_loading,
            progress: progress.min(100),
        }
    }

    pub fn finished() -> Self {
        Self {
            is_loading: false,
            progress: 100,
        }
    }

    pub fn reset() -> Self {
        Self::default()
    }
}

/// Handle to the loader context.
#[derive(Clone, Copy)]
pub struct Loader {
    state: Signal<LoaderState>,
}

impl Loader {
    pub fn read(&self) -> LoaderState {
        (self.state)()
    }

    pub fn start(&mut self) {
        self.state.set(LoaderState::started());
    }

    pub fn update(&mut self, progress: u8) {
        let next = self.read().updated(progress);
        self.state.set(next);
    }

    pub fn finish(&mut self) {
        self.state.set(LoaderState::finished());
    }

    pub fn reset(&mut self) {
        self.state.set(LoaderState::reset());
    }

    /// Simulated mode: start and creep towards 90 until finished.
    pub fn simulate(&mut self) {
        self.start();
        let mut state = self.state;
        spawn(async move {
            loop {
                sleep_ms(200).await;
                let current = state();
                if !current.is_loading || current.progress >= 90 {
                    break;
                }
                state.set(current.updated(current.progress + 10));
            }
        });
    }
}

async fn sleep_ms(ms: u64) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(std::time::Duration::from_millis(ms)).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

/// Get the loader context.
pub fn use_loader() -> Loader {
    use_context::<Loader>()
}

/// Provider component for the loader state.
#[component]
pub fn LoaderProvider(children: Element) -> Element {
    let state = use_signal(LoaderState::default);
    use_context_provider(|| Loader { state });

    rsx! {
        {children}
    }
}

/// Thin progress bar rendered under the top bar while loading.
#[component]
pub fn LoaderBar() -> Element {
    let loader = use_loader();
    let state = loader.read();

    if !state.is_loading {
        return rsx! {};
    }

    rsx! {
        div {
            class: "fixed top-0 left-0 h-0.5 bg-primary-500 transition-all",
            style: "width: {state.progress}%;",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transitions() {
        let state = LoaderState::started();
        assert!(state.is_loading);
        assert_eq!(state.progress, 0);

        let state = state.updated(40);
        assert_eq!(state.progress, 40);

        // Clamped at 100.
        let state = state.updated(250);
        assert_eq!(state.progress, 100);

        let state = LoaderState::finished();
        assert!(!state.is_loading);
        assert_eq!(state.progress, 100);

        assert_eq!(LoaderState::reset(), LoaderState::default());
    }
}
