//! Sign-in state for components.

use std::sync::Arc;

use crate::backend::auth::{AuthConfig, AuthProvider, AuthState, Identity};
use dioxus::prelude::*;

/// Handle to the auth state provided at the root of the app.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: Signal<AuthState>,
}

impl AuthContext {
    pub fn client(&self) -> Option<Arc<dyn AuthProvider>> {
        self.state.read().client()
    }

    pub fn user(&self) -> Option<Identity> {
        self.state.read().user().cloned()
    }

    pub fn is_user_loading(&self) -> bool {
        self.state.read().is_user_loading()
    }

    /// Name of the signed-in user, if any.
    pub fn display_name(&self) -> Option<String> {
        self.state.read().user().map(Identity::display_name)
    }
}

/// Builds the auth client from `config` and looks up the current user once.
///
/// The lookup runs as a task owned by the calling component, so it is
/// dropped together with the component and never writes into a discarded
/// signal.
pub fn use_auth(config: AuthConfig) -> AuthContext {
    use_auth_state(move || AuthState::connect(&config))
}

fn use_auth_state(init: impl FnOnce() -> AuthState) -> AuthContext {
    let mut state = use_signal(init);

    use_future(move || async move {
        let Some(client) = state.peek().client() else {
            return;
        };
        if !state.peek().is_user_loading() {
            return;
        }

        let result = client.current_user().await;
        state.write().settle(result);
    });

    AuthContext { state }
}

/// The `AuthContext` installed by the app root.
pub fn use_auth_context() -> AuthContext {
    use_context::<AuthContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::AuthError;
    use futures_util::future::{BoxFuture, pending};
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    #[derive(Clone)]
    enum Source {
        Config(AuthConfig),
        Provider(Arc<dyn AuthProvider>),
    }

    #[derive(Clone, Debug, PartialEq, Eq)]
    struct Seen {
        has_client: bool,
        loading: bool,
        user: Option<String>,
    }

    /// What the harness saw on each render.
    #[derive(Clone, Default)]
    struct Renders(Arc<Mutex<Vec<Seen>>>);

    impl Renders {
        fn last(&self) -> Option<Seen> {
            self.0.lock().unwrap().last().cloned()
        }
    }

    #[component]
    fn AuthHarness() -> Element {
        let source = use_context::<Source>();
        let renders = use_context::<Renders>();

        let auth = match source {
            Source::Config(config) => use_auth(config),
            Source::Provider(provider) => {
                use_auth_state(move || AuthState::with_provider(provider))
            }
        };

        renders.0.lock().unwrap().push(Seen {
            has_client: auth.client().is_some(),
            loading: auth.is_user_loading(),
            user: auth.user().map(|user| user.id),
        });

        rsx! {}
    }

    struct CountingProvider {
        identity: Option<Identity>,
        calls: AtomicUsize,
    }

    impl AuthProvider for CountingProvider {
        fn current_user(&self) -> BoxFuture<'_, Result<Identity, AuthError>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let result = self.identity.clone().ok_or(AuthError::SessionMissing);
            Box::pin(async move { result })
        }
    }

    struct DropFlag(Arc<AtomicBool>);

    impl Drop for DropFlag {
        fn drop(&mut self) {
            self.0.store(true, Ordering::SeqCst);
        }
    }

    /// Never answers; flags when its request future is dropped.
    struct HangingProvider {
        dropped: Arc<AtomicBool>,
        calls: AtomicUsize,
    }

    impl AuthProvider for HangingProvider {
        fn current_user(&self) -> BoxFuture<'_, Result<Identity, AuthError>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let flag = DropFlag(self.dropped.clone());
            Box::pin(async move {
                let _flag = flag;
                pending::<Result<Identity, AuthError>>().await
            })
        }
    }

    fn identity(id: &str) -> Identity {
        serde_json::from_value(serde_json::json!({ "id": id })).unwrap()
    }

    fn mount(source: Source) -> (VirtualDom, Renders) {
        let renders = Renders::default();
        let mut dom = VirtualDom::new(AuthHarness)
            .with_root_context(source)
            .with_root_context(renders.clone());
        dom.rebuild_in_place();
        (dom, renders)
    }

    async fn run_until_settled(dom: &mut VirtualDom, renders: &Renders) {
        tokio::time::timeout(Duration::from_secs(5), async {
            while renders.last().is_some_and(|seen| seen.loading) {
                dom.wait_for_work().await;
                dom.render_immediate_to_vec();
            }
        })
        .await
        .expect("auth state never settled");
    }

    async fn drain(dom: &mut VirtualDom) {
        let _ = tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work()).await;
        dom.render_immediate_to_vec();
    }

    #[tokio::test]
    async fn bad_config_settles_on_first_render() {
        let (mut dom, renders) = mount(Source::Config(AuthConfig::default()));

        let expected = Seen {
            has_client: false,
            loading: false,
            user: None,
        };
        assert_eq!(renders.last(), Some(expected.clone()));

        drain(&mut dom).await;
        assert_eq!(renders.last(), Some(expected));
    }

    #[tokio::test]
    async fn config_without_session_ends_signed_out() {
        let config = AuthConfig::default().with_service("http://127.0.0.1:9", "anon-key");
        let (mut dom, renders) = mount(Source::Config(config));

        assert_eq!(renders.last().map(|seen| seen.loading), Some(true));
        run_until_settled(&mut dom, &renders).await;

        assert_eq!(
            renders.last(),
            Some(Seen {
                has_client: true,
                loading: false,
                user: None,
            })
        );
    }

    #[tokio::test]
    async fn fetches_user_once_and_stops_loading() {
        let provider = Arc::new(CountingProvider {
            identity: Some(identity("steve")),
            calls: AtomicUsize::new(0),
        });
        let (mut dom, renders) = mount(Source::Provider(provider.clone()));

        run_until_settled(&mut dom, &renders).await;
        drain(&mut dom).await;

        assert_eq!(
            renders.last(),
            Some(Seen {
                has_client: true,
                loading: false,
                user: Some("steve".to_string()),
            })
        );
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failed_fetch_stops_loading_without_user() {
        let provider = Arc::new(CountingProvider {
            identity: None,
            calls: AtomicUsize::new(0),
        });
        let (mut dom, renders) = mount(Source::Provider(provider));

        run_until_settled(&mut dom, &renders).await;

        assert_eq!(
            renders.last(),
            Some(Seen {
                has_client: true,
                loading: false,
                user: None,
            })
        );
    }

    #[tokio::test]
    async fn unmounting_cancels_pending_fetch() {
        let dropped = Arc::new(AtomicBool::new(false));
        let provider = Arc::new(HangingProvider {
            dropped: dropped.clone(),
            calls: AtomicUsize::new(0),
        });
        let (mut dom, renders) = mount(Source::Provider(provider.clone()));

        drain(&mut dom).await;
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
        assert_eq!(renders.last().map(|seen| seen.loading), Some(true));
        assert!(!dropped.load(Ordering::SeqCst));

        drop(dom);
        assert!(dropped.load(Ordering::SeqCst));
    }
}
