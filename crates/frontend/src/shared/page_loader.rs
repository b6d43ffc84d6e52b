//! Page module loading.
//!
//! The gate never loads pages. Once it allows a route, the page host asks a
//! [`PageLoader`] for the module and shows a placeholder while the returned
//! future is pending. Navigating away cancels the pending load.

use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use contracts::system::onboarding::routes::normalize_path;
use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use thiserror::Error;

/// A dashboard page reachable by path.
#[derive(Clone, Copy)]
pub struct PageModule {
    pub path: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub render: fn() -> AnyView,
}

impl std::fmt::Debug for PageModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageModule")
            .field("path", &self.path)
            .field("title", &self.title)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("no page registered at {0}")]
    UnknownPage(String),

    #[error("load of {0} was cancelled")]
    Cancelled(String),
}

/// Cancels a pending load. Clones share the flag.
#[derive(Debug, Clone, Default)]
pub struct LoadHandle {
    cancelled: Arc<AtomicBool>,
}

impl LoadHandle {
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

pub type PageFuture = Pin<Box<dyn Future<Output = Result<PageModule, LoadError>>>>;

pub struct PendingPage {
    pub handle: LoadHandle,
    pub future: PageFuture,
}

pub trait PageLoader {
    fn load(&self, path: &str) -> PendingPage;
}

/// Loader over a compiled-in module list, memoised per path.
pub struct StaticPageLoader {
    modules: &'static [PageModule],
    loaded: Rc<RefCell<HashMap<String, PageModule>>>,
}

impl StaticPageLoader {
    pub fn new(modules: &'static [PageModule]) -> Self {
        Self {
            modules,
            loaded: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    pub fn is_loaded(&self, path: &str) -> bool {
        self.loaded.borrow().contains_key(normalize_path(path))
    }
}

impl PageLoader for StaticPageLoader {
    fn load(&self, path: &str) -> PendingPage {
        let handle = LoadHandle::default();
        let token = handle.clone();
        let path = normalize_path(path).to_string();
        let modules = self.modules;
        let loaded = self.loaded.clone();

        let future = async move {
            if token.is_cancelled() {
                return Err(LoadError::Cancelled(path));
            }
            if let Some(module) = loaded.borrow().get(&path).copied() {
                return Ok(module);
            }
            let Some(module) = modules.iter().find(|m| m.path == path).copied() else {
                return Err(LoadError::UnknownPage(path));
            };
            log::debug!("page module loaded: {}", path);
            loaded.borrow_mut().insert(path, module);
            Ok(module)
        };

        PendingPage {
            handle,
            future: Box::pin(future),
        }
    }
}

/// Context wrapper so the loader can be swapped in tests.
#[derive(Clone, Copy)]
pub struct PageLoaderContext(StoredValue<Rc<dyn PageLoader>, LocalStorage>);

impl PageLoaderContext {
    pub fn loader(&self) -> Rc<dyn PageLoader> {
        self.0.get_value()
    }
}

pub fn provide_page_loader(loader: impl PageLoader + 'static) {
    let loader: Rc<dyn PageLoader> = Rc::new(loader);
    provide_context(PageLoaderContext(StoredValue::new_local(loader)));
}

pub fn use_page_loader() -> Rc<dyn PageLoader> {
    use_context::<PageLoaderContext>()
        .expect("PageLoaderContext not found in component tree")
        .loader()
}
