use crate::errors::RouterResult;
use crate::router::{RouteMatch, RouteRequest, Router};
use parking_lot::RwLock;
use std::sync::Arc;

/// A router snapshot that can be swapped while requests are being served.
#[derive(Debug)]
pub struct SharedRouter<H> {
    current: RwLock<Arc<Router<H>>>,
}

impl<H> SharedRouter<H> {
    pub fn new(router: Router<H>) -> Self {
        Self {
            current: RwLock::new(Arc::new(router)),
        }
    }

    pub fn load(&self) -> Arc<Router<H>> {
        self.current.read().clone()
    }

    /// Installs `router` and returns the table it replaced.
    pub fn replace(&self, router: Router<H>) -> Arc<Router<H>> {
        let next = Arc::new(router);
        let mut guard = self.current.write();
        tracing::event!(
            tracing::Level::DEBUG,
            operation = "replace",
            previous_routes = guard.len() as u64,
            routes = next.len() as u64
        );
        std::mem::replace(&mut *guard, next)
    }

    pub fn dispatch_with<R, T, F>(&self, request: &R, f: F) -> RouterResult<T>
    where
        R: RouteRequest + ?Sized,
        F: FnOnce(RouteMatch<'_, H>) -> T,
    {
        let snapshot = self.load();
        let matched = snapshot.dispatch(request)?;
        Ok(f(matched))
    }
}

impl<H> From<Router<H>> for SharedRouter<H> {
    fn from(router: Router<H>) -> Self {
        Self::new(router)
    }
}
