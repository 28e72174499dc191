use crate::enums::{HttpMethod, MethodSet};
use crate::errors::{RouterError, RouterResult};
use crate::route::{GroupScope, Redirect, Route, RouteGroup, RouteHandler};
use crate::types::Priority;

/// Route registration surface shared by [`Router`](super::Router) and
/// [`GroupScope`].
pub trait RouteRegistrar<H> {
    fn register(
        &mut self,
        methods: MethodSet,
        pattern: &str,
        handler: RouteHandler<H>,
        priority: Priority,
    ) -> RouterResult<&mut Route<H>>;

    fn group<F>(&mut self, pattern: &str, body: F) -> RouterResult<RouteGroup>
    where
        F: FnOnce(&mut GroupScope<'_, H>) -> RouterResult<()>;

    /// Registers `handler` for `methods` on `pattern`.
    ///
    /// Outside regex-form patterns a bare `:` segment (`/a/:`) and a parameter
    /// name used twice (`/:id/x/:id`) are rejected with
    /// [`PatternError`](crate::pattern::PatternError).
    fn map<M: Into<MethodSet>>(
        &mut self,
        methods: M,
        pattern: &str,
        handler: H,
        priority: Priority,
    ) -> RouterResult<&mut Route<H>> {
        self.register(
            methods.into(),
            pattern,
            RouteHandler::Handler(handler),
            priority,
        )
    }

    /// Like [`map`](Self::map) but takes method tokens such as `"get"` or
    /// `"POST"`, matched case-insensitively.
    fn map_tokens<I, S>(
        &mut self,
        tokens: I,
        pattern: &str,
        handler: H,
        priority: Priority,
    ) -> RouterResult<&mut Route<H>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut methods = MethodSet::empty();
        for token in tokens {
            let token = token.as_ref();
            let method =
                HttpMethod::from_token(token).ok_or_else(|| RouterError::UnknownMethod {
                    token: token.to_string(),
                    pattern: pattern.to_string(),
                })?;
            methods |= MethodSet::from(method);
        }
        self.map(methods, pattern, handler, priority)
    }

    fn get(&mut self, pattern: &str, handler: H) -> RouterResult<&mut Route<H>> {
        self.map(HttpMethod::Get, pattern, handler, 0)
    }

    fn post(&mut self, pattern: &str, handler: H) -> RouterResult<&mut Route<H>> {
        self.map(HttpMethod::Post, pattern, handler, 0)
    }

    fn put(&mut self, pattern: &str, handler: H) -> RouterResult<&mut Route<H>> {
        self.map(HttpMethod::Put, pattern, handler, 0)
    }

    fn patch(&mut self, pattern: &str, handler: H) -> RouterResult<&mut Route<H>> {
        self.map(HttpMethod::Patch, pattern, handler, 0)
    }

    fn delete(&mut self, pattern: &str, handler: H) -> RouterResult<&mut Route<H>> {
        self.map(HttpMethod::Delete, pattern, handler, 0)
    }

    fn options(&mut self, pattern: &str, handler: H) -> RouterResult<&mut Route<H>> {
        self.map(HttpMethod::Options, pattern, handler, 0)
    }

    fn head(&mut self, pattern: &str, handler: H) -> RouterResult<&mut Route<H>> {
        self.map(HttpMethod::Head, pattern, handler, 0)
    }

    fn any(&mut self, pattern: &str, handler: H) -> RouterResult<&mut Route<H>> {
        self.map(MethodSet::all(), pattern, handler, 0)
    }

    /// Registers a GET route that always redirects to `to` with `status`.
    fn redirect(&mut self, from: &str, to: &str, status: u16) -> RouterResult<&mut Route<H>> {
        if !Redirect::is_valid_status(status) {
            return Err(RouterError::InvalidRedirectStatus {
                from: from.to_string(),
                status,
            });
        }
        self.register(
            MethodSet::GET,
            from,
            RouteHandler::Redirect(Redirect::new(to.to_string(), status)),
            0,
        )
    }

    /// [`redirect`](Self::redirect) with `302 Found`.
    fn redirect_found(&mut self, from: &str, to: &str) -> RouterResult<&mut Route<H>> {
        self.redirect(from, to, Redirect::DEFAULT_STATUS)
    }
}
