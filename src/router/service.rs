use crate::enums::{HttpMethod, MethodSet};
use crate::errors::{RouterError, RouterResult};
use crate::matcher::{MatchStrategy, RouteParams, match_pattern};
use crate::path::{normalize_request_path, path_segments};
use crate::pattern::CompiledPattern;
use crate::route::{GroupScope, Route, RouteGroup, RouteHandler, run_group};
use crate::router::{RouteRegistrar, RouteRequest, RouterOptions};
use crate::types::{Priority, RouteId};
use hashbrown::HashMap as FastHashMap;
use smallvec::SmallVec;

#[derive(Debug)]
pub struct Router<H> {
    routes: FastHashMap<RouteId, Route<H>>,
    order: Vec<RouteId>,
    counter: RouteId,
    options: RouterOptions,
}

/// Result of a successful dispatch.
#[derive(Debug)]
pub struct RouteMatch<'r, H> {
    route: &'r Route<H>,
    strategy: MatchStrategy,
    params: RouteParams,
}

impl<'r, H> RouteMatch<'r, H> {
    pub fn route(&self) -> &'r Route<H> {
        self.route
    }

    pub fn handler(&self) -> &'r RouteHandler<H> {
        self.route.handler()
    }

    pub fn strategy(&self) -> MatchStrategy {
        self.strategy
    }

    pub fn params(&self) -> &RouteParams {
        &self.params
    }

    pub fn into_parts(self) -> (&'r Route<H>, RouteParams) {
        (self.route, self.params)
    }
}

impl<H> Default for Router<H> {
    fn default() -> Self {
        Self {
            routes: FastHashMap::new(),
            order: Vec::new(),
            counter: 0,
            options: RouterOptions::default(),
        }
    }
}

impl<H> Router<H> {
    pub fn new(options: Option<RouterOptions>) -> Self {
        Self {
            options: options.unwrap_or_default(),
            ..Self::default()
        }
    }

    pub fn with_options(options: RouterOptions) -> RouterResult<Self> {
        options.validate()?;
        Ok(Self::new(Some(options)))
    }

    pub fn config(&self) -> &RouterOptions {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn route(&self, id: RouteId) -> Option<&Route<H>> {
        self.routes.get(&id)
    }

    pub fn route_mut(&mut self, id: RouteId) -> Option<&mut Route<H>> {
        self.routes.get_mut(&id)
    }

    /// Routes in dispatch order: descending priority, then registration order.
    pub fn routes(&self) -> impl Iterator<Item = &Route<H>> + '_ {
        self.order.iter().filter_map(|id| self.routes.get(id))
    }

    pub(crate) fn register_in(
        &mut self,
        groups: &[String],
        methods: MethodSet,
        pattern: &str,
        handler: RouteHandler<H>,
        priority: Priority,
    ) -> RouterResult<&mut Route<H>> {
        let full_pattern = if groups.is_empty() {
            pattern.to_string()
        } else {
            let mut prefixed = groups.concat();
            prefixed.push_str(pattern);
            prefixed
        };

        if methods.is_empty() {
            return Err(RouterError::EmptyMethodSet {
                pattern: full_pattern,
            });
        }

        let limit = self.options.max_routes.unwrap_or(usize::MAX);
        if self.routes.len() >= limit || self.counter == RouteId::MAX {
            return Err(RouterError::MaxRoutesExceeded {
                limit: limit.min(RouteId::MAX as usize),
                pattern: full_pattern,
            });
        }

        let compiled = CompiledPattern::compile(&full_pattern, &self.options.compile_options())?;

        let id = self.counter;
        self.counter += 1;

        tracing::event!(
            tracing::Level::TRACE,
            operation = "map",
            id = id as u64,
            pattern = %full_pattern,
            methods = ?methods,
            priority = priority as i64
        );

        let position = self.order.partition_point(|existing| {
            self.routes
                .get(existing)
                .is_some_and(|route| route.priority() >= priority)
        });
        self.order.insert(position, id);

        let route = Route::new(
            id,
            methods,
            compiled,
            handler,
            priority,
            groups.to_vec(),
        );
        Ok(self.routes.entry(id).or_insert(route))
    }

    #[tracing::instrument(skip(self, request), fields(method = %request.method(), path = %request.path()))]
    pub fn dispatch<R: RouteRequest + ?Sized>(&self, request: &R) -> RouterResult<RouteMatch<'_, H>> {
        self.dispatch_parts(request.method(), request.path())
    }

    pub fn dispatch_parts(&self, method: &str, path: &str) -> RouterResult<RouteMatch<'_, H>> {
        if self.routes.is_empty() {
            return Err(RouterError::EmptyRouteTable);
        }

        let normalized = normalize_request_path(path);
        let not_found = || RouterError::RouteNotFound {
            method: method.to_string(),
            path: normalized.to_string(),
        };

        let Some(http_method) = HttpMethod::from_request_token(method) else {
            if self.options.debug {
                tracing::event!(
                    tracing::Level::DEBUG,
                    method = %method,
                    "unrecognized request method"
                );
            }
            return Err(not_found());
        };

        let segments: SmallVec<[&str; 8]> = path_segments(&normalized).collect();

        for route in self.routes() {
            if !route.allows(http_method) {
                continue;
            }

            if let Some((strategy, params)) = match_pattern(route.compiled(), &normalized, &segments)
            {
                if self.options.debug {
                    tracing::event!(
                        tracing::Level::DEBUG,
                        route = route.id() as u64,
                        pattern = %route.pattern(),
                        strategy = ?strategy,
                        path = %normalized,
                        "route matched"
                    );
                }
                return Ok(RouteMatch {
                    route,
                    strategy,
                    params,
                });
            }
        }

        if self.options.debug {
            tracing::event!(
                tracing::Level::DEBUG,
                method = %http_method,
                path = %normalized,
                "no route matched"
            );
        }
        Err(not_found())
    }
}

impl<H> RouteRegistrar<H> for Router<H> {
    fn register(
        &mut self,
        methods: MethodSet,
        pattern: &str,
        handler: RouteHandler<H>,
        priority: Priority,
    ) -> RouterResult<&mut Route<H>> {
        self.register_in(&[], methods, pattern, handler, priority)
    }

    fn group<F>(&mut self, pattern: &str, body: F) -> RouterResult<RouteGroup>
    where
        F: FnOnce(&mut GroupScope<'_, H>) -> RouterResult<()>,
    {
        run_group(self, Vec::new(), pattern, body)
    }
}
