use crate::enums::MethodSet;
use crate::errors::RouterResult;
use crate::router::{RouteRegistrar, Router};
use crate::types::{Priority, RouteId};

use super::{Route, RouteHandler};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteGroup {
    pattern: String,
    prefix: String,
    routes: Vec<RouteId>,
}

impl RouteGroup {
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Routes registered inside the group body, nested groups included.
    pub fn routes(&self) -> &[RouteId] {
        &self.routes
    }
}

/// Registration handle passed to a group body.
#[derive(Debug)]
pub struct GroupScope<'r, H> {
    router: &'r mut Router<H>,
    groups: Vec<String>,
    registered: Vec<RouteId>,
}

impl<'r, H> GroupScope<'r, H> {
    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    pub fn prefix(&self) -> String {
        self.groups.concat()
    }
}

impl<H> RouteRegistrar<H> for GroupScope<'_, H> {
    fn register(
        &mut self,
        methods: MethodSet,
        pattern: &str,
        handler: RouteHandler<H>,
        priority: Priority,
    ) -> RouterResult<&mut Route<H>> {
        let route = self
            .router
            .register_in(&self.groups, methods, pattern, handler, priority)?;
        self.registered.push(route.id());
        Ok(route)
    }

    fn group<F>(&mut self, pattern: &str, body: F) -> RouterResult<RouteGroup>
    where
        F: FnOnce(&mut GroupScope<'_, H>) -> RouterResult<()>,
    {
        let group = run_group(&mut *self.router, self.groups.clone(), pattern, body)?;
        self.registered.extend_from_slice(group.routes());
        Ok(group)
    }
}

pub(crate) fn run_group<H, F>(
    router: &mut Router<H>,
    mut groups: Vec<String>,
    pattern: &str,
    body: F,
) -> RouterResult<RouteGroup>
where
    F: FnOnce(&mut GroupScope<'_, H>) -> RouterResult<()>,
{
    groups.push(pattern.to_string());
    tracing::event!(
        tracing::Level::TRACE,
        operation = "group",
        pattern = %pattern,
        depth = groups.len() as u64
    );

    let mut scope = GroupScope {
        router,
        groups,
        registered: Vec::new(),
    };
    body(&mut scope)?;

    Ok(RouteGroup {
        pattern: pattern.to_string(),
        prefix: scope.prefix(),
        routes: scope.registered,
    })
}
