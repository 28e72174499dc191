use crate::enums::{HttpMethod, MethodSet};
use crate::pattern::CompiledPattern;
use crate::types::{Priority, RouteId};

use super::RouteHandler;

/// How the handler layer should treat output written directly by a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum OutputBuffering {
    Disabled,
    Prepend,
    #[default]
    Append,
}

#[derive(Debug, Clone)]
pub struct Route<H> {
    id: RouteId,
    methods: MethodSet,
    pattern: CompiledPattern,
    handler: RouteHandler<H>,
    priority: Priority,
    groups: Vec<String>,
    name: Option<String>,
    output_buffering: OutputBuffering,
}

impl<H> Route<H> {
    pub(crate) fn new(
        id: RouteId,
        methods: MethodSet,
        pattern: CompiledPattern,
        handler: RouteHandler<H>,
        priority: Priority,
        groups: Vec<String>,
    ) -> Self {
        Self {
            id,
            methods,
            pattern,
            handler,
            priority,
            groups,
            name: None,
            output_buffering: OutputBuffering::default(),
        }
    }

    pub fn id(&self) -> RouteId {
        self.id
    }

    pub fn methods(&self) -> MethodSet {
        self.methods
    }

    pub fn allows(&self, method: HttpMethod) -> bool {
        self.methods.contains_method(method)
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub(crate) fn compiled(&self) -> &CompiledPattern {
        &self.pattern
    }

    pub fn handler(&self) -> &RouteHandler<H> {
        &self.handler
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Patterns of the enclosing groups, outermost first.
    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name<S: Into<String>>(&mut self, name: S) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    pub fn output_buffering(&self) -> OutputBuffering {
        self.output_buffering
    }

    pub fn set_output_buffering(&mut self, mode: OutputBuffering) -> &mut Self {
        self.output_buffering = mode;
        self
    }
}
