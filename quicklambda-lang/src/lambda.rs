use std::{fmt, sync::Arc};

use quicklambda_base::Result;

use crate::Value;

type Body = dyn Fn(&[Value]) -> Result<Value> + Send + Sync;

/// A callable with a display name. The name is only ever used for display;
/// calling forwards the arguments to the body untouched.
#[derive(Clone)]
pub struct Lambda {
    body: Arc<Body>,
    name: Arc<str>,
}

impl Lambda {
    pub fn new<F>(name: impl Into<Arc<str>>, body: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        Lambda {
            body: Arc::new(body),
            name: name.into(),
        }
    }

    /// Named after the type of `body`, which for a closure is the path of
    /// the item it was written in.
    pub fn from_fn<F>(body: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        Lambda::new(std::any::type_name::<F>(), body)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn call(&self, args: &[Value]) -> Result<Value> {
        (self.body)(args)
    }

    pub fn ptr_eq(&self, other: &Lambda) -> bool {
        Arc::ptr_eq(&self.body, &other.body)
    }
}

impl fmt::Debug for Lambda {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Display for Lambda {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
