use crate::interpreter::value::core::Value;

/// The fixed table of pre-seeded named constants.
///
/// Values match the CODATA reference literals; the speed of light is exact
/// by definition and stays an integer.
pub const CONSTANTS: &[(&str, Value)] = &[("pi", Value::Real(std::f64::consts::PI)),
                                          ("e", Value::Real(std::f64::consts::E)),
                                          ("c", Value::Integer(299_792_458)),
                                          ("g", Value::Real(9.80665)),
                                          ("h", Value::Real(6.626_070_15e-34)),
                                          ("G", Value::Real(6.674_30e-11)),
                                          ("Na", Value::Real(6.022_140_76e23)),
                                          ("kb", Value::Real(1.380_649e-23))];

/// The live mapping of variable names to values used during evaluation.
///
/// Names are case-sensitive and unique. Entries keep their insertion order,
/// which is what a caller persisting the final state gets back. Seeded
/// constants are ordinary entries: an assignment to `pi` shadows the
/// constant for the rest of the run. There is no removal operation.
///
/// The environment is plain single-threaded mutable state; the script
/// processor mutates it through assignments and the evaluator only reads it.
/// Concurrent runs need independent instances.
#[derive(Debug, Clone)]
pub struct Environment {
    entries: Vec<(String, Value)>,
}

impl Environment {
    /// Creates an environment pre-seeded with the constant table.
    ///
    /// # Example
    /// ```
    /// use numera::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let env = Environment::new();
    /// assert_eq!(env.get("pi"), Some(Value::Real(std::f64::consts::PI)));
    /// assert_eq!(env.get("c"), Some(Value::Integer(299_792_458)));
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let entries = CONSTANTS.iter()
                               .map(|(name, value)| ((*name).to_string(), *value))
                               .collect();
        Self { entries }
    }

    /// Creates a seeded environment and applies the given bindings on top,
    /// in order. This is the load half of external persistence.
    pub fn from_entries<I, S>(bindings: I) -> Self
        where I: IntoIterator<Item = (S, Value)>,
              S: Into<String>
    {
        let mut env = Self::new();
        for (name, value) in bindings {
            env.set(&name.into(), value);
        }
        env
    }

    /// Looks up a variable by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, value)| *value)
    }

    /// Binds `name` to `value`, overwriting any existing binding in place
    /// (the entry keeps its original position in the order).
    pub fn set(&mut self, name: &str, value: Value) {
        if let Some(entry) = self.entries
                                 .iter_mut()
                                 .find(|(entry, _)| entry == name)
        {
            entry.1 = value;
        } else {
            self.entries.push((name.to_string(), value));
        }
    }

    /// Iterates over all bindings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Value)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// Iterates over the bindings that differ from the seeded constant
    /// table: variables the user created, plus constants they shadowed.
    /// This is what a session store persists; untouched constants are
    /// re-seeded on load instead.
    pub fn user_entries(&self) -> impl Iterator<Item = (&str, Value)> {
        self.iter().filter(|(name, value)| {
                       CONSTANTS.iter()
                                .find(|(constant, _)| constant == name)
                                .is_none_or(|(_, seeded)| seeded != value)
                   })
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_preserves_insertion_order() {
        let mut env = Environment::new();
        env.set("x", Value::Integer(1));
        env.set("y", Value::Integer(2));
        env.set("x", Value::Integer(3));

        let user: Vec<_> = env.user_entries().collect();
        assert_eq!(user, vec![("x", Value::Integer(3)), ("y", Value::Integer(2))]);
    }

    #[test]
    fn constants_are_shadowable() {
        let mut env = Environment::new();
        env.set("pi", Value::Integer(3));
        assert_eq!(env.get("pi"), Some(Value::Integer(3)));
        assert_eq!(env.user_entries().count(), 1);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let env = Environment::new();
        assert!(env.get("G").is_some());
        assert!(env.get("Pi").is_none());
    }
}
